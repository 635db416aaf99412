//! Lookup of catalog rules by name.
//!
//! Names are prefixed by the domain, as in `"ball/centered_octahedron_3"`. Every constructor
//! takes the ambient dimension, and rules that are only defined in a fixed dimension reject any
//! other. Rules known under several names in the literature are registered once and reached
//! through aliases. The one exception is `ball/stroud_s3_3_1`, which is built from its bundled
//! exact record and yields the same points and weights as `ball/centered_octahedron_3`, so that
//! the record path can be reached by name.
//!
//! The registry is built on first use and is read-only afterwards. Rules are constructed in
//! floating-point arithmetic; use the generic constructors in [`catalog`](crate::catalog) for
//! exact coefficients.
use crate::catalog::{self, ball, cube, interval, records, sphere, tetrahedron, triangle, wedge};
use crate::domain::{Ball, Cube, Domain, Simplex, Sphere, Wedge};
use crate::error::Error;
use crate::scheme::{Quadrature, Scheme, SchemeReport};
use cubature_records::Citation;
use itertools::Itertools;
use log::debug;
use nalgebra::DVector;
use rustc_hash::FxHashMap;
use std::fmt;
use std::fmt::{Display, Formatter};
use std::sync::OnceLock;

/// A scheme on any of the reference domains.
#[derive(Debug, Clone, PartialEq)]
pub enum AnyScheme {
    Cube(Scheme<Cube>),
    Ball(Scheme<Ball>),
    Sphere(Scheme<Sphere>),
    Simplex(Scheme<Simplex>),
    Wedge(Scheme<Wedge>),
}

macro_rules! dispatch {
    ($self:expr, $scheme:ident => $body:expr) => {
        match $self {
            AnyScheme::Cube($scheme) => $body,
            AnyScheme::Ball($scheme) => $body,
            AnyScheme::Sphere($scheme) => $body,
            AnyScheme::Simplex($scheme) => $body,
            AnyScheme::Wedge($scheme) => $body,
        }
    };
}

macro_rules! impl_any_scheme_variant {
    ($variant:ident, $domain:ty, $into:ident) => {
        impl From<Scheme<$domain>> for AnyScheme {
            fn from(scheme: Scheme<$domain>) -> Self {
                Self::$variant(scheme)
            }
        }

        impl AnyScheme {
            pub fn $into(self) -> Option<Scheme<$domain>> {
                match self {
                    Self::$variant(scheme) => Some(scheme),
                    _ => None,
                }
            }
        }
    };
}

impl_any_scheme_variant!(Cube, Cube, into_cube);
impl_any_scheme_variant!(Ball, Ball, into_ball);
impl_any_scheme_variant!(Sphere, Sphere, into_sphere);
impl_any_scheme_variant!(Simplex, Simplex, into_simplex);
impl_any_scheme_variant!(Wedge, Wedge, into_wedge);

impl AnyScheme {
    pub fn name(&self) -> &str {
        dispatch!(self, s => s.name())
    }

    pub fn degree(&self) -> usize {
        dispatch!(self, s => s.degree())
    }

    pub fn len(&self) -> usize {
        dispatch!(self, s => s.len())
    }

    pub fn is_empty(&self) -> bool {
        dispatch!(self, s => s.is_empty())
    }

    pub fn domain_name(&self) -> &'static str {
        dispatch!(self, s => s.domain().name())
    }

    pub fn ambient_dim(&self) -> usize {
        dispatch!(self, s => s.domain().ambient_dim())
    }

    pub fn test_tolerance(&self) -> f64 {
        dispatch!(self, s => s.test_tolerance())
    }

    pub fn source(&self) -> Option<&Citation> {
        dispatch!(self, s => s.source())
    }

    pub fn report(&self) -> SchemeReport {
        dispatch!(self, s => s.report())
    }

    /// Approximates the integral of `f` over the reference domain.
    pub fn integrate_reference<F>(&self, f: F) -> f64
    where
        F: Fn(&DVector<f64>) -> f64,
    {
        dispatch!(self, s => s.integrate_reference(f))
    }
}

impl Quadrature for AnyScheme {
    fn weights(&self) -> &[f64] {
        dispatch!(self, s => s.weights())
    }

    fn points(&self) -> &[DVector<f64>] {
        dispatch!(self, s => s.points())
    }
}

impl Display for AnyScheme {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        dispatch!(self, s => Display::fmt(s, f))
    }
}

type Constructor = fn(usize) -> Result<AnyScheme, Error>;

fn fixed(rule: &str, dim: usize, expected: usize) -> Result<(), Error> {
    catalog::check_dim(rule, dim, expected, expected)
}

macro_rules! fixed_dim {
    ($name:literal, $dim:literal, $constructor:expr) => {
        (
            $name,
            (|dim: usize| -> Result<AnyScheme, Error> {
                fixed($name, dim, $dim)?;
                Ok($constructor?.into())
            }) as Constructor,
        )
    };
}

macro_rules! any_dim {
    ($name:literal, $constructor:expr) => {
        (
            $name,
            (|dim: usize| -> Result<AnyScheme, Error> { Ok($constructor(dim)?.into()) }) as Constructor,
        )
    };
}

const RULES: &[(&str, Constructor)] = &[
    fixed_dim!("interval/midpoint", 1, interval::midpoint::<f64>()),
    fixed_dim!("interval/trapezoid", 1, interval::trapezoid::<f64>()),
    fixed_dim!("interval/simpson", 1, interval::simpson::<f64>()),
    fixed_dim!("interval/gauss_legendre_2", 1, interval::gauss_legendre(2)),
    fixed_dim!("interval/gauss_legendre_3", 1, interval::gauss_legendre(3)),
    fixed_dim!("interval/gauss_legendre_4", 1, interval::gauss_legendre(4)),
    fixed_dim!("interval/gauss_legendre_5", 1, interval::gauss_legendre(5)),
    any_dim!("cube/centroid", cube::centroid::<f64>),
    ("cube/gauss_product_2", (|dim: usize| -> Result<AnyScheme, Error> {
        Ok(cube::gauss_product(dim, 2)?.into())
    }) as Constructor),
    ("cube/gauss_product_3", (|dim: usize| -> Result<AnyScheme, Error> {
        Ok(cube::gauss_product(dim, 3)?.into())
    }) as Constructor),
    any_dim!("cube/stroud_cn_3_1", cube::stroud_cn_3_1::<f64>),
    any_dim!("cube/cn_5_reduced", cube::cn_5_reduced::<f64>),
    fixed_dim!("ball/centered_octahedron_3", 3, ball::centered_octahedron_3::<f64>()),
    fixed_dim!("ball/stroud_s2_3_1", 2, ball::stroud_s2_3_1::<f64>()),
    fixed_dim!("ball/stroud_s2_3_2", 2, ball::stroud_s2_3_2::<f64>()),
    any_dim!("ball/stroud_sn_3_1", ball::stroud_sn_3_1::<f64>),
    any_dim!("ball/sn_5_axes_cube", ball::sn_5_axes_cube::<f64>),
    fixed_dim!("ball/octahedral_cube_5", 3, records::octahedral_cube_5()),
    // Same rule as ball/centered_octahedron_3, loaded from its record
    fixed_dim!("ball/stroud_s3_3_1", 3, records::stroud_s3_3_1()),
    fixed_dim!("sphere/equispaced_circle_4", 2, sphere::equispaced_circle(4)),
    fixed_dim!("sphere/equispaced_circle_8", 2, sphere::equispaced_circle(8)),
    fixed_dim!("sphere/octahedron", 3, sphere::octahedron::<f64>()),
    any_dim!("sphere/stroud_un_3_1", sphere::stroud_un_3_1::<f64>),
    any_dim!("sphere/stroud_un_3_2", sphere::stroud_un_3_2::<f64>),
    any_dim!("sphere/un_5_axes_cube", sphere::un_5_axes_cube::<f64>),
    fixed_dim!("triangle/centroid", 2, triangle::centroid::<f64>()),
    fixed_dim!("triangle/vertices", 2, triangle::vertices::<f64>()),
    fixed_dim!("triangle/edge_midpoints", 2, triangle::edge_midpoints::<f64>()),
    fixed_dim!("triangle/hammer_marlowe_stroud_2", 2, triangle::hammer_marlowe_stroud_2::<f64>()),
    fixed_dim!("triangle/hammer_marlowe_stroud_3", 2, triangle::hammer_marlowe_stroud_3::<f64>()),
    fixed_dim!("triangle/radon_5", 2, triangle::radon_5::<f64>()),
    fixed_dim!("triangle/zienkiewicz_7", 2, records::zienkiewicz_7()),
    fixed_dim!("tetrahedron/centroid", 3, tetrahedron::centroid::<f64>()),
    fixed_dim!("tetrahedron/vertices", 3, tetrahedron::vertices::<f64>()),
    fixed_dim!("tetrahedron/hammer_marlowe_stroud_2", 3, tetrahedron::hammer_marlowe_stroud_2::<f64>()),
    fixed_dim!("tetrahedron/hammer_marlowe_stroud_3", 3, tetrahedron::hammer_marlowe_stroud_3::<f64>()),
    fixed_dim!("wedge/radon_gauss_5", 3, wedge::radon_gauss_5()),
];

/// Alternative names, mapped to the name the rule is registered under.
const ALIASES: &[(&str, &str)] = &[
    ("interval/gauss_legendre_1", "interval/midpoint"),
    ("sphere/stroud_u3_3_1", "sphere/octahedron"),
    ("triangle/hammer_marlowe_stroud_1", "triangle/centroid"),
    ("triangle/stroud_t2_5_1", "triangle/radon_5"),
    ("tetrahedron/hammer_marlowe_stroud_1", "tetrahedron/centroid"),
];

struct Registry {
    rules: FxHashMap<&'static str, Constructor>,
    aliases: FxHashMap<&'static str, &'static str>,
}

fn registry() -> &'static Registry {
    static REGISTRY: OnceLock<Registry> = OnceLock::new();
    REGISTRY.get_or_init(|| {
        let rules: FxHashMap<_, _> = RULES.iter().copied().collect();
        let aliases: FxHashMap<_, _> = ALIASES.iter().copied().collect();
        debug!("Initialized rule registry with {} rules and {} aliases", rules.len(), aliases.len());
        Registry { rules, aliases }
    })
}

/// The name a rule is registered under, following aliases.
pub fn resolve(name: &str) -> Result<&'static str, Error> {
    let registry = registry();
    let name = registry.aliases.get(name).copied().unwrap_or(name);
    registry
        .rules
        .get_key_value(name)
        .map(|(canonical, _)| *canonical)
        .ok_or_else(|| Error::UnknownRule { name: name.to_string() })
}

/// Constructs the rule with the given name in dimension `dim`.
pub fn get(name: &str, dim: usize) -> Result<AnyScheme, Error> {
    let canonical = resolve(name)?;
    debug!("Constructing rule {canonical} (requested as {name}) in dimension {dim}");
    let constructor = registry().rules[canonical];
    constructor(dim)
}

/// The registered names in lexicographic order, without aliases.
pub fn names() -> Vec<&'static str> {
    registry().rules.keys().copied().sorted_unstable().collect()
}

/// The aliases and the names they resolve to, in lexicographic order.
pub fn aliases() -> Vec<(&'static str, &'static str)> {
    registry()
        .aliases
        .iter()
        .map(|(alias, canonical)| (*alias, *canonical))
        .sorted_unstable()
        .collect()
}
