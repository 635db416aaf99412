//! Symmetry-orbit expansion for cubature rules.
//!
//! Most published cubature rules are not tabulated point by point. Instead, a rule is given as
//! a short list of generators: a weight, a handful of scalar parameters and the name of a
//! symmetry orbit. This crate turns such a description into explicit points and weights.
//!
//! The orbit families are closed enums ([`PlaneOrbit`], [`SpaceOrbit`], [`NdOrbit`],
//! [`TriangleOrbit`], [`TetrahedronOrbit`]), so a rule written in Rust can never name an orbit
//! that does not exist. String tags are only resolved at the boundary, when rules are loaded
//! from tag-keyed data (see [`expand_tagged`]).
//!
//! All expansion code is generic over [`Numeric`], so the same orbit is produced in floating
//! point or in exact rational arithmetic depending on the type of the parameters.
//!
//! The crate also provides Gauss-Legendre rules for the interval and tensor products of
//! rules, which are the building blocks of the hypercube rules.

pub mod numeric;
pub mod orbit;
pub mod tensor;
pub mod univariate;

#[cfg(feature = "proptest-support")]
pub mod proptest;

mod expand;

pub use expand::*;
pub use numeric::Numeric;
pub use orbit::{NdOrbit, NdShape, PlaneOrbit, SpaceOrbit, Symmetry, TetrahedronOrbit, TriangleOrbit};

/// Errors produced while expanding symmetry orbits.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    /// The tag does not name an orbit of the requested family or dimension.
    #[error("unknown symmetry tag `{tag}` for ambient dimension {dim}")]
    UnknownSymmetryTag { tag: String, dim: usize },
    /// The number of generator parameters does not match the arity of the tag.
    #[error("symmetry tag `{tag}` takes {expected} parameter(s), but {found} were given")]
    ArityMismatch { tag: String, expected: usize, found: usize },
    /// A generator row did not even contain a weight.
    #[error("generator row for symmetry tag `{tag}` is missing its weight")]
    MissingWeight { tag: String },
    /// The orbit exists, but is not defined in the given dimension.
    #[error("symmetry tag `{tag}` is not defined in dimension {dim}")]
    UnsupportedDimension { tag: String, dim: usize },
    /// No generator produced any points.
    #[error("the generator entries do not produce any points")]
    EmptyScheme,
}

/// A point, stored as its coordinates in the reference frame of the domain.
///
/// For simplex domains the coordinates are barycentric.
pub type Point<T> = Vec<T>;

/// A rule, given as a pair of weights and points of equal length.
pub type Rule<T> = (Vec<T>, Vec<Point<T>>);
