//! A catalog of cubature rules for standard integration domains.
//!
//! A cubature rule approximates the integral of a function over a domain by a weighted sum of
//! function values at a fixed set of points. This crate provides published rules for intervals,
//! hypercubes, balls, spheres, simplices and wedges, together with the machinery to construct
//! new rules from their symmetric description.
//!
//! - [`domain`] defines the reference domains and how they are placed in space.
//! - [`scheme`] defines [`Scheme`], an immutable rule with provenance that can integrate
//!   functions over placed domains.
//! - [`catalog`] contains the rules, and [`registry`] looks them up by name.
//!
//! Most rules are defined through symmetry orbits (see [`symmetry`]), and some are loaded from
//! JSON records (see [`records`]). For example, integrating over a ball of radius 2:
//!
//! ```
//! use cubature::catalog::ball;
//! use cubature::domain::Hyperball;
//! use nalgebra::DVector;
//!
//! let scheme = ball::centered_octahedron_3::<f64>().unwrap();
//! let placement = Hyperball::new(DVector::zeros(3), 2.0);
//! let volume = scheme.integrate(|_| 1.0, &placement);
//! assert!((volume - 32.0 * std::f64::consts::PI / 3.0).abs() < 1e-12);
//! ```

pub mod catalog;
pub mod domain;
pub mod error;
pub mod registry;
pub mod scheme;

#[cfg(feature = "proptest")]
pub mod proptest;

pub mod symmetry {
    pub use cubature_symmetry::*;
}

pub mod records {
    pub use cubature_records::*;
}

pub extern crate nalgebra;

pub use error::Error;
pub use scheme::{ExactRule, Quadrature, Scheme, SchemeBuilder, SchemeReport};

/// The tolerance used for degree-of-exactness tests unless a scheme declares its own.
pub const DEFAULT_TEST_TOLERANCE: f64 = 1e-12;

/// Test tolerances above this threshold mark a scheme as low precision.
pub const LOW_PRECISION_THRESHOLD: f64 = 1e-10;
