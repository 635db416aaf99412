//! Symmetry orbits and their point generators.
//!
//! Every orbit family is a closed enum whose variants carry exactly the generator parameters
//! the orbit needs. Expansion is a pure function of the variant, and the order of the produced
//! points is fixed:
//!
//! - sign patterns enumerate the first coordinate fastest, `+` before `-`,
//! - axes and axis pairs are enumerated in lexicographic order.
//!
//! The plane and space families are thin, named specializations of the dimension-parametric
//! [`NdOrbit`], and produce exactly the same points as the corresponding `NdOrbit` shapes.

use crate::{Error, Numeric, Point};

mod nd;
mod plane;
mod simplex;
mod space;

pub use nd::{NdOrbit, NdShape};
pub use plane::PlaneOrbit;
pub use simplex::{TetrahedronOrbit, TriangleOrbit};
pub use space::SpaceOrbit;

/// A symmetry orbit: a generator together with the group that acts on it.
pub trait Symmetry<T: Numeric>: Sized {
    /// The tag naming the orbit shape in tag-keyed rule data.
    fn tag(&self) -> &'static str;

    /// The number of coordinates of each point.
    fn ambient_dim(&self) -> usize;

    /// The number of scalar generator parameters.
    fn arity(&self) -> usize;

    /// The number of points the orbit expands to.
    fn orbit_size(&self) -> usize;

    /// Expands the orbit into its points, in canonical order.
    fn expand(&self) -> Vec<Point<T>>;

    /// Resolves a tag and its generator parameters into an orbit of this family.
    fn from_tag(dim: usize, tag: &str, params: &[T]) -> Result<Self, Error>;
}

/// Takes exactly `N` parameters for the given tag.
pub(crate) fn take_params<'a, T, const N: usize>(tag: &str, params: &'a [T]) -> Result<&'a [T; N], Error> {
    <&[T; N]>::try_from(params).map_err(|_| Error::ArityMismatch {
        tag: tag.to_string(),
        expected: N,
        found: params.len(),
    })
}

pub(crate) fn check_dim(tag: &str, dim: usize, expected: usize) -> Result<(), Error> {
    if dim == expected {
        Ok(())
    } else {
        Err(Error::UnsupportedDimension {
            tag: tag.to_string(),
            dim,
        })
    }
}

/// All sign combinations of the given values, first coordinate fastest.
pub(crate) fn sign_combinations<T: Numeric>(values: &[T]) -> Vec<Point<T>> {
    let n = values.len();
    (0..1usize << n)
        .map(|pattern| {
            values
                .iter()
                .enumerate()
                .map(|(i, v)| {
                    if (pattern >> i) & 1 == 1 {
                        -v.clone()
                    } else {
                        v.clone()
                    }
                })
                .collect()
        })
        .collect()
}
