//! Rules for the hypercube `[-1, 1]^n`.
use super::{check_dim, pow2, ratio, sqrt, stroud_1971};
use crate::domain::Cube;
use crate::error::Error;
use crate::Scheme;
use cubature_symmetry::tensor::cube_gauss;
use cubature_symmetry::univariate::try_gauss;
use cubature_symmetry::{expand_all, NdOrbit, NdShape, Numeric};

/// Orbits with all sign combinations are only expanded up to this dimension.
const MAX_SIGN_DIM: usize = 24;

/// The centroid rule, of degree 1.
pub fn centroid<T: Numeric>(dim: usize) -> Result<Scheme<Cube>, Error> {
    check_dim("centroid", dim, 1, usize::MAX)?;
    Scheme::builder("centroid", Cube::new(dim), 1).build(vec![T::one()], vec![vec![T::zero(); dim]])
}

/// The tensor product of Gauss-Legendre rules with `num_points` points per axis.
///
/// The degree is `2 num_points - 1`.
pub fn gauss_product(dim: usize, num_points: usize) -> Result<Scheme<Cube>, Error> {
    let name = format!("gauss_product_{num_points}");
    check_dim(&name, dim, 1, usize::MAX)?;
    if try_gauss(num_points).is_none() {
        return Err(Error::invalid_parameter(&name, "at least one point per axis is required"));
    }
    let (weights, points) = cube_gauss(dim, num_points);
    let scale = 2f64.powi(dim as i32);
    let weights = weights.into_iter().map(|w| w / scale).collect();
    Scheme::builder(name, Cube::new(dim), 2 * num_points - 1).build(weights, points)
}

/// Stroud's `Cn 3-1`: `2n` points on the axes, of degree 3.
///
/// The points lie outside the cube when `n > 3`.
pub fn stroud_cn_3_1<T: Numeric>(dim: usize) -> Result<Scheme<Cube>, Error> {
    let name = "stroud_cn_3_1";
    check_dim(name, dim, 1, usize::MAX)?;
    let n = dim as i64;
    let r = sqrt(name, ratio::<T>(n, 3))?;
    let rule = expand_all([(ratio(1, 2 * n), NdOrbit::new(dim, NdShape::FsdR(r))?)])?;
    Scheme::builder(name, Cube::new(dim), 3)
        .source(stroud_1971())
        .build_from_rule(rule)
}

/// The tensor-product Gauss rule of degree 5 with the points off the axes and the diagonals
/// removed, so that `1 + 2n + 2^n` points remain.
///
/// The centre weight is negative when `n > 2`.
pub fn cn_5_reduced<T: Numeric>(dim: usize) -> Result<Scheme<Cube>, Error> {
    let name = "cn_5_reduced";
    check_dim(name, dim, 2, MAX_SIGN_DIM)?;
    let n = dim as i64;
    let r = sqrt(name, ratio::<T>(3, 5))?;
    let rule = expand_all([
        (ratio(56 - 20 * n, 81), NdOrbit::new(dim, NdShape::Zero)?),
        (ratio(10, 81), NdOrbit::new(dim, NdShape::FsdR(r.clone()))?),
        (ratio(25, 81 * pow2(name, dim)?), NdOrbit::new(dim, NdShape::PmAll(r))?),
    ])?;
    Scheme::builder(name, Cube::new(dim), 5).build_from_rule(rule)
}
