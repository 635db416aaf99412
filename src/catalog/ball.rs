//! Rules for the unit ball, including the disk.
use super::{check_dim, pow2, ratio, sqrt, stroud_1971};
use crate::domain::Ball;
use crate::error::Error;
use crate::Scheme;
use cubature_symmetry::{expand_all, NdOrbit, NdShape, Numeric, PlaneOrbit, SpaceOrbit};

const MAX_SIGN_DIM: usize = 24;

/// A centre point and the six vertices of the octahedron, of degree 3 (Stroud's `S3 3-1`).
///
/// This is the rule `{zero3: [[2/5]], symm_r00: [[1/10, 1]]}`.
pub fn centered_octahedron_3<T: Numeric>() -> Result<Scheme<Ball>, Error> {
    let rule = expand_all([
        (ratio(2, 5), SpaceOrbit::Zero3),
        (ratio(1, 10), SpaceOrbit::SymmR00(T::one())),
    ])?;
    Scheme::builder("centered_octahedron_3", Ball::new(3), 3)
        .source(stroud_1971())
        .build_from_rule(rule)
}

/// Stroud's `S2 3-1` for the disk: four points on the axes, of degree 3.
pub fn stroud_s2_3_1<T: Numeric>() -> Result<Scheme<Ball>, Error> {
    let name = "stroud_s2_3_1";
    let a = sqrt(name, ratio::<T>(1, 2))?;
    let rule = expand_all([(ratio(1, 4), PlaneOrbit::D4A0(a))])?;
    Scheme::builder(name, Ball::new(2), 3)
        .source(stroud_1971())
        .build_from_rule(rule)
}

/// Stroud's `S2 3-2` for the disk: four points on the diagonals, of degree 3.
pub fn stroud_s2_3_2<T: Numeric>() -> Result<Scheme<Ball>, Error> {
    let rule = expand_all([(ratio::<T>(1, 4), PlaneOrbit::D4Aa(ratio(1, 2)))])?;
    Scheme::builder("stroud_s2_3_2", Ball::new(2), 3)
        .source(stroud_1971())
        .build_from_rule(rule)
}

/// Stroud's `Sn 3-1`: `2n` points on the axes, of degree 3.
pub fn stroud_sn_3_1<T: Numeric>(dim: usize) -> Result<Scheme<Ball>, Error> {
    let name = "stroud_sn_3_1";
    check_dim(name, dim, 1, usize::MAX)?;
    let n = dim as i64;
    let r = sqrt(name, ratio::<T>(n, n + 2))?;
    let rule = expand_all([(ratio(1, 2 * n), NdOrbit::new(dim, NdShape::FsdR(r))?)])?;
    Scheme::builder(name, Ball::new(dim), 3)
        .source(stroud_1971())
        .build_from_rule(rule)
}

/// A centre point, `2n` points on the axes and `2^n` points on the diagonals, of degree 5.
///
/// The axis points always lie inside the ball. The diagonal points lie on the sphere for `n = 4`
/// and outside the ball for `n > 4`, where the centre weight is also negative.
pub fn sn_5_axes_cube<T: Numeric>(dim: usize) -> Result<Scheme<Ball>, Error> {
    let name = "sn_5_axes_cube";
    check_dim(name, dim, 2, MAX_SIGN_DIM)?;
    let n = dim as i64;
    let r = sqrt(name, ratio::<T>(4, n + 4))?;
    let s = sqrt(name, ratio::<T>(2, n + 4))?;
    let rule = expand_all([
        (ratio(4 - n, 8), NdOrbit::new(dim, NdShape::Zero)?),
        (ratio(n + 4, 16 * (n + 2)), NdOrbit::new(dim, NdShape::FsdR(r))?),
        (ratio(n + 4, 4 * (n + 2) * pow2(name, dim)?), NdOrbit::new(dim, NdShape::PmAll(s))?),
    ])?;
    Scheme::builder(name, Ball::new(dim), 5).build_from_rule(rule)
}
