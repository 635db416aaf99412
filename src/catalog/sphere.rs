//! Rules for the unit sphere, including the circle.
use super::{check_dim, pow2, ratio, sqrt, stroud_1971};
use crate::domain::Sphere;
use crate::error::Error;
use crate::Scheme;
use cubature_symmetry::{expand_all, NdOrbit, NdShape, Numeric, SpaceOrbit};
use std::f64::consts::PI;

const MAX_SIGN_DIM: usize = 24;

/// `num_points` equispaced points on the circle, of degree `num_points - 1`.
pub fn equispaced_circle(num_points: usize) -> Result<Scheme<Sphere>, Error> {
    let name = "equispaced_circle";
    if num_points == 0 {
        return Err(Error::invalid_parameter(name, "at least one point is required"));
    }
    let m = num_points as f64;
    let points = (0..num_points)
        .map(|k| {
            let angle = 2.0 * PI * k as f64 / m;
            vec![angle.cos(), angle.sin()]
        })
        .collect();
    let weights = vec![1.0 / m; num_points];
    Scheme::builder(format!("{name}_{num_points}"), Sphere::new(2), num_points - 1).build(weights, points)
}

/// The six vertices of the octahedron, of degree 3.
pub fn octahedron<T: Numeric>() -> Result<Scheme<Sphere>, Error> {
    let rule = expand_all([(ratio(1, 6), SpaceOrbit::SymmR00(T::one()))])?;
    Scheme::builder("octahedron", Sphere::new(3), 3)
        .source(stroud_1971())
        .build_from_rule(rule)
}

/// Stroud's `Un 3-1`: the `2n` unit vectors, of degree 3.
pub fn stroud_un_3_1<T: Numeric>(dim: usize) -> Result<Scheme<Sphere>, Error> {
    let name = "stroud_un_3_1";
    check_dim(name, dim, 2, usize::MAX)?;
    let n = dim as i64;
    let rule = expand_all([(ratio(1, 2 * n), NdOrbit::new(dim, NdShape::FsdR(T::one()))?)])?;
    Scheme::builder(name, Sphere::new(dim), 3)
        .source(stroud_1971())
        .build_from_rule(rule)
}

/// Stroud's `Un 3-2`: the `2^n` normalized diagonals, of degree 3.
pub fn stroud_un_3_2<T: Numeric>(dim: usize) -> Result<Scheme<Sphere>, Error> {
    let name = "stroud_un_3_2";
    check_dim(name, dim, 2, MAX_SIGN_DIM)?;
    let r = sqrt(name, ratio::<T>(1, dim as i64))?;
    let rule = expand_all([(ratio(1, pow2(name, dim)?), NdOrbit::new(dim, NdShape::PmAll(r))?)])?;
    Scheme::builder(name, Sphere::new(dim), 3)
        .source(stroud_1971())
        .build_from_rule(rule)
}

/// The `2n` unit vectors together with the `2^n` normalized diagonals, of degree 5.
///
/// On the circle the eight points are equispaced, so the rule is of degree 7 there, although
/// degree 5 is claimed for all dimensions.
pub fn un_5_axes_cube<T: Numeric>(dim: usize) -> Result<Scheme<Sphere>, Error> {
    let name = "un_5_axes_cube";
    check_dim(name, dim, 2, MAX_SIGN_DIM)?;
    let n = dim as i64;
    let r = sqrt(name, ratio::<T>(1, n))?;
    let rule = expand_all([
        (ratio(1, n * (n + 2)), NdOrbit::new(dim, NdShape::FsdR(T::one()))?),
        (ratio(n, (n + 2) * pow2(name, dim)?), NdOrbit::new(dim, NdShape::PmAll(r))?),
    ])?;
    let builder = if dim == 2 {
        Scheme::builder(name, Sphere::new(dim), 7).claimed_degree(5, "equispaced on the circle, which gives degree 7")
    } else {
        Scheme::builder(name, Sphere::new(dim), 5)
    };
    builder.build_from_rule(rule)
}
