//! Rules for the triangle, with points in barycentric coordinates.
use super::{hammer_marlowe_stroud_1956, ratio, sqrt, stroud_1971};
use crate::domain::Simplex;
use crate::error::Error;
use crate::Scheme;
use cubature_symmetry::{expand_all, Numeric, TriangleOrbit};

/// The centroid rule, of degree 1.
pub fn centroid<T: Numeric>() -> Result<Scheme<Simplex>, Error> {
    let rule = expand_all([(T::one(), TriangleOrbit::Centroid)])?;
    Scheme::builder("centroid", Simplex::triangle(), 1)
        .source(hammer_marlowe_stroud_1956())
        .build_from_rule(rule)
}

/// The three vertices with equal weights, of degree 1.
pub fn vertices<T: Numeric>() -> Result<Scheme<Simplex>, Error> {
    let rule = expand_all([(ratio::<T>(1, 3), TriangleOrbit::Vertex)])?;
    Scheme::builder("vertices", Simplex::triangle(), 1).build_from_rule(rule)
}

/// The three edge midpoints with equal weights, of degree 2.
pub fn edge_midpoints<T: Numeric>() -> Result<Scheme<Simplex>, Error> {
    let rule = expand_all([(ratio::<T>(1, 3), TriangleOrbit::D3Aa(ratio(1, 2)))])?;
    Scheme::builder("edge_midpoints", Simplex::triangle(), 2).build_from_rule(rule)
}

/// Three interior points, of degree 2.
pub fn hammer_marlowe_stroud_2<T: Numeric>() -> Result<Scheme<Simplex>, Error> {
    let rule = expand_all([(ratio::<T>(1, 3), TriangleOrbit::D3Aa(ratio(1, 6)))])?;
    Scheme::builder("hammer_marlowe_stroud_2", Simplex::triangle(), 2)
        .source(hammer_marlowe_stroud_1956())
        .build_from_rule(rule)
}

/// Four points with a negative centroid weight, of degree 3.
pub fn hammer_marlowe_stroud_3<T: Numeric>() -> Result<Scheme<Simplex>, Error> {
    let rule = expand_all([
        (ratio::<T>(-27, 48), TriangleOrbit::Centroid),
        (ratio(25, 48), TriangleOrbit::D3Aa(ratio(1, 5))),
    ])?;
    Scheme::builder("hammer_marlowe_stroud_3", Simplex::triangle(), 3)
        .source(hammer_marlowe_stroud_1956())
        .build_from_rule(rule)
}

/// Radon's seven-point rule, of degree 5 (Stroud's `T2 5-1`).
pub fn radon_5<T: Numeric>() -> Result<Scheme<Simplex>, Error> {
    let name = "radon_5";
    let root = sqrt(name, ratio::<T>(15, 1))?;
    let a = (ratio::<T>(6, 1) - root.clone()) / ratio(21, 1);
    let b = (ratio::<T>(6, 1) + root.clone()) / ratio(21, 1);
    let wa = (ratio::<T>(155, 1) - root.clone()) / ratio(1200, 1);
    let wb = (ratio::<T>(155, 1) + root) / ratio(1200, 1);
    let rule = expand_all([
        (ratio(9, 40), TriangleOrbit::Centroid),
        (wa, TriangleOrbit::D3Aa(a)),
        (wb, TriangleOrbit::D3Aa(b)),
    ])?;
    Scheme::builder(name, Simplex::triangle(), 5)
        .source(stroud_1971())
        .build_from_rule(rule)
}
