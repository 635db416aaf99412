//! Rules for the tetrahedron, with points in barycentric coordinates.
use super::{hammer_marlowe_stroud_1956, ratio, sqrt};
use crate::domain::Simplex;
use crate::error::Error;
use crate::Scheme;
use cubature_symmetry::{expand_all, Numeric, TetrahedronOrbit};

pub fn centroid<T: Numeric>() -> Result<Scheme<Simplex>, Error> {
    let rule = expand_all([(T::one(), TetrahedronOrbit::Centroid)])?;
    Scheme::builder("centroid", Simplex::tetrahedron(), 1)
        .source(hammer_marlowe_stroud_1956())
        .build_from_rule(rule)
}

pub fn vertices<T: Numeric>() -> Result<Scheme<Simplex>, Error> {
    let rule = expand_all([(ratio::<T>(1, 4), TetrahedronOrbit::Vertex)])?;
    Scheme::builder("vertices", Simplex::tetrahedron(), 1).build_from_rule(rule)
}

/// Four interior points, of degree 2.
pub fn hammer_marlowe_stroud_2<T: Numeric>() -> Result<Scheme<Simplex>, Error> {
    let name = "hammer_marlowe_stroud_2";
    let root = sqrt(name, ratio::<T>(5, 1))?;
    let a = (ratio::<T>(5, 1) - root) / ratio(20, 1);
    let rule = expand_all([(ratio(1, 4), TetrahedronOrbit::S31(a))])?;
    Scheme::builder(name, Simplex::tetrahedron(), 2)
        .source(hammer_marlowe_stroud_1956())
        .build_from_rule(rule)
}

/// Five points with a negative centroid weight, of degree 3.
pub fn hammer_marlowe_stroud_3<T: Numeric>() -> Result<Scheme<Simplex>, Error> {
    let rule = expand_all([
        (ratio::<T>(-4, 5), TetrahedronOrbit::Centroid),
        (ratio(9, 20), TetrahedronOrbit::S31(ratio(1, 6))),
    ])?;
    Scheme::builder("hammer_marlowe_stroud_3", Simplex::tetrahedron(), 3)
        .source(hammer_marlowe_stroud_1956())
        .build_from_rule(rule)
}
