//! Proptest strategies for placements.
use crate::domain::{Affine, Cuboid, Hyperball, SimplexVertices};
use ::proptest::collection::vec;
use ::proptest::prelude::*;
use nalgebra::{DMatrix, DVector};

/// Coordinates are drawn from `[-10, 10]`, so that placed integrals stay well away from
/// overflow and catastrophic cancellation.
fn coordinate() -> impl Strategy<Value = f64> {
    -10.0..10.0
}

pub fn point(dim: usize) -> impl Strategy<Value = DVector<f64>> {
    vec(coordinate(), dim).prop_map(DVector::from_vec)
}

/// Balls with radius in `[0.1, 10]`.
pub fn hyperball(dim: usize) -> impl Strategy<Value = Hyperball> {
    (point(dim), 0.1..10.0).prop_map(|(center, radius)| Hyperball::new(center, radius))
}

/// Boxes whose side lengths lie in `[0.1, 10]`.
pub fn cuboid(dim: usize) -> impl Strategy<Value = Cuboid> {
    (point(dim), vec(0.1..10.0, dim)).prop_map(|(lower, sides)| {
        let upper = &lower + DVector::from_vec(sides);
        Cuboid::new(lower, upper)
    })
}

/// Affine maps that are comfortably invertible.
///
/// The matrix is a diagonally dominant perturbation of a positive multiple of the identity,
/// so its determinant is bounded away from zero.
pub fn affine(dim: usize) -> impl Strategy<Value = Affine> {
    (vec(-0.25..0.25, dim * dim), 1.0..4.0, point(dim)).prop_map(move |(entries, scale, offset)| {
        let perturbation = DMatrix::from_vec(dim, dim, entries) / dim as f64;
        let matrix = DMatrix::identity(dim, dim) * scale + perturbation;
        Affine::new(matrix, offset)
    })
}

/// Non-degenerate simplices, obtained by mapping the reference simplex with [`affine`].
pub fn simplex_vertices(dim: usize) -> impl Strategy<Value = SimplexVertices> {
    affine(dim).prop_map(move |affine| {
        let mut vertices = vec![affine.offset.clone()];
        vertices.extend((0..dim).map(|i| affine.matrix.column(i) + &affine.offset));
        SimplexVertices::new(vertices)
    })
}
