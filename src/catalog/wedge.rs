//! Rules for the wedge, built as products of a triangle rule and a Gauss-Legendre rule.
use super::triangle::radon_5;
use crate::domain::{Domain, Simplex, Wedge};
use crate::error::Error;
use crate::Scheme;
use cubature_symmetry::univariate::try_gauss;
use std::cmp::min;

/// The product of a triangle scheme with the `num_points` Gauss-Legendre rule along `z`.
///
/// A barycentric point `(l_0, l_1, l_2)` of the triangle becomes the base point `(l_1, l_2)`.
pub fn product(triangle: &Scheme<Simplex>, num_points: usize) -> Result<Scheme<Wedge>, Error> {
    let name = format!("{}_x_gauss_{num_points}", triangle.name());
    if triangle.domain().dim != 2 {
        return Err(Error::DomainMismatch {
            expected: "triangle".to_string(),
            found: triangle.domain().name().to_string(),
        });
    }
    let (line_weights, line_points) =
        try_gauss(num_points).ok_or_else(|| Error::invalid_parameter(&name, "at least one point is required"))?;

    let mut weights = Vec::with_capacity(triangle.len() * num_points);
    let mut points = Vec::with_capacity(triangle.len() * num_points);
    for (w, p) in triangle.weights().iter().zip(triangle.points()) {
        for (v, z) in line_weights.iter().zip(&line_points) {
            weights.push(w * v / 2.0);
            points.push(vec![p[1], p[2], z[0]]);
        }
    }

    let degree = min(triangle.degree(), 2 * num_points - 1);
    let mut builder = Scheme::builder(name, Wedge, degree);
    if let Some(source) = triangle.source() {
        builder = builder.source(source.clone());
    }
    builder.build(weights, points)
}

/// Radon's degree 5 triangle rule combined with three Gauss points, 21 points of degree 5.
pub fn radon_gauss_5() -> Result<Scheme<Wedge>, Error> {
    product(&radon_5::<f64>()?, 3)
}
