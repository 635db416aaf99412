//! Rules formed as tensor products of lower-dimensional rules.
//!
//! Hypercube and prism-like domains are Cartesian products of simpler domains, and a product of
//! rules for the factors is a rule for the product domain. The degree of exactness of the product
//! is the minimum of the degrees of its factors.

use crate::univariate::gauss;
use crate::{Numeric, Point, Rule};

/// The tensor product of the given rules.
///
/// Points are concatenations of the factor points, and weights are products of the factor
/// weights. The first factor varies slowest. The product of an empty list is the rule with a
/// single zero-dimensional point of unit weight.
pub fn tensor_product<T: Numeric>(rules: &[Rule<T>]) -> Rule<T> {
    let mut weights = vec![T::one()];
    let mut points: Vec<Point<T>> = vec![Vec::new()];

    for (factor_weights, factor_points) in rules {
        let capacity = weights.len() * factor_weights.len();
        let mut new_weights = Vec::with_capacity(capacity);
        let mut new_points = Vec::with_capacity(capacity);
        for (w, p) in weights.iter().zip(&points) {
            for (fw, fp) in factor_weights.iter().zip(factor_points) {
                new_weights.push(w.clone() * fw.clone());
                let mut point = p.clone();
                point.extend(fp.iter().cloned());
                new_points.push(point);
            }
        }
        weights = new_weights;
        points = new_points;
    }

    (weights, points)
}

/// A Gauss rule for the reference hypercube `[-1, 1]^dim`, with `num_points_per_dim` points along
/// each axis.
///
/// # Panics
///
/// Panics if zero points per dimension are requested.
pub fn cube_gauss(dim: usize, num_points_per_dim: usize) -> Rule<f64> {
    let rule1d = gauss(num_points_per_dim);
    tensor_product(&vec![rule1d; dim])
}

/// A Gauss rule for the reference quadrilateral `[-1, 1]^2`.
pub fn quadrilateral_gauss(num_points_per_dim: usize) -> Rule<f64> {
    cube_gauss(2, num_points_per_dim)
}

/// A Gauss rule for the reference hexahedron `[-1, 1]^3`.
pub fn hexahedron_gauss(num_points_per_dim: usize) -> Rule<f64> {
    cube_gauss(3, num_points_per_dim)
}
