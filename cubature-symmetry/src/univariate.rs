//! Quadrature rules for the one-dimensional domain `[-1, 1]`.

use crate::Rule;
use log::warn;
use std::f64::consts::PI;

/// Newton iterations allowed per root before giving up on further refinement.
const MAX_NEWTON_ITERATIONS: usize = 100;

/// Evaluates the Legendre polynomial `P_n` and its derivative at `x`.
///
/// The derivative formula is singular at `|x| == 1`, so it is only suitable for evaluation in the
/// open interval `(-1, 1)`.
pub(crate) fn legendre(n: usize, x: f64) -> (f64, f64) {
    // m P_m(x) = (2m - 1) x P_{m - 1}(x) - (m - 1) P_{m - 2}(x)
    let mut p_current = 1.0;
    let mut p_previous = 0.0;
    for m in 1..=n {
        let m = m as f64;
        let p_next = ((2.0 * m - 1.0) * x * p_current - (m - 1.0) * p_previous) / m;
        p_previous = p_current;
        p_current = p_next;
    }

    // P_n'(x) = n (x P_n(x) - P_{n - 1}(x)) / (x^2 - 1)
    let dp = n as f64 * (x * p_current - p_previous) / (x * x - 1.0);
    (p_current, dp)
}

/// Gauss-Legendre quadrature for the reference interval `[-1, 1]`, if `num_points > 0`.
///
/// Given `n` points, the rule integrates polynomials of degree up to `2n - 1` exactly. The
/// weights sum to the length of the interval, i.e. 2. Points are sorted in decreasing order.
pub fn try_gauss(num_points: usize) -> Option<Rule<f64>> {
    let n = num_points;
    if n == 0 {
        return None;
    }

    // Only the first half of the roots is computed, the rest follows by symmetry
    let m = (n + 1) / 2;
    let mut points: Vec<Vec<f64>> = Vec::with_capacity(n);
    let mut weights = Vec::with_capacity(n);

    for i in 0..m {
        let mut x = (PI * (i as f64 + 0.75) / (n as f64 + 0.5)).cos();
        let (mut p, mut dp) = legendre(n, x);

        let mut converged = false;
        for _ in 0..MAX_NEWTON_ITERATIONS {
            let dx = -p / dp;
            x += dx;
            (p, dp) = legendre(n, x);
            if dx.abs() <= 1e-15 {
                converged = true;
                break;
            }
        }
        if !converged {
            warn!("Newton iteration for root {i} of the Legendre polynomial of degree {n} did not converge");
        }

        weights.push(2.0 / ((1.0 - x * x) * dp * dp));
        points.push(vec![x]);
    }

    for i in m..n {
        let mirror = n - i - 1;
        points.push(vec![-points[mirror][0]]);
        weights.push(weights[mirror]);
    }

    debug_assert_eq!(points.len(), n);
    Some((weights, points))
}

/// Gauss-Legendre quadrature for the reference interval `[-1, 1]`.
///
/// See [`try_gauss`].
///
/// # Panics
///
/// Panics if zero points are requested.
pub fn gauss(num_points: usize) -> Rule<f64> {
    try_gauss(num_points).expect("number of points must be positive")
}
