use cubature_symmetry::integrate;
use cubature_symmetry::univariate::{gauss, try_gauss};

use matrixcompare::assert_scalar_eq;

#[test]
fn gauss_rules_satisfy_expected_accuracy() {
    for n in 1..=100 {
        let expected_polynomial_degree = 2 * n - 1;
        let rule = gauss(n);

        assert_eq!(rule.0.len(), n);
        assert!(rule.0.iter().all(|&w| w > 0.0));
        assert!(rule.1.iter().all(|x| x[0].abs() < 1.0));

        for alpha in 0..=expected_polynomial_degree as i32 {
            let monomial_integral = (1.0 - (-1.0f64).powi(alpha + 1)) / (alpha as f64 + 1.0);
            let estimated_integral = integrate(&rule, |x| x[0].powi(alpha));

            assert_scalar_eq!(estimated_integral, monomial_integral, comp = abs, tol = 1e-14);
        }
    }
}

#[test]
fn gauss_points_are_symmetric_and_decreasing() {
    for n in 1..=20 {
        let (weights, points) = gauss(n);
        for i in 0..n / 2 {
            let mirror = n - i - 1;
            assert_eq!(points[i][0], -points[mirror][0]);
            assert_eq!(weights[i], weights[mirror]);
        }
        assert!(points.windows(2).all(|pair| pair[0][0] > pair[1][0]));
    }
}

#[test]
fn gauss_requires_at_least_one_point() {
    assert!(try_gauss(0).is_none());
    let (weights, points) = gauss(1);
    assert_eq!(weights, vec![2.0]);
    assert_eq!(points, vec![vec![0.0]]);
}
