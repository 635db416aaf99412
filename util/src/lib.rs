//! Test helpers: exact monomial integrals over the reference domains.
use nalgebra::DVector;
use std::f64::consts::PI;

#[macro_export]
macro_rules! assert_panics {
    ($e:expr) => {{
        use std::panic::catch_unwind;
        use std::stringify;
        let expr_string = stringify!($e);
        let result = catch_unwind(|| $e);
        if result.is_ok() {
            panic!("assert_panics!({}) failed.", expr_string);
        }
    }};
}

/// All exponent vectors of length `dim` with total degree `degree`.
pub fn monomials(dim: usize, degree: usize) -> Vec<Vec<usize>> {
    if dim == 0 {
        return if degree == 0 { vec![vec![]] } else { vec![] };
    }
    let mut result = Vec::new();
    for first in (0..=degree).rev() {
        for mut rest in monomials(dim - 1, degree - first) {
            rest.insert(0, first);
            result.push(rest);
        }
    }
    result
}

pub fn eval_monomial(exponents: &[usize], x: &DVector<f64>) -> f64 {
    assert_eq!(exponents.len(), x.len());
    exponents
        .iter()
        .zip(x.iter())
        .map(|(&a, &xi)| xi.powi(a as i32))
        .product()
}

fn factorial(n: usize) -> f64 {
    (1..=n).map(|k| k as f64).product()
}

/// `Gamma(k / 2)` for a positive integer `k`.
fn gamma_half(k: usize) -> f64 {
    assert!(k > 0);
    match k {
        1 => PI.sqrt(),
        2 => 1.0,
        k => (k as f64 / 2.0 - 1.0) * gamma_half(k - 2),
    }
}

fn any_odd(exponents: &[usize]) -> bool {
    exponents.iter().any(|a| a % 2 == 1)
}

/// The integral of `x^exponents` over `[-1, 1]^n`.
pub fn cube_monomial_integral(exponents: &[usize]) -> f64 {
    exponents
        .iter()
        .map(|&a| if a % 2 == 0 { 2.0 / (a as f64 + 1.0) } else { 0.0 })
        .product()
}

/// The integral of `x^exponents` over the surface of the unit sphere in `n` dimensions.
pub fn sphere_monomial_integral(exponents: &[usize]) -> f64 {
    if any_odd(exponents) {
        return 0.0;
    }
    let numerator: f64 = exponents.iter().map(|&a| gamma_half(a + 1)).product();
    let total: usize = exponents.iter().map(|&a| a + 1).sum();
    2.0 * numerator / gamma_half(total)
}

/// The integral of `x^exponents` over the unit ball in `n` dimensions.
pub fn ball_monomial_integral(exponents: &[usize]) -> f64 {
    let degree: usize = exponents.iter().sum();
    sphere_monomial_integral(exponents) / (degree + exponents.len()) as f64
}

/// The integral of `x^exponents` over the simplex with vertices `0, e_1, ..., e_n`.
pub fn simplex_monomial_integral(exponents: &[usize]) -> f64 {
    let degree: usize = exponents.iter().sum();
    let numerator: f64 = exponents.iter().map(|&a| factorial(a)).product();
    numerator / factorial(degree + exponents.len())
}

/// The integral of `x^a y^b z^c` over the unit triangle times `[-1, 1]`.
pub fn wedge_monomial_integral(exponents: &[usize]) -> f64 {
    assert_eq!(exponents.len(), 3);
    simplex_monomial_integral(&exponents[..2]) * cube_monomial_integral(&exponents[2..])
}
