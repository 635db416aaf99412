//! Published cubature rules, grouped by domain.
//!
//! Rules whose coefficients are rational are generic over [`Numeric`], and can be constructed
//! in exact rational arithmetic by choosing [`BigRational`](num::BigRational) as the numeric
//! type. Rules that involve irrational coefficients fail with [`Error::NotRepresentable`] in the
//! exact domain. All rules have weights normalized to sum to one.
//!
//! The catalog is representative rather than exhaustive. Further rules can be added as JSON
//! records (see [`records`]) or constructed directly through [`Scheme::builder`](crate::Scheme::builder).

use crate::error::Error;
use cubature_records::Citation;
use cubature_symmetry::Numeric;

pub mod ball;
pub mod cube;
pub mod interval;
pub mod records;
pub mod sphere;
pub mod tetrahedron;
pub mod triangle;
pub mod wedge;

pub(crate) fn ratio<T: Numeric>(numer: i64, denom: i64) -> T {
    T::from_ratio(numer, denom)
}

/// The square root of `value`, if it is representable in the numeric domain.
pub(crate) fn sqrt<T: Numeric>(rule: &str, value: T) -> Result<T, Error> {
    value.try_sqrt().ok_or_else(|| Error::NotRepresentable {
        rule: rule.to_string(),
        reason: format!("the square root of {} is irrational", value.to_f64()),
    })
}

/// Checks that `dim` lies in `min..=max`.
pub(crate) fn check_dim(rule: &str, dim: usize, min: usize, max: usize) -> Result<(), Error> {
    if (min..=max).contains(&dim) {
        Ok(())
    } else if min == max {
        Err(Error::unsupported_dimension(rule, dim, &min.to_string()))
    } else if max == usize::MAX {
        Err(Error::unsupported_dimension(rule, dim, &format!("{min} or higher")))
    } else {
        Err(Error::unsupported_dimension(rule, dim, &format!("{min} to {max}")))
    }
}

/// `2^n` as an integer denominator.
pub(crate) fn pow2(rule: &str, n: usize) -> Result<i64, Error> {
    u32::try_from(n)
        .ok()
        .and_then(|n| 2i64.checked_pow(n))
        .ok_or_else(|| Error::unsupported_dimension(rule, n, "up to 62"))
}

pub(crate) fn stroud_1971() -> Citation {
    Citation::new(&["A. H. Stroud"], "Approximate Calculation of Multiple Integrals", "1971")
}

pub(crate) fn hammer_marlowe_stroud_1956() -> Citation {
    Citation::new(
        &["P. C. Hammer", "O. J. Marlowe", "A. H. Stroud"],
        "Numerical integration over simplexes and cones",
        "1956",
    )
    .with_journal("Mathematical Tables and Other Aids to Computation", "10", "130-137")
}
