//! Numeric domains in which rule coefficients can be expressed.
use num::{BigInt, BigRational, Num, Zero};
use std::fmt::Debug;
use std::ops::Neg;

/// A numeric domain for rule coefficients.
///
/// Orbit generation and rule construction are written once against this trait and instantiated
/// either for floating-point arithmetic (`f64`) or for exact rational arithmetic
/// ([`BigRational`]). The domain is selected by the type of the generator parameters.
pub trait Numeric: Clone + Debug + PartialEq + Num + Neg<Output = Self> + Send + Sync + 'static {
    /// The value `numer / denom`.
    ///
    /// # Panics
    ///
    /// The exact domain panics if `denom == 0`.
    fn from_ratio(numer: i64, denom: i64) -> Self;

    /// Converts an exact rational into this domain, rounding if necessary.
    fn from_rational(value: &BigRational) -> Self;

    /// Converts a float into this domain. The exact domain represents the binary value of
    /// the float exactly, and rejects non-finite values.
    fn from_f64(value: f64) -> Option<Self>;

    /// The square root, if it can be represented in this domain.
    ///
    /// Floating point only rejects negative input. The exact domain additionally rejects
    /// any value that is not the square of a rational.
    fn try_sqrt(&self) -> Option<Self>;

    /// The nearest floating-point value.
    fn to_f64(&self) -> f64;

    /// The exact value, if this domain is exact.
    fn exact(&self) -> Option<BigRational>;

    fn from_usize(n: usize) -> Self {
        Self::from_ratio(n as i64, 1)
    }
}

impl Numeric for f64 {
    fn from_ratio(numer: i64, denom: i64) -> Self {
        numer as f64 / denom as f64
    }

    fn from_rational(value: &BigRational) -> Self {
        num::ToPrimitive::to_f64(value).unwrap_or(f64::NAN)
    }

    fn from_f64(value: f64) -> Option<Self> {
        Some(value)
    }

    fn try_sqrt(&self) -> Option<Self> {
        (*self >= 0.0).then(|| self.sqrt())
    }

    fn to_f64(&self) -> f64 {
        *self
    }

    fn exact(&self) -> Option<BigRational> {
        None
    }
}

impl Numeric for BigRational {
    fn from_ratio(numer: i64, denom: i64) -> Self {
        BigRational::new(BigInt::from(numer), BigInt::from(denom))
    }

    fn from_rational(value: &BigRational) -> Self {
        value.clone()
    }

    fn from_f64(value: f64) -> Option<Self> {
        BigRational::from_float(value)
    }

    fn try_sqrt(&self) -> Option<Self> {
        if *self < BigRational::zero() {
            return None;
        }
        // Ratios are kept in lowest terms, so the square root is rational if and only if
        // both numerator and denominator are perfect squares
        let numer = exact_integer_sqrt(self.numer())?;
        let denom = exact_integer_sqrt(self.denom())?;
        Some(BigRational::new(numer, denom))
    }

    fn to_f64(&self) -> f64 {
        num::ToPrimitive::to_f64(self).unwrap_or(f64::NAN)
    }

    fn exact(&self) -> Option<BigRational> {
        Some(self.clone())
    }
}

fn exact_integer_sqrt(n: &BigInt) -> Option<BigInt> {
    let root = n.sqrt();
    (&root * &root == *n).then_some(root)
}
