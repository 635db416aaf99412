//! Rules for the interval `[-1, 1]`, i.e. [`Cube`] in one dimension.
use super::ratio;
use crate::domain::Cube;
use crate::error::Error;
use crate::Scheme;
use cubature_symmetry::univariate::try_gauss;
use cubature_symmetry::{expand_all, NdOrbit, NdShape, Numeric};

fn interval() -> Cube {
    Cube::new(1)
}

fn orbit<T: Numeric>(shape: NdShape<T>) -> Result<NdOrbit<T>, Error> {
    Ok(NdOrbit::new(1, shape)?)
}

/// The midpoint rule, of degree 1.
pub fn midpoint<T: Numeric>() -> Result<Scheme<Cube>, Error> {
    Scheme::builder("midpoint", interval(), 1).build(vec![T::one()], vec![vec![T::zero()]])
}

/// The trapezoidal rule, of degree 1.
pub fn trapezoid<T: Numeric>() -> Result<Scheme<Cube>, Error> {
    let rule = expand_all([(ratio(1, 2), orbit(NdShape::FsdR(T::one()))?)])?;
    Scheme::builder("trapezoid", interval(), 1).build_from_rule(rule)
}

/// Simpson's rule, of degree 3.
pub fn simpson<T: Numeric>() -> Result<Scheme<Cube>, Error> {
    let rule = expand_all([
        (ratio(2, 3), orbit(NdShape::Zero)?),
        (ratio(1, 6), orbit(NdShape::FsdR(T::one()))?),
    ])?;
    Scheme::builder("simpson", interval(), 3).build_from_rule(rule)
}

/// The Gauss-Legendre rule with `num_points` points, of degree `2 num_points - 1`.
pub fn gauss_legendre(num_points: usize) -> Result<Scheme<Cube>, Error> {
    let name = "gauss_legendre";
    let (weights, points) =
        try_gauss(num_points).ok_or_else(|| Error::invalid_parameter(name, "at least one point is required"))?;
    let weights = weights.into_iter().map(|w| w / 2.0).collect();
    Scheme::builder(format!("{name}_{num_points}"), interval(), 2 * num_points - 1).build(weights, points)
}
