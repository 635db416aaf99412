//! Cubature schemes: weights, points and provenance for a reference domain.
use crate::domain::{Domain, Location};
use crate::error::Error;
use crate::{DEFAULT_TEST_TOLERANCE, LOW_PRECISION_THRESHOLD};
use cubature_records::{Citation, RuleRecord};
use cubature_symmetry::{expand_tagged, Numeric, Point, Rule};
use log::{debug, trace, warn};
use nalgebra::{DMatrix, DVector};
use num::{BigRational, Zero};
use rayon::prelude::*;
use serde::Serialize;
use std::fmt;
use std::fmt::{Display, Formatter};
use std::ops::{Add, AddAssign, Mul};

/// A rule in the exact rational domain.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExactRule {
    pub weights: Vec<BigRational>,
    pub points: Vec<Point<BigRational>>,
}

/// A cubature scheme on the reference domain `G`.
///
/// A scheme is immutable once constructed. Its weights sum to one, and
/// [`integrate`](Self::integrate) scales the weighted sum by the measure of the placed domain.
/// Schemes constructed from exact input keep an exact copy of their weights and points next to
/// the floating-point copy used for integration.
#[derive(Debug, Clone, PartialEq)]
pub struct Scheme<G> {
    name: String,
    domain: G,
    degree: usize,
    claimed_degree: Option<(usize, String)>,
    source: Option<Citation>,
    test_tolerance: f64,
    weights: Vec<f64>,
    points: Vec<DVector<f64>>,
    exact: Option<ExactRule>,
}

/// Builder for [`Scheme`].
#[derive(Debug, Clone)]
pub struct SchemeBuilder<G> {
    name: String,
    domain: G,
    degree: usize,
    claimed_degree: Option<(usize, String)>,
    source: Option<Citation>,
    test_tolerance: f64,
}

impl<G: Domain> SchemeBuilder<G> {
    pub fn source(self, source: Citation) -> Self {
        Self {
            source: Some(source),
            ..self
        }
    }

    /// Sets the tolerance expected when testing the degree of exactness of the scheme.
    ///
    /// A tolerance above [`LOW_PRECISION_THRESHOLD`] marks the scheme as low precision, which is
    /// reported as a warning when the scheme is built.
    pub fn test_tolerance(self, test_tolerance: f64) -> Self {
        Self { test_tolerance, ..self }
    }

    /// Records that the source claims a degree different from the verified degree.
    pub fn claimed_degree(self, claimed: usize, note: impl Into<String>) -> Self {
        Self {
            claimed_degree: Some((claimed, note.into())),
            ..self
        }
    }

    /// Builds the scheme from weights and reference points in any numeric domain.
    pub fn build<T: Numeric>(self, weights: Vec<T>, points: Vec<Point<T>>) -> Result<Scheme<G>, Error> {
        if weights.len() != points.len() {
            return Err(Error::ShapeMismatch {
                weights: weights.len(),
                points: points.len(),
            });
        }
        if weights.is_empty() {
            return Err(Error::EmptyScheme { name: self.name });
        }
        let point_dim = self.domain.point_dim();
        if let Some((index, point)) = points.iter().enumerate().find(|(_, p)| p.len() != point_dim) {
            return Err(Error::PointDimension {
                index,
                expected: point_dim,
                found: point.len(),
            });
        }

        if self.test_tolerance > LOW_PRECISION_THRESHOLD {
            warn!(
                "Scheme {} is low precision: test tolerance {:e} exceeds {:e}",
                self.name, self.test_tolerance, LOW_PRECISION_THRESHOLD
            );
        }

        let float_weights = weights.iter().map(Numeric::to_f64).collect();
        let float_points = points
            .iter()
            .map(|p| DVector::from_iterator(point_dim, p.iter().map(Numeric::to_f64)))
            .collect();
        let exact = to_exact_rule(&weights, &points);

        trace!(
            "Built scheme {} on {} with {} points (exact: {})",
            self.name,
            self.domain.name(),
            weights.len(),
            exact.is_some()
        );
        Ok(Scheme {
            name: self.name,
            domain: self.domain,
            degree: self.degree,
            claimed_degree: self.claimed_degree,
            source: self.source,
            test_tolerance: self.test_tolerance,
            weights: float_weights,
            points: float_points,
            exact,
        })
    }

    pub fn build_from_rule<T: Numeric>(self, rule: Rule<T>) -> Result<Scheme<G>, Error> {
        let (weights, points) = rule;
        self.build(weights, points)
    }
}

fn to_exact_rule<T: Numeric>(weights: &[T], points: &[Point<T>]) -> Option<ExactRule> {
    let weights = weights.iter().map(Numeric::exact).collect::<Option<Vec<_>>>()?;
    let points = points
        .iter()
        .map(|p| p.iter().map(Numeric::exact).collect::<Option<Vec<_>>>())
        .collect::<Option<Vec<_>>>()?;
    Some(ExactRule { weights, points })
}

impl<G: Domain> Scheme<G> {
    pub fn builder(name: impl Into<String>, domain: G, degree: usize) -> SchemeBuilder<G> {
        SchemeBuilder {
            name: name.into(),
            domain,
            degree,
            claimed_degree: None,
            source: None,
            test_tolerance: DEFAULT_TEST_TOLERANCE,
        }
    }

    /// Expands a rule record on the given domain.
    ///
    /// Records whose coefficients are all exact produce schemes with an exact copy.
    pub fn from_record(record: &RuleRecord, domain: G) -> Result<Self, Error> {
        if record.domain.as_str() != domain.name() || record.dim != domain.ambient_dim() {
            return Err(Error::DomainMismatch {
                expected: format!("{} in dimension {}", domain.name(), domain.ambient_dim()),
                found: format!("{} in dimension {}", record.domain.as_str(), record.dim),
            });
        }

        let family = domain.orbit_family().ok_or_else(|| Error::DomainMismatch {
            expected: "a domain with symmetry orbits".to_string(),
            found: domain.name().to_string(),
        })?;
        let mut builder = Scheme::builder(record.name.clone(), domain, record.degree);
        if let Some(source) = &record.source {
            builder = builder.source(source.clone());
        }
        if let Some(tolerance) = record.test_tolerance {
            builder = builder.test_tolerance(tolerance);
        }
        if let Some(claimed) = record.claimed_degree {
            builder = builder.claimed_degree(claimed, "degree claimed by the source");
        }

        debug!("Expanding rule record {} ({} tags)", record.name, record.data.len());
        if record.is_exact() {
            let rows = record.rows::<BigRational>()?;
            builder.build_from_rule(expand_tagged(family, &rows)?)
        } else {
            let rows = record.rows::<f64>()?;
            builder.build_from_rule(expand_tagged(family, &rows)?)
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn domain(&self) -> &G {
        &self.domain
    }

    /// The verified degree of exactness.
    pub fn degree(&self) -> usize {
        self.degree
    }

    /// The degree claimed by the source and a note, when it differs from [`degree`](Self::degree).
    pub fn claimed_degree(&self) -> Option<(usize, &str)> {
        self.claimed_degree
            .as_ref()
            .map(|(degree, note)| (*degree, note.as_str()))
    }

    pub fn source(&self) -> Option<&Citation> {
        self.source.as_ref()
    }

    pub fn test_tolerance(&self) -> f64 {
        self.test_tolerance
    }

    pub fn weights(&self) -> &[f64] {
        &self.weights
    }

    /// Reference points. Points of simplex schemes are barycentric.
    pub fn points(&self) -> &[DVector<f64>] {
        &self.points
    }

    /// The reference points as the rows of an `N x D` matrix.
    pub fn points_matrix(&self) -> DMatrix<f64> {
        DMatrix::from_fn(self.points.len(), self.domain.point_dim(), |i, j| self.points[i][j])
    }

    pub fn exact(&self) -> Option<&ExactRule> {
        self.exact.as_ref()
    }

    pub fn len(&self) -> usize {
        self.weights.len()
    }

    pub fn is_empty(&self) -> bool {
        self.weights.is_empty()
    }

    /// Approximates the integral of `f` over the placed domain.
    pub fn integrate<U, F>(&self, f: F, placement: &G::Placement) -> U
    where
        F: Fn(&DVector<f64>) -> U,
        U: Zero + Mul<f64, Output = U> + AddAssign<U>,
    {
        let mut integral = U::zero();
        for (w, p) in self.weights.iter().zip(&self.points) {
            integral += f(&self.domain.place(placement, p)) * *w;
        }
        integral * self.domain.measure(placement)
    }

    /// Approximates the integral of a fallible `f`, stopping at the first error.
    pub fn try_integrate<U, E, F>(&self, mut f: F, placement: &G::Placement) -> Result<U, E>
    where
        F: FnMut(&DVector<f64>) -> Result<U, E>,
        U: Zero + Mul<f64, Output = U> + AddAssign<U>,
    {
        let mut integral = U::zero();
        for (w, p) in self.weights.iter().zip(&self.points) {
            integral += f(&self.domain.place(placement, p))? * *w;
        }
        Ok(integral * self.domain.measure(placement))
    }

    /// Approximates the integral of `f`, evaluating it once for all points.
    ///
    /// The placed points are passed as the columns of a `D x N` matrix, and `f` returns one
    /// value per column.
    ///
    /// # Panics
    ///
    /// Panics if `f` does not return exactly one value per point.
    pub fn integrate_batch<F>(&self, f: F, placement: &G::Placement) -> f64
    where
        F: FnOnce(&DMatrix<f64>) -> DVector<f64>,
    {
        let placed: Vec<DVector<f64>> = self
            .points
            .iter()
            .map(|p| self.domain.place(placement, p))
            .collect();
        let columns = DMatrix::from_columns(&placed);
        let values = f(&columns);
        assert_eq!(values.len(), self.len(), "batch function must return one value per point");
        DVector::from_column_slice(&self.weights).dot(&values) * self.domain.measure(placement)
    }

    /// Approximates the integral of `f` with parallel evaluation of `f`.
    pub fn par_integrate<U, F>(&self, f: F, placement: &G::Placement) -> U
    where
        F: Fn(&DVector<f64>) -> U + Sync,
        U: Zero + Mul<f64, Output = U> + Add<U, Output = U> + Send,
    {
        let integral = self
            .weights
            .par_iter()
            .zip(self.points.par_iter())
            .map(|(w, p)| f(&self.domain.place(placement, p)) * *w)
            .reduce(U::zero, |a, b| a + b);
        integral * self.domain.measure(placement)
    }

    /// Approximates the integral of `f` over the reference domain.
    pub fn integrate_reference<U, F>(&self, f: F) -> U
    where
        F: Fn(&DVector<f64>) -> U,
        U: Zero + Mul<f64, Output = U> + AddAssign<U>,
    {
        self.integrate(f, &self.domain.reference_placement())
    }

    /// Summarizes where the points lie and the signs of the weights.
    pub fn report(&self) -> SchemeReport {
        let location = self
            .points
            .iter()
            .map(|p| self.domain.locate(p))
            .max()
            .unwrap_or(Location::Interior);
        SchemeReport {
            num_points: self.len(),
            location,
            positive_weights: self.weights.iter().all(|&w| w > 0.0),
        }
    }
}

/// Diagnostics of a scheme.
///
/// Points outside the domain and negative weights are legitimate in published schemes, so
/// neither is an error.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize)]
pub struct SchemeReport {
    pub num_points: usize,
    /// The least benign location over all points.
    pub location: Location,
    pub positive_weights: bool,
}

impl Display for SchemeReport {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let location = match self.location {
            Location::Interior => "all points inside",
            Location::Boundary => "points on the boundary",
            Location::Exterior => "points outside",
        };
        let weights = if self.positive_weights {
            "positive weights"
        } else {
            "non-positive weights"
        };
        write!(f, "{} points, {}, {}", self.num_points, location, weights)
    }
}

impl<G: Domain> Display for Scheme<G> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} ({} in dimension {}, degree {}): {}",
            self.name,
            self.domain.name(),
            self.domain.ambient_dim(),
            self.degree,
            self.report()
        )?;
        if let Some((claimed, note)) = self.claimed_degree() {
            write!(f, " [claimed degree {claimed}: {note}]")?;
        }
        Ok(())
    }
}

/// A rule consisting of weights and reference points.
pub trait Quadrature {
    fn weights(&self) -> &[f64];
    fn points(&self) -> &[DVector<f64>];

    /// The weighted sum of `f` over the points, without any placement or scaling.
    fn weighted_sum<U, F>(&self, f: F) -> U
    where
        F: Fn(&DVector<f64>) -> U,
        U: Zero + Mul<f64, Output = U> + AddAssign<U>,
    {
        let mut sum = U::zero();
        for (w, p) in self.weights().iter().zip(self.points()) {
            sum += f(p) * *w;
        }
        sum
    }
}

impl<G: Domain> Quadrature for Scheme<G> {
    fn weights(&self) -> &[f64] {
        &self.weights
    }

    fn points(&self) -> &[DVector<f64>] {
        &self.points
    }
}

impl<A, B> Quadrature for (A, B)
where
    A: AsRef<[f64]>,
    B: AsRef<[DVector<f64>]>,
{
    fn weights(&self) -> &[f64] {
        self.0.as_ref()
    }

    fn points(&self) -> &[DVector<f64>] {
        self.1.as_ref()
    }
}

impl<X: Quadrature> Quadrature for &X {
    fn weights(&self) -> &[f64] {
        X::weights(self)
    }

    fn points(&self) -> &[DVector<f64>] {
        X::points(self)
    }
}
