use super::{assert_dim, unit_ball_volume, unit_sphere_area, Domain, Location, LOCATION_TOLERANCE};
use cubature_symmetry::Family;
use nalgebra::DVector;

/// The unit ball in `dim` dimensions: the disk, the ball and the n-ball.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Ball {
    pub dim: usize,
}

/// The unit sphere embedded in `dim` dimensions: the circle, the sphere and the n-sphere.
///
/// The dimension is that of the embedding space, so the circle is `Sphere { dim: 2 }`.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Sphere {
    pub dim: usize,
}

impl Ball {
    pub fn new(dim: usize) -> Self {
        Self { dim }
    }
}

impl Sphere {
    pub fn new(dim: usize) -> Self {
        Self { dim }
    }
}

/// A ball or sphere with the given center and radius.
#[derive(Debug, Clone, PartialEq)]
pub struct Hyperball {
    pub center: DVector<f64>,
    pub radius: f64,
}

impl Hyperball {
    pub fn new(center: DVector<f64>, radius: f64) -> Self {
        Self { center, radius }
    }

    pub fn unit(dim: usize) -> Self {
        Self::new(DVector::zeros(dim), 1.0)
    }
}

fn place_in_hyperball(dim: usize, hyperball: &Hyperball, point: &DVector<f64>) -> DVector<f64> {
    assert_dim("center", dim, hyperball.center.len());
    assert_dim("point", dim, point.len());
    &hyperball.center + point * hyperball.radius
}

impl Domain for Ball {
    type Placement = Hyperball;

    fn name(&self) -> &'static str {
        "ball"
    }

    fn ambient_dim(&self) -> usize {
        self.dim
    }

    fn reference_measure(&self) -> f64 {
        unit_ball_volume(self.dim)
    }

    fn reference_placement(&self) -> Hyperball {
        Hyperball::unit(self.dim)
    }

    fn place(&self, hyperball: &Hyperball, point: &DVector<f64>) -> DVector<f64> {
        place_in_hyperball(self.dim, hyperball, point)
    }

    fn measure(&self, hyperball: &Hyperball) -> f64 {
        unit_ball_volume(self.dim) * hyperball.radius.abs().powi(self.dim as i32)
    }

    fn locate(&self, point: &DVector<f64>) -> Location {
        Location::from_margin(1.0 - point.norm())
    }

    fn orbit_family(&self) -> Option<Family> {
        Some(Family::cartesian(self.dim))
    }
}

impl Domain for Sphere {
    type Placement = Hyperball;

    fn name(&self) -> &'static str {
        "sphere"
    }

    fn ambient_dim(&self) -> usize {
        self.dim
    }

    fn reference_measure(&self) -> f64 {
        unit_sphere_area(self.dim)
    }

    fn reference_placement(&self) -> Hyperball {
        Hyperball::unit(self.dim)
    }

    fn place(&self, hyperball: &Hyperball, point: &DVector<f64>) -> DVector<f64> {
        place_in_hyperball(self.dim, hyperball, point)
    }

    fn measure(&self, hyperball: &Hyperball) -> f64 {
        let exponent = self.dim.saturating_sub(1) as i32;
        unit_sphere_area(self.dim) * hyperball.radius.abs().powi(exponent)
    }

    /// Points on the sphere are interior points of the manifold, all others are exterior.
    fn locate(&self, point: &DVector<f64>) -> Location {
        if (point.norm() - 1.0).abs() <= LOCATION_TOLERANCE {
            Location::Interior
        } else {
            Location::Exterior
        }
    }

    fn orbit_family(&self) -> Option<Family> {
        Some(Family::cartesian(self.dim))
    }
}
