use super::{assert_dim, Domain, Location};
use cubature_symmetry::Family;
use nalgebra::DVector;

/// The hypercube `[-1, 1]^dim`: the interval, quadrilateral, hexahedron and beyond.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Cube {
    pub dim: usize,
}

impl Cube {
    pub fn new(dim: usize) -> Self {
        Self { dim }
    }
}

/// An axis-aligned box with the given corners.
#[derive(Debug, Clone, PartialEq)]
pub struct Cuboid {
    pub lower: DVector<f64>,
    pub upper: DVector<f64>,
}

impl Cuboid {
    pub fn new(lower: DVector<f64>, upper: DVector<f64>) -> Self {
        assert_eq!(lower.len(), upper.len(), "corners of a cuboid must have the same dimension");
        Self { lower, upper }
    }
}

impl Domain for Cube {
    type Placement = Cuboid;

    fn name(&self) -> &'static str {
        "cube"
    }

    fn ambient_dim(&self) -> usize {
        self.dim
    }

    fn reference_measure(&self) -> f64 {
        2f64.powi(self.dim as i32)
    }

    fn reference_placement(&self) -> Cuboid {
        Cuboid {
            lower: DVector::repeat(self.dim, -1.0),
            upper: DVector::repeat(self.dim, 1.0),
        }
    }

    fn place(&self, cuboid: &Cuboid, point: &DVector<f64>) -> DVector<f64> {
        assert_dim("cuboid", self.dim, cuboid.lower.len());
        assert_dim("point", self.dim, point.len());
        let half_extents = (&cuboid.upper - &cuboid.lower) * 0.5;
        &cuboid.lower + half_extents.component_mul(&point.add_scalar(1.0))
    }

    fn measure(&self, cuboid: &Cuboid) -> f64 {
        (&cuboid.upper - &cuboid.lower).iter().map(|extent| extent.abs()).product()
    }

    fn locate(&self, point: &DVector<f64>) -> Location {
        let margin = point
            .iter()
            .map(|x| 1.0 - x.abs())
            .fold(f64::INFINITY, f64::min);
        Location::from_margin(margin)
    }

    fn orbit_family(&self) -> Option<Family> {
        Some(Family::cartesian(self.dim))
    }
}
