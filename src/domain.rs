//! Reference domains and their placements.
//!
//! Every scheme is defined on a fixed reference domain. A *placement* locates the reference
//! domain in the space the caller cares about, and determines the measure of the placed domain.
//! Scheme weights are normalized to sum to one, so that integrating over a placed domain is
//! a weighted mean of the integrand multiplied by the measure of the placement.
//!
//! | domain | reference | placement | measure |
//! |---|---|---|---|
//! | [`Cube`] | `[-1, 1]^n` | [`Cuboid`] | `prod(upper - lower)` |
//! | [`Ball`] | unit ball | [`Hyperball`] | `V_n r^n` |
//! | [`Sphere`] | unit sphere | [`Hyperball`] | `S_n r^(n - 1)` |
//! | [`Simplex`] | barycentric coordinates | [`SimplexVertices`] | `abs(det) / n!` |
//! | [`Wedge`] | unit triangle times `[-1, 1]` | [`Affine`] | `abs(det A)` |

use cubature_symmetry::Family;
use nalgebra::DVector;
use serde::Serialize;
use std::f64::consts::PI;
use std::fmt::Debug;

mod ball;
mod cube;
mod simplex;
mod wedge;

pub use ball::{Ball, Hyperball, Sphere};
pub use cube::{Cube, Cuboid};
pub use simplex::{Simplex, SimplexVertices};
pub use wedge::{Affine, Wedge};

/// Tolerance used to decide whether a reference point lies on the boundary of a domain.
pub const LOCATION_TOLERANCE: f64 = 1e-12;

/// The location of a reference point relative to its domain.
///
/// Locations are ordered from the most to the least benign, so the location of a set of points
/// is the maximum over its points.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum Location {
    Interior,
    Boundary,
    Exterior,
}

impl Location {
    /// Classifies a signed distance-like quantity that is positive inside the domain.
    pub(crate) fn from_margin(margin: f64) -> Self {
        if margin > LOCATION_TOLERANCE {
            Self::Interior
        } else if margin >= -LOCATION_TOLERANCE {
            Self::Boundary
        } else {
            Self::Exterior
        }
    }
}

/// A reference domain.
pub trait Domain: Debug + Clone + PartialEq + Send + Sync {
    /// Parameters locating the reference domain in space.
    type Placement: Debug + Clone + Sync;

    /// The kind of domain, e.g. `"ball"`.
    fn name(&self) -> &'static str;

    /// The number of Cartesian coordinates of placed points.
    fn ambient_dim(&self) -> usize;

    /// The number of coordinates of reference points.
    ///
    /// Equal to [`Domain::ambient_dim`], except for simplices, whose reference points are
    /// barycentric.
    fn point_dim(&self) -> usize {
        self.ambient_dim()
    }

    /// The measure (volume, area or length) of the reference domain.
    fn reference_measure(&self) -> f64;

    /// The placement that maps the reference domain to itself.
    fn reference_placement(&self) -> Self::Placement;

    /// Maps a reference point to Cartesian coordinates under the placement.
    ///
    /// # Panics
    ///
    /// Panics if the dimensions of the placement or the point do not match the domain.
    fn place(&self, placement: &Self::Placement, point: &DVector<f64>) -> DVector<f64>;

    /// The measure of the placed domain.
    fn measure(&self, placement: &Self::Placement) -> f64;

    /// Classifies a reference point.
    fn locate(&self, point: &DVector<f64>) -> Location;

    /// The orbit family that resolves tags for this domain, if any.
    fn orbit_family(&self) -> Option<Family>;
}

/// The volume `V_n` of the unit ball in `n` dimensions.
///
/// Computed by the recurrence `V_0 = 1`, `V_1 = 2` and `V_n = 2 pi V_(n - 2) / n`.
pub fn unit_ball_volume(n: usize) -> f64 {
    match n {
        0 => 1.0,
        1 => 2.0,
        n => 2.0 * PI * unit_ball_volume(n - 2) / n as f64,
    }
}

/// The surface area `S_n = n V_n` of the unit sphere in `n` dimensions.
pub fn unit_sphere_area(n: usize) -> f64 {
    n as f64 * unit_ball_volume(n)
}

/// `n!` as a float.
pub(crate) fn factorial(n: usize) -> f64 {
    (1..=n).map(|k| k as f64).product()
}

pub(crate) fn assert_dim(what: &str, expected: usize, found: usize) {
    assert_eq!(found, expected, "{what} has dimension {found}, but the domain requires {expected}");
}
