use super::{assert_dim, Domain, Location};
use cubature_symmetry::Family;
use nalgebra::{DMatrix, DVector};

/// The wedge (triangular prism) with the unit triangle `x, y >= 0, x + y <= 1` as its base and
/// `z` in `[-1, 1]`.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash)]
pub struct Wedge;

/// The affine map `x -> matrix * x + offset`.
#[derive(Debug, Clone, PartialEq)]
pub struct Affine {
    pub matrix: DMatrix<f64>,
    pub offset: DVector<f64>,
}

impl Affine {
    pub fn new(matrix: DMatrix<f64>, offset: DVector<f64>) -> Self {
        assert!(matrix.is_square(), "affine placements must be square");
        assert_eq!(matrix.nrows(), offset.len(), "offset must match the matrix dimension");
        Self { matrix, offset }
    }

    pub fn identity(dim: usize) -> Self {
        Self::new(DMatrix::identity(dim, dim), DVector::zeros(dim))
    }
}

impl Domain for Wedge {
    type Placement = Affine;

    fn name(&self) -> &'static str {
        "wedge"
    }

    fn ambient_dim(&self) -> usize {
        3
    }

    fn reference_measure(&self) -> f64 {
        1.0
    }

    fn reference_placement(&self) -> Affine {
        Affine::identity(3)
    }

    fn place(&self, affine: &Affine, point: &DVector<f64>) -> DVector<f64> {
        assert_dim("affine map", 3, affine.offset.len());
        assert_dim("point", 3, point.len());
        &affine.matrix * point + &affine.offset
    }

    fn measure(&self, affine: &Affine) -> f64 {
        affine.matrix.determinant().abs()
    }

    fn locate(&self, point: &DVector<f64>) -> Location {
        let (x, y, z) = (point[0], point[1], point[2]);
        let margin = [x, y, 1.0 - x - y, 1.0 - z.abs()]
            .into_iter()
            .fold(f64::INFINITY, f64::min);
        Location::from_margin(margin)
    }

    fn orbit_family(&self) -> Option<Family> {
        None
    }
}
