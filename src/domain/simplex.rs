use super::{assert_dim, factorial, Domain, Location};
use cubature_symmetry::Family;
use nalgebra::{DMatrix, DVector};

/// The simplex in `dim` dimensions, with reference points in barycentric coordinates.
///
/// Reference points have `dim + 1` coordinates that sum to one. The reference simplex has the
/// vertices `0, e_1, ..., e_dim`, so a barycentric point `(l_0, ..., l_dim)` corresponds to the
/// Cartesian point `(l_1, ..., l_dim)`.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Simplex {
    pub dim: usize,
}

impl Simplex {
    pub fn new(dim: usize) -> Self {
        Self { dim }
    }

    pub fn triangle() -> Self {
        Self::new(2)
    }

    pub fn tetrahedron() -> Self {
        Self::new(3)
    }
}

/// The vertices of a placed simplex.
#[derive(Debug, Clone, PartialEq)]
pub struct SimplexVertices {
    pub vertices: Vec<DVector<f64>>,
}

impl SimplexVertices {
    pub fn new(vertices: Vec<DVector<f64>>) -> Self {
        Self { vertices }
    }

    /// The matrix whose columns are the edge vectors `v_i - v_0`.
    fn edge_matrix(&self) -> DMatrix<f64> {
        let origin = &self.vertices[0];
        let edges: Vec<DVector<f64>> = self.vertices[1..].iter().map(|v| v - origin).collect();
        DMatrix::from_columns(&edges)
    }
}

impl Domain for Simplex {
    type Placement = SimplexVertices;

    fn name(&self) -> &'static str {
        match self.dim {
            2 => "triangle",
            3 => "tetrahedron",
            _ => "simplex",
        }
    }

    fn ambient_dim(&self) -> usize {
        self.dim
    }

    fn point_dim(&self) -> usize {
        self.dim + 1
    }

    fn reference_measure(&self) -> f64 {
        1.0 / factorial(self.dim)
    }

    fn reference_placement(&self) -> SimplexVertices {
        let mut vertices = vec![DVector::zeros(self.dim)];
        vertices.extend((0..self.dim).map(|i| DVector::from_fn(self.dim, |j, _| if i == j { 1.0 } else { 0.0 })));
        SimplexVertices { vertices }
    }

    fn place(&self, placement: &SimplexVertices, point: &DVector<f64>) -> DVector<f64> {
        assert_dim("vertex list", self.dim + 1, placement.vertices.len());
        assert_dim("point", self.dim + 1, point.len());
        placement
            .vertices
            .iter()
            .zip(point.iter())
            .fold(DVector::zeros(self.dim), |acc, (vertex, lambda)| {
                assert_dim("vertex", self.dim, vertex.len());
                acc + vertex * *lambda
            })
    }

    fn measure(&self, placement: &SimplexVertices) -> f64 {
        assert_dim("vertex list", self.dim + 1, placement.vertices.len());
        placement.edge_matrix().determinant().abs() / factorial(self.dim)
    }

    fn locate(&self, point: &DVector<f64>) -> Location {
        Location::from_margin(point.min())
    }

    fn orbit_family(&self) -> Option<Family> {
        match self.dim {
            2 => Some(Family::Triangle),
            3 => Some(Family::Tetrahedron),
            _ => None,
        }
    }
}
