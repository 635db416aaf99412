use cubature::domain::{
    unit_ball_volume, unit_sphere_area, Affine, Ball, Cube, Cuboid, Domain, Hyperball, Location, Simplex,
    SimplexVertices, Sphere, Wedge,
};
use cubature::symmetry::Family;
use matrixcompare::{assert_matrix_eq, assert_scalar_eq};
use nalgebra::{dvector, DMatrix, DVector};
use std::f64::consts::PI;
use util::assert_panics;

#[test]
fn unit_ball_volumes_and_sphere_areas() {
    assert_scalar_eq!(unit_ball_volume(0), 1.0);
    assert_scalar_eq!(unit_ball_volume(1), 2.0);
    assert_scalar_eq!(unit_ball_volume(2), PI, comp = float);
    assert_scalar_eq!(unit_ball_volume(3), 4.0 * PI / 3.0, comp = float);
    assert_scalar_eq!(unit_ball_volume(4), PI * PI / 2.0, comp = float);
    assert_scalar_eq!(unit_sphere_area(2), 2.0 * PI, comp = float);
    assert_scalar_eq!(unit_sphere_area(3), 4.0 * PI, comp = float);
}

#[test]
fn reference_measures() {
    assert_eq!(Cube::new(3).reference_measure(), 8.0);
    assert_scalar_eq!(Simplex::triangle().reference_measure(), 0.5);
    assert_scalar_eq!(Simplex::tetrahedron().reference_measure(), 1.0 / 6.0, comp = float);
    assert_eq!(Wedge.reference_measure(), 1.0);

    // Reference placements reproduce the reference measures
    let cube = Cube::new(4);
    assert_eq!(cube.measure(&cube.reference_placement()), cube.reference_measure());
    let simplex = Simplex::tetrahedron();
    assert_scalar_eq!(
        simplex.measure(&simplex.reference_placement()),
        simplex.reference_measure(),
        comp = float
    );
    assert_eq!(Wedge.measure(&Wedge.reference_placement()), 1.0);
}

#[test]
fn cuboid_placement() {
    let cube = Cube::new(2);
    let cuboid = Cuboid::new(dvector![1.0, -1.0], dvector![3.0, 2.0]);
    assert_matrix_eq!(cube.place(&cuboid, &dvector![-1.0, -1.0]), dvector![1.0, -1.0]);
    assert_matrix_eq!(cube.place(&cuboid, &dvector![1.0, 1.0]), dvector![3.0, 2.0]);
    assert_matrix_eq!(cube.place(&cuboid, &dvector![0.0, 0.0]), dvector![2.0, 0.5]);
    assert_eq!(cube.measure(&cuboid), 6.0);
}

#[test]
fn hyperball_placement() {
    let placement = Hyperball::new(dvector![1.0, 2.0, 3.0], 2.0);
    let ball = Ball::new(3);
    assert_matrix_eq!(ball.place(&placement, &dvector![0.5, 0.0, -1.0]), dvector![2.0, 2.0, 1.0]);
    assert_scalar_eq!(ball.measure(&placement), 32.0 * PI / 3.0, comp = float);

    let sphere = Sphere::new(3);
    assert_scalar_eq!(sphere.measure(&placement), 16.0 * PI, comp = float);
    let circle = Sphere::new(2);
    assert_scalar_eq!(circle.measure(&Hyperball::new(dvector![0.0, 0.0], 3.0)), 6.0 * PI, comp = float);
}

#[test]
fn simplex_placement() {
    let triangle = Simplex::triangle();
    let vertices = SimplexVertices::new(vec![dvector![1.0, 1.0], dvector![3.0, 1.0], dvector![1.0, 4.0]]);
    assert_matrix_eq!(triangle.place(&vertices, &dvector![1.0, 0.0, 0.0]), dvector![1.0, 1.0]);
    assert_matrix_eq!(triangle.place(&vertices, &dvector![0.0, 0.0, 1.0]), dvector![1.0, 4.0]);
    assert_matrix_eq!(
        triangle.place(&vertices, &dvector![0.0, 0.5, 0.5]),
        dvector![2.0, 2.5],
        comp = float
    );
    assert_scalar_eq!(triangle.measure(&vertices), 3.0, comp = float);

    // Reversing the orientation does not change the measure
    let reversed = SimplexVertices::new(vertices.vertices.iter().rev().cloned().collect());
    assert_scalar_eq!(triangle.measure(&reversed), 3.0, comp = float);
}

#[test]
fn affine_placement() {
    let matrix = DMatrix::from_diagonal(&dvector![2.0, 3.0, 0.5]);
    let affine = Affine::new(matrix, dvector![1.0, 0.0, -1.0]);
    assert_matrix_eq!(Wedge.place(&affine, &dvector![1.0, 0.0, 1.0]), dvector![3.0, 0.0, -0.5]);
    assert_scalar_eq!(Wedge.measure(&affine), 3.0, comp = float);
}

#[test]
fn placement_dimension_mismatch_panics() {
    assert_panics!(Ball::new(3).place(&Hyperball::unit(2), &DVector::zeros(3)));
    assert_panics!(Ball::new(3).place(&Hyperball::unit(3), &DVector::zeros(2)));
    assert_panics!(Cube::new(2).place(&Cube::new(3).reference_placement(), &DVector::zeros(2)));
    assert_panics!(Simplex::triangle().place(&Simplex::triangle().reference_placement(), &DVector::zeros(2)));
    assert_panics!(Affine::new(DMatrix::zeros(2, 3), DVector::zeros(2)));
}

#[test]
fn cube_locations() {
    let cube = Cube::new(2);
    assert_eq!(cube.locate(&dvector![0.5, -0.5]), Location::Interior);
    assert_eq!(cube.locate(&dvector![1.0, 0.0]), Location::Boundary);
    assert_eq!(cube.locate(&dvector![-1.0, -1.0]), Location::Boundary);
    assert_eq!(cube.locate(&dvector![1.5, 0.0]), Location::Exterior);
}

#[test]
fn ball_and_sphere_locations() {
    let ball = Ball::new(3);
    assert_eq!(ball.locate(&dvector![0.0, 0.5, 0.0]), Location::Interior);
    assert_eq!(ball.locate(&dvector![0.0, 0.0, 1.0]), Location::Boundary);
    assert_eq!(ball.locate(&dvector![0.8, 0.8, 0.0]), Location::Exterior);

    // The sphere is a manifold, so its points are interior
    let sphere = Sphere::new(3);
    let r = 1.0 / 3f64.sqrt();
    assert_eq!(sphere.locate(&dvector![r, r, r]), Location::Interior);
    assert_eq!(sphere.locate(&dvector![0.5, 0.0, 0.0]), Location::Exterior);
}

#[test]
fn simplex_and_wedge_locations() {
    let triangle = Simplex::triangle();
    assert_eq!(triangle.locate(&dvector![0.2, 0.3, 0.5]), Location::Interior);
    assert_eq!(triangle.locate(&dvector![0.0, 0.5, 0.5]), Location::Boundary);
    assert_eq!(triangle.locate(&dvector![-0.1, 0.6, 0.5]), Location::Exterior);

    assert_eq!(Wedge.locate(&dvector![0.25, 0.25, 0.0]), Location::Interior);
    assert_eq!(Wedge.locate(&dvector![0.5, 0.5, 0.0]), Location::Boundary);
    assert_eq!(Wedge.locate(&dvector![0.25, 0.25, 1.0]), Location::Boundary);
    assert_eq!(Wedge.locate(&dvector![0.25, 0.25, 1.5]), Location::Exterior);
}

#[test]
fn locations_are_ordered_by_severity() {
    assert!(Location::Interior < Location::Boundary);
    assert!(Location::Boundary < Location::Exterior);
}

#[test]
fn orbit_families() {
    assert_eq!(Cube::new(1).orbit_family(), Some(Family::Cartesian(1)));
    assert_eq!(Cube::new(2).orbit_family(), Some(Family::Plane));
    assert_eq!(Ball::new(3).orbit_family(), Some(Family::Space));
    assert_eq!(Sphere::new(5).orbit_family(), Some(Family::Cartesian(5)));
    assert_eq!(Simplex::triangle().orbit_family(), Some(Family::Triangle));
    assert_eq!(Simplex::tetrahedron().orbit_family(), Some(Family::Tetrahedron));
    assert_eq!(Simplex::new(4).orbit_family(), None);
    assert_eq!(Wedge.orbit_family(), None);
}

#[test]
fn domain_names_and_dimensions() {
    assert_eq!(Simplex::triangle().name(), "triangle");
    assert_eq!(Simplex::tetrahedron().name(), "tetrahedron");
    assert_eq!(Simplex::new(4).name(), "simplex");
    assert_eq!(Simplex::triangle().point_dim(), 3);
    assert_eq!(Simplex::triangle().ambient_dim(), 2);
    assert_eq!(Sphere::new(3).point_dim(), 3);
    assert_eq!(Wedge.ambient_dim(), 3);
}
