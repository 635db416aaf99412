use cubature_symmetry::{
    expand_all, expand_tag, expand_tagged, Error, Family, NdOrbit, Numeric, PlaneOrbit, SpaceOrbit, Symmetry,
};
use num::BigRational;
use proptest::collection::vec;
use proptest::prelude::*;

fn q(numer: i64, denom: i64) -> BigRational {
    BigRational::from_ratio(numer, denom)
}

#[test]
fn weights_are_replicated_across_each_orbit() {
    let entries = vec![
        (0.25, PlaneOrbit::Zero),
        (0.125, PlaneOrbit::D4Aa(0.5)),
        (0.0625, PlaneOrbit::D4Ab(0.5, 0.25)),
    ];
    let (weights, points) = expand_all(entries).unwrap();
    assert_eq!(points.len(), 13);
    assert_eq!(weights[0], 0.25);
    assert!(weights[1..5].iter().all(|&w| w == 0.125));
    assert!(weights[5..].iter().all(|&w| w == 0.0625));
}

#[test]
fn expand_all_fails_without_points() {
    let entries: Vec<(f64, SpaceOrbit<f64>)> = Vec::new();
    assert_eq!(expand_all(entries), Err(Error::EmptyScheme));
    let empty_rows: Vec<(&str, Vec<Vec<f64>>)> = vec![("zero3", vec![]), ("symm_r00", vec![])];
    assert_eq!(expand_tagged(Family::Space, &empty_rows), Err(Error::EmptyScheme));
}

#[test]
fn tagged_ball_entries_expand_exactly() {
    // Centre weight and six axis points of the unit ball rule of degree 3
    let entries = vec![
        ("zero3", vec![vec![q(2, 5)]]),
        ("symm_r00", vec![vec![q(1, 10), q(1, 1)]]),
    ];
    let (weights, points) = expand_tagged(Family::Space, &entries).unwrap();
    assert_eq!(points.len(), 7);
    assert_eq!(points[0], vec![q(0, 1); 3]);
    assert_eq!(points[1], vec![q(1, 1), q(0, 1), q(0, 1)]);
    assert_eq!(points[2], vec![q(-1, 1), q(0, 1), q(0, 1)]);
    assert_eq!(points[6], vec![q(0, 1), q(0, 1), q(-1, 1)]);

    let total = weights.iter().fold(q(0, 1), |acc, w| acc + w);
    assert_eq!(total, q(1, 1));
}

#[test]
fn tagged_entries_preserve_entry_and_row_order() {
    let entries = vec![
        ("symm_r0", vec![vec![0.1, 0.5], vec![0.2, 0.25]]),
        ("zero", vec![vec![0.3]]),
    ];
    let (weights, points) = expand_tagged(Family::Plane, &entries).unwrap();
    assert_eq!(weights, vec![0.1, 0.1, 0.1, 0.1, 0.2, 0.2, 0.2, 0.2, 0.3]);
    assert_eq!(points[0], vec![0.5, 0.0]);
    assert_eq!(points[4], vec![0.25, 0.0]);
    assert_eq!(points[8], vec![0.0, 0.0]);
}

#[test]
fn tagged_rows_must_carry_a_weight() {
    let entries = vec![("centroid", vec![vec![]])];
    assert_eq!(
        expand_tagged::<f64, _>(Family::Triangle, &entries),
        Err(Error::MissingWeight {
            tag: "centroid".to_string()
        })
    );
}

#[test]
fn tagged_errors_name_the_offending_tag() {
    let entries = vec![("d4_aa", vec![vec![0.25, 0.5, 0.5]])];
    let error = expand_tagged(Family::Plane, &entries).unwrap_err();
    assert_eq!(
        error,
        Error::ArityMismatch {
            tag: "d4_aa".to_string(),
            expected: 1,
            found: 2
        }
    );
    assert!(error.to_string().contains("d4_aa"));

    let entries = vec![("symm_rrr", vec![vec![0.25, 0.5]])];
    assert!(matches!(
        expand_tagged(Family::Plane, &entries),
        Err(Error::UnknownSymmetryTag { dim: 2, .. })
    ));
}

#[test]
fn cartesian_family_resolves_generic_tags() {
    assert_eq!(Family::cartesian(2), Family::Plane);
    assert_eq!(Family::cartesian(3), Family::Space);
    assert_eq!(Family::cartesian(5), Family::Cartesian(5));
    assert_eq!(Family::Tetrahedron.dim(), 4);

    let points = expand_tag(Family::Cartesian(4), "pm_all", &[1.0]).unwrap();
    assert_eq!(points.len(), 16);
    let points = expand_tag(Family::Cartesian(4), "pm_axis_1", &[1.0]).unwrap();
    assert_eq!(points, vec![vec![0.0, 1.0, 0.0, 0.0], vec![0.0, -1.0, 0.0, 0.0]]);
}

proptest! {
    #[test]
    fn expand_all_repeats_each_weight_orbit_size_times(
        entries in vec((0.0..1.0, any::<NdOrbit<f64>>()), 1..6)
    ) {
        // Orbits must share a dimension to form a rule, but replication does not care
        let sizes: Vec<usize> = entries.iter().map(|(_, orbit)| orbit.orbit_size()).collect();
        let expected_weights: Vec<f64> = entries.iter().map(|(w, _)| *w).collect();
        let (weights, points) = expand_all(entries).unwrap();

        prop_assert_eq!(weights.len(), points.len());
        prop_assert_eq!(weights.len(), sizes.iter().sum::<usize>());

        let mut offset = 0;
        for (size, w) in sizes.iter().zip(expected_weights) {
            prop_assert!(weights[offset..offset + size].iter().all(|&wi| wi == w));
            offset += size;
        }
    }

    #[test]
    fn exact_tagged_expansion_rounds_to_float_expansion(
        numer in 1i64..50, denom in 1i64..50, weight in 1i64..10
    ) {
        let exact_rows = vec![("symm_rss_pm", vec![vec![q(weight, 7), q(numer, denom), q(denom, numer + denom)]])];
        let float_rows = vec![(
            "symm_rss_pm",
            vec![vec![q(weight, 7).to_f64(), q(numer, denom).to_f64(), q(denom, numer + denom).to_f64()]],
        )];
        let (exact_weights, exact_points) = expand_tagged(Family::Space, &exact_rows).unwrap();
        let (float_weights, float_points) = expand_tagged(Family::Space, &float_rows).unwrap();

        let rounded_weights: Vec<f64> = exact_weights.iter().map(Numeric::to_f64).collect();
        let rounded_points: Vec<Vec<f64>> = exact_points
            .iter()
            .map(|p| p.iter().map(Numeric::to_f64).collect())
            .collect();
        prop_assert_eq!(rounded_weights, float_weights);
        prop_assert_eq!(rounded_points, float_points);
    }
}
