use cubature::domain::Domain;
use cubature::registry::{aliases, get, names, resolve, AnyScheme};
use cubature::{Error, Quadrature};
use itertools::Itertools;
use util::{
    ball_monomial_integral, cube_monomial_integral, eval_monomial, monomials, simplex_monomial_integral,
    sphere_monomial_integral, wedge_monomial_integral,
};

fn exact_integral(scheme: &AnyScheme) -> fn(&[usize]) -> f64 {
    match scheme.domain_name() {
        "cube" => cube_monomial_integral,
        "ball" => ball_monomial_integral,
        "sphere" => sphere_monomial_integral,
        "triangle" | "tetrahedron" | "simplex" => simplex_monomial_integral,
        "wedge" => wedge_monomial_integral,
        other => panic!("no exact integrals for {other}"),
    }
}

fn reference_measure(scheme: &AnyScheme) -> f64 {
    match scheme {
        AnyScheme::Cube(s) => s.domain().reference_measure(),
        AnyScheme::Ball(s) => s.domain().reference_measure(),
        AnyScheme::Sphere(s) => s.domain().reference_measure(),
        AnyScheme::Simplex(s) => s.domain().reference_measure(),
        AnyScheme::Wedge(s) => s.domain().reference_measure(),
    }
}

#[test]
fn names_are_sorted_and_unique() {
    let names = names();
    assert!(names.len() > 30);
    assert!(names.iter().tuple_windows().all(|(a, b)| a < b));
    assert!(names.iter().all(|name| name.contains('/')));
}

#[test]
fn every_registered_rule_integrates_monomials_up_to_its_degree() {
    for name in names() {
        let mut constructed = 0;
        for dim in 1..=4 {
            let scheme = match get(name, dim) {
                Ok(scheme) => scheme,
                Err(Error::UnsupportedDimension { .. }) => continue,
                Err(error) => panic!("{name} in dimension {dim}: {error}"),
            };
            constructed += 1;
            assert_eq!(scheme.ambient_dim(), dim);
            assert_eq!(scheme.len(), scheme.weights().len());

            let exact = exact_integral(&scheme);
            let measure = reference_measure(&scheme);
            for degree in 0..=scheme.degree() {
                for alpha in monomials(dim, degree) {
                    let approx = scheme.integrate_reference(|x| eval_monomial(&alpha, x));
                    let error = ((approx - exact(&alpha)) / measure).abs();
                    assert!(
                        error <= scheme.test_tolerance(),
                        "{name} in dimension {dim}: error {error:e} for {alpha:?}"
                    );
                }
            }
        }
        assert!(constructed > 0, "{name} is not defined in dimensions 1 to 4");
    }
}

#[test]
fn aliases_resolve_to_registered_rules() {
    for (alias, canonical) in aliases() {
        assert_eq!(resolve(alias).unwrap(), canonical);
    }
    assert_eq!(resolve("sphere/stroud_u3_3_1").unwrap(), "sphere/octahedron");
    assert_eq!(resolve("ball/centered_octahedron_3").unwrap(), "ball/centered_octahedron_3");

    let alias = get("triangle/hammer_marlowe_stroud_1", 2).unwrap();
    let canonical = get("triangle/centroid", 2).unwrap();
    assert_eq!(alias, canonical);
}

#[test]
fn unknown_names_are_rejected() {
    assert_eq!(
        get("ball/no_such_rule", 3).unwrap_err(),
        Error::UnknownRule {
            name: "ball/no_such_rule".to_string()
        }
    );
    assert!(matches!(resolve("centroid"), Err(Error::UnknownRule { .. })));
}

#[test]
fn fixed_dimension_rules_reject_other_dimensions() {
    assert!(matches!(
        get("ball/centered_octahedron_3", 2),
        Err(Error::UnsupportedDimension { dim: 2, .. })
    ));
    assert!(matches!(get("interval/simpson", 2), Err(Error::UnsupportedDimension { .. })));
    assert!(get("cube/cn_5_reduced", 7).is_ok());
}

#[test]
fn typed_access() {
    let scheme = get("ball/centered_octahedron_3", 3).unwrap();
    assert_eq!(scheme.name(), "centered_octahedron_3");
    assert_eq!(scheme.degree(), 3);
    assert_eq!(scheme.domain_name(), "ball");
    assert!(scheme.source().is_some());
    assert!(scheme.report().positive_weights);
    assert!(scheme.to_string().starts_with("centered_octahedron_3 (ball in dimension 3"));
    assert!(scheme.clone().into_cube().is_none());
    let ball = scheme.into_ball().unwrap();
    assert_eq!(ball.len(), 7);

    assert!(get("wedge/radon_gauss_5", 3).unwrap().into_wedge().is_some());
    assert!(get("triangle/radon_5", 2).unwrap().into_simplex().is_some());
    assert!(get("sphere/octahedron", 3).unwrap().into_sphere().is_some());
}

#[test]
fn reports_serialize_to_json() {
    let report = get("cube/stroud_cn_3_1", 4).unwrap().report();
    let json = serde_json::to_value(report).unwrap();
    assert_eq!(
        json,
        serde_json::json!({
            "num_points": 8,
            "location": "Exterior",
            "positive_weights": true,
        })
    );
}

#[test]
fn record_and_literal_octahedron_agree() {
    let literal = get("ball/centered_octahedron_3", 3).unwrap();
    let record = get("ball/stroud_s3_3_1", 3).unwrap();
    assert_eq!(record.name(), "stroud_s3_3_1");
    assert_eq!(record.weights(), literal.weights());
    assert_eq!(record.points(), literal.points());
    assert_eq!(record.source(), literal.source());
}
