use cubature_records::{
    parse_exact, parse_record, Citation, Coefficient, ParseError, RecordDomain, MAX_DECIMAL_SCALE,
};
use cubature_symmetry::Family;
use matrixcompare::assert_scalar_eq;
use num::BigRational;

fn q(numer: i64, denom: i64) -> BigRational {
    BigRational::new(numer.into(), denom.into())
}

const BALL_RECORD: &str = r#"
{
  "name": "centered_octahedron_3",
  "domain": "ball",
  "dim": 3,
  "degree": 3,
  "source": {
    "authors": ["A. H. Stroud"],
    "title": "Approximate Calculation of Multiple Integrals",
    "year": "1971"
  },
  "data": {
    "zero3": [["2/5"]],
    "symm_r00": [["1/10", "1"]]
  }
}
"#;

#[test]
fn basic_ball_record() {
    let record = parse_record(BALL_RECORD).unwrap();
    assert_eq!(record.name, "centered_octahedron_3");
    assert_eq!(record.domain, RecordDomain::Ball);
    assert_eq!(record.dim, 3);
    assert_eq!(record.degree, 3);
    assert_eq!(record.claimed_degree, None);
    assert_eq!(record.family(), Family::Space);
    assert_eq!(
        record.source,
        Some(Citation::new(
            &["A. H. Stroud"],
            "Approximate Calculation of Multiple Integrals",
            "1971"
        ))
    );
    assert!(record.is_exact());
    assert_eq!(record.is_normalized(), Some(true));

    let rows = record.rows::<BigRational>().unwrap();
    assert_eq!(rows[0], ("zero3".to_string(), vec![vec![q(2, 5)]]));
    assert_eq!(rows[1], ("symm_r00".to_string(), vec![vec![q(1, 10), q(1, 1)]]));
}

#[test]
fn tags_keep_document_order() {
    let json = r#"
    {
      "name": "ordered",
      "domain": "sphere",
      "dim": 3,
      "degree": 3,
      "data": { "symm_rrr": [[0.125, 0.5773502691896258]], "symm_r00": [], "zero3": [[0.0]] }
    }"#;
    let record = parse_record(json).unwrap();
    let tags: Vec<&str> = record.data.iter().map(|(tag, _)| tag.as_str()).collect();
    assert_eq!(tags, vec!["symm_rrr", "symm_r00", "zero3"]);
    assert!(!record.is_exact());
    assert_eq!(record.is_normalized(), None);

    let rows = record.rows::<f64>().unwrap();
    assert_scalar_eq!(rows[0].1[0][1], 1.0 / 3f64.sqrt(), comp = abs, tol = 1e-15);
}

#[test]
fn simplex_records_infer_their_dimension() {
    let json = r#"{ "name": "t", "domain": "triangle", "degree": 1, "data": { "centroid": [["1"]] } }"#;
    let record = parse_record(json).unwrap();
    assert_eq!(record.dim, 2);
    assert_eq!(record.family(), Family::Triangle);

    let json = r#"{ "name": "t", "domain": "tetrahedron", "dim": 2, "degree": 1, "data": {} }"#;
    assert_eq!(
        parse_record(json),
        Err(ParseError::InvalidDimension {
            domain: "tetrahedron".to_string(),
            dim: 2
        })
    );

    let json = r#"{ "name": "c", "domain": "cube", "degree": 1, "data": {} }"#;
    assert_eq!(
        parse_record(json),
        Err(ParseError::MissingDimension {
            domain: "cube".to_string()
        })
    );
}

#[test]
fn malformed_records_are_rejected() {
    assert!(matches!(parse_record("{"), Err(ParseError::Json(_))));
    assert!(matches!(
        parse_record(r#"{ "name": "x", "domain": "torus", "dim": 2, "degree": 1, "data": {} }"#),
        Err(ParseError::Json(_))
    ));

    let json = r#"{ "name": "x", "domain": "ball", "dim": 2, "degree": 1, "data": { "zero": [1.0] } }"#;
    assert!(matches!(
        parse_record(json),
        Err(ParseError::InvalidData { tag, .. }) if tag == "zero"
    ));
}

#[test]
fn invalid_coefficients_name_their_tag() {
    let json = r#"{ "name": "x", "domain": "ball", "dim": 2, "degree": 1, "data": { "d4_aa": [["1/4", "half"]] } }"#;
    let record = parse_record(json).unwrap();
    let error = record.rows::<f64>().unwrap_err();
    assert!(matches!(
        &error,
        ParseError::InvalidCoefficient { tag, value, .. } if tag == "d4_aa" && value == "half"
    ));
    assert!(error.to_string().contains("d4_aa"));
}

#[test]
fn exact_strings_accept_rationals_and_decimals() {
    assert_eq!(parse_exact("2/5"), Some(q(2, 5)));
    assert_eq!(parse_exact(" -3 / 12 "), Some(q(-1, 4)));
    assert_eq!(parse_exact("7"), Some(q(7, 1)));
    assert_eq!(parse_exact("0.125"), Some(q(1, 8)));
    assert_eq!(parse_exact("-1.5e-3"), Some(q(-3, 2000)));
    assert_eq!(parse_exact("+2.5E2"), Some(q(250, 1)));
    assert_eq!(parse_exact(".5"), Some(q(1, 2)));

    assert_eq!(parse_exact("1/0"), None);
    assert_eq!(parse_exact(""), None);
    assert_eq!(parse_exact("."), None);
    assert_eq!(parse_exact("1.2.3"), None);
    assert_eq!(parse_exact("sqrt(2)"), None);
}

#[test]
fn extreme_exponents_are_rejected() {
    assert_eq!(parse_exact("1.5e-2147483648"), None);
    assert_eq!(parse_exact("1e2147483647"), None);
    assert_eq!(parse_exact("1e2000000000"), None);
    assert_eq!(parse_exact("1e99999999999"), None);

    let bound = MAX_DECIMAL_SCALE as i32;
    assert!(parse_exact(&format!("1e{bound}")).is_some());
    assert!(parse_exact(&format!("1e-{bound}")).is_some());
    assert_eq!(parse_exact(&format!("1e{}", bound + 1)), None);
    // Fractional digits count towards the scale
    assert_eq!(parse_exact(&format!("0.5e-{bound}")), None);

    let json = r#"{ "name": "x", "domain": "ball", "dim": 3, "degree": 1, "data": { "zero3": [["1.5e-2147483648"]] } }"#;
    let record = parse_record(json).unwrap();
    assert!(matches!(
        record.rows::<f64>(),
        Err(ParseError::InvalidCoefficient { tag, .. }) if tag == "zero3"
    ));
    assert!(matches!(
        record.rows::<BigRational>(),
        Err(ParseError::InvalidCoefficient { .. })
    ));
    assert_eq!(record.exact_weight_sum(), None);
}

#[test]
fn float_coefficients_convert_exactly() {
    let coefficient = Coefficient::Float(0.1);
    let exact: BigRational = coefficient.to_numeric("zero").unwrap();
    // The binary value of 0.1 is not 1/10
    assert_ne!(exact, q(1, 10));
    assert_eq!(coefficient.to_numeric::<f64>("zero").unwrap(), 0.1);
}
