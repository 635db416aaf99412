//! Rules shipped as JSON records.
//!
//! Records name their orbits by tag and may mix exact coefficients (given as strings such as
//! `"7/125"`) with floating-point coefficients. See [`cubature_records`] for the format.
use crate::domain::{Ball, Simplex};
use crate::error::Error;
use crate::Scheme;
use cubature_records::{parse_record, RuleRecord};
use log::debug;

/// The bundled records, keyed by name.
pub const BUNDLED: &[(&str, &str)] = &[
    ("octahedral_cube_5", include_str!("../../rules/octahedral_cube_5.json")),
    ("stroud_s3_3_1", include_str!("../../rules/stroud_s3_3_1.json")),
    ("zienkiewicz_7", include_str!("../../rules/zienkiewicz_7.json")),
];

/// Parses the bundled record with the given name.
pub fn bundled_record(name: &str) -> Result<RuleRecord, Error> {
    let (_, json) = BUNDLED
        .iter()
        .find(|(bundled, _)| *bundled == name)
        .ok_or_else(|| Error::UnknownRule { name: name.to_string() })?;
    debug!("Loading bundled rule record {name}");
    Ok(parse_record(json)?)
}

/// A centre point, the octahedron and the cube vertices, of degree 5 on the ball.
pub fn octahedral_cube_5() -> Result<Scheme<Ball>, Error> {
    Scheme::from_record(&bundled_record("octahedral_cube_5")?, Ball::new(3))
}

/// Stroud's `S3 3-1`, stored with exact coefficients.
pub fn stroud_s3_3_1() -> Result<Scheme<Ball>, Error> {
    Scheme::from_record(&bundled_record("stroud_s3_3_1")?, Ball::new(3))
}

/// A seven-point triangle rule of degree 5, tabulated to ten digits.
pub fn zienkiewicz_7() -> Result<Scheme<Simplex>, Error> {
    Scheme::from_record(&bundled_record("zienkiewicz_7")?, Simplex::triangle())
}
