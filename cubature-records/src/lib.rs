//! Parser for JSON records of symmetric cubature rules.
//!
//! A record describes one published rule compactly: metadata (name, domain, degree, citation)
//! and, for every symmetry tag, a list of generator rows `[weight, params...]`. For example:
//!
//! ```json
//! {
//!   "name": "centered_octahedron_3",
//!   "domain": "ball",
//!   "dim": 3,
//!   "degree": 3,
//!   "source": { "authors": ["A. H. Stroud"], "title": "Approximate Calculation of Multiple Integrals", "year": "1971" },
//!   "data": {
//!     "zero3": [["2/5"]],
//!     "symm_r00": [["1/10", "1"]]
//!   }
//! }
//! ```
//!
//! Coefficients are either JSON numbers, read as `f64`, or strings holding an exact rational
//! (`"2/5"`) or an exact decimal (`"0.125"`, `"-1.5e-3"`). Tags keep their order in the document,
//! which is the order in which they are expanded.
//!
//! The records are only minimally validated here. The rules they describe are expanded and
//! tested in `cubature`.

use cubature_symmetry::{Family, Numeric};
use log::debug;
use num::{BigInt, BigRational, One, Zero};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Errors produced while parsing or converting a rule record.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum ParseError {
    /// The document is not valid JSON, or lacks a required metadata field.
    #[error("invalid rule record: {0}")]
    Json(String),
    /// The data of a tag is not a list of rows of coefficients.
    #[error("invalid data for tag `{tag}`: {reason}")]
    InvalidData { tag: String, reason: String },
    /// A coefficient string is not a rational or decimal number.
    #[error("invalid coefficient `{value}` for tag `{tag}`: {reason}")]
    InvalidCoefficient { tag: String, value: String, reason: String },
    /// The domain requires an explicit dimension.
    #[error("records for domain `{domain}` must specify `dim`")]
    MissingDimension { domain: String },
    /// The dimension contradicts the domain.
    #[error("dimension {dim} is not valid for domain `{domain}`")]
    InvalidDimension { domain: String, dim: usize },
}

/// The reference domain of a record.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RecordDomain {
    Cube,
    Ball,
    Sphere,
    Triangle,
    Tetrahedron,
}

impl RecordDomain {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Cube => "cube",
            Self::Ball => "ball",
            Self::Sphere => "sphere",
            Self::Triangle => "triangle",
            Self::Tetrahedron => "tetrahedron",
        }
    }
}

/// Bibliographic metadata of a rule.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Citation {
    pub authors: Vec<String>,
    pub title: Option<String>,
    pub journal: Option<String>,
    pub year: Option<String>,
    pub volume: Option<String>,
    pub pages: Option<String>,
    pub url: Option<String>,
}

impl Citation {
    pub fn new(authors: &[&str], title: &str, year: &str) -> Self {
        Self {
            authors: authors.iter().map(|a| a.to_string()).collect(),
            title: Some(title.to_string()),
            year: Some(year.to_string()),
            ..Self::default()
        }
    }

    pub fn with_journal(self, journal: &str, volume: &str, pages: &str) -> Self {
        Self {
            journal: Some(journal.to_string()),
            volume: Some(volume.to_string()),
            pages: Some(pages.to_string()),
            ..self
        }
    }
}

/// A single coefficient of a record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Coefficient {
    Float(f64),
    Exact(String),
}

impl Coefficient {
    /// Converts the coefficient into the given numeric domain.
    ///
    /// Floats are converted as their binary value. Exact strings are parsed and converted, so
    /// they are rounded only when `T` is a floating-point type.
    pub fn to_numeric<T: Numeric>(&self, tag: &str) -> Result<T, ParseError> {
        let invalid = |value: String, reason: &str| ParseError::InvalidCoefficient {
            tag: tag.to_string(),
            value,
            reason: reason.to_string(),
        };
        match self {
            Self::Float(x) => T::from_f64(*x).ok_or_else(|| invalid(x.to_string(), "not a finite number")),
            Self::Exact(s) => {
                let value = parse_exact(s).ok_or_else(|| invalid(s.clone(), "expected a rational or decimal number"))?;
                Ok(T::from_rational(&value))
            }
        }
    }

    pub fn is_exact(&self) -> bool {
        matches!(self, Self::Exact(_))
    }
}

/// The largest power of ten a decimal coefficient may be scaled by, in either direction.
pub const MAX_DECIMAL_SCALE: u32 = 10_000;

/// Parses `"p/q"`, an integer or a decimal with optional exponent into an exact rational.
///
/// Decimals whose effective exponent (the exponent minus the number of fractional digits) exceeds
/// [`MAX_DECIMAL_SCALE`] in magnitude are rejected.
pub fn parse_exact(s: &str) -> Option<BigRational> {
    let s = s.trim();
    if let Some((numer, denom)) = s.split_once('/') {
        let numer: BigInt = numer.trim().parse().ok()?;
        let denom: BigInt = denom.trim().parse().ok()?;
        return (!denom.is_zero()).then(|| BigRational::new(numer, denom));
    }

    let (mantissa, exponent) = match s.find(|c: char| c == 'e' || c == 'E') {
        Some(idx) => (&s[..idx], s[idx + 1..].parse::<i32>().ok()?),
        None => (s, 0),
    };
    let (negative, unsigned) = match mantissa.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, mantissa.strip_prefix('+').unwrap_or(mantissa)),
    };
    let (int_part, frac_part) = unsigned.split_once('.').unwrap_or((unsigned, ""));
    let all_digits = |part: &str| part.bytes().all(|b| b.is_ascii_digit());
    if int_part.len() + frac_part.len() == 0 || !all_digits(int_part) || !all_digits(frac_part) {
        return None;
    }

    let digits: BigInt = format!("{int_part}{frac_part}").parse().ok()?;
    let scale = exponent.checked_sub(i32::try_from(frac_part.len()).ok()?)?;
    if scale.unsigned_abs() > MAX_DECIMAL_SCALE {
        return None;
    }
    let ten = BigInt::from(10);
    let power = num::pow(ten, scale.unsigned_abs() as usize);
    let magnitude = if scale >= 0 {
        BigRational::from_integer(digits * power)
    } else {
        BigRational::new(digits, power)
    };
    Some(if negative { -magnitude } else { magnitude })
}

/// A parsed rule record.
#[derive(Debug, Clone, PartialEq)]
pub struct RuleRecord {
    pub name: String,
    pub domain: RecordDomain,
    /// Cartesian dimension of the domain.
    pub dim: usize,
    /// The verified degree of exactness.
    pub degree: usize,
    /// The degree claimed by the source, if it differs from the verified degree.
    pub claimed_degree: Option<usize>,
    pub test_tolerance: Option<f64>,
    pub source: Option<Citation>,
    /// Generator rows per tag, in document order.
    pub data: Vec<(String, Vec<Vec<Coefficient>>)>,
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct RawRecord {
    name: String,
    domain: RecordDomain,
    #[serde(default)]
    dim: Option<usize>,
    degree: usize,
    #[serde(default)]
    claimed_degree: Option<usize>,
    #[serde(default)]
    test_tolerance: Option<f64>,
    #[serde(default)]
    source: Option<Citation>,
    data: Map<String, Value>,
}

fn resolve_dim(domain: RecordDomain, dim: Option<usize>) -> Result<usize, ParseError> {
    let fixed = match domain {
        RecordDomain::Triangle => Some(2),
        RecordDomain::Tetrahedron => Some(3),
        RecordDomain::Cube | RecordDomain::Ball | RecordDomain::Sphere => None,
    };
    match (fixed, dim) {
        (Some(fixed), None) => Ok(fixed),
        (Some(fixed), Some(dim)) if fixed == dim => Ok(dim),
        (None, Some(dim)) if dim >= 1 => Ok(dim),
        (_, Some(dim)) => Err(ParseError::InvalidDimension {
            domain: domain.as_str().to_string(),
            dim,
        }),
        (None, None) => Err(ParseError::MissingDimension {
            domain: domain.as_str().to_string(),
        }),
    }
}

/// Parses a JSON rule record.
pub fn parse_record(json: &str) -> Result<RuleRecord, ParseError> {
    let raw: RawRecord = serde_json::from_str(json).map_err(|err| ParseError::Json(err.to_string()))?;
    let dim = resolve_dim(raw.domain, raw.dim)?;

    let mut data = Vec::with_capacity(raw.data.len());
    for (tag, value) in raw.data {
        let rows: Vec<Vec<Coefficient>> =
            serde_json::from_value(value).map_err(|err| ParseError::InvalidData {
                tag: tag.clone(),
                reason: err.to_string(),
            })?;
        data.push((tag, rows));
    }

    debug!("Parsed rule record {} with {} symmetry tag(s)", raw.name, data.len());
    Ok(RuleRecord {
        name: raw.name,
        domain: raw.domain,
        dim,
        degree: raw.degree,
        claimed_degree: raw.claimed_degree,
        test_tolerance: raw.test_tolerance,
        source: raw.source,
        data,
    })
}

impl RuleRecord {
    /// The orbit family used to resolve the tags of the record.
    pub fn family(&self) -> Family {
        match self.domain {
            RecordDomain::Triangle => Family::Triangle,
            RecordDomain::Tetrahedron => Family::Tetrahedron,
            RecordDomain::Cube | RecordDomain::Ball | RecordDomain::Sphere => Family::cartesian(self.dim),
        }
    }

    /// Whether every coefficient is given exactly.
    pub fn is_exact(&self) -> bool {
        self.data
            .iter()
            .flat_map(|(_, rows)| rows.iter().flatten())
            .all(Coefficient::is_exact)
    }

    /// The generator rows converted into the given numeric domain.
    pub fn rows<T: Numeric>(&self) -> Result<Vec<(String, Vec<Vec<T>>)>, ParseError> {
        self.data
            .iter()
            .map(|(tag, rows)| {
                let rows = rows
                    .iter()
                    .map(|row| row.iter().map(|c| c.to_numeric(tag)).collect::<Result<Vec<T>, _>>())
                    .collect::<Result<Vec<Vec<T>>, _>>()?;
                Ok((tag.clone(), rows))
            })
            .collect()
    }

    /// The sum of all weights, counting every orbit point, when all weights are exact.
    ///
    /// Requires the orbit sizes, which are obtained by expanding the record.
    pub fn exact_weight_sum(&self) -> Option<BigRational> {
        if !self.is_exact() {
            return None;
        }
        let rows = self.rows::<BigRational>().ok()?;
        let (weights, _) = cubature_symmetry::expand_tagged(self.family(), &rows).ok()?;
        Some(weights.into_iter().fold(BigRational::zero(), |acc, w| acc + w))
    }

    /// Whether the exact weights sum to one, as normalized records must.
    pub fn is_normalized(&self) -> Option<bool> {
        self.exact_weight_sum().map(|sum| sum.is_one())
    }
}
