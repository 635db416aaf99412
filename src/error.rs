//! Library-wide error type.
use cubature_records::ParseError;

/// Errors returned when constructing or looking up schemes.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    /// An orbit could not be resolved or expanded.
    #[error(transparent)]
    Symmetry(#[from] cubature_symmetry::Error),
    /// A rule record could not be parsed.
    #[error(transparent)]
    Record(#[from] ParseError),
    /// Weights and points differ in length.
    #[error("scheme has {weights} weight(s) but {points} point(s)")]
    ShapeMismatch { weights: usize, points: usize },
    /// A point has the wrong number of coordinates for the domain.
    #[error("point {index} has {found} coordinate(s), but the domain expects {expected}")]
    PointDimension { index: usize, expected: usize, found: usize },
    /// A scheme without points.
    #[error("scheme `{name}` has no points")]
    EmptyScheme { name: String },
    /// A coefficient of the rule cannot be represented in the requested numeric domain.
    #[error("rule `{rule}` cannot be represented exactly: {reason}")]
    NotRepresentable { rule: String, reason: String },
    /// The rule is not defined in the requested dimension.
    #[error("rule `{rule}` is not defined in dimension {dim} (supported: {supported})")]
    UnsupportedDimension {
        rule: String,
        dim: usize,
        supported: String,
    },
    /// A rule parameter is out of range.
    #[error("invalid parameter for rule `{rule}`: {reason}")]
    InvalidParameter { rule: String, reason: String },
    /// No rule is registered under the name.
    #[error("no rule named `{name}`")]
    UnknownRule { name: String },
    /// A record or scheme belongs to a different domain than requested.
    #[error("expected a rule for {expected}, found a rule for {found}")]
    DomainMismatch { expected: String, found: String },
}

impl Error {
    pub(crate) fn unsupported_dimension(rule: &str, dim: usize, supported: &str) -> Self {
        Self::UnsupportedDimension {
            rule: rule.to_string(),
            dim,
            supported: supported.to_string(),
        }
    }

    pub(crate) fn invalid_parameter(rule: &str, reason: impl Into<String>) -> Self {
        Self::InvalidParameter {
            rule: rule.to_string(),
            reason: reason.into(),
        }
    }
}
