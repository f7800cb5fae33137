//! Client-side constraint checks
//!
//! The service documents length, pattern and range constraints for most
//! request fields. These checks run locally so that malformed requests are
//! rejected before they reach a transport.

use crate::error::ValidationError;
use regex::Regex;
use std::str::FromStr;
use std::sync::LazyLock;

/// Identifier length bounds (detector, rule, model, outcome, event, variable)
pub const IDENTIFIER_MAX_LEN: usize = 64;
/// Description length bounds
pub const DESCRIPTION_MAX_LEN: usize = 128;
/// Rule expression length bounds
pub const EXPRESSION_MAX_LEN: usize = 4096;

/// Types that can check their own field constraints
pub trait Validate {
    /// Check every constrained field, returning the first violation
    fn validate(&self) -> Result<(), ValidationError>;
}

impl<T: Validate> Validate for Option<T> {
    fn validate(&self) -> Result<(), ValidationError> {
        match self {
            Some(inner) => inner.validate(),
            None => Ok(()),
        }
    }
}

impl<T: Validate> Validate for Vec<T> {
    fn validate(&self) -> Result<(), ValidationError> {
        self.iter().try_for_each(Validate::validate)
    }
}

/// Patterns used by non-identifier fields
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pattern {
    /// Detector version id and rule version: positive integer without leading zeros
    VersionId,
    /// Model version number, e.g. `1.0`
    ModelVersionNumber,
    /// External model endpoint name
    ModelEndpoint,
    /// IAM role ARN
    RoleArn,
    /// S3 object or prefix location
    S3Location,
    /// CSV column index: non-negative integer without sign or leading zeros
    CsvIndex,
}

static VERSION_ID: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^([1-9][0-9]*)$").expect("version id pattern"));
static MODEL_VERSION_NUMBER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[1-9][0-9]{0,3}\.[0-9]{1,2}$").expect("model version number pattern")
});
static MODEL_ENDPOINT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9A-Za-z_-]+$").expect("model endpoint pattern"));
static ROLE_ARN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^arn:aws[a-z-]{0,15}:iam::[0-9]{12}:role/[^\s]{2,64}$").expect("role arn pattern")
});
static S3_LOCATION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^s3://(.+)$").expect("s3 location pattern"));
static CSV_INDEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(0|[1-9][0-9]*)$").expect("csv index pattern"));

impl Pattern {
    /// The pattern source, as reported in validation messages
    pub fn as_str(self) -> &'static str {
        self.regex().as_str()
    }

    /// Inclusive length bounds that accompany the pattern
    pub fn length_bounds(self) -> (usize, usize) {
        match self {
            Pattern::VersionId => (1, 5),
            Pattern::ModelVersionNumber => (3, 7),
            Pattern::ModelEndpoint => (1, 63),
            Pattern::RoleArn => (1, 256),
            Pattern::S3Location => (1, 512),
            Pattern::CsvIndex => (1, 10),
        }
    }

    pub fn is_match(self, value: &str) -> bool {
        let (min, max) = self.length_bounds();
        let len = value.chars().count();
        len >= min && len <= max && self.regex().is_match(value)
    }

    fn regex(self) -> &'static Regex {
        match self {
            Pattern::VersionId => &*VERSION_ID,
            Pattern::ModelVersionNumber => &*MODEL_VERSION_NUMBER,
            Pattern::ModelEndpoint => &*MODEL_ENDPOINT,
            Pattern::RoleArn => &*ROLE_ARN,
            Pattern::S3Location => &*S3_LOCATION,
            Pattern::CsvIndex => &*CSV_INDEX,
        }
    }
}

/// Log a rejected field and return it as an error
pub fn reject<T>(err: ValidationError) -> Result<T, ValidationError> {
    log::debug!("rejected field '{}': {}", err.field(), err);
    Err(err)
}

/// Whether `value` is a well-formed identifier (`^[0-9a-z_-]{1,64}$`)
pub fn is_identifier(value: &str) -> bool {
    !value.is_empty()
        && value.len() <= IDENTIFIER_MAX_LEN
        && value
            .bytes()
            .all(|b| b.is_ascii_digit() || b.is_ascii_lowercase() || b == b'_' || b == b'-')
}

pub fn check_identifier(field: &str, value: &str) -> Result<(), ValidationError> {
    if is_identifier(value) {
        return Ok(());
    }
    reject(ValidationError::InvalidIdentifier {
        field: field.to_string(),
        value: value.to_string(),
    })
}

pub fn check_description(field: &str, value: &str) -> Result<(), ValidationError> {
    let length = value.chars().count();
    if (1..=DESCRIPTION_MAX_LEN).contains(&length) {
        return Ok(());
    }
    reject(ValidationError::InvalidDescription {
        field: field.to_string(),
        length,
    })
}

pub fn check_expression(field: &str, value: &str) -> Result<(), ValidationError> {
    let length = value.chars().count();
    if (1..=EXPRESSION_MAX_LEN).contains(&length) {
        return Ok(());
    }
    reject(ValidationError::InvalidExpression {
        field: field.to_string(),
        length,
    })
}

pub fn check_pattern(field: &str, value: &str, pattern: Pattern) -> Result<(), ValidationError> {
    if pattern.is_match(value) {
        return Ok(());
    }
    reject(ValidationError::InvalidPattern {
        field: field.to_string(),
        value: value.to_string(),
        pattern: pattern.as_str().to_string(),
    })
}

/// Check a string or collection length against inclusive bounds
pub fn check_length(field: &str, length: usize, min: usize, max: usize) -> Result<(), ValidationError> {
    if length >= min && length <= max {
        return Ok(());
    }
    reject(ValidationError::InvalidLength {
        field: field.to_string(),
        length,
        min,
        max,
    })
}

/// Check a string's character count against inclusive bounds
pub fn check_text(field: &str, value: &str, min: usize, max: usize) -> Result<(), ValidationError> {
    check_length(field, value.chars().count(), min, max)
}

pub fn check_range(field: &str, value: i32, min: i32, max: i32) -> Result<(), ValidationError> {
    if (min..=max).contains(&value) {
        return Ok(());
    }
    reject(ValidationError::InvalidRange {
        field: field.to_string(),
        value: i64::from(value),
        min: i64::from(min),
        max: i64::from(max),
    })
}

/// Check an optional field with `check` when present
pub fn check_optional<T: ?Sized>(
    value: Option<&T>,
    check: impl FnOnce(&T) -> Result<(), ValidationError>,
) -> Result<(), ValidationError> {
    match value {
        Some(v) => check(v),
        None => Ok(()),
    }
}

/// Parse an enum literal, reporting a failure against `field`
pub fn parse_enum<T>(field: &str, value: &str) -> Result<T, ValidationError>
where
    T: FromStr<Err = ValidationError>,
{
    value.parse::<T>().map_err(|err| match err {
        ValidationError::InvalidEnumValue { value, allowed, .. } => {
            ValidationError::InvalidEnumValue {
                field: field.to_string(),
                value,
                allowed,
            }
        }
        other => other,
    })
}

pub fn require<'a, T>(field: &str, value: Option<&'a T>) -> Result<&'a T, ValidationError> {
    match value {
        Some(v) => Ok(v),
        None => {
            log::debug!("rejected field '{}': required", field);
            Err(ValidationError::MissingField {
                field: field.to_string(),
            })
        }
    }
}
