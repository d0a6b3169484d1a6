use thiserror::Error;

/// Errors returned by `plain-util`.
///
/// Most helpers report edge cases through sentinel values (`None`, NaN);
/// only the cases below are surfaced as errors.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum UtilError {
    /// Two compared property values are not both numbers or both strings.
    #[error(
        "unsupported property types for sorting by `{key}`: {left} and {right} (only number and string are supported)"
    )]
    UnsupportedType {
        key: String,
        left: &'static str,
        right: &'static str,
    },

    /// The lower bound of a range is greater than its upper bound.
    #[error("invalid range: min {min} is greater than max {max}")]
    InvalidRange { min: i64, max: i64 },

    /// The minutes part of an hours/minutes pair is a full hour or more.
    #[error("minutes {minutes} out of range: must be below 60")]
    MinutesOutOfRange { minutes: u64 },
}

/// Convenience alias used throughout `plain-util`.
pub type Result<T> = std::result::Result<T, UtilError>;
