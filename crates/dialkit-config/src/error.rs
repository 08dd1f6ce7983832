//! Error types for gauge configuration.

use std::fmt;

/// Error raised while loading, merging or validating a gauge configuration.
#[derive(Debug)]
pub enum ConfigError {
    /// Value range with `min >= max`
    InvalidRange {
        /// Lower bound
        min: f64,
        /// Upper bound
        max: f64,
    },
    /// NaN or infinite number
    NonFinite {
        /// Field path, e.g. `segments[2].max`
        field: String,
    },
    /// Number outside its allowed interval
    OutOfRange {
        /// Field path
        field: String,
        /// Offending value
        value: f64,
        /// Lowest allowed value
        min: f64,
        /// Highest allowed value
        max: f64,
    },
    /// Ring radii that do not satisfy `0 < inner < outer`
    InvalidRadii {
        /// Ring name (`gauge` or `background`)
        ring: String,
        /// Inner radius ratio
        inner: f64,
        /// Outer radius ratio
        outer: f64,
    },
    /// Count that must be at least one
    ZeroCount {
        /// Field path
        field: String,
    },
    /// Number that must be strictly positive
    NonPositive {
        /// Field path
        field: String,
        /// Offending value
        value: f64,
    },
    /// Number that must not be negative
    Negative {
        /// Field path
        field: String,
        /// Offending value
        value: f64,
    },
    /// Unusable color definition
    InvalidColor {
        /// Field path
        field: String,
        /// What is wrong with it
        reason: String,
    },
    /// YAML parsing error
    Yaml(serde_yaml_ng::Error),
    /// JSON parsing error
    Json(serde_json::Error),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidRange { min, max } => {
                write!(f, "Invalid range: min ({min}) must be less than max ({max})")
            }
            Self::NonFinite { field } => write!(f, "Non-finite number in '{field}'"),
            Self::OutOfRange {
                field,
                value,
                min,
                max,
            } => write!(f, "Value {value} for '{field}' is outside [{min}, {max}]"),
            Self::InvalidRadii { ring, inner, outer } => write!(
                f,
                "Invalid {ring} radii: expected 0 < inner ({inner}) < outer ({outer})"
            ),
            Self::ZeroCount { field } => write!(f, "'{field}' must be at least 1"),
            Self::NonPositive { field, value } => {
                write!(f, "'{field}' must be positive, got {value}")
            }
            Self::Negative { field, value } => {
                write!(f, "'{field}' must not be negative, got {value}")
            }
            Self::InvalidColor { field, reason } => {
                write!(f, "Invalid color for '{field}': {reason}")
            }
            Self::Yaml(e) => write!(f, "YAML error: {e}"),
            Self::Json(e) => write!(f, "JSON error: {e}"),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Yaml(e) => Some(e),
            Self::Json(e) => Some(e),
            _ => None,
        }
    }
}

impl From<serde_yaml_ng::Error> for ConfigError {
    fn from(e: serde_yaml_ng::Error) -> Self {
        Self::Yaml(e)
    }
}

impl From<serde_json::Error> for ConfigError {
    fn from(e: serde_json::Error) -> Self {
        Self::Json(e)
    }
}
