//! Error types for dialkit charts.

use dialkit_config::ConfigError;
use thiserror::Error;

/// Errors returned by [`crate::GaugeChart`] operations.
///
/// Every failing operation leaves the chart exactly as it was.
#[derive(Debug, Error)]
pub enum GaugeError {
    /// Options failed to parse or validate.
    #[error("Invalid configuration: {0}")]
    Config(#[from] ConfigError),

    /// The reading is NaN or infinite.
    #[error("Value must be finite, got {0}")]
    NonFiniteValue(f64),

    /// The reading lies outside the configured range.
    #[error("Value {value} is outside the range [{min}, {max}]")]
    ValueOutOfRange { value: f64, min: f64, max: f64 },

    /// The host could not provide a drawing surface.
    #[error("Drawing surface unavailable: {0}")]
    SurfaceUnavailable(String),
}
