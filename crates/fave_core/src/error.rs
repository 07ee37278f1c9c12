//! Configuration error types

use thiserror::Error;

/// Errors raised when a widget is configured with out-of-range values
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// A duration was negative
    #[error("{field} must not be negative (got {value} ms)")]
    NegativeDuration { field: &'static str, value: i64 },

    /// The rotation angle was negative; direction is chosen by the transition
    #[error("rotation angle must not be negative (got {0} degrees)")]
    NegativeAngle(i64),

    /// A size or padding value was negative
    #[error("{field} must not be negative (got {value} dp)")]
    NegativeDimension { field: &'static str, value: i64 },

    /// Screen density must be a positive, finite scale factor
    #[error("invalid screen density: {0}")]
    InvalidDensity(f32),

    /// A value does not fit the widget's 32-bit fields
    #[error("{field} is out of range (got {value})")]
    OutOfRange { field: &'static str, value: i64 },
}

/// Result type for configuration operations
pub type Result<T> = std::result::Result<T, ConfigError>;

/// Convert a host-supplied millisecond value into a duration
pub fn duration_ms(field: &'static str, value: i64) -> Result<u32> {
    if value < 0 {
        return Err(ConfigError::NegativeDuration { field, value });
    }
    u32::try_from(value).map_err(|_| ConfigError::OutOfRange { field, value })
}

/// Convert a host-supplied density-independent dimension
pub fn dimension_dp(field: &'static str, value: i64) -> Result<u32> {
    if value < 0 {
        return Err(ConfigError::NegativeDimension { field, value });
    }
    u32::try_from(value).map_err(|_| ConfigError::OutOfRange { field, value })
}
