//! # Effect Error Types

use thiserror::Error;

/// Rejected [`crate::NetworkConfig`] values.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// A numeric field is NaN, negative or above its cap.
    #[error("{field} is out of range, got {value}")]
    OutOfRange {
        /// Field name as written in the config file.
        field: &'static str,
        /// Offending value.
        value: f32,
    },

    /// The attraction radius must be strictly positive.
    #[error("attraction_radius must be positive, got {0}")]
    ZeroAttractionRadius(f32),

    /// Smoothing factors are per-frame fractions.
    #[error("{field} must lie in (0, 1], got {value}")]
    BadSmoothing {
        /// Field name as written in the config file.
        field: &'static str,
        /// Offending value.
        value: f32,
    },

    /// At least one particle color is needed.
    #[error("palette is empty")]
    EmptyPalette,
}
