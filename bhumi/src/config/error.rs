//! Configuration errors.

use thiserror::Error;

/// A parameter combination the pipeline cannot run with.
///
/// Raised once at startup; never produced per frame.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// A count that must be at least one is zero
    #[error("{field} must be greater than zero")]
    ZeroCount {
        /// Offending field
        field: &'static str,
    },

    /// A length or tolerance that must be strictly positive
    #[error("{field} must be positive and finite, got {value}")]
    NotPositive {
        /// Offending field
        field: &'static str,
        /// Value found
        value: f32,
    },

    /// A length that may be zero but not negative
    #[error("{field} must be non-negative and finite, got {value}")]
    Negative {
        /// Offending field
        field: &'static str,
        /// Value found
        value: f32,
    },

    /// A coordinate that must be a real number
    #[error("{field} must be finite")]
    NonFinite {
        /// Offending field
        field: &'static str,
    },

    /// Rear exclusion needs quarter-aligned sectors
    #[error("angular_bins ({angular_bins}) must be divisible by 4 when backward_cells is 0")]
    SectorsNotQuarterAligned {
        /// Configured sector count
        angular_bins: usize,
    },
}

/// Failure while loading a configuration file.
#[derive(Error, Debug)]
pub enum ConfigLoadError {
    /// I/O error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Parse error
    #[error("Parse error: {0}")]
    Parse(#[from] serde_yaml::Error),

    /// File parsed but holds unusable values
    #[error("Invalid configuration: {0}")]
    Invalid(#[from] ConfigError),
}

/// Check that a value is strictly positive and finite.
pub(crate) fn positive(field: &'static str, value: f32) -> Result<(), ConfigError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(ConfigError::NotPositive { field, value })
    }
}

/// Check that a value is non-negative and finite.
pub(crate) fn non_negative(field: &'static str, value: f32) -> Result<(), ConfigError> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(ConfigError::Negative { field, value })
    }
}

/// Check that a count is non-zero.
pub(crate) fn nonzero(field: &'static str, value: usize) -> Result<(), ConfigError> {
    if value > 0 {
        Ok(())
    } else {
        Err(ConfigError::ZeroCount { field })
    }
}
