//! Error types for the anofox-apen library.

use thiserror::Error;

/// Result type alias for entropy operations.
pub type Result<T> = std::result::Result<T, ApenError>;

/// Errors that can occur while configuring or running the estimator.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ApenError {
    /// Not enough samples in the history to form patterns at both scales.
    #[error("insufficient data: need at least {needed}, got {got}")]
    InsufficientData { needed: usize, got: usize },

    /// A configuration value violated its constraint.
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),

    /// A sample that is not a finite number.
    #[error("invalid sample: {0} is not a finite number")]
    InvalidSample(f64),
}

impl ApenError {
    /// True for errors raised by rejected configuration or input, as opposed
    /// to a buffer that is simply too short.
    pub fn is_configuration_error(&self) -> bool {
        matches!(
            self,
            ApenError::InvalidParameter(_) | ApenError::InvalidSample(_)
        )
    }
}
