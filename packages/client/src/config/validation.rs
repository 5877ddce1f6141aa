//! Configuration validation

/// Configuration validation result type
pub type ConfigResult<T> = Result<T, ConfigurationError>;

/// Configuration error types
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigurationError {
    #[error("Invalid configuration parameter: {0}")]
    InvalidParameter(String),
}

/// Configuration validation trait
pub trait Validator {
    /// Validates the configuration settings
    ///
    /// # Errors
    ///
    /// Returns `ConfigurationError::InvalidParameter` if a limit is outside
    /// its valid range.
    fn validate(&self) -> ConfigResult<()>;
}

/// Common configuration validation utilities
pub struct ConfigValidator;

impl ConfigValidator {
    /// Validate that a limit is not zero
    ///
    /// # Errors
    ///
    /// Returns `ConfigurationError::InvalidParameter` if `value` is zero.
    pub fn validate_nonzero(value: usize, name: &str) -> ConfigResult<()> {
        if value == 0 {
            return Err(ConfigurationError::InvalidParameter(format!(
                "{name} cannot be zero"
            )));
        }
        Ok(())
    }
}
