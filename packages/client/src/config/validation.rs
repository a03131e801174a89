//! Configuration validation
//!
//! Common bounds checks shared by every configuration value.

use std::time::Duration;

/// Configuration validation result type
pub type ConfigResult<T> = Result<T, ConfigurationError>;

/// Configuration error types
#[derive(Debug, thiserror::Error)]
pub enum ConfigurationError {
    #[error("Invalid timeout value: {0}")]
    InvalidTimeout(String),

    #[error("Invalid configuration parameter: {0}")]
    InvalidParameter(String),
}

/// Configuration validation trait
pub trait Validator {
    /// Validates the configuration settings
    ///
    /// # Errors
    ///
    /// Returns a `ConfigurationError` variant if any validation fails:
    /// - `InvalidTimeout` - if timeout values are zero or exceed limits
    /// - `InvalidParameter` - if parameters are outside valid ranges
    fn validate(&self) -> ConfigResult<()>;
}

/// Common configuration validation utilities
pub struct ConfigValidator;

impl ConfigValidator {
    /// Validate timeout duration
    ///
    /// # Errors
    ///
    /// Returns `ConfigurationError::InvalidTimeout` if:
    /// - The timeout duration is zero
    /// - The timeout duration exceeds `limit`
    pub fn validate_timeout(timeout: Duration, limit: Duration, name: &str) -> ConfigResult<()> {
        if timeout.is_zero() {
            return Err(ConfigurationError::InvalidTimeout(format!(
                "{name} cannot be zero"
            )));
        }

        if timeout > limit {
            return Err(ConfigurationError::InvalidTimeout(format!(
                "{name} cannot exceed {} seconds",
                limit.as_secs()
            )));
        }

        Ok(())
    }

    /// Validate a count against an inclusive range
    ///
    /// # Errors
    ///
    /// Returns `ConfigurationError::InvalidParameter` if `value` is outside `min..=max`.
    pub fn validate_range(value: usize, min: usize, max: usize, name: &str) -> ConfigResult<()> {
        if value < min || value > max {
            return Err(ConfigurationError::InvalidParameter(format!(
                "{name} must be between {min} and {max}, got {value}"
            )));
        }
        Ok(())
    }

    /// Validate a user agent string
    ///
    /// # Errors
    ///
    /// Returns `ConfigurationError::InvalidParameter` if the user agent is empty, longer than
    /// 1000 characters, or not a valid header value.
    pub fn validate_user_agent(user_agent: &str) -> ConfigResult<()> {
        if user_agent.is_empty() {
            return Err(ConfigurationError::InvalidParameter(
                "user agent cannot be empty".to_string(),
            ));
        }
        if user_agent.len() > 1000 {
            return Err(ConfigurationError::InvalidParameter(
                "user agent must not exceed 1000 characters".to_string(),
            ));
        }
        if http::HeaderValue::from_str(user_agent).is_err() {
            return Err(ConfigurationError::InvalidParameter(format!(
                "user agent '{user_agent}' is not a valid header value"
            )));
        }
        Ok(())
    }
}
