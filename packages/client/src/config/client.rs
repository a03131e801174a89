//! Client configuration values and presets

use std::time::Duration;

use super::validation::{ConfigResult, ConfigValidator, Validator};

const MAX_TIMEOUT: Duration = Duration::from_secs(3600);
const MAX_CONNECT_TIMEOUT: Duration = Duration::from_secs(300);

/// Settings shared by the transport and the request pipeline.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Upper bound for one request/response exchange, body included
    pub timeout: Duration,

    /// Upper bound for establishing a connection
    pub connect_timeout: Duration,

    /// How long an idle pooled connection is kept
    pub pool_idle_timeout: Duration,

    /// Maximum number of idle connections per host
    pub pool_max_idle_per_host: usize,

    /// Enable TCP_NODELAY
    pub tcp_nodelay: bool,

    /// User agent sent when a request sets none
    pub user_agent: String,

    /// Capture call-site stack frames when a request is issued.
    ///
    /// Frames are only recorded when `RUST_BACKTRACE` or `RUST_LIB_BACKTRACE` enables them;
    /// the call-site location is recorded regardless.
    pub capture_backtrace: bool,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(30),
            connect_timeout: Duration::from_secs(10),
            pool_idle_timeout: Duration::from_secs(90),
            pool_max_idle_per_host: 32,
            tcp_nodelay: true,
            user_agent: concat!("eddy/", env!("CARGO_PKG_VERSION")).to_string(),
            capture_backtrace: true,
        }
    }
}

impl ClientConfig {
    /// Configuration with short timeouts, for calls that sit on a latency-sensitive path.
    #[must_use]
    pub fn low_latency() -> Self {
        Self {
            timeout: Duration::from_secs(5),
            connect_timeout: Duration::from_secs(1),
            capture_backtrace: false,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    #[must_use]
    pub fn with_connect_timeout(mut self, timeout: Duration) -> Self {
        self.connect_timeout = timeout;
        self
    }

    #[must_use]
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }
}

impl Validator for ClientConfig {
    fn validate(&self) -> ConfigResult<()> {
        ConfigValidator::validate_timeout(self.timeout, MAX_TIMEOUT, "timeout")?;
        ConfigValidator::validate_timeout(
            self.connect_timeout,
            MAX_CONNECT_TIMEOUT,
            "connect timeout",
        )?;
        ConfigValidator::validate_timeout(
            self.pool_idle_timeout,
            MAX_TIMEOUT,
            "pool idle timeout",
        )?;
        ConfigValidator::validate_range(
            self.pool_max_idle_per_host,
            1,
            1000,
            "pool max idle per host",
        )?;
        ConfigValidator::validate_user_agent(&self.user_agent)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ConfigurationError;

    #[test]
    fn defaults_are_valid() {
        assert!(ClientConfig::default().validate().is_ok());
        assert!(ClientConfig::low_latency().validate().is_ok());
    }

    #[test]
    fn rejects_zero_timeout() {
        let config = ClientConfig::default().with_timeout(Duration::ZERO);

        assert!(matches!(
            config.validate(),
            Err(ConfigurationError::InvalidTimeout(_))
        ));
    }

    #[test]
    fn rejects_connect_timeout_over_five_minutes() {
        let config = ClientConfig::default().with_connect_timeout(Duration::from_secs(301));

        assert!(config.validate().is_err());
    }

    #[test]
    fn rejects_empty_user_agent() {
        let config = ClientConfig::default().with_user_agent("");

        assert!(matches!(
            config.validate(),
            Err(ConfigurationError::InvalidParameter(_))
        ));
    }

    #[test]
    fn rejects_pool_without_idle_slots() {
        let config = ClientConfig {
            pool_max_idle_per_host: 0,
            ..ClientConfig::default()
        };

        assert!(config.validate().is_err());
    }
}
