//! Client configuration
//!
//! Plain configuration values with defaults and validation. Validation runs once, when a
//! client is built; invalid settings never reach the transport.

pub mod client;
pub mod validation;

pub use client::ClientConfig;
pub use validation::{ConfigResult, ConfigValidator, ConfigurationError, Validator};
