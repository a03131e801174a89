pub mod call_site;
pub mod classification;
pub mod constructors;
pub mod conversions;
pub mod helpers;
pub mod types;

pub use call_site::CallSite;
pub use constructors::*;
pub use helpers::{NoSuitableCodec, TimedOut};
pub use types::{Error, Kind, Result};

/// Boxed error returned by user callbacks and accepted by the constructors.
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;
