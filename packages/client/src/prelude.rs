//! Commonly used types, for glob import.

pub use crate::config::{ClientConfig, Validator};
pub use crate::convert::{Codec, MessageWorker};
pub use crate::error::{BoxError, Error, Kind, Result};
pub use crate::http::request::ClientRequest;
pub use crate::http::response::ClientResponse;
pub use crate::transport::{HyperTransport, Transport};

pub use ::http::{HeaderMap, HeaderName, HeaderValue, Method, StatusCode, Version};
pub use mime::Mime;
pub use url::Url;
