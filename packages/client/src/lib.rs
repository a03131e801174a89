//! # eddy client plumbing
//!
//! The request/response layer underneath the `eddy` response dispatcher:
//!
//! - **[`ClientRequest`] / [`ClientResponse`]** snapshots of one exchange, the response with
//!   its body fully buffered
//! - **[`Transport`]** the asynchronous submission seam, with [`HyperTransport`] as the pooled
//!   HTTP/1 implementation
//! - **[`MessageWorker`]** content-negotiated body conversion (JSON, form, text)
//! - **[`ClientConfig`]** validated timeouts, pool sizing and user agent
//! - **[`Error`]** the single error type, carrying the issuing call site for asynchronous
//!   failures
//!
//! ## Usage
//!
//! ```no_run
//! use eddy_client::prelude::*;
//!
//! # async fn run() -> eddy_client::Result<()> {
//! let transport = HyperTransport::new(&ClientConfig::default())?;
//! let url = Url::parse("http://localhost:8080/health")?;
//! let request = ClientRequest::new(Method::GET, url, HeaderMap::new(), None);
//!
//! let response = transport.submit(request).await?;
//! println!("{} {}", response.status(), response.text()?);
//! # Ok(())
//! # }
//! ```

#![deny(unsafe_code)]
#![warn(clippy::all)]

pub mod config;
pub mod convert;
pub mod error;
pub mod http;
pub mod prelude;
pub mod transport;

pub use crate::config::ClientConfig;
pub use crate::convert::{Codec, MessageWorker};
pub use crate::error::{BoxError, CallSite, Error, Kind, Result};
pub use crate::http::request::ClientRequest;
pub use crate::http::response::ClientResponse;
pub use crate::transport::{HyperTransport, Transport};
