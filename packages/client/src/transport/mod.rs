//! Request submission
//!
//! A [`Transport`] takes a prepared [`ClientRequest`] and resolves to the complete response
//! with its body fully buffered. The dispatch layer only depends on this trait, so tests and
//! embedders can substitute their own exchange mechanism.

mod pooled;

pub use pooled::HyperTransport;

use std::fmt;

use futures::future::BoxFuture;

use crate::error::Result;
use crate::http::request::ClientRequest;
use crate::http::response::ClientResponse;

/// Asynchronous exchange of one request for one response.
///
/// Any status code is a successful exchange; only failures to obtain a response at all
/// (connection, protocol, body read, timeout) resolve to `Err`.
pub trait Transport: Send + Sync + fmt::Debug {
    /// Submit `request`. The returned future is `'static` so it can be spawned.
    fn submit(&self, request: ClientRequest) -> BoxFuture<'static, Result<ClientResponse>>;
}
