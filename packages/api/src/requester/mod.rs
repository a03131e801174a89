//! One outgoing request under construction
//!
//! A [`Requester`] accumulates query parameters and headers through a fluent chain and is
//! consumed by exactly one terminal operation: [`body`](Requester::body) to send an entity, or
//! [`call`](crate::Dispatcher::call)/[`dispatch`](crate::Dispatcher::dispatch) to send no body
//! at all.
//! Invalid input along the chain does not interrupt it; the first error is reported by the
//! completion instead.

mod body;
mod headers;
mod query;

use std::fmt;
use std::sync::Arc;

use eddy_client::error::{Error, Result};
use eddy_client::http::QueryParams;
use eddy_client::{MessageWorker, Transport};
use http::{HeaderMap, Method};
use tokio::runtime::Handle;
use url::Url;

use crate::rest::Rest;

/// Builder for one request; see the [module documentation](self).
pub struct Requester {
    pub(crate) transport: Arc<dyn Transport>,
    pub(crate) worker: Arc<MessageWorker>,
    pub(crate) runtime: Handle,
    pub(crate) method: Method,
    pub(crate) url: Result<Url>,
    pub(crate) query: QueryParams,
    pub(crate) headers: HeaderMap,
    pub(crate) error: Option<Error>,
    pub(crate) capture_backtrace: bool,
    pub(crate) debug_enabled: bool,
}

impl Requester {
    pub(crate) fn new(rest: &Rest, method: Method, url: Result<Url>) -> Self {
        Self {
            transport: Arc::clone(&rest.transport),
            worker: Arc::clone(&rest.worker),
            runtime: rest.runtime.clone(),
            method,
            url,
            query: QueryParams::new(),
            headers: rest.default_headers.clone(),
            error: None,
            capture_backtrace: rest.config.capture_backtrace,
            debug_enabled: false,
        }
    }

    /// Log the request with `log::debug!` when it is issued.
    #[must_use]
    pub fn debug(mut self) -> Self {
        self.debug_enabled = true;
        self
    }

    #[must_use]
    pub fn method(&self) -> &Method {
        &self.method
    }

    /// Target URL before query parameters are merged, if it resolved.
    #[must_use]
    pub fn url(&self) -> Option<&Url> {
        self.url.as_ref().ok()
    }

    /// Remember `error` unless an earlier one is already pending.
    pub(crate) fn fail(&mut self, error: Error) {
        self.error.get_or_insert(error);
    }
}

impl fmt::Debug for Requester {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Requester")
            .field("method", &self.method)
            .field("url", &self.url.as_ref().map(Url::as_str).ok())
            .field("query", &self.query)
            .field("headers", &self.headers)
            .field("error", &self.error)
            .field("debug_enabled", &self.debug_enabled)
            .finish_non_exhaustive()
    }
}
