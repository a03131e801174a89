//! Outgoing request snapshot
//!
//! A `ClientRequest` is the immutable result of a finished request builder: the final URL
//! (query string merged), the headers, and the already-serialized body.

use std::fmt;

use bytes::Bytes;
use http::{HeaderMap, Method};
use url::Url;

use crate::error::Result;

/// A fully prepared request ready for submission to a [`Transport`](crate::transport::Transport).
#[derive(Clone)]
pub struct ClientRequest {
    method: Method,
    url: Url,
    headers: HeaderMap,
    body: Option<Bytes>,
}

impl ClientRequest {
    #[must_use]
    pub fn new(method: Method, url: Url, headers: HeaderMap, body: Option<Bytes>) -> Self {
        Self {
            method,
            url,
            headers,
            body,
        }
    }

    #[inline]
    #[must_use]
    pub fn method(&self) -> &Method {
        &self.method
    }

    #[inline]
    #[must_use]
    pub fn url(&self) -> &Url {
        &self.url
    }

    #[inline]
    #[must_use]
    pub fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    #[inline]
    pub fn headers_mut(&mut self) -> &mut HeaderMap {
        &mut self.headers
    }

    #[inline]
    #[must_use]
    pub fn body(&self) -> Option<&Bytes> {
        self.body.as_ref()
    }

    /// Convert into an `http::Request`, with an empty body when none was written.
    ///
    /// # Errors
    ///
    /// Returns a [`Kind::Builder`](crate::error::Kind::Builder) error if the URL is not a valid
    /// request URI.
    pub fn into_http(self) -> Result<http::Request<Bytes>> {
        let mut builder = http::Request::builder()
            .method(self.method)
            .uri(self.url.as_str());

        if let Some(headers) = builder.headers_mut() {
            *headers = self.headers;
        }

        Ok(builder.body(self.body.unwrap_or_default())?)
    }
}

impl fmt::Debug for ClientRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClientRequest")
            .field("method", &self.method)
            .field("url", &self.url.as_str())
            .field("headers", &self.headers)
            .field("body", &self.body.as_ref().map(|body| format!("{} bytes", body.len())))
            .finish()
    }
}
