//! Settled HTTP response handed to the dispatch engine
//!
//! The transport delivers the complete response before dispatch begins, so the body is kept
//! as one `Bytes` buffer. Cloning a `ClientResponse` is cheap and shares that buffer, which is
//! what lets a binding capture the response itself while routing still holds a reference.

use std::fmt;

use bytes::Bytes;
use http::header::CONTENT_TYPE;
use http::{HeaderMap, StatusCode, Version};
use mime::Mime;

use crate::error::{self, Result};

/// A response whose status line, headers and body have all been received.
#[derive(Clone)]
pub struct ClientResponse {
    status: StatusCode,
    version: Version,
    headers: HeaderMap,
    body: Bytes,
}

impl ClientResponse {
    #[must_use]
    pub fn new(status: StatusCode, headers: HeaderMap, body: Bytes) -> Self {
        Self {
            status,
            version: Version::HTTP_11,
            headers,
            body,
        }
    }

    /// Assemble a response from the parts the transport received.
    #[must_use]
    pub fn from_parts(parts: http::response::Parts, body: Bytes) -> Self {
        Self {
            status: parts.status,
            version: parts.version,
            headers: parts.headers,
            body,
        }
    }

    #[inline]
    #[must_use]
    pub fn status(&self) -> StatusCode {
        self.status
    }

    #[inline]
    #[must_use]
    pub fn version(&self) -> Version {
        self.version
    }

    #[inline]
    #[must_use]
    pub fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    #[inline]
    #[must_use]
    pub fn body(&self) -> &Bytes {
        &self.body
    }

    /// Parsed `Content-Type` header.
    ///
    /// # Errors
    ///
    /// Returns a [`Kind::Body`](crate::error::Kind::Body) error if the header is not visible
    /// ASCII or not a valid media type.
    pub fn content_type(&self) -> Result<Option<Mime>> {
        let Some(value) = self.headers.get(CONTENT_TYPE) else {
            return Ok(None);
        };
        let value = value.to_str().map_err(error::body)?;
        value.parse::<Mime>().map(Some).map_err(error::body)
    }

    /// Body decoded as UTF-8.
    ///
    /// # Errors
    ///
    /// Returns a [`Kind::Body`](crate::error::Kind::Body) error if the body is not valid UTF-8.
    pub fn text(&self) -> Result<String> {
        String::from_utf8(self.body.to_vec()).map_err(error::body)
    }

    #[must_use]
    pub fn into_parts(self) -> (StatusCode, HeaderMap, Bytes) {
        (self.status, self.headers, self.body)
    }
}

impl From<http::Response<Bytes>> for ClientResponse {
    fn from(response: http::Response<Bytes>) -> Self {
        let (parts, body) = response.into_parts();
        Self::from_parts(parts, body)
    }
}

impl From<ClientResponse> for http::Response<Bytes> {
    fn from(response: ClientResponse) -> Self {
        let mut converted = http::Response::new(response.body);
        *converted.status_mut() = response.status;
        *converted.version_mut() = response.version;
        *converted.headers_mut() = response.headers;
        converted
    }
}

impl fmt::Debug for ClientResponse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClientResponse")
            .field("status", &self.status)
            .field("version", &self.version)
            .field("headers", &self.headers)
            .field("body", &format!("{} bytes", self.body.len()))
            .finish()
    }
}
