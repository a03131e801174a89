use eddy_client::error::Result;
use eddy_client::{ClientResponse, MessageWorker};
use http::{HeaderMap, StatusCode};
use serde::de::DeserializeOwned;

/// A response whose body has been converted to `I`.
#[derive(Debug, Clone, PartialEq)]
pub struct ResponseEntity<I> {
    status: StatusCode,
    headers: HeaderMap,
    body: I,
}

impl<I: DeserializeOwned> ResponseEntity<I> {
    pub(crate) fn read(response: &ClientResponse, worker: &MessageWorker) -> Result<Self> {
        Ok(Self {
            status: response.status(),
            headers: response.headers().clone(),
            body: worker.read(response)?,
        })
    }
}

impl<I> ResponseEntity<I> {
    #[must_use]
    pub fn status(&self) -> StatusCode {
        self.status
    }

    #[must_use]
    pub fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    #[must_use]
    pub fn body(&self) -> &I {
        &self.body
    }

    #[must_use]
    pub fn into_body(self) -> I {
        self.body
    }

    #[must_use]
    pub fn into_parts(self) -> (StatusCode, HeaderMap, I) {
        (self.status, self.headers, self.body)
    }
}
