use std::error::Error as StdError;
use std::io;

use super::helpers::TimedOut;
use super::types::{Error, Kind};

impl Error {
    /// Returns true if the error comes from building a request or a routing tree.
    #[must_use]
    pub fn is_builder(&self) -> bool {
        matches!(self.inner.kind, Kind::Builder)
    }

    /// Returns true if the transport failed to complete the exchange.
    #[must_use]
    pub fn is_transport(&self) -> bool {
        matches!(self.inner.kind, Kind::Transport)
    }

    /// Returns true if the error is related to a timeout.
    #[must_use]
    pub fn is_timeout(&self) -> bool {
        if matches!(self.inner.kind, Kind::Timeout) {
            return true;
        }

        let mut source = self.source();

        while let Some(err) = source {
            if err.is::<TimedOut>() {
                return true;
            }
            if let Some(io) = err.downcast_ref::<io::Error>() {
                if io.kind() == io::ErrorKind::TimedOut {
                    return true;
                }
            }
            source = err.source();
        }

        false
    }

    /// Returns true if reading the response failed
    #[must_use]
    pub fn is_body(&self) -> bool {
        matches!(self.inner.kind, Kind::Body)
    }

    /// Returns true if a message body could not be converted
    #[must_use]
    pub fn is_conversion(&self) -> bool {
        matches!(self.inner.kind, Kind::Conversion)
    }

    /// Returns true if no binding matched the response
    #[must_use]
    pub fn is_no_route(&self) -> bool {
        matches!(self.inner.kind, Kind::NoRoute)
    }

    #[must_use]
    pub fn is_no_wildcard(&self) -> bool {
        matches!(self.inner.kind, Kind::NoWildcard)
    }

    /// Returns true if a user callback failed
    #[must_use]
    pub fn is_callback(&self) -> bool {
        matches!(self.inner.kind, Kind::Callback)
    }

    #[must_use]
    pub fn is_type_mismatch(&self) -> bool {
        matches!(self.inner.kind, Kind::TypeMismatch { .. })
    }

    #[must_use]
    pub fn is_canceled(&self) -> bool {
        matches!(self.inner.kind, Kind::Canceled)
    }

    /// Returns the status code of the attached response, if any.
    #[must_use]
    pub fn status(&self) -> Option<http::StatusCode> {
        self.inner.response.as_ref().map(|response| response.status())
    }
}
