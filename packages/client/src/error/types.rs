use std::error::Error as StdError;
use std::fmt;
use std::sync::Arc;

use super::call_site::CallSite;
use crate::http::response::ClientResponse;

/// A Result alias where the Err case is `eddy_client::Error`.
pub type Result<T> = std::result::Result<T, Error>;

/// Represents errors that can occur while issuing a request or dispatching its response.
pub struct Error {
    pub(crate) inner: Box<Inner>,
}

pub(crate) struct Inner {
    pub(crate) kind: Kind,
    pub(crate) source: Option<Box<dyn StdError + Send + Sync>>,
    pub(crate) url: Option<url::Url>,
    pub(crate) response: Option<ClientResponse>,
    pub(crate) call_site: Option<Arc<CallSite>>,
}

/// Origin of an [`Error`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Kind {
    /// Invalid request or routing tree construction
    Builder,
    /// The transport failed to deliver the request or the response
    Transport,
    /// The transport or the caller gave up waiting
    Timeout,
    /// Reading the status line, a header or the body of a response failed
    Body,
    /// Serializing a request body or deserializing a response body failed
    Conversion,
    /// No binding matched the response and no wildcard was registered
    NoRoute,
    /// Routing-internal signal: a routing tree found neither a match nor a wildcard
    NoWildcard,
    /// A user supplied callback or mapping function failed
    Callback,
    /// A capture was retrieved as a type it does not hold
    TypeMismatch {
        expected: &'static str,
        actual: &'static str,
    },
    /// The in-flight call was dropped before it completed
    Canceled,
}

impl Error {
    pub fn new(kind: Kind) -> Error {
        Error {
            inner: Box::new(Inner {
                kind,
                source: None,
                url: None,
                response: None,
                call_site: None,
            }),
        }
    }

    #[must_use = "Error builder methods return a new Error and should be used"]
    pub fn with<E: Into<Box<dyn StdError + Send + Sync>>>(mut self, source: E) -> Error {
        self.inner.source = Some(source.into());
        self
    }

    #[must_use]
    pub fn with_url(mut self, url: url::Url) -> Self {
        self.inner.url = Some(url);
        self
    }

    #[must_use]
    pub fn with_response(mut self, response: ClientResponse) -> Self {
        self.inner.response = Some(response);
        self
    }

    /// Attach the site that issued the request.
    ///
    /// The first call site wins: an error that already crossed one completion keeps the frames
    /// of the call that originally produced it.
    #[must_use]
    pub fn with_call_site(mut self, call_site: Arc<CallSite>) -> Self {
        if self.inner.call_site.is_none() {
            self.inner.call_site = Some(call_site);
        }
        self
    }

    #[must_use]
    pub fn kind(&self) -> &Kind {
        &self.inner.kind
    }

    /// Get the URL associated with this error, if any
    #[must_use]
    pub fn url(&self) -> Option<&url::Url> {
        self.inner.url.as_ref()
    }

    /// The response that could not be routed, for [`Kind::NoRoute`] errors.
    #[must_use]
    pub fn response(&self) -> Option<&ClientResponse> {
        self.inner.response.as_ref()
    }

    /// Take ownership of the attached response, if any.
    #[must_use]
    pub fn into_response(self) -> Option<ClientResponse> {
        self.inner.response
    }

    #[must_use]
    pub fn call_site(&self) -> Option<&CallSite> {
        self.inner.call_site.as_deref()
    }

    /// Source location of the call that issued the failed request.
    #[must_use]
    pub fn issued_at(&self) -> Option<&'static std::panic::Location<'static>> {
        self.call_site().map(CallSite::location)
    }

    /// Convert into a [`Kind::NoRoute`] error carrying `response`.
    ///
    /// Only a [`Kind::NoWildcard`] signal is converted; any other error is returned as is.
    #[must_use]
    pub fn into_no_route(self, response: ClientResponse) -> Error {
        if self.inner.kind == Kind::NoWildcard {
            Error::new(Kind::NoRoute).with_response(response)
        } else {
            self
        }
    }
}

impl fmt::Debug for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut f = f.debug_struct("eddy::Error");

        f.field("kind", &self.inner.kind);

        if let Some(ref source) = self.inner.source {
            f.field("source", source);
        }

        if let Some(ref url) = self.inner.url {
            f.field("url", url);
        }

        if let Some(ref response) = self.inner.response {
            f.field("status", &response.status());
        }

        if let Some(ref call_site) = self.inner.call_site {
            if call_site.backtrace().is_some() {
                f.field("issued_at", &format_args!("{call_site}"));
            } else {
                f.field("issued_at", &call_site.location());
            }
        }

        f.finish()
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.inner.kind {
            Kind::Builder => f.write_str("builder error")?,
            Kind::Transport => f.write_str("error sending request")?,
            Kind::Timeout => f.write_str("request timeout")?,
            Kind::Body => f.write_str("error reading response")?,
            Kind::Conversion => f.write_str("error converting message body")?,
            Kind::NoRoute => match self.inner.response {
                Some(ref response) => {
                    write!(f, "unable to dispatch response ({})", response.status())?;
                }
                None => f.write_str("unable to dispatch response")?,
            },
            Kind::NoWildcard => f.write_str("no matching binding and no wildcard")?,
            Kind::Callback => f.write_str("callback failed")?,
            Kind::TypeMismatch { expected, actual } => {
                write!(f, "captured value is {actual}, not {expected}")?;
            }
            Kind::Canceled => f.write_str("operation canceled")?,
        }

        if let Some(ref source) = self.inner.source {
            write!(f, ": {source}")?;
        }

        Ok(())
    }
}

impl StdError for Error {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        self.inner
            .source
            .as_ref()
            .map(|err| &**err as &(dyn StdError + 'static))
    }
}
