//! Entry point holding the collaborators shared by every request

use std::fmt;
use std::sync::Arc;

use eddy_client::config::Validator;
use eddy_client::error::{self, Result};
use eddy_client::http::resolve_url;
use eddy_client::{ClientConfig, HyperTransport, MessageWorker, Transport};
use http::header::{HeaderMap, HeaderName, HeaderValue};
use http::Method;
use tokio::runtime::Handle;
use url::Url;

use crate::requester::Requester;

/// Issues requests against an optional base URL.
///
/// Cloning is cheap and clones share transport, worker and runtime.
///
/// ```no_run
/// use eddy::prelude::*;
///
/// # async fn run() -> eddy::Result<()> {
/// let rest = Rest::builder().base_url("http://localhost:8080/api/").build()?;
///
/// let greeting: Option<String> = rest
///     .get("greeting")
///     .query_param("lang", "en")
///     .dispatch(selector::status(), [
///         on(StatusCode::OK).typed::<String>().capture(),
///         any_status().map(|_| Ok(String::from("fallback"))).capture(),
///     ])
///     .capture()
///     .await?;
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct Rest {
    pub(crate) base_url: Option<Url>,
    pub(crate) transport: Arc<dyn Transport>,
    pub(crate) worker: Arc<MessageWorker>,
    pub(crate) runtime: Handle,
    pub(crate) default_headers: HeaderMap,
    pub(crate) config: ClientConfig,
}

impl Rest {
    #[must_use]
    pub fn builder() -> RestBuilder {
        RestBuilder::default()
    }

    /// Start a request; `uri` is resolved against the base URL unless it is absolute.
    #[must_use]
    pub fn execute(&self, method: Method, uri: &str) -> Requester {
        Requester::new(self, method, resolve_url(self.base_url.as_ref(), uri))
    }

    #[must_use]
    pub fn get(&self, uri: &str) -> Requester {
        self.execute(Method::GET, uri)
    }

    #[must_use]
    pub fn head(&self, uri: &str) -> Requester {
        self.execute(Method::HEAD, uri)
    }

    #[must_use]
    pub fn post(&self, uri: &str) -> Requester {
        self.execute(Method::POST, uri)
    }

    #[must_use]
    pub fn put(&self, uri: &str) -> Requester {
        self.execute(Method::PUT, uri)
    }

    #[must_use]
    pub fn patch(&self, uri: &str) -> Requester {
        self.execute(Method::PATCH, uri)
    }

    #[must_use]
    pub fn delete(&self, uri: &str) -> Requester {
        self.execute(Method::DELETE, uri)
    }

    #[must_use]
    pub fn options(&self, uri: &str) -> Requester {
        self.execute(Method::OPTIONS, uri)
    }

    #[must_use]
    pub fn trace(&self, uri: &str) -> Requester {
        self.execute(Method::TRACE, uri)
    }

    #[must_use]
    pub fn base_url(&self) -> Option<&Url> {
        self.base_url.as_ref()
    }

    #[must_use]
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }
}

impl fmt::Debug for Rest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Rest")
            .field("base_url", &self.base_url.as_ref().map(Url::as_str))
            .field("transport", &self.transport)
            .field("worker", &self.worker)
            .field("default_headers", &self.default_headers)
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

/// Configures a [`Rest`].
///
/// Defaults: no base URL, a [`HyperTransport`] built from the configuration, the default
/// [`MessageWorker`] and the runtime of the calling context.
#[derive(Default)]
pub struct RestBuilder {
    base_url: Option<String>,
    transport: Option<Arc<dyn Transport>>,
    worker: Option<MessageWorker>,
    runtime: Option<Handle>,
    default_headers: HeaderMap,
    config: ClientConfig,
    error: Option<error::Error>,
}

impl RestBuilder {
    /// Base URL relative request URIs are resolved against.
    ///
    /// Relative URIs are appended to its path, so a base meant as a directory works with or
    /// without a trailing slash.
    #[must_use]
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    #[must_use]
    pub fn transport(mut self, transport: impl Transport + 'static) -> Self {
        self.transport = Some(Arc::new(transport));
        self
    }

    /// Share one transport between several clients.
    #[must_use]
    pub fn shared_transport(mut self, transport: Arc<dyn Transport>) -> Self {
        self.transport = Some(transport);
        self
    }

    #[must_use]
    pub fn worker(mut self, worker: MessageWorker) -> Self {
        self.worker = Some(worker);
        self
    }

    /// Runtime requests are issued and dispatched on.
    #[must_use]
    pub fn runtime(mut self, runtime: Handle) -> Self {
        self.runtime = Some(runtime);
        self
    }

    /// Header sent with every request, before any header the requester adds.
    #[must_use]
    pub fn default_header<K, V>(mut self, name: K, value: V) -> Self
    where
        HeaderName: TryFrom<K>,
        <HeaderName as TryFrom<K>>::Error: Into<http::Error>,
        HeaderValue: TryFrom<V>,
        <HeaderValue as TryFrom<V>>::Error: Into<http::Error>,
    {
        let name: std::result::Result<HeaderName, http::Error> =
            HeaderName::try_from(name).map_err(Into::into);
        let value: std::result::Result<HeaderValue, http::Error> =
            HeaderValue::try_from(value).map_err(Into::into);
        match name.and_then(|name| value.map(|value| (name, value))) {
            Ok((name, value)) => {
                self.default_headers.append(name, value);
            }
            Err(invalid) => {
                self.error.get_or_insert(error::builder(invalid));
            }
        }
        self
    }

    #[must_use]
    pub fn config(mut self, config: ClientConfig) -> Self {
        self.config = config;
        self
    }

    /// Validate and build.
    ///
    /// # Errors
    ///
    /// Returns a [`Kind::Builder`](eddy_client::Kind::Builder) error if a default header or the
    /// base URL is invalid, the configuration fails validation, or no runtime was given and
    /// the caller is not inside one.
    pub fn build(self) -> Result<Rest> {
        if let Some(error) = self.error {
            return Err(error);
        }
        self.config.validate().map_err(error::builder)?;

        let base_url = self.base_url.as_deref().map(Url::parse).transpose()?;
        let runtime = match self.runtime {
            Some(runtime) => runtime,
            None => Handle::try_current().map_err(error::builder)?,
        };
        let transport: Arc<dyn Transport> = match self.transport {
            Some(transport) => transport,
            None => Arc::new(HyperTransport::new(&self.config)?),
        };

        tracing::debug!(
            base_url = base_url.as_ref().map(Url::as_str),
            ?transport,
            "building rest client"
        );

        Ok(Rest {
            base_url,
            transport,
            worker: Arc::new(self.worker.unwrap_or_default()),
            runtime,
            default_headers: self.default_headers,
            config: self.config,
        })
    }
}

impl fmt::Debug for RestBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RestBuilder")
            .field("base_url", &self.base_url)
            .field("transport", &self.transport)
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}
