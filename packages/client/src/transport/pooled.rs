//! Pooled HTTP/1 transport on hyper

use std::fmt;
use std::time::Duration;

use bytes::Bytes;
use futures::future::BoxFuture;
use http::header::{HeaderValue, USER_AGENT};
use http_body_util::{BodyExt, Full};
use hyper::body::Incoming;
use hyper_util::client::legacy::Client;
use hyper_util::client::legacy::connect::HttpConnector;
use hyper_util::rt::{TokioExecutor, TokioTimer};

use super::Transport;
use crate::config::{ClientConfig, Validator};
use crate::error::{self, Error, Result};
use crate::http::request::ClientRequest;
use crate::http::response::ClientResponse;

/// [`Transport`] backed by a pooled hyper client over plain TCP.
///
/// Cloning is cheap; clones share the connection pool.
#[derive(Clone)]
pub struct HyperTransport {
    client: Client<HttpConnector, Full<Bytes>>,
    timeout: Duration,
    user_agent: HeaderValue,
}

impl HyperTransport {
    /// Build a transport from `config`.
    ///
    /// # Errors
    ///
    /// Returns a [`Kind::Builder`](crate::error::Kind::Builder) error if `config` fails
    /// validation.
    pub fn new(config: &ClientConfig) -> Result<Self> {
        config.validate().map_err(error::builder)?;

        let mut connector = HttpConnector::new();
        connector.set_connect_timeout(Some(config.connect_timeout));
        connector.set_nodelay(config.tcp_nodelay);

        let client = Client::builder(TokioExecutor::new())
            .pool_timer(TokioTimer::new())
            .pool_idle_timeout(config.pool_idle_timeout)
            .pool_max_idle_per_host(config.pool_max_idle_per_host)
            .build(connector);

        Ok(Self {
            client,
            timeout: config.timeout,
            user_agent: HeaderValue::from_str(&config.user_agent)?,
        })
    }
}

impl fmt::Debug for HyperTransport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HyperTransport")
            .field("timeout", &self.timeout)
            .field("user_agent", &self.user_agent)
            .finish_non_exhaustive()
    }
}

impl Transport for HyperTransport {
    fn submit(&self, request: ClientRequest) -> BoxFuture<'static, Result<ClientResponse>> {
        let client = self.client.clone();
        let timeout = self.timeout;
        let user_agent = self.user_agent.clone();

        Box::pin(async move {
            let url = request.url().clone();
            let method = request.method().clone();

            let mut request = request.into_http()?;
            request
                .headers_mut()
                .entry(USER_AGENT)
                .or_insert(user_agent);
            let request = request.map(Full::new);

            tracing::debug!(%method, %url, "submitting request");

            let exchange = async {
                let response: http::Response<Incoming> =
                    client.request(request).await.map_err(error::transport)?;
                let (parts, body) = response.into_parts();
                let body = body.collect().await.map_err(error::body)?.to_bytes();
                Ok::<_, Error>(ClientResponse::from_parts(parts, body))
            };

            let outcome = match tokio::time::timeout(timeout, exchange).await {
                Ok(outcome) => outcome,
                Err(_) => Err(error::timeout()),
            };

            match &outcome {
                Ok(response) => tracing::debug!(
                    %method,
                    %url,
                    status = response.status().as_u16(),
                    bytes = response.body().len(),
                    "received response"
                ),
                Err(error) => tracing::debug!(%method, %url, %error, "request failed"),
            }

            outcome.map_err(|error| error.with_url(url))
        })
    }
}
