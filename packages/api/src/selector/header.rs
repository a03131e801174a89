use eddy_client::ClientResponse;
use eddy_client::error::{self, Result};
use http::HeaderName;

use super::Selector;

/// Routes on the first value of one response header.
///
/// A missing header has no attribute; a value that is not visible ASCII fails dispatch with a
/// [`Kind::Body`](eddy_client::Kind::Body) error.
#[derive(Debug, Clone)]
pub struct HeaderSelector {
    name: HeaderName,
}

impl HeaderSelector {
    #[must_use]
    pub fn new(name: HeaderName) -> Self {
        Self { name }
    }
}

impl Selector<String> for HeaderSelector {
    fn attribute_of(&self, response: &ClientResponse) -> Result<Option<String>> {
        response
            .headers()
            .get(&self.name)
            .map(|value| value.to_str().map(str::to_owned).map_err(error::body))
            .transpose()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::condition::{any, on};
    use crate::router::RoutingTree;
    use bytes::Bytes;
    use eddy_client::MessageWorker;
    use http::{HeaderMap, HeaderValue, StatusCode};

    fn tenant() -> HeaderName {
        HeaderName::from_static("x-tenant")
    }

    fn response(value: Option<HeaderValue>) -> ClientResponse {
        let mut headers = HeaderMap::new();
        if let Some(value) = value {
            headers.insert(tenant(), value);
        }
        ClientResponse::new(StatusCode::OK, headers, Bytes::new())
    }

    fn tree() -> RoutingTree<String> {
        RoutingTree::new(HeaderSelector::new(tenant()), [
            on("acme".to_string()).capture_with(|_| Ok("acme")),
            any().capture_with(|_| Ok("fallback")),
        ])
        .expect("distinct attributes")
    }

    fn routed(response: &ClientResponse) -> Result<Option<&'static str>> {
        tree()
            .route(response, &MessageWorker::default())?
            .into_value()
    }

    #[test]
    fn routes_on_the_header_value() {
        let response = response(Some(HeaderValue::from_static("acme")));

        assert_eq!(routed(&response).expect("routed"), Some("acme"));
    }

    #[test]
    fn missing_header_uses_the_wildcard() {
        assert_eq!(routed(&response(None)).expect("routed"), Some("fallback"));
    }

    #[test]
    fn non_ascii_value_is_a_body_error() {
        let value = HeaderValue::from_bytes(b"caf\xc3\xa9").expect("obs-text is a valid value");

        let error = routed(&response(Some(value))).unwrap_err();

        assert!(error.is_body());
    }
}
