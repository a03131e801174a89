use std::fmt;
use std::marker::PhantomData;

use eddy_client::BoxError;
use eddy_client::error;
use serde::de::DeserializeOwned;

use super::capturer::Capturer;
use super::entity::ResponseEntity;
use crate::binding::{Attribute, Binding};
use crate::capture::Capture;

/// Builds bindings that first convert the response body to `I`.
///
/// Conversion goes through the dispatcher's [`MessageWorker`](eddy_client::MessageWorker);
/// a body that cannot be read as `I` fails the binding with a
/// [`Kind::Conversion`](eddy_client::Kind::Conversion) error before any callback runs.
pub struct TypedCondition<A, I> {
    attribute: Option<A>,
    _entity: PhantomData<fn() -> I>,
}

impl<A: Attribute, I> TypedCondition<A, I> {
    pub(crate) fn new(attribute: Option<A>) -> Self {
        Self {
            attribute,
            _entity: PhantomData,
        }
    }
}

impl<A, I> TypedCondition<A, I>
where
    A: Attribute,
    I: DeserializeOwned + Send + 'static,
{
    /// Run `callback` against the converted response; the capture is empty.
    #[must_use]
    pub fn call<F>(self, callback: F) -> Binding<A>
    where
        F: Fn(ResponseEntity<I>) -> Result<(), BoxError> + Send + Sync + 'static,
    {
        Binding::create(self.attribute, move |response, worker| {
            let entity = ResponseEntity::read(response, worker)?;
            callback(entity).map_err(error::callback)?;
            Ok(Capture::none())
        })
    }

    /// Run `callback` against the converted body only; the capture is empty.
    #[must_use]
    pub fn call_entity<F>(self, callback: F) -> Binding<A>
    where
        F: Fn(I) -> Result<(), BoxError> + Send + Sync + 'static,
    {
        self.call(move |entity| callback(entity.into_body()))
    }

    /// Map the converted response to a value, captured once [`Capturer::capture`] is called.
    #[must_use]
    pub fn map<T, F>(self, function: F) -> Capturer<A, T>
    where
        T: Send + 'static,
        F: Fn(ResponseEntity<I>) -> Result<T, BoxError> + Send + Sync + 'static,
    {
        Capturer::new(self.attribute, move |response, worker| {
            let entity = ResponseEntity::read(response, worker)?;
            function(entity).map_err(error::callback)
        })
    }

    /// Map the converted body to a value, captured once [`Capturer::capture`] is called.
    #[must_use]
    pub fn map_entity<T, F>(self, function: F) -> Capturer<A, T>
    where
        T: Send + 'static,
        F: Fn(I) -> Result<T, BoxError> + Send + Sync + 'static,
    {
        self.map(move |entity| function(entity.into_body()))
    }

    /// Capture the converted body.
    #[must_use]
    pub fn capture(self) -> Binding<A> {
        Binding::create(self.attribute, |response, worker| {
            worker.read::<I>(response).map(Capture::value_of)
        })
    }

    /// Shorthand for `map(function).capture()`.
    #[must_use]
    pub fn capture_with<T, F>(self, function: F) -> Binding<A>
    where
        T: Send + 'static,
        F: Fn(ResponseEntity<I>) -> Result<T, BoxError> + Send + Sync + 'static,
    {
        self.map(function).capture()
    }

    /// Shorthand for `map_entity(function).capture()`.
    #[must_use]
    pub fn capture_entity_with<T, F>(self, function: F) -> Binding<A>
    where
        T: Send + 'static,
        F: Fn(I) -> Result<T, BoxError> + Send + Sync + 'static,
    {
        self.map_entity(function).capture()
    }
}

impl<A: fmt::Debug, I> fmt::Debug for TypedCondition<A, I> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TypedCondition")
            .field("attribute", &self.attribute)
            .field("entity", &std::any::type_name::<I>())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use crate::prelude::*;
    use bytes::Bytes;
    use http::header::{CONTENT_TYPE, HeaderValue};
    use serde::Deserialize;

    #[derive(Debug, Clone, PartialEq, Deserialize)]
    struct Invoice {
        number: String,
        cents: u64,
    }

    fn json(body: &'static str) -> ClientResponse {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        ClientResponse::new(StatusCode::OK, headers, Bytes::from_static(body.as_bytes()))
    }

    fn run(binding: &Binding<StatusCode>, response: &ClientResponse) -> crate::Result<Capture> {
        binding.execute(response, &MessageWorker::default())
    }

    #[test]
    fn captures_the_converted_body() {
        let binding = on(StatusCode::OK).typed::<Invoice>().capture();

        let invoice = run(&binding, &json(r#"{"number":"INV-7","cents":1250}"#))
            .and_then(Capture::into_value::<Invoice>)
            .expect("invoice capture");

        assert_eq!(
            invoice,
            Some(Invoice {
                number: "INV-7".to_string(),
                cents: 1250
            })
        );
    }

    #[test]
    fn maps_the_entity_with_its_status() {
        let binding = on(StatusCode::OK)
            .typed::<Invoice>()
            .capture_with(|entity| Ok((entity.status(), entity.body().cents)));

        let captured = run(&binding, &json(r#"{"number":"INV-8","cents":99}"#))
            .and_then(Capture::into_value::<(StatusCode, u64)>)
            .expect("tuple capture");

        assert_eq!(captured, Some((StatusCode::OK, 99)));
    }

    #[test]
    fn conversion_failure_skips_the_callback() {
        let binding = on(StatusCode::OK)
            .typed::<Invoice>()
            .call_entity(|_| panic!("callback must not run"));

        let error = run(&binding, &json(r#"{"number":7}"#)).unwrap_err();

        assert!(error.is_conversion());
    }
}
