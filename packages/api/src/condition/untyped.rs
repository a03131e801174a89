use std::fmt;

use eddy_client::error::{self, Result};
use eddy_client::{BoxError, ClientResponse};

use super::capturer::Capturer;
use super::typed::TypedCondition;
use crate::binding::{Attribute, Binding};
use crate::capture::Capture;
use crate::router::RoutingTree;
use crate::selector::Selector;

/// Builds bindings that work on the raw [`ClientResponse`].
pub struct UntypedCondition<A> {
    attribute: Option<A>,
}

impl<A: Attribute> UntypedCondition<A> {
    pub(crate) fn new(attribute: Option<A>) -> Self {
        Self { attribute }
    }

    /// Run `callback` against the response; the capture is empty.
    #[must_use]
    pub fn call<F>(self, callback: F) -> Binding<A>
    where
        F: Fn(&ClientResponse) -> std::result::Result<(), BoxError> + Send + Sync + 'static,
    {
        Binding::create(self.attribute, move |response, _| {
            callback(response).map_err(error::callback)?;
            Ok(Capture::none())
        })
    }

    /// Run `action` without looking at the response; the capture is empty.
    #[must_use]
    pub fn run<F>(self, action: F) -> Binding<A>
    where
        F: Fn() -> std::result::Result<(), BoxError> + Send + Sync + 'static,
    {
        self.call(move |_| action())
    }

    /// Map the response to a value, captured once [`Capturer::capture`] is called.
    #[must_use]
    pub fn map<T, F>(self, function: F) -> Capturer<A, T>
    where
        T: Send + 'static,
        F: Fn(&ClientResponse) -> std::result::Result<T, BoxError> + Send + Sync + 'static,
    {
        Capturer::new(self.attribute, move |response, _| {
            function(response).map_err(error::callback)
        })
    }

    /// Capture the response itself.
    #[must_use]
    pub fn capture(self) -> Binding<A> {
        Binding::create(self.attribute, |response, _| {
            Ok(Capture::value_of(response.clone()))
        })
    }

    /// Shorthand for `map(function).capture()`.
    #[must_use]
    pub fn capture_with<T, F>(self, function: F) -> Binding<A>
    where
        T: Send + 'static,
        F: Fn(&ClientResponse) -> std::result::Result<T, BoxError> + Send + Sync + 'static,
    {
        self.map(function).capture()
    }

    /// Route matching responses through a nested tree level.
    ///
    /// The nested capture becomes this binding's capture. A nested miss without a nested
    /// wildcard falls back to the wildcard of this level.
    ///
    /// # Errors
    ///
    /// Returns a [`Kind::Builder`](eddy_client::Kind::Builder) error if two nested bindings
    /// share an attribute.
    pub fn dispatch<B, S>(
        self,
        selector: S,
        bindings: impl IntoIterator<Item = Binding<B>>,
    ) -> Result<Binding<A>>
    where
        B: Attribute,
        S: Selector<B> + 'static,
    {
        Ok(self.route(RoutingTree::new(selector, bindings)?))
    }

    /// Route matching responses through an already built `tree`.
    #[must_use]
    pub fn route<B: Attribute>(self, tree: RoutingTree<B>) -> Binding<A> {
        Binding::create(self.attribute, move |response, worker| {
            tree.route(response, worker)
        })
    }

    /// Switch to bindings that read the body as `I` first.
    #[must_use]
    pub fn typed<I>(self) -> TypedCondition<A, I> {
        TypedCondition::new(self.attribute)
    }
}

impl<A: fmt::Debug> fmt::Debug for UntypedCondition<A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UntypedCondition")
            .field("attribute", &self.attribute)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use crate::prelude::*;
    use bytes::Bytes;

    fn response(status: StatusCode) -> ClientResponse {
        ClientResponse::new(status, HeaderMap::new(), Bytes::from_static(b"pong"))
    }

    fn run(binding: &Binding<StatusCode>, status: StatusCode) -> crate::Result<Capture> {
        binding.execute(&response(status), &MessageWorker::default())
    }

    #[test]
    fn call_yields_an_empty_capture() {
        let binding = on(StatusCode::OK).call(|_| Ok(()));

        assert!(!run(&binding, StatusCode::OK).expect("callback succeeds").is_present());
    }

    #[test]
    fn callback_errors_are_wrapped_once() {
        let binding = any_status().call(|_| Err("quota exceeded".into()));

        let error = run(&binding, StatusCode::OK).unwrap_err();

        assert!(error.is_callback());
        assert_eq!(error.to_string(), "callback failed: quota exceeded");
    }

    #[test]
    fn reraised_eddy_errors_keep_their_kind() {
        let binding = any_status().call(|response| {
            let _: u64 = MessageWorker::default().read(response)?;
            Ok(())
        });

        assert!(run(&binding, StatusCode::OK).unwrap_err().is_conversion());
    }

    #[test]
    fn map_then_capture_matches_direct_call() {
        let reason = |response: &ClientResponse| -> std::result::Result<String, BoxError> {
            Ok(format!("{} {}", response.status().as_u16(), response.text()?))
        };
        let binding = on(StatusCode::OK).map(reason).map(|text| Ok(text.len())).capture();

        let captured = run(&binding, StatusCode::OK)
            .and_then(Capture::into_value::<usize>)
            .expect("usize capture");

        assert_eq!(
            captured,
            reason(&response(StatusCode::OK)).ok().map(|text| text.len())
        );
    }

    #[test]
    fn capture_keeps_the_response() {
        let binding = on(StatusCode::CREATED).capture();

        let captured = run(&binding, StatusCode::CREATED)
            .and_then(Capture::into_value::<ClientResponse>)
            .expect("response capture")
            .expect("present");

        assert_eq!(captured.status(), StatusCode::CREATED);
        assert_eq!(&captured.body()[..], b"pong");
    }
}
