//! Routing of one response through one tree level

use std::fmt;
use std::sync::Arc;

use eddy_client::error::{self, Result};
use eddy_client::{ClientResponse, MessageWorker};

use crate::binding::{Attribute, Binding, Bindings};
use crate::capture::Capture;
use crate::selector::Selector;

/// Runs the binding a selector picks for a response.
///
/// Stateless; everything it needs is passed per call.
#[derive(Debug, Clone, Copy, Default)]
pub struct Router;

impl Router {
    /// Route `response` through `bindings` using `selector`.
    ///
    /// When the selector picks nothing, the wildcard runs. When there is no wildcard either,
    /// the result is a [`Kind::NoWildcard`](eddy_client::Kind::NoWildcard) error, which an
    /// enclosing router treats as "this branch did not match" and the dispatcher turns into
    /// [`Kind::NoRoute`](eddy_client::Kind::NoRoute) at the top.
    ///
    /// # Errors
    ///
    /// Selector, conversion and callback failures are returned unchanged.
    pub fn route<A: Attribute>(
        response: &ClientResponse,
        worker: &MessageWorker,
        selector: &dyn Selector<A>,
        bindings: &Bindings<A>,
    ) -> Result<Capture> {
        let attribute = selector.attribute_of(response)?;
        let selected = selector.select(&attribute, bindings);

        tracing::trace!(
            ?selector,
            ?attribute,
            binding = ?selected,
            "routing response"
        );

        match selected {
            Some(binding) => match binding.execute(response, worker) {
                Err(error) if error.is_no_wildcard() && !binding.is_wildcard() => {
                    tracing::trace!(?binding, "nested tree did not match, trying wildcard");
                    Self::fallback(response, worker, bindings)
                }
                outcome => outcome,
            },
            None => Self::fallback(response, worker, bindings),
        }
    }

    fn fallback<A: Attribute>(
        response: &ClientResponse,
        worker: &MessageWorker,
        bindings: &Bindings<A>,
    ) -> Result<Capture> {
        match bindings.wildcard() {
            Some(wildcard) => wildcard.execute(response, worker),
            None => Err(error::no_wildcard()),
        }
    }
}

/// A selector together with the bindings it chooses from.
///
/// Immutable once built and cheap to clone, so one tree can serve any number of concurrent
/// dispatches.
pub struct RoutingTree<A> {
    selector: Arc<dyn Selector<A>>,
    bindings: Bindings<A>,
}

impl<A: Attribute> RoutingTree<A> {
    /// Build a tree level.
    ///
    /// # Errors
    ///
    /// Returns a [`Kind::Builder`](eddy_client::Kind::Builder) error if two bindings share an
    /// attribute.
    pub fn new<S>(selector: S, bindings: impl IntoIterator<Item = Binding<A>>) -> Result<Self>
    where
        S: Selector<A> + 'static,
    {
        Ok(Self {
            selector: Arc::new(selector),
            bindings: Bindings::new(bindings)?,
        })
    }

    #[must_use]
    pub fn bindings(&self) -> &Bindings<A> {
        &self.bindings
    }

    /// Route `response` through this tree.
    ///
    /// # Errors
    ///
    /// See [`Router::route`].
    pub fn route(&self, response: &ClientResponse, worker: &MessageWorker) -> Result<Capture> {
        Router::route(response, worker, self.selector.as_ref(), &self.bindings)
    }
}

impl<A: Attribute> Clone for RoutingTree<A> {
    fn clone(&self) -> Self {
        Self {
            selector: Arc::clone(&self.selector),
            bindings: self.bindings.clone(),
        }
    }
}

impl<A: fmt::Debug> fmt::Debug for RoutingTree<A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RoutingTree")
            .field("selector", &self.selector)
            .field("bindings", &self.bindings)
            .finish()
    }
}
