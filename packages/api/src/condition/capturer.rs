use std::fmt;
use std::marker::PhantomData;
use std::sync::Arc;

use eddy_client::error::{self, Result};
use eddy_client::{BoxError, ClientResponse, MessageWorker};

use crate::binding::{Attribute, Binding};
use crate::capture::Capture;

type Producer<T> = dyn Fn(&ClientResponse, &MessageWorker) -> Result<T> + Send + Sync;

/// A deferred value transform, turned into a binding by [`capture`](Capturer::capture).
pub struct Capturer<A, T> {
    attribute: Option<A>,
    producer: Arc<Producer<T>>,
    _value: PhantomData<fn() -> T>,
}

impl<A: Attribute, T: Send + 'static> Capturer<A, T> {
    pub(crate) fn new<F>(attribute: Option<A>, producer: F) -> Self
    where
        F: Fn(&ClientResponse, &MessageWorker) -> Result<T> + Send + Sync + 'static,
    {
        Self {
            attribute,
            producer: Arc::new(producer),
            _value: PhantomData,
        }
    }

    /// Transform the value further before it is captured.
    #[must_use]
    pub fn map<U, F>(self, function: F) -> Capturer<A, U>
    where
        U: Send + 'static,
        F: Fn(T) -> std::result::Result<U, BoxError> + Send + Sync + 'static,
    {
        let producer = self.producer;
        Capturer::new(self.attribute, move |response, worker| {
            producer(response, worker).and_then(|value| function(value).map_err(error::callback))
        })
    }

    /// Finish into a binding whose capture holds the produced value.
    #[must_use]
    pub fn capture(self) -> Binding<A> {
        let producer = self.producer;
        Binding::create(self.attribute, move |response, worker| {
            producer(response, worker).map(Capture::value_of)
        })
    }
}

impl<A: fmt::Debug, T> fmt::Debug for Capturer<A, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Capturer")
            .field("attribute", &self.attribute)
            .field("value", &std::any::type_name::<T>())
            .finish()
    }
}
