//! Attribute/action pairs and their lookup table

use std::fmt;
use std::hash::Hash;
use std::sync::Arc;

use eddy_client::error::{self, Result};
use eddy_client::{ClientResponse, MessageWorker};
use hashbrown::HashMap;

use crate::capture::Capture;

/// A value a [`Selector`](crate::selector::Selector) derives from a response to route on.
pub trait Attribute: Eq + Hash + Clone + fmt::Debug + Send + Sync + 'static {}

impl<T> Attribute for T where T: Eq + Hash + Clone + fmt::Debug + Send + Sync + 'static {}

/// What a binding does once it is selected.
pub type Action = dyn Fn(&ClientResponse, &MessageWorker) -> Result<Capture> + Send + Sync;

/// An attribute value and the action run for responses carrying it.
///
/// A binding without an attribute is the wildcard of its tree.
pub struct Binding<A> {
    attribute: Option<A>,
    action: Arc<Action>,
}

impl<A: Attribute> Binding<A> {
    pub fn create<F>(attribute: Option<A>, action: F) -> Self
    where
        F: Fn(&ClientResponse, &MessageWorker) -> Result<Capture> + Send + Sync + 'static,
    {
        Self {
            attribute,
            action: Arc::new(action),
        }
    }

    #[must_use]
    pub fn attribute(&self) -> Option<&A> {
        self.attribute.as_ref()
    }

    #[must_use]
    pub fn is_wildcard(&self) -> bool {
        self.attribute.is_none()
    }

    /// Run the action.
    ///
    /// # Errors
    ///
    /// Conversion and callback failures of the action are returned unchanged.
    pub fn execute(&self, response: &ClientResponse, worker: &MessageWorker) -> Result<Capture> {
        (self.action)(response, worker)
    }
}

impl<A: Clone> Clone for Binding<A> {
    fn clone(&self) -> Self {
        Self {
            attribute: self.attribute.clone(),
            action: Arc::clone(&self.action),
        }
    }
}

impl<A: fmt::Debug> fmt::Debug for Binding<A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.attribute {
            Some(ref attribute) => f.debug_tuple("Binding").field(attribute).finish(),
            None => f.write_str("Binding(*)"),
        }
    }
}

/// The bindings of one tree level, keyed by attribute.
///
/// The wildcard is stored under the `None` key, so it is looked up the same way as any
/// concrete attribute. Iteration follows registration order.
#[derive(Clone)]
pub struct Bindings<A> {
    entries: Vec<Binding<A>>,
    index: HashMap<Option<A>, usize>,
}

impl<A: Attribute> Bindings<A> {
    /// Index `bindings`.
    ///
    /// # Errors
    ///
    /// Returns a [`Kind::Builder`](eddy_client::Kind::Builder) error if two bindings share an
    /// attribute, or if there is more than one wildcard.
    pub fn new(bindings: impl IntoIterator<Item = Binding<A>>) -> Result<Self> {
        let bindings = bindings.into_iter();
        let mut entries = Vec::with_capacity(bindings.size_hint().0);
        let mut index = HashMap::with_capacity(entries.capacity());

        for binding in bindings {
            if index.contains_key(&binding.attribute) {
                return Err(error::builder(match binding.attribute {
                    Some(ref attribute) => format!("duplicate binding for {attribute:?}"),
                    None => "duplicate wildcard binding".to_string(),
                }));
            }
            index.insert(binding.attribute.clone(), entries.len());
            entries.push(binding);
        }

        Ok(Self { entries, index })
    }

    /// The binding registered for exactly `attribute`; `None` looks up the wildcard.
    #[must_use]
    pub fn get(&self, attribute: &Option<A>) -> Option<&Binding<A>> {
        self.index.get(attribute).map(|&position| &self.entries[position])
    }

    #[must_use]
    pub fn wildcard(&self) -> Option<&Binding<A>> {
        self.get(&None)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Binding<A>> {
        self.entries.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<A: fmt::Debug> fmt::Debug for Bindings<A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(&self.entries).finish()
    }
}
