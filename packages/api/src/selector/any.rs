use eddy_client::ClientResponse;
use eddy_client::error::Result;

use super::Selector;
use crate::binding::{Attribute, Binding, Bindings};

/// Selects nothing, so routing always falls back to the wildcard.
#[derive(Debug, Clone, Copy, Default)]
pub struct AnySelector;

impl<A: Attribute> Selector<A> for AnySelector {
    fn attribute_of(&self, _response: &ClientResponse) -> Result<Option<A>> {
        Ok(None)
    }

    fn select<'b>(
        &self,
        _attribute: &Option<A>,
        _bindings: &'b Bindings<A>,
    ) -> Option<&'b Binding<A>> {
        None
    }
}
