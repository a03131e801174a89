//! Media type selector with best-effort range matching

use std::cmp::Reverse;

use eddy_client::ClientResponse;
use eddy_client::error::Result;
use mime::Mime;

use super::Selector;
use crate::binding::{Binding, Bindings};

/// Routes on the response `Content-Type`, parameters stripped.
///
/// An exact binding wins. Otherwise the most specific range covering the media type is used
/// (`application/*` before `*/*`); among equally specific ranges the first registered wins.
/// A response without `Content-Type` has no attribute.
#[derive(Debug, Clone, Copy, Default)]
pub struct ContentTypeSelector;

impl Selector<Mime> for ContentTypeSelector {
    fn attribute_of(&self, response: &ClientResponse) -> Result<Option<Mime>> {
        Ok(response.content_type()?.map(|media| essence(&media)))
    }

    fn select<'b>(
        &self,
        attribute: &Option<Mime>,
        bindings: &'b Bindings<Mime>,
    ) -> Option<&'b Binding<Mime>> {
        let media = attribute.as_ref()?;

        if let Some(binding) = bindings.get(attribute) {
            return Some(binding);
        }

        bindings
            .iter()
            .filter_map(|binding| binding.attribute().map(|range| (range, binding)))
            .filter(|(range, _)| covers(range, media))
            .min_by_key(|(range, _)| Reverse(specificity(range)))
            .map(|(_, binding)| binding)
    }
}

fn essence(media: &Mime) -> Mime {
    media.essence_str().parse().unwrap_or_else(|_| media.clone())
}

fn covers(range: &Mime, media: &Mime) -> bool {
    let type_matches = range.type_() == mime::STAR || range.type_() == media.type_();
    let subtype_matches = range.subtype() == mime::STAR
        || (range.subtype() == media.subtype() && range.suffix() == media.suffix());
    type_matches && subtype_matches
}

fn specificity(range: &Mime) -> u8 {
    match (range.type_() == mime::STAR, range.subtype() == mime::STAR) {
        (true, _) => 0,
        (false, true) => 1,
        (false, false) => 2,
    }
}
