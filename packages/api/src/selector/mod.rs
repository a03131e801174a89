//! Strategies that derive a routing attribute from a response
//!
//! A [`Selector`] reads one attribute off a settled response and resolves it against the
//! bindings of a tree level. The default resolution is an exact lookup; selectors override
//! [`Selector::select`] for range or best-effort matching.

mod any;
mod content_type;
mod header;
mod status;

pub use any::AnySelector;
pub use content_type::ContentTypeSelector;
pub use header::HeaderSelector;
pub use status::{ReasonPhraseSelector, Series, SeriesSelector, StatusCodeSelector, StatusSelector};

use std::fmt;

use eddy_client::ClientResponse;
use eddy_client::error::Result;
use http::HeaderName;

use crate::binding::{Attribute, Binding, Bindings};

/// Extracts an attribute from a response and finds the binding for it.
///
/// Selectors are shared by every dispatch running the same tree and must not keep per-response
/// state.
pub trait Selector<A: Attribute>: Send + Sync + fmt::Debug {
    /// The response's attribute, or `None` when it has none this selector can route on.
    ///
    /// # Errors
    ///
    /// Fails when the part of the response the attribute is read from is malformed; the
    /// failure ends dispatch of that response.
    fn attribute_of(&self, response: &ClientResponse) -> Result<Option<A>>;

    /// The binding for `attribute`, or `None` to fall back to the wildcard.
    fn select<'b>(
        &self,
        attribute: &Option<A>,
        bindings: &'b Bindings<A>,
    ) -> Option<&'b Binding<A>> {
        bindings.get(attribute)
    }
}

/// Route on the exact [`http::StatusCode`].
#[must_use]
pub fn status() -> StatusSelector {
    StatusSelector
}

/// Route on the numeric status code.
#[must_use]
pub fn status_code() -> StatusCodeSelector {
    StatusCodeSelector
}

/// Route on the status family (1xx to 5xx).
#[must_use]
pub fn series() -> SeriesSelector {
    SeriesSelector
}

/// Route on the canonical reason phrase of the status.
#[must_use]
pub fn reason_phrase() -> ReasonPhraseSelector {
    ReasonPhraseSelector
}

/// Route on the `Content-Type` media type, with wildcard ranges such as `application/*`.
#[must_use]
pub fn content_type() -> ContentTypeSelector {
    ContentTypeSelector
}

/// Route on the value of header `name`.
#[must_use]
pub fn header(name: HeaderName) -> HeaderSelector {
    HeaderSelector::new(name)
}

/// Always fall back to the wildcard.
#[must_use]
pub fn any() -> AnySelector {
    AnySelector
}
