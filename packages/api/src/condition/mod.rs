//! Fluent construction of bindings
//!
//! A condition fixes the attribute a binding is registered for; its methods then choose what
//! the binding does:
//!
//! ```no_run
//! use eddy::prelude::*;
//!
//! # fn tree() -> eddy::Result<RoutingTree<Series>> {
//! RoutingTree::new(selector::series(), [
//!     on(Series::Successful).dispatch(selector::content_type(), [
//!         on(mime::APPLICATION_JSON).typed::<serde_json::Value>().capture(),
//!         any_content_type().call(|response| {
//!             log::warn!("unexpected body: {:?}", response.content_type());
//!             Ok(())
//!         }),
//!     ])?,
//!     on(Series::ClientError).map(|response| Ok(response.status())).capture(),
//!     any_series().run(|| Ok(())),
//! ])
//! # }
//! ```

mod capturer;
mod entity;
mod typed;
mod untyped;

pub use capturer::Capturer;
pub use entity::ResponseEntity;
pub use typed::TypedCondition;
pub use untyped::UntypedCondition;

use http::StatusCode;
use mime::Mime;

use crate::binding::Attribute;
use crate::selector::Series;

/// Condition for responses whose attribute equals `attribute`.
#[must_use]
pub fn on<A: Attribute>(attribute: A) -> UntypedCondition<A> {
    UntypedCondition::new(Some(attribute))
}

/// Wildcard condition for a tree routing on `A`.
#[must_use]
pub fn any<A: Attribute>() -> UntypedCondition<A> {
    UntypedCondition::new(None)
}

/// Wildcard for [`selector::status`](crate::selector::status) trees.
#[must_use]
pub fn any_status() -> UntypedCondition<StatusCode> {
    any()
}

/// Wildcard for [`selector::series`](crate::selector::series) trees.
#[must_use]
pub fn any_series() -> UntypedCondition<Series> {
    any()
}

/// Wildcard for [`selector::content_type`](crate::selector::content_type) trees.
#[must_use]
pub fn any_content_type() -> UntypedCondition<Mime> {
    any()
}

/// Wildcard for single-binding trees built with [`selector::any`](crate::selector::any).
#[must_use]
pub fn anything() -> UntypedCondition<()> {
    any()
}
