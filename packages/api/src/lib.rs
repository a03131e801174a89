//! # eddy
//!
//! Response dispatch for asynchronous HTTP calls. Instead of handing back one parsed body, a
//! request routes its settled response through a tree of conditions (status, status family,
//! content type, a header, or any attribute a [`Selector`] derives), runs the first matching
//! action and optionally captures a typed value.
//!
//! - **[`Rest`] / [`Requester`]** build and issue requests
//! - **[`selector`]** strategies and **[`condition`]** builders describe the routing tree
//! - **[`Dispatcher`]** runs the tree once the response arrives and resolves a [`Completion`]
//!
//! ```no_run
//! use eddy::prelude::*;
//! use serde::Deserialize;
//!
//! #[derive(Debug, Deserialize)]
//! struct Order {
//!     id: u64,
//!     state: String,
//! }
//!
//! # async fn run() -> eddy::Result<()> {
//! let rest = Rest::builder().base_url("http://localhost:8080").build()?;
//!
//! let order: Option<Order> = rest
//!     .post("/orders")
//!     .header("x-request-id", "5d7c")
//!     .accept(mime::APPLICATION_JSON, [])
//!     .body(&serde_json::json!({ "sku": "A-113", "quantity": 2 }))
//!     .dispatch(selector::series(), [
//!         on(Series::Successful).dispatch(selector::content_type(), [
//!             on(mime::APPLICATION_JSON).typed::<Order>().capture(),
//!         ])?,
//!         on(Series::ClientError).call(|response| {
//!             Err(format!("order rejected: {}", response.text()?).into())
//!         }),
//!     ])
//!     .capture()
//!     .await?;
//! # Ok(())
//! # }
//! ```
//!
//! A response that matches no binding in a tree without wildcard fails the completion with a
//! [`Kind::NoRoute`] error carrying the response. Every failure reports where the request was
//! issued through [`Error::call_site`].

#![deny(unsafe_code)]
#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod binding;
pub mod capture;
pub mod condition;
pub mod dispatch;
pub mod prelude;
pub mod requester;
pub mod rest;
pub mod router;
pub mod selector;

pub use binding::{Action, Attribute, Binding, Bindings};
pub use capture::Capture;
pub use condition::{
    Capturer, ResponseEntity, TypedCondition, UntypedCondition, any, any_content_type, any_series,
    any_status, anything, on,
};
pub use dispatch::{Completion, Dispatcher, ResponseDispatcher};
pub use requester::Requester;
pub use rest::{Rest, RestBuilder};
pub use router::{Router, RoutingTree};
pub use selector::{Selector, Series};

// Re-export the collaborator layer
pub use eddy_client::{
    BoxError, CallSite, ClientConfig, ClientRequest, ClientResponse, Codec, Error, HyperTransport,
    Kind, MessageWorker, Result, Transport,
};
