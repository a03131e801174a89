//! Everything needed to issue requests and describe routing trees, for glob import.

pub use crate::binding::{Attribute, Binding};
pub use crate::capture::Capture;
pub use crate::condition::{
    ResponseEntity, any, any_content_type, any_series, any_status, anything, on,
};
pub use crate::dispatch::{Completion, Dispatcher};
pub use crate::rest::Rest;
pub use crate::router::RoutingTree;
pub use crate::selector::{self, Selector, Series};

pub use eddy_client::{BoxError, ClientConfig, ClientResponse, Error, Kind, MessageWorker, Result};

pub use ::http::{HeaderMap, Method, StatusCode};
pub use mime::Mime;
