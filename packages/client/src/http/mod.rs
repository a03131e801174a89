//! HTTP value types exchanged between the request builder, the transport and the dispatcher
//!
//! This module provides the outgoing request snapshot, the settled response and the
//! URI/query helpers used to finalize a request.

pub mod request;
pub mod response;
pub mod uri;

pub use request::*;
pub use response::*;
pub use uri::*;
