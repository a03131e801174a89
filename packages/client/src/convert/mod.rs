//! Body conversion
//!
//! Serializes outgoing entities and deserializes incoming bodies, choosing the format from the
//! message's `Content-Type`.

pub mod codec;
pub mod worker;

pub use codec::Codec;
pub use worker::MessageWorker;
