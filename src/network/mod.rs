//! Network module.
//!
//! Contains the Gateway (serenity event handler feeding the dispatcher) and
//! the REST sink used by the publisher.

mod gateway;
mod rest;

pub use gateway::{Gateway, SerenityTransport, intents, to_event};
pub use rest::RestSink;
