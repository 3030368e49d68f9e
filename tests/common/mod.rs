//! Integration test common infrastructure.
//!
//! Provides an in-memory interaction transport and a recording publisher
//! sink so dispatch and publishing can be exercised without a gateway.

pub mod sink;
pub mod transport;

#[allow(unused_imports)]
pub use sink::RecordingSink;
#[allow(unused_imports)]
pub use transport::{Sent, TestInteraction};
