//! Core handler infrastructure.
//!
//! This module contains the fundamental types for the command system:
//!
//! - [`context`]: per-invocation context, reply gating, inbound events
//! - [`traits`]: the [`SlashCommand`] contract every command implements
//! - [`loader`]: validates the command catalog
//! - [`registry`]: name to handler lookup, immutable after startup
//! - [`dispatch`]: routes events to handlers and contains failures
//!
//! Flow: `catalog -> loader::load -> LoadReport::into_registry -> Dispatcher`.

pub mod context;
pub mod dispatch;
pub mod loader;
pub mod registry;
pub mod traits;

pub use context::{
    CommandContext, CommandOption, InteractionEvent, InteractionTransport, OptionValue, Reply,
    ReplyChannel, ReplyState, UserRef,
};
pub use dispatch::{DispatchOutcome, Dispatcher, FAILURE_NOTICE};
pub use loader::{CommandModule, LoadReport, LoadedCommand, SkippedModule, load};
pub use registry::Registry;
pub use traits::SlashCommand;
