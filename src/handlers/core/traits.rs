//! The command unit contract.
//!
//! Every command is a type implementing [`SlashCommand`]: it declares its
//! metadata and provides an async body. The trait replaces any runtime
//! probing of a module's shape; a type that compiles has both halves.

use super::context::CommandContext;
use crate::error::HandlerResult;
use crate::metadata::CommandSpec;
use async_trait::async_trait;

/// A slash command: declaration plus executable body.
///
/// Implementations must be safe to run concurrently; the dispatcher does
/// not serialize invocations.
#[async_trait]
pub trait SlashCommand: Send + Sync {
    /// Metadata shown to users and uploaded by the publisher.
    fn declaration(&self) -> CommandSpec;

    /// Run the command for one invocation.
    async fn invoke(&self, ctx: &CommandContext) -> HandlerResult;
}
