//! Interaction dispatch.
//!
//! The `Dispatcher` bridges one inbound interaction to one registry lookup
//! and invocation. Every failure is contained here: unknown commands are
//! dropped, handler errors and panics are logged and answered with a
//! generic notice, and nothing propagates back to the gateway task.

use super::context::{CommandContext, InteractionEvent, Reply};
use super::registry::Registry;
use crate::error::HandlerError;
use crate::telemetry::{CommandTimer, spans};
use futures_util::FutureExt;
use std::panic::AssertUnwindSafe;
use std::sync::Arc;
use tokio::sync::Semaphore;
use tracing::{Instrument, debug, error, warn};

/// Notice sent to the invoking user when a handler fails.
pub const FAILURE_NOTICE: &str = "An error occurred while executing this command.";

/// What happened to one event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DispatchOutcome {
    /// Not a command invocation.
    Ignored,
    /// No handler registered under the command name.
    UnknownCommand,
    /// Handler returned successfully.
    Completed,
    /// Handler failed; carries the error code.
    Failed(&'static str),
}

/// Routes command interactions to registered handlers.
pub struct Dispatcher {
    registry: Arc<Registry>,
    permits: Semaphore,
}

impl Dispatcher {
    /// Create a dispatcher allowing at most `max_in_flight` concurrent
    /// handler invocations. The bound is clamped to what the semaphore
    /// can hold.
    pub fn new(registry: Arc<Registry>, max_in_flight: usize) -> Self {
        Self {
            registry,
            permits: Semaphore::new(max_in_flight.clamp(1, Semaphore::MAX_PERMITS)),
        }
    }

    pub fn registry(&self) -> &Arc<Registry> {
        &self.registry
    }

    /// Dispatch one event. Never fails.
    pub async fn dispatch(&self, event: InteractionEvent) -> DispatchOutcome {
        let ctx = match event {
            InteractionEvent::Command(ctx) => ctx,
            InteractionEvent::Other { kind } => {
                debug!(kind = %kind, "Ignoring non-command interaction");
                return DispatchOutcome::Ignored;
            }
        };

        let Some(handler) = self.registry.resolve(&ctx.command) else {
            warn!(command = %ctx.command, user = ctx.user.id, "Unknown command");
            return DispatchOutcome::UnknownCommand;
        };

        // The semaphore is never closed, so acquire only fails if that
        // invariant is broken.
        let _permit = match self.permits.acquire().await {
            Ok(permit) => permit,
            Err(e) => {
                error!(command = %ctx.command, error = %e, "Dispatch permits unavailable");
                return DispatchOutcome::Failed("internal_error");
            }
        };

        let span = spans::command(&ctx.command, ctx.user.id, ctx.guild_id);
        let _timer = CommandTimer::new(&ctx.command);

        let result = AssertUnwindSafe(handler.invoke(&ctx))
            .catch_unwind()
            .instrument(span)
            .await
            .unwrap_or_else(|_| Err(HandlerError::Internal("handler panicked".to_string())));

        match result {
            Ok(()) => DispatchOutcome::Completed,
            Err(e) => {
                error!(
                    command = %ctx.command,
                    error = %e,
                    code = e.error_code(),
                    "Error executing command"
                );
                send_failure_notice(&ctx).await;
                DispatchOutcome::Failed(e.error_code())
            }
        }
    }
}

/// Tell the user the command failed, using reply or follow-up as the
/// interaction's state requires.
async fn send_failure_notice(ctx: &CommandContext) {
    if let Err(e) = ctx.respond(Reply::new(FAILURE_NOTICE).ephemeral()).await {
        error!(command = %ctx.command, error = %e, "Failed to send failure notice");
    }
}
