//! Telemetry utilities: subscriber setup, command timing, spans.

use std::time::Instant;
use tracing_subscriber::EnvFilter;

/// Install the global fmt subscriber.
///
/// Honors `RUST_LOG`, defaulting to `info`. Safe to call more than once;
/// later calls are no-ops.
pub fn init() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(true)
        .try_init();
}

/// Guard for timing command execution.
///
/// Logs command latency when dropped.
pub struct CommandTimer {
    command: String,
    start: Instant,
}

impl CommandTimer {
    /// Start timing a command.
    pub fn new(command: impl Into<String>) -> Self {
        Self {
            command: command.into(),
            start: Instant::now(),
        }
    }
}

impl Drop for CommandTimer {
    fn drop(&mut self) {
        let elapsed_ms = self.start.elapsed().as_secs_f64() * 1000.0;
        tracing::debug!(command = %self.command, elapsed_ms, "Command finished");
    }
}

/// Standardized span constructors.
pub mod spans {
    use tracing::{Span, info_span};

    /// Create a span for a command execution.
    pub fn command(name: &str, user_id: u64, guild_id: Option<u64>) -> Span {
        if let Some(guild_id) = guild_id {
            info_span!("bot.command", command = %name, user_id, guild_id)
        } else {
            info_span!("bot.command", command = %name, user_id)
        }
    }
}
