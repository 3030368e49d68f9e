//! Configuration loading and management.
//!
//! This module is split into logical submodules:
//! - [`types`]: Settings file loading and `ConfigError`
//! - [`credentials`]: Environment-sourced token and identifiers
//! - [`presence`]: Presence configuration (PresenceConfig, PresenceStatus, ActivityKind)
//! - [`dispatch`]: Dispatcher concurrency configuration
//! - [`validation`]: Startup checks over the loaded settings

mod credentials;
mod defaults;
mod dispatch;
mod presence;
mod types;
mod validation;

pub use credentials::{
    APPLICATION_ID_VAR, BotCredentials, GUILD_ID_VAR, PublisherCredentials, TOKEN_VAR, Token,
};
pub use defaults::{DEFAULT_SETTINGS_PATH, SETTINGS_PATH_VAR};
pub use dispatch::DispatchConfig;
pub use presence::{ActivityKind, PresenceConfig, PresenceStatus};
pub use types::{ConfigError, Settings};
pub use validation::{ValidationError, validate};

/// Resolve the settings file path.
///
/// Precedence: first CLI argument, then `ZECHBOT_CONFIG`, then the default
/// path. The boolean is `true` when the path was named explicitly.
pub fn settings_path(cli_arg: Option<String>) -> (String, bool) {
    if let Some(path) = cli_arg {
        return (path, true);
    }
    match std::env::var(SETTINGS_PATH_VAR) {
        Ok(path) if !path.is_empty() => (path, true),
        _ => (DEFAULT_SETTINGS_PATH.to_string(), false),
    }
}
