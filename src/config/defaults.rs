//! Default value functions for configuration.
//!
//! Separated into its own module for clarity and reuse.

use super::presence::{ActivityKind, PresenceStatus};

/// Default settings file, resolved relative to the working directory.
pub const DEFAULT_SETTINGS_PATH: &str = "zechbot.toml";

/// Environment variable that may name the settings file.
pub const SETTINGS_PATH_VAR: &str = "ZECHBOT_CONFIG";

// =============================================================================
// Presence Defaults
// =============================================================================

pub fn default_status() -> PresenceStatus {
    PresenceStatus::Dnd
}

pub fn default_activity() -> String {
    "dsc.gg/zechhaus".to_string()
}

pub fn default_activity_kind() -> ActivityKind {
    ActivityKind::Playing
}

// =============================================================================
// Dispatch Defaults
// =============================================================================

pub fn default_max_in_flight() -> usize {
    16
}
