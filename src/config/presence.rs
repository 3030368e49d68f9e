//! Presence configuration.

use serde::Deserialize;

use super::defaults::{default_activity, default_activity_kind, default_status};

/// Online status advertised by the bot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PresenceStatus {
    Online,
    Idle,
    Dnd,
    Invisible,
}

/// Activity verb shown before the activity name ("Playing ...").
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActivityKind {
    Playing,
    Listening,
    Watching,
    Competing,
}

/// Presence configuration, applied when the gateway session is ready.
#[derive(Debug, Clone, Deserialize)]
pub struct PresenceConfig {
    /// Online status (default: dnd).
    #[serde(default = "default_status")]
    pub status: PresenceStatus,
    /// Activity name (default: "dsc.gg/zechhaus").
    #[serde(default = "default_activity")]
    pub activity: String,
    /// Activity kind (default: playing).
    #[serde(default = "default_activity_kind")]
    pub kind: ActivityKind,
}

impl Default for PresenceConfig {
    fn default() -> Self {
        Self {
            status: default_status(),
            activity: default_activity(),
            kind: default_activity_kind(),
        }
    }
}
