//! Core configuration types and loading.

use serde::Deserialize;
use std::path::Path;
use thiserror::Error;

use super::dispatch::DispatchConfig;
use super::presence::PresenceConfig;

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("missing required environment variables: {}", .0.join(", "))]
    MissingEnv(Vec<&'static str>),
    #[error("{var} must be a non-zero numeric id, got '{value}'")]
    InvalidId { var: &'static str, value: String },
}

/// Non-secret bot settings.
///
/// Everything here has a default, so an absent settings file is valid.
/// Credentials never live in this file; see [`super::credentials`].
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Settings {
    /// Presence shown once the gateway session is ready.
    #[serde(default)]
    pub presence: PresenceConfig,
    /// Dispatcher concurrency settings.
    #[serde(default)]
    pub dispatch: DispatchConfig,
}

impl Settings {
    /// Load settings from a TOML file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let settings: Settings = toml::from_str(&content)?;
        Ok(settings)
    }

    /// Load settings, falling back to defaults when the file is absent.
    ///
    /// Only an implicit (default) path may be missing. A path the operator
    /// named explicitly must exist.
    pub fn load_or_default<P: AsRef<Path>>(path: P, explicit: bool) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        if !explicit && !path.exists() {
            return Ok(Self::default());
        }
        Self::load(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{ActivityKind, PresenceStatus};
    use std::io::Write;

    #[test]
    fn empty_file_yields_defaults() {
        let settings: Settings = toml::from_str("").unwrap();
        assert_eq!(settings.presence.status, PresenceStatus::Dnd);
        assert_eq!(settings.dispatch.max_in_flight, 16);
    }

    #[test]
    fn partial_file_keeps_other_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[presence]\nstatus = \"idle\"\nkind = \"watching\"").unwrap();

        let settings = Settings::load(file.path()).unwrap();
        assert_eq!(settings.presence.status, PresenceStatus::Idle);
        assert_eq!(settings.presence.kind, ActivityKind::Watching);
        assert_eq!(settings.presence.activity, "dsc.gg/zechhaus");
        assert_eq!(settings.dispatch.max_in_flight, 16);
    }

    #[test]
    fn missing_implicit_file_is_default() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("zechbot.toml");
        let settings = Settings::load_or_default(&path, false).unwrap();
        assert_eq!(settings.dispatch.max_in_flight, 16);
    }

    #[test]
    fn missing_explicit_file_is_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("custom.toml");
        assert!(matches!(
            Settings::load_or_default(&path, true),
            Err(ConfigError::Io(_))
        ));
    }

    #[test]
    fn unknown_status_is_parse_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[presence]\nstatus = \"busy\"").unwrap();
        assert!(matches!(Settings::load(file.path()), Err(ConfigError::Parse(_))));
    }
}
