//! Unified error handling for zechbot.
//!
//! Each concern gets its own error enum: command handling, command
//! declarations, and publishing. Configuration errors live in
//! [`crate::config`] next to the loaders that produce them.

use thiserror::Error;

// ============================================================================
// Handler Errors (command processing)
// ============================================================================

/// Errors that can occur while a command handler runs.
#[derive(Debug, Error)]
pub enum HandlerError {
    /// The interaction was already answered (or deferred) and a second
    /// initial reply was attempted.
    #[error("interaction already acknowledged")]
    AlreadyAcknowledged,

    /// A follow-up was attempted before the interaction was answered.
    #[error("interaction not acknowledged yet")]
    NotAcknowledged,

    #[error("missing option: {0}")]
    MissingOption(String),

    #[error("invalid option {name}: expected {expected}")]
    InvalidOption {
        name: String,
        expected: &'static str,
    },

    /// The platform rejected or failed to deliver a response.
    #[error("transport error: {0}")]
    Transport(String),

    #[error("internal error: {0}")]
    Internal(String),
}

impl HandlerError {
    /// Get a static error code string for log labeling.
    #[inline]
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::AlreadyAcknowledged => "already_acknowledged",
            Self::NotAcknowledged => "not_acknowledged",
            Self::MissingOption(_) => "missing_option",
            Self::InvalidOption { .. } => "invalid_option",
            Self::Transport(_) => "transport_error",
            Self::Internal(_) => "internal_error",
        }
    }
}

/// Result type for command handlers.
pub type HandlerResult = Result<(), HandlerError>;

// ============================================================================
// Declaration Errors (command metadata)
// ============================================================================

/// Reasons a command declaration is rejected by the loader.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DeclarationError {
    #[error("command name is empty")]
    EmptyName,

    #[error("command name '{0}' must be at most 32 characters")]
    NameTooLong(String),

    #[error("command name '{0}' may only contain lowercase letters, digits, '-' and '_'")]
    InvalidName(String),

    #[error("command '{0}' has an empty description")]
    EmptyDescription(String),

    #[error("command '{0}' description must be at most 100 characters")]
    DescriptionTooLong(String),

    #[error("command '{command}' option '{option}' is invalid: {reason}")]
    InvalidOption {
        command: String,
        option: String,
        reason: &'static str,
    },

    #[error("command '{0}' declares more than 25 options")]
    TooManyOptions(String),

    #[error("command '{command}' declares option '{option}' twice")]
    DuplicateOption { command: String, option: String },

    /// The module's constructor or declaration panicked.
    #[error("command module panicked while loading: {0}")]
    Panicked(String),
}

// ============================================================================
// Publish Errors (remote registration)
// ============================================================================

/// Errors from the bulk command registration call.
#[derive(Debug, Error)]
pub enum PublishError {
    #[error("configuration error: {0}")]
    Config(#[from] crate::config::ConfigError),

    /// The remote platform rejected the request or could not be reached.
    #[error("remote registration failed: {0}")]
    Remote(String),
}
