//! Environment-sourced credentials and identifiers.
//!
//! Lookups go through a `Fn(&str) -> Option<String>` so the rules can be
//! exercised without touching the process environment. Empty values are
//! treated the same as unset ones.

use std::fmt;
use std::num::NonZeroU64;

use super::types::ConfigError;

/// Bot token variable.
pub const TOKEN_VAR: &str = "DISCORD_TOKEN";
/// Application id variable.
pub const APPLICATION_ID_VAR: &str = "APPLICATION_ID";
/// Target guild id variable.
pub const GUILD_ID_VAR: &str = "GUILD_ID";

/// A bot token. `Debug` never prints the secret.
#[derive(Clone, PartialEq, Eq)]
pub struct Token(String);

impl Token {
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    /// Borrow the raw token for handing to the platform client.
    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Token(<redacted>)")
    }
}

/// Credentials for the online bot process.
#[derive(Debug, Clone)]
pub struct BotCredentials {
    pub token: Token,
}

impl BotCredentials {
    /// Read credentials from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(env_lookup)
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        match non_empty(&lookup, TOKEN_VAR) {
            Some(token) => Ok(Self {
                token: Token::new(token),
            }),
            None => Err(ConfigError::MissingEnv(vec![TOKEN_VAR])),
        }
    }
}

/// Credentials for the offline publisher. All three values are required.
#[derive(Debug, Clone)]
pub struct PublisherCredentials {
    pub token: Token,
    pub application_id: NonZeroU64,
    pub guild_id: NonZeroU64,
}

impl PublisherCredentials {
    /// Read credentials from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(env_lookup)
    }

    /// Resolve all three values, reporting every missing one at once.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let token = non_empty(&lookup, TOKEN_VAR);
        let application_id = non_empty(&lookup, APPLICATION_ID_VAR);
        let guild_id = non_empty(&lookup, GUILD_ID_VAR);

        let (token, application_id, guild_id) = match (token, application_id, guild_id) {
            (Some(t), Some(a), Some(g)) => (t, a, g),
            (t, a, g) => {
                let missing = [(TOKEN_VAR, t), (APPLICATION_ID_VAR, a), (GUILD_ID_VAR, g)]
                    .into_iter()
                    .filter(|(_, value)| value.is_none())
                    .map(|(var, _)| var)
                    .collect();
                return Err(ConfigError::MissingEnv(missing));
            }
        };

        Ok(Self {
            token: Token::new(token),
            application_id: parse_id(APPLICATION_ID_VAR, &application_id)?,
            guild_id: parse_id(GUILD_ID_VAR, &guild_id)?,
        })
    }
}

fn env_lookup(var: &str) -> Option<String> {
    std::env::var(var).ok()
}

fn non_empty<F>(lookup: &F, var: &str) -> Option<String>
where
    F: Fn(&str) -> Option<String>,
{
    lookup(var)
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

fn parse_id(var: &'static str, value: &str) -> Result<NonZeroU64, ConfigError> {
    value.parse::<NonZeroU64>().map_err(|_| ConfigError::InvalidId {
        var,
        value: value.to_string(),
    })
}
