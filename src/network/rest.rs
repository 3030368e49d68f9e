//! REST command sink.

use crate::config::{PublisherCredentials, Token};
use crate::error::PublishError;
use crate::metadata::CommandSpec;
use crate::publisher::{CommandSink, RegistrationScope};
use async_trait::async_trait;
use serenity::all::{ApplicationId, GuildId, HttpBuilder};
use std::num::NonZeroU64;

/// Bulk-replaces application commands through the platform's REST API.
pub struct RestSink {
    token: Token,
}

impl RestSink {
    pub fn new(credentials: &PublisherCredentials) -> Self {
        Self {
            token: credentials.token.clone(),
        }
    }
}

#[async_trait]
impl CommandSink for RestSink {
    async fn bulk_overwrite(
        &self,
        application_id: NonZeroU64,
        scope: RegistrationScope,
        commands: &[CommandSpec],
    ) -> Result<usize, PublishError> {
        let http = HttpBuilder::new(self.token.expose())
            .application_id(ApplicationId::new(application_id.get()))
            .build();

        let registered = match scope {
            RegistrationScope::Guild(guild_id) => {
                http.create_guild_commands(GuildId::new(guild_id.get()), &commands)
                    .await
            }
            RegistrationScope::Global => http.create_global_commands(&commands).await,
        }
        .map_err(|e| PublishError::Remote(e.to_string()))?;

        Ok(registered.len())
    }
}
