//! Gateway - serenity event handler that feeds the dispatcher.
//!
//! Serenity owns the websocket session and spawns a task per event. This
//! module translates serenity's interaction types into
//! [`InteractionEvent`]s and answers through a [`SerenityTransport`].

use crate::config::{ActivityKind, PresenceConfig, PresenceStatus, Token};
use crate::error::{HandlerError, HandlerResult};
use crate::handlers::core::{
    CommandContext, CommandOption, Dispatcher, InteractionEvent, InteractionTransport,
    OptionValue, Reply, UserRef,
};
use async_trait::async_trait;
use serenity::all::{
    ActivityData, Client, CommandDataOption, CommandDataOptionValue, CommandDataResolved,
    CommandInteraction, Context, CreateInteractionResponse, CreateInteractionResponseFollowup,
    CreateInteractionResponseMessage, EventHandler, GatewayIntents, Http, Interaction,
    OnlineStatus, Ready, User,
};
use std::sync::Arc;
use tracing::{info, instrument};

/// Intents the bot subscribes to.
pub fn intents() -> GatewayIntents {
    GatewayIntents::GUILDS | GatewayIntents::GUILD_MESSAGES | GatewayIntents::MESSAGE_CONTENT
}

/// Answers one command interaction over the REST API.
pub struct SerenityTransport {
    http: Arc<Http>,
    interaction: CommandInteraction,
}

impl SerenityTransport {
    pub fn new(http: Arc<Http>, interaction: CommandInteraction) -> Self {
        Self { http, interaction }
    }
}

fn transport_error(e: serenity::Error) -> HandlerError {
    HandlerError::Transport(e.to_string())
}

#[async_trait]
impl InteractionTransport for SerenityTransport {
    async fn create_response(&self, reply: &Reply) -> HandlerResult {
        let message = CreateInteractionResponseMessage::new()
            .content(reply.content.clone())
            .ephemeral(reply.ephemeral);
        self.interaction
            .create_response(&*self.http, CreateInteractionResponse::Message(message))
            .await
            .map_err(transport_error)
    }

    async fn defer(&self, ephemeral: bool) -> HandlerResult {
        let result = if ephemeral {
            self.interaction.defer_ephemeral(&*self.http).await
        } else {
            self.interaction.defer(&*self.http).await
        };
        result.map_err(transport_error)
    }

    async fn create_followup(&self, reply: &Reply) -> HandlerResult {
        let followup = CreateInteractionResponseFollowup::new()
            .content(reply.content.clone())
            .ephemeral(reply.ephemeral);
        self.interaction
            .create_followup(&*self.http, followup)
            .await
            .map(|_| ())
            .map_err(transport_error)
    }
}

fn user_ref(user: &User) -> UserRef {
    UserRef {
        id: user.id.get(),
        tag: user.tag(),
    }
}

fn convert_option(option: &CommandDataOption, resolved: &CommandDataResolved) -> CommandOption {
    let value = match &option.value {
        CommandDataOptionValue::String(s) => OptionValue::String(s.clone()),
        CommandDataOptionValue::Integer(i) => OptionValue::Integer(*i),
        CommandDataOptionValue::Number(n) => OptionValue::Number(*n),
        CommandDataOptionValue::Boolean(b) => OptionValue::Boolean(*b),
        CommandDataOptionValue::User(id) => OptionValue::User(match resolved.users.get(id) {
            Some(user) => user_ref(user),
            // Not resolved by the platform: fall back to the bare id.
            None => UserRef {
                id: id.get(),
                tag: id.get().to_string(),
            },
        }),
        CommandDataOptionValue::Channel(id) => OptionValue::Channel(id.get()),
        CommandDataOptionValue::Role(id) => OptionValue::Role(id.get()),
        _ => OptionValue::Unsupported,
    };
    CommandOption {
        name: option.name.clone(),
        value,
    }
}

/// Translate a serenity interaction into a dispatcher event.
pub fn to_event(http: Arc<Http>, interaction: Interaction) -> InteractionEvent {
    match interaction {
        Interaction::Command(cmd) => {
            let options = cmd
                .data
                .options
                .iter()
                .map(|opt| convert_option(opt, &cmd.data.resolved))
                .collect();
            let user = user_ref(&cmd.user);
            let guild_id = cmd.guild_id.map(|id| id.get());
            let name = cmd.data.name.clone();
            InteractionEvent::Command(CommandContext::new(
                name,
                user,
                guild_id,
                options,
                Box::new(SerenityTransport::new(http, cmd)),
            ))
        }
        other => InteractionEvent::Other {
            kind: format!("{:?}", other.kind()),
        },
    }
}

fn activity(presence: &PresenceConfig) -> ActivityData {
    let name = presence.activity.clone();
    match presence.kind {
        ActivityKind::Playing => ActivityData::playing(name),
        ActivityKind::Listening => ActivityData::listening(name),
        ActivityKind::Watching => ActivityData::watching(name),
        ActivityKind::Competing => ActivityData::competing(name),
    }
}

fn online_status(status: PresenceStatus) -> OnlineStatus {
    match status {
        PresenceStatus::Online => OnlineStatus::Online,
        PresenceStatus::Idle => OnlineStatus::Idle,
        PresenceStatus::Dnd => OnlineStatus::DoNotDisturb,
        PresenceStatus::Invisible => OnlineStatus::Invisible,
    }
}

/// Serenity event handler.
struct Handler {
    dispatcher: Arc<Dispatcher>,
    presence: PresenceConfig,
}

#[async_trait]
impl EventHandler for Handler {
    async fn ready(&self, ctx: Context, ready: Ready) {
        info!(user = %ready.user.tag(), guilds = ready.guilds.len(), "Bot is now online");
        ctx.set_presence(Some(activity(&self.presence)), online_status(self.presence.status));
    }

    async fn interaction_create(&self, ctx: Context, interaction: Interaction) {
        let event = to_event(Arc::clone(&ctx.http), interaction);
        self.dispatcher.dispatch(event).await;
    }
}

/// The gateway client, ready to run.
pub struct Gateway {
    client: Client,
}

impl Gateway {
    /// Build the gateway client. Does not connect yet.
    #[instrument(skip_all)]
    pub async fn build(
        token: &Token,
        dispatcher: Arc<Dispatcher>,
        presence: PresenceConfig,
    ) -> anyhow::Result<Self> {
        let handler = Handler {
            dispatcher,
            presence,
        };
        let client = Client::builder(token.expose(), intents())
            .event_handler(handler)
            .await?;
        Ok(Self { client })
    }

    /// Run the session until the connection ends for good.
    pub async fn run(mut self) -> anyhow::Result<()> {
        info!("Connecting to gateway");
        self.client.start().await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dnd_maps_to_do_not_disturb() {
        assert_eq!(online_status(PresenceStatus::Dnd), OnlineStatus::DoNotDisturb);
    }

    #[test]
    fn intents_cover_guilds_and_messages() {
        let intents = intents();
        assert!(intents.contains(GatewayIntents::GUILDS));
        assert!(intents.contains(GatewayIntents::MESSAGE_CONTENT));
    }
}
