//! Command handler context and core types.
//!
//! Defines the [`CommandContext`] passed to every handler, the
//! [`InteractionEvent`] the gateway hands to the dispatcher, and the
//! [`ReplyChannel`] that enforces the platform's reply/follow-up rule.
//!
//! ## Reply State
//!
//! An interaction is answered exactly once through an initial response
//! (or a deferral). Every later message must be a follow-up. The channel
//! tracks which of the two phases the interaction is in:
//!
//! - `Pending`: nothing sent yet, only `reply` or `defer` are valid
//! - `Deferred` / `Replied`: only `follow_up` is valid

use crate::error::{HandlerError, HandlerResult};
use async_trait::async_trait;
use tokio::sync::Mutex;

/// A user as seen by handlers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserRef {
    /// Platform snowflake id.
    pub id: u64,
    /// Display tag (`name` or legacy `name#1234`).
    pub tag: String,
}

/// Value of one supplied command option.
#[derive(Debug, Clone, PartialEq)]
pub enum OptionValue {
    String(String),
    Integer(i64),
    Number(f64),
    Boolean(bool),
    User(UserRef),
    Channel(u64),
    Role(u64),
    /// Kinds handlers never declare (attachments, subcommands, ...).
    Unsupported,
}

impl OptionValue {
    /// Human-readable kind name for error messages.
    pub fn kind_name(&self) -> &'static str {
        match self {
            Self::String(_) => "string",
            Self::Integer(_) => "integer",
            Self::Number(_) => "number",
            Self::Boolean(_) => "boolean",
            Self::User(_) => "user",
            Self::Channel(_) => "channel",
            Self::Role(_) => "role",
            Self::Unsupported => "unsupported",
        }
    }
}

/// A named option supplied with an invocation.
#[derive(Debug, Clone, PartialEq)]
pub struct CommandOption {
    pub name: String,
    pub value: OptionValue,
}

/// Outgoing message content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reply {
    pub content: String,
    /// Only visible to the invoking user.
    pub ephemeral: bool,
}

impl Reply {
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            ephemeral: false,
        }
    }

    pub fn ephemeral(mut self) -> Self {
        self.ephemeral = true;
        self
    }
}

/// Acknowledgement phase of an interaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReplyState {
    Pending,
    Deferred,
    Replied,
}

impl ReplyState {
    /// True once the interaction has been answered or deferred.
    pub fn is_acknowledged(self) -> bool {
        !matches!(self, Self::Pending)
    }
}

/// Raw platform calls for answering one interaction.
///
/// Implementations only move bytes. The rules about which call is allowed
/// when live in [`ReplyChannel`].
#[async_trait]
pub trait InteractionTransport: Send + Sync {
    /// Send the initial response.
    async fn create_response(&self, reply: &Reply) -> HandlerResult;

    /// Acknowledge now, answer later.
    async fn defer(&self, ephemeral: bool) -> HandlerResult;

    /// Send an additional message after acknowledgement.
    async fn create_followup(&self, reply: &Reply) -> HandlerResult;
}

/// Reply channel for one interaction, gated by [`ReplyState`].
pub struct ReplyChannel {
    transport: Box<dyn InteractionTransport>,
    // Held across the transport call so concurrent sub-tasks of one handler
    // can't both send an initial response.
    state: Mutex<ReplyState>,
}

impl ReplyChannel {
    pub fn new(transport: Box<dyn InteractionTransport>) -> Self {
        Self {
            transport,
            state: Mutex::new(ReplyState::Pending),
        }
    }

    pub async fn state(&self) -> ReplyState {
        *self.state.lock().await
    }

    /// Send the initial response.
    pub async fn reply(&self, reply: Reply) -> HandlerResult {
        let mut state = self.state.lock().await;
        if state.is_acknowledged() {
            return Err(HandlerError::AlreadyAcknowledged);
        }
        self.transport.create_response(&reply).await?;
        *state = ReplyState::Replied;
        Ok(())
    }

    /// Defer the response.
    pub async fn defer(&self, ephemeral: bool) -> HandlerResult {
        let mut state = self.state.lock().await;
        if state.is_acknowledged() {
            return Err(HandlerError::AlreadyAcknowledged);
        }
        self.transport.defer(ephemeral).await?;
        *state = ReplyState::Deferred;
        Ok(())
    }

    /// Send a follow-up. Requires a prior reply or deferral.
    pub async fn follow_up(&self, reply: Reply) -> HandlerResult {
        let state = self.state.lock().await;
        if !state.is_acknowledged() {
            return Err(HandlerError::NotAcknowledged);
        }
        self.transport.create_followup(&reply).await
    }

    /// Send through whichever call the current state allows.
    pub async fn respond(&self, reply: Reply) -> HandlerResult {
        let mut state = self.state.lock().await;
        if state.is_acknowledged() {
            self.transport.create_followup(&reply).await
        } else {
            self.transport.create_response(&reply).await?;
            *state = ReplyState::Replied;
            Ok(())
        }
    }
}

/// Handler context for one slash command invocation.
pub struct CommandContext {
    /// Invoked command name.
    pub command: String,
    /// Invoking user.
    pub user: UserRef,
    /// Guild the command was used in, `None` in DMs.
    pub guild_id: Option<u64>,
    /// Options in the order the platform sent them.
    pub options: Vec<CommandOption>,
    channel: ReplyChannel,
}

impl CommandContext {
    pub fn new(
        command: impl Into<String>,
        user: UserRef,
        guild_id: Option<u64>,
        options: Vec<CommandOption>,
        transport: Box<dyn InteractionTransport>,
    ) -> Self {
        Self {
            command: command.into(),
            user,
            guild_id,
            options,
            channel: ReplyChannel::new(transport),
        }
    }

    /// Look up a supplied option by name.
    pub fn option(&self, name: &str) -> Option<&OptionValue> {
        self.options
            .iter()
            .find(|opt| opt.name == name)
            .map(|opt| &opt.value)
    }

    /// Look up an optional user option.
    ///
    /// Returns `Ok(None)` when absent and an error if the option holds a
    /// different kind of value.
    pub fn user_option(&self, name: &str) -> Result<Option<&UserRef>, HandlerError> {
        match self.option(name) {
            None => Ok(None),
            Some(OptionValue::User(user)) => Ok(Some(user)),
            Some(_) => Err(HandlerError::InvalidOption {
                name: name.to_string(),
                expected: "user",
            }),
        }
    }

    pub async fn reply(&self, reply: Reply) -> HandlerResult {
        self.channel.reply(reply).await
    }

    pub async fn defer(&self, ephemeral: bool) -> HandlerResult {
        self.channel.defer(ephemeral).await
    }

    pub async fn follow_up(&self, reply: Reply) -> HandlerResult {
        self.channel.follow_up(reply).await
    }

    pub async fn respond(&self, reply: Reply) -> HandlerResult {
        self.channel.respond(reply).await
    }

    pub async fn reply_state(&self) -> ReplyState {
        self.channel.state().await
    }
}

/// One inbound interaction as seen by the dispatcher.
pub enum InteractionEvent {
    /// A chat input (slash) command invocation.
    Command(CommandContext),
    /// Any other interaction kind (components, autocomplete, modals).
    Other { kind: String },
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::handlers::test_support::{Sent, context_with};

    #[tokio::test]
    async fn second_reply_is_rejected_without_sending() {
        let (ctx, log) = context_with("ping", vec![]);
        ctx.reply(Reply::new("first")).await.unwrap();

        let err = ctx.reply(Reply::new("second")).await.unwrap_err();
        assert!(matches!(err, HandlerError::AlreadyAcknowledged));
        assert_eq!(log.take(), vec![Sent::Response(Reply::new("first"))]);
        assert_eq!(ctx.reply_state().await, ReplyState::Replied);
    }

    #[tokio::test]
    async fn follow_up_requires_acknowledgement() {
        let (ctx, log) = context_with("ping", vec![]);

        let err = ctx.follow_up(Reply::new("early")).await.unwrap_err();
        assert!(matches!(err, HandlerError::NotAcknowledged));
        assert!(log.take().is_empty());
        assert_eq!(ctx.reply_state().await, ReplyState::Pending);
    }

    #[tokio::test]
    async fn defer_after_reply_is_rejected() {
        let (ctx, log) = context_with("ping", vec![]);
        ctx.reply(Reply::new("done")).await.unwrap();

        let err = ctx.defer(true).await.unwrap_err();
        assert!(matches!(err, HandlerError::AlreadyAcknowledged));
        assert_eq!(log.take(), vec![Sent::Response(Reply::new("done"))]);
    }

    #[tokio::test]
    async fn failed_response_leaves_interaction_pending() {
        let (ctx, log) = context_with("ping", vec![]);
        log.set_failing(true);

        let err = ctx.reply(Reply::new("lost")).await.unwrap_err();
        assert!(matches!(err, HandlerError::Transport(_)));
        assert_eq!(ctx.reply_state().await, ReplyState::Pending);

        log.set_failing(false);
        ctx.respond(Reply::new("retry")).await.unwrap();
        assert_eq!(log.take(), vec![Sent::Response(Reply::new("retry"))]);
        assert_eq!(ctx.reply_state().await, ReplyState::Replied);
    }

    #[tokio::test]
    async fn respond_after_defer_uses_follow_up() {
        let (ctx, log) = context_with("ping", vec![]);
        ctx.defer(false).await.unwrap();
        ctx.respond(Reply::new("later")).await.unwrap();

        assert_eq!(
            log.take(),
            vec![Sent::Deferred(false), Sent::FollowUp(Reply::new("later"))]
        );
        assert_eq!(ctx.reply_state().await, ReplyState::Deferred);
    }

    #[test]
    fn user_option_rejects_other_kinds() {
        let (ctx, _log) = context_with(
            "userinfo",
            vec![CommandOption {
                name: "target".to_string(),
                value: OptionValue::Integer(7),
            }],
        );
        assert!(matches!(
            ctx.user_option("target"),
            Err(HandlerError::InvalidOption { expected: "user", .. })
        ));
        assert_eq!(ctx.user_option("missing").unwrap(), None);
    }
}
