//! PING command.

use super::{CommandContext, HandlerResult, Reply, SlashCommand};
use crate::metadata::CommandSpec;
use async_trait::async_trait;

/// Handler for `/ping`. Confirms the bot is responsive.
pub struct PingCommand;

#[async_trait]
impl SlashCommand for PingCommand {
    fn declaration(&self) -> CommandSpec {
        CommandSpec::new("ping", "Replies with Pong!")
    }

    async fn invoke(&self, ctx: &CommandContext) -> HandlerResult {
        ctx.reply(Reply::new("Pong!")).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::handlers::test_support::{Sent, context_with};

    #[tokio::test]
    async fn replies_pong() {
        let (ctx, sent) = context_with("ping", Vec::new());
        PingCommand.invoke(&ctx).await.unwrap();
        assert_eq!(sent.take(), vec![Sent::Response(Reply::new("Pong!"))]);
    }

    #[test]
    fn declaration_is_valid() {
        let spec = PingCommand.declaration();
        assert_eq!(spec.name, "ping");
        assert!(spec.options.is_empty());
        assert!(spec.validate().is_ok());
    }
}
