//! USERINFO command.

use super::{CommandContext, HandlerResult, Reply, SlashCommand, UserRef};
use crate::metadata::{CommandSpec, OptionKind, OptionSpec};
use async_trait::async_trait;

const TARGET: &str = "target";

/// Handler for `/userinfo [target]`.
///
/// Shows the tag and id of `target`, or of the invoking user when the
/// option is omitted.
pub struct UserInfoCommand;

fn describe(user: &UserRef) -> String {
    format!("User: {}\nID: {}", user.tag, user.id)
}

#[async_trait]
impl SlashCommand for UserInfoCommand {
    fn declaration(&self) -> CommandSpec {
        CommandSpec::new("userinfo", "Shows information about yourself or another user.").option(
            OptionSpec::new(
                OptionKind::User,
                TARGET,
                "The user you want information about",
            ),
        )
    }

    async fn invoke(&self, ctx: &CommandContext) -> HandlerResult {
        let user = ctx.user_option(TARGET)?.unwrap_or(&ctx.user);
        ctx.reply(Reply::new(describe(user))).await
    }
}
