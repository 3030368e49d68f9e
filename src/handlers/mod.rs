//! Slash command handlers.
//!
//! This module holds the command catalog and the individual commands. The
//! dispatch machinery lives in [`core`].
//!
//! ## Adding a command
//!
//! Implement [`SlashCommand`] in a new module and append it to [`CATALOG`].
//! Both the bot and the publisher read the same catalog, so the command is
//! dispatched and registered without touching anything else.

pub mod core;
mod ping;
mod userinfo;

pub use self::core::{
    CommandContext, CommandModule, CommandOption, DispatchOutcome, Dispatcher, InteractionEvent,
    InteractionTransport, LoadReport, OptionValue, Reply, ReplyState, Registry, SlashCommand,
    UserRef, load,
};
pub use crate::error::{HandlerError, HandlerResult};
pub use ping::PingCommand;
pub use userinfo::UserInfoCommand;

use std::sync::Arc;

/// Every command shipped with the bot, in load order.
pub const CATALOG: &[CommandModule] = &[
    CommandModule {
        source: "ping",
        build: build_ping,
    },
    CommandModule {
        source: "userinfo",
        build: build_userinfo,
    },
];

fn build_ping() -> Arc<dyn SlashCommand> {
    Arc::new(PingCommand)
}

fn build_userinfo() -> Arc<dyn SlashCommand> {
    Arc::new(UserInfoCommand)
}

/// Load the shipped catalog.
pub fn load_catalog() -> LoadReport {
    load(CATALOG)
}

#[cfg(test)]
pub(crate) mod test_support {
    //! In-memory transport for handler unit tests.

    use super::core::{CommandContext, CommandOption, InteractionTransport, Reply, UserRef};
    use crate::error::{HandlerError, HandlerResult};
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicBool, Ordering};
    use std::sync::{Arc, Mutex};

    #[derive(Debug, Clone, PartialEq, Eq)]
    pub enum Sent {
        Response(Reply),
        Deferred(bool),
        FollowUp(Reply),
    }

    /// Calls that reached the transport. Failed calls are not recorded.
    #[derive(Clone, Default)]
    pub struct SentLog {
        sent: Arc<Mutex<Vec<Sent>>>,
        failing: Arc<AtomicBool>,
    }

    impl SentLog {
        pub fn take(&self) -> Vec<Sent> {
            std::mem::take(&mut *self.sent.lock().unwrap())
        }

        /// Make every transport call fail until cleared.
        pub fn set_failing(&self, failing: bool) {
            self.failing.store(failing, Ordering::SeqCst);
        }

        fn push(&self, sent: Sent) -> HandlerResult {
            if self.failing.load(Ordering::SeqCst) {
                return Err(HandlerError::Transport("connection reset".to_string()));
            }
            self.sent.lock().unwrap().push(sent);
            Ok(())
        }
    }

    struct Recording(SentLog);

    #[async_trait]
    impl InteractionTransport for Recording {
        async fn create_response(&self, reply: &Reply) -> HandlerResult {
            self.0.push(Sent::Response(reply.clone()))
        }

        async fn defer(&self, ephemeral: bool) -> HandlerResult {
            self.0.push(Sent::Deferred(ephemeral))
        }

        async fn create_followup(&self, reply: &Reply) -> HandlerResult {
            self.0.push(Sent::FollowUp(reply.clone()))
        }
    }

    /// Context invoked by user `invoker` (id 1001) in guild 1.
    pub fn context_with(command: &str, options: Vec<CommandOption>) -> (CommandContext, SentLog) {
        let log = SentLog::default();
        let user = UserRef {
            id: 1001,
            tag: "invoker".to_string(),
        };
        let ctx = CommandContext::new(
            command,
            user,
            Some(1),
            options,
            Box::new(Recording(log.clone())),
        );
        (ctx, log)
    }
}
