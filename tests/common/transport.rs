//! Recording interaction transport.

use async_trait::async_trait;
use std::sync::{Arc, Mutex};
use zechbot::error::{HandlerError, HandlerResult};
use zechbot::handlers::{
    CommandContext, CommandOption, InteractionEvent, InteractionTransport, Reply, UserRef,
};

/// One platform call made through the transport.
#[derive(Debug, Clone, PartialEq, Eq)]
#[allow(dead_code)]
pub enum Sent {
    Response(Reply),
    Deferred(bool),
    FollowUp(Reply),
}

#[derive(Default)]
struct Shared {
    sent: Mutex<Vec<Sent>>,
    fail_sends: Mutex<bool>,
}

struct Recording(Arc<Shared>);

impl Recording {
    fn record(&self, sent: Sent) -> HandlerResult {
        if *self.0.fail_sends.lock().unwrap() {
            return Err(HandlerError::Transport("connection reset".to_string()));
        }
        self.0.sent.lock().unwrap().push(sent);
        Ok(())
    }
}

#[async_trait]
impl InteractionTransport for Recording {
    async fn create_response(&self, reply: &Reply) -> HandlerResult {
        self.record(Sent::Response(reply.clone()))
    }

    async fn defer(&self, ephemeral: bool) -> HandlerResult {
        self.record(Sent::Deferred(ephemeral))
    }

    async fn create_followup(&self, reply: &Reply) -> HandlerResult {
        self.record(Sent::FollowUp(reply.clone()))
    }
}

/// Builder for a command interaction plus a handle on what it sent.
pub struct TestInteraction {
    shared: Arc<Shared>,
}

#[allow(dead_code)]
impl TestInteraction {
    /// Default invoking user.
    pub fn invoker() -> UserRef {
        UserRef {
            id: 80351110224678912,
            tag: "nelly".to_string(),
        }
    }

    /// A command event from [`Self::invoker`] and a handle to inspect it.
    pub fn command(name: &str, options: Vec<CommandOption>) -> (InteractionEvent, Self) {
        let shared = Arc::new(Shared::default());
        let ctx = CommandContext::new(
            name,
            Self::invoker(),
            Some(613425648685547541),
            options,
            Box::new(Recording(Arc::clone(&shared))),
        );
        (InteractionEvent::Command(ctx), Self { shared })
    }

    /// Make every later platform call fail.
    pub fn fail_sends(&self) {
        *self.shared.fail_sends.lock().unwrap() = true;
    }

    /// Everything sent so far.
    pub fn sent(&self) -> Vec<Sent> {
        self.shared.sent.lock().unwrap().clone()
    }
}
