//! Recording publisher sink.

use async_trait::async_trait;
use serde_json::Value;
use std::num::NonZeroU64;
use std::sync::{Arc, Mutex};
use zechbot::error::PublishError;
use zechbot::metadata::CommandSpec;
use zechbot::publisher::{CommandSink, RegistrationScope};

/// One bulk call as the remote side would see it.
#[derive(Debug, Clone, PartialEq)]
pub struct Upload {
    pub application_id: u64,
    pub scope: RegistrationScope,
    pub body: Value,
}

/// Sink that keeps a per-scope "remote" command set, like the platform.
#[derive(Clone, Default)]
pub struct RecordingSink {
    uploads: Arc<Mutex<Vec<Upload>>>,
    fail: bool,
}

#[allow(dead_code)]
impl RecordingSink {
    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }

    pub fn uploads(&self) -> Vec<Upload> {
        self.uploads.lock().unwrap().clone()
    }
}

#[async_trait]
impl CommandSink for RecordingSink {
    async fn bulk_overwrite(
        &self,
        application_id: NonZeroU64,
        scope: RegistrationScope,
        commands: &[CommandSpec],
    ) -> Result<usize, PublishError> {
        if self.fail {
            return Err(PublishError::Remote("401: Unauthorized".to_string()));
        }
        let body = serde_json::to_value(commands)
            .map_err(|e| PublishError::Remote(e.to_string()))?;
        self.uploads.lock().unwrap().push(Upload {
            application_id: application_id.get(),
            scope,
            body,
        });
        Ok(commands.len())
    }
}
