//! Offline command publisher.
//!
//! Loads the command catalog, collects every declaration, and replaces the
//! platform's registered command set in one bulk call. Because the call is
//! a full replace, running it twice with the same catalog leaves the remote
//! state unchanged.

use crate::config::PublisherCredentials;
use crate::error::PublishError;
use crate::handlers::core::{CommandModule, load};
use crate::metadata::CommandSpec;
use async_trait::async_trait;
use std::num::NonZeroU64;
use tracing::{error, info};

/// Where the command set is registered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RegistrationScope {
    /// One guild; updates are visible immediately.
    Guild(NonZeroU64),
    /// Every guild the application is in; propagation can take a while.
    Global,
}

/// The remote bulk-replace call.
#[async_trait]
pub trait CommandSink: Send + Sync {
    /// Replace every command in `scope` with `commands`.
    ///
    /// Returns the number of commands the platform reports as registered.
    async fn bulk_overwrite(
        &self,
        application_id: NonZeroU64,
        scope: RegistrationScope,
        commands: &[CommandSpec],
    ) -> Result<usize, PublishError>;
}

/// Declarations of every valid module in `modules`.
pub fn collect_specs(modules: &[CommandModule]) -> Vec<CommandSpec> {
    load(modules).specs()
}

/// Upload `commands` with one bulk call.
pub async fn publish<S: CommandSink + ?Sized>(
    sink: &S,
    application_id: NonZeroU64,
    scope: RegistrationScope,
    commands: &[CommandSpec],
) -> Result<usize, PublishError> {
    info!(
        count = commands.len(),
        scope = ?scope,
        "Registering application commands"
    );
    let registered = sink.bulk_overwrite(application_id, scope, commands).await?;
    info!("Successfully registered {registered} application commands");
    Ok(registered)
}

/// Full publisher run.
///
/// Credentials are checked first; if any is missing this returns
/// [`PublishError::Config`] without calling `connect`. A remote failure is
/// logged and returned, never retried.
pub async fn run<L, C, S>(
    lookup: L,
    connect: C,
    global: bool,
    modules: &[CommandModule],
) -> Result<usize, PublishError>
where
    L: Fn(&str) -> Option<String>,
    C: FnOnce(&PublisherCredentials) -> S,
    S: CommandSink,
{
    let credentials = PublisherCredentials::from_lookup(lookup)?;

    let scope = if global {
        RegistrationScope::Global
    } else {
        RegistrationScope::Guild(credentials.guild_id)
    };
    let commands = collect_specs(modules);
    let sink = connect(&credentials);

    publish(&sink, credentials.application_id, scope, &commands)
        .await
        .inspect_err(|e| error!(error = %e, "Error registering commands"))
}
