//! zechbot - gateway process.
//!
//! Loads the command catalog, builds the registry, and dispatches command
//! interactions until the gateway session ends.

use std::sync::Arc;
use tracing::{error, info, warn};
use zechbot::config::{self, BotCredentials, Settings};
use zechbot::handlers::{self, Dispatcher};
use zechbot::network::Gateway;
use zechbot::telemetry;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    telemetry::init();

    // Load settings
    let (settings_path, explicit) = config::settings_path(std::env::args().nth(1));
    let settings = Settings::load_or_default(&settings_path, explicit).map_err(|e| {
        error!(path = %settings_path, error = %e, "Failed to load settings");
        e
    })?;
    if let Err(errors) = config::validate(&settings) {
        for e in &errors {
            error!(path = %settings_path, error = %e, "Invalid setting");
        }
        return Err(anyhow::anyhow!(
            "{} invalid setting(s) in {settings_path}",
            errors.len()
        ));
    }

    // Build the registry
    let registry = handlers::load_catalog().into_registry();
    if registry.is_empty() {
        warn!("No commands loaded; every interaction will be dropped");
    }
    info!(commands = ?registry.names(), "Command registry ready");

    let credentials = match BotCredentials::from_env() {
        Ok(credentials) => credentials,
        Err(e) => {
            error!(error = %e, "Missing DISCORD_TOKEN in environment variables");
            std::process::exit(1);
        }
    };

    let dispatcher = Arc::new(Dispatcher::new(
        Arc::new(registry),
        settings.dispatch.max_in_flight,
    ));

    let gateway = Gateway::build(&credentials.token, dispatcher, settings.presence).await?;
    gateway.run().await
}
