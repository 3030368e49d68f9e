//! zechbot-deploy - registers the command catalog with the platform.
//!
//! Usage: `zechbot-deploy [--global]`
//!
//! Requires `DISCORD_TOKEN`, `APPLICATION_ID` and `GUILD_ID`. Without
//! `--global` the commands replace the guild's command set; with it they
//! replace the application's global set.

use tracing::error;
use zechbot::error::PublishError;
use zechbot::handlers::CATALOG;
use zechbot::network::RestSink;
use zechbot::{publisher, telemetry};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    telemetry::init();

    let global = std::env::args().skip(1).any(|arg| arg == "--global");

    match publisher::run(
        |var| std::env::var(var).ok(),
        RestSink::new,
        global,
        CATALOG,
    )
    .await
    {
        Ok(_) => Ok(()),
        Err(PublishError::Config(e)) => {
            error!(error = %e, "Missing or invalid environment variables");
            std::process::exit(1);
        }
        // Already logged by the publisher; the operator re-runs manually.
        Err(PublishError::Remote(_)) => Ok(()),
    }
}
