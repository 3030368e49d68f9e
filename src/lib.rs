//! zechbot - slash-command Discord bot.
//!
//! Two binaries share this library:
//!
//! - `zechbot`: connects to the gateway and dispatches command interactions
//! - `zechbot-deploy`: registers the command catalog with the platform
//!
//! Both read the same [`handlers::CATALOG`], so what is dispatched and what
//! is registered can't drift apart.

pub mod config;
pub mod error;
pub mod handlers;
pub mod metadata;
pub mod network;
pub mod publisher;
pub mod telemetry;
