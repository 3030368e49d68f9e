//! Command loader.
//!
//! Turns the build-time command catalog into validated commands. A module
//! whose declaration breaks the platform's rules, or that panics while being
//! built, is skipped with a warning; nothing here is fatal, the caller
//! decides whether an empty result is acceptable.

use super::registry::Registry;
use super::traits::SlashCommand;
use crate::error::DeclarationError;
use crate::metadata::CommandSpec;
use std::any::Any;
use std::panic::{self, AssertUnwindSafe};
use std::sync::Arc;
use tracing::{info, warn};

/// One entry in the command catalog.
#[derive(Clone, Copy)]
pub struct CommandModule {
    /// Source module name, used only for log lines.
    pub source: &'static str,
    /// Constructs the command.
    pub build: fn() -> Arc<dyn SlashCommand>,
}

/// A command that passed validation.
pub struct LoadedCommand {
    pub spec: CommandSpec,
    pub handler: Arc<dyn SlashCommand>,
}

/// A module that was skipped, and why.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedModule {
    pub source: &'static str,
    pub error: DeclarationError,
}

/// Result of a load pass, in catalog order.
#[derive(Default)]
pub struct LoadReport {
    pub loaded: Vec<LoadedCommand>,
    pub skipped: Vec<SkippedModule>,
}

impl LoadReport {
    /// Declarations of every loaded command.
    pub fn specs(&self) -> Vec<CommandSpec> {
        self.loaded.iter().map(|cmd| cmd.spec.clone()).collect()
    }

    /// Build the registry from the loaded commands.
    ///
    /// Duplicate names are not rejected: the later module replaces the
    /// earlier one, and the overwrite is logged.
    pub fn into_registry(self) -> Registry {
        let mut registry = Registry::new();
        for cmd in self.loaded {
            if registry
                .register(cmd.spec.name.clone(), cmd.handler)
                .is_some()
            {
                warn!(command = %cmd.spec.name, "Duplicate command name, earlier handler replaced");
            }
        }
        registry
    }
}

/// Validate and collect every module in `modules`.
pub fn load(modules: &[CommandModule]) -> LoadReport {
    let mut report = LoadReport::default();

    for module in modules {
        let built = panic::catch_unwind(AssertUnwindSafe(|| {
            let handler = (module.build)();
            let spec = handler.declaration();
            (handler, spec)
        }));
        let (handler, spec) = match built {
            Ok(built) => built,
            Err(payload) => {
                let error = DeclarationError::Panicked(panic_message(payload.as_ref()));
                warn!(source = module.source, error = %error, "Skipping invalid command module");
                report.skipped.push(SkippedModule {
                    source: module.source,
                    error,
                });
                continue;
            }
        };

        match spec.validate() {
            Ok(()) => {
                info!(command = %spec.name, source = module.source, "Loaded command");
                report.loaded.push(LoadedCommand { spec, handler });
            }
            Err(error) => {
                warn!(source = module.source, error = %error, "Skipping invalid command module");
                report.skipped.push(SkippedModule {
                    source: module.source,
                    error,
                });
            }
        }
    }

    info!(
        loaded = report.loaded.len(),
        skipped = report.skipped.len(),
        "Successfully loaded {} commands",
        report.loaded.len()
    );
    report
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(msg) = payload.downcast_ref::<&str>() {
        (*msg).to_string()
    } else if let Some(msg) = payload.downcast_ref::<String>() {
        msg.clone()
    } else {
        "unknown panic".to_string()
    }
}
