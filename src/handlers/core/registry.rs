//! Command handler registry.
//!
//! The `Registry` maps command names to handlers. It is filled once at
//! startup from the loader's output and only read afterwards, so it is
//! shared behind an `Arc` without any lock.

use super::traits::SlashCommand;
use std::collections::HashMap;
use std::sync::Arc;

/// Registry of command handlers.
#[derive(Default)]
pub struct Registry {
    handlers: HashMap<String, Arc<dyn SlashCommand>>,
}

impl Registry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or overwrite the handler for `name`.
    ///
    /// Returns the handler that was replaced, if any. Last write wins.
    pub fn register(
        &mut self,
        name: impl Into<String>,
        handler: Arc<dyn SlashCommand>,
    ) -> Option<Arc<dyn SlashCommand>> {
        self.handlers.insert(name.into(), handler)
    }

    /// Look up the handler for `name`.
    pub fn resolve(&self, name: &str) -> Option<&Arc<dyn SlashCommand>> {
        self.handlers.get(name)
    }

    pub fn len(&self) -> usize {
        self.handlers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }

    /// Registered command names, sorted.
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.handlers.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }
}
