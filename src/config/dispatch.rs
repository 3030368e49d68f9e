//! Dispatcher configuration.

use serde::Deserialize;

use super::defaults::default_max_in_flight;

/// Dispatcher concurrency configuration.
///
/// The gateway delivers every interaction on its own task. This bounds how
/// many of those tasks may be inside a handler body at the same time; the
/// rest wait for a slot in arrival order.
#[derive(Debug, Clone, Deserialize)]
pub struct DispatchConfig {
    /// Maximum concurrent handler invocations (default: 16).
    #[serde(default = "default_max_in_flight")]
    pub max_in_flight: usize,
}

impl Default for DispatchConfig {
    fn default() -> Self {
        Self {
            max_in_flight: default_max_in_flight(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_values_are_correct() {
        assert_eq!(DispatchConfig::default().max_in_flight, 16);
    }

    #[test]
    fn explicit_value_overrides_default() {
        let config: DispatchConfig = toml::from_str("max_in_flight = 4").unwrap();
        assert_eq!(config.max_in_flight, 4);
    }
}
