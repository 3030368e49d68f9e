//! Settings validation.
//!
//! Validates settings at startup to catch common errors early.

use super::Settings;
use thiserror::Error;
use tokio::sync::Semaphore;

/// Longest activity name the platform accepts.
const MAX_ACTIVITY_LEN: usize = 128;

/// Validation errors for settings.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("presence.activity must not be empty")]
    EmptyActivity,
    #[error("presence.activity must be at most 128 characters, got {0}")]
    ActivityTooLong(usize),
    #[error("dispatch.max_in_flight must be at least 1")]
    ZeroMaxInFlight,
    #[error("dispatch.max_in_flight must be at most {max}, got {got}")]
    MaxInFlightTooLarge { got: usize, max: usize },
}

/// Validate settings, returning all errors found.
pub fn validate(settings: &Settings) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    let activity = settings.presence.activity.trim();
    if activity.is_empty() {
        errors.push(ValidationError::EmptyActivity);
    } else if activity.chars().count() > MAX_ACTIVITY_LEN {
        errors.push(ValidationError::ActivityTooLong(activity.chars().count()));
    }

    let max_in_flight = settings.dispatch.max_in_flight;
    if max_in_flight == 0 {
        errors.push(ValidationError::ZeroMaxInFlight);
    } else if max_in_flight > Semaphore::MAX_PERMITS {
        errors.push(ValidationError::MaxInFlightTooLarge {
            got: max_in_flight,
            max: Semaphore::MAX_PERMITS,
        });
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        assert!(validate(&Settings::default()).is_ok());
    }

    #[test]
    fn collects_every_error() {
        let mut settings = Settings::default();
        settings.presence.activity = "  ".to_string();
        settings.dispatch.max_in_flight = 0;

        let errors = validate(&settings).unwrap_err();
        assert_eq!(
            errors,
            vec![ValidationError::EmptyActivity, ValidationError::ZeroMaxInFlight]
        );
    }

    #[test]
    fn long_activity_is_rejected() {
        let mut settings = Settings::default();
        settings.presence.activity = "x".repeat(129);
        assert_eq!(
            validate(&settings).unwrap_err(),
            vec![ValidationError::ActivityTooLong(129)]
        );
    }

    #[test]
    fn max_in_flight_above_semaphore_limit_is_rejected() {
        let settings: Settings =
            toml::from_str("[dispatch]\nmax_in_flight = 9223372036854775807").unwrap();
        assert_eq!(
            validate(&settings).unwrap_err(),
            vec![ValidationError::MaxInFlightTooLarge {
                got: 9223372036854775807,
                max: Semaphore::MAX_PERMITS,
            }]
        );
    }
}
