//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (population handles type coercion)
//! - Validate value ranges (ports non-zero, poll interval non-zero)
//! - Only validate what a derived readiness check would actually use
//!
//! # Design Decisions
//! - Returns all validation errors, not just the first
//! - Validation is a pure function: `EntrypointConfig -> Result<(), Vec<_>>`
//! - Runs before the config is accepted into the startup plan
//! - A zero wait timeout is legal: it means a single probe attempt

use thiserror::Error;

use crate::config::schema::EntrypointConfig;

/// A single semantic violation in the configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// A host that a readiness check would probe is empty.
    #[error("{field} must not be empty")]
    EmptyHost { field: &'static str },

    /// A port that a readiness check would probe is zero.
    #[error("{field} must be in 1..=65535")]
    ZeroPort { field: &'static str },

    /// A configured path is empty.
    #[error("{field} must not be empty")]
    EmptyPath { field: &'static str },

    /// The poll interval is zero, which would make the waiter spin.
    #[error("wait.poll_interval_secs must be greater than zero")]
    ZeroPollInterval,
}

/// Validate the configuration, returning every violation found.
pub fn validate_config(config: &EntrypointConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if config.database.is_postgres() {
        if config.database.host.is_empty() {
            errors.push(ValidationError::EmptyHost {
                field: "database.host",
            });
        }
        if config.database.port == 0 {
            errors.push(ValidationError::ZeroPort {
                field: "database.port",
            });
        }
    }

    if let Some(host) = &config.rabbitmq.host {
        if host.is_empty() {
            errors.push(ValidationError::EmptyHost {
                field: "rabbitmq.host",
            });
        }
        if config.rabbitmq.port == 0 {
            errors.push(ValidationError::ZeroPort {
                field: "rabbitmq.port",
            });
        }
    }

    if let Some(path) = &config.browser.browsers_path {
        if path.as_os_str().is_empty() {
            errors.push(ValidationError::EmptyPath {
                field: "browser.browsers_path",
            });
        }
    }

    if config.wait.poll_interval_secs == 0 {
        errors.push(ValidationError::ZeroPollInterval);
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
    fn test_default_config_is_valid() {
        assert!(validate_config(&EntrypointConfig::default()).is_ok());
    }

    #[test]
    fn test_zero_timeout_is_valid() {
        let mut config = EntrypointConfig::default();
        config.wait.timeout_secs = 0;
        assert!(validate_config(&config).is_ok());
    }

    #[test]
    fn test_zero_poll_interval_rejected() {
        let mut config = EntrypointConfig::default();
        config.wait.poll_interval_secs = 0;
        let errors = validate_config(&config).unwrap_err();
        assert_eq!(errors, vec![ValidationError::ZeroPollInterval]);
    }

    #[test]
    fn test_inactive_database_fields_not_validated() {
        let mut config = EntrypointConfig::default();
        config.database.port = 0;
        assert!(
            validate_config(&config).is_ok(),
            "no check derived, nothing to validate"
        );
    }

    #[test]
    fn test_empty_browsers_path_rejected() {
        let mut config = EntrypointConfig::default();
        config.browser.browsers_path = Some(std::path::PathBuf::new());
        let errors = validate_config(&config).unwrap_err();
        assert_eq!(
            errors,
            vec![ValidationError::EmptyPath {
                field: "browser.browsers_path"
            }]
        );
    }

    #[test]
    fn test_all_errors_reported() {
        let mut config = EntrypointConfig::default();
        config.database.engine = Some("postgres".to_string());
        config.database.host = String::new();
        config.database.port = 0;
        config.wait.poll_interval_secs = 0;

        let errors = validate_config(&config).unwrap_err();
        assert_eq!(errors.len(), 3);
        assert!(errors.contains(&ValidationError::ZeroPollInterval));
        assert!(errors.contains(&ValidationError::EmptyHost {
            field: "database.host"
        }));
    }

    #[test]
    fn test_error_display() {
        let err = ValidationError::ZeroPort {
            field: "rabbitmq.port",
        };
        assert_eq!(err.to_string(), "rabbitmq.port must be in 1..=65535");
    }
}
