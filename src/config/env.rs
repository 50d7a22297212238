//! Configuration population from the process environment.
//!
//! The environment is consulted here and nowhere else. `from_env` runs once
//! at startup; the resulting [`EntrypointConfig`] is handed to the rest of
//! the program by value.

use std::env;
use std::path::PathBuf;
use std::str::FromStr;

use crate::config::schema::EntrypointConfig;

impl EntrypointConfig {
    /// Populate the configuration from the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Populate the configuration from an arbitrary variable lookup.
    ///
    /// `from_env` delegates here; tests supply a closure over a fixed map.
    /// Empty values are treated as unset, the way shell `[ -n "$VAR" ]`
    /// guards treat them.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        config.database.engine = non_empty(lookup("DATABASE"));
        if let Some(host) = non_empty(lookup("SQL_HOST")) {
            config.database.host = host;
        }
        config.database.port = parse_or(lookup("SQL_PORT"), "SQL_PORT", config.database.port);

        config.rabbitmq.host = non_empty(lookup("RABBITMQ_HOST"));
        config.rabbitmq.port = parse_or(lookup("RABBITMQ_PORT"), "RABBITMQ_PORT", config.rabbitmq.port);

        config.celery_broker_url = non_empty(lookup("CELERY_BROKER_URL"));

        config.browser.browsers_path = non_empty(lookup("PLAYWRIGHT_BROWSERS_PATH")).map(PathBuf::from);

        config.admin.debug = parse_or::<i64>(lookup("DEBUG"), "DEBUG", 0) != 0;
        config.admin.superuser_username = non_empty(lookup("DJANGO_SUPERUSER_USERNAME"));
        config.admin.superuser_email = non_empty(lookup("DJANGO_SUPERUSER_EMAIL"));

        config.wait.timeout_secs = parse_or(
            lookup("STARTUP_WAIT_TIMEOUT"),
            "STARTUP_WAIT_TIMEOUT",
            config.wait.timeout_secs,
        );
        config.wait.poll_interval_secs = parse_or(
            lookup("STARTUP_WAIT_INTERVAL"),
            "STARTUP_WAIT_INTERVAL",
            config.wait.poll_interval_secs,
        );

        config
    }
}

/// Treat an unset or empty variable as absent.
fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

/// Parse a variable, falling back to the default with a warning when the
/// value does not parse.
fn parse_or<T: FromStr + Copy>(value: Option<String>, key: &str, default: T) -> T {
    match non_empty(value) {
        Some(raw) => match raw.parse() {
            Ok(parsed) => parsed,
            Err(_) => {
                tracing::warn!(key, value = %raw, "Unparseable value, using default");
                default
            }
        },
        None => default,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn test_empty_environment_yields_defaults() {
        let config = EntrypointConfig::from_lookup(|_| None);
        assert!(!config.database.is_postgres());
        assert_eq!(config.database.port, 5432);
        assert!(config.rabbitmq.host.is_none());
        assert!(!config.admin.debug);
    }

    #[test]
    fn test_postgres_environment() {
        let config = EntrypointConfig::from_lookup(lookup_from(&[
            ("DATABASE", "postgres"),
            ("SQL_HOST", "db"),
            ("SQL_PORT", "5433"),
        ]));
        assert!(config.database.is_postgres());
        assert_eq!(config.database.host, "db");
        assert_eq!(config.database.port, 5433);
    }

    #[test]
    fn test_empty_values_are_unset() {
        let config = EntrypointConfig::from_lookup(lookup_from(&[
            ("RABBITMQ_HOST", ""),
            ("CELERY_BROKER_URL", ""),
            ("SQL_HOST", ""),
        ]));
        assert!(config.rabbitmq.host.is_none());
        assert!(config.celery_broker_url.is_none());
        assert_eq!(config.database.host, "django-postgres");
    }

    #[test]
    fn test_unparseable_port_keeps_default() {
        let config = EntrypointConfig::from_lookup(lookup_from(&[("SQL_PORT", "not-a-port")]));
        assert_eq!(config.database.port, 5432);
    }

    #[test]
    fn test_debug_is_integer_truthiness() {
        let on = EntrypointConfig::from_lookup(lookup_from(&[("DEBUG", "1")]));
        assert!(on.admin.debug);

        let off = EntrypointConfig::from_lookup(lookup_from(&[("DEBUG", "0")]));
        assert!(!off.admin.debug);

        let garbage = EntrypointConfig::from_lookup(lookup_from(&[("DEBUG", "yes")]));
        assert!(!garbage.admin.debug);
    }

    #[test]
    fn test_wait_overrides() {
        let config = EntrypointConfig::from_lookup(lookup_from(&[
            ("STARTUP_WAIT_TIMEOUT", "5"),
            ("STARTUP_WAIT_INTERVAL", "2"),
        ]));
        assert_eq!(config.wait.timeout_secs, 5);
        assert_eq!(config.wait.poll_interval_secs, 2);
    }
}
