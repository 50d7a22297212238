//! Configuration schema definitions.
//!
//! This module defines the complete configuration structure for the
//! entrypoint. All types derive `Serialize` so the resolved configuration can
//! be dumped as JSON (`--show-config`).

use serde::Serialize;
use std::path::PathBuf;

/// Root configuration for the pre-flight run.
///
/// Populated exactly once from the process environment (see
/// [`EntrypointConfig::from_env`]); every other component receives this
/// struct instead of reading the environment itself.
#[derive(Debug, Clone, Serialize, Default)]
pub struct EntrypointConfig {
    /// Relational database dependency.
    pub database: DatabaseConfig,

    /// Message queue dependency.
    pub rabbitmq: RabbitMqConfig,

    /// Task broker URL (e.g. "redis://redis:6379/0"); a readiness check is
    /// derived from it only when it carries both a host and a port.
    pub celery_broker_url: Option<String>,

    /// Browser-automation install verification.
    pub browser: BrowserConfig,

    /// Administrative account creation.
    pub admin: AdminConfig,

    /// Waiting behavior applied to every readiness check.
    pub wait: WaitConfig,
}

/// Database dependency configuration.
#[derive(Debug, Clone, Serialize)]
pub struct DatabaseConfig {
    /// Database engine name; a readiness check runs only when this is
    /// "postgres".
    pub engine: Option<String>,

    /// Database host to probe.
    pub host: String,

    /// Database port to probe.
    pub port: u16,
}

impl DatabaseConfig {
    /// Whether the configured engine requires a readiness check.
    pub fn is_postgres(&self) -> bool {
        self.engine.as_deref() == Some("postgres")
    }
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            engine: None,
            host: "django-postgres".to_string(),
            port: 5432,
        }
    }
}

/// Message queue dependency configuration.
#[derive(Debug, Clone, Serialize)]
pub struct RabbitMqConfig {
    /// Queue host; a readiness check runs only when this is set.
    pub host: Option<String>,

    /// Queue port to probe.
    pub port: u16,
}

impl Default for RabbitMqConfig {
    fn default() -> Self {
        Self {
            host: None,
            port: 5672,
        }
    }
}

/// Browser-automation install configuration.
#[derive(Debug, Clone, Serialize, Default)]
pub struct BrowserConfig {
    /// Directory expected to contain the browser executable; verification
    /// runs only when this is set.
    pub browsers_path: Option<PathBuf>,
}

/// Administrative account configuration.
#[derive(Debug, Clone, Serialize, Default)]
pub struct AdminConfig {
    /// Debug mode. Superuser creation is attempted only in debug mode.
    pub debug: bool,

    /// Username for the administrative account.
    pub superuser_username: Option<String>,

    /// Email for the administrative account.
    pub superuser_email: Option<String>,
}

impl AdminConfig {
    /// Whether a superuser-creation step should run: debug mode with both
    /// identity fields present.
    pub fn wants_superuser(&self) -> bool {
        self.debug && self.superuser_username.is_some() && self.superuser_email.is_some()
    }
}

/// Waiting behavior for readiness checks.
#[derive(Debug, Clone, Serialize)]
pub struct WaitConfig {
    /// Maximum wall-clock budget per dependency, in seconds. Zero means a
    /// single attempt.
    pub timeout_secs: u64,

    /// Time between probe attempts, in seconds. Must be non-zero.
    pub poll_interval_secs: u64,
}

impl Default for WaitConfig {
    fn default() -> Self {
        Self {
            timeout_secs: 60,
            poll_interval_secs: 1,
        }
    }
}
