//! Startup roles.

use std::fmt;

use clap::ValueEnum;

/// The role this container plays, passed explicitly on the command line.
///
/// Only the web role is the primary service; management steps (migrations,
/// static collection, superuser creation) run for it alone. The other roles
/// share the same dependency waiting but start straight into their command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum StartupMode {
    /// Web server, the primary service.
    Web,
    /// Task queue worker.
    Worker,
    /// Periodic task scheduler.
    Beat,
    /// Message queue consumer.
    Consumer,
}

impl StartupMode {
    /// Whether this role is responsible for schema migrations and static
    /// collection.
    pub fn is_primary(&self) -> bool {
        matches!(self, StartupMode::Web)
    }

    /// Stable lowercase name, matching the command-line value.
    pub fn as_str(&self) -> &'static str {
        match self {
            StartupMode::Web => "web",
            StartupMode::Worker => "worker",
            StartupMode::Beat => "beat",
            StartupMode::Consumer => "consumer",
        }
    }
}

impl fmt::Display for StartupMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
