//! Readiness check definition.

use std::fmt;

/// Default wall-clock budget per dependency, in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 60;

/// Default time between probe attempts, in seconds.
pub const DEFAULT_POLL_INTERVAL_SECS: u64 = 1;

/// A single TCP dependency to wait for before startup proceeds.
///
/// Checks are constructed once per dependency, carry no state across
/// attempts, and are discarded after the wait resolves.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReadinessCheck {
    /// Human-readable name used in log output.
    pub label: String,

    /// Network address to probe; resolved at connect time.
    pub host: String,

    /// TCP port to probe.
    pub port: u16,

    /// Maximum wall-clock budget, in seconds. Zero means a single attempt.
    pub timeout_secs: u64,

    /// Time between probe attempts, in seconds.
    pub poll_interval_secs: u64,
}

impl ReadinessCheck {
    /// Create a check with the default timeout and poll interval.
    pub fn new(label: impl Into<String>, host: impl Into<String>, port: u16) -> Self {
        Self {
            label: label.into(),
            host: host.into(),
            port,
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            poll_interval_secs: DEFAULT_POLL_INTERVAL_SECS,
        }
    }

    /// Override the waiting behavior.
    pub fn with_wait(mut self, timeout_secs: u64, poll_interval_secs: u64) -> Self {
        self.timeout_secs = timeout_secs;
        self.poll_interval_secs = poll_interval_secs;
        self
    }

    /// Total probe attempts the budget allows: one per poll cycle, plus the
    /// immediate first attempt. A zero timeout yields exactly one attempt.
    pub fn max_attempts(&self) -> u64 {
        (self.timeout_secs / self.poll_interval_secs.max(1)).saturating_add(1)
    }
}

impl fmt::Display for ReadinessCheck {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({}:{})", self.label, self.host, self.port)
    }
}
