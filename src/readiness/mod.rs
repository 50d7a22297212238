//! Readiness checking subsystem.
//!
//! # Data Flow
//! ```text
//! Derived checks (one per configured dependency):
//!     ReadinessCheck { label, host, port, timeout, poll interval }
//!     → waiter.rs probes host:port once per poll cycle
//!     → success: startup proceeds
//!     → budget exhausted: ServiceUnavailable, startup aborts
//! ```
//!
//! # Design Decisions
//! - Checks are independent; sequential execution is the default because the
//!   derivation order of the checks is part of the observable behavior
//! - A probe failure is never fatal on its own, only budget exhaustion is

pub mod check;
pub mod waiter;

pub use check::ReadinessCheck;
pub use check::{DEFAULT_POLL_INTERVAL_SECS, DEFAULT_TIMEOUT_SECS};
pub use waiter::{wait_for_all, wait_until_ready, ReadinessError, ReadinessResult, WaitReport};
