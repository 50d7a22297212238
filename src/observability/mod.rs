//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! All subsystems produce:
//!     → logging.rs (structured log events)
//!
//! Consumers:
//!     → Container log collection (stdout)
//! ```
//!
//! # Design Decisions
//! - Log lines are the entrypoint's only observable surface; the process
//!   replaces itself, so nothing here outlives startup
//! - Log level configurable via RUST_LOG with a per-binary default

pub mod logging;
