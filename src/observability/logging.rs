//! Structured logging.
//!
//! # Responsibilities
//! - Initialize the tracing subscriber for a binary
//! - Honor `RUST_LOG` overrides with a per-binary default filter
//!
//! # Design Decisions
//! - Uses tracing crate for structured logging
//! - Plain fmt output; log lines are the entrypoint's only user interface
//! - Log level configurable via environment without rebuilding the image

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize the global tracing subscriber.
///
/// `default_filter` applies when `RUST_LOG` is unset.
pub fn init(default_filter: &str) {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();
}
