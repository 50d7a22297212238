//! Container Pre-flight Runner Library

pub mod broker;
pub mod config;
pub mod observability;
pub mod readiness;
pub mod startup;

pub use config::schema::EntrypointConfig;
pub use readiness::{ReadinessCheck, ReadinessError, WaitReport};
pub use startup::{StartupMode, StartupPlan};
