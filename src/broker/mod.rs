//! Broker URL handling.
//!
//! The task broker is configured as a URL (`redis://…`, `amqp://…`,
//! `memory://`). Only its reachable host and port matter here; the scheme
//! and path are the application's business.

pub mod endpoint;

pub use endpoint::{endpoint_from_url, BrokerEndpoint};
