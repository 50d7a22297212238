//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! process environment
//!     → env.rs (read once, coerce types, apply defaults)
//!     → validation.rs (semantic checks)
//!     → EntrypointConfig (validated, immutable)
//!     → passed by reference to plan derivation
//! ```
//!
//! # Design Decisions
//! - The environment is read exactly once, at startup; no component reads
//!   variables ad hoc afterward
//! - All fields have defaults so a bare environment still resolves
//! - Validation separates range/emptiness checks from type coercion (which
//!   happens during population, with warnings on fallback)

pub mod env;
pub mod schema;
pub mod validation;

pub use schema::AdminConfig;
pub use schema::BrowserConfig;
pub use schema::DatabaseConfig;
pub use schema::EntrypointConfig;
pub use schema::RabbitMqConfig;
pub use schema::WaitConfig;
pub use validation::{validate_config, ValidationError};
