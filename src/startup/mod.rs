//! Startup orchestration.
//!
//! # Responsibilities
//! - Name the container's role as a typed startup mode
//! - Derive and execute the startup plan: readiness checks, browser
//!   verification, best-effort management steps
//! - Hand the process over to the wrapped command
//!
//! # Data Flow
//! ```text
//! EntrypointConfig + StartupMode
//!         |
//!         v
//!     StartupPlan  ->  readiness waits  ->  browser  ->  steps
//!         |
//!         v
//!    exec_command (process replaced)
//! ```

pub mod browser;
pub mod exec;
pub mod mode;
pub mod plan;
pub mod steps;

pub use browser::{ensure_browser, find_browser_executable, BrowserCheck, CHROME_EXECUTABLES};
pub use exec::{exec_command, ExecError};
pub use mode::StartupMode;
pub use plan::StartupPlan;
pub use steps::{run_best_effort, run_steps, StartupStep};
