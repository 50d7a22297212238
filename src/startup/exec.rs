//! Final handoff to the wrapped command.
//!
//! # Responsibilities
//! - Replace this process with the wrapped command so signals and the exit
//!   code belong to it, not to us
//!
//! # Design Decisions
//! - On Unix the handoff is a true `exec`; the wrapped command inherits our
//!   PID, environment and stdio with no intermediary left behind
//! - Elsewhere the closest equivalent is spawn-and-wait with the child's
//!   exit code propagated

use std::io;

use thiserror::Error;

/// Errors from handing control to the wrapped command.
#[derive(Debug, Error)]
pub enum ExecError {
    /// The wrapped command could not be executed.
    #[error("failed to exec '{program}': {source}")]
    Exec {
        /// Program that failed to start.
        program: String,
        /// Underlying OS error.
        #[source]
        source: io::Error,
    },

    /// No wrapped command was supplied.
    #[error("no command to exec")]
    EmptyCommand,
}

/// Replace the current process with `program`.
///
/// Only returns on failure; on success the wrapped command takes over the
/// process image.
#[cfg(unix)]
pub fn exec_command(program: &str, args: &[String]) -> ExecError {
    use std::os::unix::process::CommandExt;

    let source = std::process::Command::new(program).args(args).exec();
    ExecError::Exec {
        program: program.to_string(),
        source,
    }
}

/// Run `program` to completion and exit with its status.
///
/// Only returns on failure; on success this process exits with the child's
/// exit code.
#[cfg(not(unix))]
pub fn exec_command(program: &str, args: &[String]) -> ExecError {
    match std::process::Command::new(program).args(args).status() {
        Ok(status) => std::process::exit(status.code().unwrap_or(1)),
        Err(source) => ExecError::Exec {
            program: program.to_string(),
            source,
        },
    }
}
