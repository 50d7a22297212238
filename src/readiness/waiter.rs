//! TCP readiness waiting.
//!
//! # Responsibilities
//! - Probe a dependency until it accepts a TCP connection
//! - Bound the wait by the check's attempt budget
//! - Report failure with enough context to identify the dependency
//!
//! # Design Decisions
//! - The budget counts attempts, not elapsed time: one attempt per poll
//!   cycle, so total wait is approximately `attempts × poll_interval`
//! - Each connect is bounded by one poll interval; a connect that consumed
//!   its interval skips the sleep and moves straight to the next attempt
//! - Every connect error (refusal, DNS failure, unreachable network) counts
//!   as one failed attempt and is retried, never treated as fatal

use std::time::{Duration, Instant};

use thiserror::Error;
use tokio::net::TcpStream;
use tokio::task::JoinSet;
use tokio::time;

use super::check::ReadinessCheck;

/// Errors raised while waiting for dependencies.
#[derive(Debug, Error)]
pub enum ReadinessError {
    /// The dependency never accepted a connection within the attempt budget.
    #[error("service '{label}' at {host}:{port} did not become ready after {attempts} attempts")]
    ServiceUnavailable {
        label: String,
        host: String,
        port: u16,
        attempts: u64,
    },
}

/// Result type for readiness operations.
pub type ReadinessResult<T> = Result<T, ReadinessError>;

/// Outcome of a successful wait.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WaitReport {
    /// Number of probe attempts made, including the successful one.
    pub attempts: u64,

    /// Wall-clock time spent waiting.
    pub elapsed: Duration,
}

/// Wait until the check's endpoint accepts a TCP connection.
///
/// Returns a [`WaitReport`] once a connection succeeds, or
/// [`ReadinessError::ServiceUnavailable`] after the attempt budget is spent.
pub async fn wait_until_ready(check: &ReadinessCheck) -> ReadinessResult<WaitReport> {
    let started = Instant::now();
    let interval = Duration::from_secs(check.poll_interval_secs);
    let max_attempts = check.max_attempts();

    tracing::info!(
        check = %check,
        timeout_secs = check.timeout_secs,
        poll_interval_secs = check.poll_interval_secs,
        "Waiting for dependency"
    );

    let mut attempt: u64 = 0;
    loop {
        attempt += 1;

        match time::timeout(interval, TcpStream::connect((check.host.as_str(), check.port))).await {
            Ok(Ok(_stream)) => {
                let report = WaitReport {
                    attempts: attempt,
                    elapsed: started.elapsed(),
                };
                tracing::info!(
                    check = %check,
                    attempts = report.attempts,
                    elapsed_ms = report.elapsed.as_millis() as u64,
                    "Dependency ready"
                );
                return Ok(report);
            }
            Ok(Err(error)) => {
                tracing::debug!(check = %check, attempt, error = %error, "Dependency not ready");
                if attempt >= max_attempts {
                    break;
                }
                time::sleep(interval).await;
            }
            Err(_elapsed) => {
                // The connect consumed the whole poll cycle already.
                tracing::debug!(check = %check, attempt, "Connect attempt timed out");
                if attempt >= max_attempts {
                    break;
                }
            }
        }
    }

    tracing::error!(check = %check, attempts = max_attempts, "Dependency did not become ready");
    Err(ReadinessError::ServiceUnavailable {
        label: check.label.clone(),
        host: check.host.clone(),
        port: check.port,
        attempts: max_attempts,
    })
}

/// Wait for every check to resolve.
///
/// Sequential by default, preserving the order checks were derived in. With
/// `parallel` set, one task per check runs concurrently and startup may
/// proceed only once all of them succeed; the first failure wins.
pub async fn wait_for_all(checks: &[ReadinessCheck], parallel: bool) -> ReadinessResult<()> {
    if checks.is_empty() {
        tracing::info!("No dependencies to wait for");
        return Ok(());
    }

    if !parallel {
        for check in checks {
            wait_until_ready(check).await?;
        }
        return Ok(());
    }

    let mut tasks = JoinSet::new();
    for check in checks {
        let check = check.clone();
        tasks.spawn(async move { wait_until_ready(&check).await });
    }

    while let Some(joined) = tasks.join_next().await {
        let outcome = match joined {
            Ok(outcome) => outcome,
            Err(join_error) => {
                tracing::error!(error = %join_error, "Readiness task aborted");
                continue;
            }
        };
        if let Err(error) = outcome {
            tasks.abort_all();
            return Err(error);
        }
    }

    Ok(())
}
