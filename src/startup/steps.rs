//! Best-effort management steps.
//!
//! # Responsibilities
//! - Run opaque external commands (migrations, static collection, superuser
//!   creation) with inherited stdio and environment
//! - Log failures and keep going: a broken step never blocks startup
//!
//! # Design Decisions
//! - The commands' semantics stay out of scope; this module only spawns them
//! - Secrets such as the superuser password are consumed by the child from
//!   its inherited environment, never read here

use std::fmt;

use tokio::process::Command;

/// One external management command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StartupStep {
    /// Short name used in log output.
    pub label: String,

    /// Program to invoke.
    pub program: String,

    /// Arguments passed to the program.
    pub args: Vec<String>,
}

impl StartupStep {
    /// Create a step.
    pub fn new(label: impl Into<String>, program: impl Into<String>, args: &[&str]) -> Self {
        Self {
            label: label.into(),
            program: program.into(),
            args: args.iter().map(|a| a.to_string()).collect(),
        }
    }
}

impl fmt::Display for StartupStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({}", self.label, self.program)?;
        for arg in &self.args {
            write!(f, " {arg}")?;
        }
        write!(f, ")")
    }
}

/// Run a step, swallowing failure.
///
/// Returns whether the step ran and exited successfully. A spawn error or a
/// non-zero exit is logged as a warning and startup continues.
pub async fn run_best_effort(step: &StartupStep) -> bool {
    tracing::info!(step = %step, "Running startup step");

    match Command::new(&step.program).args(&step.args).status().await {
        Ok(status) if status.success() => {
            tracing::info!(step = %step.label, "Startup step completed");
            true
        }
        Ok(status) => {
            tracing::warn!(
                step = %step.label,
                code = status.code(),
                "Startup step failed, continuing"
            );
            false
        }
        Err(error) => {
            tracing::warn!(
                step = %step.label,
                error = %error,
                "Startup step could not run, continuing"
            );
            false
        }
    }
}

/// Run every step in order, best-effort.
pub async fn run_steps(steps: &[StartupStep]) {
    for step in steps {
        run_best_effort(step).await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[cfg(unix)]
    #[tokio::test]
    async fn test_successful_step_reports_true() {
        let step = StartupStep::new("noop", "true", &[]);
        assert!(run_best_effort(&step).await);
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_failing_step_reports_false() {
        let step = StartupStep::new("broken", "false", &[]);
        assert!(!run_best_effort(&step).await);
    }

    #[tokio::test]
    async fn test_missing_program_reports_false() {
        let step = StartupStep::new("ghost", "definitely-not-a-real-program", &[]);
        assert!(!run_best_effort(&step).await);
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_run_steps_survives_failures() {
        let steps = vec![
            StartupStep::new("broken", "false", &[]),
            StartupStep::new("noop", "true", &[]),
        ];
        // Must not panic or stop early.
        run_steps(&steps).await;
    }

    #[test]
    fn test_display() {
        let step = StartupStep::new("migrate", "python", &["manage.py", "migrate", "--noinput"]);
        assert_eq!(
            step.to_string(),
            "migrate (python manage.py migrate --noinput)"
        );
    }
}
