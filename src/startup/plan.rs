//! Startup plan derivation and execution.
//!
//! # Responsibilities
//! - Turn the resolved configuration plus the startup mode into the complete
//!   list of work to do before the main command runs
//! - Execute that work in the fixed order: readiness checks, browser
//!   verification, management steps
//!
//! # Design Decisions
//! - Everything is derived in one place from `(EntrypointConfig, StartupMode)`
//!   so the rest of the program never consults the environment
//! - Management steps belong to the primary service only; secondary roles
//!   (worker, beat, consumer) share the image but must not race the schema
//!
//! # Data Flow
//! ```text
//! EntrypointConfig + StartupMode
//!         |
//!         v
//!   StartupPlan::build
//!         |
//!         v
//!   checks -> browser -> steps      (StartupPlan::run)
//! ```

use crate::broker::endpoint_from_url;
use crate::config::EntrypointConfig;
use crate::readiness::{wait_for_all, ReadinessCheck, ReadinessResult};
use crate::startup::browser::{ensure_browser, BrowserCheck};
use crate::startup::mode::StartupMode;
use crate::startup::steps::{run_steps, StartupStep};

/// Everything that has to happen before the wrapped command takes over.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StartupPlan {
    /// TCP dependencies to wait for, in order.
    pub checks: Vec<ReadinessCheck>,

    /// Browser verification, when a browsers path is configured.
    pub browser: Option<BrowserCheck>,

    /// Management steps, present only for the primary service.
    pub steps: Vec<StartupStep>,
}

/// A `python manage.py …` step.
fn manage_step(label: &str, args: &[&str]) -> StartupStep {
    let mut full_args = vec!["manage.py"];
    full_args.extend_from_slice(args);
    StartupStep::new(label, "python", &full_args)
}

impl StartupPlan {
    /// Derive the plan from configuration and mode.
    pub fn build(config: &EntrypointConfig, mode: StartupMode) -> Self {
        let mut checks = Vec::new();

        if config.database.is_postgres() {
            checks.push(ReadinessCheck::new(
                "postgres",
                config.database.host.clone(),
                config.database.port,
            ));
        }

        if let Some(host) = &config.rabbitmq.host {
            checks.push(ReadinessCheck::new(
                "rabbitmq",
                host.clone(),
                config.rabbitmq.port,
            ));
        }

        if let Some(endpoint) = config
            .celery_broker_url
            .as_deref()
            .and_then(endpoint_from_url)
        {
            checks.push(ReadinessCheck::new(
                "celery-broker",
                endpoint.host,
                endpoint.port,
            ));
        }

        let checks = checks
            .into_iter()
            .map(|check| check.with_wait(config.wait.timeout_secs, config.wait.poll_interval_secs))
            .collect();

        let browser = config.browser.browsers_path.as_ref().map(|path| BrowserCheck {
            browsers_path: path.clone(),
            installer: StartupStep::new("playwright-install", "playwright", &["install", "chromium"]),
        });

        let mut steps = Vec::new();
        if mode.is_primary() {
            steps.push(manage_step("migrate", &["migrate", "--noinput"]));
            steps.push(manage_step("collectstatic", &["collectstatic", "--noinput"]));
            if config.admin.wants_superuser() {
                steps.push(manage_step("createsuperuser", &["createsuperuser", "--noinput"]));
            }
        }

        Self {
            checks,
            browser,
            steps,
        }
    }

    /// Execute the plan.
    ///
    /// Readiness failures propagate; browser verification and management
    /// steps are best-effort and never abort startup.
    pub async fn run(&self, parallel: bool) -> ReadinessResult<()> {
        wait_for_all(&self.checks, parallel).await?;

        if let Some(browser) = &self.browser {
            ensure_browser(browser).await;
        }

        run_steps(&self.steps).await;

        Ok(())
    }
}
