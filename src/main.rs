//! Container Pre-flight Runner (v1)
//!
//! A container entrypoint built with Tokio: wait for TCP dependencies,
//! prepare the packaged application, then exec the main command.
//!
//! # Architecture Overview
//!
//! ```text
//!                            ┌────────────────────────────────────────────────────────────┐
//!                            │                         PREFLIGHT                          │
//!                            │                                                            │
//!      Environment           │  ┌──────────────┐    ┌──────────────┐    ┌──────────────┐  │
//!      ──────────────────────┼─▶│    config    │───▶│ startup plan │───▶│  readiness   │◀─┼──── postgres,
//!                            │  │   from_env   │    │  derivation  │    │    waiter    │  │     rabbitmq,
//!                            │  └──────────────┘    └──────────────┘    └───────┬──────┘  │     celery broker
//!                            │                                                  │         │
//!                            │                                                  ▼         │
//!                            │  ┌──────────────┐    ┌──────────────┐    ┌──────────────┐  │
//!      Main command          │  │     exec     │◀───│  management  │◀───│   browser    │  │
//!      ◀─────────────────────┼──│   handoff    │    │    steps     │    │    check     │  │
//!                            │  └──────────────┘    └──────────────┘    └──────────────┘  │
//!                            └────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Startup Contract
//!
//! - The environment is read exactly once, into `EntrypointConfig`
//! - Only a readiness timeout is fatal; browser verification and management
//!   steps are best-effort
//! - After the exec handoff the wrapped command owns the process, so its
//!   exit code is the container's exit code

// Core subsystems
pub mod broker;
pub mod config;
pub mod readiness;
pub mod startup;

// Cross-cutting concerns
pub mod observability;

use clap::Parser;

use crate::config::{validate_config, EntrypointConfig};
use crate::startup::{exec_command, ExecError, StartupMode, StartupPlan};

#[derive(Parser)]
#[command(name = "preflight")]
#[command(
    about = "Container entrypoint: wait for dependencies, prepare the app, exec the main command",
    long_about = None
)]
struct Cli {
    /// Role this container plays.
    #[arg(long, value_enum, default_value_t = StartupMode::Web)]
    mode: StartupMode,

    /// Wait for all dependencies concurrently instead of in order.
    #[arg(long)]
    parallel: bool,

    /// Print the resolved configuration as JSON and exit.
    #[arg(long)]
    show_config: bool,

    /// Command to exec once pre-flight completes.
    #[arg(
        trailing_var_arg = true,
        allow_hyphen_values = true,
        required_unless_present = "show_config"
    )]
    command: Vec<String>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    // Pure dump: the subscriber is not installed yet, so population
    // warnings cannot reach stdout ahead of the JSON.
    if cli.show_config {
        let config = EntrypointConfig::from_env();
        println!("{}", serde_json::to_string_pretty(&config)?);
        return Ok(());
    }

    // Initialize tracing subscriber
    crate::observability::logging::init("preflight=info");

    tracing::info!("preflight v0.1.0 starting");

    let config = EntrypointConfig::from_env();

    if let Err(errors) = validate_config(&config) {
        for error in &errors {
            tracing::error!(error = %error, "Invalid configuration");
        }
        return Err("configuration validation failed".into());
    }

    tracing::info!(
        mode = %cli.mode,
        database_host = %config.database.host,
        database_port = config.database.port,
        wait_timeout_secs = config.wait.timeout_secs,
        "Configuration loaded"
    );

    let plan = StartupPlan::build(&config, cli.mode);

    tracing::info!(
        checks = plan.checks.len(),
        steps = plan.steps.len(),
        browser_check = plan.browser.is_some(),
        parallel = cli.parallel,
        "Startup plan derived"
    );

    plan.run(cli.parallel).await?;

    let Some((program, args)) = cli.command.split_first() else {
        return Err(ExecError::EmptyCommand.into());
    };

    tracing::info!(program = %program, "Pre-flight complete, handing over");

    Err(exec_command(program, args).into())
}
