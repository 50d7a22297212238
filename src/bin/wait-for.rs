use clap::Parser;

use preflight::readiness::{wait_until_ready, ReadinessCheck};

#[derive(Parser)]
#[command(name = "wait-for")]
#[command(about = "Wait until a TCP endpoint accepts connections", long_about = None)]
struct Cli {
    /// Host to probe.
    #[arg(long)]
    host: String,

    /// TCP port to probe.
    #[arg(long, value_parser = clap::value_parser!(u16).range(1..))]
    port: u16,

    /// Name used in log output; defaults to the host.
    #[arg(long)]
    label: Option<String>,

    /// Maximum seconds to wait.
    #[arg(long, default_value_t = 60)]
    timeout: u64,

    /// Seconds between attempts.
    #[arg(long, default_value_t = 1, value_parser = clap::value_parser!(u64).range(1..))]
    interval: u64,
}

#[tokio::main]
async fn main() {
    preflight::observability::logging::init("wait_for=info,preflight=info");

    let cli = Cli::parse();

    let label = cli.label.unwrap_or_else(|| cli.host.clone());
    let check = ReadinessCheck::new(label, cli.host, cli.port).with_wait(cli.timeout, cli.interval);

    if let Err(error) = wait_until_ready(&check).await {
        eprintln!("Error: {error}");
        std::process::exit(1);
    }
}
