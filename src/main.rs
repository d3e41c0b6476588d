use std::time::Duration;

use port_probe::orchestrator::{self, ScanOptions};
use port_probe::{ports, targets};

use anyhow::Result;
use clap::Parser;

/// port-probe — TCP connectivity probe with per-host timing and throughput statistics.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "port-probe",
    version,
    about = "TCP connectivity probe with per-host timing and throughput statistics.",
    long_about = None
)]
struct Cli {
    /// Hosts to scan: names, addresses, or IPv4 CIDR blocks (default: localhost).
    #[arg(short = 'H', long, num_args = 1..)]
    hosts: Vec<String>,

    /// Ports to scan: single ports or inclusive ranges like 8000-8010 (default: 80 443).
    #[arg(short = 'p', long, num_args = 1..)]
    ports: Vec<String>,

    /// Show detailed statistics for each host.
    #[arg(short, long, default_value_t = false)]
    verbose: bool,

    /// Socket connect timeout in milliseconds.
    #[arg(long = "timeout-ms", default_value_t = 1000)]
    timeout_ms: u64,

    /// Max concurrent connect attempts per host (1 = sequential).
    #[arg(long, default_value_t = 1)]
    concurrency: usize,

    /// Emit the full run report as pretty JSON instead of the text report.
    #[arg(long, default_value_t = false)]
    json: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let hosts = if cli.hosts.is_empty() {
        targets::default_hosts()
    } else {
        targets::parse_host_args(&cli.hosts)?
    };
    let ports = if cli.ports.is_empty() {
        ports::default_ports()
    } else {
        ports::parse_port_args(&cli.ports)?
    };

    let opts = ScanOptions {
        timeout: Duration::from_millis(cli.timeout_ms),
        concurrency: cli.concurrency,
        verbose: cli.verbose,
        quiet: cli.json,
    };

    let run_report = orchestrator::run(&hosts, &ports, &opts).await;

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&run_report)?);
    }

    // A run that found nothing open, or could not reach a host at all, is
    // still a completed run.
    Ok(())
}
