use crate::report;
use crate::scanner::{self, DEFAULT_TIMEOUT};
use crate::types::{RunReport, RunSummary};
use std::time::Duration;
use tokio::time::Instant;

/// Knobs for one orchestrated run.
#[derive(Debug, Clone)]
pub struct ScanOptions {
    /// Bound on a single connect attempt.
    pub timeout: Duration,
    /// Max concurrent attempts per host; 1 means strictly sequential.
    pub concurrency: usize,
    /// Emit per-host statistics detail in the text report.
    pub verbose: bool,
    /// Suppress the text report entirely (used by the JSON output mode).
    pub quiet: bool,
}

impl Default for ScanOptions {
    fn default() -> Self {
        Self {
            timeout: DEFAULT_TIMEOUT,
            concurrency: 1,
            verbose: false,
            quiet: false,
        }
    }
}

/// Scan every configured host in order and fold the results into a run-level
/// summary, emitting the text report as a side effect unless `quiet`.
///
/// Hosts are processed strictly sequentially; a slow or unreachable host
/// delays everything queued after it. A host that fails every probe still
/// yields a complete result and never aborts the run, so the report always
/// covers every configured host and the process exits successfully.
pub async fn run(hosts: &[String], ports: &[u16], opts: &ScanOptions) -> RunReport {
    let start = Instant::now();
    if !opts.quiet {
        report::print_run_header(hosts.len(), ports.len());
    }

    let mut results = Vec::with_capacity(hosts.len());
    for host in hosts {
        if !opts.quiet {
            report::print_host_header(host);
        }
        let result = scanner::scan_host(host, ports, opts.timeout, opts.concurrency).await;
        if !opts.quiet {
            report::print_host_result(&result, opts.verbose);
        }
        results.push(result);
    }

    let total_duration = start.elapsed().as_secs_f64();
    let summary = RunSummary::from_results(&results, total_duration);
    if !opts.quiet {
        report::print_summary(&summary);
    }

    RunReport {
        hosts: results,
        summary,
    }
}
