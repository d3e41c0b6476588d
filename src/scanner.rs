use crate::types::{HostScanResult, HostScanStats, PortOutcome};
use std::sync::Arc;
use std::time::Duration;
use tokio::net::TcpStream;
use tokio::sync::Semaphore;
use tokio::task::JoinSet;
use tokio::time::{self, Instant};

/// Default bound on a single connect attempt.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(1);

/// Probe one (host, port) pair with a TCP connect bounded by `timeout`.
///
/// The host is resolved per attempt, so a name-resolution failure classifies
/// exactly like a refused or timed-out connect. A successful connection is
/// torn down immediately: the stream is dropped before returning, so the
/// socket is released exactly once on every path.
pub async fn probe(host: &str, port: u16, timeout: Duration) -> PortOutcome {
    let addr = connect_addr(host, port);
    match time::timeout(timeout, TcpStream::connect(&addr)).await {
        Ok(Ok(stream)) => {
            drop(stream);
            PortOutcome::Open
        }
        // Refused, unreachable, resolution failure, or timed out.
        _ => PortOutcome::Unreachable,
    }
}

/// Build the connect address for one attempt. Bare IPv6 literals need
/// brackets to parse as a socket address.
fn connect_addr(host: &str, port: u16) -> String {
    if host.parse::<std::net::Ipv6Addr>().is_ok() {
        format!("[{host}]:{port}")
    } else {
        format!("{host}:{port}")
    }
}

/// Scan one host across the configured ports and derive its statistics.
///
/// Every configured port gets exactly one attempt, in order, duplicates
/// included; a failed attempt never aborts the loop and nothing is retried.
/// `concurrency == 1` probes strictly sequentially; higher values run a
/// Semaphore-bounded pool of attempts, with outcomes restored to the original
/// port order before the open list is built.
pub async fn scan_host(
    host: &str,
    ports: &[u16],
    timeout: Duration,
    concurrency: usize,
) -> HostScanResult {
    let start = Instant::now();
    let outcomes = if concurrency <= 1 {
        let mut outcomes = Vec::with_capacity(ports.len());
        for &port in ports {
            outcomes.push(probe(host, port, timeout).await);
        }
        outcomes
    } else {
        probe_pooled(host, ports, timeout, concurrency).await
    };
    let scan_duration = start.elapsed().as_secs_f64();

    let open_ports: Vec<u16> = ports
        .iter()
        .zip(&outcomes)
        .filter(|(_, outcome)| matches!(outcome, PortOutcome::Open))
        .map(|(&port, _)| port)
        .collect();
    let stats = HostScanStats::derive(ports.len() as u64, open_ports.len() as u64, scan_duration);

    HostScanResult {
        host: host.to_string(),
        open_ports,
        stats,
    }
}

/// Bounded-concurrency variant of the probe loop for a single host.
///
/// Limits concurrent socket attempts with a `Semaphore` and joins every task
/// before returning, so the result always covers all configured ports.
async fn probe_pooled(
    host: &str,
    ports: &[u16],
    timeout: Duration,
    concurrency: usize,
) -> Vec<PortOutcome> {
    let sem = Arc::new(Semaphore::new(concurrency.clamp(1, 5_000)));
    let mut set = JoinSet::new();

    for (idx, &port) in ports.iter().enumerate() {
        let permit = sem
            .clone()
            .acquire_owned()
            .await
            .expect("semaphore in scope");
        let host = host.to_string();
        set.spawn(async move {
            let _permit = permit; // keep permit until task completes
            (idx, probe(&host, port, timeout).await)
        });
    }

    // Index outcomes back into configured port order. A task that fails to
    // join keeps the pre-filled value, so its attempt still counts as
    // unreachable rather than vanishing from the totals.
    let mut outcomes = vec![PortOutcome::Unreachable; ports.len()];
    while let Some(res) = set.join_next().await {
        if let Ok((idx, outcome)) = res {
            outcomes[idx] = outcome;
        }
    }
    outcomes
}
