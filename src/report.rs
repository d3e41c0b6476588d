use crate::types::{HostScanResult, RunSummary};
use ::time::{format_description::well_known, OffsetDateTime};

/// Run header: start timestamp plus the scan dimensions.
pub fn print_run_header(host_count: usize, port_count: usize) {
    println!("\n[*] Scan started at {}", now_rfc3339());
    println!("[*] Scanning {host_count} host(s) across {port_count} port(s)");
}

/// Emitted before a host's probe loop starts.
pub fn print_host_header(host: &str) {
    println!("\n[+] Scanning host: {host}");
}

/// Per-host section: open ports found (or a notice that none were), and the
/// full statistics block when `verbose` is set.
pub fn print_host_result(result: &HostScanResult, verbose: bool) {
    if result.open_ports.is_empty() {
        println!("    [-] No open ports found on {}", result.host);
    } else {
        println!(
            "    [+] Found {} open port(s) on {}:",
            result.open_ports.len(),
            result.host
        );
        for port in &result.open_ports {
            println!("        - Port {port} is open");
        }
    }

    if verbose {
        let stats = &result.stats;
        println!("\n    [*] Host scan statistics:");
        println!("        - Scanned ports: {}", stats.total_ports);
        println!("        - Open ports: {}", stats.open_ports);
        println!("        - Closed ports: {}", stats.closed_ports);
        println!("        - Scan duration: {:.2} seconds", stats.scan_duration);
        println!(
            "        - Scan speed: {:.2} ports/second",
            stats.ports_per_second
        );
    }
}

/// Final summary section with run-level totals.
pub fn print_summary(summary: &RunSummary) {
    println!("\n[*] Scan completed in {:.2} seconds", summary.total_duration);
    println!("[*] Total ports scanned: {}", summary.total_ports_scanned);
    println!("[*] Total open ports found: {}", summary.total_open_ports);
    println!(
        "[*] Average scan speed: {:.2} ports/second",
        summary.average_rate
    );
}

fn now_rfc3339() -> String {
    let now = OffsetDateTime::now_utc();
    now.format(&well_known::Rfc3339)
        .unwrap_or_else(|_| String::from("1970-01-01T00:00:00Z"))
}
