use serde::{Deserialize, Serialize};

/// Classification of a single connect attempt against one (host, port) pair.
///
/// The taxonomy is deliberately flat: refused, timed out, unreachable, and
/// name-resolution failures are all `Unreachable`.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum PortOutcome {
    Open,
    Unreachable,
}

/// Per-host statistics derived from one probe loop.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct HostScanStats {
    pub total_ports: u64,
    pub open_ports: u64,
    pub closed_ports: u64,
    /// Wall-clock seconds spent in the probe loop.
    pub scan_duration: f64,
    pub ports_per_second: f64,
}

impl HostScanStats {
    /// Derive the full statistics record from attempt counts and elapsed time.
    ///
    /// `closed_ports` is always `total_ports - open_ports`; `ports_per_second`
    /// is zero when no measurable time elapsed (empty port list, or every
    /// attempt failing instantly), never a division error.
    pub fn derive(total_ports: u64, open_ports: u64, scan_duration: f64) -> Self {
        debug_assert!(open_ports <= total_ports);
        let ports_per_second = if scan_duration > 0.0 {
            total_ports as f64 / scan_duration
        } else {
            0.0
        };
        Self {
            total_ports,
            open_ports,
            closed_ports: total_ports - open_ports,
            scan_duration,
            ports_per_second,
        }
    }
}

/// Everything one host scan produced. Immutable once the probe loop finishes.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct HostScanResult {
    pub host: String,
    /// Ports found open, as a subsequence of the configured ports in probe order.
    pub open_ports: Vec<u16>,
    pub stats: HostScanStats,
}

/// Run-level totals folded from every host's statistics.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct RunSummary {
    pub total_ports_scanned: u64,
    pub total_open_ports: u64,
    /// Wall-clock seconds for the whole run, including host iteration overhead.
    pub total_duration: f64,
    pub average_rate: f64,
}

impl RunSummary {
    pub fn from_results(results: &[HostScanResult], total_duration: f64) -> Self {
        let total_ports_scanned: u64 = results.iter().map(|r| r.stats.total_ports).sum();
        let total_open_ports: u64 = results.iter().map(|r| r.stats.open_ports).sum();
        let average_rate = if total_duration > 0.0 {
            total_ports_scanned as f64 / total_duration
        } else {
            0.0
        };
        Self {
            total_ports_scanned,
            total_open_ports,
            total_duration,
            average_rate,
        }
    }
}

/// Serializable whole-run report: per-host results plus the summary.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct RunReport {
    pub hosts: Vec<HostScanResult>,
    pub summary: RunSummary,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stats_closed_is_total_minus_open() {
        let s = HostScanStats::derive(5, 2, 1.0);
        assert_eq!(s.closed_ports, 3);
        assert_eq!(s.ports_per_second, 5.0);
    }

    #[test]
    fn stats_zero_duration_yields_zero_rate() {
        let s = HostScanStats::derive(0, 0, 0.0);
        assert_eq!(s.total_ports, 0);
        assert_eq!(s.closed_ports, 0);
        assert_eq!(s.ports_per_second, 0.0);
    }

    #[test]
    fn summary_folds_host_totals() {
        let results = vec![
            HostScanResult {
                host: "a".into(),
                open_ports: vec![80],
                stats: HostScanStats::derive(1, 1, 0.5),
            },
            HostScanResult {
                host: "b".into(),
                open_ports: vec![],
                stats: HostScanStats::derive(1, 0, 0.5),
            },
        ];
        let summary = RunSummary::from_results(&results, 2.0);
        assert_eq!(summary.total_ports_scanned, 2);
        assert_eq!(summary.total_open_ports, 1);
        assert_eq!(summary.average_rate, 1.0);
    }

    #[test]
    fn summary_of_empty_run_is_all_zero() {
        let summary = RunSummary::from_results(&[], 0.0);
        assert_eq!(summary, RunSummary::default());
    }
}
