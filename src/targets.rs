use anyhow::{Context, Result};
use ipnet::{IpNet, Ipv4Net};
use std::net::Ipv4Addr;

/// Parse CLI host values into the scan order.
///
/// Plain values (names or addresses) pass through untouched; a value
/// containing `/` is parsed as an IPv4 CIDR block and expanded to its host
/// addresses in ascending order. Order is preserved and nothing is
/// deduplicated, so a host listed twice is scanned twice.
pub fn parse_host_args(values: &[String]) -> Result<Vec<String>> {
    let mut out: Vec<String> = Vec::new();
    for value in values {
        let value = value.trim();
        if value.is_empty() {
            continue;
        }
        if value.contains('/') {
            let net: IpNet = value
                .parse()
                .with_context(|| format!("invalid CIDR block: {value}"))?;
            out.extend(expand_cidr_to_hosts(net));
        } else {
            out.push(value.to_string());
        }
    }
    Ok(out)
}

/// The default host list when none is given on the command line.
pub fn default_hosts() -> Vec<String> {
    vec!["localhost".to_string()]
}

/// Expand a CIDR into individual host address strings suitable for scanning.
///
/// For IPv4, excludes the network and broadcast addresses.
/// IPv6 blocks are not scanned and expand to an empty list.
pub fn expand_cidr_to_hosts(cidr: IpNet) -> Vec<String> {
    match cidr {
        IpNet::V4(n4) => expand_ipv4net_hosts(n4)
            .into_iter()
            .map(|ip| ip.to_string())
            .collect(),
        IpNet::V6(_) => Vec::new(),
    }
}

fn expand_ipv4net_hosts(net: Ipv4Net) -> Vec<Ipv4Addr> {
    // Use inclusive range of numeric IPs, then skip network and broadcast.
    let start = u32::from(net.network());
    let end = u32::from(net.broadcast());
    if end <= start + 1 {
        // Too small to have host addresses
        return Vec::new();
    }
    (start + 1..end).map(Ipv4Addr::from).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(values: &[&str]) -> Vec<String> {
        values.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn plain_hosts_pass_through_in_order() {
        let hosts = parse_host_args(&args(&["localhost", "10.0.0.1", "localhost"])).unwrap();
        assert_eq!(hosts, vec!["localhost", "10.0.0.1", "localhost"]);
    }

    #[test]
    fn cidr_expands_excluding_network_and_broadcast() {
        let hosts = parse_host_args(&args(&["192.168.1.0/30"])).unwrap();
        assert_eq!(hosts, vec!["192.168.1.1", "192.168.1.2"]);
    }

    #[test]
    fn invalid_cidr_errors() {
        assert!(parse_host_args(&args(&["192.168.1.0/33"])).is_err());
    }

    #[test]
    fn default_is_localhost() {
        assert_eq!(default_hosts(), vec!["localhost".to_string()]);
    }
}
