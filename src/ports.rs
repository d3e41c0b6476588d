use anyhow::{bail, Context, Result};

/// Parse CLI port values into the probe sequence (1..=65535).
///
/// Supported formats per value:
/// - single port number: `80`
/// - inclusive range: `8000-8010`
///
/// Order is preserved and duplicates are kept: every occurrence of a port in
/// the resulting sequence gets its own probe attempt.
pub fn parse_port_args(values: &[String]) -> Result<Vec<u16>> {
    let mut out: Vec<u16> = Vec::new();

    for value in values {
        let value = value.trim();
        if value.is_empty() {
            continue;
        }

        // Range `start-end`
        if let Some((a, b)) = value.split_once('-') {
            let start = parse_port_str(a.trim())
                .with_context(|| format!("invalid start in range: {a}"))?;
            let end =
                parse_port_str(b.trim()).with_context(|| format!("invalid end in range: {b}"))?;
            if start > end {
                bail!("invalid range {start}-{end} (start > end)");
            }
            out.extend(start..=end);
            continue;
        }

        // Single number
        let p = parse_port_str(value).with_context(|| format!("invalid port value: {value}"))?;
        out.push(p);
    }

    Ok(out)
}

/// The default probe sequence when no ports are given on the command line.
pub fn default_ports() -> Vec<u16> {
    vec![80, 443]
}

fn parse_port_str(s: &str) -> Result<u16> {
    let val: u32 = s.parse::<u32>().map_err(|e| anyhow::anyhow!(e))?;
    if val == 0 || val > 65535 {
        bail!("port out of range: {val}");
    }
    Ok(val as u16)
}
