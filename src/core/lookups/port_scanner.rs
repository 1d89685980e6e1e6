// src/core/lookups/port_scanner.rs

use std::time::Duration;

use rand::Rng;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info};

use crate::core::error::ToolError;
use crate::core::lookups::simulate_delay;
use crate::core::models::{PortResult, PortStatus, ToolResult};

/// Simulated time spent on each port.
pub const DELAY_PER_PORT: Duration = Duration::from_millis(200);

/// Port list the panel starts with.
pub const DEFAULT_PORTS: &str = "80,443,22,21,25,53,110,143,993,995";
/// Port list loaded by the "common ports" shortcut.
pub const COMMON_PORTS_PRESET: &str = "21,22,23,25,53,80,110,143,443,993,995,3389,5432,3306";

const SERVICES: &[(u16, &str)] = &[
    (21, "FTP"),
    (22, "SSH"),
    (23, "Telnet"),
    (25, "SMTP"),
    (53, "DNS"),
    (80, "HTTP"),
    (110, "POP3"),
    (143, "IMAP"),
    (443, "HTTPS"),
    (993, "IMAPS"),
    (995, "POP3S"),
    (3306, "MySQL"),
    (3389, "RDP"),
    (5432, "PostgreSQL"),
];

pub fn service_name(port: u16) -> &'static str {
    SERVICES
        .iter()
        .find(|(p, _)| *p == port)
        .map_or("Unknown", |(_, name)| name)
}

/// Parses a comma-separated port list.
///
/// Each entry is trimmed and its leading digits are read, so `"80abc"` is
/// port 80. Entries without leading digits and numbers outside 1..=65535 are
/// dropped. Order and duplicates are kept.
pub fn parse_ports(list: &str) -> Vec<u16> {
    list.split(',')
        .filter_map(|entry| {
            let entry = entry.trim();
            let entry = entry.strip_prefix('+').unwrap_or(entry);
            let digits: String = entry.chars().take_while(char::is_ascii_digit).collect();
            digits.parse::<u32>().ok()
        })
        .filter(|port| (1..=65535).contains(port))
        .filter_map(|port| u16::try_from(port).ok())
        .collect()
}

/// Draws a status: open with probability 0.3, otherwise closed or filtered
/// with equal odds.
pub fn roll_status<R: Rng + ?Sized>(rng: &mut R) -> PortStatus {
    if rng.gen_bool(0.3) {
        PortStatus::Open
    } else if rng.gen_bool(0.5) {
        PortStatus::Closed
    } else {
        PortStatus::Filtered
    }
}

/// Checks the inputs and returns the ports to scan.
pub fn validate(target: &str, ports: &str) -> ToolResult<Vec<u16>> {
    if target.trim().is_empty() {
        return Err(ToolError::validation("Please enter a target host"));
    }
    if ports.trim().is_empty() {
        return Err(ToolError::validation("Please enter ports to scan"));
    }
    let list = parse_ports(ports);
    if list.is_empty() {
        return Err(ToolError::validation("Please enter valid port numbers"));
    }
    Ok(list)
}

/// Simulated port scan. Nothing is sent over the network.
///
/// `on_result` sees every port as soon as its simulated probe finishes, so
/// the panel can fill in progressively. Returns `None` if cancelled.
pub async fn scan<R, F>(
    target: &str,
    ports: &str,
    delay_scale: f64,
    rng: &mut R,
    token: &CancellationToken,
    mut on_result: F,
) -> Option<ToolResult<Vec<PortResult>>>
where
    R: Rng + ?Sized,
    F: FnMut(&PortResult),
{
    let list = match validate(target, ports) {
        Ok(list) => list,
        Err(e) => return Some(Err(e)),
    };
    info!(target = target.trim(), ports = list.len(), "Simulating port scan.");

    let mut results = Vec::with_capacity(list.len());
    for port in list {
        simulate_delay(DELAY_PER_PORT, delay_scale, token).await?;
        let result = PortResult {
            port,
            service: service_name(port).to_string(),
            status: roll_status(rng),
        };
        debug!(port, status = %result.status, "Simulated port probe.");
        on_result(&result);
        results.push(result);
    }
    Some(Ok(results))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn parses_like_parse_int() {
        assert_eq!(parse_ports("80, 443 ,22"), vec![80, 443, 22]);
        assert_eq!(parse_ports("80abc,+8080,x81,0,65536,-5,65535"), vec![80, 8080, 65535]);
        assert_eq!(parse_ports("22,22"), vec![22, 22]);
        assert!(parse_ports("http,ssh").is_empty());
    }

    #[test]
    fn validation_messages() {
        assert_eq!(validate(" ", "80"), Err(ToolError::validation("Please enter a target host")));
        assert_eq!(validate("host", ""), Err(ToolError::validation("Please enter ports to scan")));
        assert_eq!(validate("host", "abc"), Err(ToolError::validation("Please enter valid port numbers")));
    }

    #[test]
    fn known_and_unknown_services() {
        assert_eq!(service_name(22), "SSH");
        assert_eq!(service_name(5432), "PostgreSQL");
        assert_eq!(service_name(31337), "Unknown");
    }

    #[test]
    fn status_distribution_is_roughly_right() {
        let mut rng = StdRng::seed_from_u64(5);
        let open = (0..10_000)
            .filter(|_| roll_status(&mut rng) == PortStatus::Open)
            .count();
        assert!((2_500..3_500).contains(&open), "open = {open}");
    }

    #[tokio::test]
    async fn reports_every_port_progressively() {
        let mut rng = StdRng::seed_from_u64(5);
        let token = CancellationToken::new();
        let mut seen = Vec::new();
        let results = scan("host", COMMON_PORTS_PRESET, 0.0, &mut rng, &token, |r| seen.push(r.port))
            .await
            .unwrap()
            .unwrap();
        assert_eq!(results.len(), 14);
        assert_eq!(seen, results.iter().map(|r| r.port).collect::<Vec<_>>());
        assert_eq!(results[0].service, "FTP");
    }

    #[tokio::test]
    async fn cancelled_scan_stops() {
        let mut rng = StdRng::seed_from_u64(5);
        let token = CancellationToken::new();
        token.cancel();
        let mut seen = 0;
        assert_eq!(scan("host", "80,443", 0.0, &mut rng, &token, |_| seen += 1).await, None);
        assert_eq!(seen, 0);
    }
}
