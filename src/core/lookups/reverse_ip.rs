// src/core/lookups/reverse_ip.rs

use std::time::Duration;

use once_cell::sync::Lazy;
use regex::Regex;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info};

use crate::core::error::ToolError;
use crate::core::lookups::simulate_delay;
use crate::core::models::ToolResult;

pub const DELAY: Duration = Duration::from_millis(2000);

// Dotted-quad IPv4, octets 0-255. Leading zeros are tolerated.
static RE_IPV4: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(?:(?:25[0-5]|2[0-4][0-9]|[01]?[0-9][0-9]?)\.){3}(?:25[0-5]|2[0-4][0-9]|[01]?[0-9][0-9]?)$").unwrap()
});

const SIMULATED_DOMAINS: &[&str] = &[
    "example.com",
    "test.example.com",
    "blog.example.com",
    "shop.example.com",
    "api.example.com",
    "cdn.example.com",
    "static.example.com",
    "images.example.com",
];

pub fn is_valid_ipv4(ip: &str) -> bool {
    RE_IPV4.is_match(ip)
}

/// Simulated reverse-IP lookup: validates the address, then lists a fixed
/// set of domains.
pub async fn lookup(input: &str, delay_scale: f64, token: &CancellationToken) -> Option<ToolResult<Vec<String>>> {
    let ip = input.trim();
    if ip.is_empty() {
        return Some(Err(ToolError::validation("Please enter an IP address")));
    }
    if !is_valid_ipv4(ip) {
        debug!(ip, "Rejected malformed IPv4 address.");
        return Some(Err(ToolError::validation("Please enter a valid IP address")));
    }
    info!(ip, "Simulating reverse IP lookup.");
    simulate_delay(DELAY, delay_scale, token).await?;
    Some(Ok(SIMULATED_DOMAINS.iter().map(|d| d.to_string()).collect()))
}
