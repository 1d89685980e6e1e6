// src/core/lookups/dns.rs

use std::time::Duration;

use tokio_util::sync::CancellationToken;
use tracing::info;

use crate::core::error::ToolError;
use crate::core::lookups::{normalize_domain, simulate_delay};
use crate::core::models::{DnsRecords, ToolResult};

pub const DELAY: Duration = Duration::from_millis(1500);

/// The fixed record set shown for every domain. Only the CNAME depends on
/// the input: `www.<name>` points at `<name>`.
pub fn simulated_records(domain: &str) -> DnsRecords {
    DnsRecords {
        a: owned(&["93.184.216.34", "93.184.216.35"]),
        aaaa: owned(&["2606:2800:220:1:248:1893:25c8:1946"]),
        mx: owned(&["10 mail.example.com", "20 mail2.example.com"]),
        ns: owned(&["ns1.example.com", "ns2.example.com"]),
        txt: owned(&["v=spf1 include:_spf.example.com ~all", "google-site-verification=abc123"]),
        cname: domain.strip_prefix("www.").map(|apex| vec![apex.to_string()]),
    }
}

fn owned(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| v.to_string()).collect()
}

/// Simulated DNS lookup. `None` if cancelled during the delay.
pub async fn lookup(input: &str, delay_scale: f64, token: &CancellationToken) -> Option<ToolResult<DnsRecords>> {
    let Some(domain) = normalize_domain(input) else {
        return Some(Err(ToolError::validation("Please enter a domain name")));
    };
    info!(domain = %domain, "Simulating DNS lookup.");
    simulate_delay(DELAY, delay_scale, token).await?;
    Some(Ok(simulated_records(&domain)))
}
