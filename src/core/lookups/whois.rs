// src/core/lookups/whois.rs

use std::time::Duration;

use tokio_util::sync::CancellationToken;
use tracing::info;

use crate::core::error::ToolError;
use crate::core::lookups::{normalize_domain, simulate_delay};
use crate::core::models::ToolResult;

pub const DELAY: Duration = Duration::from_millis(2000);

/// A registry-style WHOIS record for `domain`. Everything except the domain
/// name is a fixed placeholder.
pub fn simulated_record(domain: &str) -> String {
    format!(
        "Domain Name: {}
Registry Domain ID: D123456789-LROR
Registrar WHOIS Server: whois.example.com
Registrar URL: http://www.example.com
Updated Date: 2024-01-15T10:30:00Z
Creation Date: 2020-01-15T10:30:00Z
Registry Expiry Date: 2025-01-15T10:30:00Z
Registrar: Example Registrar LLC
Registrar IANA ID: 1234
Registrar Abuse Contact Email: abuse@example.com
Registrar Abuse Contact Phone: +1.2345678901
Domain Status: clientTransferProhibited
Registry Registrant ID: REDACTED FOR PRIVACY
Registrant Name: REDACTED FOR PRIVACY
Registrant Organization: REDACTED FOR PRIVACY
Registrant Street: REDACTED FOR PRIVACY
Registrant City: REDACTED FOR PRIVACY
Registrant State/Province: REDACTED FOR PRIVACY
Registrant Postal Code: REDACTED FOR PRIVACY
Registrant Country: US
Registrant Phone: REDACTED FOR PRIVACY
Registrant Email: REDACTED FOR PRIVACY
Name Server: ns1.example.com
Name Server: ns2.example.com
DNSSEC: unsigned",
        domain.to_uppercase()
    )
}

/// Simulated WHOIS lookup. `None` if cancelled during the delay.
pub async fn lookup(input: &str, delay_scale: f64, token: &CancellationToken) -> Option<ToolResult<String>> {
    let Some(domain) = normalize_domain(input) else {
        return Some(Err(ToolError::validation("Please enter a domain name")));
    };
    info!(domain = %domain, "Simulating WHOIS lookup.");
    simulate_delay(DELAY, delay_scale, token).await?;
    Some(Ok(simulated_record(&domain)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn record_embeds_uppercased_domain() {
        let record = simulated_record("example.net");
        assert!(record.starts_with("Domain Name: EXAMPLE.NET\n"));
        assert!(record.ends_with("DNSSEC: unsigned"));
    }

    #[tokio::test]
    async fn cancelled_lookup_yields_nothing() {
        let token = CancellationToken::new();
        token.cancel();
        assert_eq!(lookup("example.net", 0.0, &token).await, None);
    }
}
