// src/core/lookups/geolocation.rs

use std::time::Duration;

use tokio_util::sync::CancellationToken;
use tracing::info;

use crate::core::error::ToolError;
use crate::core::lookups::simulate_delay;
use crate::core::models::{GeoLocation, ToolResult};

pub const DELAY: Duration = Duration::from_millis(1500);

pub fn simulated_location(ip: &str) -> GeoLocation {
    GeoLocation {
        ip: ip.to_string(),
        country: "United States".to_string(),
        country_code: "US".to_string(),
        region: "California".to_string(),
        region_name: "CA".to_string(),
        city: "San Francisco".to_string(),
        zip: "94107".to_string(),
        lat: 37.7749,
        lon: -122.4194,
        timezone: "America/Los_Angeles".to_string(),
        isp: "Example ISP".to_string(),
        org: "Example Organization".to_string(),
        asn: "AS12345 Example ASN".to_string(),
    }
}

/// Simulated geolocation. Any non-blank input is accepted as the address.
pub async fn lookup(input: &str, delay_scale: f64, token: &CancellationToken) -> Option<ToolResult<GeoLocation>> {
    let ip = input.trim();
    if ip.is_empty() {
        return Some(Err(ToolError::validation("Please enter an IP address")));
    }
    info!(ip, "Simulating IP geolocation.");
    simulate_delay(DELAY, delay_scale, token).await?;
    Some(Ok(simulated_location(ip)))
}
