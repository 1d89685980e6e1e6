// src/core/lookups/subdomain.rs

use std::collections::BTreeSet;

use serde::Deserialize;
use tokio_util::sync::CancellationToken;
use tracing::{debug, error, info};

use crate::core::error::ToolError;
use crate::core::lookups::normalize_domain;
use crate::core::models::{SubdomainReport, ToolResult};
use crate::core::transforms;

/// One row of the crt.sh JSON output. `name_value` holds every name on the
/// certificate, separated by newlines; the other columns are ignored.
#[derive(Debug, Clone, Deserialize)]
pub struct CertificateEntry {
    pub name_value: String,
}

/// Builds the crt.sh query URL for `domain`.
pub fn query_url(base_url: &str, domain: &str) -> String {
    format!(
        "{}/?q={}&output=json",
        base_url.trim_end_matches('/'),
        transforms::url::encode(domain)
    )
}

/// Extracts the unique, sorted, lower-cased names that contain `domain`.
/// Wildcard names (`*.example.com`) are dropped.
pub fn collect_subdomains(entries: &[CertificateEntry], domain: &str) -> Vec<String> {
    let needle = domain.to_lowercase();
    let unique: BTreeSet<String> = entries
        .iter()
        .flat_map(|entry| entry.name_value.split('\n'))
        .map(|name| name.trim().to_lowercase())
        .filter(|name| name.contains(&needle) && !name.starts_with("*."))
        .collect();
    unique.into_iter().collect()
}

/// Queries the certificate-transparency log at `base_url` for `input`.
///
/// Returns `None` if `token` is cancelled before the response arrives. A
/// non-2xx status or a body that is not the expected JSON is a
/// `ToolError::Network`; nothing is retried.
pub async fn find_subdomains(
    client: &reqwest::Client,
    base_url: &str,
    input: &str,
    token: &CancellationToken,
) -> Option<ToolResult<SubdomainReport>> {
    let Some(domain) = normalize_domain(input) else {
        return Some(Err(ToolError::validation("Please enter a domain name")));
    };

    let url = query_url(base_url, &domain);
    info!(domain = %domain, "Starting subdomain lookup.");

    let body = tokio::select! {
        biased;
        _ = token.cancelled() => {
            debug!(domain = %domain, "Subdomain lookup cancelled.");
            return None;
        }
        body = fetch_body(client, &url) => body,
    };

    let result = body.and_then(|body| {
        let entries = parse_entries(&body)?;
        let subdomains = collect_subdomains(&entries, &domain);
        info!(certificates = entries.len(), subdomains = subdomains.len(), "Subdomain lookup finished.");
        Ok(SubdomainReport { domain: domain.clone(), subdomains })
    });
    Some(result)
}

async fn fetch_body(client: &reqwest::Client, url: &str) -> ToolResult<String> {
    debug!(url, "Requesting certificate-transparency data.");
    let response = client.get(url).send().await.map_err(|e| {
        error!(url, error = %e, "Request to crt.sh failed.");
        ToolError::Network("Failed to fetch data from crt.sh".to_string())
    })?;

    let status = response.status();
    if !status.is_success() {
        error!(url, %status, "crt.sh returned a non-success status.");
        return Err(ToolError::Network("Failed to fetch data from crt.sh".to_string()));
    }

    response.text().await.map_err(|e| {
        error!(url, error = %e, "Could not read crt.sh response body.");
        ToolError::Network("Failed to fetch data from crt.sh".to_string())
    })
}

fn parse_entries(body: &str) -> ToolResult<Vec<CertificateEntry>> {
    // crt.sh answers an empty body instead of `[]` for some queries.
    if body.trim().is_empty() {
        return Ok(Vec::new());
    }
    serde_json::from_str(body).map_err(|e| {
        error!(error = %e, "crt.sh response is not the expected JSON.");
        ToolError::Network("Unexpected response from crt.sh".to_string())
    })
}
