// src/core/lookups/mod.rs

// Network-facing tools. Only `subdomain` performs a real request; the other
// lookups are simulators that wait a while and hand back canned or random data,
// and `hash_cracker` runs a real dictionary attack paced by the same delays.
pub mod dns;
pub mod geolocation;
pub mod hash_cracker;
pub mod port_scanner;
pub mod reverse_ip;
pub mod subdomain;
pub mod whois;

use std::time::Duration;

use tokio_util::sync::CancellationToken;
use tracing::debug;
use url::Url;

/// Waits `base * scale`, or until `token` is cancelled.
///
/// Returns `None` when the invocation was cancelled, so lookups can bail out
/// with `?`. A non-positive or non-finite scale skips the wait entirely.
pub async fn simulate_delay(base: Duration, scale: f64, token: &CancellationToken) -> Option<()> {
    if token.is_cancelled() {
        return None;
    }
    if !scale.is_finite() || scale <= 0.0 {
        return Some(());
    }
    let delay = base.mul_f64(scale);
    tokio::select! {
        _ = token.cancelled() => {
            debug!(?delay, "Simulated delay cancelled.");
            None
        }
        _ = tokio::time::sleep(delay) => Some(()),
    }
}

/// Trims user input and, when it looks like a URL, keeps only the host.
///
/// `"https://Example.com/path"` and `" example.com "` both become
/// `"example.com"`. Input that is not a URL is returned trimmed. `None`
/// for blank input.
pub fn normalize_domain(input: &str) -> Option<String> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return None;
    }
    let with_scheme = if trimmed.starts_with("http://") || trimmed.starts_with("https://") {
        trimmed.to_string()
    } else {
        format!("https://{trimmed}")
    };
    let host = Url::parse(&with_scheme)
        .ok()
        .and_then(|url| url.host_str().map(String::from))
        .unwrap_or_else(|| trimmed.to_string());
    Some(host)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalizes_urls_and_bare_domains() {
        assert_eq!(normalize_domain(" example.com ").as_deref(), Some("example.com"));
        assert_eq!(normalize_domain("https://Sub.Example.com/a?b").as_deref(), Some("sub.example.com"));
        assert_eq!(normalize_domain("http://example.org:8080").as_deref(), Some("example.org"));
        assert_eq!(normalize_domain("   "), None);
    }

    #[tokio::test]
    async fn zero_scale_skips_the_wait() {
        let token = CancellationToken::new();
        let started = std::time::Instant::now();
        assert_eq!(simulate_delay(Duration::from_secs(60), 0.0, &token).await, Some(()));
        assert!(started.elapsed() < Duration::from_secs(1));
    }

    #[tokio::test]
    async fn cancellation_interrupts_the_wait() {
        let token = CancellationToken::new();
        let child = token.clone();
        tokio::spawn(async move {
            tokio::time::sleep(Duration::from_millis(20)).await;
            child.cancel();
        });
        assert_eq!(simulate_delay(Duration::from_secs(60), 1.0, &token).await, None);
    }

    #[tokio::test]
    async fn already_cancelled_token_returns_immediately() {
        let token = CancellationToken::new();
        token.cancel();
        assert_eq!(simulate_delay(Duration::ZERO, 0.0, &token).await, None);
    }
}
