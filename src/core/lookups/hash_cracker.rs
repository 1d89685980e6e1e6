// src/core/lookups/hash_cracker.rs

use std::time::Duration;

use tokio_util::sync::CancellationToken;
use tracing::{debug, info};

use crate::core::error::ToolError;
use crate::core::lookups::simulate_delay;
use crate::core::models::{CrackOutcome, HashAlgorithm, ToolResult};
use crate::core::transforms::hash;

/// Tried first, 100 ms apart.
pub const COMMON_PASSWORDS: &[&str] = &[
    "password", "123456", "password123", "admin", "letmein", "welcome", "monkey", "1234567890",
    "qwerty", "abc123", "Password1", "password1", "admin123", "root", "toor", "pass", "test",
    "guest", "user", "login", "hello", "world", "secret", "love", "god", "sex", "money", "life",
];

/// Tried after the common passwords, 50 ms apart.
pub const VARIATIONS: &[&str] = &[
    "123", "1234", "12345", "123456789", "000", "111", "222", "a", "aa", "aaa", "test123", "admin123",
    "root123",
];

pub const COMMON_DELAY: Duration = Duration::from_millis(100);
pub const VARIATION_DELAY: Duration = Duration::from_millis(50);

pub const SAMPLE_PASSWORD: &str = "password123";

/// Digest of [`SAMPLE_PASSWORD`], for trying the tool out.
pub fn sample_hash(algorithm: HashAlgorithm) -> String {
    hash::digest(algorithm, SAMPLE_PASSWORD)
}

/// Every candidate in search order with its simulated cost.
fn candidates() -> impl Iterator<Item = (&'static str, Duration)> {
    COMMON_PASSWORDS
        .iter()
        .map(|p| (*p, COMMON_DELAY))
        .chain(VARIATIONS.iter().map(|p| (*p, VARIATION_DELAY)))
}

/// Compares the digest of every candidate with `target` and returns the
/// first match. The target is compared case-insensitively; candidates are
/// used exactly as listed.
pub fn search(target: &str, algorithm: HashAlgorithm) -> CrackOutcome {
    let target = target.trim().to_lowercase();
    candidates()
        .map(|(candidate, _)| candidate)
        .find(|candidate| hash::digest(algorithm, candidate) == target)
        .map_or(CrackOutcome::NotFound, |found| CrackOutcome::Found(found.to_string()))
}

/// Dictionary attack paced like a slow cracker. `None` if cancelled.
pub async fn crack(
    digest: &str,
    algorithm: HashAlgorithm,
    delay_scale: f64,
    token: &CancellationToken,
) -> Option<ToolResult<CrackOutcome>> {
    let target = digest.trim().to_lowercase();
    if target.is_empty() {
        return Some(Err(ToolError::validation("Please enter a hash to crack")));
    }
    info!(%algorithm, "Starting dictionary attack.");

    for (attempt, (candidate, cost)) in candidates().enumerate() {
        simulate_delay(cost, delay_scale, token).await?;
        if hash::digest(algorithm, candidate) == target {
            info!(attempt, "Hash cracked.");
            return Some(Ok(CrackOutcome::Found(candidate.to_string())));
        }
    }
    debug!("Wordlist exhausted without a match.");
    Some(Ok(CrackOutcome::NotFound))
}
