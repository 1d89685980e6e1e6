// src/core/dispatcher.rs

//! Runs one tool invocation.
//!
//! The shell builds a [`ToolRequest`] from the mounted panel and spawns
//! [`run`] on the runtime. Every request maps to exactly one [`ToolOutput`],
//! or to nothing if the invocation was cancelled first.

use std::sync::Arc;
use std::time::Duration;

use chrono::Utc;
use rand::SeedableRng;
use rand::rngs::StdRng;
use tokio::sync::mpsc::UnboundedSender;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};

use crate::config::Settings;
use crate::core::lookups::{dns, geolocation, hash_cracker, port_scanner, reverse_ip, subdomain, whois};
use crate::core::models::{HashAlgorithm, ToolEvent, ToolOutput, ToolRequest, ToolResult, TransformMode};
use crate::core::obfuscator;
use crate::core::password;
use crate::core::transforms::{self, Codec, display_text, hash, rot13};

/// Shared, read-only state for all invocations.
pub struct ToolContext {
    pub client: reqwest::Client,
    pub settings: Settings,
}

impl ToolContext {
    pub fn new(settings: Settings) -> reqwest::Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(settings.request_timeout_secs))
            .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self { client, settings })
    }
}

/// Runs `request` and reports the outcome on `events`.
///
/// Port-scan progress is streamed as [`ToolEvent::PortProgress`]. A
/// cancelled invocation sends no `Completed` event.
pub async fn run(
    request: ToolRequest,
    ctx: Arc<ToolContext>,
    id: u64,
    token: CancellationToken,
    events: UnboundedSender<ToolEvent>,
) {
    let tool = request.tool();
    info!(tool = tool.id(), id, "Tool invocation started.");

    match dispatch(request, &ctx, id, &token, &events).await {
        Some(output) => {
            if let ToolOutput::Error(e) = &output {
                warn!(tool = tool.id(), id, error = %e, "Tool invocation failed.");
            } else {
                info!(tool = tool.id(), id, "Tool invocation finished.");
            }
            let event = ToolEvent::Completed { id, output, finished_at: Utc::now() };
            if events.send(event).is_err() {
                debug!(id, "Event receiver dropped before completion.");
            }
        }
        None => info!(tool = tool.id(), id, "Tool invocation cancelled."),
    }
}

/// Maps a request to its output. `None` means the invocation was cancelled.
pub async fn dispatch(
    request: ToolRequest,
    ctx: &ToolContext,
    id: u64,
    token: &CancellationToken,
    events: &UnboundedSender<ToolEvent>,
) -> Option<ToolOutput> {
    let scale = ctx.settings.delay_scale;
    let output = match request {
        ToolRequest::SubdomainFinder { domain } => {
            let result = subdomain::find_subdomains(&ctx.client, &ctx.settings.crtsh_url, &domain, token).await?;
            into_output(result, ToolOutput::Subdomains)
        }
        ToolRequest::WhoisLookup { domain } => {
            into_output(whois::lookup(&domain, scale, token).await?, ToolOutput::Whois)
        }
        ToolRequest::DnsLookup { domain } => {
            into_output(dns::lookup(&domain, scale, token).await?, ToolOutput::Dns)
        }
        ToolRequest::ReverseIp { ip } => {
            let result = reverse_ip::lookup(&ip, scale, token).await?;
            into_output(result, |domains| ToolOutput::ReverseIp { ip: ip.trim().to_string(), domains })
        }
        ToolRequest::IpGeolocation { ip } => {
            into_output(geolocation::lookup(&ip, scale, token).await?, ToolOutput::Geolocation)
        }
        ToolRequest::PortScanner { target, ports } => {
            let mut rng = StdRng::from_entropy();
            let result = port_scanner::scan(&target, &ports, scale, &mut rng, token, |result| {
                if events.send(ToolEvent::PortProgress { id, result: result.clone() }).is_err() {
                    debug!(id, port = result.port, "Progress receiver dropped.");
                }
            })
            .await?;
            into_output(result, ToolOutput::PortScan)
        }
        ToolRequest::Md5Tool { input, mode } => ToolOutput::Text(match mode {
            TransformMode::Encode => hash::digest(HashAlgorithm::Md5, &input),
            TransformMode::Decode => hash::MD5_IRREVERSIBLE.to_string(),
        }),
        ToolRequest::Base64Tool { input, mode } => codec_output(Codec::Base64, mode, &input),
        ToolRequest::ShaTool { input } => ToolOutput::Sha(hash::sha_digests(&input)),
        ToolRequest::UrlTool { input, mode } => codec_output(Codec::Url, mode, &input),
        ToolRequest::HexTool { input, mode } => codec_output(Codec::Hex, mode, &input),
        ToolRequest::Rot13Tool { input } => ToolOutput::Text(rot13::rot13(&input)),
        ToolRequest::PythonObfuscator { source } => {
            let mut rng = StdRng::from_entropy();
            ToolOutput::Text(display_text(obfuscator::obfuscate_python(&source, &mut rng)))
        }
        ToolRequest::PhpObfuscator { source } => {
            let mut rng = StdRng::from_entropy();
            ToolOutput::Text(display_text(obfuscator::obfuscate_php(&source, &mut rng)))
        }
        ToolRequest::PasswordGenerator(spec) => {
            let mut rng = StdRng::from_entropy();
            into_output(password::generate(&spec, &mut rng), |value| ToolOutput::Password {
                strength: password::strength(&value),
                value,
            })
        }
        ToolRequest::HashCracker { digest, algorithm } => {
            into_output(hash_cracker::crack(&digest, algorithm, scale, token).await?, ToolOutput::Crack)
        }
    };
    Some(output)
}

fn codec_output(codec: Codec, mode: TransformMode, input: &str) -> ToolOutput {
    ToolOutput::Text(display_text(transforms::apply_codec(codec, mode, input)))
}

fn into_output<T>(result: ToolResult<T>, wrap: impl FnOnce(T) -> ToolOutput) -> ToolOutput {
    result.map_or_else(ToolOutput::Error, wrap)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::{PasswordSpec, PasswordStrength};
    use tokio::sync::mpsc;

    fn context() -> ToolContext {
        let settings = Settings { delay_scale: 0.0, ..Settings::default() };
        ToolContext::new(settings).unwrap()
    }

    async fn dispatch_now(request: ToolRequest) -> Option<ToolOutput> {
        let (tx, _rx) = mpsc::unbounded_channel();
        dispatch(request, &context(), 1, &CancellationToken::new(), &tx).await
    }

    #[tokio::test]
    async fn md5_decode_explains_irreversibility() {
        let output = dispatch_now(ToolRequest::Md5Tool { input: "abc".into(), mode: TransformMode::Decode }).await;
        assert_eq!(output, Some(ToolOutput::Text(hash::MD5_IRREVERSIBLE.to_string())));
    }

    #[tokio::test]
    async fn decode_errors_become_text() {
        let output = dispatch_now(ToolRequest::HexTool { input: "abc".into(), mode: TransformMode::Decode }).await;
        assert_eq!(output, Some(ToolOutput::Text("Error: Invalid hex string (odd length)".into())));
    }

    #[tokio::test]
    async fn password_output_carries_strength() {
        let spec = PasswordSpec { length: 12, ..PasswordSpec::default() };
        match dispatch_now(ToolRequest::PasswordGenerator(spec)).await {
            Some(ToolOutput::Password { value, strength }) => {
                assert_eq!(value.len(), 12);
                assert_eq!(strength, PasswordStrength::Strong);
            }
            other => panic!("unexpected output: {other:?}"),
        }
    }

    #[tokio::test]
    async fn validation_errors_are_outputs() {
        let output = dispatch_now(ToolRequest::ReverseIp { ip: "999.1.1.1".into() }).await;
        assert!(matches!(output, Some(ToolOutput::Error(_))));
    }

    #[tokio::test]
    async fn port_scan_streams_progress() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let request = ToolRequest::PortScanner { target: "host".into(), ports: "22,80".into() };
        let output = dispatch(request, &context(), 7, &CancellationToken::new(), &tx).await;
        assert!(matches!(output, Some(ToolOutput::PortScan(ref r)) if r.len() == 2));
        let mut progress = 0;
        while let Ok(event) = rx.try_recv() {
            assert_eq!(event.id(), 7);
            progress += 1;
        }
        assert_eq!(progress, 2);
    }

    #[tokio::test]
    async fn port_scan_finishes_after_receiver_is_dropped() {
        let (tx, rx) = mpsc::unbounded_channel();
        drop(rx);
        let request = ToolRequest::PortScanner { target: "host".into(), ports: "22,80,443".into() };
        let output = dispatch(request, &context(), 7, &CancellationToken::new(), &tx).await;
        assert!(matches!(output, Some(ToolOutput::PortScan(ref r)) if r.len() == 3));
    }

    #[tokio::test]
    async fn cancelled_run_sends_no_completion() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let token = CancellationToken::new();
        token.cancel();
        let request = ToolRequest::HashCracker { digest: "ff".into(), algorithm: HashAlgorithm::Md5 };
        run(request, Arc::new(context()), 3, token, tx).await;
        assert!(rx.try_recv().is_err());
    }
}
