use std::sync::Arc;

use cyberkit_rs::app::App;
use cyberkit_rs::config::Settings;
use cyberkit_rs::core::dispatcher::{ToolContext, dispatch};
use cyberkit_rs::core::lookups::hash_cracker;
use cyberkit_rs::core::models::{CrackOutcome, HashAlgorithm, ToolKind, ToolOutput, ToolRequest, TransformMode};
use strum::IntoEnumIterator;
use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;

fn instant_context() -> ToolContext {
    ToolContext::new(Settings { delay_scale: 0.0, ..Settings::default() }).unwrap()
}

#[test]
fn every_tool_builds_its_own_request() {
    let (tx, _rx) = mpsc::unbounded_channel();
    let mut app = App::new(Arc::new(instant_context()), tx);
    for kind in ToolKind::iter() {
        app.select_tool(kind);
        app.panel.input = "example.com".to_string();
        let request = app.build_request().expect("non-empty input always builds a request");
        assert_eq!(request.tool(), kind);
    }
}

#[tokio::test]
async fn every_simulated_tool_produces_one_output() {
    let ctx = instant_context();
    let (tx, _rx) = mpsc::unbounded_channel();
    let token = CancellationToken::new();
    let requests = vec![
        ToolRequest::WhoisLookup { domain: "example.com".into() },
        ToolRequest::DnsLookup { domain: "www.example.com".into() },
        ToolRequest::ReverseIp { ip: "8.8.8.8".into() },
        ToolRequest::IpGeolocation { ip: "8.8.8.8".into() },
        ToolRequest::PortScanner { target: "localhost".into(), ports: "22,80".into() },
        ToolRequest::Md5Tool { input: "".into(), mode: TransformMode::Encode },
        ToolRequest::Base64Tool { input: "SGVsbG8=".into(), mode: TransformMode::Decode },
        ToolRequest::ShaTool { input: "abc".into() },
        ToolRequest::UrlTool { input: "a b".into(), mode: TransformMode::Encode },
        ToolRequest::HexTool { input: "A".into(), mode: TransformMode::Encode },
        ToolRequest::Rot13Tool { input: "Hello World".into() },
    ];

    let outputs = {
        let mut outputs = Vec::new();
        for request in requests {
            outputs.push(dispatch(request, &ctx, 1, &token, &tx).await.unwrap());
        }
        outputs
    };

    assert!(matches!(outputs[0], ToolOutput::Whois(ref w) if w.contains("EXAMPLE.COM")));
    assert!(matches!(outputs[1], ToolOutput::Dns(ref d) if d.cname.is_some()));
    assert!(matches!(outputs[2], ToolOutput::ReverseIp { ref domains, .. } if domains.len() == 8));
    assert!(matches!(outputs[3], ToolOutput::Geolocation(ref g) if g.ip == "8.8.8.8"));
    assert!(matches!(outputs[4], ToolOutput::PortScan(ref r) if r.len() == 2));
    assert_eq!(outputs[5], ToolOutput::Text("d41d8cd98f00b204e9800998ecf8427e".into()));
    assert_eq!(outputs[6], ToolOutput::Text("Hello".into()));
    assert!(matches!(outputs[7], ToolOutput::Sha(ref d) if d.sha1 == "a9993e364706816aba3e25717850c26c9cd0d89d"));
    assert_eq!(outputs[8], ToolOutput::Text("a%20b".into()));
    assert_eq!(outputs[9], ToolOutput::Text("41".into()));
    assert_eq!(outputs[10], ToolOutput::Text("Uryyb Jbeyq".into()));
}

#[tokio::test]
async fn cracker_finds_the_sample_for_every_algorithm() {
    let ctx = instant_context();
    let (tx, _rx) = mpsc::unbounded_channel();
    let token = CancellationToken::new();
    for algorithm in HashAlgorithm::iter() {
        let request = ToolRequest::HashCracker { digest: hash_cracker::sample_hash(algorithm), algorithm };
        let output = dispatch(request, &ctx, 1, &token, &tx).await;
        assert_eq!(output, Some(ToolOutput::Crack(CrackOutcome::Found("password123".into()))));
    }
}

#[tokio::test]
async fn cancellation_yields_no_output() {
    let ctx = ToolContext::new(Settings::default()).unwrap();
    let (tx, _rx) = mpsc::unbounded_channel();
    let token = CancellationToken::new();
    let canceller = token.clone();
    tokio::spawn(async move {
        tokio::time::sleep(std::time::Duration::from_millis(50)).await;
        canceller.cancel();
    });
    let request = ToolRequest::WhoisLookup { domain: "example.com".into() };
    assert_eq!(dispatch(request, &ctx, 1, &token, &tx).await, None);
}
