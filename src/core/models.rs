// src/core/models.rs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use strum::{Display, EnumCount, EnumIter, EnumString, IntoStaticStr};

use crate::core::error::ToolError;

// --- Reusable Result Types ---

/// Result of one tool invocation before it is rendered.
pub type ToolResult<T> = Result<T, ToolError>;

// --- Tool Identity ---

/// Every tool the shell can mount. The kebab-case string form is the stable
/// tool id used in logs and configuration.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, EnumIter, EnumCount, EnumString, IntoStaticStr,
)]
#[strum(serialize_all = "kebab-case")]
pub enum ToolKind {
    #[default]
    SubdomainFinder,
    WhoisLookup,
    DnsLookup,
    ReverseIp,
    IpGeolocation,
    PortScanner,
    Md5Tool,
    Base64Tool,
    ShaTool,
    UrlTool,
    HexTool,
    Rot13Tool,
    PythonObfuscator,
    PhpObfuscator,
    PasswordGenerator,
    HashCracker,
}

impl ToolKind {
    /// Stable kebab-case identifier, e.g. `"subdomain-finder"`.
    pub fn id(self) -> &'static str {
        self.into()
    }

    /// Whether the tool exposes an encode/decode switch.
    pub fn has_mode(self) -> bool {
        matches!(self, Self::Md5Tool | Self::Base64Tool | Self::UrlTool | Self::HexTool)
    }

    /// Whether the tool returns simulated data rather than a real lookup.
    pub fn is_simulated(self) -> bool {
        matches!(
            self,
            Self::WhoisLookup | Self::DnsLookup | Self::ReverseIp | Self::IpGeolocation | Self::PortScanner
        )
    }

    /// Whether the main input is multi-line source code.
    pub fn takes_source_code(self) -> bool {
        matches!(self, Self::PythonObfuscator | Self::PhpObfuscator)
    }
}

// --- Transform Models ---

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Display, Serialize, Deserialize)]
pub enum TransformMode {
    #[default]
    Encode,
    Decode,
}

impl TransformMode {
    pub fn toggled(self) -> Self {
        match self {
            Self::Encode => Self::Decode,
            Self::Decode => Self::Encode,
        }
    }
}

/// Digest algorithms offered by the hashing tools and the hash cracker.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Display, EnumIter, EnumString, Serialize, Deserialize,
)]
pub enum HashAlgorithm {
    #[default]
    #[strum(to_string = "MD5", serialize = "md5")]
    Md5,
    #[strum(to_string = "SHA-1", serialize = "sha1")]
    Sha1,
    #[strum(to_string = "SHA-256", serialize = "sha256")]
    Sha256,
    #[strum(to_string = "SHA-512", serialize = "sha512")]
    Sha512,
}

impl HashAlgorithm {
    /// Length of the lowercase hex rendering of a digest.
    pub fn hex_len(self) -> usize {
        match self {
            Self::Md5 => 32,
            Self::Sha1 => 40,
            Self::Sha256 => 64,
            Self::Sha512 => 128,
        }
    }

    /// The next algorithm in selector order, wrapping around.
    pub fn next(self) -> Self {
        match self {
            Self::Md5 => Self::Sha1,
            Self::Sha1 => Self::Sha256,
            Self::Sha256 => Self::Sha512,
            Self::Sha512 => Self::Md5,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShaDigests {
    pub sha1: String,
    pub sha256: String,
    pub sha512: String,
}

// --- Password Models ---

/// Options of the password generator. Length is bounded to 4..=100.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PasswordSpec {
    pub length: usize,
    pub uppercase: bool,
    pub lowercase: bool,
    pub numbers: bool,
    pub symbols: bool,
    pub exclude_similar: bool,
}

impl Default for PasswordSpec {
    fn default() -> Self {
        Self {
            length: 16,
            uppercase: true,
            lowercase: true,
            numbers: true,
            symbols: true,
            exclude_similar: false,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Display, Serialize, Deserialize)]
pub enum PasswordStrength {
    Weak,
    Medium,
    Strong,
    #[strum(serialize = "Very Strong")]
    VeryStrong,
}

// --- Lookup Models ---

/// Subdomains found in certificate-transparency logs for one domain.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubdomainReport {
    pub domain: String,
    pub subdomains: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DnsRecords {
    pub a: Vec<String>,
    pub aaaa: Vec<String>,
    pub mx: Vec<String>,
    pub ns: Vec<String>,
    pub txt: Vec<String>,
    pub cname: Option<Vec<String>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeoLocation {
    pub ip: String,
    pub country: String,
    pub country_code: String,
    pub region: String,
    pub region_name: String,
    pub city: String,
    pub zip: String,
    pub lat: f64,
    pub lon: f64,
    pub timezone: String,
    pub isp: String,
    pub org: String,
    pub asn: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Serialize, Deserialize)]
#[strum(serialize_all = "lowercase")]
pub enum PortStatus {
    Open,
    Closed,
    Filtered,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PortResult {
    pub port: u16,
    pub service: String,
    pub status: PortStatus,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum CrackOutcome {
    Found(String),
    NotFound,
}

// --- Dispatch Models ---

/// Everything one tool invocation needs, one variant per tool.
#[derive(Debug, Clone, PartialEq)]
pub enum ToolRequest {
    SubdomainFinder { domain: String },
    WhoisLookup { domain: String },
    DnsLookup { domain: String },
    ReverseIp { ip: String },
    IpGeolocation { ip: String },
    PortScanner { target: String, ports: String },
    Md5Tool { input: String, mode: TransformMode },
    Base64Tool { input: String, mode: TransformMode },
    ShaTool { input: String },
    UrlTool { input: String, mode: TransformMode },
    HexTool { input: String, mode: TransformMode },
    Rot13Tool { input: String },
    PythonObfuscator { source: String },
    PhpObfuscator { source: String },
    PasswordGenerator(PasswordSpec),
    HashCracker { digest: String, algorithm: HashAlgorithm },
}

impl ToolRequest {
    pub fn tool(&self) -> ToolKind {
        match self {
            Self::SubdomainFinder { .. } => ToolKind::SubdomainFinder,
            Self::WhoisLookup { .. } => ToolKind::WhoisLookup,
            Self::DnsLookup { .. } => ToolKind::DnsLookup,
            Self::ReverseIp { .. } => ToolKind::ReverseIp,
            Self::IpGeolocation { .. } => ToolKind::IpGeolocation,
            Self::PortScanner { .. } => ToolKind::PortScanner,
            Self::Md5Tool { .. } => ToolKind::Md5Tool,
            Self::Base64Tool { .. } => ToolKind::Base64Tool,
            Self::ShaTool { .. } => ToolKind::ShaTool,
            Self::UrlTool { .. } => ToolKind::UrlTool,
            Self::HexTool { .. } => ToolKind::HexTool,
            Self::Rot13Tool { .. } => ToolKind::Rot13Tool,
            Self::PythonObfuscator { .. } => ToolKind::PythonObfuscator,
            Self::PhpObfuscator { .. } => ToolKind::PhpObfuscator,
            Self::PasswordGenerator(_) => ToolKind::PasswordGenerator,
            Self::HashCracker { .. } => ToolKind::HashCracker,
        }
    }
}

/// What a finished invocation hands back to the panel.
#[derive(Debug, Clone, PartialEq)]
pub enum ToolOutput {
    /// Single text slot of the transform and obfuscation tools.
    Text(String),
    Sha(ShaDigests),
    Subdomains(SubdomainReport),
    Whois(String),
    Dns(DnsRecords),
    ReverseIp { ip: String, domains: Vec<String> },
    Geolocation(GeoLocation),
    PortScan(Vec<PortResult>),
    Password { value: String, strength: PasswordStrength },
    Crack(CrackOutcome),
    Error(ToolError),
}

impl ToolOutput {
    /// Plain-text form used for the clipboard.
    pub fn to_plain_text(&self) -> String {
        match self {
            Self::Text(text) | Self::Whois(text) => text.clone(),
            Self::Sha(d) => format!("SHA-1: {}\nSHA-256: {}\nSHA-512: {}", d.sha1, d.sha256, d.sha512),
            Self::Subdomains(report) => report.subdomains.join("\n"),
            Self::Dns(records) => {
                let mut lines = Vec::new();
                for (kind, values) in [
                    ("A", &records.a),
                    ("AAAA", &records.aaaa),
                    ("MX", &records.mx),
                    ("NS", &records.ns),
                    ("TXT", &records.txt),
                ] {
                    lines.extend(values.iter().map(|v| format!("{kind}\t{v}")));
                }
                if let Some(cname) = &records.cname {
                    lines.extend(cname.iter().map(|v| format!("CNAME\t{v}")));
                }
                lines.join("\n")
            }
            Self::ReverseIp { domains, .. } => domains.join("\n"),
            Self::Geolocation(g) => format!(
                "IP: {}\nCountry: {} ({})\nRegion: {} ({})\nCity: {}\nZIP: {}\nCoordinates: {}, {}\nTimezone: {}\nISP: {}\nOrganization: {}\nAS: {}",
                g.ip, g.country, g.country_code, g.region, g.region_name, g.city, g.zip, g.lat, g.lon,
                g.timezone, g.isp, g.org, g.asn
            ),
            Self::PortScan(results) => results
                .iter()
                .map(|r| format!("{}\t{}\t{}", r.port, r.service, r.status))
                .collect::<Vec<_>>()
                .join("\n"),
            Self::Password { value, .. } => value.clone(),
            Self::Crack(CrackOutcome::Found(password)) => password.clone(),
            Self::Crack(CrackOutcome::NotFound) => "Hash not found in wordlist".to_string(),
            Self::Error(e) => e.to_string(),
        }
    }
}

// --- Events ---

/// Messages from a running invocation back to the UI loop. `id` identifies
/// the invocation so the shell can drop events from superseded runs.
#[derive(Debug, Clone, PartialEq)]
pub enum ToolEvent {
    PortProgress { id: u64, result: PortResult },
    Completed { id: u64, output: ToolOutput, finished_at: DateTime<Utc> },
}

impl ToolEvent {
    pub fn id(&self) -> u64 {
        match self {
            Self::PortProgress { id, .. } | Self::Completed { id, .. } => *id,
        }
    }
}
