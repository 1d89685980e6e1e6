//! The static catalog of every tool the shell offers.
//! Sidebar order, grouping and labels all come from this table, so adding a
//! tool means adding a `ToolKind` variant and one entry here.

use std::fmt;

use crate::core::models::ToolKind;

/// Sidebar sections.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ToolCategory {
    Reconnaissance,
    Encoding,
    Obfuscation,
    Security,
}

impl ToolCategory {
    pub const ALL: [ToolCategory; 4] = [
        ToolCategory::Reconnaissance,
        ToolCategory::Encoding,
        ToolCategory::Obfuscation,
        ToolCategory::Security,
    ];
}

impl fmt::Display for ToolCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ToolCategory::Reconnaissance => write!(f, "Reconnaissance"),
            ToolCategory::Encoding => write!(f, "Encoding/Decoding"),
            ToolCategory::Obfuscation => write!(f, "Code Obfuscation"),
            ToolCategory::Security => write!(f, "Security Tools"),
        }
    }
}

/// Display data for one tool.
pub struct ToolDetail {
    pub kind: ToolKind,
    /// Name shown in the sidebar and as the panel title.
    pub name: &'static str,
    /// One-line summary shown under the name.
    pub description: &'static str,
    pub category: ToolCategory,
}

/// Every tool, in sidebar order.
static TOOLS: &[ToolDetail] = &[
    // --- Reconnaissance ---
    ToolDetail {
        kind: ToolKind::SubdomainFinder,
        name: "Subdomain Finder",
        description: "Discover subdomains",
        category: ToolCategory::Reconnaissance,
    },
    ToolDetail {
        kind: ToolKind::WhoisLookup,
        name: "Whois Lookup",
        description: "Domain information",
        category: ToolCategory::Reconnaissance,
    },
    ToolDetail {
        kind: ToolKind::DnsLookup,
        name: "DNS Lookup",
        description: "DNS records",
        category: ToolCategory::Reconnaissance,
    },
    ToolDetail {
        kind: ToolKind::ReverseIp,
        name: "Reverse IP",
        description: "Find domains on IP",
        category: ToolCategory::Reconnaissance,
    },
    ToolDetail {
        kind: ToolKind::IpGeolocation,
        name: "IP Geolocation",
        description: "Locate IP address",
        category: ToolCategory::Reconnaissance,
    },
    ToolDetail {
        kind: ToolKind::PortScanner,
        name: "Port Scanner",
        description: "Scan open ports",
        category: ToolCategory::Reconnaissance,
    },
    // --- Encoding/Decoding ---
    ToolDetail {
        kind: ToolKind::Md5Tool,
        name: "MD5 Tool",
        description: "MD5 hash operations",
        category: ToolCategory::Encoding,
    },
    ToolDetail {
        kind: ToolKind::Base64Tool,
        name: "Base64 Tool",
        description: "Base64 encode/decode",
        category: ToolCategory::Encoding,
    },
    ToolDetail {
        kind: ToolKind::ShaTool,
        name: "SHA Tool",
        description: "SHA hash operations",
        category: ToolCategory::Encoding,
    },
    ToolDetail {
        kind: ToolKind::UrlTool,
        name: "URL Tool",
        description: "URL encode/decode",
        category: ToolCategory::Encoding,
    },
    ToolDetail {
        kind: ToolKind::HexTool,
        name: "HEX Tool",
        description: "Hexadecimal operations",
        category: ToolCategory::Encoding,
    },
    ToolDetail {
        kind: ToolKind::Rot13Tool,
        name: "ROT13 Tool",
        description: "ROT13 cipher",
        category: ToolCategory::Encoding,
    },
    // --- Code Obfuscation ---
    ToolDetail {
        kind: ToolKind::PythonObfuscator,
        name: "Python Obfuscator",
        description: "Obfuscate Python code",
        category: ToolCategory::Obfuscation,
    },
    ToolDetail {
        kind: ToolKind::PhpObfuscator,
        name: "PHP Obfuscator",
        description: "Obfuscate PHP code",
        category: ToolCategory::Obfuscation,
    },
    // --- Security Tools ---
    ToolDetail {
        kind: ToolKind::PasswordGenerator,
        name: "Password Generator",
        description: "Generate secure passwords",
        category: ToolCategory::Security,
    },
    ToolDetail {
        kind: ToolKind::HashCracker,
        name: "Hash Cracker",
        description: "Crack common hashes",
        category: ToolCategory::Security,
    },
];

/// Looks up the catalog entry for `kind`.
///
/// Every `ToolKind` has exactly one entry, which the tests below enforce, so
/// the fallback to the first entry is never taken in practice.
pub fn get_tool_detail(kind: ToolKind) -> &'static ToolDetail {
    TOOLS.iter().find(|t| t.kind == kind).unwrap_or(&TOOLS[0])
}

/// The tools of one category, in sidebar order.
pub fn tools_in(category: ToolCategory) -> impl Iterator<Item = &'static ToolDetail> {
    TOOLS.iter().filter(move |t| t.category == category)
}

/// Position of `kind` in sidebar order.
pub fn position(kind: ToolKind) -> usize {
    TOOLS.iter().position(|t| t.kind == kind).unwrap_or(0)
}

/// The tool `offset` entries away from `kind`, wrapping at both ends.
pub fn step(kind: ToolKind, offset: isize) -> ToolKind {
    let len = TOOLS.len() as isize;
    let index = (position(kind) as isize + offset).rem_euclid(len);
    TOOLS[index as usize].kind
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::{EnumCount, IntoEnumIterator};

    #[test]
    fn every_tool_has_exactly_one_entry() {
        assert_eq!(TOOLS.len(), ToolKind::COUNT);
        for kind in ToolKind::iter() {
            assert_eq!(TOOLS.iter().filter(|t| t.kind == kind).count(), 1, "{kind:?}");
            assert_eq!(get_tool_detail(kind).kind, kind);
        }
    }

    #[test]
    fn categories_are_contiguous_and_ordered() {
        let order: Vec<ToolCategory> = TOOLS.iter().map(|t| t.category).collect();
        let mut sorted = order.clone();
        sorted.sort();
        assert_eq!(order, sorted);
        assert_eq!(tools_in(ToolCategory::Reconnaissance).count(), 6);
        assert_eq!(tools_in(ToolCategory::Encoding).count(), 6);
        assert_eq!(tools_in(ToolCategory::Obfuscation).count(), 2);
        assert_eq!(tools_in(ToolCategory::Security).count(), 2);
    }

    #[test]
    fn stepping_wraps_around() {
        assert_eq!(step(ToolKind::SubdomainFinder, -1), ToolKind::HashCracker);
        assert_eq!(step(ToolKind::HashCracker, 1), ToolKind::SubdomainFinder);
        assert_eq!(step(ToolKind::PortScanner, 1), ToolKind::Md5Tool);
    }

    #[test]
    fn category_labels() {
        assert_eq!(ToolCategory::Encoding.to_string(), "Encoding/Decoding");
        assert_eq!(get_tool_detail(ToolKind::HexTool).name, "HEX Tool");
    }
}
