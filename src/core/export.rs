// src/core/export.rs

use std::io;
use std::path::{Path, PathBuf};

use tracing::info;

use crate::core::models::SubdomainReport;

/// File name used for a report, `<domain>_subdomains.txt`. Path separators
/// in the domain are replaced so the file always lands in the target dir.
pub fn export_file_name(domain: &str) -> String {
    let safe: String = domain
        .chars()
        .map(|c| if matches!(c, '/' | '\\') { '_' } else { c })
        .collect();
    format!("{safe}_subdomains.txt")
}

/// Writes one subdomain per line into `dir` and returns the file path.
/// An existing file with the same name is overwritten.
pub fn export_subdomains(dir: &Path, report: &SubdomainReport) -> io::Result<PathBuf> {
    std::fs::create_dir_all(dir)?;
    let path = dir.join(export_file_name(&report.domain));
    std::fs::write(&path, report.subdomains.join("\n"))?;
    info!(path = %path.display(), count = report.subdomains.len(), "Subdomains exported.");
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn file_name_is_sanitized() {
        assert_eq!(export_file_name("example.com"), "example.com_subdomains.txt");
        assert_eq!(export_file_name("../x\\y"), ".._x_y_subdomains.txt");
    }
}
