// src/config.rs

use std::path::{Path, PathBuf};

use color_eyre::eyre::{Result, WrapErr};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::logging::{PROJECT_NAME, project_directory};

pub const CONFIG_FILE: &str = "config.json";

/// User settings. Every field is optional in `config.json`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    /// Base URL of the certificate-transparency service.
    #[serde(default = "default_crtsh_url")]
    pub crtsh_url: String,

    #[serde(default = "default_request_timeout")]
    pub request_timeout_secs: u64,

    /// Multiplier for the simulated delays. `0` turns them off.
    #[serde(default = "default_delay_scale")]
    pub delay_scale: f64,

    /// Where exported subdomain lists are written.
    #[serde(default = "default_export_dir")]
    pub export_dir: PathBuf,

    #[serde(default = "default_true")]
    pub show_disclaimer: bool,
}

fn default_crtsh_url() -> String {
    "https://crt.sh".to_string()
}

fn default_request_timeout() -> u64 {
    30
}

fn default_delay_scale() -> f64 {
    1.0
}

fn default_export_dir() -> PathBuf {
    PathBuf::from(".")
}

fn default_true() -> bool {
    true
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            crtsh_url: default_crtsh_url(),
            request_timeout_secs: default_request_timeout(),
            delay_scale: default_delay_scale(),
            export_dir: default_export_dir(),
            show_disclaimer: default_true(),
        }
    }
}

pub fn get_config_dir() -> PathBuf {
    if let Some(proj_dirs) = project_directory() {
        proj_dirs.config_local_dir().to_path_buf()
    } else {
        PathBuf::from(".").join(".config")
    }
}

impl Settings {
    /// Reads `config.json` from the project config dir, then applies the
    /// environment overrides.
    pub fn load() -> Result<Self> {
        let path = get_config_dir().join(CONFIG_FILE);
        let mut settings = Self::from_file(&path)?;
        settings.apply_overrides(|key| std::env::var(key).ok());
        Ok(settings)
    }

    /// Parses the file at `path`. A missing file yields the defaults; a
    /// malformed one is an error.
    pub fn from_file(path: &Path) -> Result<Self> {
        if !path.exists() {
            info!(path = %path.display(), "No config file, using defaults.");
            return Ok(Self::default());
        }
        let raw = std::fs::read_to_string(path)
            .wrap_err_with(|| format!("could not read {}", path.display()))?;
        let settings = serde_json::from_str(&raw)
            .wrap_err_with(|| format!("invalid configuration in {}", path.display()))?;
        info!(path = %path.display(), "Configuration loaded.");
        Ok(settings)
    }

    /// Applies `<PROJECT>_*` overrides. `lookup` returns the value of an
    /// environment variable, if set. Unparsable numbers are ignored.
    pub fn apply_overrides<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        let key = |suffix: &str| format!("{}_{suffix}", PROJECT_NAME.as_str());

        if let Some(url) = lookup(&key("CRTSH_URL")) {
            self.crtsh_url = url;
        }
        if let Some(raw) = lookup(&key("REQUEST_TIMEOUT")) {
            match raw.trim().parse() {
                Ok(secs) => self.request_timeout_secs = secs,
                Err(_) => warn!(value = %raw, "Ignoring invalid request timeout override."),
            }
        }
        if let Some(raw) = lookup(&key("DELAY_SCALE")) {
            match raw.trim().parse::<f64>() {
                Ok(scale) if scale.is_finite() && scale >= 0.0 => self.delay_scale = scale,
                _ => warn!(value = %raw, "Ignoring invalid delay scale override."),
            }
        }
        if let Some(dir) = lookup(&key("EXPORT_DIR")) {
            self.export_dir = PathBuf::from(dir);
        }
    }
}
