// src/logging.rs

use std::path::{Path, PathBuf};

use color_eyre::eyre::Result;
use directories::ProjectDirs;
use lazy_static::lazy_static;
use time::macros::format_description;
use tracing_error::ErrorLayer;
use tracing_subscriber::{
    self, EnvFilter, Layer, fmt::time::LocalTime, layer::SubscriberExt, util::SubscriberInitExt,
};

lazy_static! {
    pub static ref PROJECT_NAME: String = env!("CARGO_CRATE_NAME").to_uppercase().to_string();
    pub static ref LOG_ENV: String = format!("{}_LOGLEVEL", PROJECT_NAME.clone());
    pub static ref LOG_FILE: String = format!("{}.log", env!("CARGO_PKG_NAME"));
}

pub fn project_directory() -> Option<ProjectDirs> {
    ProjectDirs::from("com", "cyberkit-rs", env!("CARGO_PKG_NAME"))
}

pub fn get_data_dir() -> PathBuf {
    if let Some(proj_dirs) = project_directory() {
        proj_dirs.data_local_dir().to_path_buf()
    } else {
        PathBuf::from(".").join(".data")
    }
}

pub fn log_path() -> PathBuf {
    get_data_dir().join(LOG_FILE.clone())
}

/// Initializes file-based logging using the tracing subscriber.
///
/// Lines look like `2025-01-31 14:02:11  INFO Subdomain lookup finished. ...`,
/// which is the shape the log panel expects.
pub fn initialize_logging() -> Result<()> {
    let directory = get_data_dir();
    std::fs::create_dir_all(&directory)?;
    let log_file = std::fs::File::create(log_path())?;

    let file_log_level = std::env::var("RUST_LOG")
        .or_else(|_| std::env::var(LOG_ENV.clone()))
        .unwrap_or_else(|_| format!("{}=info", env!("CARGO_CRATE_NAME")));

    let timer = LocalTime::new(format_description!("[year]-[month]-[day] [hour]:[minute]:[second]"));

    let file_subscriber = tracing_subscriber::fmt::layer()
        .with_writer(log_file)
        .with_timer(timer)
        .with_target(false)
        .with_ansi(false)
        .with_filter(EnvFilter::new(file_log_level));

    tracing_subscriber::registry()
        .with(file_subscriber)
        .with(ErrorLayer::default())
        .init();

    Ok(())
}

/// The last `max_lines` lines of the file at `path`. A missing or unreadable
/// file yields nothing.
pub fn read_log_tail(path: &Path, max_lines: usize) -> Vec<String> {
    let Ok(content) = std::fs::read_to_string(path) else {
        return Vec::new();
    };
    let lines: Vec<&str> = content.lines().collect();
    let start = lines.len().saturating_sub(max_lines);
    lines[start..].iter().map(|l| l.to_string()).collect()
}

/// Tail of the log file, re-read only when the file length changes.
#[derive(Debug, Default)]
pub struct LogTail {
    pub lines: Vec<String>,
    len: Option<u64>,
}

impl LogTail {
    pub fn reload(&mut self, path: &Path, max_lines: usize) {
        self.len = file_len(path);
        self.lines = read_log_tail(path, max_lines);
    }

    /// Returns `true` if the file had changed and was read again.
    pub fn refresh(&mut self, path: &Path, max_lines: usize) -> bool {
        if file_len(path) == self.len {
            return false;
        }
        self.reload(path, max_lines);
        true
    }
}

fn file_len(path: &Path) -> Option<u64> {
    std::fs::metadata(path).ok().map(|meta| meta.len())
}
