use anyhow::{Context, Result};
use std::fs::OpenOptions;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Parse a RUST_LOG value. Blank or unparsable filters disable logging.
pub fn parse_filter(raw: Option<&str>) -> Option<EnvFilter> {
    let raw = raw?.trim();
    if raw.is_empty() || raw.len() > 4096 {
        return None;
    }
    EnvFilter::try_new(raw).ok()
}

/// Install the tracing subscriber.
///
/// Tracing is opt-in via RUST_LOG. The terminal belongs to the TUI, so
/// events go to a file rather than stderr. Returns the file in use.
pub fn init(log_path: Option<&Path>) -> Result<Option<PathBuf>> {
    let raw = std::env::var("RUST_LOG").ok();
    let Some(filter) = parse_filter(raw.as_deref()) else {
        return Ok(None);
    };

    let path = match log_path {
        Some(path) => path.to_path_buf(),
        None => crate::config::log_file()?,
    };
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .with_context(|| format!("Failed to open log file: {}", path.display()))?;

    tracing_subscriber::registry()
        .with(fmt::layer().with_ansi(false).with_writer(Mutex::new(file)))
        .with(filter)
        .try_init()
        .context("Failed to install tracing subscriber")?;

    Ok(Some(path))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_filter() {
        assert!(parse_filter(None).is_none());
        assert!(parse_filter(Some("   ")).is_none());
        assert!(parse_filter(Some(&"x".repeat(5000))).is_none());
        assert!(parse_filter(Some("trakr=debug")).is_some());
    }
}
