use crate::domain::Theme;
use crate::ticker::DEFAULT_POLL_MS;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

pub const DEFAULT_PAGE_TITLE: &str = "Product Design Tasks";

/// How long the completion celebration stays on screen
pub const DEFAULT_CELEBRATION_SECS: u64 = 4;

/// User settings stored in config.json
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub page_title: String,
    pub theme: Theme,
    pub celebration_secs: u64,
    /// Start with the example tasks instead of an empty list
    pub seed_examples: bool,
    pub notify_on_complete: bool,
    pub poll_ms: u64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            page_title: DEFAULT_PAGE_TITLE.to_string(),
            theme: Theme::Light,
            celebration_secs: DEFAULT_CELEBRATION_SECS,
            seed_examples: true,
            notify_on_complete: false,
            poll_ms: DEFAULT_POLL_MS,
        }
    }
}

/// Load settings from a config.json file
pub fn load_settings<P: AsRef<Path>>(path: P) -> Result<Settings> {
    let path = path.as_ref();

    // If file doesn't exist, return default settings
    let Some(content) = super::read_file(path)? else {
        return Ok(Settings::default());
    };

    let settings: Settings = serde_json::from_str(&content)
        .with_context(|| format!("Invalid config file: {}", path.display()))?;
    Ok(settings)
}

/// Save settings to a config.json file
pub fn save_settings<P: AsRef<Path>>(path: P, settings: &Settings) -> Result<()> {
    let json = serde_json::to_string_pretty(settings)?;
    super::atomic_write(path, &json)?;
    Ok(())
}

/// Write a default config.json, refusing to clobber an existing one
pub fn init_config<P: AsRef<Path>>(path: P) -> Result<()> {
    let path = path.as_ref();
    if path.exists() {
        anyhow::bail!("Config file already exists: {}", path.display());
    }
    save_settings(path, &Settings::default())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tempfile::tempdir;

    #[test]
    fn test_load_nonexistent_settings() {
        let temp_dir = tempdir().unwrap();
        let path = temp_dir.path().join("config.json");

        let settings = load_settings(&path).unwrap();
        assert_eq!(settings, Settings::default());
        assert_eq!(settings.page_title, "Product Design Tasks");
        assert_eq!(settings.celebration_secs, 4);
    }

    #[test]
    fn test_save_and_load_settings() {
        let temp_dir = tempdir().unwrap();
        let path = temp_dir.path().join("config.json");

        let settings = Settings {
            page_title: "Sprint 12".to_string(),
            theme: Theme::Dark,
            celebration_secs: 2,
            seed_examples: false,
            notify_on_complete: true,
            poll_ms: 100,
        };
        save_settings(&path, &settings).unwrap();

        assert_eq!(load_settings(&path).unwrap(), settings);
    }

    #[test]
    fn test_partial_settings_fill_defaults() {
        let temp_dir = tempdir().unwrap();
        let path = temp_dir.path().join("config.json");
        std::fs::write(&path, r#"{ "theme": "dark" }"#).unwrap();

        let settings = load_settings(&path).unwrap();
        assert_eq!(settings.theme, Theme::Dark);
        assert_eq!(settings.page_title, DEFAULT_PAGE_TITLE);
        assert!(settings.seed_examples);
    }

    #[test]
    fn test_invalid_settings_is_an_error() {
        let temp_dir = tempdir().unwrap();
        let path = temp_dir.path().join("config.json");
        std::fs::write(&path, "not json").unwrap();

        let err = load_settings(&path).unwrap_err();
        assert!(err.to_string().contains("Invalid config file"));
    }

    #[test]
    fn test_init_config_refuses_overwrite() {
        let temp_dir = tempdir().unwrap();
        let path = temp_dir.path().join("config.json");

        init_config(&path).unwrap();
        assert_eq!(load_settings(&path).unwrap(), Settings::default());
        assert!(init_config(&path).is_err());
    }
}
