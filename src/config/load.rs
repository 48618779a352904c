use crate::config::types::{Config, UserSettings};
use anyhow::{Context, Result};
use log::warn;
use std::fs;
use std::path::Path;

/// 設定檔名稱（位於目前工作目錄）
pub const SETTINGS_FILE: &str = "settings.json";

impl Config {
    pub fn new() -> Result<Self> {
        let settings = load_settings(Path::new(SETTINGS_FILE)).unwrap_or_else(|e| {
            warn!("無法載入設定，使用預設值: {e:#}");
            UserSettings::default()
        });

        Ok(Self { settings })
    }
}

pub fn load_settings(path: &Path) -> Result<UserSettings> {
    if !path.exists() {
        return Ok(UserSettings::default());
    }

    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read settings from {}", path.display()))?;

    serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse settings from {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::types::OrderMode;
    use tempfile::TempDir;

    #[test]
    fn test_load_missing_settings_is_default() {
        let temp_dir = TempDir::new().unwrap();
        let settings = load_settings(&temp_dir.path().join(SETTINGS_FILE)).unwrap();
        assert_eq!(settings, UserSettings::default());
    }

    #[test]
    fn test_load_invalid_settings_fails() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join(SETTINGS_FILE);
        fs::write(&path, "{ not json").unwrap();
        assert!(load_settings(&path).is_err());
    }

    #[test]
    fn test_load_settings() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join(SETTINGS_FILE);
        fs::write(&path, r#"{"order_mode":"random","recent_paths":["/a"]}"#).unwrap();

        let settings = load_settings(&path).unwrap();
        assert_eq!(settings.order_mode, OrderMode::Random);
        assert_eq!(settings.recent_paths, vec!["/a".to_string()]);
    }
}
