use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Main application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    // Telegram
    pub bot_token: String,
    pub poll_timeout_secs: u64,

    // OCR
    pub ocr_engine: String,
    pub ocr_languages: String,
    pub ocr_timeout_secs: u64,

    // Meta
    pub log_level: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            bot_token: "".to_string(),
            poll_timeout_secs: 30,
            ocr_engine: "tesseract".to_string(),
            // Fixed language hints, not per-request
            ocr_languages: "rus+eng".to_string(),
            ocr_timeout_secs: 60,
            log_level: "INFO".to_string(),
        }
    }
}

impl Config {
    /// Load config from file or create default
    pub fn load() -> Result<Self> {
        let config_path = config_path();

        if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)?;
            match serde_json::from_str(&content) {
                Ok(config) => Ok(config),
                Err(e) => {
                    // Graceful degradation: log warning and use defaults
                    tracing::warn!("⚠️ Config file corrupted or invalid, using defaults: {}", e);
                    // Backup corrupt file for debugging
                    let backup_path = config_path.with_extension("json.corrupt");
                    let _ = std::fs::rename(&config_path, &backup_path);
                    Ok(Self::default())
                }
            }
        } else {
            let config = Self::default();
            let _ = config.save();
            Ok(config)
        }
    }

    /// Save config to file
    pub fn save(&self) -> Result<()> {
        let config_path = config_path();

        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(&config_path, content)?;
        Ok(())
    }

}

/// Path to the config file
pub fn config_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from(".config"))
        .join("snapscribe")
        .join("config.json")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.ocr_engine, "tesseract");
        assert_eq!(config.ocr_languages, "rus+eng");
        assert_eq!(config.ocr_timeout_secs, 60);
    }

    #[test]
    fn test_config_roundtrip() {
        let config = Config::default();
        let json = serde_json::to_string(&config).unwrap();
        let parsed: Config = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.poll_timeout_secs, config.poll_timeout_secs);
    }

    #[test]
    fn test_unknown_fields_rejected_gracefully() {
        // A corrupt or future-version file should not parse as Config
        let result: Result<Config, _> = serde_json::from_str("{\"bot_token\": 42}");
        assert!(result.is_err());
    }
}
