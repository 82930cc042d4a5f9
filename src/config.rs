use crate::model::OutputSize;
use serde::Deserialize;
use std::fs;
use std::path::Path;
use std::time::Duration;
use thiserror::Error;

pub const API_KEY_ENV: &str = "ALPHAVANTAGE_API_KEY";
pub const CONFIG_PATH_ENV: &str = "STOCK_TRACKER_CONFIG";
pub const DEFAULT_CONFIG_PATH: &str = "config.json";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse config: {0}")]
    Json(#[from] serde_json::Error),
    #[error("no API key configured (set `api_key` or {API_KEY_ENV})")]
    MissingApiKey,
    #[error("rsi_window must be at least 1")]
    InvalidWindow,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputSizeConfig {
    Compact,
    Full,
}

impl From<OutputSizeConfig> for OutputSize {
    fn from(value: OutputSizeConfig) -> Self {
        match value {
            OutputSizeConfig::Compact => OutputSize::Compact,
            OutputSizeConfig::Full => OutputSize::Full,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub api_key: String,
    pub base_url: String,
    pub min_request_interval_seconds: u64,
    pub rsi_window: usize,
    pub output_size: OutputSizeConfig,
    pub request_timeout_seconds: u64,
    /// Keep empty provider results cached for the rest of the run.
    pub cache_empty_results: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            base_url: "https://www.alphavantage.co/query".to_string(),
            min_request_interval_seconds: 60,
            rsi_window: 14,
            output_size: OutputSizeConfig::Compact,
            request_timeout_seconds: 30,
            cache_empty_results: true,
        }
    }
}

impl AppConfig {
    pub fn min_request_interval(&self) -> Duration {
        Duration::from_secs(self.min_request_interval_seconds)
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_seconds)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.api_key.trim().is_empty() {
            return Err(ConfigError::MissingApiKey);
        }
        if self.rsi_window == 0 {
            return Err(ConfigError::InvalidWindow);
        }
        Ok(())
    }
}

/// Loads the config file (defaults when it does not exist) and applies the API key override.
pub fn load_config(path: &str, api_key_override: Option<String>) -> Result<AppConfig, ConfigError> {
    let mut config = if Path::new(path).exists() {
        let content = fs::read_to_string(path)?;
        serde_json::from_str::<AppConfig>(&content)?
    } else {
        tracing::warn!("Config file {} not found, using defaults", path);
        AppConfig::default()
    };

    if let Some(key) = api_key_override.filter(|k| !k.trim().is_empty()) {
        config.api_key = key;
    }

    config.validate()?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_temp(name: &str, body: &str) -> String {
        let path = std::env::temp_dir().join(format!("stock-rsi-tracker-{}-{}.json", name, std::process::id()));
        let mut file = fs::File::create(&path).unwrap();
        file.write_all(body.as_bytes()).unwrap();
        path.to_string_lossy().into_owned()
    }

    #[test]
    fn partial_file_uses_defaults() {
        let path = write_temp("partial", r#"{ "api_key": "demo" }"#);
        let config = load_config(&path, None).unwrap();
        assert_eq!(config.api_key, "demo");
        assert_eq!(config.min_request_interval(), Duration::from_secs(60));
        assert_eq!(config.rsi_window, 14);
        assert_eq!(config.output_size, OutputSizeConfig::Compact);
        assert!(config.cache_empty_results);
        fs::remove_file(path).ok();
    }

    #[test]
    fn override_wins_over_file() {
        let path = write_temp("override", r#"{ "api_key": "from-file", "output_size": "full" }"#);
        let config = load_config(&path, Some("from-env".into())).unwrap();
        assert_eq!(config.api_key, "from-env");
        assert_eq!(OutputSize::from(config.output_size), OutputSize::Full);
        fs::remove_file(path).ok();
    }

    #[test]
    fn missing_file_without_key_is_rejected() {
        let err = load_config("/nonexistent/stock-rsi-tracker.json", None).unwrap_err();
        assert!(matches!(err, ConfigError::MissingApiKey));
    }

    #[test]
    fn zero_window_is_rejected() {
        let path = write_temp("window", r#"{ "api_key": "demo", "rsi_window": 0 }"#);
        let err = load_config(&path, None).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidWindow));
        fs::remove_file(path).ok();
    }

    #[test]
    fn malformed_file_is_reported() {
        let path = write_temp("broken", "{ not json");
        let err = load_config(&path, Some("demo".into())).unwrap_err();
        assert!(matches!(err, ConfigError::Json(_)));
        fs::remove_file(path).ok();
    }
}
