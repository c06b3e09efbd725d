use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{ClientError, Result};

/// Environment variable that overrides the configured server URL.
pub const SERVER_URL_ENV: &str = "PK_SERVER_URL";

/// Generator controls used when no flag overrides them
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeneratorDefaults {
    #[serde(default = "default_length")]
    pub length: i64,

    #[serde(default = "default_true")]
    pub include_upper: bool,

    #[serde(default = "default_true")]
    pub include_lower: bool,

    #[serde(default = "default_true")]
    pub include_numbers: bool,

    #[serde(default = "default_true")]
    pub include_symbols: bool,
}

fn default_length() -> i64 {
    16
}

fn default_true() -> bool {
    true
}

impl Default for GeneratorDefaults {
    fn default() -> Self {
        Self {
            length: default_length(),
            include_upper: true,
            include_lower: true,
            include_numbers: true,
            include_symbols: true,
        }
    }
}

/// Configuration settings for passkit
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    #[serde(default = "default_server_url")]
    pub server_url: String,

    #[serde(default)]
    pub generator: GeneratorDefaults,
}

fn default_server_url() -> String {
    "http://localhost:8080".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server_url: default_server_url(),
            generator: GeneratorDefaults::default(),
        }
    }
}

impl Config {
    /// Get the config file path (~/.passkit.json)
    fn config_file_path() -> Result<PathBuf> {
        dirs::home_dir()
            .map(|home| home.join(".passkit.json"))
            .ok_or_else(|| ClientError::Config("could not find home directory".to_string()))
    }

    /// Ensure the config file exists, creating it with defaults if not
    fn ensure_config_file(path: &Path) -> Result<()> {
        if !path.exists() {
            let data = serde_json::to_string_pretty(&Config::default())?;
            fs::write(path, data)?;
        }
        Ok(())
    }

    /// Load configuration from file, merging with defaults
    pub fn load() -> Result<Self> {
        let config_path = Self::config_file_path()?;
        Self::ensure_config_file(&config_path)?;

        let content = fs::read_to_string(&config_path)?;
        let mut config: Config = serde_json::from_str(&content)?;

        if let Ok(url) = std::env::var(SERVER_URL_ENV) {
            if !url.trim().is_empty() {
                config.server_url = url.trim().to_string();
            }
        }

        Ok(config)
    }

    /// Load configuration, falling back to defaults with a warning on failure.
    pub fn load_or_default() -> Self {
        match Self::load() {
            Ok(config) => config,
            Err(err) => {
                tracing::warn!("failed to load config: {err}, using defaults");
                Self::default()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_config_deserializes_to_defaults() {
        let config: Config = serde_json::from_str("{}").unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.server_url, "http://localhost:8080");
    }

    #[test]
    fn partial_generator_section_keeps_other_defaults() {
        let json = r#"{
            "serverUrl": "https://pk.example.com",
            "generator": { "length": 24, "includeSymbols": false }
        }"#;
        let config: Config = serde_json::from_str(json).unwrap();
        assert_eq!(config.server_url, "https://pk.example.com");
        assert_eq!(config.generator.length, 24);
        assert!(!config.generator.include_symbols);
        assert!(config.generator.include_upper);
        assert!(config.generator.include_numbers);
    }

    #[test]
    fn config_serializes_with_camel_case_keys() {
        let value = serde_json::to_value(Config::default()).unwrap();
        assert!(value.get("serverUrl").is_some());
        assert!(value["generator"].get("includeUpper").is_some());
    }
}
