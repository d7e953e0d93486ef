//! Configuration management for iZiwei CLI
//!
//! Stores API key, server URL and report defaults in ~/.config/iziwei/config.toml

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

use iziwei::Gender;

const CONFIG_DIR: &str = "iziwei";
const CONFIG_FILE: &str = "config.toml";

/// CLI Configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,
    #[serde(default = "default_base_url")]
    pub base_url: String,
    #[serde(default)]
    pub default_gender: Gender,
    /// Where `--save` writes reports; current directory when unset
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output_dir: Option<PathBuf>,
}

fn default_base_url() -> String {
    "http://localhost:8080".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: default_base_url(),
            default_gender: Gender::default(),
            output_dir: None,
        }
    }
}

impl Config {
    /// Get the config directory path
    pub fn config_dir() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .context("Could not determine config directory")?
            .join(CONFIG_DIR);
        Ok(config_dir)
    }

    /// Get the config file path
    pub fn config_path() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join(CONFIG_FILE))
    }

    /// Load config from file, or create default
    pub fn load() -> Result<Self> {
        let path = Self::config_path()?;

        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config from {:?}", path))?;

        Self::parse(&content)
    }

    fn parse(content: &str) -> Result<Self> {
        toml::from_str(content).with_context(|| "Failed to parse config file")
    }

    /// Save config to file
    pub fn save(&self) -> Result<()> {
        let dir = Self::config_dir()?;
        fs::create_dir_all(&dir)
            .with_context(|| format!("Failed to create config directory {:?}", dir))?;

        let path = Self::config_path()?;
        let content = toml::to_string_pretty(self).context("Failed to serialize config")?;

        fs::write(&path, content)
            .with_context(|| format!("Failed to write config to {:?}", path))?;

        Ok(())
    }

    /// Set API key
    pub fn set_api_key(&mut self, key: String) {
        self.api_key = Some(key);
    }

    /// Directory for saved reports
    pub fn report_dir(&self) -> PathBuf {
        self.output_dir.clone().unwrap_or_else(|| PathBuf::from("."))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_file_uses_defaults() {
        let config = Config::parse("").unwrap();
        assert_eq!(config.base_url, "http://localhost:8080");
        assert_eq!(config.default_gender, Gender::Male);
        assert!(config.api_key.is_none());
        assert_eq!(config.report_dir(), PathBuf::from("."));
    }

    #[test]
    fn test_round_trip_keeps_settings() {
        let mut config = Config::default();
        config.set_api_key("secret".to_string());
        config.default_gender = Gender::Female;
        config.output_dir = Some(PathBuf::from("/tmp/reports"));

        let text = toml::to_string_pretty(&config).unwrap();
        assert!(text.contains("default_gender = \"女\""));

        let back = Config::parse(&text).unwrap();
        assert_eq!(back.api_key.as_deref(), Some("secret"));
        assert_eq!(back.default_gender, Gender::Female);
        assert_eq!(back.report_dir(), PathBuf::from("/tmp/reports"));
    }
}
