use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::{fs, path::PathBuf};
use tracing::debug;

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct ProviderConfig {
    pub base_url: String,
}

impl Default for ProviderConfig {
    fn default() -> Self {
        ProviderConfig {
            base_url: "https://api.coingecko.com".to_string(),
        }
    }
}

fn default_vs_currency() -> String {
    "usd".to_string()
}

fn default_per_page() -> u32 {
    15
}

fn default_refresh_secs() -> u64 {
    15
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct AppConfig {
    #[serde(default)]
    pub provider: ProviderConfig,
    /// Quote currency for prices, volumes and caps.
    #[serde(default = "default_vs_currency")]
    pub vs_currency: String,
    /// How many top assets to list per refresh.
    #[serde(default = "default_per_page")]
    pub per_page: u32,
    /// Seconds between live-view refreshes.
    #[serde(default = "default_refresh_secs")]
    pub refresh_secs: u64,
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            provider: ProviderConfig::default(),
            vs_currency: default_vs_currency(),
            per_page: default_per_page(),
            refresh_secs: default_refresh_secs(),
        }
    }
}

impl AppConfig {
    pub fn load() -> Result<Self> {
        debug!("Loading default config");
        let config_path = Self::default_config_path()?;
        if !config_path.exists() {
            debug!("No config file found, using defaults");
            return Ok(Self::default());
        }
        Self::load_from_path(&config_path)
    }

    pub fn default_config_path() -> Result<PathBuf> {
        let proj_dirs = ProjectDirs::from("io", "coinradar", "coinradar")
            .context("Could not determine project directories")?;
        Ok(proj_dirs.config_dir().join("config.yaml"))
    }

    pub fn load_from_path<P: AsRef<std::path::Path>>(path: P) -> Result<Self> {
        let config_str = fs::read_to_string(path.as_ref())
            .with_context(|| format!("Failed to read config file: {}", path.as_ref().display()))?;

        let config: Self = serde_yaml::from_str(&config_str)
            .with_context(|| format!("Failed to parse config file: {}", path.as_ref().display()))?;
        debug!("Successfully loaded config");
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_deserialization() {
        let yaml_str = r#"
provider:
  base_url: "http://example.com/gecko"
vs_currency: "eur"
per_page: 25
refresh_secs: 30
"#;

        let config: AppConfig = serde_yaml::from_str(yaml_str).expect("Failed to deserialize");
        assert_eq!(config.provider.base_url, "http://example.com/gecko");
        assert_eq!(config.vs_currency, "eur");
        assert_eq!(config.per_page, 25);
        assert_eq!(config.refresh_secs, 30);
    }

    #[test]
    fn test_config_defaults() {
        let config: AppConfig = serde_yaml::from_str("{}").expect("Failed to deserialize");
        assert_eq!(config.provider.base_url, "https://api.coingecko.com");
        assert_eq!(config.vs_currency, "usd");
        assert_eq!(config.per_page, 15);
        assert_eq!(config.refresh_secs, 15);

        let partial: AppConfig =
            serde_yaml::from_str("vs_currency: inr").expect("Failed to deserialize");
        assert_eq!(partial.vs_currency, "inr");
        assert_eq!(partial.per_page, 15);
    }

    #[test]
    fn test_load_from_missing_path_errors_with_context() {
        let err = AppConfig::load_from_path("/nonexistent/config.yaml").unwrap_err();
        assert!(err.to_string().contains("/nonexistent/config.yaml"));
    }
}
