use anyhow::{anyhow, Result};
use serde::{Deserialize, Serialize};
use tokio::fs;
use tracing::debug;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    #[serde(default = "default_database_path")]
    pub database_path: String,
    #[serde(default = "default_tick_interval")]
    pub tick_interval_seconds: u64,
    /// Empty string disables push notifications
    #[serde(default)]
    pub status_webhook_url: String,
    #[serde(default = "default_banner_message")]
    pub banner_message: String,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8098
}

fn default_database_path() -> String {
    "data/maintenance.db".to_string()
}

fn default_tick_interval() -> u64 {
    1
}

fn default_banner_message() -> String {
    "Scheduled maintenance begins in".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            database_path: default_database_path(),
            tick_interval_seconds: default_tick_interval(),
            status_webhook_url: String::new(),
            banner_message: default_banner_message(),
        }
    }
}

impl Config {
    pub async fn load(path: &str) -> Result<Self> {
        debug!("Loading configuration from {}", path);

        let content = fs::read_to_string(path)
            .await
            .map_err(|e| anyhow!("Failed to read config {}: {}", path, e))?;

        let config: Config = toml::from_str(&content)
            .map_err(|e| anyhow!("Failed to parse config {}: {}", path, e))?;

        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<()> {
        if self.tick_interval_seconds == 0 {
            return Err(anyhow!("tick_interval_seconds must be at least 1"));
        }
        Ok(())
    }
}
