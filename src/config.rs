use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;
use std::time::Duration;

const APP_DIR: &str = "news-cli";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_base_url")]
    pub base_url: String,
    #[serde(default = "default_request_timeout")]
    pub request_timeout_secs: u64,
    /// Re-fetch a date whose previous fetch failed when it is selected again.
    #[serde(default)]
    pub retry_on_failure: bool,
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_base_url() -> String {
    "http://localhost:8081/news-by-date".to_string()
}

fn default_request_timeout() -> u64 {
    15
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            request_timeout_secs: default_request_timeout(),
            retry_on_failure: false,
            log_level: default_log_level(),
        }
    }
}

impl Config {
    pub fn config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| anyhow::anyhow!("Could not find config directory"))?
            .join(APP_DIR);

        if !config_dir.exists() {
            fs::create_dir_all(&config_dir)?;
        }

        Ok(config_dir.join("config.json"))
    }

    pub fn log_path() -> Result<PathBuf> {
        let data_dir = dirs::data_local_dir()
            .ok_or_else(|| anyhow::anyhow!("Could not find local data directory"))?
            .join(APP_DIR);

        if !data_dir.exists() {
            fs::create_dir_all(&data_dir)?;
        }

        Ok(data_dir.join("news-cli.log"))
    }

    pub fn load() -> Result<Self> {
        let path = Self::config_path()?;

        if !path.exists() {
            let config = Config::default();
            config.save()?;
            return Ok(config);
        }

        let content = fs::read_to_string(&path)?;
        let mut config: Config = serde_json::from_str(&content)?;
        if config.normalize() {
            let _ = config.save();
        }
        Ok(config)
    }

    pub fn save(&self) -> Result<()> {
        let path = Self::config_path()?;
        let content = serde_json::to_string_pretty(self)?;
        fs::write(&path, content)?;
        Ok(())
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    /// Replace unusable values with defaults. Returns true if anything changed.
    pub fn normalize(&mut self) -> bool {
        let mut changed = false;
        if self.base_url.trim().is_empty() {
            self.base_url = default_base_url();
            changed = true;
        } else if self.base_url.trim() != self.base_url {
            self.base_url = self.base_url.trim().to_string();
            changed = true;
        }
        if self.request_timeout_secs == 0 {
            self.request_timeout_secs = default_request_timeout();
            changed = true;
        }
        if self.log_level.trim().is_empty() {
            self.log_level = default_log_level();
            changed = true;
        }
        changed
    }

    // Config for tests: no file I/O, short timeout.
    #[doc(hidden)]
    pub fn test_config() -> Self {
        Self {
            base_url: "http://127.0.0.1:9/news-by-date".to_string(),
            request_timeout_secs: 2,
            retry_on_failure: false,
            log_level: "debug".to_string(),
        }
    }
}
