use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::time::Duration;

/// Environment override for the backend base URL.
pub const BASE_URL_ENV: &str = "SESSIONWATCH_BASE_URL";

fn default_base_url() -> String {
    "http://localhost:8080".to_string()
}

fn default_request_timeout_secs() -> u64 {
    10
}

fn default_recheck_count() -> u32 {
    5
}

fn default_recheck_step_secs() -> u64 {
    2
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_base_url")]
    pub base_url: String,
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,
    /// How many times the watch flow re-polls after the cleanup step.
    #[serde(default = "default_recheck_count")]
    pub recheck_count: u32,
    #[serde(default = "default_recheck_step_secs")]
    pub recheck_step_secs: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            request_timeout_secs: default_request_timeout_secs(),
            recheck_count: default_recheck_count(),
            recheck_step_secs: default_recheck_step_secs(),
        }
    }
}

impl Config {
    pub fn from_file(path: &str) -> Result<Self> {
        let raw = fs::read_to_string(path).context("reading config file")?;
        let cfg: Config = serde_json::from_str(&raw).context("parsing JSON")?;
        Ok(cfg)
    }

    /// Defaults with the `SESSIONWATCH_BASE_URL` override applied.
    pub fn from_env_or_default() -> Self {
        let mut cfg = Config::default();
        if let Ok(url) = std::env::var(BASE_URL_ENV) {
            if !url.is_empty() {
                cfg.base_url = url;
            }
        }
        cfg
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    pub fn recheck_step(&self) -> Duration {
        Duration::from_secs(self.recheck_step_secs)
    }
}
