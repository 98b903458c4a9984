use std::env;
use std::time::Duration;

use anyhow::{Context, Result};
use dotenvy::dotenv;
use once_cell::sync::Lazy;

pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:8000";
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

pub static CONFIG: Lazy<Config> = Lazy::new(|| {
    dotenv().ok(); // Load .env file if present
    Config::from_env().unwrap_or_else(|e| {
        log::warn!("invalid search configuration, using defaults: {:#}", e);
        Config::default()
    })
});

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub base_url: String,
    pub timeout: Duration,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}

impl Config {
    /// Reads `SEARCH_BASE_URL` and `SEARCH_TIMEOUT_SECS`, falling back to the
    /// local search service defaults.
    pub fn from_env() -> Result<Self> {
        let base_url = get_env_or_default("SEARCH_BASE_URL", DEFAULT_BASE_URL);
        let timeout_secs = get_env_or_default("SEARCH_TIMEOUT_SECS", "")
            .trim()
            .to_string();
        let timeout_secs = if timeout_secs.is_empty() {
            DEFAULT_TIMEOUT_SECS
        } else {
            timeout_secs
                .parse::<u64>()
                .with_context(|| format!("SEARCH_TIMEOUT_SECS is not a number: {timeout_secs}"))?
        };

        Ok(Config {
            base_url,
            timeout: Duration::from_secs(timeout_secs),
        })
    }

    /// Applies command line overrides on top of this config.
    pub fn with_overrides(mut self, base_url: Option<String>, timeout_secs: Option<u64>) -> Self {
        if let Some(base_url) = base_url {
            self.base_url = base_url;
        }
        if let Some(secs) = timeout_secs {
            self.timeout = Duration::from_secs(secs);
        }
        self
    }
}

fn get_env_or_default(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_string())
}
