//! Configuration loading for the taskboard terminal client.
//!
//! All fields are required unless explicitly marked optional. No defaults.

use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::time::Duration;
use taskboard_llm::RetryPolicy;

/// Environment variable consulted when `generation.api_key` is not set.
pub const API_KEY_ENV: &str = "GEMINI_API_KEY";

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TuiConfig {
    pub store_endpoint: String,
    pub request_timeout_ms: u64,
    pub reload_delay_ms: u64,
    pub notification_ttl_ms: u64,
    pub tick_interval_ms: u64,
    pub persistence_path: PathBuf,
    pub log_path: PathBuf,
    pub generation: GenerationConfig,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GenerationConfig {
    pub endpoint: String,
    pub api_key: Option<String>,
    pub initial_backoff_ms: u64,
    pub max_retries: u32,
    pub backoff_multiplier: u32,
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Missing configuration file path (use --config or TASKBOARD_CONFIG)")]
    MissingConfigPath,
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to parse config TOML: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("Invalid config value for {field}: {reason}")]
    InvalidValue { field: &'static str, reason: String },
}

impl TuiConfig {
    pub fn load() -> Result<Self, ConfigError> {
        let path = config_path_from_args().or_else(config_path_from_env);
        let path = path.ok_or(ConfigError::MissingConfigPath)?;
        let config = Self::from_path(&path)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_path(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml(&contents)
    }

    pub fn from_toml(contents: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(contents)?)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let url_fields = [
            ("store_endpoint", &self.store_endpoint),
            ("generation.endpoint", &self.generation.endpoint),
        ];
        for (field, value) in url_fields {
            if value.trim().is_empty() {
                return Err(invalid(field, "must not be empty"));
            }
            if !(value.starts_with("http://") || value.starts_with("https://")) {
                return Err(invalid(field, "must be an http(s) URL"));
            }
        }

        let positive = [
            ("request_timeout_ms", self.request_timeout_ms),
            ("reload_delay_ms", self.reload_delay_ms),
            ("notification_ttl_ms", self.notification_ttl_ms),
            ("tick_interval_ms", self.tick_interval_ms),
            ("generation.initial_backoff_ms", self.generation.initial_backoff_ms),
        ];
        for (field, value) in positive {
            if value == 0 {
                return Err(invalid(field, "must be > 0"));
            }
        }

        if self.generation.backoff_multiplier < 1 {
            return Err(invalid("generation.backoff_multiplier", "must be >= 1"));
        }
        if self.persistence_path.as_os_str().is_empty() {
            return Err(invalid("persistence_path", "must not be empty"));
        }
        if self.log_path.as_os_str().is_empty() {
            return Err(invalid("log_path", "must not be empty"));
        }
        Ok(())
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_millis(self.request_timeout_ms)
    }

    pub fn reload_delay(&self) -> Duration {
        Duration::from_millis(self.reload_delay_ms)
    }

    pub fn notification_ttl(&self) -> Duration {
        Duration::from_millis(self.notification_ttl_ms)
    }

    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.tick_interval_ms)
    }

    /// The configured key, or [`API_KEY_ENV`] when the file has none.
    pub fn api_key(&self) -> Option<String> {
        self.generation
            .api_key
            .clone()
            .filter(|k| !k.trim().is_empty())
            .or_else(|| std::env::var(API_KEY_ENV).ok())
            .filter(|k| !k.trim().is_empty())
    }

    pub fn retry_policy(&self) -> RetryPolicy {
        RetryPolicy {
            max_retries: self.generation.max_retries,
            initial_backoff: Duration::from_millis(self.generation.initial_backoff_ms),
            multiplier: self.generation.backoff_multiplier,
        }
    }
}

fn invalid(field: &'static str, reason: &str) -> ConfigError {
    ConfigError::InvalidValue {
        field,
        reason: reason.to_string(),
    }
}

fn config_path_from_env() -> Option<PathBuf> {
    std::env::var("TASKBOARD_CONFIG").ok().map(PathBuf::from)
}

fn config_path_from_args() -> Option<PathBuf> {
    let mut args = std::env::args().skip(1);
    while let Some(arg) = args.next() {
        if arg == "--config" {
            return args.next().map(PathBuf::from);
        }
    }
    None
}
