#[cfg(feature = "cli")]
pub mod cli;
pub mod toml_config;

#[cfg(feature = "cli")]
pub use cli::CliConfig;
pub use toml_config::TomlConfig;

use crate::adapters::http::HttpTransport;
use crate::core::ResponseOrdering;
use crate::utils::error::Result;
use crate::utils::validation::{validate_one_of, validate_range, validate_url, Validate};
use std::time::Duration;
use toml_config::{LOG_LEVELS, MAX_TIMEOUT_SECONDS};

pub const DEFAULT_BASE_URL: &str = "http://localhost:8000";

/// Everything needed to build a controller, after merging config sources.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub base_url: String,
    pub timeout_seconds: Option<u64>,
    pub ordering: ResponseOrdering,
    pub log_level: Option<String>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_seconds: None,
            ordering: ResponseOrdering::default(),
            log_level: None,
        }
    }
}

impl Settings {
    pub fn from_toml(config: &TomlConfig) -> Self {
        Self {
            base_url: config.base_url().to_string(),
            timeout_seconds: config.timeout_seconds(),
            ordering: config.ordering(),
            log_level: config.log_level().map(str::to_string),
        }
    }

    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_seconds.map(Duration::from_secs)
    }

    pub fn transport(&self) -> Result<HttpTransport> {
        HttpTransport::with_timeout(&self.base_url, self.timeout())
    }
}

impl Validate for Settings {
    fn validate(&self) -> Result<()> {
        validate_url("base_url", &self.base_url)?;
        if let Some(timeout) = self.timeout_seconds {
            validate_range("timeout_seconds", timeout, 1, MAX_TIMEOUT_SECONDS)?;
        }
        if let Some(level) = &self.log_level {
            validate_one_of("log_level", level, &LOG_LEVELS)?;
        }
        Ok(())
    }
}
