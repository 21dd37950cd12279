//! Logging configuration, read from the process environment.

use core::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Env var holding the `EnvFilter` directives.
pub const FILTER_ENV: &str = "RUST_LOG";
/// Env var selecting the output format (`json` or `pretty`).
pub const FORMAT_ENV: &str = "STOREFRONT_LOG_FORMAT";

const DEFAULT_FILTER: &str = "info";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Json,
    Pretty,
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("unknown log format '{0}' (expected 'json' or 'pretty')")]
pub struct ParseLogFormatError(String);

impl FromStr for LogFormat {
    type Err = ParseLogFormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "json" => Ok(LogFormat::Json),
            "pretty" => Ok(LogFormat::Pretty),
            _ => Err(ParseLogFormatError(s.to_string())),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ObservabilityConfig {
    pub filter: String,
    pub format: LogFormat,
    /// Set when the requested format was unrecognized and the default was used.
    #[serde(skip)]
    pub rejected_format: Option<ParseLogFormatError>,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            filter: DEFAULT_FILTER.to_string(),
            format: LogFormat::default(),
            rejected_format: None,
        }
    }
}

impl ObservabilityConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary key lookup (the environment in production).
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(filter) = lookup(FILTER_ENV).filter(|f| !f.trim().is_empty()) {
            config.filter = filter;
        }

        if let Some(raw) = lookup(FORMAT_ENV) {
            match raw.parse() {
                Ok(format) => config.format = format,
                Err(e) => config.rejected_format = Some(e),
            }
        }

        config
    }
}
