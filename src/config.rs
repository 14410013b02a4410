//! 配置：后端地址、超时与默认文件名（环境变量或 YAML 文件）。
//!
//! Client configuration.
//!
//! Values come from environment variables or a YAML file:
//!
//! | Key | Env var | Default |
//! |-----|---------|---------|
//! | `base_url` | `TTS_FORM_BASE_URL` | `http://127.0.0.1:5000` |
//! | `timeout_secs` | `TTS_FORM_TIMEOUT_SECS` | none |
//! | `default_filename` | `TTS_FORM_DEFAULT_FILENAME` | `output.mp3` |

use crate::types::DEFAULT_FILENAME;
use crate::{Error, ErrorContext, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:5000";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FormConfig {
    pub base_url: String,
    /// No timeout by default.
    pub timeout_secs: Option<u64>,
    pub default_filename: String,
}

impl Default for FormConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_secs: None,
            default_filename: DEFAULT_FILENAME.to_string(),
        }
    }
}

impl FormConfig {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary key lookup; [`FormConfig::from_env`] passes the process environment.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();
        if let Some(url) = lookup("TTS_FORM_BASE_URL") {
            config.base_url = url;
        }
        if let Some(raw) = lookup("TTS_FORM_TIMEOUT_SECS") {
            let secs = raw.trim().parse::<u64>().map_err(|e| {
                Error::configuration_with_context(
                    format!("TTS_FORM_TIMEOUT_SECS is not a number: {}", e),
                    ErrorContext::new()
                        .with_field_path("timeout_secs")
                        .with_details(raw.clone())
                        .with_source("env"),
                )
            })?;
            config.timeout_secs = Some(secs);
        }
        if let Some(name) = lookup("TTS_FORM_DEFAULT_FILENAME") {
            config.default_filename = name;
        }
        config.validate()?;
        Ok(config)
    }

    pub fn from_yaml_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&content).map_err(|e| match e {
            Error::Configuration { message, context } => Error::Configuration {
                message,
                context: context.with_source(path.display().to_string()),
            },
            other => other,
        })
    }

    pub fn from_yaml_str(content: &str) -> Result<Self> {
        let config: Self = serde_yaml::from_str(content).map_err(|e| {
            Error::configuration_with_context(
                format!("Invalid YAML config: {}", e),
                ErrorContext::new().with_source("config_loader"),
            )
        })?;
        config.validate()?;
        Ok(config)
    }

    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_secs.map(Duration::from_secs)
    }

    fn validate(&self) -> Result<()> {
        if self.default_filename.trim().is_empty() {
            return Err(Error::configuration_with_context(
                "default filename must not be empty",
                ErrorContext::new().with_field_path("default_filename"),
            ));
        }
        url::Url::parse(&self.base_url).map_err(|e| {
            Error::configuration_with_context(
                format!("base URL is not absolute: {}", e),
                ErrorContext::new()
                    .with_field_path("base_url")
                    .with_details(self.base_url.clone()),
            )
        })?;
        Ok(())
    }
}
