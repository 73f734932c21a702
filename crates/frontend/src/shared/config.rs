//! Client configuration
//!
//! Resolved once at startup and provided to the whole app through context.
//! Search order:
//! 1. Build-time environment overrides (`APP_API_BASE_URL`, ...)
//! 2. Embedded `config.toml`

use anyhow::Context;
use serde::Deserialize;

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct AppConfig {
    pub api: ApiConfig,
    pub ui: UiConfig,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct ApiConfig {
    /// Absolute URL including the `/api` prefix, without trailing slash
    pub base_url: String,
    pub timeout_ms: u32,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct UiConfig {
    /// Delay before a success/error banner clears itself
    pub message_timeout_ms: u32,
}

/// Default configuration embedded in the binary
const DEFAULT_CONFIG: &str = include_str!("../../config.toml");

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api: ApiConfig {
                base_url: "http://localhost:8080/api".to_string(),
                timeout_ms: 10_000,
            },
            ui: UiConfig {
                message_timeout_ms: 5_000,
            },
        }
    }
}

/// Build-time overrides, all optional
#[derive(Debug, Default, Clone, Copy)]
pub struct ConfigOverrides<'a> {
    pub base_url: Option<&'a str>,
    pub timeout_ms: Option<&'a str>,
    pub message_timeout_ms: Option<&'a str>,
}

impl ConfigOverrides<'static> {
    pub fn from_build_env() -> Self {
        Self {
            base_url: option_env!("APP_API_BASE_URL"),
            timeout_ms: option_env!("APP_API_TIMEOUT_MS"),
            message_timeout_ms: option_env!("APP_MESSAGE_TIMEOUT_MS"),
        }
    }
}

pub fn parse_config(contents: &str, overrides: ConfigOverrides<'_>) -> anyhow::Result<AppConfig> {
    let mut config: AppConfig = toml::from_str(contents).context("invalid config.toml")?;

    if let Some(url) = overrides.base_url.filter(|u| !u.trim().is_empty()) {
        config.api.base_url = url.trim().to_string();
    }
    if let Some(ms) = overrides.timeout_ms {
        config.api.timeout_ms = ms
            .trim()
            .parse()
            .with_context(|| format!("APP_API_TIMEOUT_MS is not a number: {}", ms))?;
    }
    if let Some(ms) = overrides.message_timeout_ms {
        config.ui.message_timeout_ms = ms
            .trim()
            .parse()
            .with_context(|| format!("APP_MESSAGE_TIMEOUT_MS is not a number: {}", ms))?;
    }

    config.api.base_url = config.api.base_url.trim_end_matches('/').to_string();
    Ok(config)
}

/// Load configuration, falling back to built-in defaults on error
pub fn load_config() -> AppConfig {
    match parse_config(DEFAULT_CONFIG, ConfigOverrides::from_build_env()) {
        Ok(config) => {
            log::info!("API base URL: {}", config.api.base_url);
            config
        }
        Err(e) => {
            log::warn!("Using default configuration: {:#}", e);
            AppConfig::default()
        }
    }
}
