//! Configuration management for the IP lookup service.
//!
//! This module handles loading configuration from an optional TOML
//! file and environment variables, with sensible defaults for all
//! settings.

use crate::core::error::{IpInfoError, Result};
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::Path;

/// Main configuration structure
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub provider: ProviderConfig,
    #[serde(default)]
    pub server: ServerConfig,
}

/// Upstream provider configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ProviderConfig {
    /// API token sent as the `token` query parameter
    #[serde(default)]
    pub api_key: String,

    /// Base URL for full and geo lookups
    #[serde(default = "default_lookup_url")]
    pub lookup_url: String,

    /// Base URL for lite lookups
    #[serde(default = "default_lite_url")]
    pub lite_url: String,

    /// Overall request timeout in seconds (connect + read)
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

/// Listener configuration shared by both HTTP surfaces
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,
}

// Default value functions
fn default_lookup_url() -> String {
    "https://api.ipinfo.io/lookup".to_string()
}

fn default_lite_url() -> String {
    "https://api.ipinfo.io/lite".to_string()
}

fn default_timeout_secs() -> u64 {
    10
}

fn default_user_agent() -> String {
    format!("ipinfo-mcp/{}", env!("CARGO_PKG_VERSION"))
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    5555
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            lookup_url: default_lookup_url(),
            lite_url: default_lite_url(),
            timeout_secs: default_timeout_secs(),
            user_agent: default_user_agent(),
        }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

impl ServerConfig {
    /// Listener address in `host:port` form
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl Config {
    /// Load configuration from TOML file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .map_err(|e| IpInfoError::ConfigError(format!("Failed to read config file: {e}")))?;

        let config: Config = toml::from_str(&contents)?;
        Ok(config)
    }

    /// Load config with priority: env vars > TOML > defaults
    ///
    /// A TOML file is read only when `IPINFO_MCP_CONFIG` names one;
    /// otherwise no file is touched.
    pub fn load() -> Result<Self> {
        let mut config = match env::var("IPINFO_MCP_CONFIG") {
            Ok(config_path) => Self::from_file(config_path)?,
            Err(_) => Self::default(),
        };

        config.merge_env();
        config.validate()?;

        Ok(config)
    }

    /// Merge configuration with environment variables
    pub fn merge_env(&mut self) {
        if let Ok(api_key) = env::var("IPINFO_API_KEY") {
            self.provider.api_key = api_key;
        }
        if let Ok(url) = env::var("IPINFO_LOOKUP_URL") {
            self.provider.lookup_url = url;
        }
        if let Ok(url) = env::var("IPINFO_LITE_URL") {
            self.provider.lite_url = url;
        }
        if let Ok(timeout) = env::var("IPINFO_TIMEOUT_SECS") {
            if let Ok(t) = timeout.parse() {
                self.provider.timeout_secs = t;
            }
        }

        if let Ok(host) = env::var("IPINFO_MCP_HOST") {
            self.server.host = host;
        }
        if let Ok(port) = env::var("IPINFO_MCP_PORT") {
            if let Ok(p) = port.parse() {
                self.server.port = p;
            }
        }
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        if self.provider.timeout_secs == 0 {
            return Err(IpInfoError::ConfigError(
                "Provider timeout must be non-zero".to_string(),
            ));
        }

        for (name, url) in [
            ("lookup_url", &self.provider.lookup_url),
            ("lite_url", &self.provider.lite_url),
        ] {
            if !url.starts_with("http://") && !url.starts_with("https://") {
                return Err(IpInfoError::ConfigError(format!(
                    "{name} must be an http(s) URL, got '{url}'"
                )));
            }
        }

        if self.server.port == 0 {
            return Err(IpInfoError::ConfigError(
                "Server port must be non-zero".to_string(),
            ));
        }

        Ok(())
    }

    /// Log configuration (redacting the API key)
    pub fn log_config(&self) {
        let key_state = if self.provider.api_key.is_empty() {
            "not set"
        } else {
            "set"
        };

        tracing::info!("Configuration loaded:");
        tracing::info!("  API key: {}", key_state);
        tracing::info!("  Lookup URL: {}", self.provider.lookup_url);
        tracing::info!("  Lite URL: {}", self.provider.lite_url);
        tracing::info!("  Timeout: {}s", self.provider.timeout_secs);
        tracing::info!("  Listen: {}", self.server.addr());
    }
}
