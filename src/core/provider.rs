//! Upstream provider client
//!
//! One HTTPS GET per lookup against the provider's REST endpoints,
//! bounded by the configured overall timeout. No retries.

use crate::core::config::ProviderConfig;
use crate::core::error::{IpInfoError, Result};
use async_trait::async_trait;
use reqwest::{Client, RequestBuilder};
use std::fmt;
use std::time::Duration;
use tracing::{debug, warn};

/// Provider endpoint family
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Variant {
    /// Geolocation subset of the lookup endpoint
    Geo,
    /// Full lookup endpoint
    Lookup,
    /// Lite endpoint (ASN + country/continent)
    Lite,
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Variant::Geo => write!(f, "geo"),
            Variant::Lookup => write!(f, "lookup"),
            Variant::Lite => write!(f, "lite"),
        }
    }
}

/// Source of raw provider responses
///
/// Implemented by [`IpInfoClient`] for the real service; tests swap
/// in stubs.
#[async_trait]
pub trait Provider: Send + Sync {
    /// Fetch the raw response body for `ip`
    async fn fetch(&self, variant: Variant, ip: &str) -> Result<String>;
}

/// HTTP client for the IPinfo API
pub struct IpInfoClient {
    client: Client,
    config: ProviderConfig,
}

impl IpInfoClient {
    /// Build the client from provider configuration
    pub fn new(config: ProviderConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent(config.user_agent.clone())
            // Every call gets its own connection, released when the call ends
            .pool_max_idle_per_host(0)
            .build()
            .map_err(|e| IpInfoError::ConfigError(format!("Failed to build HTTP client: {e}")))?;

        Ok(Self { client, config })
    }

    /// Build the GET request for a lookup
    ///
    /// The IP goes into the path verbatim. Lite always carries `token`
    /// (possibly empty); the lookup endpoint only when a key is
    /// configured. The key is query-encoded.
    pub fn request(&self, variant: Variant, ip: &str) -> RequestBuilder {
        let key = self.config.api_key.as_str();
        let (base, token) = match variant {
            Variant::Geo | Variant::Lookup => {
                (&self.config.lookup_url, Some(key).filter(|k| !k.is_empty()))
            }
            Variant::Lite => (&self.config.lite_url, Some(key)),
        };

        let url = format!("{}/{ip}", base.trim_end_matches('/'));
        let builder = self.client.get(url);
        match token {
            Some(token) => builder.query(&[("token", token)]),
            None => builder,
        }
    }
}

#[async_trait]
impl Provider for IpInfoClient {
    async fn fetch(&self, variant: Variant, ip: &str) -> Result<String> {
        debug!(variant = %variant, ip = %ip, "Provider lookup");

        let response = self
            .request(variant, ip)
            .send()
            .await
            .map_err(|e| {
                warn!(variant = %variant, ip = %ip, "Provider unreachable: {}", e);
                transport_error(e)
            })?;

        let status = response.status();
        let body = response.text().await.map_err(transport_error)?;

        if !status.is_success() {
            warn!(variant = %variant, ip = %ip, status = status.as_u16(), "Provider error");
            return Err(IpInfoError::Upstream {
                status: status.as_u16(),
                body,
            });
        }

        Ok(body)
    }
}

fn transport_error(err: reqwest::Error) -> IpInfoError {
    if err.is_timeout() {
        IpInfoError::Transport(format!("request timed out: {err}"))
    } else {
        IpInfoError::Transport(err.to_string())
    }
}
