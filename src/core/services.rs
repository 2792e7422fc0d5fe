//! Unified service container
//!
//! Provides shared access to all core services.

use crate::core::config::Config;
use crate::core::error::Result;
use crate::core::provider::{IpInfoClient, Provider};
use crate::core::tools::{IpGeoHandler, IpLiteHandler, IpLookupHandler, ToolRegistry};
use std::sync::Arc;

/// Unified services container
///
/// Built once at startup; all adapters use this same struct for
/// service access. Nothing in it is mutated after construction.
#[derive(Clone)]
pub struct Services {
    /// Application configuration
    pub config: Arc<Config>,

    /// Registered lookup tools
    pub tools: Arc<ToolRegistry>,
}

impl Services {
    /// Create services backed by the real provider client
    pub fn new(config: Config) -> Result<Self> {
        let provider = Arc::new(IpInfoClient::new(config.provider.clone())?);
        Ok(Self::with_provider(config, provider))
    }

    /// Create services around an explicit provider
    pub fn with_provider(config: Config, provider: Arc<dyn Provider>) -> Self {
        let mut registry = ToolRegistry::new();
        registry.register(Arc::new(IpGeoHandler::new(Arc::clone(&provider))));
        registry.register(Arc::new(IpLookupHandler::new(Arc::clone(&provider))));
        registry.register(Arc::new(IpLiteHandler::new(provider)));

        Self {
            config: Arc::new(config),
            tools: Arc::new(registry),
        }
    }
}
