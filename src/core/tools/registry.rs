//! Tool registry for managing lookup tools

use super::handler::ToolHandler;
use crate::core::error::{IpInfoError, Result};
use crate::core::types::{LookupResult, ToolDescriptor};
use serde_json::{Map, Value};
use std::collections::HashMap;
use std::sync::Arc;
use tracing::{debug, warn};

/// Registry for all available tools
///
/// Listing order is registration order and never changes after
/// startup.
pub struct ToolRegistry {
    handlers: Vec<Arc<dyn ToolHandler>>,
    by_name: HashMap<String, usize>,
}

impl ToolRegistry {
    /// Create a new empty registry
    pub fn new() -> Self {
        Self {
            handlers: Vec::new(),
            by_name: HashMap::new(),
        }
    }

    /// Register a tool handler
    ///
    /// A handler with an already registered name replaces the old one
    /// in place.
    pub fn register(&mut self, handler: Arc<dyn ToolHandler>) {
        let name = handler.name().to_string();
        match self.by_name.get(&name) {
            Some(&index) => self.handlers[index] = handler,
            None => {
                self.by_name.insert(name, self.handlers.len());
                self.handlers.push(handler);
            }
        }
    }

    /// Get a tool handler by name
    pub fn get(&self, name: &str) -> Option<&Arc<dyn ToolHandler>> {
        self.by_name.get(name).map(|&index| &self.handlers[index])
    }

    /// List all tool descriptors in registration order
    pub fn list(&self) -> Vec<ToolDescriptor> {
        self.handlers
            .iter()
            .map(|handler| handler.descriptor())
            .collect()
    }

    /// Invoke a tool by name
    pub async fn invoke(&self, name: &str, args: &Map<String, Value>) -> Result<LookupResult> {
        let handler = self
            .get(name)
            .ok_or_else(|| IpInfoError::UnknownTool(name.to_string()))?;

        let result = handler.execute(args).await;
        if let Err(e) = &result {
            if e.is_client_error() {
                debug!(tool = %name, "Rejected call: {}", e);
            } else if e.is_upstream() {
                warn!(tool = %name, "Provider rejected lookup: {}", e);
            } else {
                warn!(tool = %name, "Lookup failed: {}", e);
            }
        }
        result
    }

    /// Check if a tool exists
    pub fn contains(&self, name: &str) -> bool {
        self.by_name.contains_key(name)
    }

    /// Get number of registered tools
    pub fn len(&self) -> usize {
        self.handlers.len()
    }

    /// Check if registry is empty
    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }
}

impl Default for ToolRegistry {
    fn default() -> Self {
        Self::new()
    }
}
