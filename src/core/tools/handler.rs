//! Tool handler trait and common helpers

use crate::core::error::{IpInfoError, Result};
use crate::core::types::{LookupResult, ToolDescriptor};
use async_trait::async_trait;
use serde_json::{json, Map, Value};

/// Trait for lookup tool implementations
///
/// Each tool (ip_geo, ip_lookup, ip_lite) implements this trait to
/// provide its descriptor and execution logic.
#[async_trait]
pub trait ToolHandler: Send + Sync {
    /// Tool name (e.g., "ip_geo")
    fn name(&self) -> &str;

    /// Descriptor for tool listings
    fn descriptor(&self) -> ToolDescriptor;

    /// Execute tool with arguments
    async fn execute(&self, args: &Map<String, Value>) -> Result<LookupResult>;
}

/// Input schema shared by every tool: one required string `ip`
pub fn ip_input_schema(tool_name: &str) -> Value {
    json!({
        "type": "object",
        "title": format!("{tool_name}Arguments"),
        "properties": {
            "ip": {
                "type": "string",
                "title": "Ip"
            }
        },
        "required": ["ip"]
    })
}

/// Extract the `ip` argument, unmodified
pub fn required_ip(args: &Map<String, Value>) -> Result<&str> {
    match args.get("ip") {
        Some(Value::String(ip)) => Ok(ip),
        Some(_) => Err(IpInfoError::InvalidArguments(
            "'ip' must be a string".to_string(),
        )),
        None => Err(IpInfoError::InvalidArguments(
            "missing required argument 'ip'".to_string(),
        )),
    }
}
