//! MCP protocol method handlers

use crate::core::services::Services;
use crate::core::tools::ToolRegistry;
use crate::mcp::error::McpError;
use crate::mcp::protocol::*;
use serde_json::{json, Value};
use std::sync::Arc;
use tracing::{debug, error, info};

/// Method handlers shared by the stdio and streamable HTTP servers
///
/// Stateless: every request is answered from the tool registry alone,
/// so one instance serves any number of concurrent requests.
pub struct ProtocolHandlers {
    tool_registry: Arc<ToolRegistry>,
}

impl ProtocolHandlers {
    pub fn new(services: Arc<Services>) -> Self {
        Self {
            tool_registry: Arc::clone(&services.tools),
        }
    }

    /// Parse one raw JSON-RPC message and answer it
    ///
    /// Returns `None` for notifications.
    pub async fn process_message(&self, raw: &str) -> Option<JsonRpcResponse> {
        debug!("Received: {}", raw);

        let value: Value = match serde_json::from_str(raw) {
            Ok(v) => v,
            Err(e) => return Some(error_response(None, McpError::ParseError(e.to_string()))),
        };

        let id = value.get("id").cloned();
        match serde_json::from_value::<JsonRpcRequest>(value) {
            Ok(request) => self.dispatch(request).await,
            Err(e) => Some(error_response(id, McpError::InvalidRequest(e.to_string()))),
        }
    }

    /// Route a request to its method handler
    pub async fn dispatch(&self, request: JsonRpcRequest) -> Option<JsonRpcResponse> {
        let id = request.id.clone();
        let notification = request.is_notification();

        let outcome = if request.jsonrpc != "2.0" {
            Err(McpError::InvalidRequest(format!(
                "Unsupported jsonrpc version: {}",
                request.jsonrpc
            )))
        } else {
            match request.method.as_str() {
                "initialize" => self.handle_initialize(request).await,
                "initialized" | "notifications/initialized" => {
                    self.handle_initialized(request).await
                }
                "notifications/cancelled" => self.handle_cancelled(request).await,
                "tools/list" => self.handle_tools_list(request).await,
                "tools/call" => self.handle_tools_call(request).await,
                "ping" => self.handle_ping(request).await,
                _ => Ok(JsonRpcResponse::error(
                    request.id,
                    METHOD_NOT_FOUND,
                    format!("Unknown method: {}", request.method),
                )),
            }
        };

        if notification {
            return None;
        }

        Some(outcome.unwrap_or_else(|e| {
            error!("Error processing message: {}", e);
            error_response(id, e)
        }))
    }

    /// Handle initialize request
    pub async fn handle_initialize(
        &self,
        request: JsonRpcRequest,
    ) -> Result<JsonRpcResponse, McpError> {
        let params: InitializeParams = match request.params {
            Some(params) => serde_json::from_value(params)
                .map_err(|e| McpError::InvalidParams(format!("Invalid params: {e}")))?,
            None => InitializeParams::default(),
        };

        let client = params
            .client_info
            .as_ref()
            .map(|c| c.name.as_str())
            .unwrap_or("unknown");
        let version = negotiate_version(params.protocol_version.as_deref());
        info!(client = %client, protocol = %version, "Client initialized");

        let result = InitializeResult {
            protocol_version: version.to_string(),
            capabilities: ServerCapabilities {
                tools: ToolsCapability {
                    list_changed: false,
                },
            },
            server_info: ServerInfo {
                name: "ipinfo-mcp".to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
            },
        };

        Ok(JsonRpcResponse::success(
            request.id,
            serde_json::to_value(result)?,
        ))
    }

    /// Handle initialized notification
    pub async fn handle_initialized(
        &self,
        request: JsonRpcRequest,
    ) -> Result<JsonRpcResponse, McpError> {
        info!("Server initialized");

        // Only sent as a notification in practice; dispatch drops the reply
        Ok(JsonRpcResponse::success(request.id, json!({})))
    }

    /// Handle cancellation notification
    ///
    /// In-flight lookups are bounded by the provider timeout and are
    /// not interrupted.
    pub async fn handle_cancelled(
        &self,
        request: JsonRpcRequest,
    ) -> Result<JsonRpcResponse, McpError> {
        let request_id = request
            .params
            .as_ref()
            .and_then(|p| p.get("requestId"))
            .cloned()
            .unwrap_or(Value::Null);
        debug!(request_id = %request_id, "Cancellation received");

        Ok(JsonRpcResponse::success(request.id, json!({})))
    }

    /// Handle tools/list request
    pub async fn handle_tools_list(
        &self,
        request: JsonRpcRequest,
    ) -> Result<JsonRpcResponse, McpError> {
        let tools: Vec<ToolSchema> = self.tool_registry.list();

        Ok(JsonRpcResponse::success(
            request.id,
            json!({ "tools": tools }),
        ))
    }

    /// Handle tools/call request
    ///
    /// Lookup failures (including unknown tool names) come back as a
    /// tool result with `isError` set.
    pub async fn handle_tools_call(
        &self,
        request: JsonRpcRequest,
    ) -> Result<JsonRpcResponse, McpError> {
        let params_value = request
            .params
            .ok_or_else(|| McpError::InvalidParams("Missing params".to_string()))?;

        let params: ToolCallParams = serde_json::from_value(params_value)
            .map_err(|e| McpError::InvalidParams(format!("Invalid params: {e}")))?;

        let result = match self
            .tool_registry
            .invoke(&params.name, &params.arguments)
            .await
        {
            Ok(record) => ToolResult::structured(record.to_value()),
            Err(e) => {
                debug!(tool = %params.name, "Returning tool error result");
                ToolResult::error(e.message())
            }
        };

        Ok(JsonRpcResponse::success(
            request.id,
            serde_json::to_value(result)?,
        ))
    }

    /// Handle ping request
    pub async fn handle_ping(&self, request: JsonRpcRequest) -> Result<JsonRpcResponse, McpError> {
        Ok(JsonRpcResponse::success(request.id, json!({})))
    }
}

fn error_response(id: Option<Value>, err: McpError) -> JsonRpcResponse {
    JsonRpcResponse::error(id, err.code(), err.to_string())
}
