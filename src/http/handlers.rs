//! HTTP request handlers for the tool API
//!
//! Implements handlers for the 3 REST endpoints: health, tool
//! listing and tool invocation.

use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, State},
    response::IntoResponse,
    Json,
};

use crate::core::error::IpInfoError;
use crate::core::services::Services;
use crate::core::types::*;

/// Health check handler
///
/// Never touches the provider.
pub async fn health_handler() -> impl IntoResponse {
    Json(HealthResponse {
        status: "ok".to_string(),
    })
}

/// Tool listing handler
///
/// Returns every registered tool with name, description and input
/// schema, in registration order.
pub async fn tools_handler(State(services): State<Arc<Services>>) -> Json<ToolsResponse> {
    Json(ToolsResponse {
        tools: services.tools.list(),
    })
}

/// Tool invocation handler
///
/// # Errors
///
/// Any failure (unreadable body, unknown tool, bad arguments,
/// upstream, transport, malformed response) becomes a 400 with a
/// `detail` message.
pub async fn call_handler(
    State(services): State<Arc<Services>>,
    payload: Result<Json<CallRequest>, JsonRejection>,
) -> Result<Json<CallResponse>, IpInfoError> {
    let Json(req) = payload.map_err(|e| IpInfoError::InvalidArguments(e.body_text()))?;
    let result = services.tools.invoke(&req.name, &req.arguments).await?;

    Ok(Json(CallResponse { result }))
}
