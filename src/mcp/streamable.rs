//! Streamable HTTP transport for MCP
//!
//! Clients POST JSON-RPC messages to `/mcp`. Requests are answered
//! with a single-event `text/event-stream` when the client accepts
//! it, otherwise with plain JSON. Notifications get `202 Accepted`.
//! The server issues no session ids.

use std::convert::Infallible;
use std::sync::Arc;

use axum::{
    extract::State,
    http::{header, HeaderMap, StatusCode},
    response::{
        sse::{Event, Sse},
        IntoResponse, Response,
    },
    routing::post,
    Json, Router,
};
use futures::stream;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;

use crate::core::services::Services;
use crate::mcp::error::McpError;
use crate::mcp::handlers::ProtocolHandlers;
use crate::mcp::protocol::JsonRpcResponse;

/// Build the `/mcp` router
pub fn router(services: Arc<Services>) -> Router {
    let handlers = Arc::new(ProtocolHandlers::new(services));

    Router::new()
        .route("/mcp", post(message_handler))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::very_permissive())
        .with_state(handlers)
}

/// Serve the streamable HTTP transport until Ctrl+C
pub async fn serve(services: Arc<Services>) -> Result<(), McpError> {
    let addr = services.config.server.addr();
    let app = router(services);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("Streamable HTTP MCP server listening on http://{}/mcp", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(async {
            tokio::signal::ctrl_c().await.ok();
            info!("Received shutdown signal");
        })
        .await?;

    Ok(())
}

async fn message_handler(
    State(handlers): State<Arc<ProtocolHandlers>>,
    headers: HeaderMap,
    body: String,
) -> Response {
    match handlers.process_message(&body).await {
        None => StatusCode::ACCEPTED.into_response(),
        Some(response) if accepts_event_stream(&headers) => event_stream(response),
        Some(response) => Json(response).into_response(),
    }
}

fn accepts_event_stream(headers: &HeaderMap) -> bool {
    headers
        .get(header::ACCEPT)
        .and_then(|v| v.to_str().ok())
        .map(|accept| accept.contains("text/event-stream"))
        .unwrap_or(false)
}

fn event_stream(response: JsonRpcResponse) -> Response {
    let data = match serde_json::to_string(&response) {
        Ok(data) => data,
        Err(e) => return (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()).into_response(),
    };

    let event = Event::default().event("message").data(data);
    Sse::new(stream::once(async move { Ok::<_, Infallible>(event) })).into_response()
}
