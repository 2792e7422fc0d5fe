//! HTTP REST adapter
//!
//! Depends only on core/. Never imports from mcp/.
//!
//! Provides the direct tool API (`/tools`, `/call`, `/health`) via
//! the Axum web framework.

pub mod error;
pub mod handlers;
pub mod middleware;

pub use handlers::*;

use std::sync::Arc;

use axum::{
    middleware as axum_middleware,
    routing::{get, post},
    Router,
};
use tower_http::cors::CorsLayer;

use crate::core::services::Services;

/// Build the API router
///
/// CORS mirrors the request origin and allows credentials, any
/// method and any header.
pub fn router(services: Arc<Services>) -> Router {
    Router::new()
        .route("/health", get(health_handler))
        .route("/tools", get(tools_handler))
        .route("/call", post(call_handler))
        .layer(axum_middleware::from_fn(middleware::log_request))
        .layer(CorsLayer::very_permissive())
        .with_state(services)
}
