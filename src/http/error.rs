//! Conversion of lookup errors into HTTP responses
//!
//! Every tool invocation failure is a 400 with a `detail` message;
//! the status code does not distinguish error kinds.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::core::error::IpInfoError;
use crate::core::types::ErrorDetail;

impl IntoResponse for IpInfoError {
    fn into_response(self) -> Response {
        let body = Json(ErrorDetail {
            detail: self.message(),
        });

        (StatusCode::BAD_REQUEST, body).into_response()
    }
}
