use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;

use crate::error::LedgerError;

pub mod user_controller;
pub mod trading_controller;
pub mod admin_controller;

/// Translates a core failure into a transport response. This is the only
/// place status codes are chosen; the services know nothing about HTTP.
pub fn error_response(err: LedgerError) -> Response {
    let status = match &err {
        LedgerError::InvalidInput(_) => StatusCode::BAD_REQUEST,
        LedgerError::NotFound(_) => StatusCode::NOT_FOUND,
        LedgerError::InvalidState(_) | LedgerError::Conflict(_) => StatusCode::CONFLICT,
        LedgerError::Store(_) => StatusCode::INTERNAL_SERVER_ERROR,
    };
    if status == StatusCode::INTERNAL_SERVER_ERROR {
        tracing::error!(error = %err, "request failed");
    }
    (status, Json(json!({ "error": err.to_string() }))).into_response()
}

pub fn missing_fields() -> Response {
    (StatusCode::BAD_REQUEST, Json(json!({ "error": "missing fields" }))).into_response()
}

pub async fn not_found() -> Response {
    (StatusCode::NOT_FOUND, Json(json!({ "error": "not found" }))).into_response()
}
