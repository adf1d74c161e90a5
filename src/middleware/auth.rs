use axum::{
    extract::State,
    http::{header, Request, StatusCode},
    middleware::Next,
    response::{IntoResponse, Response},
};
use axum::Json;
use serde_json::json;

use crate::AppState;

fn bearer_token(req: &Request<axum::body::Body>) -> Option<&str> {
    req.headers()
        .get(header::AUTHORIZATION)?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")
}

/// Gates `/api/admin/*` behind the deployment's admin token. Everything else
/// passes through untouched.
pub async fn require_admin(
    State(state): State<AppState>,
    req: Request<axum::body::Body>,
    next: Next,
) -> Response {
    if !req.uri().path().starts_with("/api/admin/") {
        return next.run(req).await;
    }

    match bearer_token(&req) {
        Some(token) if token == state.settings.admin_token => next.run(req).await,
        _ => (StatusCode::UNAUTHORIZED, Json(json!({ "error": "unauthorized" }))).into_response(),
    }
}
