use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Deserialize;
use serde_json::json;

use crate::error::LedgerError;
use crate::services::{portfolio_service, user_service};
use crate::AppState;

use super::error_response;

#[derive(Deserialize)]
pub struct InitBody {
    pub uid: Option<String>,
}

// POST /api/init
pub async fn post_init(
    State(state): State<AppState>,
    body: Option<Json<InitBody>>,
) -> Response {
    let uid = body.and_then(|Json(b)| b.uid);
    match user_service::initialize(&state, uid).await {
        Ok(user) => (StatusCode::OK, Json(json!({ "uid": user.uid }))).into_response(),
        Err(e) => error_response(e),
    }
}

#[derive(Deserialize)]
pub struct PortfolioQuery {
    pub uid: Option<String>,
}

// GET /api/portfolio?uid=...
pub async fn get_portfolio(
    State(state): State<AppState>,
    Query(query): Query<PortfolioQuery>,
) -> Response {
    let Some(uid) = query.uid.filter(|u| !u.is_empty()) else {
        return (StatusCode::BAD_REQUEST, Json(json!({ "error": "uid required" }))).into_response();
    };

    match portfolio_service::report(&state, &uid).await {
        Ok(view) => (StatusCode::OK, Json(view)).into_response(),
        // Keep the wire message the clients already parse.
        Err(LedgerError::NotFound(_)) => {
            (StatusCode::NOT_FOUND, Json(json!({ "error": "user not found" }))).into_response()
        }
        Err(e) => error_response(e),
    }
}
