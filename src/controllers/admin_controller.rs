use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Deserialize;
use serde_json::json;

use crate::services::{order_service, portfolio_service, trading_service};
use crate::AppState;

use super::{error_response, missing_fields};

// GET /api/admin/pending
pub async fn get_pending(State(state): State<AppState>) -> Response {
    match order_service::list_pending(&state).await {
        Ok(orders) => (StatusCode::OK, Json(orders)).into_response(),
        Err(e) => error_response(e),
    }
}

#[derive(Deserialize)]
pub struct ResolveBody {
    #[serde(rename = "orderId")]
    pub order_id: Option<String>,
}

// POST /api/admin/approve
pub async fn post_approve(
    State(state): State<AppState>,
    Json(body): Json<ResolveBody>,
) -> Response {
    let Some(order_id) = body.order_id else {
        return missing_fields();
    };
    match trading_service::approve(&state, &order_id).await {
        Ok(_) => (StatusCode::OK, Json(json!({ "ok": true }))).into_response(),
        Err(e) => error_response(e),
    }
}

// POST /api/admin/reject
pub async fn post_reject(
    State(state): State<AppState>,
    Json(body): Json<ResolveBody>,
) -> Response {
    let Some(order_id) = body.order_id else {
        return missing_fields();
    };
    match trading_service::reject(&state, &order_id).await {
        Ok(_) => (StatusCode::OK, Json(json!({ "ok": true }))).into_response(),
        Err(e) => error_response(e),
    }
}

// GET /api/admin/users
pub async fn get_users(State(state): State<AppState>) -> Response {
    match portfolio_service::list_all_users(&state).await {
        Ok(users) => (StatusCode::OK, Json(users)).into_response(),
        Err(e) => error_response(e),
    }
}

// GET /api/admin/settings
pub async fn get_settings(State(state): State<AppState>) -> Response {
    let s = &state.settings;
    (
        StatusCode::OK,
        Json(json!({
            "multiplier": s.growth_multiplier,
            "days": s.growth_days,
            "base": s.base_deposit,
        })),
    )
        .into_response()
}
