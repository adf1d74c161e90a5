use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Deserialize;
use serde_json::json;

use crate::models::Order;
use crate::services::trading_service;
use crate::AppState;

use super::{error_response, missing_fields};

fn created(order: Order) -> Response {
    (
        StatusCode::OK,
        Json(json!({ "orderId": order.order_id, "status": order.status })),
    )
        .into_response()
}

#[derive(Deserialize)]
pub struct BuyBody {
    pub uid: Option<String>,
    pub amount: Option<f64>,
    pub shares: Option<f64>,
}

// POST /api/order
pub async fn post_buy_order(State(state): State<AppState>, Json(body): Json<BuyBody>) -> Response {
    let (Some(uid), Some(amount), Some(shares)) = (body.uid, body.amount, body.shares) else {
        return missing_fields();
    };

    match trading_service::create_buy_order(&state, &uid, amount, shares).await {
        Ok(order) => created(order),
        Err(e) => error_response(e),
    }
}

#[derive(Deserialize)]
pub struct WithdrawBody {
    pub uid: Option<String>,
    pub amount: Option<f64>,
}

// POST /api/withdraw
pub async fn post_withdraw_order(
    State(state): State<AppState>,
    Json(body): Json<WithdrawBody>,
) -> Response {
    let (Some(uid), Some(amount)) = (body.uid, body.amount) else {
        return missing_fields();
    };

    match trading_service::create_withdraw_order(&state, &uid, amount).await {
        Ok(order) => created(order),
        Err(e) => error_response(e),
    }
}
