use axum::{routing::{get, post}, Router};

use crate::{controllers::{trading_controller, user_controller}, AppState};

pub fn add_routes(router: Router<AppState>) -> Router<AppState> {
    router
        .route("/api/init", post(user_controller::post_init))
        .route("/api/portfolio", get(user_controller::get_portfolio))
        .route("/api/order", post(trading_controller::post_buy_order))
        .route("/api/withdraw", post(trading_controller::post_withdraw_order))
}
