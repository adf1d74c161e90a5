use axum::{routing::{get, post}, Router};

use crate::{controllers::admin_controller, AppState};

pub fn add_routes(router: Router<AppState>) -> Router<AppState> {
    router
        .route("/api/admin/pending", get(admin_controller::get_pending))
        .route("/api/admin/approve", post(admin_controller::post_approve))
        .route("/api/admin/reject", post(admin_controller::post_reject))
        .route("/api/admin/users", get(admin_controller::get_users))
        .route("/api/admin/settings", get(admin_controller::get_settings))
}
