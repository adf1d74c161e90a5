use axum::middleware::from_fn_with_state;
use axum::Router;

use crate::AppState;

pub mod api_routes;
pub mod admin_routes;

pub fn app(state: AppState) -> Router {
    let router = Router::<AppState>::new();

    let router = api_routes::add_routes(router);
    let router = admin_routes::add_routes(router);

    router
        .fallback(crate::controllers::not_found)
        .layer(from_fn_with_state(state.clone(), crate::auth::require_admin))
        .with_state(state)
}
