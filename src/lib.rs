//! Library entrypoint for NovaLink Investor.
//!
//! This file exists mainly to make controller tests easy (integration tests
//! under `tests/` can import the app state, routers, controllers, services).

pub mod config;
pub mod error;
pub mod models;
pub mod store;

// Keep this module at crate root because the codebase references it as
// `crate::auth`.
#[path = "middleware/auth.rs"]
pub mod auth;

pub mod services;

pub mod controllers;
pub mod routes;

#[derive(Clone)]
pub struct AppState {
    pub store: store::SharedStore,
    pub settings: config::Settings,
    pub curve: services::valuation_service::GrowthCurve,
}

impl AppState {
    /// Builds the shared state; the growth constants are frozen into an
    /// immutable curve here, once, at startup.
    pub fn new(store: store::SharedStore, settings: config::Settings) -> Self {
        let curve = services::valuation_service::GrowthCurve::new(
            settings.growth_multiplier,
            settings.growth_days,
        );
        AppState { store, settings, curve }
    }
}
