use std::env;

#[derive(Debug, Clone)]
pub struct Settings {
    pub host: String,
    pub port: u16,

    pub admin_token: String,

    // Growth constants, fixed at deployment.
    pub growth_multiplier: f64,
    pub growth_days: f64,
    pub base_deposit: f64,
}

pub fn load() -> Settings {
    // Loads .env if present (no crash if missing)
    dotenvy::dotenv().ok();

    let host = env::var("HOST")
        .unwrap_or_else(|_| "127.0.0.1".to_string());

    let port = env::var("PORT")
        .ok()
        .and_then(|s| s.parse::<u16>().ok())
        .unwrap_or(3000);

    let admin_token = env::var("ADMIN_TOKEN")
        .unwrap_or_else(|_| "change-me-dev-admin".to_string());

    let growth_multiplier = env::var("GROWTH_MULTIPLIER")
        .ok()
        .and_then(|s| s.parse::<f64>().ok())
        .unwrap_or(38.0);

    let growth_days = env::var("GROWTH_DAYS")
        .ok()
        .and_then(|s| s.parse::<f64>().ok())
        .unwrap_or(14.0);

    let base_deposit = env::var("BASE_DEPOSIT")
        .ok()
        .and_then(|s| s.parse::<f64>().ok())
        .unwrap_or(100.0);

    Settings {
        host,
        port,
        admin_token,
        growth_multiplier,
        growth_days,
        base_deposit,
    }
}
