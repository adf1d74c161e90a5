use std::net::SocketAddr;
use std::sync::Arc;

use novalink::store::memory::MemoryStore;
use novalink::{config, routes, AppState};

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt::init();

    let settings = config::load();

    // The ledger lives in an external durable KV store in deployment; the
    // in-process store stands in behind the same contract.
    let store = Arc::new(MemoryStore::new());

    let state = AppState::new(store, settings.clone());
    let app = routes::app(state);

    let addr = SocketAddr::from((settings.host.parse::<std::net::IpAddr>().unwrap(), settings.port));
    tracing::info!("listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await.unwrap();
    axum::serve(listener, app).await.unwrap();
}
