#[global_allocator]
static GLOBAL: mimalloc::MiMalloc = mimalloc::MiMalloc;

use adaptone_core::memory::SessionStore;
use adaptone_server::api::AppState;
use adaptone_storage::Storage;
use std::sync::Arc;

const DEFAULT_PORT: u16 = 3000;

#[tokio::main]
async fn main() {
    // Initialize tracing logger
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,adaptone_server=debug".into()),
        )
        .with_target(false)
        .init();

    tracing::info!("Starting Adaptone server");

    let db_path = adaptone_core::paths::ensure_database_path_string()
        .expect("Failed to determine Adaptone database path");
    let storage = Arc::new(Storage::new(&db_path).expect("Failed to open profile database"));
    let sessions = Arc::new(SessionStore::new());

    let app = adaptone_server::router(AppState::new(storage, sessions));

    let port = std::env::var("ADAPTONE_PORT")
        .ok()
        .and_then(|value| value.parse::<u16>().ok())
        .unwrap_or(DEFAULT_PORT);

    let listener = tokio::net::TcpListener::bind(("0.0.0.0", port))
        .await
        .unwrap_or_else(|_| panic!("Failed to bind to port {port}"));

    tracing::info!("Adaptone running on http://localhost:{port}");

    axum::serve(listener, app)
        .await
        .expect("Failed to run axum server");
}
