pub mod api;
pub mod static_assets;

use api::{AppState, chat::chat, memory::*, profile::*};
use axum::{
    Json, Router,
    http::{Method, header},
    routing::{get, post},
};
use tower_http::cors::CorsLayer;

#[derive(serde::Serialize)]
struct Health {
    status: String,
}

async fn health() -> Json<Health> {
    Json(Health {
        status: "adaptone is working!".to_string(),
    })
}

/// Build the full application router: API routes, permissive CORS for the
/// browser frontend, and the embedded static page as the fallback.
pub fn router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(tower_http::cors::Any)
        .allow_methods([Method::GET, Method::POST, Method::DELETE, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE]);

    Router::new()
        .route("/health", get(health))
        .route("/api/profile", post(upsert_profile))
        .route("/api/profile/{user_id}", get(get_profile))
        .route("/api/chat", post(chat))
        .route("/api/memory/{user_id}", get(get_memory).delete(clear_memory))
        .fallback(static_assets::static_handler)
        .layer(cors)
        .with_state(state)
}
