// src/routes.rs

use axum::{
    Router,
    http::Method,
    routing::{get, post},
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use crate::{handlers::quiz, state::AppState};

/// Assembles the main application router.
///
/// * `POST /generate_quiz`, `GET /history`, `GET /quiz/{id}`.
/// * Applies global middleware (Trace, CORS).
/// * Injects global state (Database Pool, Config, Page Fetcher).
pub fn create_router(state: AppState) -> Router {
    // Any origin may call the API; there are no credentials to protect.
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([axum::http::header::CONTENT_TYPE]);

    Router::new()
        .route("/", get(quiz::health))
        .route("/generate_quiz", post(quiz::generate_quiz))
        .route("/history", get(quiz::list_history))
        .route("/quiz/{id}", get(quiz::get_quiz))
        // Global Middleware (applied from outside in)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}
