use axum::{routing::get, Router};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use super::handlers;
use super::AppState;

/// Creates the main API router with all routes
///
/// CORS is wide open: the API serves browser frontends on arbitrary
/// origins, and every endpoint is a read.
pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(handlers::root))
        .route("/health", get(handlers::health_check))
        .route("/search", get(handlers::search))
        .route("/recommend", get(handlers::recommend))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}
