pub mod routes;
pub mod validate;

use crate::state::AppState;
use axum::extract::DefaultBodyLimit;
use axum::routing::{get, post};
use axum::Router;
use std::sync::Arc;
use tower::ServiceBuilder;
use tower_http::cors::{Any, CorsLayer};

/// Build the HTTP router. Shared by main and the route tests.
pub fn router(state: Arc<AppState>) -> Router {
    let max_body = state.config.max_body_bytes;

    Router::new()
        .route("/analyze", post(routes::analyze_graph))
        .route("/api/analysis", post(routes::analyze_xy))
        .route("/api/counters", get(routes::get_counters))
        .route("/health", get(routes::health))
        .layer(
            ServiceBuilder::new()
                .layer(DefaultBodyLimit::max(max_body))
                .layer(
                    CorsLayer::new()
                        .allow_origin(Any)
                        .allow_methods(Any)
                        .allow_headers(Any),
                ),
        )
        .with_state(state)
}
