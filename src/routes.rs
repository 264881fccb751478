use crate::handlers::{
    catalog_handler, embed_handler, health_handler, ready_handler, resolve_handler,
    tool_demo_handler, type_handler, types_handler,
};
use crate::state::AppState;
use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};
use std::sync::Arc;

/// All API routes, without middleware or the metrics endpoint.
pub fn router(state: Arc<AppState>) -> Router {
    let body_limit = state.config.max_body_bytes;

    Router::new()
        // Resolver endpoints
        .route("/types", get(types_handler))
        .route("/types/:tool_type", get(type_handler))
        .route("/resolve", post(resolve_handler))
        .route("/embed", post(embed_handler))
        // Catalog endpoints
        .route("/catalog", get(catalog_handler))
        .route("/catalog/:id/demo", get(tool_demo_handler))
        // Health endpoints
        .route("/health", get(health_handler))
        .route("/ready", get(ready_handler))
        .layer(DefaultBodyLimit::max(body_limit))
        .with_state(state)
}
