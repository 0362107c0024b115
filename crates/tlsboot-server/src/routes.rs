//! Route configuration for the harness.

use std::sync::Arc;

use axum::Router;
use axum::routing::{get, post};
use tower_http::trace::TraceLayer;

use crate::handlers::{AppState, home, post_json, upload};

/// Create the harness router.
pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(home))
        .route("/postjson", post(post_json))
        .route("/upload", post(upload))
        .with_state(state)
        .layer(TraceLayer::new_for_http())
}
