use std::sync::Arc;

use axum::Router;
use axum::routing::get;
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::state::AppState;

pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(handlers::index::index))
        .route("/api/dates", get(handlers::api::dates))
        .route("/api/papers/{date}", get(handlers::api::papers))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
