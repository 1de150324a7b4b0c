pub mod records;

use axum::{extract::DefaultBodyLimit, http::StatusCode, routing::get, Router};
use tower_http::trace::TraceLayer;

use crate::state::AppState;

pub fn create_router(state: AppState) -> Router {
    Router::new()
        // Record log. Values have no size cap.
        .route(
            "/",
            get(records::consume)
                .post(records::produce)
                .head(method_not_allowed),
        )
        .layer(DefaultBodyLimit::disable())
        // Health check
        .route("/health", get(health))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn health() -> &'static str {
    "OK"
}

async fn method_not_allowed() -> StatusCode {
    StatusCode::METHOD_NOT_ALLOWED
}
