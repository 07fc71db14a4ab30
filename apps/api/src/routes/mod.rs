pub mod health;

use axum::{routing::get, routing::post, Router};

use crate::export::handlers as export_handlers;
use crate::generation::handlers as generation_handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        .route(
            "/api/v1/listings/generate",
            post(generation_handlers::handle_generate),
        )
        .route(
            "/api/v1/listings/export/markdown",
            post(export_handlers::handle_export_markdown),
        )
        .route(
            "/api/v1/listings/export/text",
            post(export_handlers::handle_export_text),
        )
        .with_state(state)
}
