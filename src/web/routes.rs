use super::handlers;
use super::state::AppState;
use axum::routing::get;
use axum::Router;
use std::sync::Arc;

pub fn public_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/", get(handlers::public::index))
        .route("/static/gallery.css", get(handlers::public::stylesheet))
        .route("/health", get(handlers::public::health))
}

pub fn htmx_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/htmx/gallery", get(handlers::htmx::gallery))
        .route("/htmx/gallery/results", get(handlers::htmx::gallery_results))
        .route("/htmx/modal/close", get(handlers::htmx::close_modal))
        .route("/htmx/modal/:cell", get(handlers::htmx::open_modal))
}
