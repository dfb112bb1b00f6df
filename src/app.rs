use crate::state::AppState;
use axum::extract::DefaultBodyLimit;
use axum::Router;
use tower_http::trace::TraceLayer;

/// Builds the router. Bodies over the configured cap fail inside the
/// multipart decoder, which reports 413 through the usual error envelope.
pub fn create_app(state: AppState) -> Router {
    let body_limit = state.config.max_request_body_bytes;

    crate::routes::configure_routes()
        .layer(DefaultBodyLimit::max(body_limit))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
