//! HTTP API for the reader page
//!
//! JSON endpoints for the sidebar, reading view and playback controls, SSE
//! for events and device commands, and the embedded page itself.

pub mod handlers;
pub mod sse;
pub mod ui;

use crate::state::SharedState;
use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

/// Shared application context passed to all handlers
#[derive(Clone)]
pub struct AppContext {
    pub state: Arc<SharedState>,
}

/// Build the application router
pub fn build_router(ctx: AppContext) -> Router {
    Router::new()
        // Reading page
        .route("/", get(ui::serve_index))
        .route("/reader/:chapter_id", get(ui::serve_index))
        .route("/static/reader.js", get(ui::serve_reader_js))

        // Health endpoint
        .route("/health", get(handlers::health))

        .nest(
            "/api/v1",
            Router::new()
                // Sidebar and reading view
                .route("/chapters", get(handlers::list_chapters))
                .route("/reader", get(handlers::current_reader))
                .route("/reader/:chapter_id", get(handlers::open_reader))

                // Playback controls
                .route("/playback/play", post(handlers::play))
                .route("/playback/pause", post(handlers::pause_toggle))
                .route("/playback/stop", post(handlers::stop))
                .route("/playback/state", get(handlers::playback_state))

                // Device notifications from the page
                .route("/device/ended", post(handlers::device_ended))
                .route("/device/error", post(handlers::device_error))

                // SSE event stream
                .route("/events", get(sse::event_stream)),
        )
        .with_state(ctx)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
}
