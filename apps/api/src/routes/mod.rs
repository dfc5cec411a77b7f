pub mod health;

use axum::{
    routing::{get, patch, post, put},
    Router,
};

use crate::generation::handlers as generation;
use crate::state::AppState;
use crate::timeline::handlers as timeline;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Timeline reads
        .route("/api/v1/timeline", get(timeline::handle_get_timeline))
        .route("/api/v1/timeline/layout", get(timeline::handle_get_layout))
        .route("/api/v1/theme", get(timeline::handle_get_theme))
        // Session actions
        .route("/api/v1/session/start", post(timeline::handle_start))
        .route("/api/v1/session/reset", post(timeline::handle_reset))
        .route("/api/v1/session/advance", post(timeline::handle_advance))
        .route(
            "/api/v1/session/dark-mode",
            post(timeline::handle_toggle_dark_mode),
        )
        .route("/api/v1/session/autoplay", post(timeline::handle_set_autoplay))
        .route("/api/v1/session/select/:id", post(timeline::handle_select))
        .route("/api/v1/session/hit", post(timeline::handle_hit))
        .route("/api/v1/profile", put(timeline::handle_update_profile))
        // Entry editing
        .route("/api/v1/entries", post(timeline::handle_create_entry))
        .route(
            "/api/v1/entries/:id",
            patch(timeline::handle_update_entry).delete(timeline::handle_delete_entry),
        )
        // Generation
        .route("/api/v1/entries/draft", post(generation::handle_draft))
        .route("/api/v1/entries/generate", post(generation::handle_generate))
        .route(
            "/api/v1/entries/:id/metadata",
            post(generation::handle_regenerate_metadata),
        )
        .route(
            "/api/v1/entries/:id/image",
            post(generation::handle_generate_image),
        )
        .with_state(state)
}
