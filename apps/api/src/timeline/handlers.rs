//! Axum route handlers for the session and entry-editing API.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde::Deserialize;

use crate::errors::AppError;
use crate::layout::PathLayout;
use crate::models::{EntryPatch, JourneyEntry, NewEntry, Profile, Theme};
use crate::state::AppState;
use crate::timeline::{Action, SessionSnapshot};

// ────────────────────────────────────────────────────────────────────────────
// Request types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct AutoPlayRequest {
    pub enabled: bool,
}

/// A click position in view-box coordinates.
#[derive(Debug, Deserialize)]
pub struct HitRequest {
    pub x: f64,
    pub y: f64,
}

// ────────────────────────────────────────────────────────────────────────────
// Reads
// ────────────────────────────────────────────────────────────────────────────

/// GET /api/v1/timeline
pub async fn handle_get_timeline(State(state): State<AppState>) -> Json<SessionSnapshot> {
    Json(state.timeline.read(|s| s.snapshot()).await)
}

/// GET /api/v1/timeline/layout
pub async fn handle_get_layout(State(state): State<AppState>) -> Json<PathLayout> {
    Json(state.timeline.read(|s| s.layout().clone()).await)
}

/// GET /api/v1/theme
pub async fn handle_get_theme(State(state): State<AppState>) -> Json<Theme> {
    Json(state.timeline.read(|s| s.theme()).await)
}

// ────────────────────────────────────────────────────────────────────────────
// Session actions
// ────────────────────────────────────────────────────────────────────────────

async fn dispatch(state: &AppState, action: Action) -> Result<Json<SessionSnapshot>, AppError> {
    Ok(Json(state.timeline.dispatch(action).await?))
}

/// POST /api/v1/session/start
pub async fn handle_start(
    State(state): State<AppState>,
) -> Result<Json<SessionSnapshot>, AppError> {
    dispatch(&state, Action::Start).await
}

/// POST /api/v1/session/reset
pub async fn handle_reset(
    State(state): State<AppState>,
) -> Result<Json<SessionSnapshot>, AppError> {
    dispatch(&state, Action::Reset).await
}

/// POST /api/v1/session/advance
pub async fn handle_advance(
    State(state): State<AppState>,
) -> Result<Json<SessionSnapshot>, AppError> {
    dispatch(&state, Action::Advance).await
}

/// POST /api/v1/session/dark-mode
pub async fn handle_toggle_dark_mode(
    State(state): State<AppState>,
) -> Result<Json<SessionSnapshot>, AppError> {
    dispatch(&state, Action::ToggleDarkMode).await
}

/// POST /api/v1/session/autoplay
pub async fn handle_set_autoplay(
    State(state): State<AppState>,
    Json(req): Json<AutoPlayRequest>,
) -> Result<Json<SessionSnapshot>, AppError> {
    dispatch(&state, Action::SetAutoPlay(req.enabled)).await
}

/// POST /api/v1/session/select/:id
pub async fn handle_select(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<SessionSnapshot>, AppError> {
    dispatch(&state, Action::Select(id)).await
}

/// POST /api/v1/session/hit
///
/// Resolves a click to the marker under it and selects that entry.
pub async fn handle_hit(
    State(state): State<AppState>,
    Json(req): Json<HitRequest>,
) -> Result<Json<SessionSnapshot>, AppError> {
    let key = state
        .timeline
        .read(|s| s.layout().hit_test(req.x, req.y).map(str::to_string))
        .await
        .ok_or_else(|| AppError::NotFound(format!("No marker at ({}, {})", req.x, req.y)))?;
    dispatch(&state, Action::Select(key)).await
}

/// PUT /api/v1/profile
pub async fn handle_update_profile(
    State(state): State<AppState>,
    Json(profile): Json<Profile>,
) -> Result<Json<Profile>, AppError> {
    if profile.name.trim().is_empty() {
        return Err(AppError::Validation("name cannot be empty".to_string()));
    }
    let profile = state
        .timeline
        .write(|s| {
            s.set_profile(profile);
            s.profile().clone()
        })
        .await;
    Ok(Json(profile))
}

// ────────────────────────────────────────────────────────────────────────────
// Entry editing
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/entries
pub async fn handle_create_entry(
    State(state): State<AppState>,
    Json(new_entry): Json<NewEntry>,
) -> Result<(StatusCode, Json<JourneyEntry>), AppError> {
    let entry = state
        .timeline
        .write(|s| s.append(new_entry).cloned())
        .await?;
    tracing::info!("Appended entry {} ({} at {})", entry.id, entry.role, entry.company);
    Ok((StatusCode::CREATED, Json(entry)))
}

/// PATCH /api/v1/entries/:id
pub async fn handle_update_entry(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(patch): Json<EntryPatch>,
) -> Result<Json<JourneyEntry>, AppError> {
    let entry = state
        .timeline
        .write(|s| s.update(&id, patch).cloned())
        .await?;
    Ok(Json(entry))
}

/// DELETE /api/v1/entries/:id
pub async fn handle_delete_entry(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, AppError> {
    let removed = state.timeline.write(|s| s.remove(&id)).await?;
    tracing::info!("Removed entry {} ({})", removed.id, removed.title);
    Ok(StatusCode::NO_CONTENT)
}
