//! Axum route handlers for the Generation API.
//!
//! The session lock is never held across a model call: inputs are copied
//! out, the call runs unlocked, and the result is applied afterwards.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::generation::StoryDraft;
use crate::models::{EntryPatch, JourneyEntry};
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct DraftRequest {
    pub role: String,
    pub company: String,
    #[serde(default)]
    pub location: String,
    /// Chapter that precedes the new one. Defaults to the last entry.
    pub previous_id: Option<String>,
    #[serde(default)]
    pub notes: String,
}

#[derive(Debug, Serialize)]
pub struct RegenerateResponse {
    pub entry: JourneyEntry,
    /// False when the model produced nothing and the entry is unchanged.
    pub updated: bool,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/entries/draft
///
/// Returns a generated draft without storing it. Falls back to the canned
/// draft when the generative service is unavailable.
pub async fn handle_draft(
    State(state): State<AppState>,
    Json(req): Json<DraftRequest>,
) -> Result<Json<StoryDraft>, AppError> {
    Ok(Json(draft(&state, &req).await?))
}

/// POST /api/v1/entries/generate
///
/// Drafts a chapter and appends it to the timeline.
pub async fn handle_generate(
    State(state): State<AppState>,
    Json(req): Json<DraftRequest>,
) -> Result<(StatusCode, Json<JourneyEntry>), AppError> {
    let draft = draft(&state, &req).await?;
    let new_entry = draft.into_new_entry(&req.role, &req.company, &req.location);
    let entry = state
        .timeline
        .write(|s| s.append(new_entry).cloned())
        .await?;
    tracing::info!("Appended generated entry {} '{}'", entry.id, entry.title);
    Ok((StatusCode::CREATED, Json(entry)))
}

/// POST /api/v1/entries/:id/metadata
pub async fn handle_regenerate_metadata(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<RegenerateResponse>, AppError> {
    let current = find_entry(&state, &id).await?;

    let metadata = state
        .generator
        .regenerate_metadata(
            &current.role,
            &current.company,
            &current.title,
            &current.description,
        )
        .await;

    apply_result(&state, &id, current, metadata.map(|m| m.into_patch())).await
}

/// POST /api/v1/entries/:id/image
pub async fn handle_generate_image(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<RegenerateResponse>, AppError> {
    let current = find_entry(&state, &id).await?;

    let image_url = state
        .generator
        .generate_location_image(&current.company, &current.description)
        .await;

    let patch = image_url.map(|url| EntryPatch {
        image_url: Some(Some(url)),
        ..Default::default()
    });
    apply_result(&state, &id, current, patch).await
}

// ────────────────────────────────────────────────────────────────────────────
// Helpers
// ────────────────────────────────────────────────────────────────────────────

async fn draft(state: &AppState, req: &DraftRequest) -> Result<StoryDraft, AppError> {
    if req.role.trim().is_empty() {
        return Err(AppError::Validation("role cannot be empty".to_string()));
    }
    if req.company.trim().is_empty() {
        return Err(AppError::Validation("company cannot be empty".to_string()));
    }

    let previous = match &req.previous_id {
        Some(id) => Some(find_entry(state, id).await?),
        None => state.timeline.read(|s| s.last_entry().cloned()).await,
    };

    Ok(state
        .generator
        .generate_story(
            &req.role,
            &req.company,
            &req.location,
            previous.as_ref(),
            &req.notes,
        )
        .await)
}

async fn find_entry(state: &AppState, id: &str) -> Result<JourneyEntry, AppError> {
    state
        .timeline
        .read(|s| s.entry(id).cloned())
        .await
        .ok_or_else(|| AppError::NotFound(format!("Entry {id} does not exist")))
}

/// Applies a generation result, or reports the unchanged entry when there is none.
async fn apply_result(
    state: &AppState,
    id: &str,
    current: JourneyEntry,
    patch: Option<EntryPatch>,
) -> Result<Json<RegenerateResponse>, AppError> {
    let Some(patch) = patch else {
        return Ok(Json(RegenerateResponse {
            entry: current,
            updated: false,
        }));
    };

    // The entry may have been deleted while the model was working.
    let entry = state
        .timeline
        .write(|s| s.update(id, patch).cloned())
        .await?;
    Ok(Json(RegenerateResponse {
        entry,
        updated: true,
    }))
}
