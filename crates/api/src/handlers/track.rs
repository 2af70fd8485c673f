//! Handlers for the `/api/track` resource.

use axum::extract::{Path, Query, State};
use axum::response::IntoResponse;
use axum::Json;
use paragliding_core::types::TrackId;
use serde::{Deserialize, Serialize};

use crate::error::{AppError, AppResult};
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Request / response types
// ---------------------------------------------------------------------------

/// Query parameters for `POST /api/track`.
#[derive(Debug, Deserialize)]
pub struct RegisterParams {
    pub url: Option<String>,
}

/// `{"id": N}`, returned by registration and used for each listing entry.
#[derive(Debug, Serialize)]
pub struct TrackIdResponse {
    pub id: TrackId,
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// POST /api/track?url=<URL>
///
/// Register the IGC file at `url` and return its new id.
pub async fn register(
    State(state): State<AppState>,
    Query(params): Query<RegisterParams>,
) -> AppResult<impl IntoResponse> {
    let url = params
        .url
        .ok_or_else(|| AppError::BadRequest("Missing 'url' query parameter".to_string()))?;

    let id = state.registry.register(&url).await?;
    Ok(Json(TrackIdResponse { id }))
}

/// GET /api/track
///
/// List the ids of all registered tracks in ascending order.
pub async fn list(State(state): State<AppState>) -> Json<Vec<TrackIdResponse>> {
    let ids = state.registry.list_ids().await;
    Json(ids.into_iter().map(|id| TrackIdResponse { id }).collect())
}

/// GET /api/track/{id}
///
/// Full metadata of a track.
pub async fn get_info(
    State(state): State<AppState>,
    Path(id): Path<TrackId>,
) -> AppResult<impl IntoResponse> {
    let info = state.registry.info(id).await?;
    Ok(Json(info))
}

/// GET /api/track/{id}/{field}
///
/// A single metadata field as plain text with a trailing newline.
pub async fn get_field(
    State(state): State<AppState>,
    Path((id, field)): Path<(TrackId, String)>,
) -> AppResult<String> {
    let value = state.registry.field(id, &field).await?;
    Ok(format!("{value}\n"))
}
