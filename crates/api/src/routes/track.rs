//! Route definitions for tracks.

use axum::routing::get;
use axum::Router;

use crate::handlers::track;
use crate::state::AppState;

/// Routes mounted at `/track`.
///
/// ```text
/// GET  /               -> list
/// POST /?url=          -> register
/// GET  /{id}           -> get_info
/// GET  /{id}/{field}   -> get_field
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(track::list).post(track::register))
        .route("/{id}", get(track::get_info))
        .route("/{id}/{field}", get(track::get_field))
}
