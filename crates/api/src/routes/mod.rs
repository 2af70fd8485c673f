pub mod health;
pub mod ticker;
pub mod track;

use axum::routing::get;
use axum::Router;

use crate::handlers;
use crate::state::AppState;

/// Build the `/api` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /                                 service metadata (GET)
///
/// /track                            list (GET), register (POST ?url=)
/// /track/{id}                       track metadata (GET)
/// /track/{id}/{field}               single field as text (GET)
///
/// /ticker                           501
/// /ticker/latest                    501
/// /ticker/{timestamp}               501
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(handlers::metadata::get_metadata))
        .nest("/track", track::router())
        .nest("/ticker", ticker::router())
}
