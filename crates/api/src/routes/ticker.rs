//! Route definitions for the (unimplemented) ticker.

use axum::routing::get;
use axum::Router;

use crate::handlers::ticker;
use crate::state::AppState;

/// Routes mounted at `/ticker`.
///
/// `/latest` is a static segment and wins over `/{timestamp}`.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(ticker::get_ticker))
        .route("/latest", get(ticker::get_latest))
        .route("/{timestamp}", get(ticker::get_since))
}
