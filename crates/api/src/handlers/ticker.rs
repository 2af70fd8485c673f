//! Ticker endpoints.
//!
//! Reserved routes with no defined behaviour; each answers 501 until a
//! contract exists.

use axum::extract::Path;

use crate::error::{AppError, AppResult};

/// GET /api/ticker
pub async fn get_ticker() -> AppResult<()> {
    Err(AppError::NotImplemented("Ticker"))
}

/// GET /api/ticker/latest
pub async fn get_latest() -> AppResult<()> {
    Err(AppError::NotImplemented("Latest ticker"))
}

/// GET /api/ticker/{timestamp}
pub async fn get_since(Path(timestamp): Path<String>) -> AppResult<()> {
    tracing::debug!(%timestamp, "Timestamped ticker requested");
    Err(AppError::NotImplemented("Timestamped ticker"))
}
