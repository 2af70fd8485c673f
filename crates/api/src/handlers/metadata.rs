//! Handler for the service metadata endpoint.

use axum::extract::State;
use axum::Json;
use paragliding_core::uptime;
use serde::Serialize;

use crate::state::AppState;

/// Human-readable service description.
pub const SERVICE_DESCRIPTION: &str = "Service for Paragliding tracks";

/// Public API version.
pub const API_VERSION: &str = "v1";

/// Service metadata payload.
#[derive(Debug, Serialize)]
pub struct ServiceMetadata {
    /// Time since process start as an ISO-8601 duration.
    pub uptime: String,
    pub description: &'static str,
    pub version: &'static str,
}

/// GET /api
pub async fn get_metadata(State(state): State<AppState>) -> Json<ServiceMetadata> {
    Json(ServiceMetadata {
        uptime: uptime::iso8601_uptime(state.started_at, chrono::Utc::now()),
        description: SERVICE_DESCRIPTION,
        version: API_VERSION,
    })
}
