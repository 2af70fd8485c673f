use std::sync::Arc;

use paragliding_core::registry::TrackRegistry;
use paragliding_core::types::Timestamp;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// Cheaply cloneable (inner data is behind `Arc` or is `Copy`).
#[derive(Clone)]
pub struct AppState {
    /// Registry of all tracks registered since startup.
    pub registry: Arc<TrackRegistry>,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
    /// Process start time, reported as uptime by `GET /api`.
    pub started_at: Timestamp,
}
