use crate::types::TrackId;

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Invalid track source: {0}")]
    InvalidTrackSource(String),

    #[error("Entity not found: {entity} with id {id}")]
    NotFound { entity: &'static str, id: TrackId },

    #[error("Unknown field: {0}")]
    UnknownField(String),

    #[error("Track source unavailable: {0}")]
    SourceUnavailable(String),

    #[error("Internal error: {0}")]
    Internal(String),
}
