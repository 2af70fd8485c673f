//! In-memory track registry.
//!
//! Assigns sequential ids to registered tracks and answers lookups by id.
//! Registration loads the source once and caches the derived [`TrackInfo`];
//! with caching disabled every metadata read re-loads the source instead.
//!
//! Ids are assigned under the write lock after the (slow) source load has
//! succeeded, so concurrent registrations never share an id, a failed
//! registration never consumes one, and a reader never sees an id whose
//! record is not yet stored.

use std::sync::Arc;

use tokio::sync::RwLock;

use crate::error::CoreError;
use crate::source::TrackSource;
use crate::track_info::{self, TrackField, TrackInfo};
use crate::types::TrackId;

/// Entity name used in [`CoreError::NotFound`].
const ENTITY: &str = "Track";

/// A registered track: its id and the URL it was loaded from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Track {
    pub id: TrackId,
    pub source_url: String,
}

struct TrackEntry {
    track: Track,
    /// Present only when the metadata cache is enabled.
    info: Option<TrackInfo>,
}

/// Thread-safe registry of tracks, designed to be wrapped in `Arc` and
/// shared across handlers.
pub struct TrackRegistry {
    source: Arc<dyn TrackSource>,
    cache_info: bool,
    /// Entry `i` holds the track with id `i + 1`.
    entries: RwLock<Vec<TrackEntry>>,
}

impl TrackRegistry {
    /// Create an empty registry loading tracks from `source`, with metadata
    /// caching enabled.
    pub fn new(source: Arc<dyn TrackSource>) -> Self {
        Self {
            source,
            cache_info: true,
            entries: RwLock::new(Vec::new()),
        }
    }

    /// Enable or disable the metadata cache.
    pub fn with_info_cache(mut self, enabled: bool) -> Self {
        self.cache_info = enabled;
        self
    }

    /// Register the track at `source_url` and return its new id.
    ///
    /// Fails with [`CoreError::InvalidTrackSource`] if the URL is blank or
    /// does not resolve to a parseable track. Nothing is stored on failure.
    pub async fn register(&self, source_url: &str) -> Result<TrackId, CoreError> {
        let url = source_url.trim();
        if url.is_empty() {
            return Err(CoreError::InvalidTrackSource(
                "Track URL must not be empty".to_string(),
            ));
        }

        let parsed = self.source.load(url).await.map_err(|e| {
            tracing::debug!(url, error = %e, "Rejected track source");
            CoreError::InvalidTrackSource(e.to_string())
        })?;
        let info = self.cache_info.then(|| TrackInfo::from_parsed(&parsed));

        let id = {
            let mut entries = self.entries.write().await;
            let id = TrackId::try_from(entries.len() + 1)
                .map_err(|_| CoreError::Internal("Track id space exhausted".to_string()))?;
            entries.push(TrackEntry {
                track: Track {
                    id,
                    source_url: url.to_string(),
                },
                info,
            });
            id
        };

        tracing::info!(track_id = id, url, "Registered track");
        Ok(id)
    }

    /// All assigned ids in ascending order.
    pub async fn list_ids(&self) -> Vec<TrackId> {
        self.entries
            .read()
            .await
            .iter()
            .map(|entry| entry.track.id)
            .collect()
    }

    /// Look up a track by id.
    pub async fn get(&self, id: TrackId) -> Result<Track, CoreError> {
        let entries = self.entries.read().await;
        lookup(&entries, id).map(|entry| entry.track.clone())
    }

    /// Metadata of a track: cached, or re-derived from the source when the
    /// cache is disabled.
    pub async fn info(&self, id: TrackId) -> Result<TrackInfo, CoreError> {
        match self.snapshot(id).await? {
            (_, Some(info)) => Ok(info),
            (track, None) => track_info::derive(self.source.as_ref(), &track).await,
        }
    }

    /// Text form of a single metadata field of a track.
    ///
    /// An unknown id takes precedence over an unknown field name.
    pub async fn field(&self, id: TrackId, field_name: &str) -> Result<String, CoreError> {
        let (track, cached) = self.snapshot(id).await?;
        let field: TrackField = field_name.parse()?;

        match cached {
            Some(info) => Ok(info.field(field)),
            None => track_info::derive_field(self.source.as_ref(), &track, field.as_str()).await,
        }
    }

    /// Number of registered tracks.
    pub async fn len(&self) -> usize {
        self.entries.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }

    /// The track and its cached metadata, copied out of the read lock.
    async fn snapshot(&self, id: TrackId) -> Result<(Track, Option<TrackInfo>), CoreError> {
        let entries = self.entries.read().await;
        let entry = lookup(&entries, id)?;
        Ok((entry.track.clone(), entry.info.clone()))
    }
}

fn lookup(entries: &[TrackEntry], id: TrackId) -> Result<&TrackEntry, CoreError> {
    usize::try_from(id)
        .ok()
        .and_then(|id| id.checked_sub(1))
        .and_then(|idx| entries.get(idx))
        .ok_or(CoreError::NotFound { entity: ENTITY, id })
}

/* --------------------------------------------------------------------------
Tests
-------------------------------------------------------------------------- */
