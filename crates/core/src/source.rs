//! Where the registry loads IGC tracks from.
//!
//! [`TrackSource`] is the seam between the registry and the outside world.
//! Production wires in [`IgcClient`]; [`MemoryTrackSource`] serves fixtures
//! held in memory.

use std::collections::HashMap;

use async_trait::async_trait;
use paragliding_igc::{FetchError, IgcClient, ParsedTrack};
use tokio::sync::RwLock;

/// Loads and parses the track referenced by a URL.
#[async_trait]
pub trait TrackSource: Send + Sync {
    async fn load(&self, url: &str) -> Result<ParsedTrack, FetchError>;
}

#[async_trait]
impl TrackSource for IgcClient {
    async fn load(&self, url: &str) -> Result<ParsedTrack, FetchError> {
        self.fetch(url).await
    }
}

/// In-memory source mapping URLs to raw IGC text.
///
/// Unknown URLs fail the same way an unreachable server would: with
/// [`FetchError::Status`] 404.
#[derive(Default)]
pub struct MemoryTrackSource {
    files: RwLock<HashMap<String, String>>,
}

impl MemoryTrackSource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Serve `igc` at `url`, replacing any previous content.
    pub async fn insert(&self, url: impl Into<String>, igc: impl Into<String>) {
        self.files.write().await.insert(url.into(), igc.into());
    }

    /// Stop serving `url`. Returns the previous content, if any.
    pub async fn remove(&self, url: &str) -> Option<String> {
        self.files.write().await.remove(url)
    }
}

#[async_trait]
impl TrackSource for MemoryTrackSource {
    async fn load(&self, url: &str) -> Result<ParsedTrack, FetchError> {
        let text = self
            .files
            .read()
            .await
            .get(url)
            .cloned()
            .ok_or_else(|| FetchError::Status {
                status: 404,
                url: url.to_string(),
            })?;
        Ok(paragliding_igc::parse(&text)?)
    }
}
