//! HTTP client for loading IGC files by URL.

use std::time::Duration;

use reqwest::Url;

use crate::error::FetchError;
use crate::model::ParsedTrack;
use crate::parser;

/// Default cap on the size of a downloaded IGC file (5 MiB).
pub const DEFAULT_MAX_BODY_BYTES: u64 = 5 * 1024 * 1024;

/// Fetches and parses IGC files over HTTP.
///
/// Cheap to clone: [`reqwest::Client`] shares its connection pool.
#[derive(Clone)]
pub struct IgcClient {
    client: reqwest::Client,
    max_body_bytes: u64,
}

impl IgcClient {
    /// Create a client whose requests are bounded by `timeout`, accepting
    /// bodies of up to [`DEFAULT_MAX_BODY_BYTES`].
    pub fn new(timeout: Duration) -> Result<Self, FetchError> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            max_body_bytes: DEFAULT_MAX_BODY_BYTES,
        })
    }

    /// Reject response bodies larger than `limit` bytes.
    pub fn with_max_body_bytes(mut self, limit: u64) -> Self {
        self.max_body_bytes = limit;
        self
    }

    /// Download `url` and parse the body as IGC.
    pub async fn fetch(&self, url: &str) -> Result<ParsedTrack, FetchError> {
        let url = validate_url(url)?;

        let mut response = self.client.get(url.clone()).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }

        let too_large = || FetchError::TooLarge {
            limit: self.max_body_bytes,
            url: url.to_string(),
        };

        if response
            .content_length()
            .is_some_and(|len| len > self.max_body_bytes)
        {
            return Err(too_large());
        }

        // Content-Length may be absent or wrong, so the limit is enforced
        // while streaming as well.
        let mut body = Vec::new();
        while let Some(chunk) = response.chunk().await? {
            if (body.len() + chunk.len()) as u64 > self.max_body_bytes {
                return Err(too_large());
            }
            body.extend_from_slice(&chunk);
        }
        tracing::debug!(%url, bytes = body.len(), "Fetched IGC file");

        Ok(parser::parse(&String::from_utf8_lossy(&body))?)
    }
}

/// Check that `raw` is an absolute `http` or `https` URL.
pub fn validate_url(raw: &str) -> Result<Url, FetchError> {
    let url = Url::parse(raw.trim())
        .map_err(|e| FetchError::InvalidUrl(format!("'{raw}': {e}")))?;

    match url.scheme() {
        "http" | "https" => Ok(url),
        other => Err(FetchError::InvalidUrl(format!(
            "'{raw}': unsupported scheme '{other}'"
        ))),
    }
}
