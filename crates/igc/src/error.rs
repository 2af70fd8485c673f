/// Errors raised while parsing IGC text.
#[derive(Debug, thiserror::Error)]
pub enum IgcError {
    /// The content does not start with an `A` (manufacturer) record.
    #[error("Content is not an IGC file: expected an A record first")]
    NotIgc,

    /// No `HFDTE` header was present.
    #[error("IGC file has no flight date (HFDTE) header")]
    MissingDate,

    /// A record was recognised but could not be decoded.
    #[error("Invalid IGC record on line {line}: {reason}")]
    InvalidRecord { line: usize, reason: String },
}

/// Errors raised while loading an IGC file from a URL.
#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    /// The URL is not an absolute `http`/`https` URL.
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// The HTTP request itself failed (network, DNS, TLS, timeout).
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The server answered with a non-2xx status code.
    #[error("Fetching {url} returned status {status}")]
    Status { status: u16, url: String },

    /// The response body is larger than the configured limit.
    #[error("Response from {url} exceeds the {limit} byte limit")]
    TooLarge { limit: u64, url: String },

    /// The body was fetched but is not a valid IGC file.
    #[error(transparent)]
    Parse(#[from] IgcError),
}
