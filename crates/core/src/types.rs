/// Track identifiers are sequential integers starting at 1.
pub type TrackId = i64;

/// All timestamps are UTC.
pub type Timestamp = chrono::DateTime<chrono::Utc>;
