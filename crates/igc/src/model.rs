use chrono::{NaiveDate, NaiveTime};

/// A single timestamped position from a `B` record.
#[derive(Debug, Clone, PartialEq)]
pub struct Fix {
    /// UTC time of the fix.
    pub time: NaiveTime,
    /// Latitude in signed decimal degrees (north positive).
    pub latitude: f64,
    /// Longitude in signed decimal degrees (east positive).
    pub longitude: f64,
    /// `true` for a 3D fix (`A`), `false` for 2D or no GPS data (`V`).
    pub valid: bool,
    /// Barometric altitude in metres.
    pub pressure_altitude: i32,
    /// GNSS altitude in metres.
    pub gps_altitude: i32,
}

impl Fix {
    /// `(latitude, longitude)` in decimal degrees.
    pub fn position(&self) -> (f64, f64) {
        (self.latitude, self.longitude)
    }
}

/// Structured content of an IGC file.
#[derive(Debug, Clone, PartialEq)]
pub struct ParsedTrack {
    pub date: NaiveDate,
    pub pilot: String,
    pub glider_type: String,
    pub glider_id: String,
    /// Recorder manufacturer and serial from the `A` record, if any.
    pub manufacturer: Option<String>,
    pub fixes: Vec<Fix>,
}
