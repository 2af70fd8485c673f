//! Track metadata derivation.
//!
//! Turns a parsed IGC file into the public [`TrackInfo`] summary and exposes
//! single fields of it by name.

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use paragliding_igc::ParsedTrack;
use serde::Serialize;

use crate::error::CoreError;
use crate::geo;
use crate::registry::Track;
use crate::source::TrackSource;

/* --------------------------------------------------------------------------
Types
-------------------------------------------------------------------------- */

/// Summary metadata of a registered track.
///
/// JSON keys match the field names accepted by [`TrackField`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TrackInfo {
    #[serde(rename = "H_date")]
    pub flight_date: NaiveDate,
    pub pilot: String,
    pub glider: String,
    pub glider_id: String,
    /// Sum of great-circle distances between consecutive fixes, in km.
    #[serde(rename = "track_length")]
    pub track_length_km: f64,
}

/// A single addressable field of [`TrackInfo`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrackField {
    Pilot,
    Glider,
    GliderId,
    TrackLength,
    FlightDate,
}

impl TrackField {
    pub const ALL: [TrackField; 5] = [
        TrackField::Pilot,
        TrackField::Glider,
        TrackField::GliderId,
        TrackField::TrackLength,
        TrackField::FlightDate,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            TrackField::Pilot => "pilot",
            TrackField::Glider => "glider",
            TrackField::GliderId => "glider_id",
            TrackField::TrackLength => "track_length",
            TrackField::FlightDate => "H_date",
        }
    }
}

impl FromStr for TrackField {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        TrackField::ALL
            .into_iter()
            .find(|field| field.as_str() == s)
            .ok_or_else(|| CoreError::UnknownField(s.to_string()))
    }
}

impl fmt::Display for TrackField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TrackInfo {
    /// Summarise a parsed IGC file.
    pub fn from_parsed(parsed: &ParsedTrack) -> Self {
        Self {
            flight_date: parsed.date,
            pilot: parsed.pilot.clone(),
            glider: parsed.glider_type.clone(),
            glider_id: parsed.glider_id.clone(),
            track_length_km: geo::path_length_km(parsed.fixes.iter().map(|fix| fix.position())),
        }
    }

    /// Text form of a single field, as served by the per-field endpoint.
    pub fn field(&self, field: TrackField) -> String {
        match field {
            TrackField::Pilot => self.pilot.clone(),
            TrackField::Glider => self.glider.clone(),
            TrackField::GliderId => self.glider_id.clone(),
            TrackField::TrackLength => self.track_length_km.to_string(),
            TrackField::FlightDate => self.flight_date.to_string(),
        }
    }
}

/* --------------------------------------------------------------------------
Derivation
-------------------------------------------------------------------------- */

/// Re-load `track` from its source and summarise it.
///
/// The source may have changed or vanished since registration, so a load
/// failure here is [`CoreError::SourceUnavailable`] rather than a bad request.
pub async fn derive(source: &dyn TrackSource, track: &Track) -> Result<TrackInfo, CoreError> {
    let parsed = source.load(&track.source_url).await.map_err(|e| {
        tracing::warn!(
            track_id = track.id,
            url = %track.source_url,
            error = %e,
            "Track source unavailable"
        );
        CoreError::SourceUnavailable(e.to_string())
    })?;
    Ok(TrackInfo::from_parsed(&parsed))
}

/// Derive a single named field of `track`.
///
/// The field name is checked before the source is loaded.
pub async fn derive_field(
    source: &dyn TrackSource,
    track: &Track,
    field_name: &str,
) -> Result<String, CoreError> {
    let field: TrackField = field_name.parse()?;
    let info = derive(source, track).await?;
    Ok(info.field(field))
}

/* --------------------------------------------------------------------------
Tests
-------------------------------------------------------------------------- */
