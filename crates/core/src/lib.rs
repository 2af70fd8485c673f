//! Domain logic for the paragliding track service.
//!
//! Holds the track registry, metadata derivation and the small pieces of
//! pure logic (geodesy, uptime formatting) the HTTP layer builds on.

pub mod error;
pub mod geo;
pub mod registry;
pub mod source;
pub mod track_info;
pub mod types;
pub mod uptime;
