//! IGC flight recorder support.
//!
//! Parses the text format written by FAI flight recorders (`A`, `H` and `B`
//! records) and fetches IGC files over HTTP with [`reqwest`].

pub mod client;
pub mod error;
pub mod model;
pub mod parser;

pub use client::{IgcClient, DEFAULT_MAX_BODY_BYTES};
pub use error::{FetchError, IgcError};
pub use model::{Fix, ParsedTrack};
pub use parser::parse;
