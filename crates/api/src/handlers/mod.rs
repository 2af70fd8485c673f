pub mod metadata;
pub mod ticker;
pub mod track;
