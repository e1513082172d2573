// Resume ingestion pipeline: PDF text acquisition, heuristic field
// extraction, and normalization into canonical resume data.

pub mod document;
pub mod fields;
pub mod handlers;
pub mod normalizer;
