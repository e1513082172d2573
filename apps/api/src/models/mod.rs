pub mod analysis;
pub mod extracted;
pub mod resume;
