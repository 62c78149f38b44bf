// Domain models (business entities)
// Pure Rust, no framework dependencies

pub mod catalog;
pub mod models;
pub mod variant;
