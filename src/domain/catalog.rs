//! Embedded seed catalog.
//!
//! The storefront ships a fixed demo inventory bundled into the binary; a
//! real deployment would swap this module for a backing service.

use once_cell::sync::Lazy;
use thiserror::Error;

use crate::domain::models::Shoe;

const SEED_JSON: &str = include_str!("../../assets/data/shoes.json");

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Seed catalog is not valid JSON: {0}")]
    Malformed(#[from] serde_json::Error),
}

/// Parse the embedded seed data.
pub fn load_seed() -> Result<Vec<Shoe>, CatalogError> {
    let shoes: Vec<Shoe> = serde_json::from_str(SEED_JSON)?;
    Ok(shoes)
}

/// All shoes in display order. The embedded seed is parsed on first access;
/// an empty catalog only happens if the bundled asset is broken.
pub static SHOES: Lazy<Vec<Shoe>> = Lazy::new(|| match load_seed() {
    Ok(shoes) => {
        tracing::debug!(shoe_count = shoes.len(), "Seed catalog loaded");
        shoes
    }
    Err(e) => {
        tracing::error!(error = %e, "Failed to parse embedded shoe catalog");
        Vec::new()
    }
});

/// Look up a shoe by its URL slug.
pub fn shoe_by_slug(slug: &str) -> Option<&'static Shoe> {
    SHOES.iter().find(|shoe| shoe.slug == slug)
}
