use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A single catalog entry as supplied to the storefront grid.
///
/// Prices are in minor currency units (cents) to avoid floating-point
/// rounding; `sale_price` is present only while the shoe is discounted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Shoe {
    /// URL-safe identifier, used to build the card's navigation target.
    pub slug: String,
    pub name: String,
    pub image_src: String,
    pub price: u32,
    #[serde(default)]
    pub sale_price: Option<u32>,
    pub release_date: DateTime<Utc>,
    pub num_of_colors: u32,
}
