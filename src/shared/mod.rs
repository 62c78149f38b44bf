// Cross-cutting helpers
// Formatting, validation

pub mod format;

pub use format::{format_price, pluralize};
