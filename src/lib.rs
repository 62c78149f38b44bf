// Public API exports
pub mod config;
pub mod domain;
pub mod shared;

// UI layer (components, pages, routing)
pub mod app;
