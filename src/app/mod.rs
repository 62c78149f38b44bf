pub mod components;
pub mod pages;

// Re-export the storefront App
pub use pages::App;
