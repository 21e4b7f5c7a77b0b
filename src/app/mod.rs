pub mod components;
pub mod pages;

// Re-export the gallery App
pub use pages::gallery::App;
