// Custom Dioxus hooks
pub mod use_theme;

pub use use_theme::{apply_theme_class, save_theme, use_theme, Theme};
