pub mod button;
pub mod theme_toggle;

pub use button::{button_class, Button, ButtonSize, ButtonVariant};
pub use theme_toggle::ThemeToggle;
