use std::str::FromStr;

use dioxus::document;
use dioxus::prelude::*;

use crate::shared::errors::UiError;

/// Gallery color scheme. The button's `dark:` tokens activate under the
/// `dark` class this theme puts on the document root.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Theme {
    Light,
    Dark,
}

impl Theme {
    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    pub fn is_dark(&self) -> bool {
        matches!(self, Theme::Dark)
    }

    pub fn toggled(&self) -> Theme {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    pub fn system_default(is_dark_preferred: bool) -> Theme {
        if is_dark_preferred {
            Theme::Dark
        } else {
            Theme::Light
        }
    }
}

impl FromStr for Theme {
    type Err = UiError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "light" => Ok(Theme::Light),
            "dark" => Ok(Theme::Dark),
            other => Err(UiError::InvalidOption {
                field: "theme",
                value: other.to_string(),
                allowed: vec!["light", "dark"],
            }),
        }
    }
}

/// Theme signal seeded from localStorage, falling back to the OS
/// `prefers-color-scheme` preference. SSR renders with the light default
/// and the client corrects on mount.
pub fn use_theme() -> Signal<Theme> {
    let theme = use_signal(|| Theme::Light);

    use_effect(move || {
        let mut theme = theme;
        spawn(async move {
            #[cfg(target_arch = "wasm32")]
            {
                let initial = match load_saved_theme() {
                    Some(saved) => saved,
                    None => Theme::system_default(prefers_dark()),
                };
                theme.set(initial);
                apply_theme_class(initial).await;
            }
            #[cfg(not(target_arch = "wasm32"))]
            {
                let _ = &mut theme;
            }
        });
    });

    theme
}

#[cfg(target_arch = "wasm32")]
fn load_saved_theme() -> Option<Theme> {
    let storage = web_sys::window()?.local_storage().ok()??;
    let saved = storage.get_item("theme").ok()??;
    // A corrupted stored value falls back to the system preference
    saved.parse::<Theme>().ok()
}

#[cfg(target_arch = "wasm32")]
fn prefers_dark() -> bool {
    web_sys::window()
        .and_then(|w| w.match_media("(prefers-color-scheme: dark)").ok().flatten())
        .map(|mq| mq.matches())
        .unwrap_or(false)
}

/// Swap the theme class on the document root.
pub async fn apply_theme_class(theme: Theme) {
    let script = format!(
        r#"
        (function() {{
            const root = document.documentElement;
            root.classList.remove('light', 'dark');
            root.classList.add('{}');
        }})()
        "#,
        theme.as_str()
    );
    let _ = document::eval(&script).await;
}

/// Persist the theme choice to localStorage.
pub async fn save_theme(theme: Theme) {
    #[cfg(target_arch = "wasm32")]
    {
        if let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok().flatten()) {
            let _ = storage.set_item("theme", theme.as_str());
        }
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        let _ = theme;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_theme_toggles_between_light_and_dark() {
        assert_eq!(Theme::Light.toggled(), Theme::Dark);
        assert_eq!(Theme::Dark.toggled(), Theme::Light);
    }

    #[test]
    fn test_theme_parse_round_trip() {
        for theme in [Theme::Light, Theme::Dark] {
            assert_eq!(theme.as_str().parse::<Theme>(), Ok(theme));
        }
    }

    #[test]
    fn test_unknown_theme_is_invalid_option() {
        let err = "sepia".parse::<Theme>().unwrap_err();
        assert!(matches!(err, UiError::InvalidOption { field: "theme", .. }));
    }

    #[test]
    fn test_system_default_follows_preference() {
        assert_eq!(Theme::system_default(true), Theme::Dark);
        assert_eq!(Theme::system_default(false), Theme::Light);
    }
}
