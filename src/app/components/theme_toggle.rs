use dioxus::prelude::*;

use crate::shared::hooks::{apply_theme_class, save_theme, use_theme};

/// Day/night switch for the gallery chrome. Toggles the `dark` class on
/// the document root and persists the choice.
#[component]
pub fn ThemeToggle() -> Element {
    let mut current_theme = use_theme();

    let is_light = !current_theme().is_dark();

    let toggle_theme = move |_| {
        let new_theme = current_theme().toggled();
        current_theme.set(new_theme);

        spawn(async move {
            apply_theme_class(new_theme).await;
            save_theme(new_theme).await;
        });
    };

    let tooltip = format!("Switch to {} theme", current_theme().toggled().as_str());

    let toggle_class = if is_light {
        "c-theme-toggle c-theme-toggle--light"
    } else {
        "c-theme-toggle"
    };

    rsx! {
        div {
            class: "{toggle_class}",
            title: "{tooltip}",
            role: "button",
            tabindex: "0",
            aria_label: "Toggle light/dark theme",
            onclick: toggle_theme,

            div { class: "c-theme-toggle__ball" }
        }
    }
}
