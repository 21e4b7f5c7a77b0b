//! Interactive gallery for the Button component.
//!
//! Each story documents one usage scenario, rendering the four variants
//! in a row the way the component's reference screenshots do. The
//! playground exposes every public prop as a live control and shows the
//! resolved class list next to the current args.

use std::str::FromStr;

use dioxus::document;
use dioxus::prelude::*;
use serde::Serialize;

use crate::app::components::{button_class, Button, ButtonSize, ButtonVariant, ThemeToggle};
use crate::server_fns::record_story_view;
use crate::shared::errors::UiError;

/// Named story, one per documented scenario.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Story {
    Base,
    Small,
    Large,
    Disabled,
    Rounded,
    Dark,
}

impl Story {
    pub const ALL: [Story; 6] = [
        Story::Base,
        Story::Small,
        Story::Large,
        Story::Disabled,
        Story::Rounded,
        Story::Dark,
    ];

    pub fn slug(&self) -> &'static str {
        match self {
            Story::Base => "base",
            Story::Small => "small",
            Story::Large => "large",
            Story::Disabled => "disabled",
            Story::Rounded => "rounded",
            Story::Dark => "dark",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Story::Base => "Base",
            Story::Small => "Small",
            Story::Large => "Large",
            Story::Disabled => "Disabled",
            Story::Rounded => "Rounded",
            Story::Dark => "Dark",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Story::Base => "Default props: primary variant, medium size.",
            Story::Small => "size: sm — lighter weight, tighter padding, smaller shadow.",
            Story::Large => "size: lg — heavier weight, wider padding, larger shadow.",
            Story::Disabled => "disabled — hover and focus-ring tokens are suppressed.",
            Story::Rounded => "class override appended last, so it wins on border-radius.",
            Story::Dark => "Rendered inside a dark-classed container on a black background.",
        }
    }
}

impl FromStr for Story {
    type Err = UiError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Story::ALL
            .into_iter()
            .find(|story| story.slug() == s)
            .ok_or_else(|| UiError::UnknownStory(s.to_string()))
    }
}

#[derive(Clone, Routable, Debug, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Layout)]
    // Full gallery: playground + every story
    #[route("/")]
    GalleryHome {},

    // Single story, linkable
    #[route("/story/:slug")]
    StoryPage { slug: String },
}

#[component]
pub fn App() -> Element {
    use_effect(|| {
        tracing::info!("Button gallery initialized");
    });

    rsx! {
        Router::<Route> {}
    }
}

#[component]
fn Layout() -> Element {
    // asset!() ensures the stylesheet is bundled and served correctly
    const BUNDLE_CSS: Asset = asset!("/assets/dist/bundle.css");

    rsx! {
        document::Link {
            rel: "stylesheet",
            href: BUNDLE_CSS
        },
        div { class: "c-gallery",
            header { class: "c-gallery__header",
                h1 { class: "c-gallery__title",
                    Link { to: Route::GalleryHome {}, "UI / Button" }
                }
                ThemeToggle {}
            }

            StoryNav {}

            main {
                Outlet::<Route> {}
            }
        }
    }
}

#[component]
fn StoryNav() -> Element {
    rsx! {
        nav { class: "c-gallery__nav",
            for story in Story::ALL {
                Link {
                    to: Route::StoryPage { slug: story.slug().to_string() },
                    class: "c-gallery__nav-link",
                    "{story.title()}"
                }
            }
        }
    }
}

#[component]
pub fn GalleryHome() -> Element {
    rsx! {
        Playground {}
        for story in Story::ALL {
            StorySection { story }
        }
    }
}

#[component]
pub fn StoryPage(slug: String) -> Element {
    let parsed = slug.parse::<Story>();

    // Report the view server-side; rendering never waits on this.
    use_effect(use_reactive!(|slug| {
        spawn(async move {
            let _ = record_story_view(slug).await;
        });
    }));

    match parsed {
        Ok(story) => rsx! {
            StorySection { story }
        },
        Err(err) => rsx! {
            section { class: "c-story c-story--error",
                h2 { class: "c-story__title", "Story not found" }
                p { class: "c-story__description", "{err}" }
            }
        },
    }
}

/// One story: title, description, and the four variants rendered with
/// the story's props.
#[component]
fn StorySection(story: Story) -> Element {
    let section_class = if story == Story::Dark {
        "c-story c-story--dark dark"
    } else {
        "c-story"
    };

    rsx! {
        section { class: "{section_class}", id: "{story.slug()}",
            h2 { class: "c-story__title", "{story.title()}" }
            p { class: "c-story__description", "{story.description()}" }
            div { class: "c-story__row",
                match story {
                    Story::Base | Story::Dark => rsx! { VariantRow {} },
                    Story::Small => rsx! { VariantRow { size: ButtonSize::Sm } },
                    Story::Large => rsx! { VariantRow { size: ButtonSize::Lg } },
                    Story::Disabled => rsx! { VariantRow { disabled: true } },
                    Story::Rounded => rsx! {
                        VariantRow {
                            class: "rounded-full h-8 w-8".to_string(),
                            label: "+".to_string(),
                        }
                    },
                }
            }
        }
    }
}

/// The reference template: one button per variant, sharing the story's
/// remaining props.
#[component]
fn VariantRow(
    size: Option<ButtonSize>,
    disabled: Option<bool>,
    class: Option<String>,
    label: Option<String>,
) -> Element {
    let label = label.unwrap_or_else(|| "Button".to_string());

    rsx! {
        for variant in ButtonVariant::ALL {
            Button {
                variant,
                size,
                disabled,
                class: class.clone(),
                "{label}"
            }
        }
    }
}

/// Current playground args, serialized into the args panel.
#[derive(Serialize)]
struct PlaygroundArgs<'a> {
    variant: ButtonVariant,
    size: ButtonSize,
    disabled: bool,
    class: &'a str,
}

#[component]
fn Playground() -> Element {
    let mut variant = use_signal(ButtonVariant::default);
    let mut size = use_signal(ButtonSize::default);
    let mut disabled = use_signal(|| false);
    let mut label = use_signal(|| "Button".to_string());
    let mut extra_classes = use_signal(String::new);
    let mut clicks = use_signal(|| 0usize);
    let mut parse_error = use_signal(|| None::<UiError>);

    // Select options come from the enums themselves, but values still go
    // through FromStr so out-of-set values fail loudly.
    let mut on_variant_change = move |value: String| match value.parse::<ButtonVariant>() {
        Ok(parsed) => {
            variant.set(parsed);
            parse_error.set(None);
        }
        Err(err) => parse_error.set(Some(err)),
    };
    let mut on_size_change = move |value: String| match value.parse::<ButtonSize>() {
        Ok(parsed) => {
            size.set(parsed);
            parse_error.set(None);
        }
        Err(err) => parse_error.set(Some(err)),
    };

    let extra = extra_classes();
    let resolved = button_class(variant(), size(), disabled(), &extra);
    let args = PlaygroundArgs {
        variant: variant(),
        size: size(),
        disabled: disabled(),
        class: &extra,
    };
    let args_json = serde_json::to_string_pretty(&args).unwrap_or_default();

    rsx! {
        section { class: "c-story", id: "playground",
            h2 { class: "c-story__title", "Playground" }
            p { class: "c-story__description",
                "Every public prop, live. The panel below shows the current args and the resolved class list."
            }

            div { class: "c-playground__controls",
                label { class: "c-playground__control",
                    "variant"
                    select {
                        value: "{variant()}",
                        onchange: move |evt| on_variant_change(evt.value()),
                        for option in ButtonVariant::ALL {
                            option { value: "{option}", "{option}" }
                        }
                    }
                }
                label { class: "c-playground__control",
                    "size"
                    select {
                        value: "{size()}",
                        onchange: move |evt| on_size_change(evt.value()),
                        for option in ButtonSize::ALL {
                            option { value: "{option}", "{option}" }
                        }
                    }
                }
                label { class: "c-playground__control",
                    "disabled"
                    input {
                        r#type: "checkbox",
                        checked: disabled(),
                        onchange: move |evt| disabled.set(evt.checked()),
                    }
                }
                label { class: "c-playground__control",
                    "children"
                    input {
                        r#type: "text",
                        value: "{label()}",
                        oninput: move |evt| label.set(evt.value()),
                    }
                }
                label { class: "c-playground__control",
                    "class"
                    input {
                        r#type: "text",
                        placeholder: "rounded-full h-8 w-8",
                        value: "{extra_classes()}",
                        oninput: move |evt| extra_classes.set(evt.value()),
                    }
                }
            }

            if let Some(err) = parse_error() {
                p { class: "c-story__description c-story--error", "{err}" }
            }

            div { class: "c-playground__preview",
                Button {
                    variant: variant(),
                    size: size(),
                    disabled: disabled(),
                    class: extra_classes(),
                    onclick: move |_| clicks += 1,
                    "{label()}"
                }
                span { class: "c-playground__clicks", "clicked {clicks()} times" }
            }

            pre { class: "c-playground__code", "{args_json}" }
            pre { class: "c-playground__code", "{resolved}" }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_story_slugs_parse_round_trip() {
        for story in Story::ALL {
            assert_eq!(story.slug().parse::<Story>(), Ok(story));
        }
    }

    #[test]
    fn test_unknown_slug_is_an_error() {
        let err = "rainbow".parse::<Story>().unwrap_err();
        assert_eq!(err, UiError::UnknownStory("rainbow".to_string()));
        assert_eq!(err.to_string(), "unknown story \"rainbow\"");
    }

    #[test]
    fn test_story_slugs_are_unique() {
        let mut slugs: Vec<_> = Story::ALL.iter().map(|s| s.slug()).collect();
        slugs.sort();
        slugs.dedup();
        assert_eq!(slugs.len(), Story::ALL.len());
    }

    #[test]
    fn test_playground_args_serialize_lowercase() {
        let args = PlaygroundArgs {
            variant: ButtonVariant::Danger,
            size: ButtonSize::Lg,
            disabled: true,
            class: "rounded-full",
        };
        let json = serde_json::to_string(&args).unwrap();
        assert_eq!(
            json,
            r#"{"variant":"danger","size":"lg","disabled":true,"class":"rounded-full"}"#
        );
    }
}
