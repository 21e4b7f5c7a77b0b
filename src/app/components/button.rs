//! Styled button component.
//!
//! The visual style is resolved by [`button_class`], a pure function that
//! maps variant/size/disabled to a fixed-order list of utility classes
//! (defined in `assets/css/utilities.css`). Caller-supplied classes are
//! appended last so they win on conflicting rules.

use std::fmt;
use std::str::FromStr;

use dioxus::prelude::*;
use serde::{Deserialize, Serialize};

use crate::shared::errors::UiError;

/// Semantic color category of the button.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ButtonVariant {
    #[default]
    Primary,
    Success,
    Warning,
    Danger,
}

impl ButtonVariant {
    pub const ALL: [ButtonVariant; 4] = [
        ButtonVariant::Primary,
        ButtonVariant::Success,
        ButtonVariant::Warning,
        ButtonVariant::Danger,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ButtonVariant::Primary => "primary",
            ButtonVariant::Success => "success",
            ButtonVariant::Warning => "warning",
            ButtonVariant::Danger => "danger",
        }
    }

    fn bg_class(&self) -> &'static str {
        match self {
            ButtonVariant::Primary => "bg-blue-600 dark:bg-blue-100",
            ButtonVariant::Success => "bg-green-600 dark:bg-green-100",
            ButtonVariant::Warning => "bg-orange-600 dark:bg-orange-100",
            ButtonVariant::Danger => "bg-red-600 dark:bg-red-100",
        }
    }

    fn bg_hover_class(&self) -> &'static str {
        match self {
            ButtonVariant::Primary => "hover:bg-blue-700 dark:hover:bg-blue-200",
            ButtonVariant::Success => "hover:bg-green-700 dark:hover:bg-green-200",
            ButtonVariant::Warning => "hover:bg-orange-700 dark:hover:bg-orange-200",
            ButtonVariant::Danger => "hover:bg-red-700 dark:hover:bg-red-200",
        }
    }

    fn text_class(&self) -> &'static str {
        match self {
            ButtonVariant::Primary => "text-white dark:text-blue-700",
            ButtonVariant::Success => "text-white dark:text-green-700",
            ButtonVariant::Warning => "text-white dark:text-orange-700",
            ButtonVariant::Danger => "text-white dark:text-red-700",
        }
    }

    fn shadow_color_class(&self) -> &'static str {
        match self {
            ButtonVariant::Primary => "shadow-blue-500/50",
            ButtonVariant::Success => "shadow-green-500/50",
            ButtonVariant::Warning => "shadow-orange-500/50",
            ButtonVariant::Danger => "shadow-red-500/50",
        }
    }

    fn ring_color_class(&self) -> &'static str {
        match self {
            ButtonVariant::Primary => "focus:ring-blue-500",
            ButtonVariant::Success => "focus:ring-green-500",
            ButtonVariant::Warning => "focus:ring-orange-500",
            ButtonVariant::Danger => "focus:ring-red-500",
        }
    }
}

impl fmt::Display for ButtonVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ButtonVariant {
    type Err = UiError;

    // Fails eagerly on unknown values instead of defaulting, so a typo in
    // a control or URL surfaces as an error rather than a missing token.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "primary" => Ok(ButtonVariant::Primary),
            "success" => Ok(ButtonVariant::Success),
            "warning" => Ok(ButtonVariant::Warning),
            "danger" => Ok(ButtonVariant::Danger),
            other => Err(UiError::InvalidOption {
                field: "variant",
                value: other.to_string(),
                allowed: Self::ALL.iter().map(|v| v.as_str()).collect(),
            }),
        }
    }
}

/// Relative scale category, affects padding, font size/weight, shadow size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ButtonSize {
    Sm,
    #[default]
    Md,
    Lg,
}

impl ButtonSize {
    pub const ALL: [ButtonSize; 3] = [ButtonSize::Sm, ButtonSize::Md, ButtonSize::Lg];

    pub fn as_str(&self) -> &'static str {
        match self {
            ButtonSize::Sm => "sm",
            ButtonSize::Md => "md",
            ButtonSize::Lg => "lg",
        }
    }

    fn font_size_class(&self) -> &'static str {
        match self {
            ButtonSize::Sm => "text-sm",
            ButtonSize::Md => "text-base",
            ButtonSize::Lg => "text-lg",
        }
    }

    fn font_weight_class(&self) -> &'static str {
        match self {
            ButtonSize::Sm => "font-light",
            ButtonSize::Md => "font-normal",
            ButtonSize::Lg => "font-medium",
        }
    }

    fn padding_class(&self) -> &'static str {
        match self {
            ButtonSize::Sm => "px-1.5 py-0.5",
            ButtonSize::Md => "px-2 py-1",
            ButtonSize::Lg => "px-2.5 py-1.5",
        }
    }

    fn shadow_size_class(&self) -> &'static str {
        match self {
            ButtonSize::Sm => "shadow-sm",
            ButtonSize::Md => "shadow-md",
            ButtonSize::Lg => "shadow-lg",
        }
    }
}

impl fmt::Display for ButtonSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ButtonSize {
    type Err = UiError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "sm" => Ok(ButtonSize::Sm),
            "md" => Ok(ButtonSize::Md),
            "lg" => Ok(ButtonSize::Lg),
            other => Err(UiError::InvalidOption {
                field: "size",
                value: other.to_string(),
                allowed: Self::ALL.iter().map(|s| s.as_str()).collect(),
            }),
        }
    }
}

/// Resolve the full class list for a button.
///
/// Deterministic and side-effect free. Tokens are emitted in a fixed
/// order: base, background, hover-background, font size, font weight,
/// text color, padding, shadow size, shadow color, border, focus ring,
/// cursor, opacity, then `override_classes` verbatim. Hover and ring
/// tokens are omitted entirely when `disabled` is set, so a disabled
/// button shows no interactive affordances.
pub fn button_class(
    variant: ButtonVariant,
    size: ButtonSize,
    disabled: bool,
    override_classes: &str,
) -> String {
    let mut tokens: Vec<&str> = vec!["inline-flex items-center justify-center font-sans"];

    tokens.push(variant.bg_class());
    if !disabled {
        tokens.push(variant.bg_hover_class());
    }
    tokens.push(size.font_size_class());
    tokens.push(size.font_weight_class());
    tokens.push(variant.text_class());
    tokens.push(size.padding_class());
    tokens.push(size.shadow_size_class());
    tokens.push(variant.shadow_color_class());
    tokens.push("border border-transparent border-solid rounded-md");
    if !disabled {
        tokens.push("focus:outline-none");
        tokens.push(variant.ring_color_class());
        tokens.push("focus:ring-2 focus:ring-offset-2 dark:focus:ring-0 dark:focus:ring-offset-0");
    }
    tokens.push(if disabled { "cursor-not-allowed" } else { "cursor-pointer" });
    tokens.push(if disabled { "opacity-75" } else { "opacity-100" });
    if !override_classes.is_empty() {
        tokens.push(override_classes);
    }

    tokens.join(" ")
}

#[component]
pub fn Button(
    variant: Option<ButtonVariant>,
    size: Option<ButtonSize>,
    disabled: Option<bool>,
    /// Extra classes appended after the resolved tokens, so they take
    /// precedence on conflicting rules.
    class: Option<String>,
    onclick: Option<EventHandler<MouseEvent>>,
    #[props(extends = button, extends = GlobalAttributes)]
    attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let variant = variant.unwrap_or_default();
    let size = size.unwrap_or_default();
    let disabled = disabled.unwrap_or(false);
    let override_classes = class.unwrap_or_default();

    let class_list = button_class(variant, size, disabled, &override_classes);

    rsx! {
        button {
            class: "{class_list}",
            disabled: disabled,
            onclick: move |evt| {
                if let Some(handler) = &onclick {
                    handler.call(evt);
                }
            },
            ..attributes,
            {children}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolver_is_deterministic() {
        for variant in ButtonVariant::ALL {
            for size in ButtonSize::ALL {
                for disabled in [false, true] {
                    let a = button_class(variant, size, disabled, "");
                    let b = button_class(variant, size, disabled, "");
                    assert_eq!(a, b);
                }
            }
        }
    }

    #[test]
    fn test_defaults_resolve_primary_md() {
        let class = button_class(
            ButtonVariant::default(),
            ButtonSize::default(),
            false,
            "",
        );

        assert_eq!(
            class,
            "inline-flex items-center justify-center font-sans \
             bg-blue-600 dark:bg-blue-100 \
             hover:bg-blue-700 dark:hover:bg-blue-200 \
             text-base font-normal \
             text-white dark:text-blue-700 \
             px-2 py-1 \
             shadow-md shadow-blue-500/50 \
             border border-transparent border-solid rounded-md \
             focus:outline-none focus:ring-blue-500 \
             focus:ring-2 focus:ring-offset-2 dark:focus:ring-0 dark:focus:ring-offset-0 \
             cursor-pointer opacity-100"
        );
    }

    #[test]
    fn test_danger_lg_uses_red_and_lg_tokens() {
        let class = button_class(ButtonVariant::Danger, ButtonSize::Lg, false, "");

        assert!(class.contains("bg-red-600"));
        assert!(class.contains("text-white dark:text-red-700"));
        assert!(class.contains("shadow-red-500/50"));
        assert!(class.contains("focus:ring-red-500"));
        assert!(class.contains("text-lg"));
        assert!(class.contains("font-medium"));
        assert!(class.contains("px-2.5 py-1.5"));
        assert!(class.contains("shadow-lg"));
    }

    #[test]
    fn test_disabled_suppresses_hover_and_ring() {
        let enabled = button_class(ButtonVariant::Primary, ButtonSize::Md, false, "");
        let disabled = button_class(ButtonVariant::Primary, ButtonSize::Md, true, "");

        assert!(enabled.contains("hover:bg-blue-700"));
        assert!(enabled.contains("focus:ring-blue-500"));
        assert!(!disabled.contains("hover:"));
        assert!(!disabled.contains("focus:"));
        assert!(disabled.contains("cursor-not-allowed"));
        assert!(disabled.contains("opacity-75"));
        assert!(!disabled.contains("cursor-pointer"));
        assert!(!disabled.contains("opacity-100"));
    }

    #[test]
    fn test_override_classes_are_a_verbatim_suffix() {
        let class = button_class(
            ButtonVariant::Primary,
            ButtonSize::Md,
            false,
            "rounded-full h-8 w-8",
        );

        assert!(class.ends_with(" rounded-full h-8 w-8"));
        // Not deduplicated or reordered, even against the resolver's own
        // border-radius token.
        assert!(class.contains("rounded-md"));
    }

    #[test]
    fn test_no_empty_tokens_when_disabled() {
        let class = button_class(ButtonVariant::Success, ButtonSize::Sm, true, "");
        assert!(!class.contains("  "));
        assert!(!class.ends_with(' '));
    }

    #[test]
    fn test_variant_parse_round_trip() {
        for variant in ButtonVariant::ALL {
            assert_eq!(variant.as_str().parse::<ButtonVariant>(), Ok(variant));
        }
    }

    #[test]
    fn test_unknown_variant_is_invalid_option() {
        let err = "ghost".parse::<ButtonVariant>().unwrap_err();
        assert_eq!(
            err,
            UiError::InvalidOption {
                field: "variant",
                value: "ghost".to_string(),
                allowed: vec!["primary", "success", "warning", "danger"],
            }
        );
        assert_eq!(
            err.to_string(),
            "invalid variant \"ghost\", expected one of: primary, success, warning, danger"
        );
    }

    #[test]
    fn test_unknown_size_is_invalid_option() {
        let err = "xl".parse::<ButtonSize>().unwrap_err();
        assert!(matches!(err, UiError::InvalidOption { field: "size", .. }));
    }

    #[test]
    fn test_serde_names_match_as_str() {
        for variant in ButtonVariant::ALL {
            let json = serde_json::to_string(&variant).unwrap();
            assert_eq!(json, format!("\"{}\"", variant.as_str()));
        }
        for size in ButtonSize::ALL {
            let json = serde_json::to_string(&size).unwrap();
            assert_eq!(json, format!("\"{}\"", size.as_str()));
        }
    }
}
