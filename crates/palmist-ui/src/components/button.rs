//! Button Components
//!
//! - Primary: gold-to-amber gradient, used for "Get Started" and "Return to Home"
//! - Submit: full-width form submit with a busy state

use dioxus::prelude::*;

use crate::components::Spinner;

/// Button style variants
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum ButtonVariant {
    /// Rounded call-to-action with gradient fill
    #[default]
    Primary,
    /// Full-width form submit
    Submit,
}

impl ButtonVariant {
    /// Returns the CSS class for this variant
    pub fn class(&self) -> &'static str {
        match self {
            ButtonVariant::Primary => "btn-primary",
            ButtonVariant::Submit => "btn-submit",
        }
    }
}

/// Properties for the Button component
#[derive(Clone, PartialEq, Props)]
pub struct ButtonProps {
    /// Visual style variant
    #[props(default)]
    pub variant: ButtonVariant,
    /// Button content (text, icons, etc.)
    pub children: Element,
    /// Click handler
    #[props(default)]
    pub onclick: Option<EventHandler<()>>,
    /// Whether the button is disabled
    #[props(default = false)]
    pub disabled: bool,
    /// Show a spinner and `busy_label` instead of the children
    #[props(default = false)]
    pub busy: bool,
    /// Label shown while busy
    #[props(default = "Submitting...".to_string())]
    pub busy_label: String,
    /// Optional additional CSS classes
    #[props(default)]
    pub class: Option<String>,
}

/// Compose the class attribute for a variant and optional extras.
pub fn button_class(variant: ButtonVariant, busy: bool, extra: Option<&str>) -> String {
    let mut class = variant.class().to_string();
    if busy {
        class.push_str(" btn--busy");
    }
    if let Some(extra) = extra.filter(|e| !e.is_empty()) {
        class.push(' ');
        class.push_str(extra);
    }
    class
}

/// Styled button component
///
/// A busy button is always disabled, so a second click cannot fire while a
/// submission is pending.
///
/// # Example
///
/// ```rust,ignore
/// rsx! {
///     Button {
///         variant: ButtonVariant::Submit,
///         busy: form.read().is_submitting(),
///         onclick: move |_| submit(),
///         "Submit for Analysis"
///     }
/// }
/// ```
#[component]
pub fn Button(props: ButtonProps) -> Element {
    let class = button_class(props.variant, props.busy, props.class.as_deref());
    let disabled = props.disabled || props.busy;

    rsx! {
        button {
            class: "{class}",
            r#type: "button",
            disabled: disabled,
            "aria-busy": props.busy,
            onclick: move |_| {
                if let Some(handler) = &props.onclick {
                    handler.call(());
                }
            },
            if props.busy {
                span { class: "btn__busy",
                    Spinner {}
                    "{props.busy_label}"
                }
            } else {
                {props.children}
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn button_variant_classes() {
        assert_eq!(ButtonVariant::Primary.class(), "btn-primary");
        assert_eq!(ButtonVariant::Submit.class(), "btn-submit");
    }

    #[test]
    fn button_variant_default() {
        assert_eq!(ButtonVariant::default(), ButtonVariant::Primary);
    }

    #[test]
    fn button_class_composition() {
        assert_eq!(button_class(ButtonVariant::Submit, false, None), "btn-submit");
        assert_eq!(
            button_class(ButtonVariant::Submit, true, Some("mt-8")),
            "btn-submit btn--busy mt-8"
        );
        assert_eq!(button_class(ButtonVariant::Primary, false, Some("")), "btn-primary");
    }
}
