//! Inline validation message shown under a form control.

use dioxus::prelude::*;
use palmist_core::FieldError;

/// Append the error modifier to a control's base class when it has an error.
pub fn field_class(base: &str, error: Option<FieldError>) -> String {
    match error {
        Some(_) => format!("{} {}--error", base, base),
        None => base.to_string(),
    }
}

/// Renders nothing when there is no error.
#[component]
pub fn FieldMessage(error: Option<FieldError>) -> Element {
    match error {
        Some(err) => rsx! {
            p { class: "field-error", role: "alert", "{err}" }
        },
        None => rsx! {},
    }
}

/// Form-level banner, used for failed submissions.
#[component]
pub fn FormBanner(message: String) -> Element {
    rsx! {
        div { class: "form-banner", role: "alert",
            span { class: "form-banner__icon", "\u{26A0}\u{FE0F}" }
            span { "{message}" }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn field_class_with_error() {
        assert_eq!(
            field_class("input-field", Some(FieldError::EmailInvalid)),
            "input-field input-field--error"
        );
    }

    #[test]
    fn field_class_without_error() {
        assert_eq!(field_class("palm-drop", None), "palm-drop");
    }
}
