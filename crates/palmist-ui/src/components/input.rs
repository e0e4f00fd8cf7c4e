//! Input Field Components
//!
//! Labelled text, date and select controls. Each one shows a required
//! marker, a gold focus ring, and a red border plus message on error.

use dioxus::prelude::*;
use palmist_core::FieldError;

use crate::components::{field_class, FieldMessage};

/// Properties for the TextField component
#[derive(Clone, PartialEq, Props)]
pub struct TextFieldProps {
    /// Element id, also used for label association
    pub id: String,
    /// Label text; a `*` is appended for required fields
    pub label: String,
    /// Current input value
    pub value: String,
    /// Handler called when input changes
    pub oninput: EventHandler<String>,
    /// Input type (text, email, date, ...)
    #[props(default = "text".to_string())]
    pub input_type: String,
    #[props(default)]
    pub placeholder: Option<String>,
    #[props(default = true)]
    pub required: bool,
    #[props(default = false)]
    pub disabled: bool,
    /// Validation error for this field
    #[props(default)]
    pub error: Option<FieldError>,
}

/// Text input with label and inline error
///
/// # Example
///
/// ```rust,ignore
/// rsx! {
///     TextField {
///         id: "fullName".to_string(),
///         label: "Full Name".to_string(),
///         value: form.read().draft().full_name.clone(),
///         oninput: move |v| form.write().set_full_name(v),
///         placeholder: "Enter your full name".to_string(),
///         error: form.read().errors().full_name,
///     }
/// }
/// ```
#[component]
pub fn TextField(props: TextFieldProps) -> Element {
    let class = field_class("input-field", props.error);

    rsx! {
        div { class: "form-field",
            FieldLabel { target: props.id.clone(), text: props.label.clone(), required: props.required }
            input {
                id: "{props.id}",
                name: "{props.id}",
                class: "{class}",
                r#type: "{props.input_type}",
                value: "{props.value}",
                placeholder: props.placeholder.as_deref().unwrap_or(""),
                disabled: props.disabled,
                "aria-invalid": props.error.is_some(),
                oninput: move |e| props.oninput.call(e.value()),
            }
            FieldMessage { error: props.error }
        }
    }
}

/// Properties for the SelectField component
#[derive(Clone, PartialEq, Props)]
pub struct SelectFieldProps {
    pub id: String,
    pub label: String,
    /// Currently selected value; empty selects the placeholder
    pub value: String,
    /// `(value, label)` pairs
    pub options: Vec<(String, String)>,
    /// Label of the empty first option
    pub placeholder: String,
    pub onchange: EventHandler<String>,
    #[props(default = true)]
    pub required: bool,
    #[props(default = false)]
    pub disabled: bool,
    #[props(default)]
    pub error: Option<FieldError>,
}

/// Drop-down with an empty placeholder option
#[component]
pub fn SelectField(props: SelectFieldProps) -> Element {
    let class = field_class("input-field", props.error);

    rsx! {
        div { class: "form-field",
            FieldLabel { target: props.id.clone(), text: props.label.clone(), required: props.required }
            select {
                id: "{props.id}",
                name: "{props.id}",
                class: "{class}",
                value: "{props.value}",
                disabled: props.disabled,
                "aria-invalid": props.error.is_some(),
                onchange: move |e| props.onchange.call(e.value()),
                option { value: "", selected: props.value.is_empty(), "{props.placeholder}" }
                for (value, label) in props.options.iter() {
                    option {
                        key: "{value}",
                        value: "{value}",
                        selected: *value == props.value,
                        "{label}"
                    }
                }
            }
            FieldMessage { error: props.error }
        }
    }
}

/// Label with the required marker
#[component]
pub fn FieldLabel(target: String, text: String, #[props(default = true)] required: bool) -> Element {
    rsx! {
        label { class: "input-label", r#for: "{target}",
            "{required_label(&text, required)}"
        }
    }
}

/// "Full Name *" for required fields, the bare text otherwise.
pub fn required_label(text: &str, required: bool) -> String {
    if required {
        format!("{} *", text)
    } else {
        text.to_string()
    }
}
