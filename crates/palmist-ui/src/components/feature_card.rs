//! Icon + heading + body card used on the landing and thank-you pages.

use dioxus::prelude::*;

#[derive(Clone, PartialEq, Props)]
pub struct FeatureCardProps {
    /// Emoji shown above the title
    pub icon: String,
    pub title: String,
    /// Body copy
    pub children: Element,
    #[props(default)]
    pub class: Option<String>,
}

#[component]
pub fn FeatureCard(props: FeatureCardProps) -> Element {
    let class = match props.class.as_deref() {
        Some(extra) if !extra.is_empty() => format!("feature-card {}", extra),
        _ => "feature-card".to_string(),
    };

    rsx! {
        div { class: "{class}",
            div { class: "feature-card__icon", "{props.icon}" }
            h3 { class: "feature-card__title", "{props.title}" }
            div { class: "feature-card__body", {props.children} }
        }
    }
}
