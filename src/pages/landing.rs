//! Landing page - entry point to the palm reading intake.

use dioxus::prelude::*;
use palmist_ui::{Button, ButtonVariant, FeatureCard};

use crate::app::Route;

/// Landing page component.
#[component]
pub fn Landing() -> Element {
    let navigator = use_navigator();

    let get_started = move |_| {
        tracing::debug!("Landing: navigating to intake form");
        navigator.push(Route::Intake {});
    };

    rsx! {
        main { class: "page page--centered",
            div { class: "landing fade-in",
                div { class: "landing__orb", "\u{1F52E}" }

                h1 { class: "page-title page-title--hero",
                    "Discover Your Future Through Your Palms"
                }
                p { class: "tagline",
                    "Submit your details and receive a personalized palm reading report within 24 hours"
                }

                Button {
                    variant: ButtonVariant::Primary,
                    class: "btn--large".to_string(),
                    onclick: get_started,
                    "Get Started"
                }

                section { class: "feature-grid fade-in fade-in--late",
                    FeatureCard { icon: "\u{270B}".to_string(), title: "Submit Details".to_string(),
                        "Upload your palm photos and personal information"
                    }
                    FeatureCard { icon: "\u{1F50D}".to_string(), title: "Expert Analysis".to_string(),
                        "Our palmists carefully analyze your unique palm lines"
                    }
                    FeatureCard { icon: "\u{1F4E7}".to_string(), title: "Receive Report".to_string(),
                        "Get your personalized PDF report via email"
                    }
                }
            }
        }
    }
}
