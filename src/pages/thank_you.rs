//! Thank-you page - confirms the submission and echoes what was stored.
//!
//! Reached after a successful submit, but also valid as a direct entry: with
//! no stored record the details block is simply left out.

use dioxus::prelude::*;
use palmist_core::{load_confirmation, report_delivery_notice};
use palmist_ui::{Button, ButtonVariant, FeatureCard};

use crate::app::Route;
use crate::context::use_services;

#[component]
pub fn ThankYou() -> Element {
    let navigator = use_navigator();
    let services = use_services();

    // Read once on entry
    let details = use_hook(|| load_confirmation(services.store.as_ref()));
    let notice = report_delivery_notice(details.as_ref());

    rsx! {
        main { class: "page page--centered",
            div { class: "card thank-you pop-in",
                div { class: "thank-you__check", "\u{2705}" }
                h1 { class: "page-title", "Thank You!" }
                p { class: "lead",
                    "Thank you for submitting your details. Our palmists are analyzing your palm data. "
                    "You'll receive your personalized report via email within 24 hours."
                }

                if let Some(d) = details.as_ref() {
                    section { class: "submission-details fade-in",
                        h2 { class: "section-header", "Submission Details" }
                        p { span { class: "detail-label", "Name: " } "{d.full_name}" }
                        p { span { class: "detail-label", "Email: " } "{d.email}" }
                        p { span { class: "detail-label", "Date of Birth: " } "{d.date_of_birth}" }
                        p { class: "detail-muted", "Submitted on {d.submitted_at}" }
                    }
                }

                div { class: "next-steps fade-in fade-in--late",
                    FeatureCard {
                        icon: "\u{23F1}\u{FE0F}".to_string(),
                        title: "What Happens Next?".to_string(),
                        class: "feature-card--wide".to_string(),
                        "Our expert palmists will carefully analyze your palm photos and create a detailed, "
                        "personalized report about your future, personality, and life path."
                    }
                    FeatureCard {
                        icon: "\u{1F4E7}".to_string(),
                        title: "Check Your Email".to_string(),
                        class: "feature-card--wide".to_string(),
                        "{notice}"
                    }
                }

                Button {
                    variant: ButtonVariant::Primary,
                    onclick: move |_| {
                        navigator.push(Route::Landing {});
                    },
                    "Return to Home"
                }
            }
        }
    }
}
