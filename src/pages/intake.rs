//! Intake form page - personal details and both palm photos.
//!
//! Submitting validates every field at once. A valid form disables the
//! submit button, waits out the simulated round trip, writes the record to
//! local storage and moves on to the thank-you page. Leaving the page during
//! the wait cancels the pending write.

use dioxus::prelude::*;
use palmist_core::{Gender, Hand, IntakeForm, PalmistError, SubmitOutcome};
use palmist_ui::{Button, ButtonVariant, FormBanner, SelectField, TextField};
use tokio_util::sync::CancellationToken;

use crate::app::Route;
use crate::components::PalmUpload;
use crate::context::use_services;

/// Intake form page component.
#[component]
pub fn Intake() -> Element {
    let navigator = use_navigator();
    let services = use_services();
    let mut form = use_signal(IntakeForm::new);

    // Bound to this view: dropping the page cancels a pending submission
    let cancel = use_hook(CancellationToken::new);
    use_drop({
        let cancel = cancel.clone();
        move || cancel.cancel()
    });
    let submitter = use_hook(|| services.submitter());

    let on_submit = move |_| {
        let submission = match form.write().begin_submit() {
            Ok(submission) => submission,
            Err(PalmistError::SubmissionInProgress) => return,
            Err(e) => {
                tracing::debug!(error = %e, "Intake not submitted");
                return;
            }
        };

        let submitter = submitter.clone();
        let cancel = cancel.clone();
        spawn(async move {
            match submitter.submit(submission, &cancel).await {
                Ok(SubmitOutcome::Persisted(_)) => {
                    form.write().mark_persisted();
                    navigator.push(Route::ThankYou {});
                }
                Ok(SubmitOutcome::Cancelled) => {
                    // The signal may already be dropped with the page
                    if let Ok(mut state) = form.try_write() {
                        state.mark_cancelled();
                    }
                }
                Err(e) => form.write().mark_failed(&e),
            }
        });
    };

    let state = form.read();
    let draft = state.draft();
    let errors = state.errors();
    let busy = state.is_submitting();

    let gender_options: Vec<(String, String)> = Gender::all()
        .iter()
        .map(|g| (g.as_str().to_string(), g.label().to_string()))
        .collect();

    rsx! {
        main { class: "page",
            div { class: "intake fade-in",
                header { class: "intake__header",
                    h1 { class: "page-title", "Your Journey Begins" }
                    p { class: "subtitle",
                        "Fill in your details to receive your personalized palm reading"
                    }
                }

                div { class: "card intake__form",
                    if let Some(message) = state.submit_error() {
                        FormBanner { message: message.to_string() }
                    }

                    TextField {
                        id: "fullName".to_string(),
                        label: "Full Name".to_string(),
                        value: draft.full_name.clone(),
                        placeholder: "Enter your full name".to_string(),
                        error: errors.full_name,
                        disabled: busy,
                        oninput: move |v: String| form.write().set_full_name(v),
                    }

                    TextField {
                        id: "dateOfBirth".to_string(),
                        label: "Date of Birth".to_string(),
                        input_type: "date".to_string(),
                        value: draft.date_of_birth.clone(),
                        error: errors.date_of_birth,
                        disabled: busy,
                        oninput: move |v: String| form.write().set_date_of_birth(v),
                    }

                    SelectField {
                        id: "gender".to_string(),
                        label: "Gender".to_string(),
                        value: draft.gender.clone(),
                        options: gender_options,
                        placeholder: "Select your gender".to_string(),
                        error: errors.gender,
                        disabled: busy,
                        onchange: move |v: String| form.write().set_gender(v),
                    }

                    TextField {
                        id: "email".to_string(),
                        label: "Email Address".to_string(),
                        input_type: "email".to_string(),
                        value: draft.email.clone(),
                        placeholder: "your.email@example.com".to_string(),
                        error: errors.email,
                        disabled: busy,
                        oninput: move |v: String| form.write().set_email(v),
                    }

                    div { class: "palm-grid",
                        PalmUpload {
                            hand: Hand::Left,
                            image: draft.left_palm.clone(),
                            error: errors.left_palm,
                            disabled: busy,
                            on_select: move |img| form.write().select_palm(Hand::Left, img),
                        }
                        PalmUpload {
                            hand: Hand::Right,
                            image: draft.right_palm.clone(),
                            error: errors.right_palm,
                            disabled: busy,
                            on_select: move |img| form.write().select_palm(Hand::Right, img),
                        }
                    }

                    Button {
                        variant: ButtonVariant::Submit,
                        busy: busy,
                        onclick: on_submit,
                        "Submit for Analysis"
                    }
                }
            }
        }
    }
}
