//! Intake form state machine.
//!
//! ```text
//! Editing ──submit──▶ validate ──errors──▶ Editing (errors shown)
//!                        │
//!                        └──ok──▶ Submitting ──persisted──▶ Persisted
//!                                     │
//!                                     └──failed/cancelled──▶ Editing
//! ```
//!
//! Validation runs synchronously inside [`IntakeForm::begin_submit`]; the
//! delayed persist lives in [`crate::submission::Submitter`].

use crate::error::{PalmistError, PalmistResult};
use crate::palm_image::PalmImage;
use crate::types::{Hand, SubmissionDraft, ValidSubmission};
use crate::validation::{validate, Field, FieldErrors};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum IntakePhase {
    /// Accepting input; the submit control is enabled
    #[default]
    Editing,
    /// Waiting out the submission delay; the submit control is disabled
    Submitting,
    /// Record written; the view navigates to the confirmation page
    Persisted,
}

/// Working state of the intake form view.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct IntakeForm {
    draft: SubmissionDraft,
    errors: FieldErrors,
    phase: IntakePhase,
    submit_error: Option<String>,
}

impl IntakeForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn draft(&self) -> &SubmissionDraft {
        &self.draft
    }

    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    pub fn phase(&self) -> IntakePhase {
        self.phase
    }

    pub fn is_submitting(&self) -> bool {
        self.phase == IntakePhase::Submitting
    }

    /// Form-level message from the last failed submission, if any.
    pub fn submit_error(&self) -> Option<&str> {
        self.submit_error.as_deref()
    }

    /// Edits are only taken while `Editing`; a submitted draft is frozen.
    pub fn is_editable(&self) -> bool {
        self.phase == IntakePhase::Editing
    }

    pub fn set_full_name(&mut self, value: impl Into<String>) {
        if !self.is_editable() {
            return;
        }
        self.draft.full_name = value.into();
        self.errors.clear(Field::FullName);
    }

    pub fn set_date_of_birth(&mut self, value: impl Into<String>) {
        if !self.is_editable() {
            return;
        }
        self.draft.date_of_birth = value.into();
        self.errors.clear(Field::DateOfBirth);
    }

    pub fn set_gender(&mut self, value: impl Into<String>) {
        if !self.is_editable() {
            return;
        }
        self.draft.gender = value.into();
        self.errors.clear(Field::Gender);
    }

    pub fn set_email(&mut self, value: impl Into<String>) {
        if !self.is_editable() {
            return;
        }
        self.draft.email = value.into();
        self.errors.clear(Field::Email);
    }

    /// Attach a photo to a hand, replacing any earlier one.
    pub fn select_palm(&mut self, hand: Hand, image: PalmImage) {
        if !self.is_editable() {
            tracing::debug!(hand = hand.as_str(), "Ignoring palm photo while submitting");
            return;
        }
        tracing::info!(hand = hand.as_str(), file_name = image.file_name(), "Palm photo selected");
        match hand {
            Hand::Left => self.draft.left_palm = Some(image),
            Hand::Right => self.draft.right_palm = Some(image),
        }
        self.errors.clear(Field::palm(hand));
    }

    /// Validate the draft and, if it passes, enter `Submitting`.
    ///
    /// On failure every failing field's error is recorded and the form stays
    /// in `Editing`. A second call while `Submitting` is rejected.
    pub fn begin_submit(&mut self) -> PalmistResult<ValidSubmission> {
        if self.phase == IntakePhase::Submitting {
            return Err(PalmistError::SubmissionInProgress);
        }

        match validate(&self.draft) {
            Ok(valid) => {
                self.errors = FieldErrors::default();
                self.submit_error = None;
                self.phase = IntakePhase::Submitting;
                Ok(valid)
            }
            Err(errors) => {
                let count = errors.count();
                tracing::info!(invalid_fields = count, "Intake validation failed");
                self.errors = errors;
                self.submit_error = None;
                self.phase = IntakePhase::Editing;
                Err(PalmistError::InvalidSubmission(count))
            }
        }
    }

    /// The record was written. The draft is discarded.
    pub fn mark_persisted(&mut self) {
        self.draft = SubmissionDraft::default();
        self.phase = IntakePhase::Persisted;
    }

    /// Persisting failed; keep the draft so the user can retry.
    pub fn mark_failed(&mut self, error: &PalmistError) {
        self.submit_error = Some(format!(
            "We couldn't save your submission. Please try again. ({})",
            error
        ));
        self.phase = IntakePhase::Editing;
    }

    pub fn mark_cancelled(&mut self) {
        if self.phase == IntakePhase::Submitting {
            self.phase = IntakePhase::Editing;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::FieldError;

    const PNG_MAGIC: &[u8] = &[0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A];

    fn palm(name: &str) -> PalmImage {
        PalmImage::from_bytes(name, PNG_MAGIC).unwrap()
    }

    fn filled_form() -> IntakeForm {
        let mut form = IntakeForm::new();
        form.set_full_name("Jane Doe");
        form.set_date_of_birth("1990-05-01");
        form.set_gender("female");
        form.set_email("jane@example.com");
        form.select_palm(Hand::Left, palm("left.png"));
        form.select_palm(Hand::Right, palm("right.png"));
        form
    }

    #[test]
    fn test_empty_submit_records_six_errors() {
        let mut form = IntakeForm::new();

        let err = form.begin_submit().unwrap_err();
        assert!(matches!(err, PalmistError::InvalidSubmission(6)));
        assert_eq!(form.errors().count(), 6);
        assert_eq!(form.phase(), IntakePhase::Editing);
    }

    #[test]
    fn test_editing_clears_only_that_field() {
        let mut form = IntakeForm::new();
        let _ = form.begin_submit();

        form.set_full_name("Jane");
        assert!(form.errors().full_name.is_none());
        assert_eq!(form.errors().count(), 5);

        form.select_palm(Hand::Right, palm("r.png"));
        assert!(form.errors().right_palm.is_none());
        assert_eq!(form.errors().left_palm, Some(FieldError::LeftPalmRequired));
        assert_eq!(form.errors().count(), 4);
    }

    #[test]
    fn test_clearing_happens_even_for_invalid_value() {
        // Errors are cleared on edit, not re-validated
        let mut form = filled_form();
        form.set_email("bad");
        let _ = form.begin_submit();
        assert_eq!(form.errors().email, Some(FieldError::EmailInvalid));

        form.set_email("still bad");
        assert!(form.errors().email.is_none());
    }

    #[test]
    fn test_valid_submit_enters_submitting() {
        let mut form = filled_form();

        let valid = form.begin_submit().unwrap();
        assert_eq!(valid.full_name, "Jane Doe");
        assert!(form.is_submitting());
        assert!(form.errors().is_empty());
    }

    #[test]
    fn test_double_submit_rejected() {
        let mut form = filled_form();
        form.begin_submit().unwrap();

        let err = form.begin_submit().unwrap_err();
        assert!(matches!(err, PalmistError::SubmissionInProgress));
        assert!(form.is_submitting());
    }

    #[test]
    fn test_reselecting_palm_replaces_preview() {
        let mut form = IntakeForm::new();
        form.select_palm(Hand::Left, palm("first.png"));
        form.select_palm(Hand::Left, palm("second.png"));

        assert_eq!(form.draft().palm(Hand::Left).unwrap().file_name(), "second.png");
        assert!(form.draft().palm(Hand::Right).is_none());
    }

    #[test]
    fn test_failure_keeps_draft_and_allows_retry() {
        let mut form = filled_form();
        form.begin_submit().unwrap();

        form.mark_failed(&PalmistError::Storage("disk full".to_string()));
        assert_eq!(form.phase(), IntakePhase::Editing);
        assert!(form.submit_error().unwrap().contains("disk full"));
        assert_eq!(form.draft().full_name, "Jane Doe");

        form.begin_submit().unwrap();
        assert!(form.submit_error().is_none());
    }

    #[test]
    fn test_persisted_discards_draft() {
        let mut form = filled_form();
        form.begin_submit().unwrap();
        form.mark_persisted();

        assert_eq!(form.phase(), IntakePhase::Persisted);
        assert_eq!(form.draft(), &SubmissionDraft::default());
    }

    #[test]
    fn test_failed_validation_drops_stale_banner() {
        let mut form = filled_form();
        form.begin_submit().unwrap();
        form.mark_failed(&PalmistError::Storage("disk full".to_string()));
        assert!(form.submit_error().is_some());

        form.set_email("not-an-email");
        let err = form.begin_submit().unwrap_err();
        assert!(matches!(err, PalmistError::InvalidSubmission(1)));
        assert!(form.submit_error().is_none());
        assert_eq!(form.errors().email, Some(FieldError::EmailInvalid));
    }

    #[test]
    fn test_edits_ignored_while_submitting() {
        let mut form = filled_form();
        form.begin_submit().unwrap();
        assert!(!form.is_editable());

        form.set_full_name("Someone Else");
        form.set_date_of_birth("2000-01-01");
        form.set_gender("male");
        form.set_email("else@example.com");
        form.select_palm(Hand::Left, palm("late.png"));

        assert_eq!(form.draft().full_name, "Jane Doe");
        assert_eq!(form.draft().date_of_birth, "1990-05-01");
        assert_eq!(form.draft().gender, "female");
        assert_eq!(form.draft().email, "jane@example.com");
        assert_eq!(form.draft().palm(Hand::Left).unwrap().file_name(), "left.png");
    }

    #[test]
    fn test_edits_resume_after_failure() {
        let mut form = filled_form();
        form.begin_submit().unwrap();
        form.mark_failed(&PalmistError::Storage("locked".to_string()));

        assert!(form.is_editable());
        form.set_full_name("Jane Q. Doe");
        assert_eq!(form.draft().full_name, "Jane Q. Doe");
    }

    #[test]
    fn test_cancel_returns_to_editing() {
        let mut form = filled_form();
        form.begin_submit().unwrap();
        form.mark_cancelled();
        assert_eq!(form.phase(), IntakePhase::Editing);
    }
}
