//! Field rules for the intake form.
//!
//! Every rule runs on every pass; failures are collected into a fixed
//! [`FieldErrors`] record with one slot per field.

use chrono::NaiveDate;
use thiserror::Error;

use crate::types::{Gender, Hand, SubmissionDraft, ValidSubmission};

/// The six validated fields of the intake form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    FullName,
    DateOfBirth,
    Gender,
    Email,
    LeftPalm,
    RightPalm,
}

impl Field {
    pub const ALL: [Field; 6] = [
        Field::FullName,
        Field::DateOfBirth,
        Field::Gender,
        Field::Email,
        Field::LeftPalm,
        Field::RightPalm,
    ];

    pub fn palm(hand: Hand) -> Field {
        match hand {
            Hand::Left => Field::LeftPalm,
            Hand::Right => Field::RightPalm,
        }
    }
}

/// A single field's validation failure. `Display` is the inline message.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldError {
    #[error("Full name is required")]
    FullNameRequired,
    #[error("Date of birth is required")]
    DateOfBirthRequired,
    #[error("Please enter a valid date")]
    DateOfBirthInvalid,
    #[error("Gender is required")]
    GenderRequired,
    #[error("Email is required")]
    EmailRequired,
    #[error("Please enter a valid email address")]
    EmailInvalid,
    #[error("Left palm photo is required")]
    LeftPalmRequired,
    #[error("Right palm photo is required")]
    RightPalmRequired,
}

/// Per-field error slots.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors {
    pub full_name: Option<FieldError>,
    pub date_of_birth: Option<FieldError>,
    pub gender: Option<FieldError>,
    pub email: Option<FieldError>,
    pub left_palm: Option<FieldError>,
    pub right_palm: Option<FieldError>,
}

impl FieldErrors {
    pub fn get(&self, field: Field) -> Option<FieldError> {
        match field {
            Field::FullName => self.full_name,
            Field::DateOfBirth => self.date_of_birth,
            Field::Gender => self.gender,
            Field::Email => self.email,
            Field::LeftPalm => self.left_palm,
            Field::RightPalm => self.right_palm,
        }
    }

    fn slot_mut(&mut self, field: Field) -> &mut Option<FieldError> {
        match field {
            Field::FullName => &mut self.full_name,
            Field::DateOfBirth => &mut self.date_of_birth,
            Field::Gender => &mut self.gender,
            Field::Email => &mut self.email,
            Field::LeftPalm => &mut self.left_palm,
            Field::RightPalm => &mut self.right_palm,
        }
    }

    /// Clear one field's error, leaving the others untouched.
    pub fn clear(&mut self, field: Field) {
        *self.slot_mut(field) = None;
    }

    pub fn count(&self) -> usize {
        Field::ALL.iter().filter(|f| self.get(**f).is_some()).count()
    }

    pub fn is_empty(&self) -> bool {
        self.count() == 0
    }

    /// Failing fields in form order.
    pub fn iter(&self) -> impl Iterator<Item = (Field, FieldError)> + '_ {
        Field::ALL
            .iter()
            .filter_map(|f| self.get(*f).map(|e| (*f, e)))
    }
}

/// The whitespace set of an ECMAScript `\s` class.
///
/// Differs from [`char::is_whitespace`]: U+FEFF is included, U+0085 is not.
fn is_regex_space(c: char) -> bool {
    matches!(
        c,
        '\t' | '\n' | '\u{0B}' | '\u{0C}' | '\r' | ' ' | '\u{A0}' | '\u{1680}'
            | '\u{2000}'..='\u{200A}'
            | '\u{2028}' | '\u{2029}' | '\u{202F}' | '\u{205F}' | '\u{3000}' | '\u{FEFF}'
    )
}

/// `[^\s@]+@[^\s@]+\.[^\s@]+`, anchored at both ends, with `\s` taken
/// in its ECMAScript sense.
pub fn is_valid_email(email: &str) -> bool {
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };

    let clean = |part: &str| !part.is_empty() && !part.chars().any(|c| is_regex_space(c) || c == '@');
    if !clean(local) || !clean(domain) {
        return false;
    }

    // Needs a dot with at least one character on either side
    domain
        .char_indices()
        .any(|(i, c)| c == '.' && i > 0 && i + 1 < domain.len())
}

pub fn check_full_name(value: &str) -> Result<String, FieldError> {
    if value.trim().is_empty() {
        Err(FieldError::FullNameRequired)
    } else {
        Ok(value.to_string())
    }
}

pub fn check_date_of_birth(value: &str) -> Result<NaiveDate, FieldError> {
    let value = value.trim();
    if value.is_empty() {
        return Err(FieldError::DateOfBirthRequired);
    }
    NaiveDate::parse_from_str(value, "%Y-%m-%d").map_err(|_| FieldError::DateOfBirthInvalid)
}

pub fn check_gender(value: &str) -> Result<Gender, FieldError> {
    value.parse().map_err(|_| FieldError::GenderRequired)
}

pub fn check_email(value: &str) -> Result<String, FieldError> {
    if value.trim().is_empty() {
        Err(FieldError::EmailRequired)
    } else if !is_valid_email(value) {
        Err(FieldError::EmailInvalid)
    } else {
        Ok(value.to_string())
    }
}

fn check_palm(draft: &SubmissionDraft, hand: Hand) -> Result<String, FieldError> {
    match (draft.palm(hand), hand) {
        (Some(img), _) => Ok(img.file_name().to_string()),
        (None, Hand::Left) => Err(FieldError::LeftPalmRequired),
        (None, Hand::Right) => Err(FieldError::RightPalmRequired),
    }
}

/// Run every rule against the draft.
///
/// Returns the parsed submission, or every failing field at once.
pub fn validate(draft: &SubmissionDraft) -> Result<ValidSubmission, FieldErrors> {
    let full_name = check_full_name(&draft.full_name);
    let date_of_birth = check_date_of_birth(&draft.date_of_birth);
    let gender = check_gender(&draft.gender);
    let email = check_email(&draft.email);
    let left_palm = check_palm(draft, Hand::Left);
    let right_palm = check_palm(draft, Hand::Right);

    match (full_name, date_of_birth, gender, email, left_palm, right_palm) {
        (Ok(full_name), Ok(date_of_birth), Ok(gender), Ok(email), Ok(left), Ok(right)) => {
            Ok(ValidSubmission {
                full_name,
                date_of_birth,
                gender,
                email,
                left_palm_file_name: left,
                right_palm_file_name: right,
            })
        }
        (full_name, date_of_birth, gender, email, left_palm, right_palm) => Err(FieldErrors {
            full_name: full_name.err(),
            date_of_birth: date_of_birth.err(),
            gender: gender.err(),
            email: email.err(),
            left_palm: left_palm.err(),
            right_palm: right_palm.err(),
        }),
    }
}
