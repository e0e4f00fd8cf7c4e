//! Core types for Palmist intake.
//!
//! A [`SubmissionDraft`] is the raw, unvalidated working copy owned by the
//! form view. Validation turns it into a [`ValidSubmission`], which becomes a
//! [`PersistedSubmission`] at the moment it is written to the storage slot.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::palm_image::PalmImage;

/// Gender options offered by the intake form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Gender {
    Male,
    Female,
    Other,
    PreferNotToSay,
}

impl Gender {
    /// Wire value, as stored in the persisted record and used by the select input.
    pub fn as_str(&self) -> &'static str {
        match self {
            Gender::Male => "male",
            Gender::Female => "female",
            Gender::Other => "other",
            Gender::PreferNotToSay => "prefer-not-to-say",
        }
    }

    /// Human-readable label for the select input.
    pub fn label(&self) -> &'static str {
        match self {
            Gender::Male => "Male",
            Gender::Female => "Female",
            Gender::Other => "Other",
            Gender::PreferNotToSay => "Prefer not to say",
        }
    }

    pub fn all() -> &'static [Gender] {
        &[
            Gender::Male,
            Gender::Female,
            Gender::Other,
            Gender::PreferNotToSay,
        ]
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when a string is not one of the four gender values.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown gender: {0:?}")]
pub struct UnknownGender(pub String);

impl FromStr for Gender {
    type Err = UnknownGender;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Gender::all()
            .iter()
            .copied()
            .find(|g| g.as_str() == s)
            .ok_or_else(|| UnknownGender(s.to_string()))
    }
}

/// Which hand a palm photo belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Hand {
    Left,
    Right,
}

impl Hand {
    pub fn as_str(&self) -> &'static str {
        match self {
            Hand::Left => "left",
            Hand::Right => "right",
        }
    }

    /// Label shown above the upload slot.
    pub fn label(&self) -> &'static str {
        match self {
            Hand::Left => "Left Palm Photo",
            Hand::Right => "Right Palm Photo",
        }
    }

    /// Placeholder glyph shown before a photo is picked.
    pub fn glyph(&self) -> &'static str {
        match self {
            Hand::Left => "\u{1F91A}",
            Hand::Right => "\u{1F590}\u{FE0F}",
        }
    }
}

/// In-progress form data, exactly as the user entered it.
///
/// Text fields are kept raw so the inputs can echo them back unchanged;
/// parsing happens in [`crate::validation::validate`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SubmissionDraft {
    pub full_name: String,
    /// `YYYY-MM-DD`, as produced by a date input
    pub date_of_birth: String,
    /// One of the [`Gender`] wire values, or empty when nothing is selected
    pub gender: String,
    pub email: String,
    pub left_palm: Option<PalmImage>,
    pub right_palm: Option<PalmImage>,
}

impl SubmissionDraft {
    pub fn palm(&self, hand: Hand) -> Option<&PalmImage> {
        match hand {
            Hand::Left => self.left_palm.as_ref(),
            Hand::Right => self.right_palm.as_ref(),
        }
    }
}

/// A draft that passed every field rule.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidSubmission {
    pub full_name: String,
    pub date_of_birth: NaiveDate,
    pub gender: Gender,
    pub email: String,
    pub left_palm_file_name: String,
    pub right_palm_file_name: String,
}

impl ValidSubmission {
    /// Stamp the submission with the time it is persisted.
    pub fn into_record(self, submitted_at: DateTime<Utc>) -> PersistedSubmission {
        PersistedSubmission {
            full_name: self.full_name,
            date_of_birth: self.date_of_birth,
            gender: self.gender,
            email: self.email,
            left_palm_file_name: self.left_palm_file_name,
            right_palm_file_name: self.right_palm_file_name,
            submitted_at,
        }
    }
}

/// The record handed from the form view to the confirmation view.
///
/// Stored as a camelCase JSON object. Image bytes are never persisted,
/// only the file names.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersistedSubmission {
    pub full_name: String,
    pub date_of_birth: NaiveDate,
    pub gender: Gender,
    pub email: String,
    pub left_palm_file_name: String,
    pub right_palm_file_name: String,
    pub submitted_at: DateTime<Utc>,
}

impl PersistedSubmission {
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}
