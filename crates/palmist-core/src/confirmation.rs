//! Read-back of the persisted submission for the thank-you page.

use std::fmt::Display;

use chrono::{DateTime, Local, NaiveDate, TimeZone, Utc};

use crate::storage::{load_submission, SubmissionStore};
use crate::types::PersistedSubmission;

/// Display-ready values for the "Submission Details" block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfirmationDetails {
    pub full_name: String,
    pub email: String,
    /// e.g. "May 1, 1990"
    pub date_of_birth: String,
    /// e.g. "March 9, 2024 at 2:05 PM", in the local time zone
    pub submitted_at: String,
}

impl ConfirmationDetails {
    pub fn from_record(record: &PersistedSubmission) -> Self {
        Self::from_record_in(record, &Local)
    }

    /// Like [`Self::from_record`], rendering the timestamp in `tz`.
    pub fn from_record_in<Tz>(record: &PersistedSubmission, tz: &Tz) -> Self
    where
        Tz: TimeZone,
        Tz::Offset: Display,
    {
        Self {
            full_name: record.full_name.clone(),
            email: record.email.clone(),
            date_of_birth: format_birth_date(record.date_of_birth),
            submitted_at: format_submitted_at(record.submitted_at, tz),
        }
    }
}

pub fn format_birth_date(date: NaiveDate) -> String {
    date.format("%B %-d, %Y").to_string()
}

pub fn format_submitted_at<Tz>(at: DateTime<Utc>, tz: &Tz) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    at.with_timezone(tz).format("%B %-d, %Y at %-I:%M %p").to_string()
}

/// Load the details block, or `None` to omit it.
pub fn load_confirmation(store: &dyn SubmissionStore) -> Option<ConfirmationDetails> {
    let details = load_submission(store).map(|r| ConfirmationDetails::from_record(&r));
    if details.is_none() {
        tracing::info!("Confirmation shown without submission details");
    }
    details
}

/// Follow-up copy naming where the report will be sent.
pub fn report_delivery_notice(details: Option<&ConfirmationDetails>) -> String {
    let recipient = details.map(|d| d.email.as_str()).unwrap_or("your email address");
    format!(
        "Your personalized PDF report will be sent to {} within 24 hours. \
         Please check your spam folder if you don't see it in your inbox.",
        recipient
    )
}
