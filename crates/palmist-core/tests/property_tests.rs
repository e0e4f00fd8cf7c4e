//! Property-based tests for the intake field rules
//!
//! Uses proptest to check that rules are independent of each other and that
//! persisted records survive the storage slot unchanged.

use chrono::{DateTime, NaiveDate, Utc};
use palmist_core::{
    load_submission, save_submission, validate, Field, Gender, Hand, IntakeForm, MemoryStore,
    PalmImage, PersistedSubmission, SubmissionDraft,
};
use proptest::prelude::*;

const PNG_MAGIC: &[u8] = &[0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A];

// ============================================================================
// Strategy Generators
// ============================================================================

/// Emails matching the accepted shape
fn email_strategy() -> impl Strategy<Value = String> {
    ("[a-z0-9._+-]{1,16}", "[a-z0-9-]{1,16}", "[a-z]{2,6}")
        .prop_map(|(local, domain, tld)| format!("{}@{}.{}", local, domain, tld))
}

fn name_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[A-Za-z][A-Za-z .'-]{0,40}").expect("valid regex")
}

fn date_strategy() -> impl Strategy<Value = NaiveDate> {
    (1900i32..2030, 1u32..=12, 1u32..=28)
        .prop_map(|(y, m, d)| NaiveDate::from_ymd_opt(y, m, d).expect("day <= 28 is always valid"))
}

fn gender_strategy() -> impl Strategy<Value = Gender> {
    prop::sample::select(Gender::all().to_vec())
}

fn timestamp_strategy() -> impl Strategy<Value = DateTime<Utc>> {
    (0i64..4_000_000_000, 0u32..1_000_000_000)
        .prop_map(|(secs, nanos)| DateTime::from_timestamp(secs, nanos).expect("in range"))
}

fn field_strategy() -> impl Strategy<Value = Field> {
    prop::sample::select(Field::ALL.to_vec())
}

fn palm(name: &str) -> PalmImage {
    PalmImage::from_bytes(name, PNG_MAGIC).unwrap()
}

/// Fill a single field of the form with a valid value
fn fill(form: &mut IntakeForm, field: Field) {
    match field {
        Field::FullName => form.set_full_name("Jane Doe"),
        Field::DateOfBirth => form.set_date_of_birth("1990-05-01"),
        Field::Gender => form.set_gender("other"),
        Field::Email => form.set_email("jane@example.com"),
        Field::LeftPalm => form.select_palm(Hand::Left, palm("l.png")),
        Field::RightPalm => form.select_palm(Hand::Right, palm("r.png")),
    }
}

// ============================================================================
// Property Tests
// ============================================================================

proptest! {
    /// Well-formed input always validates, whatever the values
    #[test]
    fn valid_drafts_pass(
        name in name_strategy(),
        dob in date_strategy(),
        gender in gender_strategy(),
        email in email_strategy(),
    ) {
        let draft = SubmissionDraft {
            full_name: name.clone(),
            date_of_birth: dob.format("%Y-%m-%d").to_string(),
            gender: gender.as_str().to_string(),
            email: email.clone(),
            left_palm: Some(palm("l.png")),
            right_palm: Some(palm("r.png")),
        };

        let valid = validate(&draft).unwrap();
        prop_assert_eq!(valid.full_name, name);
        prop_assert_eq!(valid.date_of_birth, dob);
        prop_assert_eq!(valid.gender, gender);
        prop_assert_eq!(valid.email, email);
    }

    /// Strings without an '@' are never accepted as email
    #[test]
    fn email_without_at_rejected(s in "[^@]{0,40}") {
        prop_assert!(!palmist_core::validation::is_valid_email(&s));
    }

    /// After an empty submit, filling a subset of fields clears exactly
    /// those fields' errors
    #[test]
    fn correction_is_per_field(fields in prop::collection::hash_set(field_strategy(), 0..=6)) {
        let mut form = IntakeForm::new();
        let _ = form.begin_submit();
        prop_assert_eq!(form.errors().count(), 6);

        for field in &fields {
            fill(&mut form, *field);
        }

        for field in Field::ALL {
            prop_assert_eq!(form.errors().get(field).is_none(), fields.contains(&field));
        }
    }

    /// Records read back from the slot are identical to what was written
    #[test]
    fn record_roundtrip(
        name in ".{0,60}",
        dob in date_strategy(),
        gender in gender_strategy(),
        email in email_strategy(),
        submitted_at in timestamp_strategy(),
    ) {
        let record = PersistedSubmission {
            full_name: name,
            date_of_birth: dob,
            gender,
            email,
            left_palm_file_name: "left palm (1).jpg".to_string(),
            right_palm_file_name: "右手.png".to_string(),
            submitted_at,
        };

        let store = MemoryStore::new();
        save_submission(&store, &record).unwrap();
        prop_assert_eq!(load_submission(&store), Some(record));
    }
}
