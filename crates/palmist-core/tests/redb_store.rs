//! Tests for the redb-backed storage slot
//!
//! The desktop app keeps its hand-off record in a redb file, so it has to
//! survive closing and reopening the database.

use chrono::{NaiveDate, TimeZone, Utc};
use palmist_core::{
    load_confirmation, load_submission, save_submission, Gender, PersistedSubmission, RedbStore,
    SubmissionStore, SUBMISSION_SLOT,
};
use tempfile::TempDir;

fn record(name: &str) -> PersistedSubmission {
    PersistedSubmission {
        full_name: name.to_string(),
        date_of_birth: NaiveDate::from_ymd_opt(1990, 5, 1).unwrap(),
        gender: Gender::PreferNotToSay,
        email: "jane@example.com".to_string(),
        left_palm_file_name: "left.heic.png".to_string(),
        right_palm_file_name: "right.png".to_string(),
        submitted_at: Utc.with_ymd_and_hms(2025, 11, 2, 8, 15, 30).unwrap(),
    }
}

#[test]
fn test_record_survives_reopen() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("palmist.redb");

    {
        let store = RedbStore::open(&path).unwrap();
        save_submission(&store, &record("Jane Doe")).unwrap();
    }

    let store = RedbStore::open(&path).unwrap();
    assert_eq!(load_submission(&store), Some(record("Jane Doe")));
    assert_eq!(load_confirmation(&store).unwrap().date_of_birth, "May 1, 1990");
}

#[test]
fn test_only_latest_submission_kept() {
    let temp = TempDir::new().unwrap();
    let store = RedbStore::open(temp.path().join("palmist.redb")).unwrap();

    save_submission(&store, &record("First")).unwrap();
    save_submission(&store, &record("Second")).unwrap();

    assert_eq!(load_submission(&store).unwrap().full_name, "Second");
}

#[test]
fn test_fresh_database_has_no_submission() {
    let temp = TempDir::new().unwrap();
    let store = RedbStore::open(temp.path().join("fresh.redb")).unwrap();

    assert!(store.read(SUBMISSION_SLOT).unwrap().is_none());
    assert!(load_confirmation(&store).is_none());
}

#[test]
fn test_clones_share_the_database() {
    let temp = TempDir::new().unwrap();
    let store = RedbStore::open(temp.path().join("palmist.redb")).unwrap();
    let other = store.clone();

    save_submission(&store, &record("Shared")).unwrap();
    assert_eq!(load_submission(&other).unwrap().full_name, "Shared");
}
