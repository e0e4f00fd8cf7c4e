//! Simulated submission: a fixed delay, then a write to the storage slot.
//!
//! The delay races a [`CancellationToken`] owned by the form view. Once the
//! token is cancelled nothing is written and the caller must not navigate.

use std::time::Duration;

use chrono::Utc;
use tokio_util::sync::CancellationToken;

use crate::error::PalmistResult;
use crate::storage::{save_submission, SharedStore};
use crate::types::{PersistedSubmission, ValidSubmission};

/// Stand-in for a network round trip.
pub const DEFAULT_SUBMIT_DELAY: Duration = Duration::from_millis(1500);

#[derive(Debug, Clone, PartialEq)]
pub enum SubmitOutcome {
    /// Written to the slot; continue to the confirmation view
    Persisted(PersistedSubmission),
    /// The view went away during the delay
    Cancelled,
}

#[derive(Clone)]
pub struct Submitter {
    store: SharedStore,
    delay: Duration,
}

impl Submitter {
    pub fn new(store: SharedStore, delay: Duration) -> Self {
        Self { store, delay }
    }

    /// Wait out the delay, then persist.
    ///
    /// `submittedAt` is taken after the delay, at the moment of the write.
    pub async fn submit(
        &self,
        submission: ValidSubmission,
        cancel: &CancellationToken,
    ) -> PalmistResult<SubmitOutcome> {
        tracing::info!(delay_ms = self.delay.as_millis() as u64, "Submitting intake");

        tokio::select! {
            biased;
            _ = cancel.cancelled() => {
                tracing::info!("Submission cancelled before persisting");
                return Ok(SubmitOutcome::Cancelled);
            }
            _ = tokio::time::sleep(self.delay) => {}
        }

        let record = submission.into_record(Utc::now());
        if let Err(e) = save_submission(self.store.as_ref(), &record) {
            tracing::error!(error = %e, "Failed to persist submission");
            return Err(e);
        }

        tracing::info!(
            left_palm = %record.left_palm_file_name,
            right_palm = %record.right_palm_file_name,
            "Submission persisted"
        );
        Ok(SubmitOutcome::Persisted(record))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::{load_submission, MemoryStore};
    use crate::types::Gender;
    use chrono::NaiveDate;
    use std::sync::Arc;

    fn submission() -> ValidSubmission {
        ValidSubmission {
            full_name: "Jane Doe".to_string(),
            date_of_birth: NaiveDate::from_ymd_opt(1990, 5, 1).unwrap(),
            gender: Gender::Female,
            email: "jane@example.com".to_string(),
            left_palm_file_name: "left.png".to_string(),
            right_palm_file_name: "right.png".to_string(),
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_persists_after_delay() {
        let store = MemoryStore::new();
        let submitter = Submitter::new(Arc::new(store.clone()), DEFAULT_SUBMIT_DELAY);
        let token = CancellationToken::new();

        let start = tokio::time::Instant::now();
        let outcome = submitter.submit(submission(), &token).await.unwrap();

        assert!(start.elapsed() >= DEFAULT_SUBMIT_DELAY);
        assert!(matches!(outcome, SubmitOutcome::Persisted(_)));
        assert_eq!(load_submission(&store).unwrap().full_name, "Jane Doe");
    }

    #[tokio::test(start_paused = true)]
    async fn test_nothing_written_before_delay_elapses() {
        let store = MemoryStore::new();
        let submitter = Submitter::new(Arc::new(store.clone()), DEFAULT_SUBMIT_DELAY);
        let token = CancellationToken::new();

        let handle = tokio::spawn({
            let token = token.clone();
            async move { submitter.submit(submission(), &token).await }
        });

        tokio::time::sleep(Duration::from_millis(1000)).await;
        assert!(store.is_empty());

        tokio::time::sleep(Duration::from_millis(600)).await;
        let outcome = handle.await.unwrap().unwrap();
        assert!(matches!(outcome, SubmitOutcome::Persisted(_)));
        assert_eq!(store.len(), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_cancel_during_delay_writes_nothing() {
        let store = MemoryStore::new();
        let submitter = Submitter::new(Arc::new(store.clone()), DEFAULT_SUBMIT_DELAY);
        let token = CancellationToken::new();

        let handle = tokio::spawn({
            let token = token.clone();
            async move { submitter.submit(submission(), &token).await }
        });

        tokio::time::sleep(Duration::from_millis(500)).await;
        token.cancel();

        let outcome = handle.await.unwrap().unwrap();
        assert_eq!(outcome, SubmitOutcome::Cancelled);

        tokio::time::sleep(Duration::from_secs(5)).await;
        assert!(store.is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn test_already_cancelled_token() {
        let store = MemoryStore::new();
        let submitter = Submitter::new(Arc::new(store.clone()), Duration::ZERO);
        let token = CancellationToken::new();
        token.cancel();

        let outcome = submitter.submit(submission(), &token).await.unwrap();
        assert_eq!(outcome, SubmitOutcome::Cancelled);
        assert!(store.is_empty());
    }
}
