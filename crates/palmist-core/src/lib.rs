//! Palmist Intake Core Library
//!
//! Everything behind the three-page palm-reading intake flow that is not
//! rendering: field rules, the form state machine, the delayed submission,
//! and the local storage slot that hands the result to the thank-you page.
//!
//! ## Flow
//!
//! ```text
//! Landing ──▶ Form ──(validate, wait, persist)──▶ Thank you
//!                          │                          ▲
//!                          └──── storage slot ────────┘
//! ```
//!
//! ## Quick Start
//!
//! ```ignore
//! use std::sync::Arc;
//! use palmist_core::{IntakeForm, MemoryStore, Submitter, DEFAULT_SUBMIT_DELAY};
//! use tokio_util::sync::CancellationToken;
//!
//! let store = Arc::new(MemoryStore::new());
//! let mut form = IntakeForm::new();
//! form.set_full_name("Jane Doe");
//! // ... remaining fields and both palm photos ...
//!
//! let valid = form.begin_submit()?;
//! let outcome = Submitter::new(store, DEFAULT_SUBMIT_DELAY)
//!     .submit(valid, &CancellationToken::new())
//!     .await?;
//! ```

pub mod config;
pub mod confirmation;
pub mod error;
pub mod intake;
pub mod logging;
pub mod palm_image;
pub mod storage;
pub mod submission;
pub mod types;
pub mod validation;

// Re-exports
pub use config::AppConfig;
pub use confirmation::{load_confirmation, report_delivery_notice, ConfirmationDetails};
pub use error::{PalmistError, PalmistResult};
pub use intake::{IntakeForm, IntakePhase};
pub use palm_image::{PalmImage, IMAGE_EXTENSIONS};
pub use storage::{
    load_submission, save_submission, MemoryStore, RedbStore, SharedStore, SubmissionStore,
    SUBMISSION_SLOT,
};
pub use submission::{SubmitOutcome, Submitter, DEFAULT_SUBMIT_DELAY};
pub use types::*;
pub use validation::{validate, Field, FieldError, FieldErrors};
