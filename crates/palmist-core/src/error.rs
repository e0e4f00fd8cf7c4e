//! Error types for Palmist intake

use thiserror::Error;

/// Main error type for Palmist operations
#[derive(Error, Debug)]
pub enum PalmistError {
    /// Error during storage operations
    #[error("Storage error: {0}")]
    Storage(String),

    /// Database creation/opening error
    #[error("Database error: {0}")]
    Database(#[from] redb::DatabaseError),

    /// Transaction error
    #[error("Transaction error: {0}")]
    Transaction(#[from] redb::TransactionError),

    /// Table error
    #[error("Table error: {0}")]
    Table(#[from] redb::TableError),

    /// Storage operation error
    #[error("Storage operation error: {0}")]
    StorageOp(#[from] redb::StorageError),

    /// Commit error
    #[error("Commit error: {0}")]
    Commit(#[from] redb::CommitError),

    /// Error during serialization/deserialization
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// General I/O error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Logging could not be installed
    #[error("Logging error: {0}")]
    Logging(String),

    /// Selected file could not be used as a palm image
    #[error("Invalid image: {0}")]
    InvalidImage(String),

    /// A submission is already waiting on its delay
    #[error("A submission is already in progress")]
    SubmissionInProgress,

    /// Submit was attempted with failing fields
    #[error("Submission has {0} invalid field(s)")]
    InvalidSubmission(usize),
}

impl From<serde_json::Error> for PalmistError {
    fn from(e: serde_json::Error) -> Self {
        PalmistError::Serialization(e.to_string())
    }
}

/// Result type alias using PalmistError
pub type PalmistResult<T> = Result<T, PalmistError>;
