//! Logging setup with an optional JSONL file.
//!
//! ```text
//! <data_dir>/logs/
//! └── 2026-01-21_palmist.jsonl     # one JSON object per event
//! ```
//!
//! ```ignore
//! use palmist_core::logging::LoggingBuilder;
//!
//! let log_path = LoggingBuilder::new()
//!     .with_file(config.logs_dir())
//!     .init()?;
//! ```
//!
//! ```bash
//! # Find all warnings and errors
//! jq 'select(.level == "warn" or .level == "error")' logs/*.jsonl
//! ```

pub mod entry;
pub mod layer;
pub mod writer;

pub use entry::JsonLogEntry;
pub use layer::{JsonlLayer, LoggingBuilder, DEFAULT_FILTER};
pub use writer::{read_entries, LogFileWriter};
