//! Resolved runtime configuration.
//!
//! Built by the desktop binary from its command-line flags.

use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::submission::DEFAULT_SUBMIT_DELAY;

const STORE_FILE: &str = "palmist.redb";

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    /// Directory holding the storage file and logs
    pub data_dir: PathBuf,
    /// Simulated network round trip before persisting
    pub submit_delay: Duration,
    /// Whether to also write JSONL logs under `data_dir/logs`
    pub file_logging: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
            submit_delay: DEFAULT_SUBMIT_DELAY,
            file_logging: true,
        }
    }
}

impl AppConfig {
    pub fn with_data_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.data_dir = dir.into();
        self
    }

    pub fn with_submit_delay(mut self, delay: Duration) -> Self {
        self.submit_delay = delay;
        self
    }

    pub fn without_file_logging(mut self) -> Self {
        self.file_logging = false;
        self
    }

    pub fn store_path(&self) -> PathBuf {
        self.data_dir.join(STORE_FILE)
    }

    pub fn logs_dir(&self) -> PathBuf {
        self.data_dir.join("logs")
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }
}

/// `<platform data dir>/palmist`, or `./palmist` when there is none.
pub fn default_data_dir() -> PathBuf {
    dirs::data_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("palmist")
}
