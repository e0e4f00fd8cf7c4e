#![allow(non_snake_case)]

mod app;
mod components;
pub mod context;
mod pages;
mod theme;

use std::path::PathBuf;
use std::sync::{Arc, OnceLock};
use std::time::Duration;

use anyhow::Context;
use clap::Parser;
use dioxus::desktop::{Config, WindowBuilder};
use palmist_core::logging::LoggingBuilder;
use palmist_core::{AppConfig, MemoryStore, RedbStore, SharedStore};

use crate::context::IntakeServices;

/// Services built at startup, handed to the app root as context
static SERVICES: OnceLock<IntakeServices> = OnceLock::new();

/// Get the startup services (an in-memory store if startup never ran)
pub fn get_services() -> IntakeServices {
    SERVICES.get().cloned().unwrap_or_else(|| IntakeServices {
        store: Arc::new(MemoryStore::new()),
        submit_delay: palmist_core::DEFAULT_SUBMIT_DELAY,
    })
}

/// Palmist - palm reading intake
#[derive(Parser, Debug)]
#[command(name = "palmist-desktop")]
#[command(about = "Palmist - submit your palms for a personalized reading")]
struct Args {
    /// Data directory for local storage and logs
    #[arg(short, long)]
    data_dir: Option<PathBuf>,

    /// Simulated submission delay in milliseconds
    #[arg(long, default_value_t = 1500)]
    submit_delay_ms: u64,

    /// Only log to the console
    #[arg(long)]
    no_file_log: bool,
}

impl Args {
    fn into_config(self) -> AppConfig {
        let mut config =
            AppConfig::default().with_submit_delay(Duration::from_millis(self.submit_delay_ms));
        if let Some(dir) = self.data_dir {
            config = config.with_data_dir(dir);
        }
        if self.no_file_log {
            config = config.without_file_logging();
        }
        config
    }
}

fn open_store(config: &AppConfig) -> SharedStore {
    match RedbStore::open(config.store_path()) {
        Ok(store) => Arc::new(store),
        Err(e) => {
            // Keep the flow usable; the hand-off only has to outlive one run
            tracing::error!(
                error = %e,
                path = ?config.store_path(),
                "Failed to open local storage, falling back to memory"
            );
            Arc::new(MemoryStore::new())
        }
    }
}

fn main() -> anyhow::Result<()> {
    let config = Args::parse().into_config();

    let mut logging = LoggingBuilder::new();
    if config.file_logging {
        logging = logging.with_file(config.logs_dir());
    }
    let log_path = logging.init().context("failed to install logging")?;

    tracing::info!(
        data_dir = ?config.data_dir(),
        log_file = ?log_path,
        submit_delay_ms = config.submit_delay.as_millis() as u64,
        "Starting Palmist"
    );

    let services = IntakeServices {
        store: open_store(&config),
        submit_delay: config.submit_delay,
    };
    let _ = SERVICES.set(services);

    let window = Config::new().with_window(
        WindowBuilder::new()
            .with_title("Palmist")
            .with_inner_size(dioxus::desktop::LogicalSize::new(900.0, 960.0))
            .with_resizable(true),
    );

    dioxus::LaunchBuilder::desktop().with_cfg(window).launch(app::App);

    Ok(())
}
