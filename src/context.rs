//! Service context for the intake views.
//!
//! The storage slot and the submission delay are injected once at the app
//! root so both the form and the thank-you page can be pointed at any
//! [`SubmissionStore`](palmist_core::SubmissionStore).
//!
//! ## Usage
//!
//! ```ignore
//! // In App component
//! use_context_provider(crate::get_services);
//!
//! // In child components
//! let services = use_services();
//! let details = load_confirmation(services.store.as_ref());
//! ```

use std::time::Duration;

use dioxus::prelude::*;
use palmist_core::{SharedStore, Submitter};

/// Shared services for the intake flow.
#[derive(Clone)]
pub struct IntakeServices {
    /// Local storage holding the hand-off slot
    pub store: SharedStore,
    /// Simulated round trip before persisting
    pub submit_delay: Duration,
}

impl IntakeServices {
    pub fn submitter(&self) -> Submitter {
        Submitter::new(self.store.clone(), self.submit_delay)
    }
}

/// Hook to access the intake services from context.
pub fn use_services() -> IntakeServices {
    use_context::<IntakeServices>()
}
