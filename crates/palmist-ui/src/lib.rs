//! Palmist Intake UI Components
//!
//! Dioxus components for the intake flow, styled by the global stylesheet
//! in the desktop crate:
//! - **Gold (#c9972b)**: titles, primary actions, focus rings
//! - **Amber (#d97706)**: gradient partner for gold on call-to-action buttons
//! - **Rose (#dc2626)**: inline field errors
//! - **Cream (#fffbeb)**: page background

pub mod components;

pub use components::*;
