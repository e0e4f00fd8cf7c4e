//! App-specific components for the intake flow.

mod palm_upload;

pub use palm_upload::PalmUpload;
