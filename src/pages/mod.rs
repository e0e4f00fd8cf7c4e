//! Page components for the intake flow.

mod intake;
mod landing;
mod thank_you;

pub use intake::Intake;
pub use landing::Landing;
pub use thank_you::ThankYou;
