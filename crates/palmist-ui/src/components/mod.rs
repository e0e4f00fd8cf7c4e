//! Reusable form and layout components
//!
//! Every form control renders its own label and, when given one, the
//! inline error for its field.

mod button;
mod feature_card;
mod field_message;
mod input;
mod spinner;

pub use button::*;
pub use feature_card::*;
pub use field_message::*;
pub use input::*;
pub use spinner::*;
