//! Visual theme for the intake flow.

mod styles;

pub use styles::GLOBAL_STYLES;
