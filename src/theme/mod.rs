//! Festive theme.

mod styles;

pub use styles::GLOBAL_STYLES;
