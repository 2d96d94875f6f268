//! Image components

mod portrait_picker;

pub use portrait_picker::PortraitPicker;
