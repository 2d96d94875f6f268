//! Page components for the card maker.

mod compose;
mod present;

pub use compose::ComposePage;
pub use present::PresentPage;
