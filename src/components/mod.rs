//! UI components for the card maker.

pub mod cards;
pub mod images;
mod notice;
mod snowfall;

pub use notice::{Notice, NoticeBanner, NoticeKind};
pub use snowfall::Snowfall;
