//! Surat Natal Core Library
//!
//! Session controller and platform capabilities for a single greeting card:
//! the user picks a photo, types a name, opens the card, and can then share
//! a link or download the card as a PNG.
//!
//! ## Overview
//!
//! - [`CardController`]: synchronous Composing/Presenting state machine
//! - [`CardService`]: the controller plus its capabilities (image loader,
//!   rasterizer, share, downloads, ambient audio)
//! - [`CardView`]: the card rendered to SVG, shown on screen and rasterized
//!   for export
//!
//! ## Quick Start
//!
//! ```ignore
//! use std::sync::Arc;
//! use surat_natal_core::*;
//!
//! let caps = Capabilities::new(
//!     Arc::new(PhotoDecoder::new()),
//!     Arc::new(SvgRasterizer::with_system_fonts()),
//!     clipboard,
//!     Arc::new(DownloadFolder::user_default()),
//! );
//! let service = CardService::new(CardContent::default(), caps, page_url);
//!
//! service.set_sender_name("Budi")?;
//! service.set_portrait(std::fs::read("family.jpg")?).await?;
//! service.open()?;
//! service.export_image().await?; // ~/Downloads/Natal-Budi.png
//! ```

pub mod audio;
pub mod card;
pub mod content;
pub mod controller;
pub mod error;
pub mod export;
pub mod logging;
pub mod portrait;
pub mod service;
pub mod session;
pub mod share;

// Re-exports
pub use audio::{AmbientAudio, Silence};
pub use card::{CardView, CARD_HEIGHT, CARD_WIDTH};
pub use content::{CardContent, Rgb, MAX_FILE_NAME_SENDER_BYTES};
pub use controller::{CardController, PortraitTicket, PortraitUpdate};
pub use error::{CardError, CardResult, MissingField};
pub use export::{
    DownloadFolder, DownloadSink, ExportArtifact, ExportOutcome, Rasterizer, SvgRasterizer,
};
pub use portrait::{ImageLoader, PhotoDecoder, Portrait};
pub use service::{Capabilities, CardService};
pub use session::{CardSession, Phase};
pub use share::{ClipboardWriter, NativeShare, ShareCapability, ShareOutcome, SharePayload};
