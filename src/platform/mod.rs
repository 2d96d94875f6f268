//! Desktop implementations of the card capabilities.

mod audio;
mod clipboard;

use std::sync::Arc;

use surat_natal_core::{
    Capabilities, CardService, DownloadFolder, PhotoDecoder, SvgRasterizer,
};

use crate::config::AppConfig;

pub use audio::{WebviewAudio, AUDIO_ELEMENT_ID};
pub use clipboard::ArboardClipboard;

/// Page URL before the webview reports its own.
pub const DEFAULT_PAGE_URL: &str = "dioxus://index.html/";

/// Exports are rendered at twice the card size.
const EXPORT_SCALE: f32 = 2.0;

/// Wire the card service to the desktop capabilities.
pub fn build_service(config: &AppConfig) -> CardService {
    let mut caps = Capabilities::new(
        Arc::new(PhotoDecoder::new()),
        Arc::new(SvgRasterizer::with_system_fonts().with_scale(EXPORT_SCALE)),
        Arc::new(ArboardClipboard::new()),
        Arc::new(DownloadFolder::new(&config.downloads_dir)),
    );
    if config.music.is_some() {
        caps = caps.with_audio(Arc::new(WebviewAudio::new(AUDIO_ELEMENT_ID)));
    }

    let page_url = config
        .share_url
        .clone()
        .unwrap_or_else(|| DEFAULT_PAGE_URL.to_string());
    CardService::new(config.content(), caps, page_url)
}
