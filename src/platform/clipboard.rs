//! System clipboard via arboard.

use parking_lot::Mutex;
use surat_natal_core::{CardError, CardResult, ClipboardWriter};

/// Opened on first use and kept for the life of the process. On X11 the
/// copied text vanishes with the handle.
#[derive(Default)]
pub struct ArboardClipboard {
    inner: Mutex<Option<arboard::Clipboard>>,
}

impl ArboardClipboard {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ClipboardWriter for ArboardClipboard {
    fn write_text(&self, text: &str) -> CardResult<()> {
        let mut guard = self.inner.lock();
        if guard.is_none() {
            let clipboard =
                arboard::Clipboard::new().map_err(|e| CardError::capability("clipboard", e))?;
            *guard = Some(clipboard);
        }
        match guard.as_mut() {
            Some(clipboard) => clipboard
                .set_text(text.to_owned())
                .map_err(|e| CardError::capability("clipboard", e)),
            None => Err(CardError::capability("clipboard", "clipboard unavailable")),
        }
    }
}
