//! Background music played by the webview's audio element.

use dioxus::prelude::*;
use surat_natal_core::{AmbientAudio, CardResult};

/// Id of the `<audio>` element rendered by the app root.
pub const AUDIO_ELEMENT_ID: &str = "card-music";

/// Starts the page's audio element. A blocked autoplay is swallowed in
/// the page; the card opens either way.
#[derive(Debug, Clone)]
pub struct WebviewAudio {
    element_id: &'static str,
}

impl WebviewAudio {
    pub fn new(element_id: &'static str) -> Self {
        Self { element_id }
    }

    fn script(&self) -> String {
        format!(
            r#"const el = document.getElementById("{}");
if (el) {{ el.play().catch(() => {{}}); }}"#,
            self.element_id
        )
    }
}

impl AmbientAudio for WebviewAudio {
    fn start(&self) -> CardResult<()> {
        // Called from UI event handlers, inside the dioxus runtime
        let _ = document::eval(&self.script());
        Ok(())
    }
}
