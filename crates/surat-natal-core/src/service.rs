//! Card service: the controller wired to its capabilities.
//!
//! Every operation's synchronous part runs under the controller lock and
//! finishes before the next one starts. Slow capability work (decoding,
//! rasterizing, clipboard, disk) runs on the blocking pool with the lock
//! released, and reports back through the controller.

use std::sync::Arc;

use parking_lot::Mutex;

use crate::audio::{AmbientAudio, Silence};
use crate::card::CardView;
use crate::content::CardContent;
use crate::controller::{CardController, PortraitUpdate};
use crate::error::{CardError, CardResult};
use crate::export::{DownloadSink, ExportArtifact, ExportOutcome, Rasterizer};
use crate::portrait::ImageLoader;
use crate::session::{CardSession, Phase};
use crate::share::{ClipboardWriter, NativeShare, ShareCapability, SharePayload, ShareOutcome};

/// Platform capabilities the service delegates to.
#[derive(Clone)]
pub struct Capabilities {
    pub loader: Arc<dyn ImageLoader>,
    pub rasterizer: Arc<dyn Rasterizer>,
    pub native_share: Option<Arc<dyn NativeShare>>,
    pub clipboard: Arc<dyn ClipboardWriter>,
    pub downloads: Arc<dyn DownloadSink>,
    pub audio: Arc<dyn AmbientAudio>,
}

impl Capabilities {
    /// Capabilities without native share or music.
    pub fn new(
        loader: Arc<dyn ImageLoader>,
        rasterizer: Arc<dyn Rasterizer>,
        clipboard: Arc<dyn ClipboardWriter>,
        downloads: Arc<dyn DownloadSink>,
    ) -> Self {
        Self {
            loader,
            rasterizer,
            native_share: None,
            clipboard,
            downloads,
            audio: Arc::new(Silence),
        }
    }

    pub fn with_native_share(mut self, native: Arc<dyn NativeShare>) -> Self {
        self.native_share = Some(native);
        self
    }

    pub fn with_audio(mut self, audio: Arc<dyn AmbientAudio>) -> Self {
        self.audio = audio;
        self
    }
}

/// The one card session of a window, plus everything it talks to.
pub struct CardService {
    controller: Mutex<CardController>,
    caps: Capabilities,
    content: CardContent,
    page_url: Mutex<String>,
}

impl CardService {
    pub fn new(content: CardContent, caps: Capabilities, page_url: impl Into<String>) -> Self {
        Self {
            controller: Mutex::new(CardController::new()),
            caps,
            content,
            page_url: Mutex::new(page_url.into()),
        }
    }

    pub fn content(&self) -> &CardContent {
        &self.content
    }

    /// Copy of the current session, for rendering.
    pub fn snapshot(&self) -> CardSession {
        self.controller.lock().session().clone()
    }

    pub fn phase(&self) -> Phase {
        self.controller.lock().phase()
    }

    /// URL placed in share payloads.
    pub fn page_url(&self) -> String {
        self.page_url.lock().clone()
    }

    pub fn set_page_url(&self, url: impl Into<String>) {
        *self.page_url.lock() = url.into();
    }

    pub fn set_sender_name(&self, text: impl Into<String>) -> CardResult<()> {
        self.controller.lock().set_sender_name(text)
    }

    /// Decode `bytes` and make them the portrait, unless a newer selection
    /// or an `open()` gets there first.
    pub async fn set_portrait(&self, bytes: Vec<u8>) -> CardResult<PortraitUpdate> {
        let ticket = self.controller.lock().request_portrait()?;
        let size = bytes.len();
        tracing::debug!(ticket = ticket.id(), bytes = size, "Decoding portrait");

        let loader = Arc::clone(&self.caps.loader);
        let result = run_blocking("image loader", move || loader.decode(&bytes))
            .await
            .map_err(|e| match e {
                CardError::Capability { message, .. } => CardError::Decode(message),
                other => other,
            });

        let update = self.controller.lock().resolve_portrait(ticket, result);
        match &update {
            Ok(PortraitUpdate::Applied) => {
                tracing::info!(ticket = ticket.id(), bytes = size, "Portrait set")
            }
            Ok(other) => tracing::debug!(ticket = ticket.id(), outcome = ?other, "Portrait not applied"),
            Err(e) => tracing::warn!(ticket = ticket.id(), error = %e, "Portrait decode failed"),
        }
        update
    }

    /// Open the card and start the music.
    pub fn open(&self) -> CardResult<()> {
        let opened = {
            let mut controller = self.controller.lock();
            let was_composing = controller.phase() == Phase::Composing;
            if let Err(e) = controller.open() {
                tracing::info!(error = %e, "Open blocked");
                return Err(e);
            }
            was_composing
        };

        if opened {
            tracing::info!("Card opened");
            if let Err(e) = self.caps.audio.start() {
                tracing::debug!(error = %e, "Ambient audio did not start");
            }
        }
        Ok(())
    }

    /// Back to composing with name and portrait kept.
    pub fn reset(&self) {
        self.controller.lock().reset();
        tracing::info!("Card closed for editing");
    }

    /// Render the current session.
    pub fn render(&self) -> CardView {
        let controller = self.controller.lock();
        CardView::from_session(&self.content, controller.session())
    }

    /// Payload for `share()`; only available on an open card.
    pub fn share_payload(&self) -> CardResult<SharePayload> {
        let controller = self.controller.lock();
        let session = controller.presenting("share")?;
        Ok(SharePayload {
            title: self.content.share_title.clone(),
            text: self.content.share_text(session.trimmed_name()),
            url: self.page_url(),
        })
    }

    /// Share the card link. Capability failures are logged and reported as
    /// [`ShareOutcome::Failed`]; only a closed card is an error.
    pub async fn share(&self) -> CardResult<ShareOutcome> {
        let payload = self.share_payload()?;
        let capability =
            ShareCapability::probe(self.caps.native_share.as_ref(), &self.caps.clipboard);
        let route = capability.kind();

        match run_blocking("share", move || capability.deliver(&payload)).await {
            Ok(outcome) => {
                tracing::info!(route, outcome = ?outcome, "Shared card");
                Ok(outcome)
            }
            Err(e) => {
                tracing::warn!(route, error = %e, "Share failed");
                Ok(ShareOutcome::Failed)
            }
        }
    }

    /// Rasterize the open card and save it as `<AppLabel>-<senderName>.png`.
    /// Capability failures are logged and reported as
    /// [`ExportOutcome::Failed`]; only a closed card is an error.
    pub async fn export_image(&self) -> CardResult<ExportOutcome> {
        let (view, file_name) = {
            let controller = self.controller.lock();
            let session = controller.presenting("export image")?;
            (
                CardView::from_session(&self.content, session),
                self.content.export_file_name(&session.sender_name),
            )
        };

        let background = self.content.background;
        let rasterizer = Arc::clone(&self.caps.rasterizer);
        let downloads = Arc::clone(&self.caps.downloads);
        let name = file_name.clone();

        let saved = run_blocking("export", move || {
            let png = rasterizer.rasterize(&view, background)?;
            downloads.save(&ExportArtifact {
                file_name: name,
                png,
            })
        })
        .await;

        match saved {
            Ok(path) => {
                tracing::info!(file = %file_name, path = %path.display(), "Exported card image");
                Ok(ExportOutcome::Saved { path })
            }
            Err(e) => {
                tracing::warn!(file = %file_name, error = %e, "Export failed");
                Ok(ExportOutcome::Failed)
            }
        }
    }
}

/// Run a blocking capability call; a panic becomes a capability error.
async fn run_blocking<T, F>(capability: &'static str, f: F) -> CardResult<T>
where
    F: FnOnce() -> CardResult<T> + Send + 'static,
    T: Send + 'static,
{
    match tokio::task::spawn_blocking(f).await {
        Ok(result) => result,
        Err(e) => Err(CardError::capability(capability, e)),
    }
}
