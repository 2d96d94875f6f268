//! Fake capabilities shared by the integration tests.

#![allow(dead_code)]

use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{mpsc, Arc};

use parking_lot::Mutex;
use surat_natal_core::*;

pub const PAGE_URL: &str = "dioxus://index.html/";

/// Accepts any non-empty input; the portrait's bytes are the input bytes.
pub struct EchoLoader;

impl ImageLoader for EchoLoader {
    fn decode(&self, bytes: &[u8]) -> CardResult<Portrait> {
        if bytes.is_empty() {
            return Err(CardError::Decode("file is empty".into()));
        }
        Ok(Portrait::from_png(bytes.to_vec(), 1, 1))
    }
}

/// Loader whose decodes block until the test releases them, keyed by the
/// first input byte. Reports each decode start on `started`.
pub struct GatedLoader {
    gates: Mutex<HashMap<u8, mpsc::Receiver<()>>>,
    started: tokio::sync::mpsc::UnboundedSender<u8>,
}

impl GatedLoader {
    pub fn new() -> (Self, tokio::sync::mpsc::UnboundedReceiver<u8>) {
        let (started, started_rx) = tokio::sync::mpsc::unbounded_channel();
        (
            Self {
                gates: Mutex::new(HashMap::new()),
                started,
            },
            started_rx,
        )
    }

    /// Register a gate for `key`; sending on the returned sender releases it.
    pub fn gate(&self, key: u8) -> mpsc::Sender<()> {
        let (tx, rx) = mpsc::channel();
        self.gates.lock().insert(key, rx);
        tx
    }
}

impl ImageLoader for GatedLoader {
    fn decode(&self, bytes: &[u8]) -> CardResult<Portrait> {
        let key = bytes[0];
        let gate = self.gates.lock().remove(&key);
        let _ = self.started.send(key);
        if let Some(gate) = gate {
            let _ = gate.recv();
        }
        Ok(Portrait::from_png(bytes.to_vec(), 1, 1))
    }
}

#[derive(Default)]
pub struct RecordingClipboard {
    pub written: Mutex<Vec<String>>,
}

impl ClipboardWriter for RecordingClipboard {
    fn write_text(&self, text: &str) -> CardResult<()> {
        self.written.lock().push(text.to_string());
        Ok(())
    }
}

pub struct BrokenClipboard;

impl ClipboardWriter for BrokenClipboard {
    fn write_text(&self, _text: &str) -> CardResult<()> {
        Err(CardError::capability("clipboard", "no display server"))
    }
}

#[derive(Default)]
pub struct RecordingSheet {
    pub shared: Mutex<Vec<SharePayload>>,
}

impl NativeShare for RecordingSheet {
    fn is_available(&self) -> bool {
        true
    }

    fn share(&self, payload: &SharePayload) -> CardResult<()> {
        self.shared.lock().push(payload.clone());
        Ok(())
    }
}

/// Returns the SVG bytes as the "PNG", or fails when `broken`.
pub struct FakeRasterizer {
    pub broken: bool,
    pub backgrounds: Mutex<Vec<Rgb>>,
}

impl FakeRasterizer {
    pub fn working() -> Self {
        Self {
            broken: false,
            backgrounds: Mutex::new(Vec::new()),
        }
    }

    pub fn broken() -> Self {
        Self {
            broken: true,
            backgrounds: Mutex::new(Vec::new()),
        }
    }
}

impl Rasterizer for FakeRasterizer {
    fn rasterize(&self, view: &CardView, background: Rgb) -> CardResult<Vec<u8>> {
        self.backgrounds.lock().push(background);
        if self.broken {
            return Err(CardError::capability("rasterizer", "canvas tainted"));
        }
        Ok(view.svg().as_bytes().to_vec())
    }
}

#[derive(Default)]
pub struct MemoryDownloads {
    pub saved: Mutex<Vec<ExportArtifact>>,
}

impl DownloadSink for MemoryDownloads {
    fn save(&self, artifact: &ExportArtifact) -> CardResult<PathBuf> {
        self.saved.lock().push(artifact.clone());
        Ok(PathBuf::from("/downloads").join(&artifact.file_name))
    }
}

#[derive(Default)]
pub struct CountingAudio {
    pub starts: AtomicUsize,
    pub blocked: bool,
}

impl CountingAudio {
    pub fn count(&self) -> usize {
        self.starts.load(Ordering::SeqCst)
    }
}

impl AmbientAudio for CountingAudio {
    fn start(&self) -> CardResult<()> {
        self.starts.fetch_add(1, Ordering::SeqCst);
        if self.blocked {
            return Err(CardError::capability("audio", "autoplay blocked"));
        }
        Ok(())
    }
}

/// Handles to the fakes behind a service.
pub struct Harness {
    pub service: Arc<CardService>,
    pub clipboard: Arc<RecordingClipboard>,
    pub rasterizer: Arc<FakeRasterizer>,
    pub downloads: Arc<MemoryDownloads>,
    pub audio: Arc<CountingAudio>,
}

pub fn harness_with(loader: Arc<dyn ImageLoader>, rasterizer: FakeRasterizer) -> Harness {
    let clipboard = Arc::new(RecordingClipboard::default());
    let rasterizer = Arc::new(rasterizer);
    let downloads = Arc::new(MemoryDownloads::default());
    let audio = Arc::new(CountingAudio::default());

    let caps = Capabilities::new(
        loader,
        rasterizer.clone(),
        clipboard.clone(),
        downloads.clone(),
    )
    .with_audio(audio.clone());

    Harness {
        service: Arc::new(CardService::new(CardContent::default(), caps, PAGE_URL)),
        clipboard,
        rasterizer,
        downloads,
        audio,
    }
}

pub fn harness() -> Harness {
    harness_with(Arc::new(EchoLoader), FakeRasterizer::working())
}
