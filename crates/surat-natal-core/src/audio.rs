//! Ambient music started when the card opens.

use crate::error::CardResult;

/// Best-effort background music.
///
/// `start` must return quickly; playback itself is the platform's business.
/// Errors are logged by the caller and otherwise ignored.
pub trait AmbientAudio: Send + Sync {
    fn start(&self) -> CardResult<()>;
}

/// No music configured.
#[derive(Debug, Clone, Copy, Default)]
pub struct Silence;

impl AmbientAudio for Silence {
    fn start(&self) -> CardResult<()> {
        Ok(())
    }
}
