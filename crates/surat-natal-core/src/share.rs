//! Share capability.
//!
//! Platforms with a native share sheet get the whole payload; everything
//! else gets the link copied to the clipboard.

use std::sync::Arc;

use crate::error::CardResult;

/// What gets shared.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SharePayload {
    pub title: String,
    pub text: String,
    pub url: String,
}

/// Platform share sheet.
pub trait NativeShare: Send + Sync {
    /// Whether the platform can show a share sheet right now.
    fn is_available(&self) -> bool;

    /// Show the sheet. Blocks until the platform returns.
    fn share(&self, payload: &SharePayload) -> CardResult<()>;
}

/// Clipboard used as the share fallback.
pub trait ClipboardWriter: Send + Sync {
    fn write_text(&self, text: &str) -> CardResult<()>;
}

/// Result of a completed share call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShareOutcome {
    /// Handed off to the native share sheet
    NativeDialog,
    /// The link was copied to the clipboard
    CopiedLink { url: String },
    /// The capability failed; already logged
    Failed,
}

/// The share route chosen by [`ShareCapability::probe`].
#[derive(Clone)]
pub enum ShareCapability {
    Native(Arc<dyn NativeShare>),
    Clipboard(Arc<dyn ClipboardWriter>),
}

impl ShareCapability {
    /// Prefer the native sheet when one is present and available.
    pub fn probe(
        native: Option<&Arc<dyn NativeShare>>,
        clipboard: &Arc<dyn ClipboardWriter>,
    ) -> Self {
        match native {
            Some(native) if native.is_available() => ShareCapability::Native(Arc::clone(native)),
            _ => ShareCapability::Clipboard(Arc::clone(clipboard)),
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            ShareCapability::Native(_) => "native",
            ShareCapability::Clipboard(_) => "clipboard",
        }
    }

    /// Deliver the payload. Blocking.
    pub fn deliver(&self, payload: &SharePayload) -> CardResult<ShareOutcome> {
        match self {
            ShareCapability::Native(native) => {
                native.share(payload)?;
                Ok(ShareOutcome::NativeDialog)
            }
            ShareCapability::Clipboard(clipboard) => {
                clipboard.write_text(&payload.url)?;
                Ok(ShareOutcome::CopiedLink {
                    url: payload.url.clone(),
                })
            }
        }
    }
}

impl std::fmt::Debug for ShareCapability {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "ShareCapability::{}", self.kind())
    }
}
