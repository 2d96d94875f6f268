//! Error types for Surat Natal

use thiserror::Error;

use crate::session::Phase;

/// Field that blocks the Composing -> Presenting transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MissingField {
    /// No photo has been decoded yet
    Portrait,
    /// Sender name is empty after trimming
    SenderName,
}

impl MissingField {
    /// Message shown to the user when this field blocks `open()`.
    pub fn user_message(&self) -> &'static str {
        match self {
            MissingField::Portrait => "Silakan pilih foto terlebih dahulu!",
            MissingField::SenderName => "Silakan masukkan nama pembuat pesan!",
        }
    }
}

impl std::fmt::Display for MissingField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MissingField::Portrait => write!(f, "portrait"),
            MissingField::SenderName => write!(f, "sender name"),
        }
    }
}

/// Main error type for card session operations
#[derive(Error, Debug)]
pub enum CardError {
    /// `open()` was called before both fields were filled in
    #[error("Missing {0}")]
    Validation(MissingField),

    /// The selected file could not be turned into a portrait
    #[error("Image decode error: {0}")]
    Decode(String),

    /// A platform capability (share, clipboard, rasterizer, download) failed
    #[error("{capability} failed: {message}")]
    Capability {
        capability: &'static str,
        message: String,
    },

    /// Operation is not available in the current phase
    #[error("{operation} is not available while {phase}")]
    InvalidPhase {
        operation: &'static str,
        phase: Phase,
    },

    /// General I/O error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl CardError {
    /// Build a capability failure from any displayable error.
    pub fn capability(capability: &'static str, err: impl std::fmt::Display) -> Self {
        CardError::Capability {
            capability,
            message: err.to_string(),
        }
    }

    /// Text suitable for the notice banner.
    pub fn user_message(&self) -> String {
        match self {
            CardError::Validation(field) => field.user_message().to_string(),
            CardError::Decode(_) => "Foto tidak dapat dibuka. Silakan pilih foto lain.".to_string(),
            other => other.to_string(),
        }
    }
}

/// Result type alias using CardError
pub type CardResult<T> = Result<T, CardError>;
