//! Card session data model.
//!
//! A [`CardSession`] is the whole of the app's state: which view is active,
//! who the card is from, and the decoded photo. It lives as long as the
//! window and is never persisted.

use crate::portrait::Portrait;

/// Which view of the card is active.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    /// Filling in the name and choosing a photo
    #[default]
    Composing,
    /// Showing the finished card with its actions
    Presenting,
}

impl std::fmt::Display for Phase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Phase::Composing => write!(f, "composing"),
            Phase::Presenting => write!(f, "presenting"),
        }
    }
}

/// Ephemeral state of one card.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CardSession {
    pub phase: Phase,
    pub sender_name: String,
    pub portrait: Option<Portrait>,
}

impl CardSession {
    /// Fresh session: composing, no name, no photo.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_presenting(&self) -> bool {
        self.phase == Phase::Presenting
    }

    /// Sender name with surrounding whitespace removed.
    pub fn trimmed_name(&self) -> &str {
        self.sender_name.trim()
    }

    pub fn has_portrait(&self) -> bool {
        self.portrait.is_some()
    }
}
