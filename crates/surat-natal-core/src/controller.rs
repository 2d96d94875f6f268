//! Card session state machine.
//!
//! ```text
//! Composing --(open: valid)--> Presenting
//! Presenting --(reset)--> Composing
//! Composing --(open: invalid)--> Composing   [reports the missing field]
//! ```
//!
//! The controller is synchronous. Portrait decoding happens elsewhere and
//! reports back through a [`PortraitTicket`], so only the most recent
//! selection can ever land in the session.

use crate::error::{CardError, CardResult, MissingField};
use crate::portrait::Portrait;
use crate::session::{CardSession, Phase};

/// Handle for one in-flight portrait decode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct PortraitTicket(u64);

impl PortraitTicket {
    pub fn id(&self) -> u64 {
        self.0
    }
}

/// What happened to a completed decode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PortraitUpdate {
    /// The decoded portrait is now on the session
    Applied,
    /// A newer selection was made after this one started
    Superseded,
    /// The card was opened while decoding; the portrait is frozen
    Discarded,
}

/// Owner of the single [`CardSession`].
#[derive(Debug, Default)]
pub struct CardController {
    session: CardSession,
    issued: u64,
}

impl CardController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn session(&self) -> &CardSession {
        &self.session
    }

    pub fn phase(&self) -> Phase {
        self.session.phase
    }

    /// Replace the sender name. Rejected while presenting.
    pub fn set_sender_name(&mut self, text: impl Into<String>) -> CardResult<()> {
        self.require_phase(Phase::Composing, "set sender name")?;
        self.session.sender_name = text.into();
        Ok(())
    }

    /// Start a portrait selection. Any earlier outstanding ticket is
    /// superseded from this point on.
    pub fn request_portrait(&mut self) -> CardResult<PortraitTicket> {
        self.require_phase(Phase::Composing, "set portrait")?;
        self.issued += 1;
        Ok(PortraitTicket(self.issued))
    }

    /// Settle a decode started with [`request_portrait`](Self::request_portrait).
    ///
    /// A decode error is returned only for the latest ticket; errors from
    /// superseded selections are dropped with them.
    pub fn resolve_portrait(
        &mut self,
        ticket: PortraitTicket,
        result: CardResult<Portrait>,
    ) -> CardResult<PortraitUpdate> {
        if ticket.0 != self.issued {
            tracing::debug!(ticket = ticket.0, latest = self.issued, "Dropping superseded portrait");
            return Ok(PortraitUpdate::Superseded);
        }
        if self.session.phase != Phase::Composing {
            tracing::debug!(ticket = ticket.0, "Dropping portrait decoded after open");
            return Ok(PortraitUpdate::Discarded);
        }

        let portrait = result?;
        self.session.portrait = Some(portrait);
        Ok(PortraitUpdate::Applied)
    }

    /// Check the open preconditions without transitioning.
    ///
    /// The portrait is checked before the name.
    pub fn validate(&self) -> CardResult<()> {
        if self.session.portrait.is_none() {
            return Err(CardError::Validation(MissingField::Portrait));
        }
        if self.session.trimmed_name().is_empty() {
            return Err(CardError::Validation(MissingField::SenderName));
        }
        Ok(())
    }

    /// Composing -> Presenting, if both fields are filled in.
    ///
    /// Opening an already open card is a no-op.
    pub fn open(&mut self) -> CardResult<()> {
        if self.session.phase == Phase::Presenting {
            return Ok(());
        }
        self.validate()?;
        self.session.phase = Phase::Presenting;
        Ok(())
    }

    /// Back to Composing. Name and portrait are kept for editing.
    pub fn reset(&mut self) {
        self.session.phase = Phase::Composing;
    }

    /// Borrow the session for an action that only makes sense on an open
    /// card (share, export).
    pub fn presenting(&self, operation: &'static str) -> CardResult<&CardSession> {
        self.require_phase(Phase::Presenting, operation)?;
        Ok(&self.session)
    }

    fn require_phase(&self, expected: Phase, operation: &'static str) -> CardResult<()> {
        if self.session.phase != expected {
            return Err(CardError::InvalidPhase {
                operation,
                phase: self.session.phase,
            });
        }
        Ok(())
    }
}
