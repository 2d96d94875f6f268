//! Notice banner: the app's alert surface.
//!
//! Validation messages, decode failures and action results all land here.
//! Notices dismiss themselves after a few seconds or on click.

use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

use dioxus::prelude::*;

use crate::context::use_card;

/// How long a notice stays up.
const NOTICE_TTL: Duration = Duration::from_secs(4);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Info,
    Success,
    Error,
}

impl NoticeKind {
    fn class(self) -> &'static str {
        match self {
            NoticeKind::Info => "notice notice--info",
            NoticeKind::Success => "notice notice--success",
            NoticeKind::Error => "notice notice--error",
        }
    }

    fn icon(self) -> &'static str {
        match self {
            NoticeKind::Info => "🔔",
            NoticeKind::Success => "✨",
            NoticeKind::Error => "⚠️",
        }
    }
}

static NEXT_NOTICE_ID: AtomicU64 = AtomicU64::new(1);

/// One shown message. Every notice gets its own id, so the same text
/// shown twice counts as two notices with two timers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub id: u64,
    pub kind: NoticeKind,
    pub text: String,
}

impl Notice {
    fn new(kind: NoticeKind, text: impl Into<String>) -> Self {
        Self {
            id: NEXT_NOTICE_ID.fetch_add(1, Ordering::Relaxed),
            kind,
            text: text.into(),
        }
    }

    pub fn info(text: impl Into<String>) -> Self {
        Self::new(NoticeKind::Info, text)
    }

    pub fn success(text: impl Into<String>) -> Self {
        Self::new(NoticeKind::Success, text)
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self::new(NoticeKind::Error, text)
    }
}

#[component]
pub fn NoticeBanner() -> Element {
    let mut card = use_card();
    let current = card.notice();

    // Auto-dismiss, unless a newer notice replaced this one meanwhile
    use_effect(move || {
        if let Some(shown) = card.notice().map(|n| n.id) {
            spawn(async move {
                tokio::time::sleep(NOTICE_TTL).await;
                if card.notice().map(|n| n.id) == Some(shown) {
                    card.clear_notice();
                }
            });
        }
    });

    match current {
        Some(Notice { kind, text, .. }) => rsx! {
            div {
                class: kind.class(),
                role: "alert",
                span { class: "notice__icon", {kind.icon()} }
                span { class: "notice__text", "{text}" }
                button {
                    class: "notice__dismiss",
                    onclick: move |_| card.clear_notice(),
                    "tutup"
                }
            }
        },
        None => rsx! {},
    }
}
