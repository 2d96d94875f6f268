//! Card context provider.
//!
//! The app config lives in a process-wide `OnceLock` set from the command
//! line before launch. The card service and its reactive mirrors are
//! provided to all components via `use_context`.
//!
//! ## Usage
//!
//! ```ignore
//! // In child components
//! let card = use_card();
//! if card.session().is_presenting() { ... }
//! ```

use std::sync::{Arc, OnceLock};

use dioxus::prelude::*;
use surat_natal_core::{CardService, CardSession};

use crate::components::Notice;
use crate::config::AppConfig;

static CONFIG: OnceLock<AppConfig> = OnceLock::new();

/// Store the config parsed in `main`. Later calls are ignored.
pub fn set_app_config(config: AppConfig) {
    let _ = CONFIG.set(config);
}

/// The app config (defaults if `main` never set one).
pub fn app_config() -> &'static AppConfig {
    CONFIG.get_or_init(AppConfig::default)
}

/// Handle to the card service plus the signals the UI renders from.
///
/// `session` is a snapshot of the service state; call [`CardHandle::refresh`]
/// after every service call that may have changed it.
#[derive(Clone, Copy)]
pub struct CardHandle {
    service: Signal<Arc<CardService>>,
    session: Signal<CardSession>,
    notice: Signal<Option<Notice>>,
}

impl CardHandle {
    pub fn new(service: Arc<CardService>) -> Self {
        let session = service.snapshot();
        Self {
            service: Signal::new(service),
            session: Signal::new(session),
            notice: Signal::new(None),
        }
    }

    pub fn service(&self) -> Arc<CardService> {
        self.service.read().clone()
    }

    /// Last snapshot (subscribes the caller).
    pub fn session(&self) -> CardSession {
        self.session.read().clone()
    }

    /// Re-read the session from the service.
    pub fn refresh(&mut self) {
        let snapshot = self.service.read().snapshot();
        if *self.session.peek() != snapshot {
            self.session.set(snapshot);
        }
    }

    pub fn notice(&self) -> Option<Notice> {
        self.notice.read().clone()
    }

    pub fn notify(&mut self, notice: Notice) {
        self.notice.set(Some(notice));
    }

    pub fn clear_notice(&mut self) {
        self.notice.set(None);
    }
}

/// Hook to access the card from context.
pub fn use_card() -> CardHandle {
    use_context::<CardHandle>()
}
