//! Share, export and reset buttons under the open card.

use dioxus::prelude::*;
use surat_natal_core::{ExportOutcome, ShareOutcome};

use crate::components::Notice;
use crate::context::use_card;

#[component]
pub fn CardActions() -> Element {
    let mut card = use_card();
    let mut sharing = use_signal(|| false);
    let mut exporting = use_signal(|| false);

    let share = move |_| {
        sharing.set(true);
        spawn(async move {
            let service = card.service();
            match service.share().await {
                Ok(ShareOutcome::CopiedLink { .. }) => {
                    card.notify(Notice::success(service.content().copied_notice.clone()))
                }
                Ok(ShareOutcome::NativeDialog) => {}
                Ok(ShareOutcome::Failed) => {
                    card.notify(Notice::error("Gagal membagikan surat. Coba lagi."))
                }
                Err(e) => card.notify(Notice::error(e.user_message())),
            }
            sharing.set(false);
        });
    };

    let export = move |_| {
        exporting.set(true);
        spawn(async move {
            let service = card.service();
            match service.export_image().await {
                Ok(ExportOutcome::Saved { path }) => {
                    card.notify(Notice::success(format!("Gambar disimpan: {}", path.display())))
                }
                Ok(ExportOutcome::Failed) => {
                    card.notify(Notice::error("Gagal menyimpan gambar. Coba lagi."))
                }
                Err(e) => card.notify(Notice::error(e.user_message())),
            }
            exporting.set(false);
        });
    };

    let reset = move |_| {
        card.service().reset();
        card.clear_notice();
        card.refresh();
    };

    rsx! {
        div { class: "card-actions",
            button {
                class: "card-actions__btn card-actions__btn--share",
                onclick: share,
                disabled: sharing(),
                if sharing() { "⏳" } else { "🔗 Bagikan" }
            }
            button {
                class: "card-actions__btn card-actions__btn--export",
                onclick: export,
                disabled: exporting(),
                if exporting() { "⏳ Menyimpan..." } else { "💾 Simpan Gambar" }
            }
            button {
                class: "card-actions__btn card-actions__btn--reset",
                onclick: reset,
                "✏️ Ubah"
            }
        }
    }
}
