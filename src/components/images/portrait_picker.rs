//! Portrait picker
//!
//! File dialog button plus a drop zone. The chosen file's bytes go to the
//! card service, which decodes, crops and keeps the newest selection.

use std::path::PathBuf;

use dioxus::html::HasFileData;
use dioxus::prelude::*;
use rfd::FileDialog;
use surat_natal_core::PortraitUpdate;

use crate::components::Notice;
use crate::context::{use_card, CardHandle};

const IMAGE_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg", "webp", "gif", "bmp"];

/// Hand `bytes` to the service and mirror the outcome into the UI.
async fn apply_portrait(mut card: CardHandle, bytes: Vec<u8>) {
    let service = card.service();
    match service.set_portrait(bytes).await {
        Ok(PortraitUpdate::Applied) => card.refresh(),
        Ok(PortraitUpdate::Superseded) | Ok(PortraitUpdate::Discarded) => {}
        Err(e) => card.notify(Notice::error(e.user_message())),
    }
}

async fn read_picked(path: PathBuf) -> Result<Vec<u8>, String> {
    tokio::fs::read(&path)
        .await
        .map_err(|e| format!("Gagal membaca {}: {}", path.display(), e))
}

#[component]
pub fn PortraitPicker(
    /// Button label
    #[props(default = "📷 Pilih Foto".to_string())]
    label: String,
) -> Element {
    let mut card = use_card();
    let mut loading = use_signal(|| false);
    let mut dragging = use_signal(|| false);

    let preview = card.session().portrait.map(|p| p.data_uri().to_string());

    let pick = move |_| {
        spawn(async move {
            // Open file picker (blocking, but in spawn so UI stays responsive)
            let picked = tokio::task::spawn_blocking(|| {
                FileDialog::new()
                    .add_filter("images", IMAGE_EXTENSIONS)
                    .set_title("Pilih Foto Keluarga")
                    .pick_file()
            })
            .await;

            match picked {
                Ok(Some(path)) => {
                    loading.set(true);
                    match read_picked(path).await {
                        Ok(bytes) => apply_portrait(card, bytes).await,
                        Err(msg) => card.notify(Notice::error(msg)),
                    }
                    loading.set(false);
                }
                Ok(None) => {
                    // User cancelled
                }
                Err(e) => {
                    tracing::warn!(error = %e, "File picker task failed");
                    card.notify(Notice::error(format!("File picker error: {}", e)));
                }
            }
        });
    };

    let on_drop = move |evt: DragEvent| async move {
        evt.prevent_default();
        dragging.set(false);

        let Some(engine) = evt.files() else {
            return;
        };
        // Only the first dropped file counts
        let Some(name) = engine.files().into_iter().next() else {
            return;
        };
        loading.set(true);
        match engine.read_file(&name).await {
            Some(bytes) => apply_portrait(card, bytes).await,
            None => card.notify(Notice::error(format!("Gagal membaca {}", name))),
        }
        loading.set(false);
    };

    rsx! {
        div {
            class: if dragging() { "portrait-picker portrait-picker--dragging" } else { "portrait-picker" },
            ondragover: move |evt: DragEvent| {
                evt.prevent_default();
                dragging.set(true);
            },
            ondragleave: move |_| dragging.set(false),
            ondrop: on_drop,

            if let Some(src) = preview {
                img { class: "portrait-picker__preview", src: "{src}", alt: "Foto keluarga" }
            } else {
                div { class: "portrait-picker__placeholder",
                    span { "Tarik foto ke sini" }
                }
            }

            button {
                class: "portrait-picker__btn",
                onclick: pick,
                disabled: loading(),
                if loading() {
                    "⏳ Memuat..."
                } else {
                    "{label}"
                }
            }
        }
    }
}
