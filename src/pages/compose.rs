//! Compose page: sender name, portrait, and the open button.

use dioxus::prelude::*;

use crate::components::images::PortraitPicker;
use crate::components::Notice;
use crate::context::use_card;

#[component]
pub fn ComposePage() -> Element {
    let mut card = use_card();
    let session = card.session();
    let service = card.service();
    let title = service.content().page_title.clone();
    let heading = service.content().heading.clone();
    let sender_name = session.sender_name;

    let on_name = move |evt: FormEvent| {
        match card.service().set_sender_name(evt.value()) {
            Ok(()) => card.refresh(),
            Err(e) => tracing::debug!(error = %e, "Name edit ignored"),
        }
    };

    let open = move |_| {
        let service = card.service();
        match service.open() {
            Ok(()) => {
                card.clear_notice();
                card.refresh();
            }
            Err(e) => card.notify(Notice::error(e.user_message())),
        }
    };

    rsx! {
        div { class: "compose-page",
            header { class: "compose-page__header",
                h1 { class: "compose-page__title", "{title}" }
                p { class: "compose-page__subtitle", "{heading}" }
            }

            PortraitPicker {}

            label { class: "compose-page__label", r#for: "sender-name", "Nama pengirim" }
            input {
                id: "sender-name",
                class: "compose-page__input",
                r#type: "text",
                placeholder: "Contoh: Keluarga Budi",
                value: "{sender_name}",
                oninput: on_name,
            }

            button {
                class: "compose-page__open",
                onclick: open,
                "🎁 Buka Surat"
            }
        }
    }
}
