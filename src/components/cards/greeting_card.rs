//! The rendered greeting card.

use dioxus::prelude::*;
use surat_natal_core::CardView;

use crate::context::use_card;

/// Shows the same SVG document the export rasterizes.
#[component]
pub fn GreetingCard() -> Element {
    let card = use_card();
    let session = card.session();
    let service = card.service();
    let svg = CardView::from_session(service.content(), &session).into_svg();

    rsx! {
        div { class: "greeting-card",
            div {
                class: "greeting-card__svg",
                dangerous_inner_html: "{svg}",
            }
        }
    }
}
