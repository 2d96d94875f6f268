use std::sync::Arc;

use dioxus::prelude::*;

use crate::components::{NoticeBanner, Snowfall};
use crate::context::{app_config, CardHandle};
use crate::pages::{ComposePage, PresentPage};
use crate::platform::{self, AUDIO_ELEMENT_ID};
use crate::theme::GLOBAL_STYLES;

/// Root application component.
///
/// Provides global styles, the card context, and switches between the
/// compose and present pages by phase.
#[component]
pub fn App() -> Element {
    let config = app_config();
    let card = use_context_provider(|| CardHandle::new(Arc::new(platform::build_service(config))));

    // Without an explicit share URL, share the page the webview is showing
    use_effect(move || {
        if config.share_url.is_some() {
            return;
        }
        spawn(async move {
            match document::eval("return window.location.href;").join::<String>().await {
                Ok(url) => {
                    tracing::debug!(%url, "Page URL resolved");
                    card.service().set_page_url(url);
                }
                Err(e) => tracing::debug!(error = ?e, "Keeping default page URL"),
            }
        });
    });

    let presenting = card.session().is_presenting();
    let music_src = config.music.as_ref().map(|m| m.data_uri.as_str());

    rsx! {
        style { {GLOBAL_STYLES} }
        Snowfall {}

        if let Some(src) = music_src {
            audio {
                id: AUDIO_ELEMENT_ID,
                src,
                r#loop: true,
                preload: "auto",
            }
        }

        main { class: "app",
            NoticeBanner {}
            if presenting {
                PresentPage {}
            } else {
                ComposePage {}
            }
        }
    }
}
