//! Present page: the open card and its actions.

use dioxus::prelude::*;

use crate::components::cards::{CardActions, GreetingCard};

#[component]
pub fn PresentPage() -> Element {
    rsx! {
        div { class: "present-page",
            GreetingCard {}
            CardActions {}
        }
    }
}
