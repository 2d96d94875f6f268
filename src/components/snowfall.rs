//! Falling snow behind the card.

use dioxus::prelude::*;
use rand::Rng;

const FLAKE_COUNT: usize = 40;

/// One flake's inline style: horizontal position, size, fall duration and
/// start offset, all random.
fn flake_style(rng: &mut impl Rng) -> String {
    let left: f32 = rng.random_range(0.0..100.0);
    let size: f32 = rng.random_range(2.0..6.0);
    let duration: f32 = rng.random_range(6.0..16.0);
    let delay: f32 = rng.random_range(-16.0..0.0);
    let opacity: f32 = rng.random_range(0.3..0.9);
    format!(
        "left: {left:.1}%; width: {size:.1}px; height: {size:.1}px; \
         animation-duration: {duration:.1}s; animation-delay: {delay:.1}s; opacity: {opacity:.2};"
    )
}

#[component]
pub fn Snowfall() -> Element {
    // Computed once so flakes do not jump on re-render
    let flakes = use_hook(|| {
        let mut rng = rand::rng();
        (0..FLAKE_COUNT)
            .map(|_| flake_style(&mut rng))
            .collect::<Vec<_>>()
    });

    rsx! {
        div { class: "snowfall", "aria-hidden": "true",
            for (i, style) in flakes.iter().enumerate() {
                span { key: "{i}", class: "snowflake", style: "{style}" }
            }
        }
    }
}
