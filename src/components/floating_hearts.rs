//! Floating Hearts Background Component
//!
//! Thirty translucent hearts rising through the window on endless loops.
//! Positions and timings come from the particle field; the motion itself
//! is the `float-up` keyframe animation.

use dioxus::prelude::*;
use heartcard_core::{ParticleField, ParticleSpec};

use super::HeartIcon;

/// One rising heart
#[component]
pub fn FloatingHeart(spec: ParticleSpec) -> Element {
    let style = spec.style();

    rsx! {
        div {
            class: "floating-heart",
            style: "{style}",
            HeartIcon { size: spec.size }
        }
    }
}

/// The whole background layer. Props compare equal across re-renders, so
/// the hearts are never rebuilt and their animations never restart.
#[component]
pub fn FloatingHearts(field: ParticleField) -> Element {
    rsx! {
        div { class: "floating-hearts", "aria-hidden": "true",
            for spec in field.iter() {
                FloatingHeart { key: "{spec.index}", spec: spec.clone() }
            }
        }
    }
}
