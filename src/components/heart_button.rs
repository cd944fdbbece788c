//! Closed Face Component
//!
//! A large pulsing heart with a soft glow and a caption. The whole block
//! is the click target that opens the card.

use std::time::Duration;

use dioxus::prelude::*;
use heartcard_core::{Easing, Phase, ViewState};

use super::face::{face_class, face_timing_style};
use super::HeartIcon;
use crate::context::use_card_copy;

/// Size of the closed heart (px)
const HEART_SIZE: f64 = 140.0;

/// One beat of the pulse animation (seconds)
const PULSE_PERIOD: f64 = 1.5;

/// Properties for the HeartButton component
#[derive(Clone, PartialEq, Props)]
pub struct HeartButtonProps {
    pub phase: Phase,
    pub enter: Duration,
    pub exit: Duration,
    /// Fired when the heart is clicked
    pub onopen: EventHandler<()>,
}

/// Closed face of the card
#[component]
pub fn HeartButton(props: HeartButtonProps) -> Element {
    let copy = use_card_copy();
    let class = face_class(ViewState::Closed.key(), props.phase);
    let timing = face_timing_style(props.enter, props.exit);
    let pulse = format!(
        "animation-duration: {PULSE_PERIOD}s; animation-timing-function: {};",
        Easing::EaseInOut.css()
    );

    rsx! {
        div {
            class: "{class}",
            style: "{timing}",
            role: "button",
            "aria-label": "{copy.caption}",
            onclick: move |_| props.onopen.call(()),

            div { class: "heart-pulse", style: "{pulse}",
                div { class: "heart-glow" }
                HeartIcon { size: HEART_SIZE, class: "heart-main".to_string() }
            }
            p { class: "heart-caption", "{copy.caption}" }
        }
    }
}
