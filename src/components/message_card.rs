//! Open Face Component
//!
//! The message card. It springs in, then reveals its badge, heading, body
//! and close button one after another.

use std::time::Duration;

use dioxus::prelude::*;
use heartcard_core::{Easing, Phase, Spring, ViewState};

use super::face::{face_class, face_timing_style};
use super::HeartIcon;
use crate::context::use_card_copy;

/// Reveal delays after the card starts entering (seconds)
const BADGE_DELAY: f64 = 0.3;
const HEADING_DELAY: f64 = 0.5;
const BODY_DELAY: f64 = 0.8;
const CLOSE_DELAY: f64 = 1.5;

/// Inline timing for a child that reveals `delay` seconds in
fn reveal_style(delay: f64) -> String {
    format!("animation-delay: {delay}s;")
}

/// Spring easing and duration custom properties for `spring`
fn spring_style(prefix: &str, spring: Spring) -> String {
    let easing = Easing::Spring(spring);
    format!(
        "--{prefix}-easing: {}; --{prefix}-duration: {:.3}s;",
        easing.css(),
        spring.settle_time()
    )
}

/// Properties for the MessageCard component
#[derive(Clone, PartialEq, Props)]
pub struct MessageCardProps {
    pub phase: Phase,
    pub enter: Duration,
    pub exit: Duration,
    /// Fired when the close button is clicked
    pub onclose: EventHandler<()>,
}

/// Open face of the card
#[component]
pub fn MessageCard(props: MessageCardProps) -> Element {
    let copy = use_card_copy();
    let class = face_class(ViewState::Open.key(), props.phase);

    // Spring curves are sampled once per mount
    let springs = use_hook(|| {
        format!(
            "{} {}",
            spring_style("card", Spring::CARD_ENTRY),
            spring_style("badge", Spring::BADGE_POP)
        )
    });
    let style = format!("{} {}", face_timing_style(props.enter, props.exit), springs);

    let last_line = copy.heading.len().saturating_sub(1);
    let badge_reveal = reveal_style(BADGE_DELAY);
    let heading_reveal = reveal_style(HEADING_DELAY);
    let body_reveal = reveal_style(BODY_DELAY);
    let close_reveal = reveal_style(CLOSE_DELAY);

    rsx! {
        div { class: "{class}", style: "{style}",
            div { class: "message-panel",
                div { class: "panel-corner top-left" }
                div { class: "panel-corner bottom-right" }

                div { class: "message-badge", style: "{badge_reveal}",
                    HeartIcon { size: 40.0 }
                }

                h1 { class: "message-heading reveal-rise", style: "{heading_reveal}",
                    for (i, line) in copy.heading.iter().enumerate() {
                        "{line}"
                        if i < last_line {
                            br {}
                        }
                    }
                }

                div { class: "message-body reveal-fade", style: "{body_reveal}",
                    for paragraph in copy.body.iter() {
                        p { "{paragraph}" }
                    }
                }

                button {
                    class: "message-close reveal-rise",
                    style: "{close_reveal}",
                    r#type: "button",
                    onclick: move |_| props.onclose.call(()),
                    "{copy.close_label}"
                }
            }
        }
    }
}
