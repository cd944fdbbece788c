use dioxus::prelude::*;
use heartcard_core::{ClickTarget, GreetingCard, ViewState};

use crate::components::{FloatingHearts, HeartButton, MessageCard};
use crate::context::{click_card, drive_transition, get_card_config};
use crate::theme::GLOBAL_STYLES;

/// Root application component.
///
/// Provides global styles and the card copy context, renders the floating hearts
/// behind whichever face of the card is mounted.
#[component]
pub fn App() -> Element {
    let config = use_hook(get_card_config);

    // Particles are generated here, once per mount
    let card: Signal<GreetingCard> = use_signal(|| GreetingCard::new(&config));
    let particles = use_hook(|| card.peek().particles().clone());

    use_context_provider(|| config.copy.clone());

    // Play the closed face's mount animation
    use_effect(move || drive_transition(card));

    let snapshot = card.read().snapshot();
    let timings = *card.read().presence().timings();

    let closed_key = ViewState::Closed.key();
    let open_key = ViewState::Open.key();

    let face = match snapshot.face {
        ViewState::Closed => rsx! {
            HeartButton {
                key: "{closed_key}",
                phase: snapshot.phase,
                enter: timings.closed_enter,
                exit: timings.closed_exit,
                onopen: move |_| click_card(card, ClickTarget::Heart),
            }
        },
        ViewState::Open => rsx! {
            MessageCard {
                key: "{open_key}",
                phase: snapshot.phase,
                enter: timings.open_enter,
                exit: timings.open_exit,
                onclose: move |_| click_card(card, ClickTarget::Close),
            }
        },
    };

    rsx! {
        style { {GLOBAL_STYLES} }
        main { class: "card-scene",
            FloatingHearts { field: particles }
            {face}
        }
    }
}
