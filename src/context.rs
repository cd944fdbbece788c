//! Card context provider for Heart Card.
//!
//! Provides the card copy to all components via use_context, and runs the
//! timers that carry the card through its transitions.
//!
//! ## Usage
//!
//! ```ignore
//! // In App component
//! use_context_provider(|| config.copy.clone());
//!
//! // In child components
//! let copy = use_card_copy();
//! ```

use dioxus::prelude::*;
use heartcard_core::{CardConfig, CardCopy, ClickTarget, GreetingCard};

/// Get the card config resolved at startup.
pub fn get_card_config() -> CardConfig {
    crate::get_card_config()
}

/// Hook to access the card text from context.
pub fn use_card_copy() -> CardCopy {
    use_context::<CardCopy>()
}

/// Click a card control and, if that starts a transition, run it.
pub fn click_card(mut card: Signal<GreetingCard>, target: ClickTarget) {
    if card.write().click(target) {
        tracing::info!(?target, "Card clicked");
        drive_transition(card);
    }
}

/// Advance the card through its exit and enter phases in real time.
///
/// Each phase sleeps for exactly its remaining duration, so the CSS
/// animations on screen and the mounted face stay in step. A click that
/// interrupts the mount entry starts a new driver; the old one sees the
/// epoch change and stops without advancing.
pub fn drive_transition(mut card: Signal<GreetingCard>) {
    let epoch = card.peek().presence().epoch();
    spawn(async move {
        loop {
            let remaining = {
                let card = card.peek();
                let presence = card.presence();
                if !presence.in_flight() || presence.epoch() != epoch {
                    break;
                }
                presence.remaining()
            };
            tokio::time::sleep(remaining).await;
            if card.peek().presence().epoch() != epoch {
                break;
            }
            card.write().advance(remaining);
        }
    });
}
