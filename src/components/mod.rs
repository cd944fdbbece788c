//! UI Components for Heart Card.
//!
//! The floating-heart background and the two faces of the card.

mod face;
mod floating_hearts;
mod heart_button;
mod heart_icon;
mod message_card;

pub use floating_hearts::{FloatingHeart, FloatingHearts};
pub use heart_button::HeartButton;
pub use heart_icon::HeartIcon;
pub use message_card::MessageCard;
