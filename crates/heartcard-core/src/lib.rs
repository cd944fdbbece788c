//! Heart Card Core Library
//!
//! View state, floating-heart particles and animation timing for the
//! animated greeting card.
//!
//! ## Overview
//!
//! The card has two faces: a pulsing heart (closed) and a message card
//! (open). A field of floating hearts drifts upward behind both faces.
//! Everything here is renderer-agnostic; the desktop binary maps it onto
//! Dioxus components and CSS keyframes.
//!
//! ## Quick Start
//!
//! ```
//! use heartcard_core::{CardConfig, ClickTarget, GreetingCard, ViewState};
//!
//! let mut card = GreetingCard::new(&CardConfig::default());
//! card.settle();
//! assert_eq!(card.snapshot().face, ViewState::Closed);
//!
//! card.click(ClickTarget::Heart);
//! card.settle();
//! assert_eq!(card.snapshot().face, ViewState::Open);
//! ```

pub mod card;
pub mod config;
pub mod easing;
pub mod error;
pub mod particle;
pub mod presence;
pub mod view;

// Re-exports
pub use card::{ClickTarget, GreetingCard, SceneSnapshot};
pub use config::{CardConfig, CardCopy, WindowConfig};
pub use easing::{Easing, Spring};
pub use error::{CardError, Result};
pub use particle::{ParticleField, ParticleFrame, ParticleSpec, PARTICLE_COUNT};
pub use presence::{Phase, Presence, Timings};
pub use view::{CardEvent, ViewState};
