//! Root state of the greeting card.
//!
//! Owns the particle field (generated exactly once, at construction) and
//! the presence sequencer for the two faces.

use std::time::Duration;

use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::config::CardConfig;
use crate::particle::{ParticleField, PARTICLE_COUNT};
use crate::presence::{Phase, Presence, Timings};
use crate::view::{CardEvent, ViewState};

/// Clickable element on the card
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ClickTarget {
    /// The big heart on the closed face
    Heart,
    /// The close button on the open face
    Close,
}

impl ClickTarget {
    /// Face the target lives on
    pub fn face(&self) -> ViewState {
        match self {
            ClickTarget::Heart => ViewState::Closed,
            ClickTarget::Close => ViewState::Open,
        }
    }

    fn event(&self) -> CardEvent {
        match self {
            ClickTarget::Heart => CardEvent::OpenClicked,
            ClickTarget::Close => CardEvent::CloseClicked,
        }
    }
}

/// What a render would show right now
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SceneSnapshot {
    pub particle_count: usize,
    pub face: ViewState,
    pub phase: Phase,
}

#[derive(Clone, Debug)]
pub struct GreetingCard {
    particles: ParticleField,
    presence: Presence,
}

impl GreetingCard {
    pub fn new(config: &CardConfig) -> Self {
        Self::with_timings(config, Timings::default())
    }

    pub fn with_timings(config: &CardConfig, timings: Timings) -> Self {
        let particles = match config.seed {
            Some(seed) => {
                ParticleField::generate_with(&mut StdRng::seed_from_u64(seed), PARTICLE_COUNT)
            }
            None => ParticleField::generate(PARTICLE_COUNT),
        };
        Self {
            particles,
            presence: Presence::new(timings),
        }
    }

    pub fn particles(&self) -> &ParticleField {
        &self.particles
    }

    pub fn presence(&self) -> &Presence {
        &self.presence
    }

    /// Handle a click. Returns true if a transition started.
    ///
    /// Targets on a face that is not mounted cannot be clicked.
    pub fn click(&mut self, target: ClickTarget) -> bool {
        if target.face() != self.presence.mounted() {
            tracing::debug!(?target, "Click on unmounted face ignored");
            return false;
        }
        self.presence.dispatch(target.event())
    }

    pub fn advance(&mut self, dt: Duration) {
        self.presence.advance(dt);
    }

    /// Finish any running transition
    pub fn settle(&mut self) {
        self.presence.settle();
    }

    pub fn snapshot(&self) -> SceneSnapshot {
        SceneSnapshot {
            particle_count: self.particles.len(),
            face: self.presence.mounted(),
            phase: self.presence.phase(),
        }
    }
}
