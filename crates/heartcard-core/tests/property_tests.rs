//! Property-based tests for the particle field and card transitions
//!
//! Uses proptest to verify generation bounds and state machine invariants.

use std::time::Duration;

use heartcard_core::particle::{DELAY_STEP, END_Y, MAX_DRIFT, START_Y};
use heartcard_core::{
    CardConfig, ClickTarget, GreetingCard, ParticleField, Timings, ViewState, PARTICLE_COUNT,
};
use proptest::prelude::*;
use rand::rngs::StdRng;
use rand::SeedableRng;

// ============================================================================
// Strategy Generators
// ============================================================================

/// Operations a user (or the clock) can perform on the card
#[derive(Debug, Clone)]
enum CardOp {
    Click(ClickTarget),
    Tick(u64), // milliseconds
}

fn card_ops_strategy(max_ops: usize) -> impl Strategy<Value = Vec<CardOp>> {
    prop::collection::vec(
        prop_oneof![
            1 => Just(CardOp::Click(ClickTarget::Heart)),
            1 => Just(CardOp::Click(ClickTarget::Close)),
            2 => (0..800u64).prop_map(CardOp::Tick),
        ],
        0..max_ops,
    )
}

// ============================================================================
// Property Tests
// ============================================================================

proptest! {
    /// Every generated particle stays within its parameter bounds
    #[test]
    fn particle_bounds(seed in any::<u64>()) {
        let field = ParticleField::generate_with(&mut StdRng::seed_from_u64(seed), PARTICLE_COUNT);
        prop_assert_eq!(field.len(), PARTICLE_COUNT);

        for (i, spec) in field.iter().enumerate() {
            prop_assert!((0.0..100.0).contains(&spec.start_x));
            prop_assert!((10.0..30.0).contains(&spec.size));
            prop_assert!((10.0..20.0).contains(&spec.duration));
            prop_assert_eq!(spec.delay, i as f64 * DELAY_STEP);
            prop_assert!((spec.drift_x - spec.start_x).abs() <= MAX_DRIFT + 1e-9);
        }
    }

    /// Particles never leave their vertical path
    #[test]
    fn particle_frames_stay_on_path(seed in any::<u64>(), elapsed in 0.0f64..500.0) {
        let field = ParticleField::generate_with(&mut StdRng::seed_from_u64(seed), PARTICLE_COUNT);
        for (_, frame) in field.frames_at(elapsed) {
            prop_assert!(frame.y <= START_Y && frame.y > END_Y);
            prop_assert!((0.0..1.0).contains(&frame.scale));
            prop_assert!((0.0..360.0).contains(&frame.rotation));
        }
    }

    /// Any sequence of clicks and ticks leaves the card on one face, and
    /// once settled the face matches the target
    #[test]
    fn card_always_shows_one_face(ops in card_ops_strategy(40)) {
        let mut card = GreetingCard::with_timings(
            &CardConfig { seed: Some(1), ..CardConfig::default() },
            Timings::default(),
        );

        for op in ops {
            match op {
                CardOp::Click(target) => { card.click(target); }
                CardOp::Tick(ms) => card.advance(Duration::from_millis(ms)),
            }
            let snapshot = card.snapshot();
            prop_assert!(matches!(snapshot.face, ViewState::Closed | ViewState::Open));
            prop_assert_eq!(snapshot.particle_count, PARTICLE_COUNT);
        }

        let target = card.presence().target();
        card.settle();
        prop_assert_eq!(card.snapshot().face, target);
    }

    /// Heart clicks only ever open, close clicks only ever close
    #[test]
    fn clicks_move_toward_their_face(ops in card_ops_strategy(40)) {
        let mut card = GreetingCard::new(&CardConfig::default());
        for op in ops {
            if let CardOp::Click(target) = op {
                let started = card.click(target);
                if started {
                    let expected = match target {
                        ClickTarget::Heart => ViewState::Open,
                        ClickTarget::Close => ViewState::Closed,
                    };
                    prop_assert_eq!(card.presence().target(), expected);
                }
            } else if let CardOp::Tick(ms) = op {
                card.advance(Duration::from_millis(ms));
            }
        }
    }
}
