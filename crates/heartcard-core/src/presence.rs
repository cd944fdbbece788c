//! Exit/enter sequencing between the two card faces.
//!
//! Works like a "wait" presence: the outgoing face finishes its exit
//! animation before the incoming face is mounted, so at most one face is
//! ever on screen. Clicks that arrive mid-transition are dropped.

use std::time::Duration;

use crate::easing::{Easing, Spring};
use crate::view::{CardEvent, ViewState};

/// Durations of each face's exit and enter animations
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Timings {
    pub closed_enter: Duration,
    pub closed_exit: Duration,
    pub open_enter: Duration,
    pub open_exit: Duration,
}

impl Default for Timings {
    fn default() -> Self {
        let spring = Easing::Spring(Spring::CARD_ENTRY)
            .natural_duration()
            .unwrap_or(1.0);
        Self {
            closed_enter: Duration::from_millis(500),
            closed_exit: Duration::from_millis(500),
            open_enter: Duration::from_secs_f64(spring),
            open_exit: Duration::from_millis(300),
        }
    }
}

impl Timings {
    /// No animation at all, every transition completes on the next tick
    pub fn instant() -> Self {
        Self {
            closed_enter: Duration::ZERO,
            closed_exit: Duration::ZERO,
            open_enter: Duration::ZERO,
            open_exit: Duration::ZERO,
        }
    }

    pub fn enter(&self, face: ViewState) -> Duration {
        match face {
            ViewState::Closed => self.closed_enter,
            ViewState::Open => self.open_enter,
        }
    }

    pub fn exit(&self, face: ViewState) -> Duration {
        match face {
            ViewState::Closed => self.closed_exit,
            ViewState::Open => self.open_exit,
        }
    }
}

/// Animation phase of the mounted face
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    /// Fully shown, accepting clicks
    Present,
    /// Animating in
    Entering,
    /// Animating out; the other face mounts afterwards
    Exiting,
}

impl Phase {
    /// CSS modifier class for the face element
    pub fn class(&self) -> &'static str {
        match self {
            Phase::Present => "is-present",
            Phase::Entering => "is-entering",
            Phase::Exiting => "is-exiting",
        }
    }
}

/// Tracks which face is mounted and how far its animation has run
#[derive(Clone, Debug, PartialEq)]
pub struct Presence {
    target: ViewState,
    mounted: ViewState,
    phase: Phase,
    remaining: Duration,
    timings: Timings,
    /// Set while the current phase belongs to a Closed/Open transition
    switching: bool,
    /// Bumped on every accepted click
    epoch: u64,
}

impl Presence {
    /// Start on the closed face, playing its enter animation
    pub fn new(timings: Timings) -> Self {
        Self {
            target: ViewState::Closed,
            mounted: ViewState::Closed,
            phase: Phase::Entering,
            remaining: timings.enter(ViewState::Closed),
            timings,
            switching: false,
            epoch: 0,
        }
    }

    /// The face currently in the tree
    pub fn mounted(&self) -> ViewState {
        self.mounted
    }

    /// The face the card is heading to
    pub fn target(&self) -> ViewState {
        self.target
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn timings(&self) -> &Timings {
        &self.timings
    }

    /// Time left in the current phase
    pub fn remaining(&self) -> Duration {
        self.remaining
    }

    /// True while exiting or entering
    pub fn in_flight(&self) -> bool {
        self.phase != Phase::Present
    }

    /// True while a Closed/Open transition runs. The mount entry of the
    /// first face does not count.
    pub fn switching(&self) -> bool {
        self.switching
    }

    /// Counter of accepted clicks; timers started before a click compare it
    /// to know they are stale
    pub fn epoch(&self) -> u64 {
        self.epoch
    }

    /// Apply a click. Returns true if it started a transition.
    ///
    /// Clicks are dropped only while a Closed/Open transition is running;
    /// the mount entry can be interrupted.
    pub fn dispatch(&mut self, event: CardEvent) -> bool {
        if self.switching {
            tracing::debug!(?event, phase = ?self.phase, "Ignoring click during transition");
            return false;
        }
        let next = self.mounted.apply(event);
        if next == self.mounted {
            return false;
        }

        tracing::debug!(from = ?self.mounted, to = ?next, "Card transition started");
        self.target = next;
        self.phase = Phase::Exiting;
        self.remaining = self.timings.exit(self.mounted);
        self.switching = true;
        self.epoch += 1;
        true
    }

    /// Let `dt` of animation time pass. A long `dt` may run through the
    /// exit and the enter phase in one call.
    pub fn advance(&mut self, dt: Duration) {
        let mut dt = dt;
        loop {
            match self.phase {
                Phase::Present => return,
                Phase::Exiting | Phase::Entering if dt < self.remaining => {
                    self.remaining -= dt;
                    return;
                }
                Phase::Exiting => {
                    dt -= self.remaining;
                    self.mounted = self.target;
                    self.phase = Phase::Entering;
                    self.remaining = self.timings.enter(self.mounted);
                }
                Phase::Entering => {
                    dt -= self.remaining;
                    self.phase = Phase::Present;
                    self.remaining = Duration::ZERO;
                    self.switching = false;
                    tracing::debug!(face = ?self.mounted, "Card face settled");
                }
            }
        }
    }

    /// Run any in-flight transition to completion
    pub fn settle(&mut self) {
        while self.in_flight() {
            let remaining = self.remaining;
            self.advance(remaining);
        }
    }
}

impl Default for Presence {
    fn default() -> Self {
        Self::new(Timings::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn settled() -> Presence {
        let mut p = Presence::default();
        p.settle();
        p
    }

    #[test]
    fn starts_closed_and_entering() {
        let p = Presence::default();
        assert_eq!(p.mounted(), ViewState::Closed);
        assert_eq!(p.phase(), Phase::Entering);
    }

    #[test]
    fn click_during_mount_entry_opens() {
        let mut p = Presence::default();
        p.advance(Duration::from_millis(200));
        assert!(!p.switching());

        assert!(p.dispatch(CardEvent::OpenClicked));
        assert_eq!(p.phase(), Phase::Exiting);
        assert_eq!(p.epoch(), 1);
        p.settle();
        assert_eq!(p.mounted(), ViewState::Open);
        assert!(!p.switching());
    }

    #[test]
    fn entering_after_exit_still_ignores_clicks() {
        let mut p = settled();
        p.dispatch(CardEvent::OpenClicked);
        p.advance(Duration::from_millis(500));
        assert_eq!(p.phase(), Phase::Entering);
        assert!(!p.dispatch(CardEvent::CloseClicked));
        assert_eq!(p.epoch(), 1);
    }

    #[test]
    fn open_waits_for_exit() {
        let mut p = settled();
        assert!(p.dispatch(CardEvent::OpenClicked));
        assert_eq!(p.phase(), Phase::Exiting);
        assert_eq!(p.mounted(), ViewState::Closed);
        assert_eq!(p.target(), ViewState::Open);

        p.advance(Duration::from_millis(499));
        assert_eq!(p.mounted(), ViewState::Closed);

        p.advance(Duration::from_millis(1));
        assert_eq!(p.mounted(), ViewState::Open);
        assert_eq!(p.phase(), Phase::Entering);
    }

    #[test]
    fn advance_spans_phases() {
        let mut p = settled();
        p.dispatch(CardEvent::OpenClicked);
        p.advance(Duration::from_secs(5));
        assert_eq!(p.mounted(), ViewState::Open);
        assert_eq!(p.phase(), Phase::Present);
    }

    #[test]
    fn clicks_in_flight_are_ignored() {
        let mut p = settled();
        assert!(p.dispatch(CardEvent::OpenClicked));
        assert!(!p.dispatch(CardEvent::OpenClicked));
        assert!(!p.dispatch(CardEvent::CloseClicked));
        p.settle();
        assert_eq!(p.mounted(), ViewState::Open);
    }

    #[test]
    fn foreign_click_does_not_start_transition() {
        let mut p = settled();
        assert!(!p.dispatch(CardEvent::CloseClicked));
        assert_eq!(p.phase(), Phase::Present);
    }

    #[test]
    fn instant_timings_settle_on_zero_advance() {
        let mut p = Presence::new(Timings::instant());
        p.advance(Duration::ZERO);
        assert_eq!(p.phase(), Phase::Present);
        p.dispatch(CardEvent::OpenClicked);
        p.advance(Duration::ZERO);
        assert_eq!(p.mounted(), ViewState::Open);
        assert_eq!(p.phase(), Phase::Present);
    }

    #[test]
    fn open_enter_uses_spring_settle_time() {
        let t = Timings::default();
        assert!(t.open_enter > Duration::from_millis(500));
        assert!(t.open_enter < Duration::from_millis(1200));
    }
}
