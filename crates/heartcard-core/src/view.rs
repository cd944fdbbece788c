//! Card view state.
//!
//! The card shows exactly one face at a time. The only way between faces
//! is a click on the live control of the current face.

/// Which face of the card is shown
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default, Hash)]
pub enum ViewState {
    /// Idle pulsing heart with a caption
    #[default]
    Closed,
    /// Message card with a close button
    Open,
}

/// User input that can move the card between faces
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum CardEvent {
    /// Click on the heart icon
    OpenClicked,
    /// Click on the close button
    CloseClicked,
}

impl ViewState {
    /// Returns the state after `event`.
    ///
    /// Events that do not belong to the current face leave it unchanged.
    pub fn apply(self, event: CardEvent) -> ViewState {
        match (self, event) {
            (ViewState::Closed, CardEvent::OpenClicked) => ViewState::Open,
            (ViewState::Open, CardEvent::CloseClicked) => ViewState::Closed,
            (state, _) => state,
        }
    }

    /// Stable key of the face element, used to swap faces in the DOM
    pub fn key(&self) -> &'static str {
        match self {
            ViewState::Closed => "heart-button",
            ViewState::Open => "message-card",
        }
    }

    pub fn is_open(&self) -> bool {
        matches!(self, ViewState::Open)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_closed() {
        assert_eq!(ViewState::default(), ViewState::Closed);
    }

    #[test]
    fn open_and_close() {
        assert_eq!(ViewState::Closed.apply(CardEvent::OpenClicked), ViewState::Open);
        assert_eq!(ViewState::Open.apply(CardEvent::CloseClicked), ViewState::Closed);
    }

    #[test]
    fn foreign_events_are_noops() {
        assert_eq!(ViewState::Closed.apply(CardEvent::CloseClicked), ViewState::Closed);
        assert_eq!(ViewState::Open.apply(CardEvent::OpenClicked), ViewState::Open);
    }

    #[test]
    fn keys_differ() {
        assert_ne!(ViewState::Closed.key(), ViewState::Open.key());
        assert_eq!(ViewState::Open.key(), "message-card");
    }

    #[test]
    fn only_open_is_open() {
        assert!(ViewState::Open.is_open());
        assert!(!ViewState::Closed.is_open());
    }
}
