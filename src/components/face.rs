//! Shared helpers for the two card faces.

use std::time::Duration;

use heartcard_core::Phase;

/// CSS classes for a face element in `phase`
pub fn face_class(base: &str, phase: Phase) -> String {
    format!("card-face {} {}", base, phase.class())
}

/// Inline custom properties read by the face enter/exit keyframes
pub fn face_timing_style(enter: Duration, exit: Duration) -> String {
    format!(
        "--enter-duration: {:.3}s; --exit-duration: {:.3}s;",
        enter.as_secs_f64(),
        exit.as_secs_f64()
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn class_includes_phase() {
        assert_eq!(
            face_class("heart-button", Phase::Exiting),
            "card-face heart-button is-exiting"
        );
    }

    #[test]
    fn timing_style_in_seconds() {
        let style = face_timing_style(Duration::from_millis(500), Duration::from_millis(300));
        assert_eq!(style, "--enter-duration: 0.500s; --exit-duration: 0.300s;");
    }
}
