//! Global CSS styles for Heart Card.
//!
//! Rose gradient backdrop, floating hearts and the two card faces. Face
//! timings arrive as inline custom properties so the stylesheet and the
//! presence sequencer agree on durations.

pub const GLOBAL_STYLES: &str = r#"
/* === CSS Custom Properties === */
:root {
  /* BACKGROUND GRADIENT */
  --rose-100: #ffe4e6;
  --pink-50: #fdf2f8;
  --red-100: #fee2e2;

  /* HEARTS */
  --red-400: #f87171;
  --red-500: #ef4444;
  --pink-400: #f472b6;

  /* CARD */
  --rose-300: #fda4af;
  --rose-500: #f43f5e;
  --rose-600: #e11d48;
  --gray-700: #374151;

  /* Typography */
  --font-serif: 'Playfair Display', Georgia, serif;
  --font-script: 'Dancing Script', 'Brush Script MT', cursive;

  /* Transitions */
  --transition-fast: 300ms ease;
  --transition-slow: 500ms ease;
}

/* === Global Reset === */
*, *::before, *::after {
  box-sizing: border-box;
  margin: 0;
  padding: 0;
}

html, body {
  height: 100%;
  overflow: hidden;
  -webkit-font-smoothing: antialiased;
}

/* === Scene === */
.card-scene {
  position: relative;
  min-height: 100vh;
  display: flex;
  align-items: center;
  justify-content: center;
  overflow: hidden;
  font-family: var(--font-serif);
  background: linear-gradient(to bottom right, var(--rose-100), var(--pink-50), var(--red-100));
}

/* === Floating Hearts === */
.floating-hearts {
  position: absolute;
  inset: 0;
  pointer-events: none;
}

.floating-heart {
  position: absolute;
  top: 0;
  left: 0;
  color: var(--pink-400);
  opacity: 0.3;
  pointer-events: none;
  transform: translate(var(--start-x), 110vh) scale(0);
  animation-name: float-up;
  animation-timing-function: linear;
  animation-iteration-count: infinite;
  animation-fill-mode: both;
}

@keyframes float-up {
  from { transform: translate(var(--start-x), 110vh) scale(0) rotate(0deg); }
  to { transform: translate(var(--end-x), -10vh) scale(1) rotate(360deg); }
}

/* === Card Faces === */
.card-face {
  position: relative;
  z-index: 10;
}

.card-face.is-exiting {
  pointer-events: none;
}

/* === Closed Face: Heart Button === */
.heart-button {
  display: flex;
  flex-direction: column;
  align-items: center;
  cursor: pointer;
}

.heart-button.is-entering {
  animation: heart-enter var(--enter-duration) ease both;
}

.heart-button.is-exiting {
  animation: heart-exit var(--exit-duration) ease both;
}

@keyframes heart-enter {
  from { transform: scale(0); }
  to { transform: scale(1); }
}

@keyframes heart-exit {
  from { transform: scale(1); opacity: 1; filter: blur(0); }
  to { transform: scale(0); opacity: 0; filter: blur(10px); }
}

.heart-pulse {
  position: relative;
  animation-name: heart-pulse;
  animation-iteration-count: infinite;
}

@keyframes heart-pulse {
  0%, 100% { transform: scale(1); }
  50% { transform: scale(1.1); }
}

.heart-glow {
  position: absolute;
  inset: 0;
  border-radius: 50%;
  background: var(--red-400);
  filter: blur(64px);
  opacity: 0.4;
  transition: opacity var(--transition-slow);
}

.heart-button:hover .heart-glow {
  opacity: 0.6;
}

.heart-main {
  position: relative;
  z-index: 1;
  color: var(--red-500);
  filter: drop-shadow(0 25px 25px rgba(0, 0, 0, 0.15));
  transition: transform var(--transition-fast);
}

.heart-button:hover .heart-main {
  transform: scale(1.1);
}

.heart-caption {
  margin-top: 2rem;
  text-align: center;
  font-family: var(--font-script);
  font-size: 1.875rem;
  letter-spacing: 0.05em;
  color: var(--rose-600);
  text-shadow: 0 1px 2px rgba(0, 0, 0, 0.05);
  animation: rise-in 0.3s ease 0.5s both;
}

/* === Open Face: Message Card === */
.message-card {
  width: 100%;
  max-width: 28rem;
  margin: 0 1rem;
}

.message-card.is-entering {
  animation: card-enter var(--card-duration) var(--card-easing) both;
}

.message-card.is-exiting {
  animation: card-exit var(--exit-duration) ease both;
}

@keyframes card-enter {
  from { transform: translateY(50px) scale(0.8); opacity: 0; }
  to { transform: translateY(0) scale(1); opacity: 1; }
}

@keyframes card-exit {
  from { transform: scale(1); opacity: 1; }
  to { transform: scale(0.9); opacity: 0; }
}

.message-panel {
  position: relative;
  overflow: hidden;
  padding: 2.5rem;
  text-align: center;
  border-radius: 1.5rem;
  border: 1px solid rgba(255, 255, 255, 0.5);
  background: rgba(255, 255, 255, 0.8);
  backdrop-filter: blur(12px);
  box-shadow: 0 25px 50px -12px rgba(0, 0, 0, 0.25);
}

.panel-corner {
  position: absolute;
  width: 4rem;
  height: 4rem;
  margin: 1rem;
  opacity: 0.5;
  border-color: var(--rose-300);
  border-style: solid;
  border-width: 0;
}

.panel-corner.top-left {
  top: 0;
  left: 0;
  border-top-width: 4px;
  border-left-width: 4px;
  border-top-left-radius: 1.5rem;
}

.panel-corner.bottom-right {
  bottom: 0;
  right: 0;
  border-bottom-width: 4px;
  border-right-width: 4px;
  border-bottom-right-radius: 1.5rem;
}

.message-badge {
  width: 5rem;
  height: 5rem;
  margin: 0 auto 1.5rem;
  display: flex;
  align-items: center;
  justify-content: center;
  border-radius: 50%;
  color: var(--rose-500);
  background: var(--rose-100);
  box-shadow: inset 0 2px 4px rgba(0, 0, 0, 0.05);
  animation: badge-pop var(--badge-duration) var(--badge-easing) both;
}

@keyframes badge-pop {
  from { transform: scale(0); }
  to { transform: scale(1); }
}

.message-heading {
  margin-bottom: 1.5rem;
  font-family: var(--font-script);
  font-size: 2.5rem;
  font-weight: 400;
  line-height: 1.25;
  color: var(--rose-600);
}

.message-body {
  color: var(--gray-700);
  font-size: 1.125rem;
  line-height: 1.625;
}

.message-body p + p {
  margin-top: 1rem;
}

.message-close {
  margin-top: 2.5rem;
  padding: 0.75rem 2rem;
  border: none;
  border-radius: 9999px;
  font: inherit;
  font-weight: 500;
  color: white;
  background: var(--rose-500);
  box-shadow: 0 10px 15px -3px rgba(244, 63, 94, 0.3);
  cursor: pointer;
  transition: background-color var(--transition-fast);
}

.message-close:hover {
  background: var(--rose-600);
}

/* === Staggered Reveals === */
.reveal-rise {
  animation: rise-in 0.3s ease both;
}

.reveal-fade {
  animation: fade-in 0.3s ease both;
}

@keyframes rise-in {
  from { opacity: 0; transform: translateY(10px); }
  to { opacity: 1; transform: translateY(0); }
}

@keyframes fade-in {
  from { opacity: 0; }
  to { opacity: 1; }
}
"#;

#[cfg(test)]
mod tests {
    use super::GLOBAL_STYLES;

    #[test]
    fn declares_every_animation() {
        for name in [
            "float-up",
            "heart-enter",
            "heart-exit",
            "heart-pulse",
            "card-enter",
            "card-exit",
            "badge-pop",
            "rise-in",
            "fade-in",
        ] {
            assert!(
                GLOBAL_STYLES.contains(&format!("@keyframes {name} ")),
                "missing keyframes {name}"
            );
        }
    }

    #[test]
    fn phase_classes_are_styled() {
        for class in [".is-entering", ".is-exiting"] {
            assert!(GLOBAL_STYLES.contains(class), "missing {class}");
        }
    }
}
