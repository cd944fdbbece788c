//! Easing curves for the card animations.
//!
//! The ambient particles move linearly, the heart pulse uses ease-in-out
//! and the message card arrives on a damped spring. CSS has no spring
//! timing function, so the spring is sampled into a piecewise `linear()`
//! easing.

use std::fmt::Write;

/// Remaining displacement below which a spring counts as settled
const SETTLE_EPSILON: f64 = 0.001;

/// Simulation step used to find the settle time (seconds)
const SETTLE_STEP: f64 = 0.001;

/// Springs that have not settled after this long are cut off (seconds)
const MAX_SETTLE_TIME: f64 = 10.0;

/// Number of stops emitted for a spring `linear()` easing
const SPRING_CSS_STOPS: usize = 48;

/// A damped harmonic oscillator pulled from 0 toward 1
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct Spring {
    pub stiffness: f64,
    pub damping: f64,
    pub mass: f64,
}

impl Spring {
    /// Message card arrival: slightly underdamped, one soft overshoot
    pub const CARD_ENTRY: Spring = Spring {
        stiffness: 100.0,
        damping: 15.0,
        mass: 1.0,
    };

    /// Small heart inside the card: default spring of the original motion
    /// library (stiffness 100, damping 10)
    pub const BADGE_POP: Spring = Spring {
        stiffness: 100.0,
        damping: 10.0,
        mass: 1.0,
    };

    /// Undamped angular frequency
    fn omega(&self) -> f64 {
        (self.stiffness / self.mass).sqrt()
    }

    /// Damping ratio: < 1 oscillates, 1 is critical, > 1 creeps
    pub fn damping_ratio(&self) -> f64 {
        self.damping / (2.0 * (self.stiffness * self.mass).sqrt())
    }

    /// Displacement at `t` seconds, starting at rest from 0
    pub fn position(&self, t: f64) -> f64 {
        if t <= 0.0 {
            return 0.0;
        }
        let w0 = self.omega();
        let zeta = self.damping_ratio();

        if zeta < 1.0 {
            let wd = w0 * (1.0 - zeta * zeta).sqrt();
            let envelope = (-zeta * w0 * t).exp();
            1.0 - envelope * ((wd * t).cos() + (zeta * w0 / wd) * (wd * t).sin())
        } else if (zeta - 1.0).abs() < f64::EPSILON {
            1.0 - (-w0 * t).exp() * (1.0 + w0 * t)
        } else {
            let root = (zeta * zeta - 1.0).sqrt();
            let r1 = -w0 * (zeta - root);
            let r2 = -w0 * (zeta + root);
            1.0 - (r2 * (r1 * t).exp() - r1 * (r2 * t).exp()) / (r2 - r1)
        }
    }

    /// Seconds until the spring stays within 0.1% of its target
    pub fn settle_time(&self) -> f64 {
        let mut last_outside = 0.0;
        let mut t = 0.0;
        while t < MAX_SETTLE_TIME {
            if (1.0 - self.position(t)).abs() > SETTLE_EPSILON {
                last_outside = t;
            }
            t += SETTLE_STEP;
        }
        last_outside + SETTLE_STEP
    }
}

/// Timing function applied over an animation's progress
#[derive(Clone, Copy, PartialEq, Debug)]
pub enum Easing {
    Linear,
    /// cubic-bezier(0.42, 0, 0.58, 1)
    EaseInOut,
    Spring(Spring),
}

impl Easing {
    /// Eased progress for linear progress `t` in [0, 1].
    ///
    /// Springs run over their settle time and may exceed 1 mid-flight.
    pub fn sample(&self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Easing::Linear => t,
            Easing::EaseInOut => cubic_bezier(0.42, 0.0, 0.58, 1.0, t),
            Easing::Spring(spring) => {
                if t >= 1.0 {
                    1.0
                } else {
                    spring.position(t * spring.settle_time())
                }
            }
        }
    }

    /// Natural duration of the curve in seconds, if it dictates one
    pub fn natural_duration(&self) -> Option<f64> {
        match self {
            Easing::Spring(spring) => Some(spring.settle_time()),
            _ => None,
        }
    }

    /// CSS `animation-timing-function` value
    pub fn css(&self) -> String {
        match self {
            Easing::Linear => "linear".to_string(),
            Easing::EaseInOut => "ease-in-out".to_string(),
            Easing::Spring(_) => {
                let mut out = String::from("linear(");
                for i in 0..=SPRING_CSS_STOPS {
                    if i > 0 {
                        out.push_str(", ");
                    }
                    let t = i as f64 / SPRING_CSS_STOPS as f64;
                    let _ = write!(out, "{:.4}", self.sample(t));
                }
                out.push(')');
                out
            }
        }
    }
}

/// Evaluate a CSS cubic-bezier easing at progress `x`
fn cubic_bezier(x1: f64, y1: f64, x2: f64, y2: f64, x: f64) -> f64 {
    let bezier = |a: f64, b: f64, s: f64| {
        let inv = 1.0 - s;
        3.0 * inv * inv * s * a + 3.0 * inv * s * s * b + s * s * s
    };

    // x(s) is monotonic on [0, 1] for valid CSS curves
    let (mut lo, mut hi) = (0.0, 1.0);
    for _ in 0..40 {
        let mid = (lo + hi) / 2.0;
        if bezier(x1, x2, mid) < x {
            lo = mid;
        } else {
            hi = mid;
        }
    }
    bezier(y1, y2, (lo + hi) / 2.0)
}
