//! Floating heart particles.
//!
//! Each particle rises from below the viewport to above it on a fixed,
//! randomly parameterized path and replays that same path forever. The
//! whole field is generated once and never re-randomized.

use rand::Rng;

/// Number of floating hearts in the background
pub const PARTICLE_COUNT: usize = 30;

/// Start delay added per particle index (seconds)
pub const DELAY_STEP: f64 = 0.5;

/// Horizontal start range (vw)
pub const START_X_RANGE: std::ops::Range<f64> = 0.0..100.0;

/// Maximum horizontal drift either side of the start (vw)
pub const MAX_DRIFT: f64 = 10.0;

/// Heart size range (px)
pub const SIZE_RANGE: std::ops::Range<f64> = 10.0..30.0;

/// Duration of one rise (seconds)
pub const DURATION_RANGE: std::ops::Range<f64> = 10.0..20.0;

/// Vertical start, just below the viewport (vh)
pub const START_Y: f64 = 110.0;

/// Vertical end, just above the viewport (vh)
pub const END_Y: f64 = -10.0;

/// Rotation covered in one rise (degrees)
pub const FULL_TURN: f64 = 360.0;

/// Parameters of one floating heart
#[derive(Clone, Debug, PartialEq)]
pub struct ParticleSpec {
    /// Position in the field, also drives the start delay
    pub index: usize,
    /// Horizontal start (vw)
    pub start_x: f64,
    /// Horizontal position at the top of the path (vw)
    pub drift_x: f64,
    /// Glyph size (px)
    pub size: f64,
    /// Seconds per rise
    pub duration: f64,
    /// Seconds before the first rise
    pub delay: f64,
}

/// Where a particle is at a given instant
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ParticleFrame {
    /// Horizontal position (vw)
    pub x: f64,
    /// Vertical position (vh)
    pub y: f64,
    pub scale: f64,
    /// Degrees
    pub rotation: f64,
}

impl ParticleSpec {
    /// Draw a particle's parameters from `rng`
    pub fn random<R: Rng + ?Sized>(index: usize, rng: &mut R) -> Self {
        let start_x = rng.random_range(START_X_RANGE);
        let drift = rng.random_range(-MAX_DRIFT..MAX_DRIFT);
        Self {
            index,
            start_x,
            drift_x: start_x + drift,
            size: rng.random_range(SIZE_RANGE),
            duration: rng.random_range(DURATION_RANGE),
            delay: index as f64 * DELAY_STEP,
        }
    }

    /// Loop progress in [0, 1) at `elapsed` seconds since mount, or `None`
    /// while the particle is still waiting for its first rise
    pub fn progress_at(&self, elapsed: f64) -> Option<f64> {
        if elapsed < self.delay {
            return None;
        }
        Some((elapsed - self.delay).rem_euclid(self.duration) / self.duration)
    }

    /// Position, scale and rotation at `elapsed` seconds since mount
    pub fn frame_at(&self, elapsed: f64) -> Option<ParticleFrame> {
        self.progress_at(elapsed).map(|p| ParticleFrame {
            x: lerp(self.start_x, self.drift_x, p),
            y: lerp(START_Y, END_Y, p),
            scale: p,
            rotation: FULL_TURN * p,
        })
    }

    /// Inline style feeding the `float-up` keyframes
    pub fn style(&self) -> String {
        format!(
            "--start-x: {:.3}vw; --end-x: {:.3}vw; width: {size:.1}px; height: {size:.1}px; \
             animation-duration: {:.3}s; animation-delay: {:.1}s;",
            self.start_x,
            self.drift_x,
            self.duration,
            self.delay,
            size = self.size,
        )
    }
}

fn lerp(from: f64, to: f64, t: f64) -> f64 {
    from + (to - from) * t
}

/// The fixed set of floating hearts behind the card
#[derive(Clone, Debug, PartialEq)]
pub struct ParticleField {
    specs: Vec<ParticleSpec>,
}

impl ParticleField {
    /// Generate `count` particles from the thread RNG
    pub fn generate(count: usize) -> Self {
        Self::generate_with(&mut rand::rng(), count)
    }

    /// Generate `count` particles from `rng`
    pub fn generate_with<R: Rng + ?Sized>(rng: &mut R, count: usize) -> Self {
        let specs: Vec<ParticleSpec> = (0..count).map(|i| ParticleSpec::random(i, rng)).collect();
        tracing::debug!("Generated {} floating hearts", specs.len());
        Self { specs }
    }

    pub fn len(&self) -> usize {
        self.specs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.specs.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ParticleSpec> {
        self.specs.iter()
    }

    pub fn as_slice(&self) -> &[ParticleSpec] {
        &self.specs
    }

    /// Frames of every particle that has started rising
    pub fn frames_at(&self, elapsed: f64) -> Vec<(usize, ParticleFrame)> {
        self.specs
            .iter()
            .filter_map(|spec| spec.frame_at(elapsed).map(|frame| (spec.index, frame)))
            .collect()
    }
}

impl<'a> IntoIterator for &'a ParticleField {
    type Item = &'a ParticleSpec;
    type IntoIter = std::slice::Iter<'a, ParticleSpec>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn spec() -> ParticleSpec {
        ParticleSpec {
            index: 2,
            start_x: 40.0,
            drift_x: 45.0,
            size: 20.0,
            duration: 10.0,
            delay: 1.0,
        }
    }

    #[test]
    fn generates_requested_count() {
        let field = ParticleField::generate(PARTICLE_COUNT);
        assert_eq!(field.len(), 30);
        assert!(!field.is_empty());
    }

    #[test]
    fn delays_follow_index() {
        let field = ParticleField::generate(PARTICLE_COUNT);
        for (i, spec) in field.iter().enumerate() {
            assert_eq!(spec.index, i);
            assert_eq!(spec.delay, i as f64 * 0.5);
        }
    }

    #[test]
    fn seeded_generation_is_reproducible() {
        let a = ParticleField::generate_with(&mut StdRng::seed_from_u64(7), PARTICLE_COUNT);
        let b = ParticleField::generate_with(&mut StdRng::seed_from_u64(7), PARTICLE_COUNT);
        assert_eq!(a, b);
    }

    #[test]
    fn waits_for_delay() {
        assert!(spec().frame_at(0.5).is_none());
        assert_eq!(spec().progress_at(1.0), Some(0.0));
    }

    #[test]
    fn path_runs_bottom_to_top() {
        let start = spec().frame_at(1.0).unwrap();
        assert_eq!(start.y, START_Y);
        assert_eq!(start.x, 40.0);
        assert_eq!(start.scale, 0.0);

        let mid = spec().frame_at(6.0).unwrap();
        assert!((mid.y - 50.0).abs() < 1e-9);
        assert!((mid.x - 42.5).abs() < 1e-9);
        assert!((mid.rotation - 180.0).abs() < 1e-9);
    }

    #[test]
    fn path_replays_each_cycle() {
        let s = spec();
        let first = s.frame_at(3.5).unwrap();
        let third = s.frame_at(23.5).unwrap();
        assert!((first.y - third.y).abs() < 1e-9);
        assert!((first.x - third.x).abs() < 1e-9);
    }

    #[test]
    fn frames_skip_waiting_particles() {
        let field = ParticleField::generate(PARTICLE_COUNT);
        assert_eq!(field.frames_at(0.0).len(), 1);
        assert_eq!(field.frames_at(100.0).len(), PARTICLE_COUNT);
    }

    #[test]
    fn style_carries_timing() {
        let style = spec().style();
        assert!(style.contains("--start-x: 40.000vw"));
        assert!(style.contains("--end-x: 45.000vw"));
        assert!(style.contains("animation-duration: 10.000s"));
        assert!(style.contains("animation-delay: 1.0s"));
        assert!(style.contains("width: 20.0px"));
    }
}
