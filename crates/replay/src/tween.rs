//! Time-based interpolation of a position.

use crate::scene::Vec3;
use std::time::Duration;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Easing {
    Linear,
    /// Fast start, decelerating into the target.
    #[default]
    QuadraticOut,
}

impl Easing {
    /// Maps linear progress `t` in 0..=1 to eased progress.
    pub fn apply(self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Easing::Linear => t,
            Easing::QuadraticOut => t * (2.0 - t),
        }
    }
}

/// A position travelling from `from` to `to` over `duration`.
#[derive(Debug, Clone)]
pub struct Tween {
    from: Vec3,
    to: Vec3,
    duration: Duration,
    elapsed: Duration,
    easing: Easing,
}

impl Tween {
    pub fn new(from: Vec3, to: Vec3, duration: Duration, easing: Easing) -> Self {
        Self { from, to, duration, elapsed: Duration::ZERO, easing }
    }

    /// Advances by `dt` and returns the new position and whether the target was reached.
    /// The final sample is exactly `to`.
    pub fn advance(&mut self, dt: Duration) -> (Vec3, bool) {
        self.elapsed = self.elapsed.saturating_add(dt);
        if self.is_finished() {
            return (self.to, true);
        }
        let t = self.elapsed.as_secs_f32() / self.duration.as_secs_f32();
        (self.from.lerp(self.to, self.easing.apply(t)), false)
    }

    pub fn is_finished(&self) -> bool {
        self.elapsed >= self.duration
    }

    pub fn target(&self) -> Vec3 {
        self.to
    }
}
