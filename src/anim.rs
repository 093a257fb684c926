//! Presentation-side interpolation between simulation ticks
//!
//! The simulation advances in discrete 60 Hz steps; the visible ball is a
//! separate value that is retargeted to the new logical position every tick
//! and slides toward it linearly over the tick interval. Sampled values are
//! cosmetic and must never feed back into the simulation.

use glam::Vec2;

/// A linear tween toward a target over a fixed duration
#[derive(Debug, Clone, Copy)]
pub struct Tween {
    from: Vec2,
    to: Vec2,
    duration: f32,
    elapsed: f32,
}

impl Tween {
    /// Start at rest on `value`
    pub fn new(value: Vec2) -> Self {
        Self {
            from: value,
            to: value,
            duration: 0.0,
            elapsed: 0.0,
        }
    }

    /// Aim at a new target over `duration` seconds
    ///
    /// Starts from the currently rendered value, so retargeting mid-flight
    /// does not snap.
    pub fn retarget(&mut self, target: Vec2, duration: f32) {
        self.from = self.value();
        self.to = target;
        self.duration = duration;
        self.elapsed = 0.0;
    }

    /// Advance the tween clock by `dt` seconds
    pub fn advance(&mut self, dt: f32) {
        self.elapsed = (self.elapsed + dt).min(self.duration);
    }

    /// The currently rendered value
    pub fn value(&self) -> Vec2 {
        if self.duration <= 0.0 || self.elapsed >= self.duration {
            return self.to;
        }
        self.from.lerp(self.to, self.elapsed / self.duration)
    }

    /// The logical target the tween is heading toward
    pub fn target(&self) -> Vec2 {
        self.to
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reaches_target_at_duration() {
        let mut tween = Tween::new(Vec2::ZERO);
        tween.retarget(Vec2::new(10.0, 0.0), 1.0);

        tween.advance(0.5);
        assert_eq!(tween.value(), Vec2::new(5.0, 0.0));

        tween.advance(0.5);
        assert_eq!(tween.value(), Vec2::new(10.0, 0.0));
    }

    #[test]
    fn test_advance_clamps_past_duration() {
        let mut tween = Tween::new(Vec2::ZERO);
        tween.retarget(Vec2::new(4.0, 4.0), 0.1);
        tween.advance(10.0);
        assert_eq!(tween.value(), Vec2::new(4.0, 4.0));
    }

    #[test]
    fn test_retarget_continues_from_rendered_value() {
        let mut tween = Tween::new(Vec2::ZERO);
        tween.retarget(Vec2::new(10.0, 0.0), 1.0);
        tween.advance(0.5);

        // Retarget mid-flight: the new segment starts at (5, 0), not at the
        // old target
        tween.retarget(Vec2::new(5.0, 10.0), 1.0);
        assert_eq!(tween.value(), Vec2::new(5.0, 0.0));

        tween.advance(1.0);
        assert_eq!(tween.value(), Vec2::new(5.0, 10.0));
    }

    #[test]
    fn test_zero_duration_snaps() {
        let mut tween = Tween::new(Vec2::ZERO);
        tween.retarget(Vec2::new(1.0, 2.0), 0.0);
        assert_eq!(tween.value(), Vec2::new(1.0, 2.0));
    }
}
