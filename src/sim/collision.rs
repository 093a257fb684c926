//! Collision detection and bounce resolution
//!
//! All collisions are discrete per-tick AABB overlap tests resolved by
//! negating one velocity component. There is no continuous collision
//! detection; a ball fast enough to cross a thin obstacle in one tick
//! tunnels through it.

use glam::Vec2;

use super::rect::Rect;
use super::state::Bounds;

/// Which velocity component a collision negates
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    X,
    Y,
}

/// Negate one component of a direction vector
///
/// Reflection by sign flip is exact, so a unit direction stays unit-length
/// without renormalization.
#[inline]
pub fn flip_axis(dir: Vec2, axis: Axis) -> Vec2 {
    match axis {
        Axis::X => Vec2::new(-dir.x, dir.y),
        Axis::Y => Vec2::new(dir.x, -dir.y),
    }
}

/// Would the candidate position cross the top or bottom arena edge?
#[inline]
pub fn hits_vertical_bound(candidate: Vec2, bounds: Bounds, diameter: f32) -> bool {
    candidate.y < 0.0 || candidate.y > bounds.height - diameter
}

/// Would the candidate position cross the left or right arena edge?
#[inline]
pub fn hits_horizontal_bound(candidate: Vec2, bounds: Bounds, diameter: f32) -> bool {
    candidate.x < 0.0 || candidate.x > bounds.width - diameter
}

/// Classify which face of `rect` the ball struck
///
/// Uses the ball's pre-move x position: the candidate may already be inside
/// the rect's horizontal span on a corner hit, so post-move coordinates would
/// misclassify the side. A pre-move x outside the span means a side hit.
pub fn classify_rect_hit(current_x: f32, rect: &Rect) -> Axis {
    if rect.spans_x(current_x) {
        Axis::Y
    } else {
        Axis::X
    }
}
