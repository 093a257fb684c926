//! Fixed timestep simulation tick
//!
//! One tick advances the ball by `speed` pixels along its direction,
//! reflecting off the arena edges and the obstacle rectangles.

use glam::Vec2;

use super::collision::{self, Axis};
use super::rect::Rect;
use super::state::{Ball, Bounds, GameState};

/// Advance the ball by one tick against the given obstacles and bounds
///
/// Pure function of its inputs; returns `(next_position, next_direction)`.
///
/// All checks are evaluated against the same candidate position
/// `pos + dir * speed` and mutate one working direction in fixed order:
/// vertical bounds, horizontal bounds, then each obstacle. A later check on
/// the same axis overrides an earlier flip (negating twice restores the
/// component). The next position is recomputed once from the final
/// direction, so a thin obstacle can be tunneled through at high speed.
pub fn step(ball: &Ball, obstacles: &[Rect], bounds: Bounds) -> (Vec2, Vec2) {
    let candidate = ball.pos + ball.dir * ball.speed;
    let mut dir = ball.dir;

    if collision::hits_vertical_bound(candidate, bounds, ball.diameter) {
        dir = collision::flip_axis(dir, Axis::Y);
    }
    if collision::hits_horizontal_bound(candidate, bounds, ball.diameter) {
        dir = collision::flip_axis(dir, Axis::X);
    }

    for rect in obstacles {
        if rect.overlaps_square(candidate, ball.diameter) {
            // Side-vs-face classification uses the pre-move x position; the
            // candidate may already sit inside the rect's span on a corner hit.
            let axis = collision::classify_rect_hit(ball.pos.x, rect);
            dir = collision::flip_axis(dir, axis);
        }
    }

    (ball.pos + dir * ball.speed, dir)
}

/// Advance the whole game state by one fixed timestep
pub fn tick(state: &mut GameState) {
    state.time_ticks += 1;

    let obstacles = state.obstacles();
    let (pos, dir) = step(&state.ball, &obstacles, state.bounds);
    state.ball.pos = pos;
    state.ball.dir = dir;
}
