//! Game state and core simulation types
//!
//! Everything the simulation mutates lives in [`GameState`]; the stepper
//! itself is stateless. All state is serializable so a run can be saved and
//! resumed.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::rect::Rect;
use crate::consts::*;

/// The playable area, captured once at simulation start
///
/// Screen coordinates: origin top-left, y grows downward. The ball's
/// top-left position stays within `[0, width - diameter] x [0, height - diameter]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    pub width: f32,
    pub height: f32,
}

impl Bounds {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Center of the arena
    pub fn center(&self) -> Vec2 {
        Vec2::new(self.width / 2.0, self.height / 2.0)
    }
}

/// The ball's kinematic state
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ball {
    /// Logical top-left position; the authoritative input for the next tick,
    /// never the mid-interpolation rendered value
    pub pos: Vec2,
    /// Unit-length travel direction. Normalized once at construction;
    /// reflections only negate components, which preserves the length exactly.
    pub dir: Vec2,
    /// Distance traveled per tick, in pixels
    pub speed: f32,
    /// Side of the ball's square bounding box, in pixels
    pub diameter: f32,
}

impl Ball {
    /// Spawn at the arena center heading in `dir`
    pub fn new(bounds: Bounds, dir: Vec2) -> Self {
        Self {
            pos: bounds.center(),
            dir,
            speed: BALL_SPEED,
            diameter: BALL_DIAMETER,
        }
    }
}

/// The player's paddle, dragged horizontally by touch input
///
/// Gesture callbacks write the paddle directly between ticks; the tick loop
/// reads whatever position is current. Both run on the same logical thread,
/// so no synchronization is involved.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    pub rect: Rect,
    /// Paddle x at gesture start; `None` when no drag is active
    drag_origin: Option<f32>,
}

impl Player {
    /// Paddle spanning the middle half of the arena, near the bottom
    pub fn new(bounds: Bounds) -> Self {
        Self {
            rect: Rect::new(
                bounds.width / 4.0,
                bounds.height - PADDLE_BOTTOM_OFFSET,
                bounds.width / 2.0,
                PADDLE_HEIGHT,
            ),
            drag_origin: None,
        }
    }

    /// Record the drag origin at gesture start
    pub fn drag_begin(&mut self) {
        self.drag_origin = Some(self.rect.x);
    }

    /// Apply a drag translation relative to the gesture origin
    ///
    /// Unclamped: the paddle may leave the arena mid-drag and is only pulled
    /// back on release. No-op when no drag is active.
    pub fn drag_move(&mut self, dx: f32) {
        if let Some(origin) = self.drag_origin {
            self.rect.x = origin + dx;
        }
    }

    /// End the gesture and clamp the paddle back into the arena
    pub fn drag_end(&mut self, bounds: Bounds) {
        self.drag_origin = None;
        self.rect.x = self.rect.x.clamp(0.0, bounds.width - self.rect.w);
    }
}

/// Complete game state (deterministic, serializable)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    /// Run seed for reproducibility
    pub seed: u64,
    /// Arena bounds, queried once at start; resize is not tracked
    pub bounds: Bounds,
    pub ball: Ball,
    /// Fixed obstacle near the top of the arena
    pub island: Rect,
    /// User-controlled obstacle near the bottom
    pub player: Player,
    /// Interception score; nothing increments this yet
    pub score: u64,
    /// Simulation tick counter
    pub time_ticks: u64,
}

impl GameState {
    /// Create a new game with the given seed and arena bounds
    ///
    /// The initial direction is a normalized random vector with both
    /// components drawn from `[0, 1)`, so the serve always heads toward the
    /// lower-right. The zero-vector draw normalizing to NaN is zero-measure
    /// and not guarded.
    pub fn new(seed: u64, bounds: Bounds) -> Self {
        let mut rng = Pcg32::seed_from_u64(seed);
        let dir = Vec2::new(rng.random::<f32>(), rng.random::<f32>()).normalize();

        log::info!(
            "new game: seed {}, arena {}x{}",
            seed,
            bounds.width,
            bounds.height
        );

        Self {
            seed,
            bounds,
            ball: Ball::new(bounds, dir),
            island: Rect::new(ISLAND_X, ISLAND_Y, ISLAND_W, ISLAND_H),
            player: Player::new(bounds),
            score: 0,
            time_ticks: 0,
        }
    }

    /// Obstacles in collision-resolution order: island first, then player
    pub fn obstacles(&self) -> [Rect; 2] {
        [self.island, self.player.rect]
    }
}
