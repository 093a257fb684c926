//! Island Bounce - a minimal bouncing-ball arcade loop
//!
//! Core modules:
//! - `sim`: Deterministic simulation (ball kinematics, collisions, game state)
//! - `anim`: Presentation-side interpolation between simulation ticks

pub mod anim;
pub mod sim;

pub use anim::Tween;
pub use sim::{Ball, Bounds, GameState, Player, Rect};

/// Game configuration constants
pub mod consts {
    /// Fixed simulation tick rate
    pub const TICK_HZ: u32 = 60;
    /// Fixed simulation timestep in seconds
    pub const TICK_DT: f32 = 1.0 / TICK_HZ as f32;
    /// Maximum substeps per frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 4;

    /// Ball defaults
    pub const BALL_SPEED: f32 = 10.0; // pixels per tick
    pub const BALL_DIAMETER: f32 = 25.0;

    /// The fixed island obstacle near the top of the arena
    pub const ISLAND_X: f32 = 150.0;
    pub const ISLAND_Y: f32 = 11.0;
    pub const ISLAND_W: f32 = 127.0;
    pub const ISLAND_H: f32 = 37.0;

    /// Player paddle defaults - horizontal extent is derived from arena width at init
    pub const PADDLE_HEIGHT: f32 = 37.0;
    /// Distance of the paddle's top edge from the bottom of the arena
    pub const PADDLE_BOTTOM_OFFSET: f32 = 150.0;
}
