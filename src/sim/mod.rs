//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only
//! - Seeded RNG only (used once, for the initial ball direction)
//! - No rendering or platform dependencies
//!
//! The rendered ball position is a separate, independently-animated value
//! owned by the presentation layer; the simulation only ever reads its own
//! logical position.

pub mod collision;
pub mod rect;
pub mod state;
pub mod tick;

pub use collision::{Axis, flip_axis, hits_horizontal_bound, hits_vertical_bound};
pub use rect::Rect;
pub use state::{Ball, Bounds, GameState, Player};
pub use tick::{step, tick};
