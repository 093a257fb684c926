//! Axis-aligned rectangle geometry for the island and player paddle
//!
//! All positions use screen coordinates: origin top-left, y grows downward.
//! `(x, y)` is the top-left corner; `w` and `h` are positive extents.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// An axis-aligned rectangle obstacle
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

impl Rect {
    pub fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self { x, y, w, h }
    }

    /// x coordinate of the right edge
    #[inline]
    pub fn right(&self) -> f32 {
        self.x + self.w
    }

    /// y coordinate of the bottom edge
    #[inline]
    pub fn bottom(&self) -> f32 {
        self.y + self.h
    }

    /// Strict AABB overlap against a square of side `size` with top-left `pos`
    ///
    /// Edge contact does not count as overlap; all four separating-axis
    /// comparisons are strict.
    pub fn overlaps_square(&self, pos: Vec2, size: f32) -> bool {
        pos.x < self.right()
            && pos.x + size > self.x
            && pos.y < self.bottom()
            && pos.y + size > self.y
    }

    /// Whether `x` lies within the rectangle's horizontal span (inclusive)
    ///
    /// Used to decide between a side hit and a top/bottom hit.
    pub fn spans_x(&self, x: f32) -> bool {
        x >= self.x && x <= self.right()
    }
}
