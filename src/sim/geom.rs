//! Surface geometry helpers
//!
//! Boundary boxes keep every entity fully on the surface with a 1 px margin,
//! matching the clamped movement contract in `entity`.

use glam::Vec2;

use crate::consts::BOUNDS_MARGIN;

/// Dimensions of the rendering surface, read at bounds-computation time.
///
/// The core does not react to mid-session resizes; recomputing bounds on
/// resize is the integrator's job.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Surface {
    pub width: f32,
    pub height: f32,
}

impl Surface {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}

/// Per-axis position limits for a circular entity
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub min: Vec2,
    pub max: Vec2,
}

impl Bounds {
    /// Clamp a point into the bounds, each axis independently.
    ///
    /// Written branch-wise so degenerate bounds (radius larger than half the
    /// surface, min above max) pin to the max rather than panicking; such
    /// inputs are unspecified, not validated.
    pub fn clamp(&self, p: Vec2) -> Vec2 {
        let x = if p.x < self.min.x {
            self.min.x
        } else if p.x > self.max.x {
            self.max.x
        } else {
            p.x
        };
        let y = if p.y < self.min.y {
            self.min.y
        } else if p.y > self.max.y {
            self.max.y
        } else {
            p.y
        };
        Vec2::new(x, y)
    }

    pub fn contains(&self, p: Vec2) -> bool {
        p.x >= self.min.x && p.x <= self.max.x && p.y >= self.min.y && p.y <= self.max.y
    }
}

/// Boundary box for a circle of `radius` on the given surface
pub fn bounds_for(radius: f32, surface: Surface) -> Bounds {
    Bounds {
        min: Vec2::splat(radius + BOUNDS_MARGIN),
        max: Vec2::new(
            surface.width - radius - BOUNDS_MARGIN,
            surface.height - radius - BOUNDS_MARGIN,
        ),
    }
}

/// Euclidean distance between two points
#[inline]
pub fn distance(a: Vec2, b: Vec2) -> f32 {
    a.distance(b)
}

/// Zero-safe normalization.
///
/// Not applied on the movement path: raw diagonal input can exceed nominal
/// speed, and that is the specified behavior. Input-side code (autopilot,
/// frontends) may use this to produce well-formed direction vectors.
#[inline]
pub fn normalize(v: Vec2) -> Vec2 {
    v.normalize_or_zero()
}
