//! Hazard holes with segment-bounded oscillation
//!
//! A hole either sits still or shuttles back and forth along one axis. The
//! travel segment is fixed at spawn time: the travel distance on each side
//! of the spawn point, clipped to the hole's boundary box.

use glam::Vec2;

use super::entity::Entity;
use super::geom::{Bounds, Surface, bounds_for};
use crate::render::{Canvas, palette};

/// Oscillation pattern of a hole
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AxisMode {
    Stationary,
    Horizontal,
    Vertical,
}

impl AxisMode {
    /// Initial direction vector for this mode
    pub fn unit(self) -> Vec2 {
        match self {
            AxisMode::Stationary => Vec2::ZERO,
            AxisMode::Horizontal => Vec2::X,
            AxisMode::Vertical => Vec2::Y,
        }
    }
}

/// A hazard hole
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hole {
    pub body: Entity,
    pub axis: AxisMode,
    pub speed: f32,
    pub travel: f32,
    /// Current signed direction along the active axis (zero when stationary)
    dir: Vec2,
    /// Travel segment endpoints, computed once at spawn
    min_pos: Vec2,
    max_pos: Vec2,
}

impl Hole {
    /// Spawn a hole at `pos`. The travel segment extends `travel` px to each
    /// side of the spawn point along the active axis, clipped to the
    /// boundary box for this radius.
    pub fn new(axis: AxisMode, speed: f32, travel: f32, pos: Vec2, radius: f32, surface: Surface) -> Self {
        let body = Entity::new(pos, radius, palette::HOLE, palette::HOLE);
        let unit = axis.unit();
        let bounds = bounds_for(radius, surface);

        let min_pos = (pos - unit * travel).max(bounds.min);
        let max_pos = (pos + unit * travel).min(bounds.max);

        Self {
            body,
            axis,
            speed,
            travel,
            dir: unit,
            min_pos,
            max_pos,
        }
    }

    pub fn pos(&self) -> Vec2 {
        self.body.pos
    }

    pub fn radius(&self) -> f32 {
        self.body.radius
    }

    /// Current signed direction (exposed for inspection)
    pub fn direction(&self) -> Vec2 {
        self.dir
    }

    /// Advance one frame: flip direction if the active-axis coordinate sits
    /// at a segment endpoint, then take a step clamped to the segment (a
    /// stride that does not divide the travel distance lands on the endpoint
    /// instead of overshooting).
    pub fn advance(&mut self, canvas: &mut dyn Canvas) {
        let pos = self.body.pos;
        let at_end = (self.dir.x != 0.0 && (pos.x <= self.min_pos.x || pos.x >= self.max_pos.x))
            || (self.dir.y != 0.0 && (pos.y <= self.min_pos.y || pos.y >= self.max_pos.y));

        if at_end {
            self.dir = -self.dir;
        }

        let segment = Bounds {
            min: self.min_pos,
            max: self.max_pos,
        };
        self.body.step_within(self.dir, self.speed, segment, canvas);
    }
}
