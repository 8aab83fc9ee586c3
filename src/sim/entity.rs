//! Movable circular entities
//!
//! Everything that lives on the surface is a circle with a clamped move.
//! `Player` and `Hole` build on [`Entity`] by composition rather than a
//! class hierarchy; each kind drives `Entity::step` with its own direction
//! and speed.

use glam::Vec2;

use super::geom::{Bounds, Surface, bounds_for};
use crate::consts::{PLAYER_RADIUS, PLAYER_SPEED};
use crate::render::{Canvas, Color, palette};

/// A movable circle with display attributes
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Entity {
    pub pos: Vec2,
    pub radius: f32,
    pub stroke: Color,
    pub fill: Color,
}

impl Entity {
    pub fn new(pos: Vec2, radius: f32, stroke: Color, fill: Color) -> Self {
        Self {
            pos,
            radius,
            stroke,
            fill,
        }
    }

    /// Boundary box for this entity on the given surface
    pub fn bounds(&self, surface: Surface) -> Bounds {
        bounds_for(self.radius, surface)
    }

    /// Emit this entity's circle to the canvas
    pub fn render(&self, canvas: &mut dyn Canvas) {
        canvas.circle(self.pos, self.radius, self.stroke, self.fill);
    }

    /// Move by `dir * speed`, clamping each axis to the boundary box, then
    /// render. Direction components are taken as-is; no validation or
    /// normalization happens here (deliberate - see `geom::normalize`).
    pub fn step(&mut self, dir: Vec2, speed: f32, surface: Surface, canvas: &mut dyn Canvas) {
        self.step_within(dir, speed, self.bounds(surface), canvas);
    }

    /// Clamped move against explicit bounds (holes pass their travel
    /// segment, which is pre-clipped to the surface at spawn)
    pub fn step_within(&mut self, dir: Vec2, speed: f32, bounds: Bounds, canvas: &mut dyn Canvas) {
        let candidate = self.pos + dir * speed;
        self.pos = bounds.clamp(candidate);
        self.render(canvas);
    }
}

/// The controllable entity
///
/// `dir` is overwritten by the input collaborator at arbitrary times; the
/// frame loop only reads the latest value once per frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Player {
    pub body: Entity,
    pub dir: Vec2,
    pub speed: f32,
}

impl Player {
    pub fn new(pos: Vec2) -> Self {
        Self {
            body: Entity::new(pos, PLAYER_RADIUS, palette::PLAYER_STROKE, palette::PLAYER_FILL),
            dir: Vec2::ZERO,
            speed: PLAYER_SPEED,
        }
    }

    /// Latest-wins direction update from the input collaborator
    pub fn set_direction(&mut self, dir: Vec2) {
        self.dir = dir;
    }

    pub fn pos(&self) -> Vec2 {
        self.body.pos
    }

    pub fn radius(&self) -> f32 {
        self.body.radius
    }

    /// Advance one frame using the current direction and fixed speed
    pub fn step(&mut self, surface: Surface, canvas: &mut dyn Canvas) {
        self.body.step(self.dir, self.speed, surface, canvas);
    }
}
