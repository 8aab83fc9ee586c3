//! Rendering collaborator seam
//!
//! The simulation never draws pixels itself; it emits draw calls through the
//! [`Canvas`] trait. A real frontend (canvas 2D, wgpu, terminal) implements
//! the trait; tests and the headless driver use [`DrawList`] or
//! [`NullCanvas`].

use glam::Vec2;

/// Packed RGBA color, `0xRRGGBBAA`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color(pub u32);

impl Color {
    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self(((r as u32) << 24) | ((g as u32) << 16) | ((b as u32) << 8) | a as u32)
    }

    pub const fn r(self) -> u8 {
        (self.0 >> 24) as u8
    }

    pub const fn g(self) -> u8 {
        (self.0 >> 16) as u8
    }

    pub const fn b(self) -> u8 {
        (self.0 >> 8) as u8
    }

    pub const fn a(self) -> u8 {
        self.0 as u8
    }
}

/// Game palette
pub mod palette {
    use super::Color;

    pub const PLAYER_STROKE: Color = Color(0xFFFFFFFF);
    pub const PLAYER_FILL: Color = Color(0xFF3870FF);
    pub const HOLE: Color = Color(0x302342FF);
    pub const PORTAL_BLUE: Color = Color(0x27A7D8FF);
    pub const PORTAL_ORANGE: Color = Color(0xFF9A00FF);
    /// Translucent band drawn between linked portal endpoints
    pub const PORTAL_LINK: Color = Color(0x30234230);
}

/// Per-frame draw-call sink implemented by the frontend
pub trait Canvas {
    /// Clear the whole surface (issued once per frame before redraws)
    fn clear(&mut self);

    /// Draw a stroked + filled circle
    fn circle(&mut self, center: Vec2, radius: f32, stroke: Color, fill: Color);

    /// Draw a thick line between two points
    fn link(&mut self, a: Vec2, b: Vec2, width: f32, color: Color);
}

/// A recorded draw call
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DrawOp {
    Clear,
    Circle {
        center: Vec2,
        radius: f32,
        stroke: Color,
        fill: Color,
    },
    Link {
        a: Vec2,
        b: Vec2,
        width: f32,
        color: Color,
    },
}

/// Canvas that records draw calls in order
///
/// Integrators can replay a frame's ops against a real surface; tests assert
/// on the recorded sequence.
#[derive(Debug, Default)]
pub struct DrawList {
    pub ops: Vec<DrawOp>,
}

impl DrawList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of circle ops recorded so far
    pub fn circle_count(&self) -> usize {
        self.ops
            .iter()
            .filter(|op| matches!(op, DrawOp::Circle { .. }))
            .count()
    }
}

impl Canvas for DrawList {
    fn clear(&mut self) {
        self.ops.clear();
        self.ops.push(DrawOp::Clear);
    }

    fn circle(&mut self, center: Vec2, radius: f32, stroke: Color, fill: Color) {
        self.ops.push(DrawOp::Circle {
            center,
            radius,
            stroke,
            fill,
        });
    }

    fn link(&mut self, a: Vec2, b: Vec2, width: f32, color: Color) {
        self.ops.push(DrawOp::Link { a, b, width, color });
    }
}

/// Canvas that discards everything (headless runs)
#[derive(Debug, Default)]
pub struct NullCanvas;

impl Canvas for NullCanvas {
    fn clear(&mut self) {}
    fn circle(&mut self, _center: Vec2, _radius: f32, _stroke: Color, _fill: Color) {}
    fn link(&mut self, _a: Vec2, _b: Vec2, _width: f32, _color: Color) {}
}
