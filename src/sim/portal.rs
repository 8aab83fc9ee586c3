//! Bidirectional teleport portals
//!
//! A portal is a pair of fixed circles. Touching one endpoint relocates the
//! player to the other. The `inside` flag suppresses re-triggering while the
//! player keeps overlapping an endpoint after a teleport; it re-arms only
//! once the player is clear of both.

use glam::Vec2;

use super::entity::{Entity, Player};
use super::geom::distance;
use crate::consts::{PORTAL_LINK_WIDTH, PORTAL_RADIUS};
use crate::render::{Canvas, palette};

/// A linked pair of teleport endpoints
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Portal {
    pub circles: [Entity; 2],
    inside: bool,
}

impl Portal {
    /// Create a portal with endpoints at the given positions.
    /// Endpoints never move once created.
    pub fn new(a: Vec2, b: Vec2) -> Self {
        Self {
            circles: [
                Entity::new(a, PORTAL_RADIUS, palette::PORTAL_BLUE, palette::PORTAL_BLUE),
                Entity::new(b, PORTAL_RADIUS, palette::PORTAL_ORANGE, palette::PORTAL_ORANGE),
            ],
            inside: false,
        }
    }

    /// Whether the hysteresis latch is currently set
    pub fn is_inside(&self) -> bool {
        self.inside
    }

    /// Draw the connecting band, then both endpoints
    pub fn render(&self, canvas: &mut dyn Canvas) {
        canvas.link(
            self.circles[0].pos,
            self.circles[1].pos,
            PORTAL_LINK_WIDTH,
            palette::PORTAL_LINK,
        );
        for circle in &self.circles {
            circle.render(canvas);
        }
    }

    fn collides(&self, idx: usize, player: &Player) -> bool {
        let circle = &self.circles[idx];
        distance(circle.pos, player.pos()) <= circle.radius + player.radius()
    }

    /// Evaluate teleport logic against the player for this frame.
    ///
    /// Endpoints are checked in fixed order; if both overlap in the same
    /// frame while the latch is clear, only the first-checked teleport takes
    /// effect (documented tie-break, not an error).
    pub fn resolve(&mut self, player: &mut Player) {
        let hit = [self.collides(0, player), self.collides(1, player)];

        if !hit[0] && !hit[1] {
            self.inside = false;
        }

        if self.inside {
            return;
        }

        if hit[0] {
            player.body.pos = self.circles[1].pos;
            self.inside = true;
        } else if hit[1] {
            player.body.pos = self.circles[0].pos;
            self.inside = true;
        }
    }
}
