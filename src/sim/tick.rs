//! Per-frame orchestration
//!
//! One `frame` call is one cooperative tick: fixed step order, no state of
//! its own. Scheduling lives in the driver (the binary, or a test loop), so
//! the same tick runs under a real clock or deterministically in tests.

use glam::Vec2;

use super::geom::normalize;
use super::state::World;
use crate::render::Canvas;
use crate::ui::Hud;

/// Input for a single frame (latest-wins)
#[derive(Debug, Clone, Copy, Default)]
pub struct TickInput {
    /// Direction from the input collaborator, each axis roughly in [-1, 1].
    /// `None` leaves the player's previous direction in place.
    pub direction: Option<Vec2>,
    /// Demo mode: steer toward the nearest hole instead of external input
    pub autopilot: bool,
}

/// What the driver should do after a frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameOutcome {
    /// Schedule the next frame
    Running,
    /// Stop scheduling; the game-over signal has been sent
    GameOver,
}

/// Demo steering: head for the closest hole center
fn autopilot_direction(world: &World) -> Vec2 {
    let player_pos = world.player.pos();
    world
        .manager
        .holes
        .iter()
        .map(|hole| hole.pos() - player_pos)
        .min_by(|a, b| {
            a.length_squared()
                .partial_cmp(&b.length_squared())
                .unwrap_or(std::cmp::Ordering::Equal)
        })
        .map(normalize)
        .unwrap_or(Vec2::ZERO)
}

/// Advance the world by one frame.
///
/// Fixed order: clear surface, apply input, advance holes, render/resolve
/// portals, step the player, resolve hole collisions, check the terminal
/// condition.
pub fn frame(
    world: &mut World,
    input: &TickInput,
    canvas: &mut dyn Canvas,
    hud: &mut dyn Hud,
) -> FrameOutcome {
    canvas.clear();

    if input.autopilot {
        let dir = autopilot_direction(world);
        world.player.set_direction(dir);
    } else if let Some(dir) = input.direction {
        world.player.set_direction(dir);
    }

    let surface = world.surface;

    for hole in &mut world.manager.holes {
        hole.advance(canvas);
    }

    for portal in &mut world.portals {
        portal.render(canvas);
        portal.resolve(&mut world.player);
    }

    world.player.step(surface, canvas);

    world.manager.resolve_collisions(&world.player, surface, hud);

    if world.manager.is_over() {
        hud.game_over();
        FrameOutcome::GameOver
    } else {
        FrameOutcome::Running
    }
}
