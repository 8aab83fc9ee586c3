//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must stay pure:
//! - Frame-based motion only (no wall-clock reads)
//! - Seeded RNG only
//! - Draw calls and HUD updates go through collaborator traits
//! - No platform dependencies

pub mod entity;
pub mod geom;
pub mod hole;
pub mod portal;
pub mod state;
pub mod tick;

pub use entity::{Entity, Player};
pub use geom::{Bounds, Surface, bounds_for, distance, normalize};
pub use hole::{AxisMode, Hole};
pub use portal::Portal;
pub use state::{GameManager, World, spawn_hole};
pub use tick::{FrameOutcome, TickInput, frame};
