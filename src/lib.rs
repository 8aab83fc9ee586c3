//! Hole Rush - a top-down dodge-and-score arena game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (entities, collisions, game state)
//! - `render`: Rendering collaborator seam (draw-call trait + recorder)
//! - `ui`: Score/time display collaborator seam
//! - `settings`: Data-driven tunables loaded from JSON

pub mod render;
pub mod settings;
pub mod sim;
pub mod ui;

pub use settings::Settings;

/// Game configuration constants
pub mod consts {
    /// Frame pacing for the driver (~60 Hz); the sim itself is frame-based
    /// and takes no timestep.
    pub const FRAME_DT: f32 = 1.0 / 60.0;

    /// Countdown duration in seconds
    pub const GAME_DURATION_SECS: u32 = 60;

    /// Margin between an entity's edge and the surface border
    pub const BOUNDS_MARGIN: f32 = 1.0;

    /// Player defaults - speed is pixels per frame
    pub const PLAYER_RADIUS: f32 = 20.0;
    pub const PLAYER_SPEED: f32 = 10.0;

    /// Hole defaults
    pub const HOLE_COUNT: usize = 10;
    pub const HOLE_MIN_RADIUS: u32 = 25;
    pub const HOLE_MAX_RADIUS: u32 = 80;
    pub const HOLE_MIN_TRAVEL: u32 = 100;
    pub const HOLE_MAX_TRAVEL: u32 = 500;

    /// Portal defaults
    pub const PORTAL_COUNT: usize = 3;
    pub const PORTAL_RADIUS: f32 = 40.0;
    pub const PORTAL_LINK_WIDTH: f32 = 80.0;

    /// Default surface dimensions for the native driver
    pub const SURFACE_WIDTH: f32 = 1080.0;
    pub const SURFACE_HEIGHT: f32 = 680.0;
}
