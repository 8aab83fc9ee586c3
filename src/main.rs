//! Hole Rush entry point
//!
//! Headless native driver: paces the frame loop at ~60 Hz and runs the
//! countdown on its own one-second accumulator, independent of frame rate.
//! Input and rendering frontends live outside this crate, so the driver
//! plays the autopilot demo against a discarding canvas.

use std::path::Path;
use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};

use hole_rush::consts::FRAME_DT;
use hole_rush::render::NullCanvas;
use hole_rush::settings::Settings;
use hole_rush::sim::{FrameOutcome, TickInput, World, frame};
use hole_rush::ui::LogHud;

/// Seed from the first CLI argument, wall clock otherwise
fn session_seed() -> u64 {
    if let Some(seed) = std::env::args().nth(1).and_then(|arg| arg.parse().ok()) {
        return seed;
    }
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0)
}

fn main() {
    env_logger::init();

    let settings = Settings::load_from(Path::new("hole-rush.json"));
    let seed = session_seed();
    log::info!(
        "session start: seed {seed}, {}x{} surface, {}s on the clock",
        settings.surface_width,
        settings.surface_height,
        settings.duration_secs
    );

    let mut world = World::new(&settings, seed);
    let mut canvas = NullCanvas;
    let mut hud = LogHud;
    let input = TickInput {
        autopilot: true,
        ..Default::default()
    };

    let frame_step = Duration::from_secs_f32(FRAME_DT);
    let second = Duration::from_secs(1);
    let mut countdown_acc = Duration::ZERO;
    let mut last = Instant::now();

    loop {
        let now = Instant::now();
        countdown_acc += now - last;
        last = now;

        // Countdown runs on elapsed real time, not on frame count
        while countdown_acc >= second {
            countdown_acc -= second;
            world.manager.countdown_tick(&mut hud);
        }

        if frame(&mut world, &input, &mut canvas, &mut hud) == FrameOutcome::GameOver {
            break;
        }

        std::thread::sleep(frame_step);
    }

    log::info!("final score: {}", world.manager.score);
}
