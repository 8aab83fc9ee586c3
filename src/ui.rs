//! Display collaborator seam
//!
//! Score and remaining-time widgets live outside the core. The sim pushes
//! updates through [`Hud`] whenever a value changes, plus a one-shot
//! game-over signal.

/// Score/time display sink
pub trait Hud {
    fn score_changed(&mut self, score: u32);
    fn time_changed(&mut self, seconds_left: u32);
    fn game_over(&mut self);
}

/// Hud that routes updates through the `log` facade (headless driver)
#[derive(Debug, Default)]
pub struct LogHud;

impl Hud for LogHud {
    fn score_changed(&mut self, score: u32) {
        log::info!("score: {score}");
    }

    fn time_changed(&mut self, seconds_left: u32) {
        log::debug!("time left: {seconds_left}s");
    }

    fn game_over(&mut self) {
        log::info!("game over");
    }
}

/// Hud that discards everything
#[derive(Debug, Default)]
pub struct NullHud;

impl Hud for NullHud {
    fn score_changed(&mut self, _score: u32) {}
    fn time_changed(&mut self, _seconds_left: u32) {}
    fn game_over(&mut self) {}
}
