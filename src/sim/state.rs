//! Game state: score, countdown, hole collection, world construction
//!
//! All randomness flows through one seeded `Pcg32` so a whole session is
//! reproducible from its seed.

use glam::Vec2;
use rand::Rng;
use rand::SeedableRng;
use rand_pcg::Pcg32;

use super::entity::Player;
use super::geom::{Bounds, Surface, bounds_for, distance};
use super::hole::{AxisMode, Hole};
use super::portal::Portal;
use crate::consts::{
    HOLE_MAX_RADIUS, HOLE_MAX_TRAVEL, HOLE_MIN_RADIUS, HOLE_MIN_TRAVEL, PLAYER_RADIUS,
    PORTAL_RADIUS,
};
use crate::settings::Settings;
use crate::ui::Hud;

/// Uniform point inside a boundary box
fn random_point(rng: &mut Pcg32, bounds: Bounds) -> Vec2 {
    Vec2::new(
        rng.random_range(bounds.min.x..=bounds.max.x),
        rng.random_range(bounds.min.y..=bounds.max.y),
    )
}

fn random_axis(rng: &mut Pcg32) -> AxisMode {
    match rng.random_range(1..=3u32) {
        1 => AxisMode::Stationary,
        2 => AxisMode::Horizontal,
        _ => AxisMode::Vertical,
    }
}

/// Spawn one hole with independent random radius, speed, travel, axis mode
/// and position. Bigger holes move slower: speed = (80 - radius) / 5.
pub fn spawn_hole(rng: &mut Pcg32, surface: Surface) -> Hole {
    let radius = rng.random_range(HOLE_MIN_RADIUS..=HOLE_MAX_RADIUS);
    let speed = ((HOLE_MAX_RADIUS - radius) / 5) as f32;
    let axis = random_axis(rng);
    let travel = rng.random_range(HOLE_MIN_TRAVEL..=HOLE_MAX_TRAVEL) as f32;
    let pos = random_point(rng, bounds_for(radius as f32, surface));

    Hole::new(axis, speed, travel, pos, radius as f32, surface)
}

/// Owns the score, the countdown and the hole collection
#[derive(Debug, Clone)]
pub struct GameManager {
    pub score: u32,
    /// Remaining seconds; written only by `countdown_tick`, read elsewhere
    pub time_left: u32,
    pub holes: Vec<Hole>,
    /// Session seed kept for diagnostics
    pub seed: u64,
    rng: Pcg32,
}

impl GameManager {
    pub fn new(mut rng: Pcg32, seed: u64, surface: Surface, hole_count: usize, duration_secs: u32) -> Self {
        let holes = (0..hole_count).map(|_| spawn_hole(&mut rng, surface)).collect();
        Self {
            score: 0,
            time_left: duration_secs,
            holes,
            seed,
            rng,
        }
    }

    /// Terminal once the countdown hits zero
    pub fn is_over(&self) -> bool {
        self.time_left == 0
    }

    /// One real-time second elapsed. Runs on its own ~1 Hz cadence,
    /// independent of the frame loop. Returns `true` exactly on the tick
    /// that reaches zero; later ticks are no-ops.
    pub fn countdown_tick(&mut self, hud: &mut dyn Hud) -> bool {
        if self.time_left == 0 {
            return false;
        }
        self.time_left -= 1;
        hud.time_changed(self.time_left);
        self.time_left == 0
    }

    /// Score every hole the player currently overlaps (distance strictly
    /// below the radius sum). Each scored hole is removed and replaced by a
    /// fresh one, so the collection size never changes.
    pub fn resolve_collisions(&mut self, player: &Player, surface: Surface, hud: &mut dyn Hud) {
        let scored: Vec<usize> = self
            .holes
            .iter()
            .enumerate()
            .filter(|(_, hole)| {
                distance(hole.pos(), player.pos()) < hole.radius() + player.radius()
            })
            .map(|(i, _)| i)
            .collect();

        // Reverse order keeps the remaining indices valid
        for &idx in scored.iter().rev() {
            self.holes.remove(idx);
        }
        for _ in &scored {
            self.score += 1;
            hud.score_changed(self.score);
            self.holes.push(spawn_hole(&mut self.rng, surface));
        }
    }
}

/// The whole session: single owner of the player, portals and manager.
///
/// Portals and the manager borrow the player during a frame instead of
/// holding copies, so player state can never diverge.
#[derive(Debug, Clone)]
pub struct World {
    pub surface: Surface,
    pub player: Player,
    pub portals: Vec<Portal>,
    pub manager: GameManager,
}

impl World {
    /// Build a session from settings and a seed. Player, portal and hole
    /// placement all come from one RNG stream.
    pub fn new(settings: &Settings, seed: u64) -> Self {
        let surface = Surface::new(settings.surface_width, settings.surface_height);
        let mut rng = Pcg32::seed_from_u64(seed);

        let player = Player::new(random_point(&mut rng, bounds_for(PLAYER_RADIUS, surface)));

        let portal_bounds = bounds_for(PORTAL_RADIUS, surface);
        let portals = (0..settings.portal_count)
            .map(|_| {
                Portal::new(
                    random_point(&mut rng, portal_bounds),
                    random_point(&mut rng, portal_bounds),
                )
            })
            .collect();

        let manager = GameManager::new(rng, seed, surface, settings.hole_count, settings.duration_secs);

        Self {
            surface,
            player,
            portals,
            manager,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::NullCanvas;
    use crate::ui::NullHud;

    const SURFACE: Surface = Surface {
        width: 600.0,
        height: 400.0,
    };

    fn manager_with_holes(holes: Vec<Hole>) -> GameManager {
        GameManager {
            score: 0,
            time_left: 60,
            holes,
            seed: 7,
            rng: Pcg32::seed_from_u64(7),
        }
    }

    fn hole_at(pos: Vec2, radius: f32) -> Hole {
        Hole::new(AxisMode::Stationary, 0.0, 0.0, pos, radius, SURFACE)
    }

    /// Recording HUD for asserting update pushes
    #[derive(Default)]
    struct RecordingHud {
        scores: Vec<u32>,
        times: Vec<u32>,
        game_overs: u32,
    }

    impl Hud for RecordingHud {
        fn score_changed(&mut self, score: u32) {
            self.scores.push(score);
        }
        fn time_changed(&mut self, seconds_left: u32) {
            self.times.push(seconds_left);
        }
        fn game_over(&mut self) {
            self.game_overs += 1;
        }
    }

    #[test]
    fn test_single_overlap_scores_once_and_replaces_hole() {
        // Player r20 at (300,200), hole r20 at (310,205): distance ~7.07 < 40
        let player = Player::new(Vec2::new(300.0, 200.0));
        let mut manager = manager_with_holes(vec![
            hole_at(Vec2::new(310.0, 205.0), 20.0),
            hole_at(Vec2::new(100.0, 100.0), 25.0),
        ]);
        let mut hud = RecordingHud::default();

        manager.resolve_collisions(&player, SURFACE, &mut hud);

        assert_eq!(manager.score, 1);
        assert_eq!(hud.scores, vec![1]);
        assert_eq!(manager.holes.len(), 2);
        // The overlapping hole is gone
        assert!(manager.holes.iter().all(|h| h.pos() != Vec2::new(310.0, 205.0)));
        // The untouched hole survives
        assert!(manager.holes.iter().any(|h| h.pos() == Vec2::new(100.0, 100.0)));
    }

    #[test]
    fn test_multiple_overlaps_score_independently() {
        let player = Player::new(Vec2::new(300.0, 200.0));
        let mut manager = manager_with_holes(vec![
            hole_at(Vec2::new(305.0, 200.0), 30.0),
            hole_at(Vec2::new(295.0, 200.0), 30.0),
            hole_at(Vec2::new(500.0, 100.0), 30.0),
        ]);
        let mut hud = RecordingHud::default();

        manager.resolve_collisions(&player, SURFACE, &mut hud);

        assert_eq!(manager.score, 2);
        assert_eq!(hud.scores, vec![1, 2]);
        assert_eq!(manager.holes.len(), 3);
    }

    #[test]
    fn test_touching_exactly_does_not_score() {
        // Distance exactly equal to the radius sum: strict comparison, no score
        let player = Player::new(Vec2::new(300.0, 200.0));
        let mut manager = manager_with_holes(vec![hole_at(Vec2::new(340.0, 200.0), 20.0)]);
        let mut hud = RecordingHud::default();

        manager.resolve_collisions(&player, SURFACE, &mut hud);
        assert_eq!(manager.score, 0);
        assert_eq!(manager.holes.len(), 1);
    }

    #[test]
    fn test_countdown_reaches_zero_and_fires_once() {
        let mut manager = manager_with_holes(vec![]);
        let mut hud = RecordingHud::default();

        for tick in 0..59 {
            assert!(!manager.countdown_tick(&mut hud), "terminal fired early at tick {tick}");
            assert!(!manager.is_over());
        }
        // 60th tick is the terminal one
        assert!(manager.countdown_tick(&mut hud));
        assert!(manager.is_over());
        assert_eq!(manager.time_left, 0);
        assert_eq!(hud.times.first(), Some(&59));
        assert_eq!(hud.times.last(), Some(&0));

        // Further ticks are no-ops and never re-signal
        assert!(!manager.countdown_tick(&mut hud));
        assert_eq!(manager.time_left, 0);
        assert_eq!(hud.times.len(), 60);
    }

    #[test]
    fn test_spawned_holes_respect_tunable_ranges() {
        let mut rng = Pcg32::seed_from_u64(42);
        for _ in 0..200 {
            let hole = spawn_hole(&mut rng, SURFACE);
            assert!(hole.radius() >= 25.0 && hole.radius() <= 80.0);
            assert!(hole.speed >= 0.0 && hole.speed <= 11.0);
            assert!(hole.travel >= 100.0 && hole.travel <= 500.0);
            assert!(hole.body.bounds(SURFACE).contains(hole.pos()));
        }
    }

    #[test]
    fn test_world_construction_is_seed_deterministic() {
        let settings = Settings {
            surface_width: 600.0,
            surface_height: 400.0,
            ..Settings::default()
        };
        let a = World::new(&settings, 99999);
        let b = World::new(&settings, 99999);

        assert_eq!(a.player.pos(), b.player.pos());
        assert_eq!(a.portals.len(), b.portals.len());
        for (pa, pb) in a.portals.iter().zip(&b.portals) {
            assert_eq!(pa.circles[0].pos, pb.circles[0].pos);
            assert_eq!(pa.circles[1].pos, pb.circles[1].pos);
        }
        assert_eq!(a.manager.holes.len(), b.manager.holes.len());
        for (ha, hb) in a.manager.holes.iter().zip(&b.manager.holes) {
            assert_eq!(ha.pos(), hb.pos());
            assert_eq!(ha.radius(), hb.radius());
        }
    }

    #[test]
    fn test_world_defaults_match_game_setup() {
        let world = World::new(&Settings::default(), 1);
        assert_eq!(world.manager.holes.len(), 10);
        assert_eq!(world.portals.len(), 3);
        assert_eq!(world.manager.time_left, 60);
        assert_eq!(world.manager.score, 0);
    }

    #[test]
    fn test_scored_hole_replacement_is_fresh() {
        // Replacement holes keep coming from the manager's RNG stream
        let player = Player::new(Vec2::new(300.0, 200.0));
        let mut manager = manager_with_holes(vec![hole_at(Vec2::new(300.0, 200.0), 20.0)]);
        let mut canvas = NullCanvas;
        let mut hud = NullHud;

        manager.resolve_collisions(&player, SURFACE, &mut hud);
        assert_eq!(manager.holes.len(), 1);
        let replacement = manager.holes[0];
        assert!(replacement.body.bounds(SURFACE).contains(replacement.pos()));

        // And the replacement behaves like any other hole
        let mut hole = replacement;
        hole.advance(&mut canvas);
        assert!(hole.body.bounds(SURFACE).contains(hole.pos()));
    }
}
