//! Game State Definitions
//!
//! The complete state of one game: surface bounds, ship, the active wave,
//! level and phase. A [`GameState`] is owned by exactly one session.

use serde::{Serialize, Deserialize};
use tracing::{debug, info};

use crate::config::GameConfig;
use crate::core::rng::GameRng;
use crate::core::vec2::Vec2;
use crate::game::asteroid::Asteroid;
use crate::game::events::{GameEvent, GameEventData};
use crate::game::ship::Ship;
use crate::game::wave::spawn_wave;

// =============================================================================
// BOUNDS
// =============================================================================

/// Drawing surface dimensions, fixed for the whole session.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    /// Width in pixels
    pub width: f64,
    /// Height in pixels
    pub height: f64,
}

impl Bounds {
    /// Create bounds.
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Surface midpoint (ship reset point).
    #[inline]
    pub fn center(&self) -> Vec2 {
        Vec2::new(self.width / 2.0, self.height / 2.0)
    }

    /// Check if a point lies on the surface (edges included).
    #[inline]
    pub fn contains(&self, point: Vec2) -> bool {
        point.x >= 0.0 && point.x <= self.width && point.y >= 0.0 && point.y <= self.height
    }

    /// Check if a circle lies fully on the surface.
    #[inline]
    pub fn contains_circle(&self, center: Vec2, radius: f64) -> bool {
        center.x - radius >= 0.0
            && center.x + radius <= self.width
            && center.y - radius >= 0.0
            && center.y + radius <= self.height
    }
}

// =============================================================================
// GAME PHASE
// =============================================================================

/// Current phase of the game.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Active gameplay
    #[default]
    Playing,
    /// Final wave cleared
    Won,
    /// Ship ran out of lives
    GameOver,
}

impl GamePhase {
    /// Whether the game has reached a terminal phase.
    pub fn is_finished(self) -> bool {
        !matches!(self, GamePhase::Playing)
    }
}

// =============================================================================
// GAME STATE
// =============================================================================

/// Complete state of a game.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct GameState {
    /// Tuning constants
    pub config: GameConfig,

    /// Surface bounds
    pub bounds: Bounds,

    /// Ticks run so far
    pub tick: u64,

    /// Current phase
    pub phase: GamePhase,

    /// Current level (1-based)
    pub level: u32,

    /// The player's ship
    pub ship: Ship,

    /// Active wave, in spawn order
    pub asteroids: Vec<Asteroid>,

    /// Seeded RNG for wave spawning
    pub rng: GameRng,

    /// Events generated this tick (cleared each tick)
    #[serde(skip)]
    pending_events: Vec<GameEvent>,
}

impl GameState {
    /// Create a game at level 1 with its first wave placed.
    pub fn new(name: impl Into<String>, bounds: Bounds, config: GameConfig, seed: u64) -> Self {
        let mut rng = GameRng::new(seed);
        let ship = Ship::new(name, bounds, &config);
        let asteroids = spawn_wave(config.asteroids_for_level(1), &mut rng, bounds, &config);

        Self {
            config,
            bounds,
            tick: 0,
            phase: GamePhase::Playing,
            level: 1,
            ship,
            asteroids,
            rng,
            pending_events: Vec::new(),
        }
    }

    /// Create a game with an explicit (possibly empty) asteroid set.
    pub fn with_asteroids(
        name: impl Into<String>,
        bounds: Bounds,
        config: GameConfig,
        asteroids: Vec<Asteroid>,
    ) -> Self {
        let ship = Ship::new(name, bounds, &config);
        Self {
            config,
            bounds,
            tick: 0,
            phase: GamePhase::Playing,
            level: 1,
            ship,
            asteroids,
            rng: GameRng::default(),
            pending_events: Vec::new(),
        }
    }

    /// Damage the asteroid at `index` by one hit point.
    ///
    /// Credits the ship's score when the asteroid is destroyed and returns
    /// the points earned.
    pub fn damage_asteroid(&mut self, index: usize) -> Option<u32> {
        let asteroid = self.asteroids.get_mut(index)?;
        let points = asteroid.take_damage(self.config.score_multiplier);
        let asteroid_id = asteroid.id;
        let hit_points_left = asteroid.hit_points;

        match points {
            Some(points) => {
                self.ship.add_score(points);
                debug!("Asteroid {} destroyed (+{})", asteroid_id, points);
                self.push_event(GameEventData::AsteroidDestroyed {
                    asteroid_id,
                    points,
                    new_score: self.ship.score,
                });
            }
            None if hit_points_left > 0 => {
                self.push_event(GameEventData::AsteroidHit { asteroid_id, hit_points_left });
            }
            None => {}
        }
        points
    }

    /// Drop destroyed asteroids from the active wave.
    pub fn remove_destroyed_asteroids(&mut self) {
        self.asteroids.retain(|a| !a.is_destroyed());
    }

    /// Start the next level: spawn its wave, recenter and protect the ship.
    pub fn advance_level(&mut self, now: std::time::Duration) {
        self.level += 1;
        self.asteroids = spawn_wave(
            self.config.asteroids_for_level(self.level),
            &mut self.rng,
            self.bounds,
            &self.config,
        );
        self.ship.lives += 1;
        self.ship.reset_to_center(self.bounds);
        self.ship.grant_invulnerability(now, self.config.invulnerability());

        info!("Level {} started with {} asteroids", self.level, self.asteroids.len());
        self.push_event(GameEventData::LevelAdvanced {
            level: self.level,
            asteroid_count: self.asteroids.len(),
        });
    }

    /// Whether the current level is the last one.
    pub fn is_final_level(&self) -> bool {
        self.level >= self.config.max_level()
    }

    /// Number of asteroids still in play.
    pub fn asteroid_count(&self) -> usize {
        self.asteroids.len()
    }

    /// Push a game event stamped with the current tick.
    pub fn push_event(&mut self, data: GameEventData) {
        self.pending_events.push(GameEvent::new(self.tick, data));
    }

    /// Take pending events (consumes them).
    pub fn take_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.pending_events)
    }
}

// =============================================================================
// TESTS
// =============================================================================
