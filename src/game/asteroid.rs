//! Asteroids
//!
//! Drifting rocks that bounce off the surface edges and shrink as they are
//! hit. Radius and color are always derived from the remaining hit points.

use serde::{Serialize, Deserialize};

use crate::config::GameConfig;
use crate::core::rng::GameRng;
use crate::core::vec2::Vec2;
use crate::game::state::Bounds;

/// Asteroid tint, one per remaining hit point.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum AsteroidColor {
    /// 1 hit point left
    Ember = 1,
    /// 2 hit points left
    Amber = 2,
    /// 3 hit points left
    Jade = 3,
    /// 4 or more hit points left
    Cobalt = 4,
}

impl AsteroidColor {
    /// Color for a hit point count.
    pub fn for_hit_points(hit_points: u32) -> Self {
        match hit_points {
            0 | 1 => AsteroidColor::Ember,
            2 => AsteroidColor::Amber,
            3 => AsteroidColor::Jade,
            _ => AsteroidColor::Cobalt,
        }
    }

    /// RGB components.
    pub fn rgb(self) -> (u8, u8, u8) {
        match self {
            AsteroidColor::Ember => (214, 69, 65),
            AsteroidColor::Amber => (230, 162, 60),
            AsteroidColor::Jade => (72, 181, 120),
            AsteroidColor::Cobalt => (72, 118, 214),
        }
    }
}

/// A single asteroid.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Asteroid {
    /// Unique within the current wave
    pub id: u32,

    /// Current position
    pub position: Vec2,

    /// Velocity per tick
    pub velocity: Vec2,

    /// Remaining hit points
    pub hit_points: u32,

    /// Hit points at spawn (drives the score)
    pub initial_hit_points: u32,

    /// Collision radius: `size * hit_points / 2`
    pub radius: f64,

    /// Tint derived from `hit_points`
    pub color: AsteroidColor,

    /// Size constant
    size: f64,
}

impl Asteroid {
    /// Create an asteroid with explicit state.
    pub fn new(id: u32, position: Vec2, velocity: Vec2, hit_points: u32, size: f64) -> Self {
        Self {
            id,
            position,
            velocity,
            hit_points,
            initial_hit_points: hit_points,
            radius: radius_for(size, hit_points),
            color: AsteroidColor::for_hit_points(hit_points),
            size,
        }
    }

    /// Spawn with random position, hit points and velocity.
    ///
    /// The position is not validated here; see [`crate::game::wave`].
    pub fn spawn_random(id: u32, rng: &mut GameRng, bounds: Bounds, config: &GameConfig) -> Self {
        let position = rng.random_point(bounds.width, bounds.height);
        let hit_points = rng.next_ceil(config.asteroid_max_hit_points);

        let max_step = config.asteroid_speed / config.fps as f64;
        let vx = rng.next_f64() * max_step * rng.next_sign();
        let vy = rng.next_f64() * max_step * rng.next_sign();

        Self::new(id, position, Vec2::new(vx, vy), hit_points, config.asteroid_size)
    }

    /// Whether the bounding circle crosses the left or right edge.
    #[inline]
    pub fn is_off_x_bounds(&self, bounds: Bounds) -> bool {
        self.position.x + self.radius > bounds.width || self.position.x - self.radius < 0.0
    }

    /// Whether the bounding circle crosses the top or bottom edge.
    #[inline]
    pub fn is_off_y_bounds(&self, bounds: Bounds) -> bool {
        self.position.y + self.radius > bounds.height || self.position.y - self.radius < 0.0
    }

    /// Bounce off crossed edges, then integrate one tick of motion.
    pub fn step(&mut self, bounds: Bounds) {
        if self.is_off_x_bounds(bounds) {
            self.velocity.x = -self.velocity.x;
        }
        if self.is_off_y_bounds(bounds) {
            self.velocity.y = -self.velocity.y;
        }
        self.position += self.velocity;
    }

    /// Reverse direction (asteroid-asteroid collision response).
    pub fn reverse(&mut self) {
        self.velocity = -self.velocity;
    }

    /// Stop moving.
    pub fn freeze(&mut self) {
        self.velocity = Vec2::ZERO;
    }

    /// Lose one hit point.
    ///
    /// Returns the score earned (`initial_hit_points * score_multiplier`) on
    /// the hit that destroys the asteroid, `None` otherwise. Damage to an
    /// already destroyed asteroid is ignored, so the score is credited once.
    pub fn take_damage(&mut self, score_multiplier: u32) -> Option<u32> {
        if self.hit_points == 0 {
            return None;
        }

        self.hit_points -= 1;
        self.radius = radius_for(self.size, self.hit_points);
        self.color = AsteroidColor::for_hit_points(self.hit_points);

        if self.hit_points == 0 {
            Some(self.initial_hit_points.saturating_mul(score_multiplier))
        } else {
            None
        }
    }

    /// Whether the asteroid has no hit points left.
    #[inline]
    pub fn is_destroyed(&self) -> bool {
        self.hit_points == 0
    }
}

/// Radius for a hit point count.
#[inline]
pub fn radius_for(size: f64, hit_points: u32) -> f64 {
    size * hit_points as f64 / 2.0
}
