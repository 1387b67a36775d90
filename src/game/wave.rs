//! Wave Spawning
//!
//! Places the asteroids of a new level. A candidate position is rejected
//! while it sits in the safe zone around the ship's reset point, pokes out
//! of the surface, or overlaps an asteroid placed before it.
//!
//! Random sampling is capped at `placement_attempts`; after that a
//! deterministic grid scan guarantees the wave is always placed.

use tracing::{debug, warn};

use crate::config::GameConfig;
use crate::core::rng::GameRng;
use crate::core::vec2::Vec2;
use crate::game::asteroid::Asteroid;
use crate::game::collision::circles_overlap;
use crate::game::state::Bounds;

/// How a spawned asteroid found its position.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Placement {
    /// Random sampling succeeded after this many draws
    Sampled(u32),
    /// Grid scan found a cell satisfying every rule
    Grid,
    /// Grid scan found a cell only after ignoring overlaps
    Relaxed,
    /// Nothing fit; clamped to the corner cell farthest from the center
    Clamped,
}

/// Spawn `count` asteroids with validated positions.
///
/// IDs run `0..count` and are unique within the wave.
pub fn spawn_wave(count: usize, rng: &mut GameRng, bounds: Bounds, config: &GameConfig) -> Vec<Asteroid> {
    let mut wave: Vec<Asteroid> = Vec::with_capacity(count);

    for id in 0..count as u32 {
        let mut asteroid = Asteroid::spawn_random(id, rng, bounds, config);
        let placement = place_asteroid(&mut asteroid, &wave, rng, bounds, config);

        match placement {
            Placement::Sampled(draws) => {
                debug!("Asteroid {} placed after {} draws", id, draws);
            }
            fallback => {
                warn!("Asteroid {} placement fell back to {:?}", id, fallback);
            }
        }
        wave.push(asteroid);
    }
    wave
}

/// Move `asteroid` to a valid position relative to the `placed` ones.
pub fn place_asteroid(
    asteroid: &mut Asteroid,
    placed: &[Asteroid],
    rng: &mut GameRng,
    bounds: Bounds,
    config: &GameConfig,
) -> Placement {
    let radius = asteroid.radius;

    let mut draws = 1;
    while draws <= config.placement_attempts {
        if is_valid_placement(asteroid.position, radius, placed, bounds, config) {
            return Placement::Sampled(draws);
        }
        asteroid.position = rng.random_point(bounds.width, bounds.height);
        draws += 1;
    }

    if let Some(position) = grid_scan(radius, bounds, |p| {
        is_valid_placement(p, radius, placed, bounds, config)
    }) {
        asteroid.position = position;
        return Placement::Grid;
    }

    if let Some(position) = grid_scan(radius, bounds, |p| {
        !in_safe_zone(p, radius, bounds, config) && bounds.contains_circle(p, radius)
    }) {
        asteroid.position = position;
        return Placement::Relaxed;
    }

    asteroid.position = corner_cell(radius, bounds);
    Placement::Clamped
}

/// Check every placement rule for a candidate position.
pub fn is_valid_placement(
    position: Vec2,
    radius: f64,
    placed: &[Asteroid],
    bounds: Bounds,
    config: &GameConfig,
) -> bool {
    !in_safe_zone(position, radius, bounds, config)
        && bounds.contains_circle(position, radius)
        && !placed
            .iter()
            .any(|other| circles_overlap(position, radius, other.position, other.radius))
}

/// Whether a circle intrudes on the zone kept clear around the surface center.
#[inline]
pub fn in_safe_zone(position: Vec2, radius: f64, bounds: Bounds, config: &GameConfig) -> bool {
    position.distance(bounds.center()) < config.asteroid_size * 2.0 + radius
}

/// Top-left cell farthest from the center, inset by `radius` along each
/// axis the circle fits. Never the ship's reset point.
fn corner_cell(radius: f64, bounds: Bounds) -> Vec2 {
    let inset = |span: f64| if radius * 2.0 < span { radius } else { 0.0 };
    Vec2::new(inset(bounds.width), inset(bounds.height))
}

/// Scan cells row by row, spaced one radius apart, for the first accepted one.
fn grid_scan(radius: f64, bounds: Bounds, accept: impl Fn(Vec2) -> bool) -> Option<Vec2> {
    let step = radius.max(1.0);

    let mut y = radius;
    while y + radius <= bounds.height {
        let mut x = radius;
        while x + radius <= bounds.width {
            let cell = Vec2::new(x, y);
            if accept(cell) {
                return Some(cell);
            }
            x += step;
        }
        y += step;
    }
    None
}
