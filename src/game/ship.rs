//! Ship and Projectiles
//!
//! The player's ship: heading, rotation, four-way thrust with screen wrap,
//! a capped projectile magazine, lives and the post-hit invulnerability window.

use std::f64::consts::{FRAC_PI_2, PI};
use std::time::Duration;

use serde::{Serialize, Deserialize};

use crate::config::GameConfig;
use crate::core::vec2::Vec2;
use crate::game::input::ThrustDirection;
use crate::game::state::Bounds;

// =============================================================================
// PROJECTILE
// =============================================================================

/// A projectile fired by the ship.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Projectile {
    /// Unique projectile ID (monotonic per ship)
    pub id: u32,
    /// Current position
    pub position: Vec2,
    /// Velocity per tick
    pub velocity: Vec2,
    /// Collision radius
    pub radius: f64,
    /// Set on the first asteroid hit, never reset
    pub consumed: bool,
}

impl Projectile {
    /// Create a live projectile.
    pub fn new(id: u32, position: Vec2, velocity: Vec2, radius: f64) -> Self {
        Self {
            id,
            position,
            velocity,
            radius,
            consumed: false,
        }
    }

    /// Integrate one tick of motion.
    #[inline]
    pub fn step(&mut self) {
        self.position += self.velocity;
    }

    /// Whether the center has left the surface.
    pub fn is_off_screen(&self, bounds: Bounds) -> bool {
        !bounds.contains(self.position)
    }

    /// Whether this projectile can still hit something.
    #[inline]
    pub fn is_live(&self) -> bool {
        !self.consumed
    }
}

// =============================================================================
// SHIP
// =============================================================================

/// The player's ship.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Ship {
    /// Player nickname
    pub name: String,

    /// Current position (wrapped with `radius` as margin)
    pub position: Vec2,

    /// Heading in radians (π/2 points up the screen)
    pub heading: f64,

    /// Heading change applied every tick (0 when not rotating)
    pub rotation_step: f64,

    /// Thrust velocity per tick
    pub thrust: Vec2,

    /// Ship size (drawing extent)
    pub size: f64,

    /// Collision radius (constant)
    pub radius: f64,

    /// Remaining lives
    pub lives: u32,

    /// Damage is ignored while set
    pub invulnerable: bool,

    /// Session time at which invulnerability expires
    pub invulnerable_until: Option<Duration>,

    /// Accumulated score
    pub score: u32,

    /// Outstanding projectiles, oldest first
    pub projectiles: Vec<Projectile>,

    /// Next projectile ID (monotonic counter)
    next_projectile_id: u32,
}

impl Ship {
    /// Create a ship at the surface center, pointing up.
    pub fn new(name: impl Into<String>, bounds: Bounds, config: &GameConfig) -> Self {
        Self {
            name: name.into(),
            position: bounds.center(),
            heading: FRAC_PI_2,
            rotation_step: 0.0,
            thrust: Vec2::ZERO,
            size: config.ship_size,
            radius: config.ship_radius(),
            lives: config.starting_lives,
            invulnerable: false,
            invulnerable_until: None,
            score: 0,
            projectiles: Vec::with_capacity(config.max_projectiles),
            next_projectile_id: 0,
        }
    }

    /// Set the rotation direction: `1` counter-clockwise, `-1` clockwise, `0` stop.
    ///
    /// Zero stops rotation outright; there is no angular decay.
    pub fn rotate(&mut self, direction: i8, config: &GameConfig) {
        self.rotation_step = match direction.signum() {
            0 => 0.0,
            sign => {
                sign as f64 * config.rotation_speed_degrees / 180.0 * PI / config.fps as f64
            }
        };
    }

    /// Apply thrust for the held directions.
    ///
    /// With no direction held the thrust velocity drops to zero at once
    /// (no inertial coast).
    pub fn apply_thrust(&mut self, directions: &[ThrustDirection], config: &GameConfig) {
        if directions.is_empty() {
            self.thrust = Vec2::ZERO;
            return;
        }

        let accel = config.thrust_acceleration / config.fps as f64;
        let (sin, cos) = self.heading.sin_cos();
        for direction in directions {
            let component = match direction {
                ThrustDirection::Forward => Vec2::new(cos, -sin),
                ThrustDirection::Back => Vec2::new(-cos, sin),
                ThrustDirection::Left => Vec2::new(-sin, -cos),
                ThrustDirection::Right => Vec2::new(sin, cos),
            };
            self.thrust += component * accel;
        }
    }

    /// Integrate one tick: heading, position (wrapped) and projectiles.
    pub fn step(&mut self, bounds: Bounds) {
        self.heading += self.rotation_step;
        self.position = (self.position + self.thrust)
            .wrap(bounds.width, bounds.height, self.radius);

        for projectile in &mut self.projectiles {
            projectile.step();
        }
    }

    /// Jump directly to a position (pointer control), bypassing physics.
    ///
    /// Off-surface targets wrap like any other motion.
    pub fn set_position(&mut self, position: Vec2, bounds: Bounds) {
        self.position = position.wrap(bounds.width, bounds.height, self.radius);
    }

    /// Tip of the ship, where projectiles spawn.
    pub fn nose(&self) -> Vec2 {
        self.position + Vec2::from_heading(self.heading) * self.radius
    }

    /// Fire a projectile along the heading.
    ///
    /// Returns the new projectile's ID, or `None` if the magazine is full.
    pub fn fire(&mut self, config: &GameConfig) -> Option<u32> {
        if self.projectiles.len() >= config.max_projectiles {
            return None;
        }

        let id = self.next_projectile_id;
        self.next_projectile_id += 1;

        let velocity = Vec2::from_heading(self.heading) * (config.projectile_speed / config.fps as f64);
        self.projectiles
            .push(Projectile::new(id, self.nose(), velocity, config.projectile_radius));
        Some(id)
    }

    /// Drop consumed projectiles and those that left the surface.
    pub fn prune_projectiles(&mut self, bounds: Bounds) {
        self.projectiles
            .retain(|p| p.is_live() && !p.is_off_screen(bounds));
    }

    /// Start (or restart) the invulnerability window at `now`.
    pub fn grant_invulnerability(&mut self, now: Duration, window: Duration) {
        self.invulnerable = true;
        self.invulnerable_until = Some(now + window);
    }

    /// Clear invulnerability once its window has passed.
    pub fn update_invulnerability(&mut self, now: Duration) {
        if let Some(until) = self.invulnerable_until {
            if now >= until {
                self.invulnerable = false;
                self.invulnerable_until = None;
            }
        }
    }

    /// Move back to the surface center.
    pub fn reset_to_center(&mut self, bounds: Bounds) {
        self.position = bounds.center();
    }

    /// Whether a collision would cost a life right now.
    #[inline]
    pub fn can_take_damage(&self) -> bool {
        !self.invulnerable && self.lives > 0
    }

    /// Take a hit: lose a life, recenter and become invulnerable.
    ///
    /// Returns `false` (and changes nothing) while invulnerable or out of lives.
    pub fn take_hit(&mut self, now: Duration, bounds: Bounds, window: Duration) -> bool {
        if !self.can_take_damage() {
            return false;
        }
        self.lives -= 1;
        self.reset_to_center(bounds);
        self.grant_invulnerability(now, window);
        true
    }

    /// Whether the ship has no lives left.
    #[inline]
    pub fn is_destroyed(&self) -> bool {
        self.lives == 0
    }

    /// Add to the score.
    pub fn add_score(&mut self, amount: u32) {
        self.score = self.score.saturating_add(amount);
    }

    /// The three hull vertices (nose, rear-left, rear-right).
    pub fn hull(&self) -> [Vec2; 3] {
        let Vec2 { x, y } = self.position;
        let r = self.radius;
        let (sin, cos) = self.heading.sin_cos();
        [
            Vec2::new(x + r * cos, y - r * sin),
            Vec2::new(x - r * (cos + sin), y + r * (sin - cos)),
            Vec2::new(x - r * (cos - sin), y + r * (sin + cos)),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn setup() -> (Ship, Bounds, GameConfig) {
        let config = GameConfig::default();
        let bounds = Bounds::new(800.0, 600.0);
        (Ship::new("tester", bounds, &config), bounds, config)
    }

    #[test]
    fn test_new_ship_at_center() {
        let (ship, bounds, _) = setup();
        assert_eq!(ship.position, bounds.center());
        assert_eq!(ship.radius, 15.0);
        assert_eq!(ship.lives, 3);
        assert!(!ship.invulnerable);
    }

    #[test]
    fn test_rotate_and_stop() {
        let (mut ship, bounds, config) = setup();
        ship.rotate(1, &config);
        // 360 deg/s at 30 fps = 12 degrees per tick
        assert!((ship.rotation_step - 12f64.to_radians()).abs() < 1e-12);

        let before = ship.heading;
        ship.step(bounds);
        assert!((ship.heading - before - 12f64.to_radians()).abs() < 1e-12);

        ship.rotate(0, &config);
        assert_eq!(ship.rotation_step, 0.0);
        let before = ship.heading;
        ship.step(bounds);
        assert_eq!(ship.heading, before);
    }

    #[test]
    fn test_thrust_forward_moves_up() {
        let (mut ship, bounds, config) = setup();
        ship.apply_thrust(&[ThrustDirection::Forward], &config);
        ship.step(bounds);
        assert!(ship.position.y < bounds.center().y, "Heading up moves toward y = 0");
        assert!((ship.position.x - bounds.center().x).abs() < 1e-9);
    }

    #[test]
    fn test_thrust_accumulates_then_stops() {
        let (mut ship, _, config) = setup();
        ship.apply_thrust(&[ThrustDirection::Right], &config);
        ship.apply_thrust(&[ThrustDirection::Right], &config);
        let per_tick = config.thrust_acceleration / config.fps as f64;
        assert!((ship.thrust.x - 2.0 * per_tick).abs() < 1e-9);

        ship.apply_thrust(&[], &config);
        assert_eq!(ship.thrust, Vec2::ZERO);
    }

    #[test]
    fn test_position_wraps() {
        let (mut ship, bounds, _) = setup();
        ship.position = Vec2::new(-ship.radius, 300.0);
        ship.thrust = Vec2::new(-2.0, 0.0);
        ship.step(bounds);
        assert!(ship.position.x > bounds.width, "Should re-enter at the right edge");
        assert!(ship.position.x <= bounds.width + ship.radius);
    }

    #[test]
    fn test_fire_capped() {
        let (mut ship, _, config) = setup();
        assert_eq!(ship.fire(&config), Some(0));
        assert_eq!(ship.fire(&config), Some(1));
        assert_eq!(ship.fire(&config), Some(2));
        assert_eq!(ship.fire(&config), None);
        assert_eq!(ship.projectiles.len(), 3);
    }

    #[test]
    fn test_projectile_spawns_at_nose() {
        let (mut ship, _, config) = setup();
        ship.fire(&config);
        let p = &ship.projectiles[0];
        assert!((p.position.y - (ship.position.y - ship.radius)).abs() < 1e-9);
        assert!(p.velocity.y < 0.0);
    }

    #[test]
    fn test_prune_projectiles() {
        let (mut ship, bounds, config) = setup();
        ship.fire(&config);
        ship.fire(&config);
        ship.projectiles[0].consumed = true;
        ship.projectiles[1].position = Vec2::new(-5.0, 10.0);
        ship.prune_projectiles(bounds);
        assert!(ship.projectiles.is_empty());

        // Magazine is free again
        assert!(ship.fire(&config).is_some());
    }

    #[test]
    fn test_invulnerability_window() {
        let (mut ship, _, _) = setup();
        let window = Duration::from_secs(3);
        ship.grant_invulnerability(Duration::from_secs(1), window);
        assert!(ship.invulnerable);

        ship.update_invulnerability(Duration::from_millis(3999));
        assert!(ship.invulnerable);

        ship.update_invulnerability(Duration::from_secs(4));
        assert!(!ship.invulnerable);
        assert_eq!(ship.invulnerable_until, None);
    }

    #[test]
    fn test_regrant_restarts_window() {
        let (mut ship, _, _) = setup();
        let window = Duration::from_secs(3);
        ship.grant_invulnerability(Duration::ZERO, window);
        ship.grant_invulnerability(Duration::from_secs(2), window);
        ship.update_invulnerability(Duration::from_secs(4));
        assert!(ship.invulnerable, "Second grant runs until t = 5s");
    }

    #[test]
    fn test_take_hit() {
        let (mut ship, bounds, config) = setup();
        ship.position = Vec2::new(10.0, 10.0);

        assert!(ship.take_hit(Duration::ZERO, bounds, config.invulnerability()));
        assert_eq!(ship.lives, 2);
        assert_eq!(ship.position, bounds.center());
        assert!(ship.invulnerable);

        // No damage while invulnerable
        assert!(!ship.take_hit(Duration::from_secs(1), bounds, config.invulnerability()));
        assert_eq!(ship.lives, 2);
    }

    #[test]
    fn test_hull_nose_matches_fire_point() {
        let (ship, _, _) = setup();
        let hull = ship.hull();
        assert!((hull[0].x - ship.nose().x).abs() < 1e-9);
        assert!((hull[0].y - ship.nose().y).abs() < 1e-9);
    }
}
