//! Collision Detection
//!
//! Brute-force circle tests between ship, projectiles and asteroids.
//! When several candidates collide, the first one in collection order wins.

use crate::core::vec2::Vec2;
use crate::game::asteroid::Asteroid;
use crate::game::ship::{Projectile, Ship};

/// Anything with a circular collision shape.
pub trait Circle {
    /// Center of the circle.
    fn center(&self) -> Vec2;
    /// Radius of the circle.
    fn radius(&self) -> f64;
}

impl Circle for Ship {
    fn center(&self) -> Vec2 {
        self.position
    }
    fn radius(&self) -> f64 {
        self.radius
    }
}

impl Circle for Asteroid {
    fn center(&self) -> Vec2 {
        self.position
    }
    fn radius(&self) -> f64 {
        self.radius
    }
}

impl Circle for Projectile {
    fn center(&self) -> Vec2 {
        self.position
    }
    fn radius(&self) -> f64 {
        self.radius
    }
}

/// Check if two circles overlap.
///
/// Touching circles (distance equal to the radius sum) do not collide.
#[inline]
pub fn circles_overlap(pos_a: Vec2, radius_a: f64, pos_b: Vec2, radius_b: f64) -> bool {
    pos_a.distance(pos_b) < radius_a + radius_b
}

/// Check if two circular entities collide.
#[inline]
pub fn collides(a: &impl Circle, b: &impl Circle) -> bool {
    circles_overlap(a.center(), a.radius(), b.center(), b.radius())
}

/// First other, still-intact asteroid colliding with `asteroids[index]`.
pub fn find_asteroid_collision(asteroids: &[Asteroid], index: usize) -> Option<usize> {
    let subject = asteroids.get(index)?;
    asteroids
        .iter()
        .enumerate()
        .find(|(i, other)| *i != index && !other.is_destroyed() && collides(subject, *other))
        .map(|(i, _)| i)
}

/// First live projectile hitting `asteroid`.
pub fn find_projectile_hit(projectiles: &[Projectile], asteroid: &Asteroid) -> Option<usize> {
    projectiles
        .iter()
        .position(|p| p.is_live() && collides(p, asteroid))
}

/// Check if the ship collides with an asteroid.
#[inline]
pub fn check_ship_collision(ship: &Ship, asteroid: &Asteroid) -> bool {
    !asteroid.is_destroyed() && collides(ship, asteroid)
}
