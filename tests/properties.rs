//! Property tests for the simulation invariants.

use std::time::Duration;

use proptest::prelude::*;

use asteroids_arcade::core::vec2::{wrap_axis, Vec2};
use asteroids_arcade::game::asteroid::{radius_for, Asteroid};
use asteroids_arcade::game::collision::circles_overlap;
use asteroids_arcade::game::ship::Ship;
use asteroids_arcade::{Bounds, GameConfig};

proptest! {
    #[test]
    fn test_wrap_stays_in_margin_band(
        x in -1.0e5f64..1.0e5,
        y in -1.0e5f64..1.0e5,
        width in 100.0f64..4000.0,
        height in 100.0f64..4000.0,
        margin in 0.0f64..100.0,
    ) {
        let wrapped = Vec2::new(x, y).wrap(width, height, margin);

        prop_assert!(wrapped.x >= -margin && wrapped.x <= width + margin);
        prop_assert!(wrapped.y >= -margin && wrapped.y <= height + margin);
    }

    #[test]
    fn test_wrap_is_congruent(
        value in -1.0e5f64..1.0e5,
        extent in 100.0f64..4000.0,
        margin in 0.0f64..100.0,
    ) {
        let span = extent + 2.0 * margin;
        let wrapped = wrap_axis(value, extent, margin);

        let turns = (wrapped - value) / span;
        prop_assert!((turns - turns.round()).abs() < 1e-6);
    }

    #[test]
    fn test_wrap_keeps_on_screen_points(
        x in 0.0f64..800.0,
        y in 0.0f64..600.0,
        margin in 0.0f64..50.0,
    ) {
        let p = Vec2::new(x, y);
        prop_assert_eq!(p.wrap(800.0, 600.0, margin), p);
    }

    #[test]
    fn test_collision_is_symmetric(
        ax in -500.0f64..500.0, ay in -500.0f64..500.0, ar in 0.0f64..200.0,
        bx in -500.0f64..500.0, by in -500.0f64..500.0, br in 0.0f64..200.0,
    ) {
        let a = Vec2::new(ax, ay);
        let b = Vec2::new(bx, by);
        prop_assert_eq!(circles_overlap(a, ar, b, br), circles_overlap(b, br, a, ar));
    }

    #[test]
    fn test_damage_keeps_radius_consistent(hit_points in 1u32..=4, hits in 0usize..8) {
        let mut asteroid = Asteroid::new(0, Vec2::new(300.0, 300.0), Vec2::ZERO, hit_points, 50.0);

        let mut credited = 0;
        let mut credits = 0;
        for _ in 0..hits {
            let before = asteroid.hit_points;
            if let Some(points) = asteroid.take_damage(50) {
                credited += points;
                credits += 1;
            }
            prop_assert_eq!(asteroid.hit_points, before.saturating_sub(1));
            prop_assert_eq!(asteroid.radius, radius_for(50.0, asteroid.hit_points));
        }

        let destroyed = hits >= hit_points as usize;
        prop_assert_eq!(asteroid.is_destroyed(), destroyed);
        prop_assert_eq!(credits, destroyed as u32);
        prop_assert_eq!(credited, if destroyed { hit_points * 50 } else { 0 });
        prop_assert_eq!(asteroid.initial_hit_points, hit_points);
    }

    #[test]
    fn test_no_life_lost_while_invulnerable(hits in prop::collection::vec(0u64..10_000, 1..20)) {
        let config = GameConfig::default();
        let bounds = Bounds::new(800.0, 600.0);
        let mut ship = Ship::new("prop", bounds, &config);

        let mut times = hits;
        times.sort_unstable();

        for ms in times {
            let now = Duration::from_millis(ms);
            ship.update_invulnerability(now);
            ship.set_position(Vec2::new(10.0, 10.0), bounds);

            let lives_before = ship.lives;
            let was_invulnerable = ship.invulnerable;
            let hit = ship.take_hit(now, bounds, config.invulnerability());

            if was_invulnerable || lives_before == 0 {
                prop_assert!(!hit);
                prop_assert_eq!(ship.lives, lives_before);
            } else {
                prop_assert!(hit);
                prop_assert_eq!(ship.lives, lives_before - 1);
                prop_assert_eq!(ship.position, bounds.center());
                prop_assert!(ship.invulnerable);
                prop_assert_eq!(ship.invulnerable_until, Some(now + config.invulnerability()));
            }
        }
    }
}
