//! Seeded Random Number Generator
//!
//! Uses Xorshift128+ algorithm for fast, reproducible randomness.
//! Given the same seed, a session spawns the same waves.

use serde::{Serialize, Deserialize};

use super::vec2::Vec2;

/// Seeded PRNG using Xorshift128+ algorithm.
///
/// # Example
///
/// ```
/// use asteroids_arcade::core::rng::GameRng;
///
/// let mut a = GameRng::new(12345);
/// let mut b = GameRng::new(12345);
/// assert_eq!(a.next_u64(), b.next_u64());
/// ```
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct GameRng {
    state: [u64; 2],
}

impl Default for GameRng {
    fn default() -> Self {
        Self::new(0)
    }
}

impl GameRng {
    /// Create a new RNG from a 64-bit seed.
    ///
    /// Uses SplitMix64 to initialize the internal state, ensuring
    /// good distribution even from weak seeds.
    pub fn new(seed: u64) -> Self {
        let mut s = seed;
        let state0 = splitmix64(&mut s);
        let state1 = splitmix64(&mut s);

        // Ensure state is never all zeros
        let state = if state0 == 0 && state1 == 0 {
            [1, 1]
        } else {
            [state0, state1]
        };

        Self { state }
    }

    /// Generate the next 64-bit random value.
    #[inline]
    pub fn next_u64(&mut self) -> u64 {
        let s0 = self.state[0];
        let mut s1 = self.state[1];
        let result = s0.wrapping_add(s1);

        s1 ^= s0;
        self.state[0] = s0.rotate_left(24) ^ s1 ^ (s1 << 16);
        self.state[1] = s1.rotate_left(37);

        result
    }

    /// Generate a uniform float in `[0, 1)`.
    ///
    /// Uses the top 53 bits so every representable value is equally likely.
    #[inline]
    pub fn next_f64(&mut self) -> f64 {
        (self.next_u64() >> 11) as f64 * (1.0 / (1u64 << 53) as f64)
    }

    /// Generate `+1.0` or `-1.0` with equal probability.
    #[inline]
    pub fn next_sign(&mut self) -> f64 {
        if self.next_f64() < 0.5 { 1.0 } else { -1.0 }
    }

    /// Generate an integer in `[1, max]` as the ceiling of a uniform draw.
    ///
    /// A draw of exactly zero is lifted to 1.
    #[inline]
    pub fn next_ceil(&mut self, max: u32) -> u32 {
        if max == 0 {
            return 0;
        }
        ((self.next_f64() * max as f64).ceil() as u32).clamp(1, max)
    }

    /// Generate a point on a `width x height` surface with integral coordinates.
    #[inline]
    pub fn random_point(&mut self, width: f64, height: f64) -> Vec2 {
        let x = (self.next_f64() * width).floor();
        let y = (self.next_f64() * height).floor();
        Vec2::new(x, y)
    }
}

/// SplitMix64 for seed initialization.
/// Produces well-distributed values from sequential seeds.
#[inline]
fn splitmix64(state: &mut u64) -> u64 {
    *state = state.wrapping_add(0x9E3779B97F4A7C15);
    let mut z = *state;
    z = (z ^ (z >> 30)).wrapping_mul(0xBF58476D1CE4E5B9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94D049BB133111EB);
    z ^ (z >> 31)
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rng_determinism() {
        let mut rng1 = GameRng::new(12345);
        let mut rng2 = GameRng::new(12345);

        for _ in 0..1000 {
            assert_eq!(rng1.next_u64(), rng2.next_u64());
        }
    }

    #[test]
    fn test_rng_different_seeds() {
        let mut rng1 = GameRng::new(12345);
        let mut rng2 = GameRng::new(54321);

        // Very unlikely to match
        assert_ne!(rng1.next_u64(), rng2.next_u64());
    }

    #[test]
    fn test_next_f64_unit_interval() {
        let mut rng = GameRng::new(9999);
        for _ in 0..10_000 {
            let v = rng.next_f64();
            assert!((0.0..1.0).contains(&v));
        }
    }

    #[test]
    fn test_next_ceil_range() {
        let mut rng = GameRng::new(1234);
        let mut seen = [false; 5];
        for _ in 0..1000 {
            let v = rng.next_ceil(4);
            assert!((1..=4).contains(&v));
            seen[v as usize] = true;
        }
        assert!(seen[1] && seen[2] && seen[3] && seen[4], "All hit point values should occur");

        // Edge case: max = 0
        assert_eq!(rng.next_ceil(0), 0);
    }

    #[test]
    fn test_next_sign_both_values() {
        let mut rng = GameRng::new(42);
        let signs: Vec<f64> = (0..200).map(|_| rng.next_sign()).collect();
        assert!(signs.iter().any(|s| *s > 0.0));
        assert!(signs.iter().any(|s| *s < 0.0));
        assert!(signs.iter().all(|s| s.abs() == 1.0));
    }

    #[test]
    fn test_random_point_on_surface() {
        let mut rng = GameRng::new(7777);
        for _ in 0..100 {
            let p = rng.random_point(800.0, 600.0);
            assert!(p.x >= 0.0 && p.x < 800.0);
            assert!(p.y >= 0.0 && p.y < 600.0);
            assert_eq!(p.x, p.x.floor());
        }
    }
}
