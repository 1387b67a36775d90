//! Core primitives.
//!
//! Vector math and the seeded RNG shared by every game module.

pub mod vec2;
pub mod rng;

// Re-export core types
pub use vec2::{Vec2, wrap_axis};
pub use rng::GameRng;
