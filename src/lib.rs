//! # Asteroids Arcade
//!
//! Simulation core for a single-player asteroids game: a ship that rotates,
//! thrusts with screen wrap and fires at drifting asteroids across a fixed
//! sequence of levels, with lives, score and a local leaderboard.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                     ASTEROIDS ARCADE                         │
//! ├─────────────────────────────────────────────────────────────┤
//! │  core/           - Primitives                                │
//! │  ├── vec2.rs     - 2D vector, toroidal wrap                  │
//! │  └── rng.rs      - Seeded Xorshift128+ PRNG                  │
//! │                                                              │
//! │  config.rs       - Tuning constants (JSON overlay)           │
//! │                                                              │
//! │  game/           - Simulation (no clock, no IO)              │
//! │  ├── input.rs    - Key map and per-tick input state          │
//! │  ├── ship.rs     - Ship and projectiles                      │
//! │  ├── asteroid.rs - Asteroids                                 │
//! │  ├── collision.rs- Circle collision, first-match order       │
//! │  ├── wave.rs     - Wave spawning and placement               │
//! │  ├── state.rs    - Game state                                │
//! │  └── tick.rs     - Per-frame update                          │
//! │                                                              │
//! │  render.rs       - Drawing-surface capability and frames     │
//! │                                                              │
//! │  scores/         - Leaderboard over a key-value store        │
//! │  session/        - Session context and tick timer (tokio)    │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Data Flow
//!
//! Input events fold into an [`InputState`]; each tick applies it to the
//! ship, moves every entity, resolves collisions, then checks for a cleared
//! wave and for game over. The frame is drawn from the resulting state.
//!
//! All randomness comes from a seeded [`GameRng`], so a game built from the
//! same seed spawns the same waves.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(unsafe_code)]

pub mod core;
pub mod config;
pub mod game;
pub mod render;
pub mod scores;
pub mod session;

// Re-export commonly used types
pub use core::vec2::Vec2;
pub use core::rng::GameRng;
pub use config::{ConfigError, GameConfig};
pub use game::input::{GameplayMode, InputEvent, InputState, Key};
pub use game::state::{Bounds, GamePhase, GameState};
pub use render::{DrawingSurface, RecordingSurface};
pub use scores::{FileStore, KeyValueStore, Leaderboard, MemoryStore, ScoreEntry};
pub use session::{run_session, GameSession, RunLimit, SessionOutcome, SessionRequest};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
