//! Game Logic Module
//!
//! The simulation itself. Nothing here touches the wall clock, the drawing
//! surface or storage; time arrives as a `Duration` argument.
//!
//! ## Module Structure
//!
//! - `input`: Key map, input events, per-tick input state
//! - `ship`: Ship motion, firing, lives and invulnerability
//! - `asteroid`: Asteroid motion and damage
//! - `collision`: Circle tests with first-match tie-break
//! - `wave`: Wave spawning and placement validation
//! - `state`: Game state, phase and surface bounds
//! - `tick`: Per-frame update
//! - `events`: Game events emitted per tick

pub mod input;
pub mod ship;
pub mod asteroid;
pub mod collision;
pub mod wave;
pub mod state;
pub mod tick;
pub mod events;

// Re-export key types
pub use input::{GameplayMode, InputEvent, InputState, Key, ThrustDirection};
pub use ship::{Projectile, Ship};
pub use asteroid::{Asteroid, AsteroidColor};
pub use state::{Bounds, GamePhase, GameState};
pub use tick::{tick, TickResult};
pub use events::{GameEvent, GameEventData};
