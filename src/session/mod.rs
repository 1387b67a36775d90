//! Session Layer
//!
//! Everything non-deterministic around the simulation: session identity,
//! the wall-clock tick timer, input delivery and score persistence.
//!
//! ## Module Structure
//!
//! - `session`: One game's owned context (state, surface, store, input)
//! - `runner`: Fixed-rate tick loop fed by an input channel

#[allow(clippy::module_inception)]
pub mod session;
pub mod runner;

pub use session::{GameSession, SessionError, SessionId, SessionOutcome, SessionRequest};
pub use runner::{run_session, RunLimit};
