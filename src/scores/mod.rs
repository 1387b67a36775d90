//! Score Persistence
//!
//! A string-keyed store capability and the leaderboard kept in it.
//!
//! ## Module Structure
//!
//! - `store`: `KeyValueStore` capability with memory and file backends
//! - `leaderboard`: Score entries, dedupe by nickname, ranking

pub mod store;
pub mod leaderboard;

pub use store::{FileStore, KeyValueStore, MemoryStore, StoreError};
pub use leaderboard::{Leaderboard, ScoreEntry, LEADERBOARD_CAPACITY, LEADERBOARD_KEY};
