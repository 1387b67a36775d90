//! Leaderboard
//!
//! Persisted as a JSON array of `{nickname, score, date}` records under the
//! [`LEADERBOARD_KEY`] slot. One entry per nickname (the higher score wins),
//! sorted by descending score, top [`LEADERBOARD_CAPACITY`] kept.

use chrono::{DateTime, Utc};
use serde::{Serialize, Deserialize};
use tracing::{info, warn};

use crate::scores::store::{KeyValueStore, StoreError};

/// Store slot holding the leaderboard.
pub const LEADERBOARD_KEY: &str = "leaderboard";

/// Entries kept after ranking.
pub const LEADERBOARD_CAPACITY: usize = 10;

/// One leaderboard record.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreEntry {
    /// Player nickname
    pub nickname: String,
    /// Final score
    pub score: u32,
    /// When the score was achieved (RFC 3339 on disk)
    pub date: DateTime<Utc>,
}

impl ScoreEntry {
    /// Entry stamped with the current time.
    pub fn new(nickname: impl Into<String>, score: u32) -> Self {
        Self {
            nickname: nickname.into(),
            score,
            date: Utc::now(),
        }
    }
}

/// Leaderboard backed by a [`KeyValueStore`].
#[derive(Debug)]
pub struct Leaderboard<S> {
    store: S,
}

impl<S: KeyValueStore> Leaderboard<S> {
    /// Wrap a store.
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Underlying store.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Read the persisted entries.
    ///
    /// A slot that does not parse is logged and read as empty.
    pub fn load(&self) -> Result<Vec<ScoreEntry>, StoreError> {
        let Some(raw) = self.store.get(LEADERBOARD_KEY)? else {
            return Ok(Vec::new());
        };

        match serde_json::from_str(&raw) {
            Ok(entries) => Ok(entries),
            Err(e) => {
                warn!("Ignoring unreadable leaderboard: {}", e);
                Ok(Vec::new())
            }
        }
    }

    /// Record a score and persist the ranked list.
    ///
    /// Returns the list as stored.
    pub fn submit(&mut self, entry: ScoreEntry) -> Result<Vec<ScoreEntry>, StoreError> {
        let nickname = entry.nickname.clone();
        let score = entry.score;

        let entries = merge_entry(self.load()?, entry);
        let encoded = serde_json::to_string(&entries)?;
        self.store.set(LEADERBOARD_KEY, &encoded)?;

        info!("Leaderboard updated: {} scored {} ({} entries)", nickname, score, entries.len());
        Ok(entries)
    }
}

/// Fold `entry` into `entries`: dedupe by nickname, rank and cap.
///
/// An existing entry is replaced only by a strictly higher score. Equal
/// scores keep their relative order.
pub fn merge_entry(mut entries: Vec<ScoreEntry>, entry: ScoreEntry) -> Vec<ScoreEntry> {
    match entries.iter_mut().find(|e| e.nickname == entry.nickname) {
        Some(existing) if entry.score > existing.score => *existing = entry,
        Some(_) => {}
        None => entries.push(entry),
    }

    entries.sort_by(|a, b| b.score.cmp(&a.score));
    entries.truncate(LEADERBOARD_CAPACITY);
    entries
}
