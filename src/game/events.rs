//! Game Events
//!
//! Notable things that happened during a tick. The session logs them and
//! hands them to the caller; nothing in the simulation reads them back.

use serde::{Serialize, Deserialize};

/// Game event data.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum GameEventData {
    /// Ship fired a projectile
    ProjectileFired {
        projectile_id: u32,
    },

    /// Two asteroids collided and reversed direction
    AsteroidsBounced {
        first_id: u32,
        second_id: u32,
    },

    /// Asteroid lost a hit point but survived
    AsteroidHit {
        asteroid_id: u32,
        hit_points_left: u32,
    },

    /// Asteroid lost its last hit point
    AsteroidDestroyed {
        asteroid_id: u32,
        points: u32,
        new_score: u32,
    },

    /// Ship collided with an asteroid and lost a life
    ShipHit {
        asteroid_id: u32,
        lives_left: u32,
    },

    /// Wave cleared, next level started
    LevelAdvanced {
        level: u32,
        asteroid_count: usize,
    },

    /// Final wave cleared
    GameWon {
        score: u32,
    },

    /// Ship ran out of lives
    GameOver {
        score: u32,
        level: u32,
    },
}

/// A game event stamped with the tick it happened on.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GameEvent {
    /// Tick when event occurred
    pub tick: u64,

    /// Event data
    pub data: GameEventData,
}

impl GameEvent {
    /// Create a new event.
    pub fn new(tick: u64, data: GameEventData) -> Self {
        Self { tick, data }
    }

    /// Whether this event ends the session.
    pub fn is_terminal(&self) -> bool {
        matches!(
            self.data,
            GameEventData::GameWon { .. } | GameEventData::GameOver { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_terminal_events() {
        assert!(GameEvent::new(1, GameEventData::GameWon { score: 10 }).is_terminal());
        assert!(GameEvent::new(1, GameEventData::GameOver { score: 0, level: 2 }).is_terminal());
        assert!(!GameEvent::new(1, GameEventData::ShipHit { asteroid_id: 0, lives_left: 2 }).is_terminal());
    }

    #[test]
    fn test_event_serialization() {
        let event = GameEvent::new(
            42,
            GameEventData::AsteroidDestroyed { asteroid_id: 3, points: 150, new_score: 400 },
        );
        let json = serde_json::to_string(&event).unwrap();
        let back: GameEvent = serde_json::from_str(&json).unwrap();
        assert_eq!(back, event);
    }
}
