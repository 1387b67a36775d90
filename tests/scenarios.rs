//! End-to-end game scenarios.

use std::time::Duration;

use asteroids_arcade::core::vec2::Vec2;
use asteroids_arcade::game::asteroid::Asteroid;
use asteroids_arcade::game::ship::Ship;
use asteroids_arcade::game::tick::tick;
use asteroids_arcade::scores::leaderboard::ScoreEntry;
use asteroids_arcade::{
    Bounds, FileStore, GamePhase, GameConfig, GameState, InputState, Leaderboard, MemoryStore,
};

const BOUNDS: Bounds = Bounds::new(1280.0, 720.0);

fn destroy_all(state: &mut GameState) -> u32 {
    let mut earned = 0;
    for i in 0..state.asteroids.len() {
        while !state.asteroids[i].is_destroyed() {
            earned += state.damage_asteroid(i).unwrap_or(0);
        }
    }
    earned
}

#[test]
fn test_forced_damage_scores_sum_exactly() {
    let mut state = GameState::new("ada", BOUNDS, GameConfig::default(), 2024);
    let mut input = InputState::new();
    assert_eq!(state.asteroids.len(), 5);

    let expected: u32 = state.asteroids.iter().map(|a| a.initial_hit_points * 50).sum();
    let earned = destroy_all(&mut state);
    tick(&mut state, &mut input, Duration::ZERO);

    assert_eq!(earned, expected);
    assert_eq!(state.ship.score, expected);
    // Wave cleared: level 2 spawned
    assert_eq!(state.level, 2);
    assert_eq!(state.asteroids.len(), 7);
}

#[test]
fn test_overlap_costs_one_life() {
    let config = GameConfig::default();
    let center = BOUNDS.center();
    let rock = Asteroid::new(0, center + Vec2::new(20.0, 0.0), Vec2::ZERO, 1, 50.0);
    let mut state = GameState::with_asteroids("ada", BOUNDS, config, vec![rock]);
    let mut input = InputState::new();
    assert!(!state.ship.invulnerable);

    tick(&mut state, &mut input, Duration::from_secs(5));

    assert_eq!(state.ship.lives, 2);
    assert_eq!(state.ship.position, center);
    assert!(state.ship.invulnerable);
}

#[test]
fn test_leaderboard_keeps_best_per_nickname() {
    let mut board = Leaderboard::new(MemoryStore::new());

    board.submit(ScoreEntry::new("alice", 100)).unwrap();
    let stored = board.submit(ScoreEntry::new("alice", 50)).unwrap();
    assert_eq!(stored.len(), 1);
    assert_eq!((stored[0].nickname.as_str(), stored[0].score), ("alice", 100));

    let stored = board.submit(ScoreEntry::new("alice", 150)).unwrap();
    assert_eq!(stored.len(), 1);
    assert_eq!((stored[0].nickname.as_str(), stored[0].score), ("alice", 150));
}

#[test]
fn test_leaderboard_survives_reopen() {
    let dir = tempfile::tempdir().unwrap();

    let mut board = Leaderboard::new(FileStore::new(dir.path()));
    board.submit(ScoreEntry::new("alice", 100)).unwrap();
    board.submit(ScoreEntry::new("bob", 300)).unwrap();

    let reopened = Leaderboard::new(FileStore::new(dir.path()));
    let entries = reopened.load().unwrap();
    let names: Vec<&str> = entries.iter().map(|e| e.nickname.as_str()).collect();
    assert_eq!(names, vec!["bob", "alice"]);
}

#[test]
fn test_fourth_shot_is_ignored() {
    let config = GameConfig::default();
    let mut ship = Ship::new("ada", BOUNDS, &config);

    for expected_id in 0..3 {
        assert_eq!(ship.fire(&config), Some(expected_id));
    }
    assert_eq!(ship.fire(&config), None);
    assert_eq!(ship.projectiles.len(), 3);
}

#[test]
fn test_final_wave_wins_without_level_four() {
    let mut state = GameState::new("ada", BOUNDS, GameConfig::default(), 7);
    let mut input = InputState::new();
    let mut now = Duration::ZERO;

    for level in 1..=3 {
        assert_eq!(state.level, level);
        destroy_all(&mut state);
        let result = tick(&mut state, &mut input, now);
        now += Duration::from_millis(33);

        if level < 3 {
            assert!(result.finished.is_none());
        } else {
            assert_eq!(result.finished, Some(GamePhase::Won));
        }
    }

    assert_eq!(state.phase, GamePhase::Won);
    assert_eq!(state.level, 3);
    assert!(state.asteroids.is_empty());
    // One bonus life per level advanced
    assert_eq!(state.ship.lives, 5);
}
