//! Simulation Tick
//!
//! One frame of the game: apply the input gathered since the previous tick,
//! move everything, resolve collisions and check for level and end
//! conditions. Drawing happens afterwards, from the resulting state.

use std::time::Duration;

use tracing::info;

use crate::game::collision::{check_ship_collision, find_asteroid_collision, find_projectile_hit};
use crate::game::events::{GameEvent, GameEventData};
use crate::game::input::{InputState, ThrustDirection};
use crate::game::state::{GamePhase, GameState};

/// Result of a tick.
#[derive(Debug, Default)]
pub struct TickResult {
    /// Events generated this tick
    pub events: Vec<GameEvent>,
    /// Terminal phase reached this tick (or earlier)
    pub finished: Option<GamePhase>,
}

/// Run one simulation tick.
///
/// # Arguments
///
/// * `state` - The game state (will be mutated)
/// * `input` - Input gathered since the last tick; one-shot requests are consumed
/// * `now` - Session clock, used for invulnerability expiry
pub fn tick(state: &mut GameState, input: &mut InputState, now: Duration) -> TickResult {
    let mut result = TickResult::default();

    if state.phase.is_finished() {
        result.finished = Some(state.phase);
        return result;
    }

    // 0. Advance tick counter
    state.tick += 1;

    // 1. Expire invulnerability
    state.ship.update_invulnerability(now);

    // 2. Ship intent and motion
    apply_input(state, input);

    // 3. Asteroids: move, bounce, take hits, hit the ship
    process_asteroids(state, now);

    // 4. Drop what is gone
    state.remove_destroyed_asteroids();
    state.ship.prune_projectiles(state.bounds);

    // 5. Wave cleared: next level or win
    check_level_cleared(state, now);

    // 6. Out of lives
    check_game_over(state);

    if state.phase.is_finished() {
        result.finished = Some(state.phase);
    }
    result.events = state.take_events();
    result
}

/// Rotate, thrust, move and fire.
fn apply_input(state: &mut GameState, input: &mut InputState) {
    let config = &state.config;
    let ship = &mut state.ship;

    ship.rotate(input.rotation_direction(), config);

    let thrust: Vec<ThrustDirection> = input.thrust_directions().collect();
    ship.apply_thrust(&thrust, config);

    ship.step(state.bounds);

    // Pointer control places the ship directly
    if let Some(target) = input.take_pointer_target() {
        ship.set_position(target, state.bounds);
    }

    let fired: Vec<u32> = (0..input.take_fire_requests())
        .map_while(|_| ship.fire(config))
        .collect();

    for projectile_id in fired {
        state.push_event(GameEventData::ProjectileFired { projectile_id });
    }
}

/// Per-asteroid update in collection order.
fn process_asteroids(state: &mut GameState, now: Duration) {
    let bounds = state.bounds;
    let window = state.config.invulnerability();

    for i in 0..state.asteroids.len() {
        if state.asteroids[i].is_destroyed() {
            continue;
        }

        state.asteroids[i].step(bounds);

        if let Some(j) = find_asteroid_collision(&state.asteroids, i) {
            state.asteroids[i].reverse();
            state.asteroids[j].reverse();
            let (first_id, second_id) = (state.asteroids[i].id, state.asteroids[j].id);
            state.push_event(GameEventData::AsteroidsBounced { first_id, second_id });
        }

        if let Some(p) = find_projectile_hit(&state.ship.projectiles, &state.asteroids[i]) {
            state.ship.projectiles[p].consumed = true;
            state.damage_asteroid(i);
        }

        if check_ship_collision(&state.ship, &state.asteroids[i])
            && state.ship.take_hit(now, bounds, window)
        {
            let asteroid_id = state.asteroids[i].id;
            let lives_left = state.ship.lives;
            info!("Ship hit by asteroid {} ({} lives left)", asteroid_id, lives_left);
            state.push_event(GameEventData::ShipHit { asteroid_id, lives_left });
        }
    }
}

fn check_level_cleared(state: &mut GameState, now: Duration) {
    if !state.asteroids.is_empty() {
        return;
    }

    if state.is_final_level() {
        state.phase = GamePhase::Won;
        let score = state.ship.score;
        info!("{} cleared the final level with {} points", state.ship.name, score);
        state.push_event(GameEventData::GameWon { score });
    } else {
        state.advance_level(now);
    }
}

fn check_game_over(state: &mut GameState) {
    if state.phase.is_finished() || !state.ship.is_destroyed() {
        return;
    }

    for asteroid in &mut state.asteroids {
        asteroid.freeze();
    }
    state.phase = GamePhase::GameOver;

    let (score, level) = (state.ship.score, state.level);
    info!("Game over for {} at level {} with {} points", state.ship.name, level, score);
    state.push_event(GameEventData::GameOver { score, level });
}
