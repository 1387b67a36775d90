//! Game Session
//!
//! One player's game from start to win or game over. The session owns
//! everything the game touches: simulation state, pending input, the
//! drawing surface and the leaderboard store. Nothing is shared between
//! sessions.

use std::time::Duration;

use serde::{Serialize, Deserialize};
use tracing::{debug, info};
use uuid::Uuid;

use crate::config::{ConfigError, GameConfig};
use crate::game::input::{GameplayMode, InputEvent, InputState};
use crate::game::state::{Bounds, GamePhase, GameState};
use crate::game::tick::{tick, TickResult};
use crate::render::{render_frame, DrawingSurface};
use crate::scores::leaderboard::{Leaderboard, ScoreEntry};
use crate::scores::store::{KeyValueStore, StoreError};

/// Unique session identifier.
pub type SessionId = Uuid;

// =============================================================================
// REQUEST
// =============================================================================

/// Form submitted to start a session.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SessionRequest {
    /// Player nickname (must not be blank)
    pub nickname: String,
    /// Selected gameplay mode (must be present)
    pub mode: Option<GameplayMode>,
}

impl SessionRequest {
    /// Build a request from raw form values. Unknown mode names count as missing.
    pub fn from_form(nickname: &str, mode: &str) -> Self {
        Self {
            nickname: nickname.to_string(),
            mode: GameplayMode::from_name(mode),
        }
    }

    /// Check the required fields, returning the trimmed nickname and mode.
    pub fn validate(&self) -> Result<(String, GameplayMode), SessionError> {
        let nickname = self.nickname.trim();
        if nickname.is_empty() {
            return Err(SessionError::MissingNickname);
        }
        let mode = self.mode.ok_or(SessionError::MissingMode)?;
        Ok((nickname.to_string(), mode))
    }
}

// =============================================================================
// OUTCOME
// =============================================================================

/// Summary handed back when a session stops.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionOutcome {
    /// Session identifier
    pub session_id: SessionId,
    /// Player nickname
    pub nickname: String,
    /// Final phase (`Playing` if the session was stopped early)
    pub phase: GamePhase,
    /// Final score
    pub score: u32,
    /// Level reached
    pub level: u32,
    /// Ticks run
    pub ticks: u64,
}

// =============================================================================
// SESSION
// =============================================================================

/// A running game and everything it owns.
pub struct GameSession<D, S> {
    id: SessionId,
    mode: GameplayMode,
    state: GameState,
    input: InputState,
    surface: D,
    leaderboard: Leaderboard<S>,
    score_saved: bool,
}

impl<D: DrawingSurface, S: KeyValueStore> GameSession<D, S> {
    /// Start a session from a submitted form.
    ///
    /// Fails without side effects when the nickname is blank, no mode is
    /// selected or the config is unusable.
    pub fn start(
        request: &SessionRequest,
        bounds: Bounds,
        config: GameConfig,
        seed: u64,
        surface: D,
        store: S,
    ) -> Result<Self, SessionError> {
        let (nickname, mode) = request.validate()?;
        config.validate()?;
        let state = GameState::new(nickname, bounds, config, seed);
        Ok(Self::from_state(state, mode, surface, store))
    }

    /// Wrap an existing game state.
    pub fn from_state(state: GameState, mode: GameplayMode, surface: D, store: S) -> Self {
        let id = Uuid::new_v4();
        info!(
            session = %id,
            player = %state.ship.name,
            ?mode,
            width = state.bounds.width,
            height = state.bounds.height,
            "Session created"
        );

        Self {
            id,
            mode,
            state,
            input: InputState::new(),
            surface,
            leaderboard: Leaderboard::new(store),
            score_saved: false,
        }
    }

    /// Fold an input event into the next tick's input.
    ///
    /// Returns `false` if the event was ignored (wrong mode or game over).
    pub fn handle_input(&mut self, event: InputEvent) -> bool {
        if self.is_finished() {
            return false;
        }
        self.input.apply(event, self.mode)
    }

    /// Run one tick at session time `now`, then draw the frame.
    ///
    /// A won game records its score on the leaderboard.
    pub fn step(&mut self, now: Duration) -> Result<TickResult, SessionError> {
        if self.is_finished() {
            return Err(SessionError::Finished);
        }

        let result = tick(&mut self.state, &mut self.input, now);
        render_frame(&mut self.surface, &self.state);

        for event in &result.events {
            if event.is_terminal() {
                info!(session = %self.id, tick = event.tick, data = ?event.data, "Session ended");
            } else {
                debug!(session = %self.id, tick = event.tick, data = ?event.data, "Game event");
            }
        }

        if result.finished.is_some() {
            self.input.clear();
        }

        if result.finished == Some(GamePhase::Won) {
            self.save_score()?;
        }

        Ok(result)
    }

    fn save_score(&mut self) -> Result<(), SessionError> {
        if self.score_saved {
            return Ok(());
        }
        let entry = ScoreEntry::new(self.state.ship.name.clone(), self.state.ship.score);
        self.leaderboard.submit(entry)?;
        self.score_saved = true;
        Ok(())
    }

    /// Summary of the session so far.
    pub fn outcome(&self) -> SessionOutcome {
        SessionOutcome {
            session_id: self.id,
            nickname: self.state.ship.name.clone(),
            phase: self.state.phase,
            score: self.state.ship.score,
            level: self.state.level,
            ticks: self.state.tick,
        }
    }

    /// Session identifier.
    pub fn id(&self) -> SessionId {
        self.id
    }

    /// Gameplay mode.
    pub fn mode(&self) -> GameplayMode {
        self.mode
    }

    /// Game state.
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Tuning constants in use.
    pub fn config(&self) -> &GameConfig {
        &self.state.config
    }

    /// Drawing surface.
    pub fn surface(&self) -> &D {
        &self.surface
    }

    /// Leaderboard.
    pub fn leaderboard(&self) -> &Leaderboard<S> {
        &self.leaderboard
    }

    /// Whether the game has ended.
    pub fn is_finished(&self) -> bool {
        self.state.phase.is_finished()
    }
}

/// Session errors.
#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    /// Nickname left blank.
    #[error("Nickname is required")]
    MissingNickname,

    /// No gameplay mode selected.
    #[error("Gameplay mode is required")]
    MissingMode,

    /// Game already won or lost.
    #[error("Session already finished")]
    Finished,

    /// Tuning constants failed validation.
    #[error("Invalid config: {0}")]
    Config(#[from] ConfigError),

    /// Leaderboard could not be saved.
    #[error("Score store error: {0}")]
    Store(#[from] StoreError),
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::vec2::Vec2;
    use crate::game::asteroid::Asteroid;
    use crate::game::input::Key;
    use crate::render::RecordingSurface;
    use crate::scores::store::MemoryStore;

    const BOUNDS: Bounds = Bounds::new(800.0, 600.0);

    fn one_rock_session(mode: GameplayMode) -> GameSession<RecordingSurface, MemoryStore> {
        let config = GameConfig { level_asteroid_counts: vec![1], ..GameConfig::default() };
        let rock = Asteroid::new(0, Vec2::new(400.0, 150.0), Vec2::ZERO, 2, 50.0);
        let state = GameState::with_asteroids("ada", BOUNDS, config, vec![rock]);
        GameSession::from_state(state, mode, RecordingSurface::new(), MemoryStore::new())
    }

    #[test]
    fn test_request_validation() {
        assert!(matches!(
            SessionRequest::from_form("   ", "keyboard").validate(),
            Err(SessionError::MissingNickname)
        ));
        assert!(matches!(
            SessionRequest::from_form("ada", "").validate(),
            Err(SessionError::MissingMode)
        ));

        let (nickname, mode) = SessionRequest::from_form(" ada ", "mouse").validate().unwrap();
        assert_eq!(nickname, "ada");
        assert_eq!(mode, GameplayMode::Mouse);
    }

    #[test]
    fn test_start_rejects_incomplete_form() {
        let request = SessionRequest { nickname: String::new(), mode: Some(GameplayMode::Both) };
        let result = GameSession::start(
            &request,
            BOUNDS,
            GameConfig::default(),
            1,
            RecordingSurface::new(),
            MemoryStore::new(),
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_start_rejects_invalid_config() {
        let request = SessionRequest::from_form("ada", "keyboard");
        for config in [
            GameConfig { level_asteroid_counts: vec![], ..GameConfig::default() },
            GameConfig { fps: 0, ..GameConfig::default() },
        ] {
            let result = GameSession::start(
                &request,
                BOUNDS,
                config,
                1,
                RecordingSurface::new(),
                MemoryStore::new(),
            );
            assert!(matches!(result, Err(SessionError::Config(ConfigError::Invalid { .. }))));
        }
    }

    #[test]
    fn test_start_spawns_level_one() {
        let request = SessionRequest::from_form("ada", "both");
        let session = GameSession::start(
            &request,
            BOUNDS,
            GameConfig::default(),
            42,
            RecordingSurface::new(),
            MemoryStore::new(),
        )
        .unwrap();

        assert_eq!(session.state().asteroids.len(), 5);
        assert_eq!(session.mode(), GameplayMode::Both);
        assert!(!session.is_finished());
    }

    #[test]
    fn test_mode_filters_input() {
        let mut session = one_rock_session(GameplayMode::Mouse);
        assert!(!session.handle_input(InputEvent::KeyDown(Key::Fire)));
        assert!(session.handle_input(InputEvent::PointerClick));
    }

    #[test]
    fn test_win_saves_score() {
        let mut session = one_rock_session(GameplayMode::Keyboard);
        let tick = session.config().tick_duration();

        // Two shots for a two-point rock, fired on separate ticks
        let mut now = Duration::ZERO;
        for _ in 0..2 {
            session.handle_input(InputEvent::KeyDown(Key::Fire));
            session.handle_input(InputEvent::KeyUp(Key::Fire));
            session.step(now).unwrap();
            now += tick;
        }
        while !session.is_finished() {
            session.step(now).unwrap();
            now += tick;
            assert!(session.state().tick < 100);
        }

        let outcome = session.outcome();
        assert_eq!(outcome.phase, GamePhase::Won);
        assert_eq!(outcome.score, 100);

        let stored = session.leaderboard().load().unwrap();
        assert_eq!(stored.len(), 1);
        assert_eq!(stored[0].nickname, "ada");
        assert_eq!(stored[0].score, 100);

        assert!(session.surface().texts().any(|t| t == "You Win!"));
        assert!(matches!(session.step(now), Err(SessionError::Finished)));
        assert!(!session.handle_input(InputEvent::KeyDown(Key::Fire)));
    }

    #[test]
    fn test_game_over_does_not_save() {
        let config = GameConfig { starting_lives: 1, ..GameConfig::default() };
        let rock = Asteroid::new(0, BOUNDS.center(), Vec2::ZERO, 2, 50.0);
        let state = GameState::with_asteroids("bob", BOUNDS, config, vec![rock]);
        let mut session =
            GameSession::from_state(state, GameplayMode::Keyboard, RecordingSurface::new(), MemoryStore::new());

        let result = session.step(Duration::ZERO).unwrap();
        assert_eq!(result.finished, Some(GamePhase::GameOver));
        assert!(session.leaderboard().load().unwrap().is_empty());
        assert!(session.surface().texts().any(|t| t == "Game Over"));
    }
}
