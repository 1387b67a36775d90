//! Game Configuration
//!
//! [`GameConfig`] gathers every tuning constant of the simulation. The
//! compiled defaults reproduce the classic arcade feel; a JSON file can
//! override any subset of them:
//!
//! ```json
//! { "fps": 60, "level_asteroid_counts": [3, 5, 8, 12] }
//! ```
//!
//! Missing keys fall back to the defaults.

use std::path::Path;
use std::time::Duration;

use serde::{Serialize, Deserialize};

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Config file could not be read.
    #[error("Failed to read config: {0}")]
    Io(#[from] std::io::Error),

    /// Config file is not valid JSON for [`GameConfig`].
    #[error("Failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),

    /// A value is outside its usable range.
    #[error("Invalid value for {field}: {reason}")]
    Invalid {
        /// Offending field name.
        field: &'static str,
        /// Why it was rejected.
        reason: &'static str,
    },
}

/// Runtime-tunable gameplay configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    // ── Timing ──────────────────────────────────────────────────────────────
    /// Simulation rate (ticks per second)
    pub fps: u32,

    // ── Ship ────────────────────────────────────────────────────────────────
    /// Ship size in pixels (radius is half of it)
    pub ship_size: f64,
    /// Rotation speed in degrees per second
    pub rotation_speed_degrees: f64,
    /// Thrust acceleration in pixels per tick, per second held
    pub thrust_acceleration: f64,
    /// Lives at session start
    pub starting_lives: u32,
    /// Invulnerability window after a hit, in milliseconds
    pub invulnerability_ms: u64,

    // ── Projectiles ─────────────────────────────────────────────────────────
    /// Projectile speed in pixels per second
    pub projectile_speed: f64,
    /// Projectile radius in pixels
    pub projectile_radius: f64,
    /// Maximum projectiles alive at once
    pub max_projectiles: usize,

    // ── Asteroids ───────────────────────────────────────────────────────────
    /// Asteroid size constant (radius = size * hit_points / 2)
    pub asteroid_size: f64,
    /// Maximum asteroid speed in pixels per second
    pub asteroid_speed: f64,
    /// Maximum hit points drawn at spawn
    pub asteroid_max_hit_points: u32,
    /// Score per initial hit point of a destroyed asteroid
    pub score_multiplier: u32,
    /// Rejection-sampling attempts before the grid fallback
    pub placement_attempts: u32,

    // ── Levels ──────────────────────────────────────────────────────────────
    /// Asteroid count per level; its length is the final level
    pub level_asteroid_counts: Vec<usize>,

    // ── HUD ─────────────────────────────────────────────────────────────────
    /// HUD font size in pixels
    pub hud_font_size: f64,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            fps: 30,
            ship_size: 30.0,
            rotation_speed_degrees: 360.0,
            thrust_acceleration: 5.0,
            starting_lives: 3,
            invulnerability_ms: 3000,
            projectile_speed: 500.0,
            projectile_radius: 3.0,
            max_projectiles: 3,
            asteroid_size: 50.0,
            asteroid_speed: 100.0,
            asteroid_max_hit_points: 4,
            score_multiplier: 50,
            placement_attempts: 1000,
            level_asteroid_counts: vec![5, 7, 10],
            hud_font_size: 20.0,
        }
    }
}

impl GameConfig {
    /// Parse a JSON document, keeping defaults for missing keys.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a JSON config file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_json(&contents)
    }

    /// Reject values the simulation cannot run with.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.fps == 0 {
            return Err(ConfigError::Invalid { field: "fps", reason: "must be positive" });
        }
        if self.ship_size <= 0.0 {
            return Err(ConfigError::Invalid { field: "ship_size", reason: "must be positive" });
        }
        if self.asteroid_size <= 0.0 {
            return Err(ConfigError::Invalid { field: "asteroid_size", reason: "must be positive" });
        }
        if self.asteroid_max_hit_points == 0 {
            return Err(ConfigError::Invalid {
                field: "asteroid_max_hit_points",
                reason: "must be at least 1",
            });
        }
        if self.max_projectiles == 0 {
            return Err(ConfigError::Invalid { field: "max_projectiles", reason: "must be at least 1" });
        }
        if self.level_asteroid_counts.is_empty() {
            return Err(ConfigError::Invalid {
                field: "level_asteroid_counts",
                reason: "needs at least one level",
            });
        }
        if self.level_asteroid_counts.contains(&0) {
            return Err(ConfigError::Invalid {
                field: "level_asteroid_counts",
                reason: "every level needs at least one asteroid",
            });
        }
        Ok(())
    }

    /// Duration of one tick.
    pub fn tick_duration(&self) -> Duration {
        Duration::from_micros(1_000_000 / self.fps.max(1) as u64)
    }

    /// Invulnerability window.
    pub fn invulnerability(&self) -> Duration {
        Duration::from_millis(self.invulnerability_ms)
    }

    /// Ship collision radius.
    pub fn ship_radius(&self) -> f64 {
        self.ship_size / 2.0
    }

    /// Number of the final level.
    pub fn max_level(&self) -> u32 {
        self.level_asteroid_counts.len() as u32
    }

    /// Asteroids spawned for `level` (1-based). Out-of-range levels spawn none.
    pub fn asteroids_for_level(&self, level: u32) -> usize {
        level
            .checked_sub(1)
            .and_then(|i| self.level_asteroid_counts.get(i as usize))
            .copied()
            .unwrap_or(0)
    }
}
