//! Asteroids Arcade
//!
//! Headless demo host. Runs one session driven by a simple autopilot, draws
//! into a recording surface and keeps the leaderboard in a directory.
//!
//! ```text
//! asteroids-arcade               # play a demo session
//! asteroids-arcade leaderboard   # show the saved leaderboard
//! ```
//!
//! Environment:
//! - `ASTEROIDS_CONFIG`: JSON file overlaying the default tuning
//! - `ASTEROIDS_DATA_DIR`: leaderboard directory (default `./asteroids-data`)
//! - `ASTEROIDS_NICKNAME`, `ASTEROIDS_MODE`: session form values

use std::time::Duration;

use anyhow::Context;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tokio::sync::mpsc;
use tracing::{debug, info};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use asteroids_arcade::{
    render::render_leaderboard,
    session::SessionError,
    Bounds, FileStore, GameConfig, GameSession, InputEvent, Leaderboard, RecordingSurface,
    RunLimit, SessionRequest, VERSION, run_session,
};

/// Demo surface size.
const DEMO_BOUNDS: Bounds = Bounds::new(1280.0, 720.0);

/// Demo sessions stop after this many seconds of play.
const DEMO_SECONDS: u64 = 120;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let subscriber = FmtSubscriber::builder().with_env_filter(filter).finish();
    tracing::subscriber::set_global_default(subscriber)
        .context("Failed to set tracing subscriber")?;

    info!("Asteroids Arcade v{}", VERSION);

    let config = load_config()?;
    let data_dir = std::env::var("ASTEROIDS_DATA_DIR").unwrap_or_else(|_| "asteroids-data".into());
    let store = FileStore::new(data_dir);
    info!("Leaderboard directory: {}", store.dir().display());

    match std::env::args().nth(1).as_deref() {
        Some("leaderboard") => show_leaderboard(store, &config),
        _ => demo_session(store, config).await,
    }
}

fn load_config() -> anyhow::Result<GameConfig> {
    match std::env::var("ASTEROIDS_CONFIG") {
        Ok(path) => {
            let config = GameConfig::load(&path)
                .with_context(|| format!("Failed to load config from {path}"))?;
            info!("Loaded config from {}", path);
            Ok(config)
        }
        Err(_) => Ok(GameConfig::default()),
    }
}

/// Render the saved leaderboard and log each line.
fn show_leaderboard(store: FileStore, config: &GameConfig) -> anyhow::Result<()> {
    let leaderboard = Leaderboard::new(store);
    let entries = leaderboard.load().context("Failed to read leaderboard")?;

    let mut surface = RecordingSurface::new();
    render_leaderboard(&mut surface, DEMO_BOUNDS, &entries, config.hud_font_size);
    for line in surface.texts() {
        info!("{}", line);
    }
    Ok(())
}

/// Play one session with the autopilot at the controls.
async fn demo_session(store: FileStore, config: GameConfig) -> anyhow::Result<()> {
    let nickname = std::env::var("ASTEROIDS_NICKNAME").unwrap_or_else(|_| "pilot".into());
    let mode = std::env::var("ASTEROIDS_MODE").unwrap_or_else(|_| "keyboard".into());
    let request = SessionRequest::from_form(&nickname, &mode);

    let seed: u64 = rand::random();
    let limit = RunLimit::Ticks(config.fps as u64 * DEMO_SECONDS);

    let mut session =
        match GameSession::start(&request, DEMO_BOUNDS, config, seed, RecordingSurface::new(), store) {
            Ok(session) => session,
            Err(e @ (SessionError::MissingNickname | SessionError::MissingMode)) => {
                // An incomplete form simply does not start a game
                debug!("Session not started: {}", e);
                return Ok(());
            }
            Err(e) => return Err(e.into()),
        };
    info!("Session {} started (seed {})", session.id(), seed);

    let (tx, rx) = mpsc::channel(64);
    let pilot = tokio::spawn(autopilot(tx, seed));

    let outcome = run_session(&mut session, rx, limit).await?;
    pilot.await.context("Autopilot task failed")?;

    info!(
        "{} finished: {:?}, score {}, level {}, {} ticks",
        outcome.nickname, outcome.phase, outcome.score, outcome.level, outcome.ticks
    );
    Ok(())
}

/// Spin, thrust in bursts and fire at a steady rate until the session stops listening.
///
/// Keys are sent by name, as a keyboard host would.
async fn autopilot(tx: mpsc::Sender<InputEvent>, seed: u64) {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut pace = tokio::time::interval(Duration::from_millis(100));
    let mut turning = "z";

    loop {
        pace.tick().await;

        let mut burst: Vec<InputEvent> = Vec::new();
        burst.extend(InputEvent::key_down("x"));
        burst.extend(InputEvent::key_up("x"));
        if rng.gen_bool(0.1) {
            burst.extend(InputEvent::key_up(turning));
            turning = if turning == "z" { "c" } else { "z" };
            burst.extend(InputEvent::key_down(turning));
        }
        burst.extend(if rng.gen_bool(0.3) {
            InputEvent::key_down("ArrowUp")
        } else {
            InputEvent::key_up("ArrowUp")
        });

        for event in burst {
            if tx.send(event).await.is_err() {
                return;
            }
        }
    }
}
