//! Session Runner
//!
//! Drives a [`GameSession`] at the configured tick rate. Input arrives on an
//! mpsc channel and is drained before each tick, so events are only ever
//! read by the next tick. The loop stops when the game is won or lost;
//! dropping the receiver then detaches the input source.

use tokio::sync::mpsc;
use tokio::time::{interval, Instant, MissedTickBehavior};
use tracing::info;

use crate::game::input::InputEvent;
use crate::render::DrawingSurface;
use crate::scores::store::KeyValueStore;
use crate::session::session::{GameSession, SessionError, SessionOutcome};

/// Extra stop condition for a run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum RunLimit {
    /// Run until the game is won or lost
    #[default]
    Unlimited,
    /// Stop after this many ticks even if the game is still on
    Ticks(u64),
}

impl RunLimit {
    fn reached(self, ticks: u64) -> bool {
        match self {
            RunLimit::Unlimited => false,
            RunLimit::Ticks(max) => ticks >= max,
        }
    }
}

/// Run the session's tick loop to completion.
///
/// Ticks are never re-entered: a late tick is skipped rather than bursted.
pub async fn run_session<D, S>(
    session: &mut GameSession<D, S>,
    mut inputs: mpsc::Receiver<InputEvent>,
    limit: RunLimit,
) -> Result<SessionOutcome, SessionError>
where
    D: DrawingSurface,
    S: KeyValueStore,
{
    let tick_duration = session.config().tick_duration();
    let mut tick_interval = interval(tick_duration);
    tick_interval.set_missed_tick_behavior(MissedTickBehavior::Skip);

    let started = Instant::now();
    info!(session = %session.id(), ?tick_duration, "Session loop started");

    while !session.is_finished() && !limit.reached(session.state().tick) {
        tick_interval.tick().await;

        while let Ok(event) = inputs.try_recv() {
            session.handle_input(event);
        }

        session.step(started.elapsed())?;
    }

    // Detach the input source
    drop(inputs);

    let outcome = session.outcome();
    info!(
        session = %outcome.session_id,
        phase = ?outcome.phase,
        score = outcome.score,
        level = outcome.level,
        ticks = outcome.ticks,
        "Session loop stopped"
    );
    Ok(outcome)
}
