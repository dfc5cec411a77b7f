//! Auto-Play Driver — advances the active entry on a fixed interval.
//!
//! One ticker task is spawned per enable period. A ticker only acts while the
//! session still reports the epoch it was started in, checked under the
//! session lock, so nothing fires after cancellation even if the task has not
//! been aborted yet.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::Mutex;
use tokio::task::JoinHandle;
use tokio::time::{interval_at, Instant, MissedTickBehavior};
use tracing::debug;

use crate::timeline::session::Session;

pub type SharedSession = Arc<Mutex<Session>>;

/// Default time each entry stays active during auto-play.
pub const DEFAULT_INTERVAL: Duration = Duration::from_secs(5);

/// Spawns the ticker for `epoch`. The first advance happens one full
/// `period` after this call.
pub fn spawn_ticker(session: SharedSession, epoch: u64, period: Duration) -> JoinHandle<()> {
    tokio::spawn(async move {
        let mut ticker = interval_at(Instant::now() + period, period);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

        loop {
            ticker.tick().await;

            let mut session = session.lock().await;
            if !session.accepts_tick(epoch) {
                debug!(epoch, "auto-play ticker cancelled");
                break;
            }
            session.advance();
            debug!(epoch, active = ?session.active_id(), "auto-play advanced");
        }
    })
}
