//! Serialises every session mutation and keeps the auto-play ticker in step
//! with the session's auto-play epoch.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::Mutex;
use tokio::task::JoinHandle;
use tracing::info;

use crate::timeline::autoplay::{spawn_ticker, SharedSession};
use crate::timeline::session::{Action, Session, SessionError, SessionSnapshot};

#[derive(Clone)]
pub struct TimelineController {
    session: SharedSession,
    ticker: Arc<Mutex<Option<JoinHandle<()>>>>,
    interval: Duration,
}

impl TimelineController {
    pub fn new(session: Session, interval: Duration) -> Self {
        Self {
            session: Arc::new(Mutex::new(session)),
            ticker: Arc::new(Mutex::new(None)),
            interval,
        }
    }

    /// Applies a named action and returns the resulting view.
    pub async fn dispatch(&self, action: Action) -> Result<SessionSnapshot, SessionError> {
        self.write(|session| {
            session.apply(action)?;
            Ok(session.snapshot())
        })
        .await
    }

    /// Runs `f` against the session without mutating it.
    pub async fn read<R>(&self, f: impl FnOnce(&Session) -> R) -> R {
        let session = self.session.lock().await;
        f(&*session)
    }

    /// Runs `f` with exclusive access. If `f` flips auto-play, the old ticker
    /// is aborted and, when still enabled, a fresh one is started.
    pub async fn write<R>(&self, f: impl FnOnce(&mut Session) -> R) -> R {
        let mut session = self.session.lock().await;
        let epoch_before = session.autoplay_epoch();
        let result = f(&mut *session);

        if session.autoplay_epoch() != epoch_before {
            let mut ticker = self.ticker.lock().await;
            if let Some(handle) = ticker.take() {
                handle.abort();
            }
            if session.is_ticking() {
                info!(interval_ms = self.interval.as_millis() as u64, "auto-play started");
                *ticker = Some(spawn_ticker(
                    Arc::clone(&self.session),
                    session.autoplay_epoch(),
                    self.interval,
                ));
            } else {
                info!("auto-play stopped");
            }
        }

        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::timeline::seed::{seed_entries, seed_profile};

    const TICK: Duration = Duration::from_secs(5);

    fn controller() -> TimelineController {
        TimelineController::new(Session::new(seed_profile(), seed_entries()), TICK)
    }

    /// Lets spawned tickers observe the advanced clock.
    async fn settle() {
        for _ in 0..10 {
            tokio::task::yield_now().await;
        }
    }

    async fn elapse(d: Duration) {
        tokio::time::advance(d).await;
        settle().await;
    }

    async fn active(c: &TimelineController) -> Option<String> {
        c.read(|s| s.active_id().map(str::to_string)).await
    }

    #[tokio::test(start_paused = true)]
    async fn test_autoplay_visits_entries_in_order_and_wraps() {
        let c = controller();
        c.dispatch(Action::Start).await.unwrap();
        settle().await;

        let mut visited = vec![active(&c).await.unwrap()];
        for _ in 0..7 {
            elapse(TICK).await;
            visited.push(active(&c).await.unwrap());
        }
        assert_eq!(visited, vec!["1", "2", "3", "4", "5", "6", "1", "2"]);
    }

    #[tokio::test(start_paused = true)]
    async fn test_no_transition_before_interval_elapses() {
        let c = controller();
        c.dispatch(Action::Start).await.unwrap();
        settle().await;

        elapse(TICK - Duration::from_millis(1)).await;
        assert_eq!(active(&c).await.as_deref(), Some("1"));
        elapse(Duration::from_millis(1)).await;
        assert_eq!(active(&c).await.as_deref(), Some("2"));
    }

    #[tokio::test(start_paused = true)]
    async fn test_manual_select_stops_playback() {
        let c = controller();
        c.dispatch(Action::Start).await.unwrap();
        settle().await;
        elapse(TICK).await;
        assert_eq!(active(&c).await.as_deref(), Some("2"));

        let snapshot = c.dispatch(Action::Select("5".to_string())).await.unwrap();
        assert!(!snapshot.autoplay);

        elapse(TICK * 4).await;
        assert_eq!(active(&c).await.as_deref(), Some("5"));
    }

    #[tokio::test(start_paused = true)]
    async fn test_disable_cancels_pending_tick() {
        let c = controller();
        c.dispatch(Action::Start).await.unwrap();
        settle().await;

        elapse(TICK - Duration::from_millis(10)).await;
        c.dispatch(Action::SetAutoPlay(false)).await.unwrap();
        elapse(TICK * 3).await;
        assert_eq!(active(&c).await.as_deref(), Some("1"));
    }

    #[tokio::test(start_paused = true)]
    async fn test_reset_cancels_timer() {
        let c = controller();
        c.dispatch(Action::Start).await.unwrap();
        settle().await;
        c.dispatch(Action::Reset).await.unwrap();

        elapse(TICK * 3).await;
        assert_eq!(active(&c).await, None);
        assert!(!c.read(|s| s.is_entered()).await);
    }

    #[tokio::test(start_paused = true)]
    async fn test_reenable_restarts_interval_from_now() {
        let c = controller();
        c.dispatch(Action::Start).await.unwrap();
        settle().await;

        elapse(Duration::from_secs(4)).await;
        c.dispatch(Action::SetAutoPlay(false)).await.unwrap();
        elapse(Duration::from_secs(3)).await;
        c.dispatch(Action::SetAutoPlay(true)).await.unwrap();
        settle().await;

        // The previous period's elapsed 4s is not carried over.
        elapse(Duration::from_secs(4)).await;
        assert_eq!(active(&c).await.as_deref(), Some("1"));
        elapse(Duration::from_secs(1)).await;
        assert_eq!(active(&c).await.as_deref(), Some("2"));
    }

    #[tokio::test(start_paused = true)]
    async fn test_autoplay_with_no_entries_does_not_panic() {
        let c = TimelineController::new(Session::new(seed_profile(), Vec::new()), TICK);
        c.dispatch(Action::Start).await.unwrap();
        settle().await;
        elapse(TICK * 2).await;
        assert_eq!(active(&c).await, None);
    }
}
