//! Background clock: charges one second to the active player per interval.

use std::time::Duration;

use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio::time::{self, Instant, MissedTickBehavior};

use crate::game::TickOutcome;
use crate::session::GameSession;

pub struct ClockTicker {
    session: GameSession,
    interval: Duration,
}

impl ClockTicker {
    pub fn new(session: GameSession, interval: Duration) -> Self {
        ClockTicker { session, interval }
    }

    /// Start ticking on the current tokio runtime. The ticker fires for as
    /// long as the returned handle is not stopped, whether or not a game is
    /// running. The first tick lands one interval after this call, and
    /// ticks missed while the task was stalled are dropped, not replayed.
    pub fn spawn(self) -> TickerHandle {
        let (shutdown_tx, mut shutdown_rx) = mpsc::channel::<()>(1);

        let mut ticks = time::interval_at(Instant::now() + self.interval, self.interval);
        ticks.set_missed_tick_behavior(MissedTickBehavior::Skip);

        let task = tokio::spawn(async move {
            tracing::debug!(
                interval_ms = self.interval.as_millis() as u64,
                "clock ticker started"
            );

            loop {
                tokio::select! {
                    _ = ticks.tick() => {
                        if let TickOutcome::Decremented { player, remaining } = self.session.tick() {
                            tracing::trace!(player = player.id(), remaining, "tick");
                        }
                    }
                    _ = shutdown_rx.recv() => {
                        tracing::debug!("clock ticker stopped");
                        break;
                    }
                }
            }
        });

        TickerHandle { shutdown_tx, task }
    }
}

pub struct TickerHandle {
    shutdown_tx: mpsc::Sender<()>,
    task: JoinHandle<()>,
}

impl TickerHandle {
    /// Stop the ticker and wait for its task to exit.
    pub async fn stop(self) {
        let _ = self.shutdown_tx.send(()).await;
        if let Err(err) = self.task.await {
            tracing::error!("clock ticker task failed: {}", err);
        }
    }

    pub fn is_running(&self) -> bool {
        !self.task.is_finished()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::{BoardDims, GameState};

    async fn wait_until(timeout: Duration, mut condition: impl FnMut() -> bool) -> bool {
        let start = Instant::now();
        while start.elapsed() < timeout {
            if condition() {
                return true;
            }
            time::sleep(Duration::from_millis(5)).await;
        }
        condition()
    }

    #[tokio::test]
    async fn test_ticker_times_out_game_as_draw() {
        let session = GameSession::new(GameState::new(BoardDims::default(), 3));
        let handle = ClockTicker::new(session.clone(), Duration::from_millis(5)).spawn();

        assert!(wait_until(Duration::from_secs(5), || session.snapshot().is_draw).await);
        let snapshot = session.snapshot();
        assert_eq!(snapshot.winner, 0);
        assert_eq!(snapshot.timers.get(&1), Some(&0));
        assert_eq!(snapshot.timers.get(&2), Some(&3));

        // Keeps firing idle ticks without touching the finished game.
        time::sleep(Duration::from_millis(30)).await;
        assert!(handle.is_running());
        assert_eq!(session.snapshot(), snapshot);

        handle.stop().await;
    }

    #[tokio::test]
    async fn test_ticker_charges_active_player_only() {
        let session = GameSession::default();
        session.apply_move(0).unwrap();
        let handle = ClockTicker::new(session.clone(), Duration::from_millis(5)).spawn();

        assert!(
            wait_until(Duration::from_secs(5), || {
                session.snapshot().timers.get(&2).is_some_and(|&t| t <= 175)
            })
            .await
        );
        handle.stop().await;

        let snapshot = session.snapshot();
        assert_eq!(snapshot.timers.get(&1), Some(&180));
        assert!(!snapshot.is_draw);
    }

    #[tokio::test]
    async fn test_first_tick_waits_one_interval() {
        let session = GameSession::default();
        let handle = ClockTicker::new(session.clone(), Duration::from_millis(200)).spawn();

        time::sleep(Duration::from_millis(50)).await;
        assert_eq!(session.snapshot().timers.get(&1), Some(&180));
        handle.stop().await;
    }

    #[tokio::test(flavor = "current_thread")]
    async fn test_stalled_ticker_does_not_replay_missed_ticks() {
        let session = GameSession::default();
        let handle = ClockTicker::new(session.clone(), Duration::from_millis(100)).spawn();

        // Block the only runtime thread across roughly ten intervals.
        std::thread::sleep(Duration::from_millis(1050));
        time::sleep(Duration::from_millis(20)).await;

        let charged = 180 - session.snapshot().timers[&1];
        handle.stop().await;
        assert!((1..=2).contains(&charged), "charged {charged} seconds after stall");
    }

    #[tokio::test]
    async fn test_stop_is_prompt_with_long_interval() {
        let session = GameSession::default();
        let handle = ClockTicker::new(session.clone(), Duration::from_secs(3600)).spawn();

        let start = Instant::now();
        handle.stop().await;
        assert!(start.elapsed() < Duration::from_secs(5));
        assert_eq!(session.snapshot().timers.get(&1), Some(&180));
    }
}
