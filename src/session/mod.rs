//! Shared, lock-protected handle to the single game served by the process.
//!
//! Every read and every transition runs inside one critical section over the
//! whole [`GameState`], so no caller can observe a half-applied move. Logging
//! happens after the guard is dropped.

mod snapshot;

use std::sync::Arc;

use parking_lot::Mutex;

use crate::error::ModeError;
use crate::game::{GameMode, GameState, GameStatus, ModeRequest, MoveError, TickOutcome};

pub use snapshot::GameSnapshot;

#[derive(Debug, Clone)]
pub struct GameSession {
    state: Arc<Mutex<GameState>>,
}

impl GameSession {
    pub fn new(state: GameState) -> Self {
        GameSession {
            state: Arc::new(Mutex::new(state)),
        }
    }

    /// Copy of the current game, taken under the lock.
    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot::from(&*self.state.lock())
    }

    /// Play the active player's token in `column` and return the resulting
    /// state, captured in the same critical section as the move.
    pub fn apply_move(&self, column: i64) -> Result<GameSnapshot, MoveError> {
        let result = {
            let mut state = self.state.lock();
            state
                .apply_move(column)
                .map(|record| (record, GameSnapshot::from(&*state)))
        };

        match &result {
            Ok((record, _)) => {
                tracing::debug!(
                    player = record.player.id(),
                    row = record.row,
                    col = record.col,
                    "move accepted"
                );
                match record.status {
                    GameStatus::Won(player) => tracing::info!("{} wins", player.name()),
                    GameStatus::Draw => tracing::info!("board full, game drawn"),
                    GameStatus::InProgress => {}
                }
            }
            Err(MoveError::PlacementFailed) => {
                tracing::error!(column, "placement failed after column checks passed");
            }
            Err(err) => tracing::warn!(column, "move rejected: {}", err),
        }

        result.map(|(_, snapshot)| snapshot)
    }

    /// Start a new game on the current board size.
    pub fn reset(&self) -> GameSnapshot {
        let snapshot = {
            let mut state = self.state.lock();
            state.reset();
            GameSnapshot::from(&*state)
        };
        tracing::info!(rows = snapshot.rows, cols = snapshot.cols, "new game");
        snapshot
    }

    /// Change board size and start a new game. Rejected requests leave the
    /// current game untouched.
    pub fn configure_mode(&self, request: &ModeRequest) -> Result<GameSnapshot, ModeError> {
        let result = {
            let mut state = self.state.lock();
            request.resolve(state.dims()).map(|dims| {
                state.reset_with(dims);
                GameSnapshot::from(&*state)
            })
        };

        match &result {
            Ok(snapshot) => tracing::info!(
                mode = request.preset().map_or("custom", GameMode::name),
                rows = snapshot.rows,
                cols = snapshot.cols,
                connect_n = snapshot.connect_n,
                "mode configured"
            ),
            Err(err) => tracing::warn!("mode rejected: {}", err),
        }
        result
    }

    /// One clock second for the active player.
    pub fn tick(&self) -> TickOutcome {
        let outcome = self.state.lock().tick();
        if let TickOutcome::TimedOut(player) = outcome {
            tracing::info!("{} ran out of time, game drawn", player.name());
        }
        outcome
    }
}

impl Default for GameSession {
    fn default() -> Self {
        Self::new(GameState::default())
    }
}
