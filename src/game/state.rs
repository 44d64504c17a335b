use super::board::{Board, BoardError};
use super::mode::BoardDims;
use super::player::Player;
use super::rules;

/// Seconds on each player's clock at the start of a game.
pub const INITIAL_CLOCK_SECS: u32 = 180;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    InProgress,
    Won(Player),
    Draw,
}

impl GameStatus {
    pub fn is_terminal(self) -> bool {
        !matches!(self, GameStatus::InProgress)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MoveError {
    #[error("game is over")]
    GameOver,
    #[error("column is out of range")]
    InvalidColumn,
    #[error("column is full")]
    ColumnFull,
    #[error("token could not be placed")]
    PlacementFailed,
}

/// An accepted move and the status it left the game in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveRecord {
    pub player: Player,
    pub row: usize,
    pub col: usize,
    pub status: GameStatus,
}

/// Result of one clock second.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// Game already over; nothing changed.
    Idle,
    Decremented { player: Player, remaining: u32 },
    /// The player's clock hit zero and the game ended in a draw.
    TimedOut(Player),
}

/// Authoritative state of one game. Not synchronised; see
/// [`crate::session::GameSession`] for the shared handle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    board: Board,
    dims: BoardDims,
    active: Player,
    status: GameStatus,
    clocks: [u32; 2],
    last_move: Option<(usize, usize)>,
    initial_clock: u32,
}

impl GameState {
    pub fn new(dims: BoardDims, initial_clock: u32) -> Self {
        GameState {
            board: Board::new(dims.rows(), dims.cols()),
            dims,
            active: Player::One, // Player 1 starts
            status: GameStatus::InProgress,
            clocks: [initial_clock; 2],
            last_move: None,
            initial_clock,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn dims(&self) -> BoardDims {
        self.dims
    }

    pub fn active_player(&self) -> Player {
        self.active
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn is_terminal(&self) -> bool {
        self.status.is_terminal()
    }

    pub fn winner(&self) -> Option<Player> {
        match self.status {
            GameStatus::Won(player) => Some(player),
            _ => None,
        }
    }

    pub fn is_draw(&self) -> bool {
        self.status == GameStatus::Draw
    }

    /// Remaining seconds on a player's clock
    pub fn remaining(&self, player: Player) -> u32 {
        self.clocks[player.index()]
    }

    pub fn last_move(&self) -> Option<(usize, usize)> {
        self.last_move
    }

    /// Drop the active player's token into `column`.
    ///
    /// All rejections happen before the board is touched.
    pub fn apply_move(&mut self, column: i64) -> Result<MoveRecord, MoveError> {
        if self.is_terminal() {
            return Err(MoveError::GameOver);
        }

        let col = usize::try_from(column)
            .ok()
            .filter(|&col| col < self.board.cols())
            .ok_or(MoveError::InvalidColumn)?;

        if self.board.is_column_full(col) {
            return Err(MoveError::ColumnFull);
        }

        let player = self.active;
        let row = self
            .board
            .drop_piece(col, player.to_cell())
            .map_err(|e| match e {
                BoardError::ColumnFull | BoardError::InvalidColumn => MoveError::PlacementFailed,
            })?;
        self.last_move = Some((row, col));

        if rules::check_win(&self.board, self.dims.connect_n()) {
            self.status = GameStatus::Won(player);
        } else if self.board.is_full() {
            self.status = GameStatus::Draw;
        } else {
            self.active = player.other();
        }

        Ok(MoveRecord {
            player,
            row,
            col,
            status: self.status,
        })
    }

    /// Start a fresh game on the current dimensions.
    pub fn reset(&mut self) {
        self.board = Board::new(self.dims.rows(), self.dims.cols());
        self.active = Player::One;
        self.status = GameStatus::InProgress;
        self.clocks = [self.initial_clock; 2];
        self.last_move = None;
    }

    /// Switch to new dimensions and start a fresh game.
    pub fn reset_with(&mut self, dims: BoardDims) {
        self.dims = dims;
        self.reset();
    }

    /// Advance the active player's clock by one second.
    pub fn tick(&mut self) -> TickOutcome {
        if self.is_terminal() {
            return TickOutcome::Idle;
        }

        let player = self.active;
        let clock = &mut self.clocks[player.index()];
        *clock = clock.saturating_sub(1);

        if *clock == 0 {
            // Running out of time ends the game as a draw, not a loss.
            self.status = GameStatus::Draw;
            TickOutcome::TimedOut(player)
        } else {
            TickOutcome::Decremented {
                player,
                remaining: *clock,
            }
        }
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(BoardDims::default(), INITIAL_CLOCK_SECS)
    }
}
