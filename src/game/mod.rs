//! Core Connect Four game logic: board representation, player types, win
//! detection, board presets and the game state machine.

mod board;
pub mod mode;
mod player;
pub mod rules;
mod state;

pub use board::{Board, BoardError, Cell};
pub use mode::{BoardDims, GameMode, ModeRequest};
pub use player::Player;
pub use rules::{check_win, find_win, Direction, WinningLine};
pub use state::{GameState, GameStatus, MoveError, MoveRecord, TickOutcome, INITIAL_CLOCK_SECS};
