use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::game::{GameState, Player};

/// Point-in-time copy of a game, detached from the live state.
///
/// Encoding: cells and winner use 0 for none and 1/2 for the players,
/// timers are keyed by player id, and `last_row`/`last_col` are -1 before
/// the first move. Wire names are the ones the browser client served under
/// `/static` reads.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSnapshot {
    #[serde(rename = "plateau")]
    pub board: Vec<Vec<u8>>,
    pub rows: usize,
    pub cols: usize,
    pub connect_n: usize,
    #[serde(rename = "courant")]
    pub current_player: u8,
    #[serde(rename = "vainqueur")]
    pub winner: u8,
    #[serde(rename = "egalite")]
    pub is_draw: bool,
    pub timers: BTreeMap<u8, u32>,
    #[serde(rename = "dernier_row")]
    pub last_row: i64,
    #[serde(rename = "dernier_col")]
    pub last_col: i64,
}

impl From<&GameState> for GameSnapshot {
    fn from(state: &GameState) -> Self {
        let dims = state.dims();
        let (last_row, last_col) = match state.last_move() {
            Some((row, col)) => (row as i64, col as i64),
            None => (-1, -1),
        };

        GameSnapshot {
            board: state.board().snapshot(),
            rows: dims.rows(),
            cols: dims.cols(),
            connect_n: dims.connect_n(),
            current_player: state.active_player().id(),
            winner: state.winner().map_or(0, Player::id),
            is_draw: state.is_draw(),
            timers: [Player::One, Player::Two]
                .into_iter()
                .map(|player| (player.id(), state.remaining(player)))
                .collect(),
            last_row,
            last_col,
        }
    }
}
