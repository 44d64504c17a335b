//! Win detection by exhaustive origin scanning.
//!
//! Each undirected line is covered by walking four one-way rays from every
//! occupied cell, so no ray ever needs to look backwards.

use super::board::{Board, Cell};
use super::player::Player;

/// Ray directions, in the order they are tried from each origin.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Right,
    Down,
    DownRight,
    DownLeft,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Right,
        Direction::Down,
        Direction::DownRight,
        Direction::DownLeft,
    ];

    /// (row step, col step)
    pub fn delta(self) -> (isize, isize) {
        match self {
            Direction::Right => (0, 1),
            Direction::Down => (1, 0),
            Direction::DownRight => (1, 1),
            Direction::DownLeft => (1, -1),
        }
    }
}

/// First qualifying run found by [`find_win`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WinningLine {
    pub origin: (usize, usize),
    pub direction: Direction,
    pub player: Player,
    pub length: usize,
}

/// Scan origins in row-major order and rays in [`Direction::ALL`] order,
/// returning the first run of `connect_n` or more identical tokens.
pub fn find_win(board: &Board, connect_n: usize) -> Option<WinningLine> {
    for row in 0..board.rows() {
        for col in 0..board.cols() {
            let cell = board.get(row, col);
            let Some(player) = Player::from_cell(cell) else {
                continue;
            };

            for direction in Direction::ALL {
                let length = run_length(board, row, col, direction, cell);
                if length >= connect_n {
                    return Some(WinningLine {
                        origin: (row, col),
                        direction,
                        player,
                        length,
                    });
                }
            }
        }
    }
    None
}

/// Check whether any run of `connect_n` exists on the board
pub fn check_win(board: &Board, connect_n: usize) -> bool {
    find_win(board, connect_n).is_some()
}

/// Count consecutive `cell` tokens starting at (and including) the origin.
fn run_length(board: &Board, row: usize, col: usize, direction: Direction, cell: Cell) -> usize {
    let (dr, dc) = direction.delta();
    let mut count = 1;
    let mut r = row as isize + dr;
    let mut c = col as isize + dc;

    while r >= 0
        && c >= 0
        && (r as usize) < board.rows()
        && (c as usize) < board.cols()
        && board.get(r as usize, c as usize) == cell
    {
        count += 1;
        r += dr;
        c += dc;
    }

    count
}
