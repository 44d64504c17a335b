use serde::{Deserialize, Serialize};

use crate::error::ModeError;

/// Largest accepted row or column count.
pub const MAX_DIMENSION: usize = 64;

/// Run length used by every named preset and by default for custom boards.
pub const DEFAULT_CONNECT_N: usize = 4;

/// Board geometry plus the run length needed to win.
///
/// Always constructed through [`BoardDims::new`], so `connect_n` fits on
/// the board in at least one direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct BoardDims {
    rows: usize,
    cols: usize,
    connect_n: usize,
}

impl BoardDims {
    pub fn new(rows: usize, cols: usize, connect_n: usize) -> Result<Self, ModeError> {
        if rows == 0 || cols == 0 || rows > MAX_DIMENSION || cols > MAX_DIMENSION {
            return Err(ModeError::InvalidDimensions { rows, cols });
        }
        if connect_n < 2 {
            return Err(ModeError::ConnectTooShort(connect_n as i64));
        }
        if connect_n > rows.max(cols) {
            return Err(ModeError::ConnectTooLong {
                connect_n,
                rows,
                cols,
            });
        }
        Ok(BoardDims {
            rows,
            cols,
            connect_n,
        })
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn connect_n(&self) -> usize {
        self.connect_n
    }
}

impl Default for BoardDims {
    fn default() -> Self {
        GameMode::Normal.dims()
    }
}

/// Named board presets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameMode {
    Normal,
    Large,
    Wide,
}

impl GameMode {
    pub fn from_name(name: &str) -> Option<GameMode> {
        match name {
            "normal" => Some(GameMode::Normal),
            "large" => Some(GameMode::Large),
            "9x10" => Some(GameMode::Wide),
            _ => None,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            GameMode::Normal => "normal",
            GameMode::Large => "large",
            GameMode::Wide => "9x10",
        }
    }

    pub fn dims(self) -> BoardDims {
        let (rows, cols) = match self {
            GameMode::Normal => (6, 7),
            GameMode::Large => (11, 9),
            GameMode::Wide => (9, 10),
        };
        BoardDims {
            rows,
            cols,
            connect_n: DEFAULT_CONNECT_N,
        }
    }
}

/// A mode change as submitted by a client: a preset name, explicit
/// dimensions, or both (the name wins when it is recognised).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ModeRequest {
    pub mode: Option<String>,
    pub rows: Option<i64>,
    pub cols: Option<i64>,
    pub connect_n: Option<i64>,
}

impl ModeRequest {
    pub fn named(name: impl Into<String>) -> Self {
        ModeRequest {
            mode: Some(name.into()),
            ..Default::default()
        }
    }

    pub fn custom(rows: i64, cols: i64) -> Self {
        ModeRequest {
            rows: Some(rows),
            cols: Some(cols),
            ..Default::default()
        }
    }

    /// The preset named by this request, if it names one.
    pub fn preset(&self) -> Option<GameMode> {
        self.mode.as_deref().and_then(GameMode::from_name)
    }

    /// Resolve to the dimensions the next game should use.
    ///
    /// An unknown name without two positive dimensions keeps `current`.
    pub fn resolve(&self, current: BoardDims) -> Result<BoardDims, ModeError> {
        if let Some(mode) = self.preset() {
            return Ok(mode.dims());
        }

        match (self.rows, self.cols) {
            (Some(rows), Some(cols)) if rows > 0 && cols > 0 => {
                let connect_n = match self.connect_n {
                    None => DEFAULT_CONNECT_N,
                    Some(n) => usize::try_from(n).map_err(|_| ModeError::ConnectTooShort(n))?,
                };
                BoardDims::new(clamp_dimension(rows), clamp_dimension(cols), connect_n)
            }
            _ => Ok(current),
        }
    }
}

/// Positive request values that overflow `usize` still fail the
/// `MAX_DIMENSION` check instead of wrapping.
fn clamp_dimension(value: i64) -> usize {
    usize::try_from(value).unwrap_or(usize::MAX)
}
