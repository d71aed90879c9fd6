//! Grid notation encoding and decoding.
//!
//! A compact single-token form of a flattened board: rows top to bottom
//! separated by '/', one palette code per cell, left to right.
//!
//! Example (2×2, blue/yellow checkerboard): `by/yb`

use crate::board::{BoardError, Color, FlatBoard};

/// Errors that can occur during grid notation parsing or encoding.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum NotationError {
    #[error("empty grid notation")]
    Empty,

    #[error("invalid colour code '{code}' in row {row}")]
    InvalidCode { row: usize, code: char },

    #[error("colour {0} has no palette code")]
    UnnamedColor(Color),

    #[error(transparent)]
    Board(#[from] BoardError),
}

/// Parses a single row of palette codes.
fn parse_row(row: usize, s: &str) -> Result<Vec<Color>, NotationError> {
    s.chars()
        .map(|code| Color::from_code(code).ok_or(NotationError::InvalidCode { row, code }))
        .collect()
}

/// Parses grid notation into a validated board.
pub fn parse_grid(s: &str) -> Result<FlatBoard, NotationError> {
    let s = s.trim();
    if s.is_empty() {
        return Err(NotationError::Empty);
    }

    let rows = s
        .split('/')
        .enumerate()
        .map(|(i, row)| parse_row(i, row))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(FlatBoard::from_rows(rows)?)
}

/// Encodes a board as grid notation. Fails if any cell is off-palette.
pub fn encode_grid(board: &FlatBoard) -> Result<String, NotationError> {
    let n = board.size();
    let mut out = String::with_capacity(n * (n + 1));

    for (i, row) in board.rows().enumerate() {
        if i > 0 {
            out.push('/');
        }
        for &color in row {
            out.push(color.code().ok_or(NotationError::UnnamedColor(color))?);
        }
    }

    Ok(out)
}
