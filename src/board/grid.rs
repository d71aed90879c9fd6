//! Flattened board representation.
//!
//! A `FlatBoard` is the unit-cell view of a hierarchically subdivided board:
//! an N×N grid of colours, N a power of two, stored row-major in a single
//! vector. The shape invariants are checked once at construction so that
//! scoring code can index freely.

use std::borrow::Cow;
use std::ops::Index;

use serde::{Deserialize, Serialize};

use super::color::Color;

/// Errors that can occur when building a flattened board.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BoardError {
    #[error("board has no cells")]
    Empty,

    #[error("row {row} has {len} cells, expected {expected}")]
    NotSquare {
        row: usize,
        len: usize,
        expected: usize,
    },

    #[error("board side length {0} is not a power of two")]
    NotPowerOfTwo(usize),

    #[error("board side length {0} exceeds the maximum of {max}", max = MAX_SIZE)]
    TooLarge(usize),
}

/// Largest supported side length. Scores are `u32` cell counts, so N² must
/// fit in one.
pub const MAX_SIZE: usize = 1 << 15;

/// A square grid of unit-cell colours indexed by `(row, col)`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Vec<Color>>", into = "Vec<Vec<Color>>")]
pub struct FlatBoard {
    size: usize,
    cells: Vec<Color>,
}

/// Anything that can present itself as a flattened board.
///
/// Goals only ever read the board through this contract. Implementations
/// that already hold a flat grid should borrow it.
pub trait Flatten {
    fn flatten(&self) -> Cow<'_, FlatBoard>;
}

impl Flatten for FlatBoard {
    fn flatten(&self) -> Cow<'_, FlatBoard> {
        Cow::Borrowed(self)
    }
}

fn check_size(size: usize) -> Result<(), BoardError> {
    if size == 0 {
        return Err(BoardError::Empty);
    }
    if !size.is_power_of_two() {
        return Err(BoardError::NotPowerOfTwo(size));
    }
    if size > MAX_SIZE {
        return Err(BoardError::TooLarge(size));
    }
    Ok(())
}

impl FlatBoard {
    /// Builds a board from its rows, validating the shape.
    pub fn from_rows(rows: Vec<Vec<Color>>) -> Result<Self, BoardError> {
        let size = rows.len();
        check_size(size)?;

        let mut cells = Vec::with_capacity(size * size);
        for (row, colors) in rows.into_iter().enumerate() {
            if colors.len() != size {
                return Err(BoardError::NotSquare {
                    row,
                    len: colors.len(),
                    expected: size,
                });
            }
            cells.extend(colors);
        }

        Ok(FlatBoard { size, cells })
    }

    /// Builds a board of the given side length with every cell set to `color`.
    pub fn filled(size: usize, color: Color) -> Result<Self, BoardError> {
        check_size(size)?;
        Ok(FlatBoard {
            size,
            cells: vec![color; size * size],
        })
    }

    /// Side length N.
    #[inline]
    pub fn size(&self) -> usize {
        self.size
    }

    /// Returns the colour at `(row, col)`, or None when out of bounds.
    #[inline]
    pub fn get(&self, row: usize, col: usize) -> Option<Color> {
        if row < self.size && col < self.size {
            Some(self.cells[row * self.size + col])
        } else {
            None
        }
    }

    /// Overwrites one unit cell. Panics when out of bounds.
    pub fn set(&mut self, row: usize, col: usize, color: Color) {
        assert!(
            row < self.size && col < self.size,
            "cell ({}, {}) out of bounds for {}x{} board",
            row,
            col,
            self.size,
            self.size
        );
        self.cells[row * self.size + col] = color;
    }

    /// Builder-style variant of [`FlatBoard::set`].
    pub fn with_cell(mut self, row: usize, col: usize, color: Color) -> Self {
        self.set(row, col, color);
        self
    }

    /// The cells of one row, left to right.
    #[inline]
    pub fn row(&self, row: usize) -> &[Color] {
        &self.cells[row * self.size..(row + 1) * self.size]
    }

    /// Iterates over rows from top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[Color]> + '_ {
        self.cells.chunks_exact(self.size)
    }

    /// Counts the cells of a given colour.
    pub fn count(&self, color: Color) -> usize {
        self.cells.iter().filter(|&&c| c == color).count()
    }
}

impl Index<(usize, usize)> for FlatBoard {
    type Output = Color;

    #[inline]
    fn index(&self, (row, col): (usize, usize)) -> &Color {
        assert!(row < self.size && col < self.size, "cell out of bounds");
        &self.cells[row * self.size + col]
    }
}

impl TryFrom<Vec<Vec<Color>>> for FlatBoard {
    type Error = BoardError;

    fn try_from(rows: Vec<Vec<Color>>) -> Result<Self, Self::Error> {
        FlatBoard::from_rows(rows)
    }
}

impl From<FlatBoard> for Vec<Vec<Color>> {
    fn from(board: FlatBoard) -> Self {
        board.rows().map(|r| r.to_vec()).collect()
    }
}
