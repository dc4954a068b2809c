//! Errors that may be encountered when constructing a [`Grid`](crate::Grid)
//! from external input.

use crate::board::positions::{block, col, row};

/// An invalid sudoku entry encountered during parsing.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct InvalidEntry {
    /// Cell number goes from 0..=80, 0..=8 for the first row, 9..=17 for the 2nd and so on
    pub cell: u8,
    /// The parsed invalid char
    pub ch: char,
}

impl InvalidEntry {
    /// Row index from 0..=8, topmost row is 0
    #[inline]
    pub fn row(self) -> u8 {
        row(self.cell)
    }
    /// Column index from 0..=8, leftmost col is 0
    #[inline]
    pub fn col(self) -> u8 {
        col(self.cell)
    }
    /// Block index from 0..=8, numbered left to right, top to bottom
    #[inline]
    pub fn block(self) -> u8 {
        block(self.cell)
    }
}

/// Error for [`Grid::from_str_line`](crate::Grid::from_str_line)
#[derive(Clone, Debug, Eq, Hash, PartialEq, thiserror::Error)]
pub enum LineParseError {
    /// Accepted values are the numbers 1..=9 and '0', '.' or '_' for empty cells
    #[error("cell {} contains invalid character '{}'", .0.cell, .0.ch)]
    InvalidEntry(InvalidEntry),
    /// Contains the number of cells supplied
    #[error("sudoku contains {0} cells instead of required 81")]
    NotEnoughCells(u8),
    /// Emitted if more than 81 cell characters are supplied
    #[error("sudoku contains more than 81 cells")]
    TooManyCells,
    /// Comments after the 81st cell must be delimited by a space or tab
    #[error("missing comment delimiter")]
    MissingCommentDelimiter,
}

/// Error for [`Grid::from_bytes`](crate::Grid::from_bytes)
#[derive(Debug, thiserror::Error)]
#[error("byte array contains entries >9")]
pub struct FromBytesError(pub(crate) ());
