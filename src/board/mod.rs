//! Types for cells, digits and grids on a sudoku board
mod candidates;
mod cell_state;
mod digit;
mod grid;
pub mod positions;

pub(crate) use self::candidates::CandidateGrid;
pub(crate) use self::cell_state::CellState;
pub(crate) use self::positions::*;

pub use self::digit::Digit;
pub use self::grid::Grid;
pub use self::positions::Cell;
