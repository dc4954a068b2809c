use crate::bitset::Set;
use crate::board::{Cell, CellState, Digit, Grid};
use crate::consts::N_CELLS;
use crate::helper::{CellArray, Unsolvable};

/// The working representation of the deduction strategies: one [`CellState`]
/// per cell.
///
/// Candidate grids are value snapshots. Every strategy consumes one grid and
/// produces a new one; no strategy mutates a grid other than the one it is
/// currently producing.
#[derive(Copy, Clone, Debug, PartialEq)]
pub(crate) struct CandidateGrid {
    cells: CellArray<CellState>,
}

impl CandidateGrid {
    /// Builds the initial grid from an entry grid. Entered digits are fixed;
    /// empty entries stay `Unset` until the first propagation pass assigns
    /// their candidates.
    pub(crate) fn from_entries(entries: &Grid) -> CandidateGrid {
        let mut cells = CellArray([CellState::Unset; N_CELLS]);
        for cell in Cell::all() {
            if let Some(digit) = entries.get(cell) {
                cells[cell] = CellState::Digit(digit);
            }
        }
        CandidateGrid { cells }
    }

    /// Projects the solved cells onto a value grid; unsolved and unset cells
    /// map to `0`. The inverse of [`CandidateGrid::from_entries`] on fully
    /// solved grids.
    pub(crate) fn to_value_grid(&self) -> Grid {
        let mut values = [0; N_CELLS];
        for cell in Cell::all() {
            if let Some(digit) = self.cells[cell].solved() {
                values[cell.as_index()] = digit.get();
            }
        }
        Grid(values)
    }

    pub(crate) fn state(&self, cell: Cell) -> CellState {
        self.cells[cell]
    }

    pub(crate) fn set_state(&mut self, cell: Cell, state: CellState) {
        self.cells[cell] = state;
    }

    pub(crate) fn set_digit(&mut self, cell: Cell, digit: Digit) {
        self.cells[cell] = CellState::Digit(digit);
    }

    /// Checks whether every cell is fixed to a digit.
    pub(crate) fn is_fully_solved(&self) -> bool {
        self.cells.iter().all(|state| state.solved().is_some())
    }

    /// Removes `digits` from the candidates of `cell` and reports whether
    /// anything changed.
    ///
    /// A cell narrowed to a single candidate becomes solved. A cell left with
    /// no candidate at all (likewise a solved cell whose own digit is
    /// removed) means the puzzle has no solution along this branch.
    pub(crate) fn remove_candidates(
        &mut self,
        cell: Cell,
        digits: Set<Digit>,
    ) -> Result<bool, Unsolvable> {
        match self.cells[cell] {
            CellState::Unset => Ok(false),
            CellState::Digit(digit) => {
                if digits.contains(digit) {
                    return Err(Unsolvable);
                }
                Ok(false)
            }
            CellState::Candidates(candidates) => {
                let remaining = candidates.without(digits);
                if remaining == candidates {
                    return Ok(false);
                }
                self.cells[cell] = match remaining.unique()? {
                    Some(digit) => CellState::Digit(digit),
                    None => CellState::Candidates(remaining),
                };
                Ok(true)
            }
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn entry_conversion_roundtrip() {
        let line = "..3.2.6..9..3.5..1..18.64....81.29..7.......8..67.82....26.95..8..2.3..9..5.1.3..";
        let entries = Grid::from_str_line(line).unwrap();
        let grid = CandidateGrid::from_entries(&entries);
        assert_eq!(grid.to_value_grid(), entries);
        assert!(!grid.is_fully_solved());
    }

    #[test]
    fn removal_narrows_to_solved() {
        let entries = Grid::from_bytes([0; N_CELLS]).unwrap();
        let mut grid = CandidateGrid::from_entries(&entries);
        let cell = Cell::new(40);
        let pair = Digit::new(4).as_set() | Digit::new(7);
        grid.set_state(cell, CellState::Candidates(pair));

        assert_eq!(grid.remove_candidates(cell, Digit::new(2).as_set()), Ok(false));
        assert_eq!(grid.remove_candidates(cell, Digit::new(4).as_set()), Ok(true));
        assert_eq!(grid.state(cell), CellState::Digit(Digit::new(7)));
    }

    #[test]
    fn emptying_a_cell_is_a_contradiction() {
        let entries = Grid::from_bytes([0; N_CELLS]).unwrap();
        let mut grid = CandidateGrid::from_entries(&entries);
        let cell = Cell::new(0);
        let pair = Digit::new(1).as_set() | Digit::new(2);
        grid.set_state(cell, CellState::Candidates(pair));

        assert_eq!(grid.remove_candidates(cell, pair), Err(Unsolvable));
    }

    #[test]
    fn removing_a_solved_cells_digit_is_a_contradiction() {
        let entries = Grid::from_bytes([0; N_CELLS]).unwrap();
        let mut grid = CandidateGrid::from_entries(&entries);
        let cell = Cell::new(3);
        grid.set_digit(cell, Digit::new(5));

        assert_eq!(grid.remove_candidates(cell, Digit::new(6).as_set()), Ok(false));
        assert_eq!(
            grid.remove_candidates(cell, Digit::new(5).as_set()),
            Err(Unsolvable)
        );
    }
}
