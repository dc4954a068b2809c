use super::prelude::*;
use crate::helper::DigitArray;

/// Hidden-subset elimination, the dual of naked subsets: it works on the
/// positions a digit can still occupy instead of the candidates a cell can
/// still hold.
///
/// A digit with a single remaining position in a unit must go there. More
/// generally, N digits confined to the same N cells of a unit claim those
/// cells, which lose all other digits.
pub(crate) struct HiddenSubsets;

impl DeductionStrategy for HiddenSubsets {
    fn apply(&self, grid: &CandidateGrid) -> Result<CandidateGrid, Unsolvable> {
        let mut next = *grid;
        collapse_singles(&mut next);
        // the subset search runs only once the single pass has nothing to do
        if next == *grid {
            eliminate_subsets(&mut next)?;
        }
        Ok(next)
    }
}

// A digit that can appear at only one position of a unit solves that cell.
fn collapse_singles(grid: &mut CandidateGrid) {
    for &kind in &[UnitKind::Row, UnitKind::Col, UnitKind::Block] {
        for unit in kind.units() {
            let positions = digit_positions(grid, unit);
            for digit in Digit::all() {
                if let Ok(Some(pos)) = positions[digit].unique() {
                    let cell = unit.cell_at(pos);
                    if let CellState::Candidates(_) = grid.state(cell) {
                        grid.set_digit(cell, digit);
                    }
                }
            }
        }
    }
}

// Positions within `unit` where each digit can still appear. A solved cell
// contributes its own digit's position, so a digit already placed in the
// unit does not read as "hidden" at some other cell.
fn digit_positions(grid: &CandidateGrid, unit: Unit) -> DigitArray<Set<Position>> {
    let mut positions = DigitArray([Set::NONE; 9]);
    for (i, &cell) in unit.cells().iter().enumerate() {
        let pos = Position::new(i as u8);
        match grid.state(cell) {
            CellState::Digit(digit) => positions[digit] |= pos,
            CellState::Candidates(candidates) => {
                for digit in candidates {
                    positions[digit] |= pos;
                }
            }
            CellState::Unset => {}
        }
    }
    positions
}

fn eliminate_subsets(grid: &mut CandidateGrid) -> Result<(), Unsolvable> {
    for &kind in &[UnitKind::Row, UnitKind::Col, UnitKind::Block] {
        for unit in kind.units() {
            let positions = digit_positions(grid, unit);
            walk_unions(grid, unit, &positions, 0, Set::NONE)?;
        }
    }
    Ok(())
}

// Exhaustively combines the position sets of digits with 2 to 4 possible
// places into unions of up to 4 cells.
fn walk_unions(
    grid: &mut CandidateGrid,
    unit: Unit,
    positions: &DigitArray<Set<Position>>,
    start: usize,
    union: Set<Position>,
) -> Result<(), Unsolvable> {
    for index in start..9 {
        let digit_positions = positions[Digit::from_index(index as u8)];
        if digit_positions.len() < 2 || digit_positions.len() > 4 {
            continue;
        }
        let extended = union | digit_positions;
        if extended.len() > 4 || extended == union {
            continue;
        }
        check_union(grid, unit, positions, extended)?;
        walk_unions(grid, unit, positions, index + 1, extended)?;
    }
    Ok(())
}

// Tests one position union against a unit. If exactly as many digits are
// confined to the union as it has cells, those digits own the cells and all
// other digits are stripped from them; more confined digits than cells
// cannot all be placed.
fn check_union(
    grid: &mut CandidateGrid,
    unit: Unit,
    positions: &DigitArray<Set<Position>>,
    union: Set<Position>,
) -> Result<(), Unsolvable> {
    let mut confined = Set::<Digit>::NONE;
    for digit in Digit::all() {
        let digit_positions = positions[digit];
        if !digit_positions.is_empty() && union.contains(digit_positions) {
            confined |= digit;
        }
    }

    if confined.len() > union.len() {
        return Err(Unsolvable);
    }
    if confined.len() == union.len() {
        for pos in union {
            let cell = unit.cell_at(pos);
            grid.remove_candidates(cell, Set::ALL.without(confined))?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::board::{Cell, Grid};

    fn digits(list: &[u8]) -> Set<Digit> {
        list.iter().fold(Set::NONE, |set, &d| set | Digit::new(d))
    }

    // every cell open to every digit; tests then narrow the cells they need
    fn open_grid() -> CandidateGrid {
        let mut grid = CandidateGrid::from_entries(&Grid::from_bytes([0; 81]).unwrap());
        for cell in Cell::all() {
            grid.set_state(cell, CellState::Candidates(Set::ALL));
        }
        grid
    }

    fn narrow_row(grid: &mut CandidateGrid, row: u8, candidates: Set<Digit>) {
        for col in 0..9 {
            grid.set_state(Cell::new(row * 9 + col), CellState::Candidates(candidates));
        }
    }

    #[test]
    fn hidden_single_collapses_its_cell() {
        let mut grid = open_grid();
        // 7 can only sit in the fourth cell of row 0
        narrow_row(&mut grid, 0, Set::ALL.without(digits(&[7])));
        grid.set_state(Cell::new(3), CellState::Candidates(Set::ALL));

        let next = HiddenSubsets.apply(&grid).unwrap();
        assert_eq!(next.state(Cell::new(3)), CellState::Digit(Digit::new(7)));
    }

    #[test]
    fn solved_digit_is_not_hidden_elsewhere() {
        let mut grid = open_grid();
        // 7 is already placed in row 0; cell 3 still lists it as a candidate
        narrow_row(&mut grid, 0, Set::ALL.without(digits(&[7])));
        grid.set_digit(Cell::new(0), Digit::new(7));
        grid.set_state(Cell::new(3), CellState::Candidates(Set::ALL));

        let next = HiddenSubsets.apply(&grid).unwrap();
        // two occurrences of 7 in the row: no collapse
        assert_eq!(next.state(Cell::new(3)), CellState::Candidates(Set::ALL));
    }

    #[test]
    fn hidden_pair_strips_other_digits() {
        let mut grid = open_grid();
        // 1 and 2 can only sit in the first two cells of row 0
        narrow_row(&mut grid, 0, Set::ALL.without(digits(&[1, 2])));
        grid.set_state(Cell::new(0), CellState::Candidates(Set::ALL));
        grid.set_state(Cell::new(1), CellState::Candidates(Set::ALL));

        let next = HiddenSubsets.apply(&grid).unwrap();
        assert_eq!(
            next.state(Cell::new(0)),
            CellState::Candidates(digits(&[1, 2]))
        );
        assert_eq!(
            next.state(Cell::new(1)),
            CellState::Candidates(digits(&[1, 2]))
        );
        // the rest of the row is untouched
        assert_eq!(
            next.state(Cell::new(2)),
            CellState::Candidates(Set::ALL.without(digits(&[1, 2])))
        );
    }

    #[test]
    fn three_digits_in_two_cells_are_unsolvable() {
        let mut grid = open_grid();
        // 1, 2 and 3 all confined to the first two cells of row 0
        narrow_row(&mut grid, 0, Set::ALL.without(digits(&[1, 2, 3])));
        grid.set_state(Cell::new(0), CellState::Candidates(Set::ALL));
        grid.set_state(Cell::new(1), CellState::Candidates(Set::ALL));

        assert!(HiddenSubsets.apply(&grid).is_err());
    }
}
