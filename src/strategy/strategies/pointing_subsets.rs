use super::prelude::*;
use crate::board::Cell;

/// Pointing-subset elimination (box-line reduction).
///
/// A digit whose occurrences in a row or column all fall into one box is
/// confined to the line/box intersection and disappears from the rest of the
/// box. Scanning boxes works the other way around: a digit confined to one
/// row or column of a box disappears from the rest of that line.
pub(crate) struct PointingSubsets;

impl DeductionStrategy for PointingSubsets {
    fn apply(&self, grid: &CandidateGrid) -> Result<CandidateGrid, Unsolvable> {
        let mut next = *grid;
        scan_lines(&mut next, UnitKind::Row)?;
        scan_lines(&mut next, UnitKind::Col)?;
        scan_blocks(&mut next)?;
        Ok(next)
    }
}

// Occurrences of `digit` within `unit`. Detection is capped at 4: four or
// more occurrences are never actionable, so scanning stops early.
fn occurrences(grid: &CandidateGrid, unit: Unit, digit: Digit) -> Option<([Cell; 3], usize)> {
    let mut cells = [Cell::new(0); 3];
    let mut count = 0;
    for &cell in unit.cells().iter() {
        let occurs = match grid.state(cell) {
            CellState::Digit(solved) => solved == digit,
            CellState::Candidates(candidates) => candidates.contains(digit),
            CellState::Unset => false,
        };
        if occurs {
            if count == 3 {
                return None;
            }
            cells[count] = cell;
            count += 1;
        }
    }
    Some((cells, count))
}

fn scan_lines(grid: &mut CandidateGrid, kind: UnitKind) -> Result<(), Unsolvable> {
    for unit in kind.units() {
        for digit in Digit::all() {
            let (cells, count) = match occurrences(grid, unit, digit) {
                Some(found) => found,
                None => continue,
            };
            if count < 2 {
                continue;
            }
            let block = cells[0].block();
            if cells[1..count].iter().any(|cell| cell.block() != block) {
                continue;
            }
            // confined to the line/box intersection: the digit cannot appear
            // in the cells of the box outside the line
            for &cell in Unit::from(block).cells().iter() {
                if !cell.units().contains(&unit) {
                    grid.remove_candidates(cell, digit.as_set())?;
                }
            }
        }
    }
    Ok(())
}

fn scan_blocks(grid: &mut CandidateGrid) -> Result<(), Unsolvable> {
    for unit in UnitKind::Block.units() {
        for digit in Digit::all() {
            let (cells, count) = match occurrences(grid, unit, digit) {
                Some(found) => found,
                None => continue,
            };
            if count < 2 {
                continue;
            }
            // all occurrences in one row of the box, or failing that, in one
            // column (both at once is impossible for 2+ distinct cells)
            let line = if cells[1..count].iter().all(|cell| cell.row() == cells[0].row()) {
                Unit::from(cells[0].row())
            } else if cells[1..count].iter().all(|cell| cell.col() == cells[0].col()) {
                Unit::from(cells[0].col())
            } else {
                continue;
            };
            for &cell in line.cells().iter() {
                if cell.block() != cells[0].block() {
                    grid.remove_candidates(cell, digit.as_set())?;
                }
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::board::Grid;

    fn digits(list: &[u8]) -> Set<Digit> {
        list.iter().fold(Set::NONE, |set, &d| set | Digit::new(d))
    }

    fn open_grid() -> CandidateGrid {
        let mut grid = CandidateGrid::from_entries(&Grid::from_bytes([0; 81]).unwrap());
        for cell in Cell::all() {
            grid.set_state(cell, CellState::Candidates(Set::ALL));
        }
        grid
    }

    fn candidates_at(grid: &CandidateGrid, cell: u8) -> Set<Digit> {
        match grid.state(Cell::new(cell)) {
            CellState::Candidates(candidates) => candidates,
            other => panic!("cell {} is not unsolved: {:?}", cell, other),
        }
    }

    #[test]
    fn row_occurrences_in_one_box_clear_the_rest_of_the_box() {
        let mut grid = open_grid();
        // 1 occurs in row 0 only at the first two cells, both in box 0
        for col in 2..9 {
            grid.set_state(
                Cell::new(col),
                CellState::Candidates(Set::ALL.without(digits(&[1]))),
            );
        }

        let next = PointingSubsets.apply(&grid).unwrap();
        // box 0 outside row 0 lost the 1
        for &cell in &[9, 10, 11, 18, 19, 20] {
            assert_eq!(candidates_at(&next, cell), Set::ALL.without(digits(&[1])));
        }
        // the intersection keeps it
        assert!(candidates_at(&next, 0).contains(Digit::new(1)));
        assert!(candidates_at(&next, 1).contains(Digit::new(1)));
        // other boxes are untouched
        assert_eq!(candidates_at(&next, 27), Set::ALL);
    }

    #[test]
    fn box_occurrences_in_one_row_clear_the_rest_of_the_row() {
        let mut grid = open_grid();
        // 5 occurs in box 0 only at cells 9 and 10, i.e. within row 1
        let without_5 = Set::ALL.without(digits(&[5]));
        for &cell in &[0, 1, 2, 11, 18, 19, 20] {
            grid.set_state(Cell::new(cell), CellState::Candidates(without_5));
        }

        let next = PointingSubsets.apply(&grid).unwrap();
        // row 1 outside box 0 lost the 5
        for cell in 12..18 {
            assert_eq!(candidates_at(&next, cell), without_5);
        }
        assert!(candidates_at(&next, 9).contains(Digit::new(5)));
        assert!(candidates_at(&next, 10).contains(Digit::new(5)));
        // row 2 is untouched outside the box
        assert_eq!(candidates_at(&next, 21), Set::ALL);
    }

    #[test]
    fn four_or_more_occurrences_are_not_actionable() {
        let mut grid = open_grid();
        // 1 occurs four times in row 0, all within... no box can hold four
        // cells of a row, so nothing may be eliminated; the cap also stops
        // the scan before it miscounts
        for col in 4..9 {
            grid.set_state(
                Cell::new(col),
                CellState::Candidates(Set::ALL.without(digits(&[1]))),
            );
        }

        let next = PointingSubsets.apply(&grid).unwrap();
        assert_eq!(next, grid);
    }
}
