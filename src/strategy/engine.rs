use super::strategies::{DeductionStrategy, HiddenSubsets, NakedSubsets, PointingSubsets};
use crate::board::CandidateGrid;
use crate::helper::Unsolvable;

/// Drives the deduction strategies to a fixpoint.
///
/// Naked subsets run first and are retried after every change; hidden
/// subsets only run once naked subsets stall, and pointing subsets only once
/// hidden subsets stall too. Any change restarts the cycle from the cheapest
/// strategy. The engine stops when a full iteration leaves the grid
/// unchanged, or as soon as any strategy proves the puzzle unsolvable.
pub(crate) struct ReasoningEngine {
    naked: NakedSubsets,
    hidden: HiddenSubsets,
    pointing: PointingSubsets,
}

impl ReasoningEngine {
    pub(crate) fn new() -> ReasoningEngine {
        ReasoningEngine {
            naked: NakedSubsets,
            hidden: HiddenSubsets,
            pointing: PointingSubsets,
        }
    }

    /// Runs the strategies against `grid` until nothing changes anymore.
    /// The returned grid is the reasoning fixpoint; it may or may not be
    /// fully solved.
    pub(crate) fn run(&self, grid: &CandidateGrid) -> Result<CandidateGrid, Unsolvable> {
        let mut current = self.naked.apply_first(grid)?;
        loop {
            let previous = current;
            current = self.naked.apply(&previous)?;
            if current == previous {
                current = self.hidden.apply(&previous)?;
            }
            if current == previous {
                current = self.pointing.apply(&previous)?;
            }
            if current == previous {
                return Ok(current);
            }
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::board::{Cell, CellState, Grid};

    const WIKI_SOLUTION: &str =
        "534678912672195348198342567859761423426853791713924856961537284287419635345286179";

    fn blank(solution: &Grid, cells: &[usize]) -> Grid {
        let mut bytes = solution.to_bytes();
        for &cell in cells {
            bytes[cell] = 0;
        }
        Grid::from_bytes(bytes).unwrap()
    }

    #[test]
    fn solves_single_blanks_per_row_outright() {
        let solution = Grid::from_str_line(WIKI_SOLUTION).unwrap();
        // one blank per row: the first propagation pass alone must finish
        let puzzle = blank(&solution, &[0, 10, 20, 30, 40, 50, 60, 70, 80]);

        let engine = ReasoningEngine::new();
        let fixpoint = engine.run(&CandidateGrid::from_entries(&puzzle)).unwrap();
        assert!(fixpoint.is_fully_solved());
        assert_eq!(fixpoint.to_value_grid(), solution);
    }

    #[test]
    fn fixpoint_is_idempotent() {
        let solution = Grid::from_str_line(WIKI_SOLUTION).unwrap();
        let puzzle = blank(&solution, &[0, 1, 2, 9, 10, 11, 40, 41, 42, 60, 61, 62, 78, 79, 80]);

        let engine = ReasoningEngine::new();
        let fixpoint = engine.run(&CandidateGrid::from_entries(&puzzle)).unwrap();
        let again = engine.run(&fixpoint).unwrap();
        assert_eq!(again, fixpoint);
    }

    #[test]
    fn contradictions_stop_the_engine() {
        let solution = Grid::from_str_line(WIKI_SOLUTION).unwrap();
        let mut bytes = solution.to_bytes();
        // row 0 holds a 5 at cell 0; plant another one in the same row
        bytes[1] = 5;
        let contradictory = Grid::from_bytes(bytes).unwrap();

        let engine = ReasoningEngine::new();
        assert!(engine
            .run(&CandidateGrid::from_entries(&contradictory))
            .is_err());
    }

    #[test]
    fn eliminations_are_sound_under_random_blanking() {
        use proptest::prelude::*;

        let solution = Grid::from_str_line(WIKI_SOLUTION).unwrap();
        let engine = ReasoningEngine::new();

        proptest!(|(blanks in proptest::collection::vec(0usize..81, 0..60))| {
            let puzzle = blank(&solution, &blanks);
            let fixpoint = engine.run(&CandidateGrid::from_entries(&puzzle));
            prop_assert!(fixpoint.is_ok(), "valid puzzle reported unsolvable");
            let fixpoint = fixpoint.unwrap();

            // no strategy may ever have removed the true digit of a cell
            for cell in Cell::all() {
                let truth = solution.to_bytes()[cell.as_index()];
                match fixpoint.state(cell) {
                    CellState::Digit(digit) => prop_assert_eq!(digit.get(), truth),
                    CellState::Candidates(candidates) => {
                        prop_assert!(candidates.contains(crate::board::Digit::new(truth)));
                    }
                    CellState::Unset => prop_assert!(false, "unset cell at fixpoint"),
                }
            }
        });
    }
}
