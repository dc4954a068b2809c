pub(crate) mod hidden_subsets;
pub(crate) mod naked_subsets;
pub(crate) mod pointing_subsets;
mod prelude;

use crate::board::CandidateGrid;
use crate::helper::Unsolvable;

/// A deduction strategy over candidate grids.
///
/// Strategies carry no state of their own: everything flows through the grid
/// passed in and out. `Err(Unsolvable)` means the strategy proved the puzzle
/// has no solution; whatever partial grid it was working on is discarded.
pub(crate) trait DeductionStrategy {
    fn apply(&self, grid: &CandidateGrid) -> Result<CandidateGrid, Unsolvable>;
}

pub(crate) use self::hidden_subsets::HiddenSubsets;
pub(crate) use self::naked_subsets::NakedSubsets;
pub(crate) use self::pointing_subsets::PointingSubsets;
