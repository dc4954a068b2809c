// Numeric constants of the fixed 9×9 / 3×3-box topology.

pub(crate) const N_CELLS: usize = 81;

// Layout of the 27 units: rows first, then columns, then blocks.
pub(crate) const ROW_OFFSET: u8 = 0;
pub(crate) const COL_OFFSET: u8 = 9;
pub(crate) const BLOCK_OFFSET: u8 = 18;

/// No sudoku with fewer than 17 clues has a unique solution.
pub(crate) const MIN_CLUES: u8 = 17;
