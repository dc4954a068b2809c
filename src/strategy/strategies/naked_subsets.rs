use super::prelude::*;

/// Naked-subset elimination.
///
/// A solved cell excludes its digit from the rest of its units. More
/// generally, N cells of a unit whose candidates collectively span exactly N
/// digits claim those digits for themselves, excluding them from every other
/// cell of the unit.
pub(crate) struct NakedSubsets;

impl NakedSubsets {
    /// The very first propagation pass: seeds every `Unset` cell with the
    /// digits its row is still missing, then proceeds as
    /// [`DeductionStrategy::apply`].
    pub(crate) fn apply_first(
        &self,
        grid: &CandidateGrid,
    ) -> Result<CandidateGrid, Unsolvable> {
        let mut next = *grid;
        assign_initial_candidates(&mut next)?;
        propagate_solved_cells(&mut next)?;
        if next == *grid {
            eliminate_subsets(&mut next)?;
        }
        Ok(next)
    }
}

impl DeductionStrategy for NakedSubsets {
    fn apply(&self, grid: &CandidateGrid) -> Result<CandidateGrid, Unsolvable> {
        let mut next = *grid;
        propagate_solved_cells(&mut next)?;
        // the subset search is far pricier than single-candidate propagation
        // and runs only once propagation has nothing left to do
        if next == *grid {
            eliminate_subsets(&mut next)?;
        }
        Ok(next)
    }
}

// Every empty cell of a row can a priori hold exactly the digits absent from
// the row's filled cells. An empty cell in a row with no digit left to place
// is a contradiction.
fn assign_initial_candidates(grid: &mut CandidateGrid) -> Result<(), Unsolvable> {
    for unit in UnitKind::Row.units() {
        let cells = unit.cells();

        let mut missing = Set::ALL;
        for &cell in cells.iter() {
            if let CellState::Digit(digit) = grid.state(cell) {
                missing.remove(digit.as_set());
            }
        }

        for &cell in cells.iter() {
            if grid.state(cell) != CellState::Unset {
                continue;
            }
            match missing.unique() {
                Err(_) => return Err(Unsolvable),
                Ok(Some(digit)) => grid.set_digit(cell, digit),
                Ok(None) => grid.set_state(cell, CellState::Candidates(missing)),
            }
        }
    }
    Ok(())
}

// Single-candidate propagation: a solved cell's digit cannot appear anywhere
// else in its unit. The digit turning up in another solved cell of the unit
// (a duplicate entry) is a contradiction.
fn propagate_solved_cells(grid: &mut CandidateGrid) -> Result<(), Unsolvable> {
    for &kind in &[UnitKind::Col, UnitKind::Block, UnitKind::Row] {
        for unit in kind.units() {
            let cells = unit.cells();
            for (i, &cell) in cells.iter().enumerate() {
                let digit = match grid.state(cell) {
                    CellState::Digit(digit) => digit,
                    _ => continue,
                };
                for (j, &other) in cells.iter().enumerate() {
                    if i != j {
                        grid.remove_candidates(other, digit.as_set())?;
                    }
                }
            }
        }
    }
    Ok(())
}

fn eliminate_subsets(grid: &mut CandidateGrid) -> Result<(), Unsolvable> {
    for &kind in &[UnitKind::Col, UnitKind::Block, UnitKind::Row] {
        for unit in kind.units() {
            walk_unions(grid, unit, 0, Set::NONE)?;
        }
    }
    Ok(())
}

// Exhaustively combines the candidate sets of a unit's unsolved cells into
// unions of up to 4 digits. Subsets of 5 and more digits always have
// complementary subsets of 9 - subset_size and need no search of their own.
fn walk_unions(
    grid: &mut CandidateGrid,
    unit: Unit,
    start: usize,
    union: Set<Digit>,
) -> Result<(), Unsolvable> {
    let cells = unit.cells();
    for i in start..cells.len() {
        let candidates = match grid.state(cells[i]) {
            CellState::Candidates(candidates) if candidates.len() <= 4 => candidates,
            _ => continue,
        };
        let extended = union | candidates;
        if extended.len() > 4 || extended == union {
            continue;
        }
        check_union(grid, unit, extended)?;
        walk_unions(grid, unit, i + 1, extended)?;
    }
    Ok(())
}

// Tests one digit union against a unit. If as many cells are confined to the
// union as it has digits, the union is a naked subset and is removed from all
// other cells of the unit; more confined cells than digits cannot be placed.
fn check_union(
    grid: &mut CandidateGrid,
    unit: Unit,
    union: Set<Digit>,
) -> Result<(), Unsolvable> {
    let cells = unit.cells();

    let mut members = Set::<Position>::NONE;
    for (i, &cell) in cells.iter().enumerate() {
        if let CellState::Candidates(candidates) = grid.state(cell) {
            if union.contains(candidates) {
                members |= Position::new(i as u8);
            }
        }
    }

    if members.len() > union.len() {
        return Err(Unsolvable);
    }
    if members.len() == union.len() {
        for (i, &cell) in cells.iter().enumerate() {
            if !members.contains(Position::new(i as u8)) {
                grid.remove_candidates(cell, union)?;
            }
        }
    }
    Ok(())
}
