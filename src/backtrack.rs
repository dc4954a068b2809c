//! Depth-first exhaustive search over the empty cells of a value grid.
//!
//! The search walks the row-major sequence of empty cells, trying digits 1
//! through 9 and pruning each placement with the peer graph's restricted
//! validity check. It can also *resume*: replay a previously found solution
//! and continue strictly past it, which is how further solutions are
//! enumerated.

use crate::board::{Cell, Grid};
use crate::consts::N_CELLS;
use crate::peers::PeerGraph;

/// Terminal state of one search run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum SearchOutcome {
    /// The grid was completed to a globally valid solution.
    Solved(Grid),
    /// Every digit choice at the root is spent: no (further) solution exists
    /// from the given starting state.
    Exhausted,
}

// The resume control flow as an explicit two-phase state machine. While
// `Replaying`, every empty cell receives the digit the previous solution
// recorded for it instead of a guess. Completing the replay, or deviating
// from it, flips the search into the ordinary `Searching` phase, with the
// guarantee that the search continues strictly past the previous solution
// and never re-finds it.
enum Phase {
    Replaying { previous: Grid },
    Searching,
}

pub(crate) struct BacktrackSearch<'p> {
    peers: &'p PeerGraph,
    grid: Grid,
    phase: Phase,
}

impl<'p> BacktrackSearch<'p> {
    /// Fresh search from a post-reasoning grid.
    pub(crate) fn run(peers: &'p PeerGraph, start: &Grid) -> SearchOutcome {
        if start.is_filled() {
            return match peers.is_valid(start) {
                true => SearchOutcome::Solved(*start),
                false => SearchOutcome::Exhausted,
            };
        }
        BacktrackSearch {
            peers,
            grid: *start,
            phase: Phase::Searching,
        }
        .solve()
    }

    /// Resumes past `previous`, a solution found earlier for the same
    /// post-reasoning grid, and searches for the next distinct one.
    pub(crate) fn run_again(
        peers: &'p PeerGraph,
        previous: &Grid,
        after_reasoning: &Grid,
    ) -> SearchOutcome {
        if after_reasoning.is_filled() {
            // a reasoning-complete grid has exactly one completion and it was
            // already reported
            return SearchOutcome::Exhausted;
        }
        debug_assert!(previous.is_filled());
        debug_assert!(extends(previous, after_reasoning));
        BacktrackSearch {
            peers,
            grid: *after_reasoning,
            phase: Phase::Replaying {
                previous: *previous,
            },
        }
        .solve()
    }

    fn solve(mut self) -> SearchOutcome {
        match self.place_from(0) && self.peers.is_valid(&self.grid) {
            true => SearchOutcome::Solved(self.grid),
            false => SearchOutcome::Exhausted,
        }
    }

    // One frame per cell bounds the recursion depth at 81.
    fn place_from(&mut self, from: usize) -> bool {
        let index = match (from..N_CELLS).find(|&i| self.grid.0[i] == 0) {
            Some(index) => index,
            None => return self.on_filled(),
        };
        let cell = Cell::new(index as u8);

        let first_digit = match &self.phase {
            Phase::Replaying { previous } => previous.0[index],
            Phase::Searching => 1,
        };
        for digit in first_digit..=9 {
            self.grid.0[index] = digit;
            if self.peers.is_valid_at(&self.grid, cell) && self.place_from(index + 1) {
                return true;
            }
            // a rejected digit during replay means the search has deviated
            // from the previous solution; everything from here on is a fresh
            // guess
            if let Phase::Replaying { .. } = self.phase {
                self.phase = Phase::Searching;
            }
        }
        self.grid.0[index] = 0;
        false
    }

    // Filling the last empty cell while replaying reproduces the previous
    // solution, which must be rejected so the unwinding loop above resumes
    // each cell strictly past its replayed digit.
    fn on_filled(&mut self) -> bool {
        match self.phase {
            Phase::Replaying { .. } => {
                self.phase = Phase::Searching;
                false
            }
            Phase::Searching => true,
        }
    }
}

// `solution` agrees with `base` on every filled cell of `base`.
fn extends(solution: &Grid, base: &Grid) -> bool {
    (0..N_CELLS).all(|i| base.0[i] == 0 || base.0[i] == solution.0[i])
}
