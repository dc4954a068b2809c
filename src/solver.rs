//! The orchestrator: validates the entry grid, reasons to a fixpoint, falls
//! back to backtracking and drives the enumeration of further solutions.

use crate::backtrack::{BacktrackSearch, SearchOutcome};
use crate::board::{CandidateGrid, Grid};
use crate::consts::MIN_CLUES;
use crate::peers::PeerGraph;
use crate::strategy::ReasoningEngine;

/// Upper bound on the number of solutions enumerated for one puzzle. Keeps
/// worst-case latency bounded for puzzles with many solutions.
pub const MAX_SOLUTIONS: usize = 10;

/// How a puzzle was resolved by [`Solver::solve`].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum SolveStatus {
    /// The puzzle was solved by reasoning and, where needed, search.
    Solved,
    /// The entry grid was already completely filled and consistent; it is
    /// returned unchanged.
    AlreadyValid,
}

/// Why a puzzle could not be solved.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum SolveError {
    /// Fewer than 17 entries were given. No sudoku below that bound has a
    /// unique solution, so such entry grids are rejected before any solving
    /// work. Contains the number of entries found.
    #[error("not enough entries: {0} given, at least 17 required")]
    InsufficientClues(u8),
    /// The entries contradict each other: a deduction emptied a cell's
    /// candidates, a duplicate was found within a unit, or the search ran
    /// out of digits to try.
    #[error("the sudoku has no solution")]
    NoSolution,
}

/// Result of one enumeration step, see [`Solver::find_next_solution`].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum NextSolution {
    /// Reasoning alone had already filled the grid. Pure deduction never
    /// branches, so the solution is provably unique; no search was run.
    UniqueByReasoning,
    /// Another distinct solution was found.
    Found(Grid),
    /// The previously found solution was the last one.
    Exhausted,
}

/// Solves sudokus and enumerates their solutions.
///
/// One `Solver` owns the [`PeerGraph`] (built once) and the per-puzzle state
/// that enumeration resumes from. Each [`solve`](Solver::solve) call starts a
/// fresh puzzle instance; [`find_next_solution`](Solver::find_next_solution)
/// continues the most recent one.
pub struct Solver {
    peers: PeerGraph,
    engine: ReasoningEngine,
    /// Value projection of the reasoning fixpoint of the current puzzle.
    after_reasoning: Option<Grid>,
    /// Most recently found solution of the current puzzle.
    last_solution: Option<Grid>,
}

impl Solver {
    /// Creates a solver, building the peer graph.
    pub fn new() -> Solver {
        Solver {
            peers: PeerGraph::new(),
            engine: ReasoningEngine::new(),
            after_reasoning: None,
            last_solution: None,
        }
    }

    /// Finds the first solution of `entries`, if any.
    ///
    /// At least 17 entries must be present. A completely filled, consistent
    /// entry grid is reported as [`SolveStatus::AlreadyValid`] and returned
    /// unchanged; everything else is solved by running the reasoning engine
    /// to its fixpoint and, if cells remain open, the backtracking search.
    pub fn solve(&mut self, entries: &Grid) -> Result<(Grid, SolveStatus), SolveError> {
        self.after_reasoning = None;
        self.last_solution = None;

        let n_clues = entries.n_clues();
        if n_clues < MIN_CLUES {
            return Err(SolveError::InsufficientClues(n_clues));
        }

        let candidates = CandidateGrid::from_entries(entries);
        let fixpoint = self
            .engine
            .run(&candidates)
            .map_err(|_| SolveError::NoSolution)?;
        let after_reasoning = fixpoint.to_value_grid();
        self.after_reasoning = Some(after_reasoning);

        if fixpoint.is_fully_solved() {
            self.last_solution = Some(after_reasoning);
            return match entries.is_filled() {
                true => Ok((*entries, SolveStatus::AlreadyValid)),
                false => Ok((after_reasoning, SolveStatus::Solved)),
            };
        }

        match BacktrackSearch::run(&self.peers, &after_reasoning) {
            SearchOutcome::Solved(solution) => {
                self.last_solution = Some(solution);
                Ok((solution, SolveStatus::Solved))
            }
            SearchOutcome::Exhausted => Err(SolveError::NoSolution),
        }
    }

    /// Looks for one more solution of the most recently solved puzzle.
    ///
    /// If the reasoning fixpoint had already filled the grid, the solution
    /// is unique and no search runs. Otherwise the backtracking search
    /// resumes past the previous solution; every call performs exactly one
    /// such search. Without a previously solved puzzle this reports
    /// [`NextSolution::Exhausted`].
    pub fn find_next_solution(&mut self) -> NextSolution {
        let after_reasoning = match self.after_reasoning {
            Some(grid) => grid,
            None => return NextSolution::Exhausted,
        };
        if after_reasoning.is_filled() {
            return NextSolution::UniqueByReasoning;
        }
        let previous = match self.last_solution {
            Some(grid) => grid,
            None => return NextSolution::Exhausted,
        };
        match BacktrackSearch::run_again(&self.peers, &previous, &after_reasoning) {
            SearchOutcome::Solved(solution) => {
                self.last_solution = Some(solution);
                NextSolution::Found(solution)
            }
            SearchOutcome::Exhausted => NextSolution::Exhausted,
        }
    }

    /// Solves `entries` and enumerates its solutions into a [`SolutionSet`],
    /// stopping after [`MAX_SOLUTIONS`] at the latest.
    pub fn solve_all(&mut self, entries: &Grid) -> Result<SolutionSet, SolveError> {
        let (first, _) = self.solve(entries)?;
        let mut solutions = SolutionSet::new();
        solutions.push(first);
        while solutions.len() < MAX_SOLUTIONS {
            match self.find_next_solution() {
                NextSolution::Found(solution) => {
                    solutions.push(solution);
                }
                NextSolution::UniqueByReasoning | NextSolution::Exhausted => {
                    solutions.mark_complete();
                    break;
                }
            }
        }
        Ok(solutions)
    }
}

impl Default for Solver {
    fn default() -> Solver {
        Solver::new()
    }
}

/// The ordered solutions discovered for one puzzle, plus a cursor for
/// navigating between them.
///
/// Holds at most [`MAX_SOLUTIONS`] grids. The set is *complete* if
/// enumeration proved that no further solutions exist beyond those stored.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SolutionSet {
    solutions: Vec<Grid>,
    cursor: usize,
    complete: bool,
}

impl SolutionSet {
    /// An empty solution set.
    pub fn new() -> SolutionSet {
        SolutionSet::default()
    }

    /// Appends a solution and moves the cursor to it. Returns `false` once
    /// the set is full.
    pub fn push(&mut self, solution: Grid) -> bool {
        if self.solutions.len() >= MAX_SOLUTIONS {
            return false;
        }
        self.solutions.push(solution);
        self.cursor = self.solutions.len() - 1;
        true
    }

    /// Records that enumeration found every solution there is.
    pub fn mark_complete(&mut self) {
        self.complete = true;
    }

    /// Whether the stored solutions are provably all solutions the puzzle has.
    pub fn is_complete(&self) -> bool {
        self.complete
    }

    /// Number of solutions found so far.
    pub fn len(&self) -> usize {
        self.solutions.len()
    }

    /// Checks whether any solution was stored.
    pub fn is_empty(&self) -> bool {
        self.solutions.is_empty()
    }

    /// All stored solutions in discovery order.
    pub fn solutions(&self) -> &[Grid] {
        &self.solutions
    }

    /// The solution the cursor points at.
    pub fn current(&self) -> Option<&Grid> {
        self.solutions.get(self.cursor)
    }

    /// Moves the cursor to the next solution, if there is one.
    pub fn select_next(&mut self) -> Option<&Grid> {
        if self.cursor + 1 < self.solutions.len() {
            self.cursor += 1;
            self.solutions.get(self.cursor)
        } else {
            None
        }
    }

    /// Moves the cursor to the previous solution, if there is one.
    pub fn select_prev(&mut self) -> Option<&Grid> {
        if self.cursor > 0 && !self.solutions.is_empty() {
            self.cursor -= 1;
            self.solutions.get(self.cursor)
        } else {
            None
        }
    }
}
