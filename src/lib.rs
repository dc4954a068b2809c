#![warn(missing_docs)]
//! A sudoku solving library
//!
//! ## Overview
//!
//! The solver layers human-style reasoning over exhaustive search. Three
//! deduction strategies (naked subsets, hidden subsets and pointing subsets,
//! also known as box-line reduction) are driven to a fixpoint, escalating
//! from cheap to expensive only when the cheaper ones stall. Whatever the reasoning leaves
//! open is finished by a backtracking search over the peer graph of the 81
//! cells. The search can also *resume* past a previously found solution,
//! which is how additional solutions are enumerated to detect puzzles
//! without a unique solution.
//!
//! ## Example
//!
//! ```
//! use sudoku_reasoner::{Grid, NextSolution, Solver, SolveStatus};
//!
//! let line = "..3.2.6..9..3.5..1..18.64....81.29..7.......8..67.82....26.95..8..2.3..9..5.1.3..";
//! let puzzle = Grid::from_str_line(line).unwrap();
//!
//! let mut solver = Solver::new();
//! let (solution, status) = solver.solve(&puzzle).unwrap();
//! assert_eq!(status, SolveStatus::Solved);
//! assert!(solution.is_filled());
//!
//! // a proper sudoku has exactly one solution
//! match solver.find_next_solution() {
//!     NextSolution::UniqueByReasoning | NextSolution::Exhausted => {}
//!     NextSolution::Found(other) => panic!("second solution: {}", other),
//! }
//! ```
//!
//! Entry grids with fewer than 17 clues are rejected up front
//! ([`SolveError::InsufficientClues`]), contradictory ones report
//! [`SolveError::NoSolution`], and a grid that arrives already filled and
//! consistent is acknowledged with [`SolveStatus::AlreadyValid`].

mod backtrack;
pub mod bitset;
mod board;
mod consts;
mod helper;
pub mod parse_errors;
mod peers;
mod solver;
mod strategy;

pub use crate::board::positions::{Block, Col, Position, Row, Unit, UnitKind};
pub use crate::board::{Cell, Digit, Grid};
pub use crate::peers::PeerGraph;
pub use crate::solver::{
    NextSolution, SolutionSet, SolveError, SolveStatus, Solver, MAX_SOLUTIONS,
};
