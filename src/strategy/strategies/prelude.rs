pub(crate) use super::DeductionStrategy;
pub(crate) use crate::bitset::Set;
pub(crate) use crate::board::{CandidateGrid, CellState, Digit, Position, Unit, UnitKind};
pub(crate) use crate::helper::Unsolvable;
