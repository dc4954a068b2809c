use crate::bitset::Set;
use crate::board::Digit;

/// State of one cell in a candidate grid.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Hash)]
pub(crate) enum CellState {
    /// An empty entry whose initial candidate set has not been assigned yet.
    /// Only exists between entry and the first propagation pass.
    Unset,
    /// A cell fixed to a single digit.
    Digit(Digit),
    /// The digits still possible for an unsolved cell. Invariant: contains at
    /// least two digits. Narrowing to one turns the cell into `Digit`;
    /// narrowing to none is a contradiction and is reported, never stored.
    Candidates(Set<Digit>),
}

impl CellState {
    /// The digit this cell is fixed to, if it is solved.
    pub(crate) fn solved(self) -> Option<Digit> {
        match self {
            CellState::Digit(digit) => Some(digit),
            _ => None,
        }
    }
}
