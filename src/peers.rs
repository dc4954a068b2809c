//! Precomputed adjacency between the 81 cells of the grid.
//!
//! Two cells are peers iff they share a row, column or box. The relation is
//! symmetric, irreflexive and identical for every puzzle instance, so it is
//! built once and shared read-only for the remainder of the process.

use crate::bitset::Set;
use crate::board::{Cell, Grid};
use crate::consts::N_CELLS;
use crate::helper::CellArray;
use crunchy::unroll;

/// The peer relation over cell indices, one bitset of peers per cell.
pub struct PeerGraph {
    peers: CellArray<Set<Cell>>,
}

impl PeerGraph {
    /// Builds the peer relation. Every cell ends up with exactly 20 peers:
    /// 8 in its row, 8 in its column and 4 more in its box.
    pub fn new() -> PeerGraph {
        let mut peers = CellArray([Set::NONE; N_CELLS]);
        for cell in Cell::all() {
            for other in Cell::all() {
                if cell != other
                    && (cell.row() == other.row()
                        || cell.col() == other.col()
                        || cell.block() == other.block())
                {
                    peers[cell] |= other;
                }
            }
        }
        PeerGraph { peers }
    }

    /// The 20 cells sharing a row, column or box with `cell`.
    pub fn peers_of(&self, cell: Cell) -> Set<Cell> {
        self.peers[cell]
    }

    /// Checks whether `cell` and `other` are peers holding the same non-zero
    /// value.
    pub fn are_conflicting(&self, grid: &Grid, cell: Cell, other: Cell) -> bool {
        let value = grid.0[cell.as_index()];
        value != 0 && value == grid.0[other.as_index()] && self.peers[cell].contains(other)
    }

    /// Checks the whole grid: no peer pair may conflict and every cell must
    /// hold a value in `0..=9`.
    pub fn is_valid(&self, grid: &Grid) -> bool {
        values_in_range(grid) && Cell::all().all(|cell| !self.conflicts_at(grid, cell))
    }

    /// Restricted check used by the search to prune incrementally: only
    /// conflicts involving `cell` are examined, next to the range scan over
    /// all cells. Costs O(81) per call instead of the O(81²) of
    /// [`PeerGraph::is_valid`].
    pub fn is_valid_at(&self, grid: &Grid, cell: Cell) -> bool {
        values_in_range(grid) && !self.conflicts_at(grid, cell)
    }

    fn conflicts_at(&self, grid: &Grid, cell: Cell) -> bool {
        let value = grid.0[cell.as_index()];
        if value == 0 {
            return false;
        }
        self.peers[cell]
            .into_iter()
            .any(|peer| grid.0[peer.as_index()] == value)
    }
}

impl Default for PeerGraph {
    fn default() -> PeerGraph {
        PeerGraph::new()
    }
}

// Hot path: the search re-checks the grid for every digit it tries.
#[inline]
fn values_in_range(grid: &Grid) -> bool {
    unroll! {
        for i in 0..81 {
            if grid.0[i] > 9 {
                return false;
            }
        }
    }
    true
}
