use crate::board::{Cell, Digit};
use crate::consts::N_CELLS;
use crate::parse_errors::{FromBytesError, InvalidEntry, LineParseError};
use std::fmt;

/// A 9×9 grid of values, row-major. `0` marks an empty cell.
///
/// `Grid` is both the input format (a partially filled puzzle) and the output
/// format (a solution) of the solver. It never holds values above 9.
#[derive(Copy, Clone, PartialEq, Eq, Hash)]
pub struct Grid(pub(crate) [u8; N_CELLS]);

impl Grid {
    /// Creates a grid from a byte array, `0` meaning an empty cell.
    pub fn from_bytes(bytes: [u8; N_CELLS]) -> Result<Grid, FromBytesError> {
        if bytes.iter().any(|&byte| byte > 9) {
            return Err(FromBytesError(()));
        }
        Ok(Grid(bytes))
    }

    /// Creates a grid from a string in line format: 81 characters, `'1'..='9'`
    /// for entered digits and `'.'`, `'_'` or `'0'` for empty cells. Anything
    /// following the 81st cell must be separated by a space or tab and is
    /// ignored as a comment.
    pub fn from_str_line(s: &str) -> Result<Grid, LineParseError> {
        let mut grid = [0; N_CELLS];
        let mut chars = s.chars();
        let mut cell: u8 = 0;
        while (cell as usize) < N_CELLS {
            let ch = match chars.next() {
                Some(ch) => ch,
                None => return Err(LineParseError::NotEnoughCells(cell)),
            };
            match ch {
                '1'..='9' => grid[cell as usize] = ch as u8 - b'0',
                '.' | '_' | '0' => grid[cell as usize] = 0,
                _ => return Err(LineParseError::InvalidEntry(InvalidEntry { cell, ch })),
            }
            cell += 1;
        }
        match chars.next() {
            None | Some(' ') | Some('\t') => Ok(Grid(grid)),
            Some('1'..='9') | Some('.') | Some('_') | Some('0') => Err(LineParseError::TooManyCells),
            Some(_) => Err(LineParseError::MissingCommentDelimiter),
        }
    }

    /// Returns the bytes of the grid, `0` meaning an empty cell.
    pub fn to_bytes(self) -> [u8; N_CELLS] {
        self.0
    }

    /// Returns the grid in line format.
    pub fn to_str_line(self) -> String {
        self.0
            .iter()
            .map(|&value| match value {
                0 => '.',
                digit => (b'0' + digit) as char,
            })
            .collect()
    }

    /// The digit entered at `cell`, if any.
    pub fn get(self, cell: Cell) -> Option<Digit> {
        Digit::new_checked(self.0[cell.as_index()])
    }

    /// Counts the filled cells.
    pub fn n_clues(self) -> u8 {
        self.0.iter().filter(|&&value| value != 0).count() as u8
    }

    /// Checks whether every cell holds a digit.
    pub fn is_filled(self) -> bool {
        self.0.iter().all(|&value| value != 0 && value <= 9)
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for (index, &value) in self.0.iter().enumerate() {
            let (row, col) = (index / 9, index % 9);
            match (row, col) {
                (_, 3) | (_, 6) => write!(f, " ")?,    // separate blocks in columns
                (3, 0) | (6, 0) => write!(f, "\n\n")?, // separate blocks in rows
                (_, 0) if row != 0 => writeln!(f)?,
                _ => {}
            }
            match value {
                0 => write!(f, "_")?,
                _ => write!(f, "{}", value)?,
            }
        }
        Ok(())
    }
}

impl fmt::Debug for Grid {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Grid({})", self.to_str_line())
    }
}

#[cfg(feature = "serde")]
mod serde_impls {
    use super::Grid;
    use crate::consts::N_CELLS;
    use serde::de::{Error, Visitor};
    use serde::{Deserialize, Deserializer, Serialize, Serializer};
    use std::fmt;

    // Human readable formats get the line string, binary formats the raw bytes.
    impl Serialize for Grid {
        fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
            if serializer.is_human_readable() {
                serializer.serialize_str(&self.to_str_line())
            } else {
                serializer.serialize_bytes(&self.0)
            }
        }
    }

    struct GridVisitor;

    impl<'de> Visitor<'de> for GridVisitor {
        type Value = Grid;

        fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
            f.write_str("81 sudoku cells as a line string or as raw bytes")
        }

        fn visit_str<E: Error>(self, v: &str) -> Result<Grid, E> {
            Grid::from_str_line(v).map_err(E::custom)
        }

        fn visit_bytes<E: Error>(self, v: &[u8]) -> Result<Grid, E> {
            if v.len() != N_CELLS {
                return Err(E::invalid_length(v.len(), &self));
            }
            let mut bytes = [0; N_CELLS];
            bytes.copy_from_slice(v);
            Grid::from_bytes(bytes).map_err(E::custom)
        }
    }

    impl<'de> Deserialize<'de> for Grid {
        fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Grid, D::Error> {
            if deserializer.is_human_readable() {
                deserializer.deserialize_str(GridVisitor)
            } else {
                deserializer.deserialize_bytes(GridVisitor)
            }
        }
    }
}
