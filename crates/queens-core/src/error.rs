//! Error types shared across the queens workspace.
//!
//! Only faults live here. A move refused at a board boundary is a normal
//! outcome reported as `Ok(false)` by the engine, deliberately not an
//! error variant.

use std::error::Error;
use std::fmt;

use crate::id::Column;

/// Errors from the engine's move operation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MoveError {
    /// The addressed column does not exist on this board.
    ///
    /// The board is left unchanged.
    ColumnOutOfRange {
        /// The column that was addressed.
        column: Column,
        /// Number of columns on the board.
        queens: u32,
    },
}

impl fmt::Display for MoveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ColumnOutOfRange { column, queens } => {
                write!(f, "column {column} out of range for a {queens}-queens board")
            }
        }
    }
}

impl Error for MoveError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn column_out_of_range_display() {
        let err = MoveError::ColumnOutOfRange {
            column: Column(9),
            queens: 4,
        };
        let msg = err.to_string();
        assert!(msg.contains("column 9"));
        assert!(msg.contains("4-queens"));
    }
}
