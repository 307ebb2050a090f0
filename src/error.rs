//! Errors raised by the board model, the move applier and position parsing

use std::fmt;

use crate::{HEIGHT, WIDTH};

/// Why [`apply_move`](crate::game::apply_move) refused a column
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum MoveRejection {
    /// The column has no empty cell left
    ColumnFull,
    /// The column index is not on the board
    OutOfRange,
}

impl fmt::Display for MoveRejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoveRejection::ColumnFull => write!(f, "column full"),
            MoveRejection::OutOfRange => write!(f, "column out of range"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// A board query was given a column outside `0..WIDTH`
    #[error("column {column} out of range, columns must be between 0 and {}", WIDTH - 1)]
    OutOfRangeColumn { column: usize },

    /// A move could not be applied; the board was left untouched
    #[error("invalid move in column {column}: {reason}")]
    InvalidMove {
        column: usize,
        reason: MoveRejection,
    },

    #[error("could not parse '{character}' as a valid move")]
    UnparsableMove { character: char },

    #[error("invalid position, game is over")]
    GameOver,

    #[error("expected {} rows of {} cells, found {rows} rows", HEIGHT, WIDTH)]
    MalformedRows { rows: usize },

    #[error("row {row} describes {length} cells, expected {}", WIDTH)]
    BadRowLength { row: usize, length: usize },

    #[error("unknown cell character '{character}'")]
    UnknownCell { character: char },

    /// A piece with an empty cell underneath it
    #[error("floating piece at row {row}, column {column}")]
    FloatingPiece { row: usize, column: usize },
}

impl Error {
    /// True for every failure of [`apply_move`](crate::game::apply_move)
    pub fn is_invalid_move(&self) -> bool {
        matches!(self, Error::InvalidMove { .. })
    }
}

pub type Result<T> = std::result::Result<T, Error>;
