//! Applying real moves to a board

use crate::board::{Board, Cell, Player};
use crate::error::{Error, MoveRejection, Result};

/// The state of a game, always recomputed from the board
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Outcome {
    InProgress,
    Win(Player),
    Tie,
}

/// Where a move landed and what it did to the game
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Placement {
    pub row: usize,
    pub outcome: Outcome,
}

/// An empty board, ready for a new game
pub fn new_game() -> Board {
    Board::new()
}

/// Drops `player`'s piece into `column`
///
/// This is the only way real moves reach the board, for the human and the
/// computer alike. A full or out of range column is rejected with
/// `Error::InvalidMove` and leaves the board untouched.
pub fn apply_move(board: &mut Board, column: usize, player: Player) -> Result<Placement> {
    let row = match board.drop_target(column) {
        Ok(Some(row)) => row,
        Ok(None) => {
            return Err(Error::InvalidMove {
                column,
                reason: MoveRejection::ColumnFull,
            })
        }
        Err(_) => {
            return Err(Error::InvalidMove {
                column,
                reason: MoveRejection::OutOfRange,
            })
        }
    };
    board.set(row, column, Cell::Occupied(player));

    Ok(Placement {
        row,
        outcome: outcome_after(board, player),
    })
}

/// The outcome of `board` right after `player` moved
pub fn outcome_after(board: &Board, player: Player) -> Outcome {
    if board.check_win(player) {
        Outcome::Win(player)
    } else if board.is_full() {
        Outcome::Tie
    } else {
        Outcome::InProgress
    }
}
