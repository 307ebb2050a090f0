//! Static evaluation of Connect 4 positions
//!
//! Every piece on the board is scored by the runs of its owner's pieces that
//! start at it and still have room to grow into four in a row. Computer pieces
//! count positively and human pieces negatively, so a single sign convention
//! serves both sides of the search.

use std::fmt;
use std::ops::Neg;

use crate::board::{Board, Cell, Player};
use crate::{HEIGHT, WIDTH, WIN_LENGTH};

/// The value of a position
///
/// `Loss` and `Win` are forced outcomes and order below and above every
/// heuristic `Value`.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Score {
    Loss,
    Value(i32),
    Win,
}

impl Neg for Score {
    type Output = Self;

    fn neg(self) -> Self {
        match self {
            Score::Loss => Score::Win,
            Score::Value(value) => Score::Value(-value),
            Score::Win => Score::Loss,
        }
    }
}

impl fmt::Display for Score {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Score::Loss => write!(f, "-inf"),
            Score::Value(value) => write!(f, "{}", value),
            Score::Win => write!(f, "+inf"),
        }
    }
}

// left, right, up, up-left, up-right as (row, column) steps
const DIRECTIONS: [(isize, isize); 5] = [(0, -1), (0, 1), (-1, 0), (-1, -1), (-1, 1)];

/// Length of the run starting at (`row`, `column`) in one direction
///
/// Returns `None` for four in a row, 0 for a run that can no longer grow.
fn run_value(
    board: &Board,
    row: usize,
    column: usize,
    owner: Player,
    step: (isize, isize),
) -> Option<i32> {
    let (dy, dx) = step;
    let (row, column) = (row as isize, column as isize);
    let own = Some(Cell::Occupied(owner));

    let mut length = 1;
    while board.cell_at(row + length * dy, column + length * dx) == own {
        length += 1;
    }
    if length >= WIN_LENGTH as isize {
        return None;
    }

    // the run can only grow through a cell that is playable right now
    let (next_row, next_column) = (row + length * dy, column + length * dx);
    if board.cell_at(next_row, next_column).is_none()
        || !board.is_valid_drop(next_row as usize, next_column as usize)
    {
        return Some(0);
    }

    // and the rest of the four must stay on the board and clear of the opponent
    for i in length + 1..WIN_LENGTH as isize {
        match board.cell_at(row + i * dy, column + i * dx) {
            None => return Some(0),
            Some(Cell::Occupied(player)) if player != owner => return Some(0),
            _ => {}
        }
    }
    Some(length as i32)
}

/// Sum of the alive runs starting at an occupied cell, `None` if any of them is a four
fn cell_value(board: &Board, row: usize, column: usize, owner: Player) -> Option<i32> {
    let mut sum = 0;
    for &step in DIRECTIONS.iter() {
        sum += run_value(board, row, column, owner, step)?;
    }
    Some(sum)
}

/// Scores `board` from the point of view of `perspective`
///
/// Four in a row for `perspective` is `Score::Win` and for the opponent
/// `Score::Loss`. If both sides have four in a row the two cancel out and the
/// position is scored as even.
pub fn evaluate(board: &Board, perspective: Player) -> Score {
    let mut total = 0;
    let mut computer_four = false;
    let mut human_four = false;

    for row in 0..HEIGHT {
        for column in 0..WIDTH {
            let owner = match board.get(row, column).owner() {
                Some(owner) => owner,
                None => continue,
            };
            match (cell_value(board, row, column, owner), owner) {
                (Some(value), Player::Computer) => total += value,
                (Some(value), Player::Human) => total -= value,
                (None, Player::Computer) => computer_four = true,
                (None, Player::Human) => human_four = true,
            }
        }
    }

    let score = match (computer_four, human_four) {
        (true, false) => Score::Win,
        (false, true) => Score::Loss,
        (true, true) => Score::Value(0),
        (false, false) => Score::Value(total),
    };
    match perspective {
        Player::Computer => score,
        Player::Human => -score,
    }
}
