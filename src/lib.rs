//! A computer opponent for the board game 'Connect 4'
//!
//! The computer picks its moves with a depth-limited minimax search using
//! alpha-beta pruning, scoring the positions at the search horizon with a
//! heuristic that rewards runs of pieces which can still grow into four in
//! a row.
//!
//! # Basic Usage
//!
//! ```
//! use connect4_minimax::{apply_move, compute_computer_move, new_game, Outcome, Player};
//!
//!# use std::error::Error;
//!# fn main() -> Result<(), Box<dyn Error>> {
//! let mut board = new_game();
//! let placement = apply_move(&mut board, 3, Player::Human)?;
//! assert_eq!(placement.row, 5);
//! assert_eq!(placement.outcome, Outcome::InProgress);
//!
//! let column = compute_computer_move(&board).expect("the board has room");
//! apply_move(&mut board, column, Player::Computer)?;
//!# Ok(())
//!# }
//! ```

use static_assertions::*;
pub use anyhow;

pub mod board;

pub mod error;

pub mod evaluate;

pub mod game;

pub mod search;

pub mod sweep;


pub use board::{Board, Cell, Player};
pub use error::{Error, MoveRejection, Result};
pub use evaluate::{evaluate, Score};
pub use game::{apply_move, new_game, outcome_after, Outcome, Placement};
pub use search::{compute_computer_move, SearchResult, Searcher, MAX_DEPTH};

/// The width of the game board in tiles
pub const WIDTH: usize = 7;

/// The height of the game board in tiles
pub const HEIGHT: usize = 6;

/// The number of aligned tiles that wins the game
pub const WIN_LENGTH: usize = 4;

// a four in a row has to fit on the board in every direction
const_assert!(WIN_LENGTH <= WIDTH && WIN_LENGTH <= HEIGHT);
// the search must look at least one ply past the candidate move
const_assert!(search::MAX_DEPTH >= 1);
// column digits in move strings are single characters
const_assert!(WIDTH <= 9);
