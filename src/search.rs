//! Depth-limited minimax search with alpha-beta pruning

use tracing::{debug, trace};

use crate::board::{Board, Player};
use crate::evaluate::{evaluate, Score};

/// Number of plies searched below each candidate move
pub const MAX_DEPTH: usize = 3;

/// A move chosen by the search and the score it was given
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct SearchResult {
    pub column: usize,
    pub row: usize,
    pub score: Score,
}

/// An agent picking moves for one side of a Connect 4 position
///
/// # Notes
/// The search tries every legal move in column order and looks `MAX_DEPTH`
/// plies past it, scoring the leaves with [`evaluate`]. Hypothetical moves are
/// played on the searcher's own copy of the board and taken back with
/// [`Board::with_piece`], so the caller's board is never touched.
#[derive(Clone)]
pub struct Searcher {
    board: Board,
    player: Player,

    /// The number of nodes searched by this `Searcher` so far (for diagnostics only)
    pub node_count: usize,
}

impl Searcher {
    /// Creates a new `Searcher` choosing moves for the computer
    pub fn new(board: Board) -> Self {
        Self {
            board,
            player: Player::Computer,
            node_count: 0,
        }
    }

    /// Makes an existing `Searcher` choose moves for `player` instead
    pub fn for_player(mut self, player: Player) -> Self {
        self.player = player;
        self
    }

    /// Scores the current position with `depth` plies already played
    ///
    /// `maximizing` is true when the searching player is to move.
    pub fn minimax(&mut self, depth: usize, maximizing: bool, alpha: Score, beta: Score) -> Score {
        alpha_beta(
            &mut self.board,
            self.player,
            &mut self.node_count,
            depth,
            maximizing,
            alpha,
            beta,
        )
    }

    /// Finds the best move for the searching player, `None` if the board is full
    ///
    /// Every candidate is searched with a full window. When two candidates
    /// score the same, the one enumerated later wins.
    pub fn pick_next_move(&mut self) -> Option<SearchResult> {
        let player = self.player;
        let mut best: Option<SearchResult> = None;

        for (row, column) in self.board.valid_drops() {
            self.node_count += 1;
            let node_count = &mut self.node_count;
            let score = self.board.with_piece(row, column, player, |board| {
                alpha_beta(board, player, node_count, 0, false, Score::Loss, Score::Win)
            });
            trace!(column, row, %score, "candidate searched");

            match best {
                Some(current) if score < current.score => {}
                _ => best = Some(SearchResult { column, row, score }),
            }
        }

        if let Some(chosen) = best {
            debug!(
                column = chosen.column,
                row = chosen.row,
                score = %chosen.score,
                nodes = self.node_count,
                "picked move"
            );
        }
        best
    }
}

impl std::ops::Deref for Searcher {
    type Target = Board;

    fn deref(&self) -> &Self::Target {
        &self.board
    }
}

fn alpha_beta(
    board: &mut Board,
    player: Player,
    node_count: &mut usize,
    depth: usize,
    maximizing: bool,
    mut alpha: Score,
    mut beta: Score,
) -> Score {
    *node_count += 1;

    if depth == MAX_DEPTH || board.is_full() {
        return evaluate(board, player);
    }

    let mover = if maximizing { player } else { player.opponent() };
    let mut best = if maximizing { Score::Loss } else { Score::Win };

    for (row, column) in board.valid_drops() {
        let score = board.with_piece(row, column, mover, |board| {
            alpha_beta(board, player, node_count, depth + 1, !maximizing, alpha, beta)
        });

        if maximizing {
            best = best.max(score);
            alpha = alpha.max(score);
            // nothing beats a forced win
            if best == Score::Win {
                return best;
            }
        } else {
            best = best.min(score);
            beta = beta.min(score);
            if best == Score::Loss {
                return best;
            }
        }
        // the other side already has a better option elsewhere in the tree
        if beta <= alpha {
            return best;
        }
    }
    best
}

/// Chooses the computer's next column for `board`, `None` if the board is full
pub fn compute_computer_move(board: &Board) -> Option<usize> {
    Searcher::new(*board).pick_next_move().map(|chosen| chosen.column)
}
