//! Engine self-play from every opening of a fixed length
//!
//! Each opening is replayed with the human moving first, then the searcher
//! plays both sides until the game is decided. Games are independent, so
//! they are spread over the rayon thread pool while the calling thread keeps
//! a progress bar up to date.

use anyhow::{anyhow, Result};
use indicatif::*;
use rayon::prelude::*;
use tracing::debug;

use std::fmt;
use std::sync::mpsc::*;
use std::thread;
use std::time::*;

use crate::*;

/// How a single self-play game ended
#[derive(Copy, Clone, Debug)]
pub struct PlayOut {
    pub outcome: Outcome,
    /// Plies played after the opening
    pub plies: usize,
    pub nodes: usize,
}

/// Totals over every opening of a sweep
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct SweepReport {
    pub openings: usize,
    pub human_wins: usize,
    pub computer_wins: usize,
    pub ties: usize,
    pub plies: usize,
    pub nodes: usize,
}

impl SweepReport {
    fn record(&mut self, play_out: &PlayOut) {
        self.openings += 1;
        match play_out.outcome {
            Outcome::Win(Player::Human) => self.human_wins += 1,
            Outcome::Win(Player::Computer) => self.computer_wins += 1,
            Outcome::Tie => self.ties += 1,
            Outcome::InProgress => {}
        }
        self.plies += play_out.plies;
        self.nodes += play_out.nodes;
    }
}

impl fmt::Display for SweepReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Openings played: {}", self.openings)?;
        writeln!(f, "Player 1 (X) wins: {}", self.human_wins)?;
        writeln!(f, "Player 2 (O) wins: {}", self.computer_wins)?;
        writeln!(f, "Ties: {}", self.ties)?;
        write!(
            f,
            "Plies searched: {}, positions searched: {}",
            self.plies, self.nodes
        )
    }
}

/// Longest opening a sweep will enumerate
pub const MAX_PLIES: usize = 6;

#[derive(Copy, Clone, Debug)]
pub struct Sweep {
    plies: usize,
    progress: bool,
}

impl Sweep {
    /// Creates a sweep over every opening of `plies` moves
    ///
    /// Fails for openings longer than `MAX_PLIES`.
    pub fn new(plies: usize) -> Result<Self> {
        if plies > MAX_PLIES {
            return Err(anyhow!(
                "{} plies is too long an opening, use at most {}",
                plies,
                MAX_PLIES
            ));
        }
        Ok(Self {
            plies,
            progress: true,
        })
    }

    /// Turns the progress bar on or off
    pub fn with_progress(mut self, progress: bool) -> Self {
        self.progress = progress;
        self
    }

    /// Every opening position still in play, with the side to move
    pub fn openings(&self) -> Vec<(Board, Player)> {
        let total = WIDTH.pow(self.plies as u32);
        let mut openings = Vec::new();
        let mut moves = vec![0; self.plies];

        for index in 0..total {
            // the opening's columns are the base WIDTH digits of its index
            let mut rest = index;
            for slot in moves.iter_mut().rev() {
                *slot = rest % WIDTH;
                rest /= WIDTH;
            }
            if let Some(opening) = replay(&moves) {
                openings.push(opening);
            }
        }
        openings
    }

    /// Plays out every opening and tallies the results
    pub fn run(&self) -> Result<SweepReport> {
        let start = Instant::now();
        let openings = self.openings();

        let progress = if self.progress {
            ProgressBar::new(openings.len() as u64)
        } else {
            ProgressBar::hidden()
        };
        progress.set_style(
            ProgressStyle::default_bar()
                .template("Playing out openings: {bar:40.cyan/blue} {msg} ~{eta} remaining")
                .progress_chars("█▓▒░  "),
        );

        let (tx, rx) = channel();
        let worker = thread::spawn(move || {
            openings
                .into_par_iter()
                .for_each_with(tx, |tx, (board, to_move)| {
                    // the receiver only hangs up once the sweep is abandoned
                    let _ = tx.send(play_out(board, to_move));
                });
        });

        let mut report = SweepReport::default();
        for result in rx {
            report.record(&result?);
            progress.inc(1);
            progress.set_message(&format!(
                "({} / {})",
                progress.position(),
                progress.length()
            ));
        }
        worker
            .join()
            .map_err(|_| anyhow!("sweep worker thread panicked"))?;
        progress.finish();

        debug!(
            plies = self.plies,
            openings = report.openings,
            elapsed_ms = start.elapsed().as_millis() as u64,
            "sweep complete"
        );
        Ok(report)
    }
}

/// Replays an opening from an empty board, `None` if it is illegal or decides the game
fn replay(moves: &[usize]) -> Option<(Board, Player)> {
    let mut board = new_game();
    let mut to_move = Player::Human;
    for &column in moves {
        match apply_move(&mut board, column, to_move) {
            Ok(Placement {
                outcome: Outcome::InProgress,
                ..
            }) => to_move = to_move.opponent(),
            _ => return None,
        }
    }
    Some((board, to_move))
}

/// Lets the searcher play both sides of `board` until the game ends
pub fn play_out(mut board: Board, mut to_move: Player) -> Result<PlayOut> {
    let mut plies = 0;
    let mut nodes = 0;

    loop {
        let mut searcher = Searcher::new(board).for_player(to_move);
        let chosen = match searcher.pick_next_move() {
            Some(chosen) => chosen,
            None => {
                return Ok(PlayOut {
                    outcome: Outcome::Tie,
                    plies,
                    nodes,
                })
            }
        };
        nodes += searcher.node_count;

        let placement = apply_move(&mut board, chosen.column, to_move)?;
        plies += 1;
        if placement.outcome != Outcome::InProgress {
            return Ok(PlayOut {
                outcome: placement.outcome,
                plies,
                nodes,
            });
        }
        to_move = to_move.opponent();
    }
}
