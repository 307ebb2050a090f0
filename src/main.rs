use anyhow::Result;

use std::io::{stdin, stdout, Stdin, Write};

use connect4_minimax::*;

mod terminal;
use terminal::display;

fn ask_yes_no(stdin: &Stdin, question: &str) -> Result<bool> {
    loop {
        let mut buffer = String::new();
        print!("{} y/n: ", question);
        stdout().flush().expect("failed to flush to stdout!");
        stdin.read_line(&mut buffer)?;
        match buffer.to_lowercase().chars().next() {
            Some('y') => return Ok(true),
            Some('n') => return Ok(false),
            _ => println!("Unknown answer given"),
        }
    }
}

fn main() -> Result<()> {
    // logs go to stderr so they never tear the board drawn on stdout
    tracing_subscriber::fmt().with_writer(std::io::stderr).init();

    let stdin = stdin();

    println!("Welcome to Connect 4\n");
    println!("You play red, the computer plays yellow.");

    let mut to_move = if ask_yes_no(&stdin, "Would you like to move first?")? {
        Player::Human
    } else {
        Player::Computer
    };
    let mut board = new_game();

    // game loop
    loop {
        display(&board).expect("Failed to draw board!");

        let column = match to_move {
            Player::Computer => {
                println!("Computer is thinking...");
                stdout().flush().expect("Failed to flush to stdout!");

                let mut searcher = Searcher::new(board);
                let chosen = match searcher.pick_next_move() {
                    Some(chosen) => chosen,
                    // a full board always ends the game before this point
                    None => break,
                };
                match chosen.score {
                    Score::Win => println!("The computer can force a win."),
                    Score::Loss => println!("The computer expects to lose."),
                    Score::Value(_) => {}
                }
                println!(
                    "Computer plays column {} ({} positions searched)",
                    chosen.column + 1,
                    searcher.node_count
                );
                chosen.column
            }
            Player::Human => {
                print!("Move input > ");
                stdout().flush().expect("Failed to flush to stdout!");
                let mut input_str = String::new();
                stdin.read_line(&mut input_str)?;

                match input_str.trim().parse::<usize>() {
                    Ok(column @ 1..=WIDTH) => column - 1,
                    _ => {
                        println!(
                            "Invalid column: {}, columns must be between 1 and {}",
                            input_str.trim(),
                            WIDTH
                        );
                        continue;
                    }
                }
            }
        };

        let placement = match apply_move(&mut board, column, to_move) {
            Ok(placement) => placement,
            Err(Error::InvalidMove { reason, .. }) => {
                println!("Invalid move, {}", reason);
                // try the move again
                continue;
            }
            Err(err) => return Err(err.into()),
        };

        match placement.outcome {
            Outcome::InProgress => to_move = to_move.opponent(),

            // end states
            Outcome::Win(Player::Human) => {
                display(&board).expect("Failed to draw board!");
                println!("You win!");
                break;
            }
            Outcome::Win(Player::Computer) => {
                display(&board).expect("Failed to draw board!");
                println!("The computer wins!");
                break;
            }
            Outcome::Tie => {
                display(&board).expect("Failed to draw board!");
                println!("A tie! Game over.");
                break;
            }
        }
    }
    Ok(())
}
