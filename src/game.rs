//! Interactive game loop.
//!
//! Drives a full game between any mix of human, random, and computer
//! players: renders the board, collects and validates moves, honors extra
//! turns, and performs the final sweep once a side runs out of stones.
//!
//! Human input is validated here and re-prompted on error; the rule engine
//! itself only ever sees moves that passed [`Board::validate_move`].

use std::io::{BufRead, Write};

use anyhow::{Context, Result};

use crate::agent::Agent;
use crate::board::{apply_move, is_side_empty, sweep, Board, Side};

/// Who plays a seat.
pub enum Seat {
    /// Moves are read from the input stream.
    Human,
    /// Moves come from an [`Agent`].
    Auto(Agent),
}

/// A game in progress.
pub struct Game {
    board: Board,
    to_move: Side,
    south: Seat,
    north: Seat,
    turns: u32,
}

/// Outcome of a finished game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Winner(Side),
    Draw,
}

impl Game {
    pub fn new(board: Board, south: Seat, north: Seat) -> Self {
        Game {
            board,
            to_move: Side::South,
            south,
            north,
            turns: 0,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Play until one side is out of stones, then sweep and report.
    ///
    /// Reads human moves from `input` and writes all output to `output`.
    /// The pit legend numbers South's pits 0-5 left to right; North's pits
    /// are entered by their slot index 7-12.
    pub fn run(&mut self, input: &mut impl BufRead, output: &mut impl Write) -> Result<Outcome> {
        writeln!(output, "   <  0 --1 --2 --3 --4 --5  >")?;
        write!(output, "{}", self.board)?;

        while !is_side_empty(&self.board, Side::South) && !is_side_empty(&self.board, Side::North)
        {
            self.turns += 1;
            let mover = self.to_move;

            // Borrow the board and the moving seat disjointly.
            let Game {
                board,
                south,
                north,
                ..
            } = self;
            let seat = match mover {
                Side::South => south,
                Side::North => north,
            };

            let pit = match seat {
                Seat::Human => prompt_move(board, mover, input, output)?,
                Seat::Auto(agent) => {
                    // A side with no stones never gets here, so the agent
                    // always finds a move.
                    let (pit, eval) = agent
                        .select(board, mover)
                        .context("agent found no legal move on a non-empty side")?;
                    if let Some(score) = eval {
                        writeln!(output, "{mover} plays {pit} (evaluation {score:+})")?;
                    } else {
                        writeln!(output, "{mover} plays {pit}")?;
                    }
                    pit
                }
            };

            self.to_move = apply_move(&mut self.board, pit, mover);
            write!(output, "{}", self.board)?;
        }

        let outcome = self.finish();
        write!(output, "{}", self.board)?;
        writeln!(output, "Total turns: {}", self.turns)?;
        match outcome {
            Outcome::Winner(side) => writeln!(output, "{side} wins")?,
            Outcome::Draw => writeln!(output, "Draw")?,
        }
        Ok(outcome)
    }

    /// Sweep the surviving side's stones and decide the winner by stores.
    fn finish(&mut self) -> Outcome {
        if is_side_empty(&self.board, Side::South) {
            sweep(&mut self.board, Side::North);
        } else {
            sweep(&mut self.board, Side::South);
        }
        let south = self.board.slots[Side::South.store()];
        let north = self.board.slots[Side::North.store()];
        match south.cmp(&north) {
            std::cmp::Ordering::Greater => Outcome::Winner(Side::South),
            std::cmp::Ordering::Less => Outcome::Winner(Side::North),
            std::cmp::Ordering::Equal => Outcome::Draw,
        }
    }
}

/// Read pit indices from `input` until one is legal for `mover`.
fn prompt_move(
    board: &Board,
    mover: Side,
    input: &mut impl BufRead,
    output: &mut impl Write,
) -> Result<usize> {
    loop {
        write!(output, "{mover} move: ")?;
        output.flush()?;

        let mut line = String::new();
        let n = input.read_line(&mut line).context("reading move input")?;
        if n == 0 {
            anyhow::bail!("input stream closed mid-game");
        }

        let pit = match line.trim().parse::<usize>() {
            Ok(pit) => pit,
            Err(_) => {
                writeln!(output, "enter a pit index")?;
                continue;
            }
        };
        match board.validate_move(pit, mover) {
            Ok(()) => return Ok(pit),
            Err(e) => writeln!(output, "illegal move: {e}")?,
        }
    }
}

#[cfg(test)]
mod tests {
    use std::io;

    use super::*;
    use crate::constants::{NORTH_STORE, SOUTH_STORE};

    fn auto_game(seed_south: u64, seed_north: u64) -> Game {
        Game::new(
            Board::new(),
            Seat::Auto(Agent::Random(fastrand::Rng::with_seed(seed_south))),
            Seat::Auto(Agent::Random(fastrand::Rng::with_seed(seed_north))),
        )
    }

    #[test]
    fn test_random_game_runs_to_completion() {
        let mut game = auto_game(1, 2);
        let mut output = Vec::new();
        let outcome = game.run(&mut io::empty(), &mut output).unwrap();

        // All 48 stones end up in the stores.
        let board = game.board();
        assert_eq!(
            board.slots[SOUTH_STORE] as u16 + board.slots[NORTH_STORE] as u16,
            48
        );
        for side in [Side::South, Side::North] {
            assert!(is_side_empty(board, side));
        }
        match outcome {
            Outcome::Winner(side) => {
                let (w, l) = match side {
                    Side::South => (SOUTH_STORE, NORTH_STORE),
                    Side::North => (NORTH_STORE, SOUTH_STORE),
                };
                assert!(board.slots[w] > board.slots[l]);
            }
            Outcome::Draw => {
                assert_eq!(board.slots[SOUTH_STORE], board.slots[NORTH_STORE]);
            }
        }
    }

    #[test]
    fn test_seeded_games_replay_identically() {
        let mut output_a = Vec::new();
        let mut output_b = Vec::new();
        auto_game(7, 8).run(&mut io::empty(), &mut output_a).unwrap();
        auto_game(7, 8).run(&mut io::empty(), &mut output_b).unwrap();
        assert_eq!(output_a, output_b);
    }

    #[test]
    fn test_human_input_is_validated_and_reprompted() {
        // South's single stone lands in its store and empties the side,
        // ending the game after one accepted move.
        let board = Board::from_slots([0, 0, 0, 0, 0, 1, 0, 2, 0, 0, 0, 0, 0, 0]);
        let mut game = Game::new(board, Seat::Human, Seat::Human);

        // Garbage, store index, opponent pit, empty pit, then the real move.
        let mut script: &[u8] = b"x\n6\n7\n0\n5\n";
        let mut output = Vec::new();
        let outcome = game.run(&mut script, &mut output).unwrap();

        let text = String::from_utf8(output).unwrap();
        assert!(text.contains("enter a pit index"));
        assert!(text.contains("illegal move"));
        // South banked its last stone; North sweeps 2 and wins.
        assert_eq!(outcome, Outcome::Winner(Side::North));
        assert_eq!(game.board().slots[SOUTH_STORE], 1);
        assert_eq!(game.board().slots[NORTH_STORE], 2);
    }
}
