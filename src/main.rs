//! Kalah-Rust command-line interface.
//!
//! ## Usage
//!
//! - `kalah-rust` - Play a game against the engine (human as South)
//! - `kalah-rust play --south human --north computer --depth 12` - Pick seats
//! - `kalah-rust bench --depth 14` - Time one root search on the opening board

use std::io;
use std::time::Instant;

use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};

use kalah_rust::agent::Agent;
use kalah_rust::board::{Board, Side};
use kalah_rust::constants::{BENCH_DEPTH, DEFAULT_DEPTH, SLOTS, STARTING_STONES};
use kalah_rust::game::{Game, Seat};
use kalah_rust::search::choose_move;

/// Kalah-Rust: a parallel alpha-beta Kalah engine
#[derive(Parser)]
#[command(name = "kalah-rust")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Play a game
    Play {
        /// Who plays South (moves first)
        #[arg(long, value_enum, default_value_t = Player::Human)]
        south: Player,
        /// Who plays North
        #[arg(long, value_enum, default_value_t = Player::Computer)]
        north: Player,
        /// Search depth for computer seats
        #[arg(long, default_value_t = DEFAULT_DEPTH)]
        depth: u8,
        /// Seed for random seats (omit for a nondeterministic game)
        #[arg(long)]
        seed: Option<u64>,
        /// Stones per pit at the start of the game
        #[arg(long, default_value_t = STARTING_STONES)]
        stones: u8,
    },
    /// Time one full-width root search on the opening position
    Bench {
        /// Search depth
        #[arg(long, default_value_t = BENCH_DEPTH)]
        depth: u8,
    },
}

#[derive(Copy, Clone, ValueEnum)]
enum Player {
    Human,
    Random,
    Computer,
}

impl Player {
    fn seat(self, depth: u8, rng: &mut fastrand::Rng) -> Seat {
        match self {
            Player::Human => Seat::Human,
            Player::Random => Seat::Auto(Agent::Random(rng.fork())),
            Player::Computer => Seat::Auto(Agent::Computer { depth }),
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Bench { depth }) => bench(depth),
        Some(Commands::Play {
            south,
            north,
            depth,
            seed,
            stones,
        }) => play(south, north, depth, seed, stones),
        None => play(Player::Human, Player::Computer, DEFAULT_DEPTH, None, STARTING_STONES),
    }
}

fn play(south: Player, north: Player, depth: u8, seed: Option<u64>, stones: u8) -> Result<()> {
    let mut slots = [stones; SLOTS];
    slots[Side::South.store()] = 0;
    slots[Side::North.store()] = 0;
    let board = Board::from_slots(slots);

    if !board.fits_score_range() {
        eprintln!(
            "warning: {} stones on the board exceeds the evaluation score range",
            board.total_stones()
        );
    }

    let mut rng = match seed {
        Some(seed) => fastrand::Rng::with_seed(seed),
        None => fastrand::Rng::new(),
    };
    let south = south.seat(depth, &mut rng);
    let north = north.seat(depth, &mut rng);

    let mut game = Game::new(board, south, north);
    game.run(&mut io::stdin().lock(), &mut io::stdout())?;
    Ok(())
}

fn bench(depth: u8) -> Result<()> {
    let board = Board::new();
    let start = Instant::now();
    let result = choose_move(&board, Side::South, depth);
    let elapsed = start.elapsed();

    match result {
        Some((pit, score)) => {
            println!("depth {depth}: pit {pit}, evaluation {score:+}, {elapsed:.2?}")
        }
        None => println!("no legal move"),
    }
    Ok(())
}
