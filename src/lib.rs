//! Kalah-Rust: a parallel alpha-beta Kalah engine.
//!
//! This crate implements the 6-pit-per-side Kalah variant of Mancala
//! (sowing, store-landing extra turns, single-stone captures, end-game
//! sweep) and a depth-bounded minimax search with alpha-beta pruning,
//! fanned out across the legal first moves at the search root.
//!
//! ## Modules
//!
//! - [`constants`] - Board geometry and engine parameters
//! - [`board`] - Core game logic (board state, sowing, captures, scoring)
//! - [`search`] - Alpha-beta search and the parallel root dispatcher
//! - [`agent`] - Random and computer move selection
//! - [`game`] - Interactive game loop and renderer
//!
//! ## Example
//!
//! ```
//! use kalah_rust::board::{apply_move, Board, Side};
//! use kalah_rust::search::choose_move;
//!
//! // Start a new game and let the engine reply to an opening move.
//! let mut board = Board::new();
//! apply_move(&mut board, 2, Side::South);
//!
//! let (pit, score) = choose_move(&board, Side::North, 8).unwrap();
//! println!("North plays {pit} (evaluation {score:+})");
//! ```

pub mod agent;
pub mod board;
pub mod constants;
pub mod game;
pub mod search;
