//! Constants for board geometry, score range, and engine parameters.
//!
//! The board is a 1D array of 14 slots. Each side owns six pits and one
//! store; a store sits immediately after its side's pit run, so sowing
//! advances through a side's pits, then into its store, then wraps into
//! the opponent's pits.

// =============================================================================
// Board Geometry
// =============================================================================

/// Number of playable pits per side.
pub const PITS_PER_SIDE: usize = 6;

/// Total number of slots: two runs of six pits, each followed by a store.
pub const SLOTS: usize = 2 * (PITS_PER_SIDE + 1);

/// South's store index (follows South's pits 0..=5).
pub const SOUTH_STORE: usize = PITS_PER_SIDE;

/// North's store index (follows North's pits 7..=12).
pub const NORTH_STORE: usize = SLOTS - 1;

/// Stones per pit in the standard opening layout.
pub const STARTING_STONES: u8 = 4;

// =============================================================================
// Search Parameters
// =============================================================================

/// Score type used throughout the search.
///
/// The evaluation is a store difference, so any board whose stone total fits
/// in this range is safe. Totals are checked at construction time, never
/// inside the search.
pub type Score = i8;

/// Lower bound of the alpha-beta window (below any reachable score).
pub const SCORE_MIN: Score = Score::MIN;

/// Upper bound of the alpha-beta window.
pub const SCORE_MAX: Score = Score::MAX;

/// Default search depth for the computer agent.
pub const DEFAULT_DEPTH: u8 = 10;

/// Default search depth for the `bench` command.
pub const BENCH_DEPTH: u8 = 14;
