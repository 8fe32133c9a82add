//! Kalah board representation and move execution.
//!
//! This module provides the core game logic:
//! - Board state as a flat 14-slot array of stone counts
//! - Sowing with the store-skip rule, captures, and extra turns
//! - End-of-game detection and the final sweep
//! - Static evaluation (store difference)
//!
//! The two sides are fixed roles: South owns slots 0..=5 with its store at
//! slot 6 and minimizes the evaluation, North owns slots 7..=12 with its
//! store at slot 13 and maximizes. Board contents alone do not say whose
//! turn it is (an extra turn leaves the mover unchanged), so a [`Side`] is
//! always threaded alongside the board.

use std::fmt;
use std::ops::Range;

use crate::constants::*;

/// One of the two players.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Side {
    /// Slots 0..=5, store at 6. Minimizing side.
    South,
    /// Slots 7..=12, store at 13. Maximizing side.
    North,
}

impl Side {
    /// The other side.
    #[inline]
    pub fn opponent(self) -> Side {
        match self {
            Side::South => Side::North,
            Side::North => Side::South,
        }
    }

    /// Index of this side's store.
    #[inline]
    pub fn store(self) -> usize {
        match self {
            Side::South => SOUTH_STORE,
            Side::North => NORTH_STORE,
        }
    }

    /// Index range of this side's own pits (store excluded).
    #[inline]
    pub fn pits(self) -> Range<usize> {
        match self {
            Side::South => 0..SOUTH_STORE,
            Side::North => SOUTH_STORE + 1..NORTH_STORE,
        }
    }

    /// Whether `pit` is one of this side's own pits (store excluded).
    #[inline]
    pub fn owns_pit(self, pit: usize) -> bool {
        self.pits().contains(&pit)
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::South => write!(f, "South"),
            Side::North => write!(f, "North"),
        }
    }
}

/// Why a requested move is illegal.
///
/// Produced only at the input edge (human move parsing); the engine itself
/// enumerates valid moves and never constructs these.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoveError {
    /// Index is a store or past the end of the board.
    OutOfRange,
    /// Pit belongs to the opponent.
    NotYourPit,
    /// Pit holds no stones.
    EmptyPit,
}

impl fmt::Display for MoveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoveError::OutOfRange => write!(f, "not a pit index"),
            MoveError::NotYourPit => write!(f, "that pit belongs to the opponent"),
            MoveError::EmptyPit => write!(f, "that pit is empty"),
        }
    }
}

/// A Kalah position: stone counts for all 14 slots.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    /// Stone counts, indexed by slot.
    pub slots: [u8; SLOTS],
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl Board {
    /// The standard opening layout: four stones in every pit, empty stores.
    pub fn new() -> Self {
        let mut slots = [STARTING_STONES; SLOTS];
        slots[SOUTH_STORE] = 0;
        slots[NORTH_STORE] = 0;
        Board { slots }
    }

    /// Build a board from an explicit layout.
    pub fn from_slots(slots: [u8; SLOTS]) -> Self {
        Board { slots }
    }

    /// Build a random but symmetric board.
    ///
    /// `stones_per_side` stones are dropped one by one into a uniformly
    /// random pit on South's side, then the layout is mirrored to North,
    /// so both players start from the same material.
    pub fn random(stones_per_side: u8, rng: &mut fastrand::Rng) -> Self {
        let mut slots = [0u8; SLOTS];
        for _ in 0..stones_per_side {
            slots[rng.usize(0..PITS_PER_SIDE)] += 1;
        }
        for pit in 0..PITS_PER_SIDE {
            slots[mirror(pit)] = slots[pit];
        }
        Board { slots }
    }

    /// Total number of stones on the board, stores included.
    pub fn total_stones(&self) -> u16 {
        self.slots.iter().map(|&s| s as u16).sum()
    }

    /// Whether every reachable evaluation of this board fits in [`Score`].
    ///
    /// The evaluation is a store difference, so it is bounded by the stone
    /// total. Callers configuring oversized boards should warn the user;
    /// the search itself never re-checks this.
    pub fn fits_score_range(&self) -> bool {
        self.total_stones() <= SCORE_MAX as u16
    }

    /// Indices of `side`'s own non-empty pits, in ascending order.
    pub fn legal_moves(&self, side: Side) -> impl Iterator<Item = usize> + '_ {
        side.pits().filter(|&pit| self.slots[pit] > 0)
    }

    /// Check a requested move for `side` without applying it.
    pub fn validate_move(&self, pit: usize, side: Side) -> Result<(), MoveError> {
        if pit >= SLOTS || pit == SOUTH_STORE || pit == NORTH_STORE {
            return Err(MoveError::OutOfRange);
        }
        if !side.owns_pit(pit) {
            return Err(MoveError::NotYourPit);
        }
        if self.slots[pit] == 0 {
            return Err(MoveError::EmptyPit);
        }
        Ok(())
    }
}

/// The opposite-side pit symmetric to `pit` across the board's center.
#[inline]
pub fn mirror(pit: usize) -> usize {
    debug_assert!(pit < SLOTS - 1 && pit != SOUTH_STORE);
    NORTH_STORE - 1 - pit
}

/// Sow the stones from `pit` and resolve captures and extra turns.
///
/// Returns the side to move next. The board is mutated in place; callers
/// exploring hypothetical moves must pass a private copy.
///
/// Sowing deposits exactly `board.slots[pit]` stones into successive slots,
/// wrapping from slot 13 to slot 0 and skipping the opponent's store, so the
/// opponent can never be handed points. If the last stone lands in an own
/// pit that was empty before the move and the mirrored opponent pit is
/// non-empty, both pits are captured into the mover's store. If it lands
/// exactly in the own store, the mover goes again.
///
/// Preconditions (debug-asserted): `pit` is one of `mover`'s own pits and is
/// non-empty. Input validation belongs at the edge, see
/// [`Board::validate_move`].
pub fn apply_move(board: &mut Board, pit: usize, mover: Side) -> Side {
    debug_assert!(mover.owns_pit(pit), "pit {pit} is not {mover}'s");
    debug_assert!(board.slots[pit] > 0, "pit {pit} is empty");

    let skipped = mover.opponent().store();
    let mut stones = board.slots[pit];
    board.slots[pit] = 0;

    let mut cursor = pit;
    while stones > 0 {
        cursor = (cursor + 1) % SLOTS;
        if cursor == skipped {
            continue;
        }
        board.slots[cursor] += 1;
        stones -= 1;
    }

    if cursor == mover.store() {
        return mover; // landed in own store: extra turn
    }

    // Capture: last stone landed alone in an own pit, opposite pit occupied.
    if mover.owns_pit(cursor) && board.slots[cursor] == 1 && board.slots[mirror(cursor)] > 0 {
        let captured = board.slots[cursor] + board.slots[mirror(cursor)];
        board.slots[cursor] = 0;
        board.slots[mirror(cursor)] = 0;
        board.slots[mover.store()] += captured;
    }

    mover.opponent()
}

/// Whether all six of `side`'s pits are empty (its store does not count).
pub fn is_side_empty(board: &Board, side: Side) -> bool {
    side.pits().all(|pit| board.slots[pit] == 0)
}

/// Move all of `side`'s remaining pit stones into `side`'s own store.
///
/// Called exactly once, on the side that still has stones, when the other
/// side has run out of moves. Sweeping the already-empty side is a logic
/// error excluded by the callers' end-of-game checks.
pub fn sweep(board: &mut Board, side: Side) {
    for pit in side.pits() {
        board.slots[side.store()] += board.slots[pit];
        board.slots[pit] = 0;
    }
}

/// Static evaluation: North's store minus South's store.
///
/// Positive favors North. Stones still sitting in pits are not counted;
/// crediting them is the sweep's job and only happens once a side is empty.
pub fn static_score(board: &Board) -> Score {
    (board.slots[NORTH_STORE] as i16 - board.slots[SOUTH_STORE] as i16) as Score
}

impl fmt::Display for Board {
    /// Render the board from South's seat: North's row on top, reading
    /// right-to-left from its store, South's row beneath with its store on
    /// the right.
    ///
    /// ```text
    ///  [ 0]  4  4  4  4  4  4
    ///        4  4  4  4  4  4  [ 0]
    /// ```
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, " [{:>2}]", self.slots[NORTH_STORE])?;
        for pit in Side::North.pits().rev() {
            write!(f, " {:>2}", self.slots[pit])?;
        }
        writeln!(f)?;
        write!(f, "     ")?;
        for pit in Side::South.pits() {
            write!(f, " {:>2}", self.slots[pit])?;
        }
        writeln!(f, "  [{:>2}]", self.slots[SOUTH_STORE])
    }
}
