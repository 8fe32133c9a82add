//! Depth-bounded minimax search with alpha-beta pruning.
//!
//! South minimizes the evaluation and North maximizes it; the roles never
//! swap, so an extra turn simply keeps the same side optimizing. Every
//! recursive call and every root task owns its board outright, which is what
//! makes the root fan-out safe without any locking.
//!
//! [`choose_move`] parallelizes the root: each legal first move is searched
//! in its own rayon task with a fresh full-width window. Root siblings share
//! no pruning information, trading some cut-offs for parallelism.

use rayon::prelude::*;

use crate::board::{apply_move, is_side_empty, static_score, sweep, Board, Side};
use crate::constants::{Score, SCORE_MAX, SCORE_MIN};

/// Evaluate `board` with `mover` to play, searching `depth` plies ahead.
///
/// Terminal positions are resolved first: when one side has no stones left,
/// the other side's pits are swept into its store and the final store
/// difference is returned, regardless of remaining depth. At depth 0 the
/// bare store difference is returned; stones still on the board are not
/// credited to anyone.
///
/// The `(alpha, beta)` window flows downward only. A child inherits the
/// window as tightened by its elder siblings; nothing propagates back up
/// besides the returned score.
pub fn minimax(mut board: Board, mover: Side, depth: u8, alpha: Score, mut beta: Score) -> Score {
    if is_side_empty(&board, Side::South) {
        sweep(&mut board, Side::North);
        return static_score(&board);
    }
    if is_side_empty(&board, Side::North) {
        sweep(&mut board, Side::South);
        return static_score(&board);
    }
    if depth == 0 {
        return static_score(&board);
    }

    match mover {
        Side::South => {
            let mut best = SCORE_MAX;
            for pit in mover.pits() {
                if board.slots[pit] == 0 {
                    continue;
                }
                let mut child = board.clone();
                let next = apply_move(&mut child, pit, mover);
                best = best.min(minimax(child, next, depth - 1, alpha, beta));
                if best <= alpha {
                    break; // fail-low: the maximizing ancestor has better
                }
                beta = beta.min(best);
            }
            best
        }
        Side::North => {
            let mut best = SCORE_MIN;
            let mut alpha = alpha;
            for pit in mover.pits() {
                if board.slots[pit] == 0 {
                    continue;
                }
                let mut child = board.clone();
                let next = apply_move(&mut child, pit, mover);
                best = best.max(minimax(child, next, depth - 1, alpha, beta));
                if best >= beta {
                    break; // fail-high
                }
                alpha = alpha.max(best);
            }
            best
        }
    }
}

/// Pick the best move for `mover`, searching each candidate `depth` plies.
///
/// Every non-empty own pit is searched concurrently on a private board copy
/// with its own full-width window; the call joins all branches before
/// aggregating, so no task outlives it. Ties go to the lowest pit index.
///
/// Returns the chosen pit and the evaluation from the mover's own
/// perspective (positive is good for the mover), or `None` when the mover
/// has no legal move. The input board is left untouched; advancing the real
/// game state is the caller's job.
pub fn choose_move(board: &Board, mover: Side, depth: u8) -> Option<(usize, Score)> {
    let candidates: Vec<usize> = board.legal_moves(mover).collect();

    let results: Vec<(usize, Score)> = candidates
        .into_par_iter()
        .map(|pit| {
            let mut child = board.clone();
            let next = apply_move(&mut child, pit, mover);
            let score = minimax(child, next, depth.saturating_sub(1), SCORE_MIN, SCORE_MAX);
            (pit, score)
        })
        .collect();

    let mut best: Option<(usize, Score)> = None;
    for &(pit, score) in &results {
        let better = match best {
            None => true,
            Some((_, incumbent)) => match mover {
                Side::South => score < incumbent,
                Side::North => score > incumbent,
            },
        };
        if better {
            best = Some((pit, score));
        }
    }

    best.map(|(pit, score)| {
        let for_mover = match mover {
            Side::South => score.saturating_neg(),
            Side::North => score,
        };
        (pit, for_mover)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Board;

    /// Exhaustive minimax with no pruning, used as the reference oracle.
    fn full_minimax(mut board: Board, mover: Side, depth: u8) -> Score {
        if is_side_empty(&board, Side::South) {
            sweep(&mut board, Side::North);
            return static_score(&board);
        }
        if is_side_empty(&board, Side::North) {
            sweep(&mut board, Side::South);
            return static_score(&board);
        }
        if depth == 0 {
            return static_score(&board);
        }
        let scores = board.legal_moves(mover).collect::<Vec<_>>().into_iter().map(|pit| {
            let mut child = board.clone();
            let next = apply_move(&mut child, pit, mover);
            full_minimax(child, next, depth - 1)
        });
        match mover {
            Side::South => scores.min().unwrap(),
            Side::North => scores.max().unwrap(),
        }
    }

    #[test]
    fn test_pruning_matches_exhaustive_search() {
        let mut rng = fastrand::Rng::with_seed(2024);
        for _ in 0..30 {
            let board = Board::random(rng.u8(6..30), &mut rng);
            for depth in 0..=4 {
                for mover in [Side::South, Side::North] {
                    let pruned =
                        minimax(board.clone(), mover, depth, SCORE_MIN, SCORE_MAX);
                    let full = full_minimax(board.clone(), mover, depth);
                    assert_eq!(
                        pruned, full,
                        "divergence at depth {depth} for {mover} on {:?}",
                        board.slots
                    );
                }
            }
        }
    }

    #[test]
    fn test_terminal_sweep_beats_depth_limit() {
        // South is empty: the search must sweep North and score, even at
        // depth 0 and even though North has moves left.
        let board = Board::from_slots([0, 0, 0, 0, 0, 0, 3, 2, 0, 1, 0, 2, 0, 10]);
        let score = minimax(board, Side::North, 0, SCORE_MIN, SCORE_MAX);
        assert_eq!(score, 15 - 3);
    }

    #[test]
    fn test_depth_zero_leaves_pit_stones_uncounted() {
        let board = Board::from_slots([1, 0, 0, 0, 0, 0, 2, 0, 0, 0, 0, 0, 9, 5]);
        let score = minimax(board, Side::North, 0, SCORE_MIN, SCORE_MAX);
        assert_eq!(score, 5 - 2);
    }

    #[test]
    fn test_choose_move_takes_extra_turn_into_store() {
        // Pit 9 holds 4 stones and lands in North's store, keeping the turn
        // and banking a second point on the follow-up (+2). Pit 8 hands the
        // turn to South, who banks one back (-1). The search must credit the
        // extra turn to the same maximizing side.
        let board = Board::from_slots([4, 4, 0, 4, 4, 4, 0, 0, 2, 4, 0, 0, 0, 0]);
        let (pit, score) = choose_move(&board, Side::North, 2).unwrap();
        assert_eq!(pit, 9);
        assert_eq!(score, 2);
    }

    #[test]
    fn test_choose_move_prefers_capture() {
        // South's pit 1 lands a lone stone in empty pit 2, capturing the 8
        // stones sitting opposite in pit 10.
        let board = Board::from_slots([4, 1, 0, 1, 1, 1, 0, 4, 4, 4, 8, 4, 4, 0]);
        let (pit, score) = choose_move(&board, Side::South, 1).unwrap();
        assert_eq!(pit, 1);
        assert!(score > 0);
    }

    #[test]
    fn test_choose_move_mover_perspective_sign() {
        // North is far ahead; whatever South plays, its own-perspective
        // evaluation is negative while North's is positive.
        let board = Board::from_slots([1, 1, 1, 0, 0, 0, 0, 1, 1, 1, 0, 0, 0, 20]);
        let (_, south_view) = choose_move(&board, Side::South, 3).unwrap();
        let (_, north_view) = choose_move(&board, Side::North, 3).unwrap();
        assert!(south_view < 0);
        assert!(north_view > 0);
    }

    #[test]
    fn test_choose_move_is_deterministic() {
        let mut rng = fastrand::Rng::with_seed(99);
        let board = Board::random(24, &mut rng);
        let first = choose_move(&board, Side::North, 6);
        for _ in 0..10 {
            assert_eq!(choose_move(&board, Side::North, 6), first);
        }
    }

    #[test]
    fn test_choose_move_breaks_ties_low() {
        // At zero lookahead every candidate sows a single stone into the
        // next pit with no store landing and no capture (pit 7 is empty, so
        // landing in pit 5 captures nothing). All scores are equal, so the
        // first enumerated pit must win.
        let board = Board::from_slots([1, 1, 1, 1, 1, 0, 0, 0, 1, 1, 1, 1, 1, 0]);
        let (pit, score) = choose_move(&board, Side::South, 0).unwrap();
        assert_eq!(pit, 0);
        assert_eq!(score, 0);
    }

    #[test]
    fn test_choose_move_without_legal_moves() {
        let board = Board::from_slots([0, 0, 0, 0, 0, 0, 5, 1, 1, 1, 1, 1, 1, 0]);
        assert_eq!(choose_move(&board, Side::South, 8), None);
    }

    #[test]
    fn test_choose_move_leaves_board_untouched() {
        let board = Board::new();
        let snapshot = board.clone();
        choose_move(&board, Side::South, 5);
        assert_eq!(board, snapshot);
    }
}
