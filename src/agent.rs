//! Move selection strategies for the game loop.
//!
//! A human player is prompted by the game loop itself; this module covers
//! the self-driving agents. Randomness is supplied by an explicit
//! [`fastrand::Rng`] owned by the agent, never a process-global source, so
//! seeded games replay identically.

use crate::board::{Board, Side};
use crate::constants::Score;
use crate::search::choose_move;

/// A self-driving move selector.
pub enum Agent {
    /// Picks uniformly at random among the currently legal pits.
    Random(fastrand::Rng),
    /// Runs the parallel alpha-beta search at the configured depth.
    Computer { depth: u8 },
}

impl Agent {
    /// Select a pit for `side`, plus the search evaluation when one exists.
    ///
    /// Returns `None` when `side` has no legal move.
    pub fn select(&mut self, board: &Board, side: Side) -> Option<(usize, Option<Score>)> {
        match self {
            Agent::Random(rng) => {
                let candidates: Vec<usize> = board.legal_moves(side).collect();
                if candidates.is_empty() {
                    return None;
                }
                Some((candidates[rng.usize(0..candidates.len())], None))
            }
            Agent::Computer { depth } => {
                choose_move(board, side, *depth).map(|(pit, score)| (pit, Some(score)))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_random_agent_only_picks_legal_pits() {
        let board = Board::from_slots([0, 3, 0, 0, 2, 0, 0, 4, 4, 4, 4, 4, 4, 0]);
        let mut agent = Agent::Random(fastrand::Rng::with_seed(5));
        for _ in 0..50 {
            let (pit, eval) = agent.select(&board, Side::South).unwrap();
            assert!(pit == 1 || pit == 4);
            assert_eq!(eval, None);
        }
    }

    #[test]
    fn test_random_agent_reports_no_move() {
        let board = Board::from_slots([0, 0, 0, 0, 0, 0, 9, 4, 4, 4, 4, 4, 4, 0]);
        let mut agent = Agent::Random(fastrand::Rng::with_seed(5));
        assert!(agent.select(&board, Side::South).is_none());
    }

    #[test]
    fn test_computer_agent_reports_evaluation() {
        let board = Board::new();
        let mut agent = Agent::Computer { depth: 4 };
        let (pit, eval) = agent.select(&board, Side::North).unwrap();
        assert!(Side::North.owns_pit(pit));
        assert!(eval.is_some());
    }
}
