//! Depth-limited minimax
//!
//! The root maximizes for the side to move; layers alternate min/max below
//! it. Leaves and terminal states are scored by the evaluator from the root
//! player's perspective.

use crate::board::{GameState, Move, Player};
use crate::eval::Evaluator;

use super::{is_terminal, DeadlineClock, SearchCancelled, SearchResult, SearchStats};

/// Best move for the side to move, searching `depth` plies.
///
/// Depth 1 scores each child of the root directly. Returns [`Move::NONE`]
/// when the root has no legal moves. Ties keep the first move in enumeration
/// order. Any clock expiry is returned as [`SearchCancelled`].
pub fn minimax<S, E>(
    state: &S,
    depth: u32,
    evaluator: &E,
    clock: &DeadlineClock<'_>,
) -> Result<SearchResult, SearchCancelled>
where
    S: GameState,
    E: Evaluator<S> + ?Sized,
{
    let mut search = Minimax {
        evaluator,
        clock: *clock,
        perspective: state.active_player(),
        stats: SearchStats::default(),
    };
    search.root(state, depth.max(1))
}

struct Minimax<'a, E: ?Sized> {
    evaluator: &'a E,
    clock: DeadlineClock<'a>,
    perspective: Player,
    stats: SearchStats,
}

impl<E: ?Sized> Minimax<'_, E> {
    fn root<S>(&mut self, state: &S, depth: u32) -> Result<SearchResult, SearchCancelled>
    where
        S: GameState,
        E: Evaluator<S>,
    {
        self.clock.check()?;
        self.stats.nodes += 1;

        let moves = state.legal_moves();
        let Some(&first) = moves.first() else {
            let score = self.evaluate(state);
            return Ok(SearchResult {
                best_move: Move::NONE,
                score,
                depth,
                stats: self.stats,
            });
        };

        // Seeded with the first move so a position lost on every line still
        // returns a legal move.
        let mut best_move = first;
        let mut best_score = f64::NEG_INFINITY;
        for mv in moves {
            let score = self.min_value(&state.apply_move(mv), depth)?;
            if score > best_score {
                best_score = score;
                best_move = mv;
            }
        }

        Ok(SearchResult {
            best_move,
            score: best_score,
            depth,
            stats: self.stats,
        })
    }

    fn min_value<S>(&mut self, state: &S, depth: u32) -> Result<f64, SearchCancelled>
    where
        S: GameState,
        E: Evaluator<S>,
    {
        self.clock.check()?;
        self.stats.nodes += 1;

        let moves = state.legal_moves();
        if depth <= 1 || is_terminal(state, &moves) {
            return Ok(self.evaluate(state));
        }

        let mut value = f64::INFINITY;
        for mv in moves {
            value = value.min(self.max_value(&state.apply_move(mv), depth - 1)?);
        }
        Ok(value)
    }

    fn max_value<S>(&mut self, state: &S, depth: u32) -> Result<f64, SearchCancelled>
    where
        S: GameState,
        E: Evaluator<S>,
    {
        self.clock.check()?;
        self.stats.nodes += 1;

        let moves = state.legal_moves();
        if depth <= 1 || is_terminal(state, &moves) {
            return Ok(self.evaluate(state));
        }

        let mut value = f64::NEG_INFINITY;
        for mv in moves {
            value = value.max(self.min_value(&state.apply_move(mv), depth - 1)?);
        }
        Ok(value)
    }

    #[inline]
    fn evaluate<S>(&mut self, state: &S) -> f64
    where
        S: GameState,
        E: Evaluator<S>,
    {
        self.stats.evaluations += 1;
        self.evaluator.score(state, self.perspective)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Board;
    use crate::eval::{improved_score, null_score};
    use crate::search::fixtures::{leaf, leaf_value, node, TreeState};
    use std::time::Duration;

    #[test]
    fn test_picks_max_of_mins() {
        // Move 0 -> min(3, 12) = 3, move 1 -> min(2, 4) = 2, move 2 -> min(14, 5) = 5
        let state = TreeState::new(node(
            0.0,
            vec![
                node(0.0, vec![leaf(3.0), leaf(12.0)]),
                node(0.0, vec![leaf(2.0), leaf(4.0)]),
                node(0.0, vec![leaf(14.0), leaf(5.0)]),
            ],
        ));
        let result = minimax(&state, 2, &leaf_value, &DeadlineClock::unlimited()).unwrap();
        assert_eq!(result.best_move, state.child_move(2));
        assert_eq!(result.score, 5.0);
    }

    #[test]
    fn test_depth_one_scores_children() {
        // Grandchildren would flip the choice, but depth 1 never sees them
        let state = TreeState::new(node(
            0.0,
            vec![
                node(1.0, vec![leaf(9.0)]),
                node(2.0, vec![leaf(-9.0)]),
            ],
        ));
        let result = minimax(&state, 1, &leaf_value, &DeadlineClock::unlimited()).unwrap();
        assert_eq!(result.best_move, state.child_move(1));
        assert_eq!(result.score, 2.0);

        let deeper = minimax(&state, 2, &leaf_value, &DeadlineClock::unlimited()).unwrap();
        assert_eq!(deeper.best_move, state.child_move(0));
    }

    #[test]
    fn test_ties_keep_first_move() {
        let state = TreeState::new(node(0.0, vec![leaf(1.0), leaf(1.0), leaf(1.0)]));
        let result = minimax(&state, 3, &leaf_value, &DeadlineClock::unlimited()).unwrap();
        assert_eq!(result.best_move, state.child_move(0));
    }

    #[test]
    fn test_no_legal_moves_returns_sentinel() {
        let board = Board::with_position(
            7,
            7,
            &[Move::new(1, 2), Move::new(2, 1)],
            [Some(Move::new(0, 0)), Some(Move::new(6, 6))],
            Player::One,
        )
        .unwrap();
        for depth in 1..=4 {
            let result = minimax(&board, depth, &improved_score::<Board>, &DeadlineClock::unlimited()).unwrap();
            assert_eq!(result.best_move, Move::NONE);
        }
    }

    #[test]
    fn test_single_move_returned_even_when_lost() {
        // Only move loses on every line; the move must still come back
        let lose = |_: &Board, _: Player| f64::NEG_INFINITY;
        let board = Board::with_position(
            7,
            7,
            &[Move::new(2, 1)],
            [Some(Move::new(0, 0)), Some(Move::new(6, 6))],
            Player::One,
        )
        .unwrap();
        for depth in 1..=3 {
            let result = minimax(&board, depth, &lose, &DeadlineClock::unlimited()).unwrap();
            assert_eq!(result.best_move, Move::new(1, 2));
            let result = minimax(&board, depth, &null_score::<Board>, &DeadlineClock::unlimited()).unwrap();
            assert_eq!(result.best_move, Move::new(1, 2));
        }
    }

    #[test]
    fn test_expired_clock_cancels() {
        let probe = || Duration::ZERO;
        let clock = DeadlineClock::new(&probe, Duration::from_millis(10));
        let result = minimax(&Board::default(), 2, &improved_score::<Board>, &clock);
        assert_eq!(result, Err(SearchCancelled));
    }

    #[test]
    fn test_deep_expiry_propagates() {
        use std::cell::Cell;
        // Expires after a handful of frames, well inside the tree
        let budget = Cell::new(20u32);
        let probe = || {
            let left = budget.get().saturating_sub(1);
            budget.set(left);
            Duration::from_millis(u64::from(left))
        };
        let clock = DeadlineClock::new(&probe, Duration::from_millis(1));
        let board = Board::default().apply_move(Move::new(3, 3));
        assert_eq!(minimax(&board, 3, &improved_score::<Board>, &clock), Err(SearchCancelled));
    }

    #[test]
    fn test_stats_count_frames() {
        let state = TreeState::new(node(0.0, vec![leaf(1.0), leaf(2.0)]));
        let result = minimax(&state, 1, &leaf_value, &DeadlineClock::unlimited()).unwrap();
        assert_eq!(result.stats.nodes, 3);
        assert_eq!(result.stats.evaluations, 2);
        assert_eq!(result.stats.cutoffs, 0);
    }
}
