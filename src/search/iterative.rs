//! Iterative deepening driver
//!
//! Runs alpha-beta at depth 1, 2, 3, ... until the clock cancels the search
//! in flight. The result of the deepest search that finished is kept; an
//! interrupted iteration is thrown away.

use std::time::{Duration, Instant};

use crate::board::{GameState, Move};
use crate::eval::Evaluator;

use super::{alphabeta, DeadlineClock, SearchStats, TimeProbe};

/// Outcome of one [`IterativeDeepening::choose_move_with_stats`] call.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SearchOutcome {
    /// Move from the deepest completed iteration, or [`Move::NONE`]
    pub best_move: Move,
    /// Score of that iteration, `None` if depth 1 never finished
    pub score: Option<f64>,
    /// Deepest iteration that ran to completion (0 = none)
    pub completed_depth: u32,
    /// Totals over the completed iterations; the interrupted one is not counted
    pub stats: SearchStats,
    pub elapsed: Duration,
}

impl SearchOutcome {
    fn empty() -> Self {
        Self {
            best_move: Move::NONE,
            score: None,
            completed_depth: 0,
            stats: SearchStats::default(),
            elapsed: Duration::ZERO,
        }
    }
}

/// Any-time move chooser.
#[derive(Debug, Clone)]
pub struct IterativeDeepening<E> {
    evaluator: E,
    threshold: Duration,
}

impl<E> IterativeDeepening<E> {
    /// `threshold` is the time left at which any running search gives up.
    pub fn new(evaluator: E, threshold: Duration) -> Self {
        Self { evaluator, threshold }
    }

    pub fn evaluator(&self) -> &E {
        &self.evaluator
    }

    pub fn threshold(&self) -> Duration {
        self.threshold
    }

    /// Best move found before the probe runs down to the threshold.
    ///
    /// Never fails: cancellation ends the loop and the last completed depth
    /// decides. Returns [`Move::NONE`] when the state has no legal moves or
    /// not even depth 1 finished.
    pub fn choose_move<S>(&self, state: &S, probe: &dyn TimeProbe) -> Move
    where
        S: GameState,
        E: Evaluator<S>,
    {
        self.choose_move_with_stats(state, probe).best_move
    }

    /// [`choose_move`](Self::choose_move) plus depth, score and node counts.
    pub fn choose_move_with_stats<S>(&self, state: &S, probe: &dyn TimeProbe) -> SearchOutcome
    where
        S: GameState,
        E: Evaluator<S>,
    {
        let started = Instant::now();
        let clock = DeadlineClock::new(probe, self.threshold);
        let mut outcome = SearchOutcome::empty();

        let mut depth = 1;
        loop {
            match alphabeta(state, depth, &self.evaluator, &clock) {
                Ok(result) => {
                    outcome.best_move = result.best_move;
                    outcome.score = Some(result.score);
                    outcome.completed_depth = depth;
                    outcome.stats.merge(&result.stats);
                    log::trace!(
                        "depth {} done: move {} score {} ({} nodes)",
                        depth,
                        result.best_move,
                        result.score,
                        result.stats.nodes
                    );
                }
                Err(_) => break,
            }
            depth += 1;
        }

        outcome.elapsed = started.elapsed();
        log::debug!(
            "search: move {} depth {} score {:?} nodes {} in {:?}",
            outcome.best_move,
            outcome.completed_depth,
            outcome.score,
            outcome.stats.nodes,
            outcome.elapsed
        );
        outcome
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::{Board, Player};
    use crate::eval::{improved_score, Heuristic};
    use crate::search::fixtures::{leaf, leaf_value, node, TreeState};
    use std::cell::Cell;

    /// Probe with `calls` checks worth of time, then nothing
    struct CountingProbe {
        left: Cell<u32>,
    }

    impl CountingProbe {
        fn new(calls: u32) -> Self {
            Self { left: Cell::new(calls) }
        }
    }

    impl TimeProbe for CountingProbe {
        fn remaining(&self) -> Duration {
            let left = self.left.get();
            self.left.set(left.saturating_sub(1));
            if left == 0 {
                Duration::ZERO
            } else {
                Duration::from_secs(1)
            }
        }
    }

    #[test]
    fn test_expired_probe_returns_sentinel() {
        let driver = IterativeDeepening::new(improved_score::<Board>, Duration::from_millis(10));
        let probe = || Duration::from_millis(5);
        let board = Board::default().apply_move(Move::new(3, 3));
        let outcome = driver.choose_move_with_stats(&board, &probe);
        assert_eq!(outcome.best_move, Move::NONE);
        assert_eq!(outcome.completed_depth, 0);
        assert_eq!(outcome.score, None);
    }

    #[test]
    fn test_probe_at_threshold_returns_sentinel() {
        let driver = IterativeDeepening::new(Heuristic::Custom, Duration::from_millis(10));
        let probe = || Duration::from_millis(10);
        assert_eq!(driver.choose_move(&Board::default(), &probe), Move::NONE);
    }

    #[test]
    fn test_result_matches_a_completed_depth() {
        let mut board = Board::new(5, 5).unwrap();
        for mv in [Move::new(2, 2), Move::new(0, 0), Move::new(0, 1)] {
            board = board.apply_move(mv);
        }
        let driver = IterativeDeepening::new(Heuristic::Improved, Duration::ZERO);

        for budget in [1, 5, 20, 60, 150, 400, 1000, 3000] {
            let probe = CountingProbe::new(budget);
            let outcome = driver.choose_move_with_stats(&board, &probe);
            if outcome.completed_depth == 0 {
                assert_eq!(outcome.best_move, Move::NONE);
                continue;
            }
            let reference =
                alphabeta(&board, outcome.completed_depth, &Heuristic::Improved, &DeadlineClock::unlimited())
                    .unwrap();
            assert_eq!(outcome.best_move, reference.best_move, "budget {budget}");
            assert_eq!(outcome.score, Some(reference.score));
        }
    }

    #[test]
    fn test_deeper_budget_reaches_deeper() {
        let board = Board::default().apply_move(Move::new(3, 3)).apply_move(Move::new(0, 0));
        let driver = IterativeDeepening::new(Heuristic::Custom, Duration::ZERO);
        let shallow = driver.choose_move_with_stats(&board, &CountingProbe::new(30));
        let deep = driver.choose_move_with_stats(&board, &CountingProbe::new(3000));
        assert!(deep.completed_depth > shallow.completed_depth);
        assert!(board.legal_moves().contains(&deep.best_move));
    }

    #[test]
    fn test_interrupted_iteration_is_discarded() {
        // Depth 1 prefers move 1, depth 2 prefers move 0. Depth 1 costs 3
        // checks; a budget of 5 runs out inside depth 2.
        let state = TreeState::new(node(
            0.0,
            vec![
                node(1.0, vec![leaf(9.0)]),
                node(2.0, vec![leaf(-9.0)]),
            ],
        ));
        let driver = IterativeDeepening::new(leaf_value, Duration::ZERO);

        let outcome = driver.choose_move_with_stats(&state, &CountingProbe::new(5));
        assert_eq!(outcome.completed_depth, 1);
        assert_eq!(outcome.best_move, state.child_move(1));

        let outcome = driver.choose_move_with_stats(&state, &CountingProbe::new(8));
        assert_eq!(outcome.completed_depth, 2);
        assert_eq!(outcome.best_move, state.child_move(0));
    }

    #[test]
    fn test_stats_cover_completed_iterations() {
        let board = Board::new(5, 5)
            .unwrap()
            .apply_move(Move::new(2, 2))
            .apply_move(Move::new(0, 0));
        let driver = IterativeDeepening::new(Heuristic::Improved, Duration::ZERO);
        let outcome = driver.choose_move_with_stats(&board, &CountingProbe::new(500));
        assert!(outcome.completed_depth >= 1);

        let clock = DeadlineClock::unlimited();
        let mut expected = SearchStats::default();
        for depth in 1..=outcome.completed_depth {
            let result = alphabeta(&board, depth, &Heuristic::Improved, &clock).unwrap();
            expected.merge(&result.stats);
        }
        assert_eq!(outcome.stats, expected);
        assert!(outcome.stats.nodes < 500);
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
        let driver = IterativeDeepening::new(Heuristic::Improved, Duration::ZERO);
        assert_eq!(driver.choose_move(&board, &CountingProbe::new(50)), Move::NONE);
    }
}
