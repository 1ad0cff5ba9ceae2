//! Alpha-beta pruning over the minimax tree
//!
//! Selects the same move as [`minimax`](super::minimax) for every input; the
//! window only skips siblings that cannot change the decision. Values are
//! fail-soft: a cut node returns the bound that triggered the cut.

use crate::board::{GameState, Move, Player};
use crate::eval::Evaluator;

use super::{is_terminal, DeadlineClock, SearchCancelled, SearchResult, SearchStats};

/// Alpha-beta search with the full `[-inf, +inf]` window.
pub fn alphabeta<S, E>(
    state: &S,
    depth: u32,
    evaluator: &E,
    clock: &DeadlineClock<'_>,
) -> Result<SearchResult, SearchCancelled>
where
    S: GameState,
    E: Evaluator<S> + ?Sized,
{
    alphabeta_window(state, depth, f64::NEG_INFINITY, f64::INFINITY, evaluator, clock)
}

/// Alpha-beta search with an explicit root window.
///
/// Each first-level minimizing call gets `[max(alpha, best so far), beta]`:
/// the lower bound tightens as better root moves are found while the upper
/// bound stays at `beta`.
pub fn alphabeta_window<S, E>(
    state: &S,
    depth: u32,
    alpha: f64,
    beta: f64,
    evaluator: &E,
    clock: &DeadlineClock<'_>,
) -> Result<SearchResult, SearchCancelled>
where
    S: GameState,
    E: Evaluator<S> + ?Sized,
{
    let mut search = AlphaBeta {
        evaluator,
        clock: *clock,
        perspective: state.active_player(),
        stats: SearchStats::default(),
    };
    search.root(state, depth.max(1), alpha, beta)
}

struct AlphaBeta<'a, E: ?Sized> {
    evaluator: &'a E,
    clock: DeadlineClock<'a>,
    perspective: Player,
    stats: SearchStats,
}

impl<E: ?Sized> AlphaBeta<'_, E> {
    fn root<S>(
        &mut self,
        state: &S,
        depth: u32,
        alpha: f64,
        beta: f64,
    ) -> Result<SearchResult, SearchCancelled>
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

        let mut best_move = first;
        let mut best_score = f64::NEG_INFINITY;
        for mv in moves {
            let score = self.min_value(&state.apply_move(mv), depth, best_score.max(alpha), beta)?;
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

    fn min_value<S>(
        &mut self,
        state: &S,
        depth: u32,
        alpha: f64,
        mut beta: f64,
    ) -> Result<f64, SearchCancelled>
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
            value = value.min(self.max_value(&state.apply_move(mv), depth - 1, alpha, beta)?);
            if value <= alpha {
                self.stats.cutoffs += 1;
                return Ok(value);
            }
            beta = beta.min(value);
        }
        Ok(value)
    }

    fn max_value<S>(
        &mut self,
        state: &S,
        depth: u32,
        mut alpha: f64,
        beta: f64,
    ) -> Result<f64, SearchCancelled>
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
            value = value.max(self.min_value(&state.apply_move(mv), depth - 1, alpha, beta)?);
            if value >= beta {
                self.stats.cutoffs += 1;
                return Ok(value);
            }
            alpha = alpha.max(value);
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
