//! Search module for the Isolation engine
//!
//! Contains:
//! - Deadline clock and the cancellation signal
//! - Depth-limited minimax
//! - Alpha-beta pruning over the same tree
//! - Iterative deepening driver that always returns a completed result
//!
//! Every recursive frame polls the clock before doing any work. Expiry is a
//! [`SearchCancelled`] error carried back through `Result` to the public
//! entry point.

pub mod alphabeta;
pub mod deadline;
pub mod iterative;
pub mod minimax;

#[cfg(test)]
pub(crate) mod fixtures;

use crate::board::{GameState, Move};

pub use alphabeta::{alphabeta, alphabeta_window};
pub use deadline::{DeadlineClock, SearchCancelled, TimeProbe, TurnTimer, Unlimited};
pub use iterative::{IterativeDeepening, SearchOutcome};
pub use minimax::minimax;

/// Search statistics for diagnostics.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Frames entered, root included
    pub nodes: u64,
    /// Evaluator calls at leaves and terminal states
    pub evaluations: u64,
    /// Alpha and beta cutoffs
    pub cutoffs: u64,
}

impl SearchStats {
    /// Merge another stats into this one (for combining iterations)
    pub fn merge(&mut self, other: &SearchStats) {
        self.nodes += other.nodes;
        self.evaluations += other.evaluations;
        self.cutoffs += other.cutoffs;
    }
}

/// Result of one depth-limited search.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SearchResult {
    /// Best root move, or [`Move::NONE`] when the root has no legal moves
    pub best_move: Move,
    /// Value that justified `best_move`, from the root player's perspective
    pub score: f64,
    /// Depth this search was run at
    pub depth: u32,
    pub stats: SearchStats,
}

/// A state is terminal for search when the game is decided or the side to
/// move is stuck.
#[inline]
pub(crate) fn is_terminal<S: GameState>(state: &S, moves: &[Move]) -> bool {
    let active = state.active_player();
    moves.is_empty() || state.is_loser(active) || state.is_winner(active)
}
