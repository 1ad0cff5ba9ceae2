//! Game-playing agents built on the search core
//!
//! [`AIEngine`] wraps either a fixed-depth minimax search or the
//! iterative-deepening alpha-beta driver behind a single configuration.
//! [`RandomPlayer`] and [`GreedyPlayer`] are the baselines used by the
//! tournament. Everything that plays implements [`Agent`].
//!
//! # Example
//!
//! ```
//! use isolation::{AIEngine, Board, GameState, Heuristic, Move};
//! use isolation::search::TurnTimer;
//! use std::time::Duration;
//!
//! let mut engine = AIEngine::minimax(2, Heuristic::Improved);
//! let board = Board::default().apply_move(Move::new(3, 3)).apply_move(Move::new(0, 0));
//!
//! let timer = TurnTimer::start(Duration::from_secs(5));
//! let result = engine.get_move_with_stats(&board, &timer);
//! println!("Best move: {}", result.best_move);
//! println!("Depth: {}", result.depth);
//! ```

use std::time::{Duration, Instant};

use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use rand::SeedableRng;
use serde::{Deserialize, Serialize};

use crate::board::{Board, GameState, Move};
use crate::config::SearchConfig;
use crate::eval::{Evaluator, Heuristic};
use crate::search::{minimax, DeadlineClock, IterativeDeepening, TimeProbe};

/// Something that picks a move for the side to move.
pub trait Agent {
    /// Display name used in match logs and tournament tables
    fn name(&self) -> &str;

    /// Choose a move for `board.active_player()`.
    ///
    /// `time_left` reports the remaining budget for this turn. Returns
    /// [`Move::NONE`] when there is nothing to play.
    fn get_move(&mut self, board: &Board, time_left: &dyn TimeProbe) -> Move;
}

/// Search algorithm behind an [`AIEngine`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SearchType {
    /// Fixed-depth minimax, no iterative deepening
    Minimax,
    /// Iterative-deepening alpha-beta
    AlphaBeta,
}

impl SearchType {
    /// Prefix used in agent names (`MM_Open`, `AB_Improved`, ...)
    pub fn short_name(self) -> &'static str {
        match self {
            SearchType::Minimax => "MM",
            SearchType::AlphaBeta => "AB",
        }
    }
}

/// Result of a move search with statistics.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MoveResult {
    /// Chosen move, or [`Move::NONE`]
    pub best_move: Move,
    /// Root score of the search that produced the move
    pub score: Option<f64>,
    /// Depth of the completed search (0 if none completed)
    pub depth: u32,
    pub search_type: SearchType,
    /// Time taken in milliseconds
    pub time_ms: u64,
    /// Number of nodes searched
    pub nodes: u64,
}

impl MoveResult {
    #[inline]
    fn cancelled(search_type: SearchType, time_ms: u64) -> Self {
        Self {
            best_move: Move::NONE,
            score: None,
            depth: 0,
            search_type,
            time_ms,
            nodes: 0,
        }
    }
}

/// Search-based agent.
///
/// # Configuration
///
/// - search type: fixed-depth minimax or iterative-deepening alpha-beta
/// - depth (minimax only)
/// - heuristic used at the leaves
/// - threshold: time left at which a running search is abandoned
#[derive(Debug, Clone)]
pub struct AIEngine {
    name: String,
    search_type: SearchType,
    depth: u32,
    heuristic: Heuristic,
    threshold: Duration,
}

impl AIEngine {
    /// Iterative-deepening alpha-beta with the default heuristic.
    #[must_use]
    pub fn new() -> Self {
        Self::from_config(&SearchConfig::default())
    }

    #[must_use]
    pub fn with_config(search_type: SearchType, depth: u32, heuristic: Heuristic, threshold: Duration) -> Self {
        Self {
            name: format!("{}_{}", search_type.short_name(), heuristic.label()),
            search_type,
            depth: depth.max(1),
            heuristic,
            threshold,
        }
    }

    #[must_use]
    pub fn from_config(config: &SearchConfig) -> Self {
        Self::with_config(config.algorithm, config.depth, config.heuristic, config.threshold())
    }

    /// Fixed-depth minimax with the default threshold
    #[must_use]
    pub fn minimax(depth: u32, heuristic: Heuristic) -> Self {
        let defaults = SearchConfig::default();
        Self::with_config(SearchType::Minimax, depth, heuristic, defaults.threshold())
    }

    /// Iterative-deepening alpha-beta with the default threshold
    #[must_use]
    pub fn alphabeta(heuristic: Heuristic) -> Self {
        let defaults = SearchConfig::default();
        Self::with_config(SearchType::AlphaBeta, defaults.depth, heuristic, defaults.threshold())
    }

    /// Override the display name
    #[must_use]
    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Search `board` and return the move with statistics.
    ///
    /// A minimax search cut off by the clock yields [`Move::NONE`]; the
    /// alpha-beta driver returns its deepest completed iteration.
    pub fn get_move_with_stats(&self, board: &Board, time_left: &dyn TimeProbe) -> MoveResult {
        let started = Instant::now();
        let result = match self.search_type {
            SearchType::Minimax => self.search_fixed_depth(board, time_left, started),
            SearchType::AlphaBeta => self.search_iterative(board, time_left),
        };
        log::debug!(
            "{}: {} (depth {}, {} nodes, {}ms)",
            self.name,
            result.best_move,
            result.depth,
            result.nodes,
            result.time_ms
        );
        result
    }

    fn search_fixed_depth(&self, board: &Board, time_left: &dyn TimeProbe, started: Instant) -> MoveResult {
        let clock = DeadlineClock::new(time_left, self.threshold);
        match minimax(board, self.depth, &self.heuristic, &clock) {
            Ok(result) => MoveResult {
                best_move: result.best_move,
                score: Some(result.score),
                depth: result.depth,
                search_type: SearchType::Minimax,
                time_ms: started.elapsed().as_millis() as u64,
                nodes: result.stats.nodes,
            },
            Err(cancelled) => {
                log::debug!("{}: {}", self.name, cancelled);
                MoveResult::cancelled(SearchType::Minimax, started.elapsed().as_millis() as u64)
            }
        }
    }

    fn search_iterative(&self, board: &Board, time_left: &dyn TimeProbe) -> MoveResult {
        let driver = IterativeDeepening::new(self.heuristic, self.threshold);
        let outcome = driver.choose_move_with_stats(board, time_left);
        MoveResult {
            best_move: outcome.best_move,
            score: outcome.score,
            depth: outcome.completed_depth,
            search_type: SearchType::AlphaBeta,
            time_ms: outcome.elapsed.as_millis() as u64,
            nodes: outcome.stats.nodes,
        }
    }

    pub fn set_depth(&mut self, depth: u32) {
        self.depth = depth.max(1);
    }

    pub fn set_heuristic(&mut self, heuristic: Heuristic) {
        self.heuristic = heuristic;
    }

    pub fn set_threshold(&mut self, threshold: Duration) {
        self.threshold = threshold;
    }

    pub fn search_type(&self) -> SearchType {
        self.search_type
    }

    pub fn depth(&self) -> u32 {
        self.depth
    }

    pub fn heuristic(&self) -> Heuristic {
        self.heuristic
    }

    pub fn threshold(&self) -> Duration {
        self.threshold
    }
}

impl Default for AIEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl Agent for AIEngine {
    fn name(&self) -> &str {
        &self.name
    }

    fn get_move(&mut self, board: &Board, time_left: &dyn TimeProbe) -> Move {
        self.get_move_with_stats(board, time_left).best_move
    }
}

/// Plays a uniformly random legal move.
#[derive(Debug, Clone)]
pub struct RandomPlayer {
    rng: StdRng,
}

impl RandomPlayer {
    /// Seeded for reproducible games; `None` seeds from the OS.
    pub fn new(seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        Self { rng }
    }
}

impl Agent for RandomPlayer {
    fn name(&self) -> &str {
        "Random"
    }

    fn get_move(&mut self, board: &Board, _time_left: &dyn TimeProbe) -> Move {
        board
            .legal_moves()
            .choose(&mut self.rng)
            .copied()
            .unwrap_or(Move::NONE)
    }
}

/// Plays the move whose resulting position scores best, one ply deep.
#[derive(Debug, Clone)]
pub struct GreedyPlayer {
    heuristic: Heuristic,
}

impl GreedyPlayer {
    pub fn new(heuristic: Heuristic) -> Self {
        Self { heuristic }
    }
}

impl Agent for GreedyPlayer {
    fn name(&self) -> &str {
        "Greedy"
    }

    fn get_move(&mut self, board: &Board, _time_left: &dyn TimeProbe) -> Move {
        let me = board.active_player();
        let mut best = (Move::NONE, f64::NEG_INFINITY);
        for mv in board.legal_moves() {
            let score = self.heuristic.score(&board.apply_move(mv), me);
            if best.0.is_none() || score > best.1 {
                best = (mv, score);
            }
        }
        best.0
    }
}
