//! Time-bounded game-tree search for knight-move Isolation
//!
//! Two players each move one piece like a chess knight on a small board.
//! The first move of each player places the piece anywhere open, every cell a
//! piece has visited is blocked, and the side to move with no legal moves
//! loses.
//!
//! # Architecture
//!
//! - [`board`]: board representation and the [`GameState`] capability
//! - [`eval`]: heuristics behind the [`Evaluator`] capability
//! - [`search`]: deadline clock, minimax, alpha-beta, iterative deepening
//! - [`engine`]: agents ([`AIEngine`], random, greedy)
//! - [`game`] and [`tournament`]: match runner and round-robin evaluation
//! - [`config`]: TOML configuration
//! - [`ui`]: egui front end
//!
//! # Quick Start
//!
//! ```
//! use isolation::search::TurnTimer;
//! use isolation::{AIEngine, Agent, Board, GameState, Heuristic, Move};
//! use std::time::Duration;
//!
//! let mut board = Board::default();
//! board = board.apply_move(Move::new(3, 3));
//! board = board.apply_move(Move::new(0, 0));
//!
//! let mut engine = AIEngine::alphabeta(Heuristic::Improved);
//! let timer = TurnTimer::start(Duration::from_millis(150));
//! let mv = engine.get_move(&board, &timer);
//! assert!(board.legal_moves().contains(&mv));
//! ```
//!
//! # Deadlines
//!
//! Every recursive search frame polls a [`DeadlineClock`]. Once the time left
//! reaches the safety threshold the frame returns
//! [`SearchCancelled`](search::SearchCancelled), which travels back through
//! `Result` to the public entry point. The iterative-deepening driver then
//! answers with the deepest search that completed.

pub mod board;
pub mod config;
pub mod engine;
pub mod error;
pub mod eval;
pub mod game;
pub mod search;
pub mod tournament;
pub mod ui;

// Re-export commonly used types for convenience
pub use board::{Board, GameState, Move, Player};
pub use config::EngineConfig;
pub use engine::{AIEngine, Agent, GreedyPlayer, MoveResult, RandomPlayer, SearchType};
pub use error::{IsolationError, Result};
pub use eval::{Evaluator, Heuristic};
pub use game::{play_game, GameRecord, Outcome};
pub use search::{DeadlineClock, IterativeDeepening, SearchResult};
