//! Error types for the board, match runner and configuration

use std::path::PathBuf;

use crate::board::{Move, MAX_CELLS};

/// Errors outside the search core.
///
/// Search cancellation is not represented here; see
/// [`SearchCancelled`](crate::search::SearchCancelled).
#[derive(thiserror::Error, Debug)]
pub enum IsolationError {
    /// Board dimensions exceed the bitboard capacity or are zero
    #[error("Invalid board size {width}x{height} (cells must be 1..={MAX_CELLS})")]
    InvalidBoardSize { width: usize, height: usize },

    /// Cell lies outside the board
    #[error("Cell {0} is outside the board")]
    OutOfBounds(Move),

    /// Cell is already blocked or occupied
    #[error("Cell {0} is not open")]
    Occupied(Move),

    /// Move is not in the legal-move set of the side to move
    #[error("Illegal move {0}")]
    IllegalMove(Move),

    /// Config file could not be read
    #[error("Failed to read config {path}: {source}")]
    ConfigIo {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Config file is not valid TOML for [`EngineConfig`](crate::config::EngineConfig)
    #[error(transparent)]
    ConfigParse(#[from] toml::de::Error),

    /// Config could not be serialized
    #[error(transparent)]
    ConfigWrite(#[from] toml::ser::Error),
}

pub type Result<T> = std::result::Result<T, IsolationError>;
