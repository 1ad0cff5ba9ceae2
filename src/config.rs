//! Engine configuration loaded from TOML
//!
//! Every section and key is optional; missing values fall back to the
//! defaults below.
//!
//! ```toml
//! [board]
//! width = 7
//! height = 7
//!
//! [search]
//! algorithm = "alphabeta"
//! time_limit_ms = 150
//! threshold_ms = 30
//! depth = 3
//! heuristic = "custom"
//!
//! [tournament]
//! matches = 5
//! seed = 42
//! ```

use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::board::{Board, DEFAULT_HEIGHT, DEFAULT_WIDTH};
use crate::engine::SearchType;
use crate::error::{IsolationError, Result};
use crate::eval::Heuristic;

/// Default per-move time limit
pub const DEFAULT_TIME_LIMIT_MS: u64 = 150;
/// Default time left at which a search is abandoned
pub const DEFAULT_THRESHOLD_MS: u64 = 30;
/// Default fixed depth for minimax agents
pub const DEFAULT_DEPTH: u32 = 3;
/// Default fair rounds per opponent
pub const DEFAULT_MATCHES: u32 = 5;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    pub board: BoardConfig,
    pub search: SearchConfig,
    pub tournament: TournamentConfig,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BoardConfig {
    pub width: usize,
    pub height: usize,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
        }
    }
}

impl BoardConfig {
    /// Empty board with these dimensions
    pub fn build(&self) -> Result<Board> {
        Board::new(self.width, self.height)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    pub algorithm: SearchType,
    pub time_limit_ms: u64,
    pub threshold_ms: u64,
    /// Only used by minimax
    pub depth: u32,
    pub heuristic: Heuristic,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            algorithm: SearchType::AlphaBeta,
            time_limit_ms: DEFAULT_TIME_LIMIT_MS,
            threshold_ms: DEFAULT_THRESHOLD_MS,
            depth: DEFAULT_DEPTH,
            heuristic: Heuristic::default(),
        }
    }
}

impl SearchConfig {
    #[inline]
    pub fn time_limit(&self) -> Duration {
        Duration::from_millis(self.time_limit_ms)
    }

    #[inline]
    pub fn threshold(&self) -> Duration {
        Duration::from_millis(self.threshold_ms)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TournamentConfig {
    pub matches: u32,
    /// Seed for the random openings; `None` draws one from the OS
    pub seed: Option<u64>,
}

impl Default for TournamentConfig {
    fn default() -> Self {
        Self {
            matches: DEFAULT_MATCHES,
            seed: None,
        }
    }
}

impl EngineConfig {
    /// Read and parse a config file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| IsolationError::ConfigIo {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_toml_str(&text)?;
        log::debug!("loaded config from {}: {:?}", path.display(), config);
        Ok(config)
    }

    pub fn from_toml_str(text: &str) -> Result<Self> {
        Ok(toml::from_str(text)?)
    }

    pub fn to_toml(&self) -> Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::GameState;

    #[test]
    fn test_empty_file_gives_defaults() {
        let config = EngineConfig::from_toml_str("").unwrap();
        assert_eq!(config, EngineConfig::default());
        assert_eq!(config.board.width, 7);
        assert_eq!(config.search.time_limit(), Duration::from_millis(150));
        assert_eq!(config.search.threshold(), Duration::from_millis(30));
        assert_eq!(config.search.depth, 3);
        assert_eq!(config.search.heuristic, Heuristic::Custom);
        assert_eq!(config.search.algorithm, SearchType::AlphaBeta);
        assert_eq!(config.tournament.matches, 5);
        assert_eq!(config.tournament.seed, None);
    }

    #[test]
    fn test_partial_sections() {
        let config = EngineConfig::from_toml_str(
            r#"
            [search]
            algorithm = "minimax"
            heuristic = "custom-3"
            threshold_ms = 12

            [tournament]
            seed = 7
            "#,
        )
        .unwrap();
        assert_eq!(config.search.algorithm, SearchType::Minimax);
        assert_eq!(config.search.heuristic, Heuristic::Custom3);
        assert_eq!(config.search.threshold_ms, 12);
        assert_eq!(config.search.time_limit_ms, DEFAULT_TIME_LIMIT_MS);
        assert_eq!(config.tournament.seed, Some(7));
        assert_eq!(config.tournament.matches, DEFAULT_MATCHES);
        assert_eq!(config.board, BoardConfig::default());
    }

    #[test]
    fn test_round_trip() {
        let mut config = EngineConfig::default();
        config.board.width = 5;
        config.search.heuristic = Heuristic::Center;
        config.tournament.seed = Some(99);
        let text = config.to_toml().unwrap();
        assert_eq!(EngineConfig::from_toml_str(&text).unwrap(), config);
    }

    #[test]
    fn test_unknown_heuristic_rejected() {
        let err = EngineConfig::from_toml_str("[search]\nheuristic = \"psychic\"\n").unwrap_err();
        assert!(matches!(err, IsolationError::ConfigParse(_)));
    }

    #[test]
    fn test_missing_file() {
        let err = EngineConfig::load("/nonexistent/isolation.toml").unwrap_err();
        assert!(matches!(err, IsolationError::ConfigIo { .. }));
    }

    #[test]
    fn test_board_config_build() {
        let board = BoardConfig { width: 4, height: 3 }.build().unwrap();
        assert_eq!((board.width(), board.height()), (4, 3));
        assert!(BoardConfig { width: 0, height: 3 }.build().is_err());
    }
}
