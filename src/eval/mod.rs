//! Position evaluation
//!
//! The search consumes scoring through the [`Evaluator`] trait. Heuristics are
//! independent strategies; [`Heuristic`] names them so agents and config
//! files can pick one.

pub mod custom;
pub mod heuristic;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::board::{GameState, Player};

pub use custom::{center_gap_score, combined_score, mobility_pressure_score};
pub use heuristic::{center_score, improved_score, null_score, open_move_score};

/// Scores a state from the perspective of one player.
///
/// Must return exactly `+inf` for a won game, `-inf` for a lost game and a
/// finite value otherwise.
pub trait Evaluator<S: GameState> {
    fn score(&self, state: &S, player: Player) -> f64;
}

impl<S, F> Evaluator<S> for F
where
    S: GameState,
    F: Fn(&S, Player) -> f64,
{
    #[inline]
    fn score(&self, state: &S, player: Player) -> f64 {
        self(state, player)
    }
}

/// Named heuristic selectable from config and the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Heuristic {
    #[serde(rename = "null")]
    Null,
    #[serde(rename = "open")]
    OpenMove,
    #[serde(rename = "improved")]
    Improved,
    #[serde(rename = "center")]
    Center,
    /// Squared mobility pressure
    #[serde(rename = "custom")]
    Custom,
    /// Center gap
    #[serde(rename = "custom-2")]
    Custom2,
    /// Mobility pressure plus center gap
    #[serde(rename = "custom-3")]
    Custom3,
}

impl Heuristic {
    pub const ALL: [Heuristic; 7] = [
        Heuristic::Null,
        Heuristic::OpenMove,
        Heuristic::Improved,
        Heuristic::Center,
        Heuristic::Custom,
        Heuristic::Custom2,
        Heuristic::Custom3,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Heuristic::Null => "null",
            Heuristic::OpenMove => "open",
            Heuristic::Improved => "improved",
            Heuristic::Center => "center",
            Heuristic::Custom => "custom",
            Heuristic::Custom2 => "custom-2",
            Heuristic::Custom3 => "custom-3",
        }
    }

    /// Capitalised form used in agent names such as `AB_Improved`
    pub fn label(self) -> &'static str {
        match self {
            Heuristic::Null => "Null",
            Heuristic::OpenMove => "Open",
            Heuristic::Improved => "Improved",
            Heuristic::Center => "Center",
            Heuristic::Custom => "Custom",
            Heuristic::Custom2 => "Custom_2",
            Heuristic::Custom3 => "Custom_3",
        }
    }
}

impl Default for Heuristic {
    fn default() -> Self {
        Heuristic::Custom
    }
}

impl<S: GameState> Evaluator<S> for Heuristic {
    fn score(&self, state: &S, player: Player) -> f64 {
        match self {
            Heuristic::Null => null_score(state, player),
            Heuristic::OpenMove => open_move_score(state, player),
            Heuristic::Improved => improved_score(state, player),
            Heuristic::Center => center_score(state, player),
            Heuristic::Custom => mobility_pressure_score(state, player),
            Heuristic::Custom2 => center_gap_score(state, player),
            Heuristic::Custom3 => combined_score(state, player),
        }
    }
}

impl fmt::Display for Heuristic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Unknown heuristic name
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown heuristic '{0}' (expected one of: null, open, improved, center, custom, custom-2, custom-3)")]
pub struct UnknownHeuristic(pub String);

impl FromStr for Heuristic {
    type Err = UnknownHeuristic;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Heuristic::ALL
            .into_iter()
            .find(|h| h.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| UnknownHeuristic(s.to_string()))
    }
}
