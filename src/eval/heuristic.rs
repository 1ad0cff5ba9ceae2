//! Baseline heuristics for Isolation positions
//!
//! Every heuristic returns `+inf` for a won game and `-inf` for a lost game
//! from the perspective of `player`, and a finite value otherwise.

use crate::board::{GameState, Move, Player};

/// Terminal value if the game is decided for `player`.
#[inline]
pub(crate) fn decided<S: GameState>(state: &S, player: Player) -> Option<f64> {
    if state.is_loser(player) {
        Some(f64::NEG_INFINITY)
    } else if state.is_winner(player) {
        Some(f64::INFINITY)
    } else {
        None
    }
}

/// Squared distance of `player` from the board center; 0 before placement.
#[inline]
pub(crate) fn center_distance_sq<S: GameState>(state: &S, player: Player) -> f64 {
    let Some(Move { row, col }) = state.player_location(player) else {
        return 0.0;
    };
    let w = state.width() as f64 / 2.0;
    let h = state.height() as f64 / 2.0;
    (h - row as f64).powi(2) + (w - col as f64).powi(2)
}

#[inline]
pub(crate) fn mobility<S: GameState>(state: &S, player: Player) -> f64 {
    state.legal_moves_for(player).len() as f64
}

/// Zero everywhere except decided games.
#[must_use]
pub fn null_score<S: GameState>(state: &S, player: Player) -> f64 {
    decided(state, player).unwrap_or(0.0)
}

/// Number of moves open to `player`.
#[must_use]
pub fn open_move_score<S: GameState>(state: &S, player: Player) -> f64 {
    decided(state, player).unwrap_or_else(|| mobility(state, player))
}

/// Own mobility minus opponent mobility.
#[must_use]
pub fn improved_score<S: GameState>(state: &S, player: Player) -> f64 {
    decided(state, player)
        .unwrap_or_else(|| mobility(state, player) - mobility(state, player.opponent()))
}

/// Squared distance from the center; rewards drifting outward.
#[must_use]
pub fn center_score<S: GameState>(state: &S, player: Player) -> f64 {
    decided(state, player).unwrap_or_else(|| center_distance_sq(state, player))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Board;

    fn opening() -> Board {
        Board::default()
            .apply_move(Move::new(3, 3))
            .apply_move(Move::new(0, 0))
    }

    #[test]
    fn test_null_score_is_zero_midgame() {
        assert_eq!(null_score(&opening(), Player::One), 0.0);
    }

    #[test]
    fn test_open_move_counts_moves() {
        let board = opening();
        assert_eq!(open_move_score(&board, Player::One), 8.0);
        assert_eq!(open_move_score(&board, Player::Two), 2.0);
    }

    #[test]
    fn test_improved_is_antisymmetric() {
        let board = opening();
        assert_eq!(improved_score(&board, Player::One), 6.0);
        assert_eq!(improved_score(&board, Player::Two), -6.0);
    }

    #[test]
    fn test_center_score() {
        let board = opening();
        // 7x7 center is (3.5, 3.5)
        assert_eq!(center_score(&board, Player::One), 0.5);
        assert_eq!(center_score(&board, Player::Two), 24.5);
    }

    #[test]
    fn test_decided_games_are_infinite() {
        let board = Board::with_position(
            7,
            7,
            &[Move::new(5, 4), Move::new(4, 5)],
            [Some(Move::new(0, 0)), Some(Move::new(6, 6))],
            Player::Two,
        )
        .unwrap();
        let scores: [fn(&Board, Player) -> f64; 4] =
            [null_score, open_move_score, improved_score, center_score];
        for score in scores {
            assert_eq!(score(&board, Player::One), f64::INFINITY);
            assert_eq!(score(&board, Player::Two), f64::NEG_INFINITY);
        }
    }
}
