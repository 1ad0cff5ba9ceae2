//! Tuned heuristics used by the tournament test agents

use crate::board::{GameState, Player};

use super::heuristic::{center_distance_sq, decided, mobility};

/// Weight on opponent mobility in the mobility-pressure terms
pub const OPPONENT_MOBILITY_WEIGHT: f64 = 2.0;

/// Scale of the mobility term when combined with the center term
pub const COMBINED_MOBILITY_WEIGHT: f64 = 10.0;

#[inline]
fn mobility_pressure<S: GameState>(state: &S, player: Player) -> f64 {
    mobility(state, player) - OPPONENT_MOBILITY_WEIGHT * mobility(state, player.opponent())
}

#[inline]
fn center_gap<S: GameState>(state: &S, player: Player) -> f64 {
    center_distance_sq(state, player) - center_distance_sq(state, player.opponent())
}

/// Square of `own_moves - 2 * opp_moves`.
///
/// Squaring drops the sign, so the value grows with any imbalance.
#[must_use]
pub fn mobility_pressure_score<S: GameState>(state: &S, player: Player) -> f64 {
    decided(state, player).unwrap_or_else(|| mobility_pressure(state, player).powi(2))
}

/// Own squared center distance minus the opponent's.
#[must_use]
pub fn center_gap_score<S: GameState>(state: &S, player: Player) -> f64 {
    decided(state, player).unwrap_or_else(|| center_gap(state, player))
}

/// `10 * (own_moves - 2 * opp_moves)` plus the center gap.
#[must_use]
pub fn combined_score<S: GameState>(state: &S, player: Player) -> f64 {
    decided(state, player).unwrap_or_else(|| {
        COMBINED_MOBILITY_WEIGHT * mobility_pressure(state, player) + center_gap(state, player)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::{Board, Move};

    fn opening() -> Board {
        // One: 8 moves at (3, 3); Two: 2 moves at (0, 0)
        Board::default()
            .apply_move(Move::new(3, 3))
            .apply_move(Move::new(0, 0))
    }

    #[test]
    fn test_mobility_pressure_is_squared() {
        let board = opening();
        // (8 - 2*2)^2 and (2 - 2*8)^2
        assert_eq!(mobility_pressure_score(&board, Player::One), 16.0);
        assert_eq!(mobility_pressure_score(&board, Player::Two), 196.0);
    }

    #[test]
    fn test_center_gap() {
        let board = opening();
        assert_eq!(center_gap_score(&board, Player::One), 0.5 - 24.5);
        assert_eq!(center_gap_score(&board, Player::Two), 24.5 - 0.5);
    }

    #[test]
    fn test_combined() {
        let board = opening();
        assert_eq!(combined_score(&board, Player::One), 10.0 * 4.0 - 24.0);
    }

    #[test]
    fn test_decided_overrides_terms() {
        let board = Board::with_position(
            7,
            7,
            &[Move::new(5, 4), Move::new(4, 5)],
            [Some(Move::new(0, 0)), Some(Move::new(6, 6))],
            Player::Two,
        )
        .unwrap();
        assert_eq!(combined_score(&board, Player::One), f64::INFINITY);
        assert_eq!(mobility_pressure_score(&board, Player::Two), f64::NEG_INFINITY);
    }
}
