//! Match runner: plays one game between two agents under a per-move limit

use std::fmt;
use std::time::Duration;

use crate::board::{Board, GameState, Move, Player};
use crate::engine::Agent;
use crate::search::TurnTimer;

/// How a game ended, from the loser's side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Outcome {
    /// Side to move had no legal moves
    Isolated,
    /// Move came back after the turn budget ran out
    Timeout,
    /// Illegal move returned while legal moves existed
    Forfeit,
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Outcome::Isolated => "isolated",
            Outcome::Timeout => "timeout",
            Outcome::Forfeit => "forfeit",
        })
    }
}

/// Everything worth keeping about a finished game.
#[derive(Debug, Clone)]
pub struct GameRecord {
    pub winner: Player,
    pub loser: Player,
    pub outcome: Outcome,
    /// Moves applied after the starting position, in order
    pub history: Vec<Move>,
    pub final_board: Board,
}

/// Play `board` to the end. `agents[0]` moves for Player One.
///
/// Each turn gets a fresh [`TurnTimer`] of `time_limit`. A move returned
/// after the timer ran out loses by timeout, even if it was legal.
pub fn play_game(mut board: Board, agents: [&mut dyn Agent; 2], time_limit: Duration) -> GameRecord {
    let mut seats = agents;
    let mut history = Vec::new();

    loop {
        let active = board.active_player();
        let legal = board.legal_moves();
        let agent = &mut seats[active.index()];

        let timer = TurnTimer::start(time_limit);
        let mv = agent.get_move(&board, &timer);

        let outcome = if timer.expired() {
            log::warn!(
                "{} ({}) timed out after {:?}",
                agent.name(),
                active,
                timer.elapsed()
            );
            Some(Outcome::Timeout)
        } else if !legal.contains(&mv) {
            if legal.is_empty() {
                Some(Outcome::Isolated)
            } else {
                log::warn!("{} ({}) forfeits with illegal move {}", agent.name(), active, mv);
                Some(Outcome::Forfeit)
            }
        } else {
            None
        };

        if let Some(outcome) = outcome {
            let winner = active.opponent();
            log::debug!(
                "{} beats {} by {} after {} moves",
                seats[winner.index()].name(),
                seats[active.index()].name(),
                outcome,
                history.len()
            );
            return GameRecord {
                winner,
                loser: active,
                outcome,
                history,
                final_board: board,
            };
        }

        log::trace!("{} plays {}", active, mv);
        history.push(mv);
        board = board.apply_move(mv);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::{AIEngine, RandomPlayer};
    use crate::eval::Heuristic;
    use crate::search::TimeProbe;

    /// Plays a fixed list of moves, then the sentinel
    struct Scripted {
        moves: Vec<Move>,
        delay: Duration,
    }

    impl Scripted {
        fn new(moves: &[Move]) -> Self {
            Self {
                moves: moves.iter().rev().copied().collect(),
                delay: Duration::ZERO,
            }
        }
    }

    impl Agent for Scripted {
        fn name(&self) -> &str {
            "Scripted"
        }

        fn get_move(&mut self, _board: &Board, _time_left: &dyn TimeProbe) -> Move {
            std::thread::sleep(self.delay);
            self.moves.pop().unwrap_or(Move::NONE)
        }
    }

    #[test]
    fn test_isolation_ends_game() {
        // Two at (4, 0) is left with (2, 1) only; One takes it
        let board = Board::with_position(
            7,
            7,
            &[Move::new(3, 2), Move::new(5, 2), Move::new(6, 1)],
            [Some(Move::new(0, 0)), Some(Move::new(4, 0))],
            Player::One,
        )
        .unwrap();
        let mut one = Scripted::new(&[Move::new(2, 1)]);
        let mut two = Scripted::new(&[]);
        let record = play_game(board, [&mut one, &mut two], Duration::from_secs(1));
        assert_eq!(record.winner, Player::One);
        assert_eq!(record.loser, Player::Two);
        assert_eq!(record.outcome, Outcome::Isolated);
        assert_eq!(record.history, vec![Move::new(2, 1)]);
        assert!(record.final_board.is_loser(Player::Two));
    }

    #[test]
    fn test_illegal_move_forfeits() {
        let mut one = Scripted::new(&[Move::new(3, 3)]);
        let mut two = Scripted::new(&[Move::new(3, 3)]);
        let record = play_game(Board::default(), [&mut one, &mut two], Duration::from_secs(1));
        assert_eq!(record.winner, Player::One);
        assert_eq!(record.outcome, Outcome::Forfeit);
        assert_eq!(record.history, vec![Move::new(3, 3)]);
    }

    #[test]
    fn test_slow_move_times_out() {
        let mut one = Scripted::new(&[Move::new(0, 0)]);
        one.delay = Duration::from_millis(30);
        let mut two = Scripted::new(&[]);
        let record = play_game(Board::default(), [&mut one, &mut two], Duration::from_millis(5));
        assert_eq!(record.winner, Player::Two);
        assert_eq!(record.outcome, Outcome::Timeout);
        assert!(record.history.is_empty());
    }

    #[test]
    fn test_full_game_history_is_legal() {
        let mut one = AIEngine::minimax(2, Heuristic::Improved);
        let mut two = RandomPlayer::new(Some(11));
        let record = play_game(
            Board::new(5, 5).unwrap(),
            [&mut one, &mut two],
            Duration::from_secs(5),
        );
        assert_eq!(record.outcome, Outcome::Isolated);

        let mut replay = Board::new(5, 5).unwrap();
        for mv in &record.history {
            replay = replay.try_apply_move(*mv).unwrap();
        }
        assert_eq!(replay, record.final_board);
        assert!(replay.is_loser(record.loser));
        assert!(replay.is_winner(record.winner));
    }
}
