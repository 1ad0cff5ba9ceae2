//! Game session behind the GUI: board, history, engine worker and timers

use std::sync::mpsc::{channel, Receiver, TryRecvError};
use std::thread;
use std::time::{Duration, Instant};

use crate::config::EngineConfig;
use crate::game::Outcome;
use crate::search::TurnTimer;
use crate::{AIEngine, Board, GameState, Move, MoveResult, Player};

/// Game mode selection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameMode {
    /// Player vs engine
    PvE { human: Player },
    /// Player vs Player (hotseat)
    PvP,
}

impl Default for GameMode {
    fn default() -> Self {
        GameMode::PvE { human: Player::One }
    }
}

/// Engine worker state
pub enum AiState {
    Idle,
    Thinking {
        receiver: Receiver<(MoveResult, bool)>,
        start_time: Instant,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameResult {
    pub winner: Player,
    pub outcome: Outcome,
}

/// Move timer for tracking thinking time
pub struct MoveTimer {
    pub start_time: Option<Instant>,
    pub ai_thinking_time: Option<Duration>,
}

impl Default for MoveTimer {
    fn default() -> Self {
        Self {
            start_time: Some(Instant::now()),
            ai_thinking_time: None,
        }
    }
}

impl MoveTimer {
    pub fn start(&mut self) {
        self.start_time = Some(Instant::now());
    }

    pub fn stop(&mut self) {
        self.start_time = None;
    }

    pub fn elapsed(&self) -> Duration {
        self.start_time.map_or(Duration::ZERO, |t| t.elapsed())
    }
}

pub struct Session {
    pub board: Board,
    pub mode: GameMode,
    pub config: EngineConfig,
    pub game_over: Option<GameResult>,
    pub move_history: Vec<Move>,
    pub last_ai_result: Option<MoveResult>,
    pub ai_state: AiState,
    pub move_timer: MoveTimer,
    pub suggested_move: Option<Move>,
    pub message: Option<String>,
    /// Empty board of the configured size, for resets and undo replays
    start: Board,
}

impl Session {
    pub fn new(mode: GameMode, config: EngineConfig) -> Self {
        let start = config.board.build().unwrap_or_else(|e| {
            log::error!("{e}; falling back to the default board");
            Board::default()
        });
        Self {
            board: start.clone(),
            mode,
            config,
            game_over: None,
            move_history: Vec::new(),
            last_ai_result: None,
            ai_state: AiState::Idle,
            move_timer: MoveTimer::default(),
            suggested_move: None,
            message: None,
            start,
        }
    }

    pub fn reset(&mut self) {
        *self = Self::new(self.mode, self.config.clone());
    }

    #[inline]
    pub fn current_turn(&self) -> Player {
        self.board.active_player()
    }

    #[inline]
    pub fn last_move(&self) -> Option<Move> {
        self.move_history.last().copied()
    }

    pub fn is_human_turn(&self) -> bool {
        match self.mode {
            GameMode::PvE { human } => self.current_turn() == human,
            GameMode::PvP => true,
        }
    }

    pub fn is_ai_turn(&self) -> bool {
        !self.is_human_turn()
    }

    pub fn is_ai_thinking(&self) -> bool {
        matches!(self.ai_state, AiState::Thinking { .. })
    }

    /// Play a human move
    pub fn try_move(&mut self, mv: Move) -> Result<(), String> {
        if self.game_over.is_some() {
            return Err("Game is over".to_string());
        }
        if self.is_ai_thinking() {
            return Err("Engine is thinking".to_string());
        }
        if !self.is_human_turn() {
            return Err("Not your turn".to_string());
        }

        let next = self.board.try_apply_move(mv).map_err(|e| e.to_string())?;
        self.commit(mv, next);
        Ok(())
    }

    fn commit(&mut self, mv: Move, next: Board) {
        self.board = next;
        self.move_history.push(mv);
        self.suggested_move = None;
        self.message = None;
        self.move_timer.start();
        self.check_isolation();
    }

    fn check_isolation(&mut self) {
        let active = self.board.active_player();
        if self.board.is_loser(active) {
            self.end(active.opponent(), Outcome::Isolated);
        }
    }

    fn end(&mut self, winner: Player, outcome: Outcome) {
        log::info!("{winner} wins by {outcome} after {} moves", self.move_history.len());
        self.move_timer.stop();
        self.game_over = Some(GameResult { winner, outcome });
    }

    /// Hand the position to a worker thread
    pub fn start_ai_thinking(&mut self) {
        if !self.is_ai_turn() || self.is_ai_thinking() || self.game_over.is_some() {
            return;
        }

        let board = self.board.clone();
        let search = self.config.search;
        let (tx, rx) = channel();

        thread::spawn(move || {
            let engine = AIEngine::from_config(&search);
            let timer = TurnTimer::start(search.time_limit());
            let result = engine.get_move_with_stats(&board, &timer);
            let _ = tx.send((result, timer.expired()));
        });

        self.ai_state = AiState::Thinking {
            receiver: rx,
            start_time: Instant::now(),
        };
    }

    /// Apply the engine's move once the worker reports back
    pub fn check_ai_result(&mut self) {
        let received = match &self.ai_state {
            AiState::Thinking { receiver, start_time } => match receiver.try_recv() {
                Ok(message) => Some((message, start_time.elapsed())),
                Err(TryRecvError::Empty) => None,
                Err(TryRecvError::Disconnected) => {
                    self.ai_state = AiState::Idle;
                    self.message = Some("Engine worker stopped".to_string());
                    return;
                }
            },
            AiState::Idle => None,
        };

        let Some(((result, expired), elapsed)) = received else {
            return;
        };
        self.ai_state = AiState::Idle;
        self.last_ai_result = Some(result);
        self.move_timer.ai_thinking_time = Some(elapsed);
        self.apply_engine_move(result.best_move, expired);
    }

    /// Same rules as the match runner: late moves time out, illegal moves forfeit
    fn apply_engine_move(&mut self, mv: Move, expired: bool) {
        let engine = self.current_turn();
        if expired {
            self.end(engine.opponent(), Outcome::Timeout);
            return;
        }
        match self.board.try_apply_move(mv) {
            Ok(next) => self.commit(mv, next),
            Err(e) => {
                self.message = Some(format!("Engine forfeits: {e}"));
                self.end(engine.opponent(), Outcome::Forfeit);
            }
        }
    }

    pub fn ai_thinking_elapsed(&self) -> Option<Duration> {
        match &self.ai_state {
            AiState::Thinking { start_time, .. } => Some(start_time.elapsed()),
            AiState::Idle => None,
        }
    }

    /// Ask the engine for a suggestion on the current position
    pub fn request_suggestion(&mut self) {
        if self.game_over.is_some() || self.is_ai_thinking() {
            return;
        }

        let engine = AIEngine::from_config(&self.config.search);
        let timer = TurnTimer::start(self.config.search.time_limit());
        let result = engine.get_move_with_stats(&self.board, &timer);

        self.suggested_move = (!result.best_move.is_none()).then_some(result.best_move);
        self.last_ai_result = Some(result);
    }

    /// Take back the last move, or the last human/engine pair against the engine
    pub fn undo(&mut self) {
        if self.move_history.is_empty() || self.is_ai_thinking() {
            return;
        }

        let undo_count = match self.mode {
            GameMode::PvE { human } => {
                // Back to a position where the human is to move
                let keep = self.move_history.len().saturating_sub(1);
                if self.side_to_move_after(keep) == human {
                    1
                } else {
                    2
                }
            }
            GameMode::PvP => 1,
        };

        let keep = self.move_history.len().saturating_sub(undo_count);
        self.move_history.truncate(keep);
        self.board = self.replay();
        self.game_over = None;
        self.suggested_move = None;
        self.message = None;
        self.move_timer.start();
    }

    fn side_to_move_after(&self, plies: usize) -> Player {
        if plies % 2 == 0 {
            self.start.active_player()
        } else {
            self.start.active_player().opponent()
        }
    }

    fn replay(&self) -> Board {
        self.move_history
            .iter()
            .fold(self.start.clone(), |board, &mv| board.apply_move(mv))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn small_config() -> EngineConfig {
        let mut config = EngineConfig::default();
        config.board.width = 5;
        config.board.height = 5;
        config
    }

    #[test]
    fn test_hotseat_moves_alternate() {
        let mut session = Session::new(GameMode::PvP, small_config());
        session.try_move(Move::new(2, 2)).unwrap();
        assert_eq!(session.current_turn(), Player::Two);
        session.try_move(Move::new(0, 0)).unwrap();
        assert_eq!(session.last_move(), Some(Move::new(0, 0)));

        // (2, 2) cannot reach (2, 3)
        assert!(session.try_move(Move::new(2, 3)).is_err());
        assert_eq!(session.move_history.len(), 2);
    }

    #[test]
    fn test_not_human_turn_rejected() {
        let mut session = Session::new(GameMode::PvE { human: Player::Two }, small_config());
        assert!(session.is_ai_turn());
        assert!(session.try_move(Move::new(0, 0)).is_err());
    }

    #[test]
    fn test_undo_restores_position() {
        let mut session = Session::new(GameMode::PvP, small_config());
        session.try_move(Move::new(2, 2)).unwrap();
        let before = session.board.clone();
        session.try_move(Move::new(0, 0)).unwrap();
        session.undo();
        assert_eq!(session.board, before);
        assert_eq!(session.move_history, vec![Move::new(2, 2)]);
    }

    #[test]
    fn test_pve_undo_returns_to_human() {
        let mut session = Session::new(GameMode::PvE { human: Player::One }, small_config());
        session.try_move(Move::new(2, 2)).unwrap();
        session.apply_engine_move(Move::new(0, 0), false);
        session.undo();
        assert!(session.move_history.is_empty());
        assert!(session.is_human_turn());
    }

    #[test]
    fn test_engine_forfeit_and_timeout_end_game() {
        let mut session = Session::new(GameMode::PvE { human: Player::One }, small_config());
        session.try_move(Move::new(2, 2)).unwrap();
        session.apply_engine_move(Move::new(2, 2), false);
        assert_eq!(
            session.game_over,
            Some(GameResult {
                winner: Player::One,
                outcome: Outcome::Forfeit
            })
        );

        session.reset();
        session.try_move(Move::new(2, 2)).unwrap();
        session.apply_engine_move(Move::new(0, 0), true);
        assert_eq!(session.game_over.map(|r| r.outcome), Some(Outcome::Timeout));
    }

    #[test]
    fn test_isolation_detected() {
        // 3x3: One at the center has no knight moves at all
        let mut config = EngineConfig::default();
        config.board.width = 3;
        config.board.height = 3;
        let mut session = Session::new(GameMode::PvP, config);
        session.try_move(Move::new(1, 1)).unwrap();
        session.try_move(Move::new(0, 0)).unwrap();
        assert_eq!(
            session.game_over,
            Some(GameResult {
                winner: Player::Two,
                outcome: Outcome::Isolated
            })
        );
        assert!(session.try_move(Move::new(2, 2)).is_err());
    }
}
