//! Knight-move Isolation board

use std::fmt;

use super::bitboard::Bitboard;
use super::{GameState, Move, Player, DEFAULT_HEIGHT, DEFAULT_WIDTH, KNIGHT_DIRECTIONS, MAX_CELLS};
use crate::error::{IsolationError, Result};

/// What occupies a cell
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cell {
    Open,
    /// Visited earlier and no longer reachable
    Blocked,
    /// Current location of a player
    Occupied(Player),
}

/// Isolation board.
///
/// Each player owns one piece. The first move of a player places the piece on
/// any open cell; every later move is a knight jump onto an open cell. Every
/// cell a piece has stood on stays blocked for the rest of the game. The side
/// to move with no legal moves loses.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Board {
    width: usize,
    height: usize,
    /// Visited cells, including both current locations
    blocked: Bitboard,
    locations: [Option<Move>; 2],
    active: Player,
    move_count: u32,
}

impl Board {
    /// Create an empty board with Player One to move.
    pub fn new(width: usize, height: usize) -> Result<Self> {
        if width == 0 || height == 0 || width * height > MAX_CELLS {
            return Err(IsolationError::InvalidBoardSize { width, height });
        }
        Ok(Self {
            width,
            height,
            blocked: Bitboard::new(),
            locations: [None, None],
            active: Player::One,
            move_count: 0,
        })
    }

    /// Build an arbitrary position, e.g. for puzzles and tests.
    ///
    /// `locations` are marked blocked in addition to `blocked`.
    pub fn with_position(
        width: usize,
        height: usize,
        blocked: &[Move],
        locations: [Option<Move>; 2],
        active: Player,
    ) -> Result<Self> {
        let mut board = Self::new(width, height)?;
        for &cell in blocked.iter().chain(locations.iter().flatten()) {
            let idx = board.index(cell).ok_or(IsolationError::OutOfBounds(cell))?;
            board.blocked.set(idx);
        }
        if let (Some(a), Some(b)) = (locations[0], locations[1]) {
            if a == b {
                return Err(IsolationError::Occupied(b));
            }
        }
        board.locations = locations;
        board.active = active;
        board.move_count = board.blocked.count();
        Ok(board)
    }

    /// Cell index for an in-bounds move
    #[inline]
    fn index(&self, mv: Move) -> Option<usize> {
        if self.in_bounds(mv) {
            Some(mv.row as usize * self.width + mv.col as usize)
        } else {
            None
        }
    }

    #[inline]
    pub fn in_bounds(&self, mv: Move) -> bool {
        mv.row >= 0 && mv.col >= 0 && (mv.row as usize) < self.height && (mv.col as usize) < self.width
    }

    /// In bounds and never visited
    #[inline]
    pub fn is_open(&self, mv: Move) -> bool {
        self.index(mv).is_some_and(|idx| !self.blocked.get(idx))
    }

    /// Get what occupies a cell (out-of-bounds cells read as blocked)
    pub fn cell(&self, mv: Move) -> Cell {
        if self.locations[0] == Some(mv) {
            Cell::Occupied(Player::One)
        } else if self.locations[1] == Some(mv) {
            Cell::Occupied(Player::Two)
        } else if self.is_open(mv) {
            Cell::Open
        } else {
            Cell::Blocked
        }
    }

    /// All open cells, column by column
    pub fn blank_spaces(&self) -> Vec<Move> {
        let mut spaces = Vec::with_capacity(self.width * self.height);
        for col in 0..self.width as i32 {
            for row in 0..self.height as i32 {
                let mv = Move::new(row, col);
                if self.is_open(mv) {
                    spaces.push(mv);
                }
            }
        }
        spaces
    }

    /// Plies played so far
    #[inline]
    pub fn move_count(&self) -> u32 {
        self.move_count
    }

    /// Apply a move after checking it against the legal-move set.
    pub fn try_apply_move(&self, mv: Move) -> Result<Self> {
        if !self.in_bounds(mv) {
            return Err(IsolationError::OutOfBounds(mv));
        }
        if !self.legal_moves().contains(&mv) {
            return Err(IsolationError::IllegalMove(mv));
        }
        Ok(self.apply_move(mv))
    }

    /// Game value from `player`'s point of view: +inf won, -inf lost, 0 otherwise
    pub fn utility(&self, player: Player) -> f64 {
        if self.is_winner(player) {
            f64::INFINITY
        } else if self.is_loser(player) {
            f64::NEG_INFINITY
        } else {
            0.0
        }
    }

    fn has_legal_moves(&self, player: Player) -> bool {
        match self.locations[player.index()] {
            None => self.blocked.count() < (self.width * self.height) as u32,
            Some(loc) => KNIGHT_DIRECTIONS
                .iter()
                .any(|&(dr, dc)| self.is_open(loc.offset(dr, dc))),
        }
    }
}

impl Default for Board {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            blocked: Bitboard::new(),
            locations: [None, None],
            active: Player::One,
            move_count: 0,
        }
    }
}

impl GameState for Board {
    #[inline]
    fn active_player(&self) -> Player {
        self.active
    }

    fn legal_moves_for(&self, player: Player) -> Vec<Move> {
        match self.locations[player.index()] {
            None => self.blank_spaces(),
            Some(loc) => KNIGHT_DIRECTIONS
                .iter()
                .map(|&(dr, dc)| loc.offset(dr, dc))
                .filter(|&mv| self.is_open(mv))
                .collect(),
        }
    }

    fn apply_move(&self, mv: Move) -> Self {
        debug_assert!(self.is_open(mv), "apply_move onto closed cell {mv}");
        let mut next = self.clone();
        if let Some(idx) = next.index(mv) {
            next.blocked.set(idx);
        }
        next.locations[self.active.index()] = Some(mv);
        next.active = self.active.opponent();
        next.move_count += 1;
        next
    }

    fn is_winner(&self, player: Player) -> bool {
        player != self.active && !self.has_legal_moves(self.active)
    }

    fn is_loser(&self, player: Player) -> bool {
        player == self.active && !self.has_legal_moves(self.active)
    }

    #[inline]
    fn player_location(&self, player: Player) -> Option<Move> {
        self.locations[player.index()]
    }

    #[inline]
    fn width(&self) -> usize {
        self.width
    }

    #[inline]
    fn height(&self) -> usize {
        self.height
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "    ")?;
        for col in 0..self.width {
            write!(f, " {col:<3}")?;
        }
        writeln!(f)?;
        for row in 0..self.height as i32 {
            write!(f, "{row:>2} |")?;
            for col in 0..self.width as i32 {
                let ch = match self.cell(Move::new(row, col)) {
                    Cell::Open => ' ',
                    Cell::Blocked => '-',
                    Cell::Occupied(Player::One) => '1',
                    Cell::Occupied(Player::Two) => '2',
                };
                write!(f, " {ch} |")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
