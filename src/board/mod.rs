//! Board representation for Isolation

pub mod bitboard;
pub mod board;


// Re-exports
pub use bitboard::Bitboard;
pub use board::{Board, Cell};

/// Default board size (7x7)
pub const DEFAULT_WIDTH: usize = 7;
pub const DEFAULT_HEIGHT: usize = 7;

/// Largest board a [`Bitboard`] can hold
pub const MAX_CELLS: usize = 128;

/// Knight-jump offsets in enumeration order.
///
/// The order is observable: it decides which move wins a tie during search.
pub const KNIGHT_DIRECTIONS: [(i32, i32); 8] = [
    (-2, -1),
    (-2, 1),
    (-1, -2),
    (-1, 2),
    (1, -2),
    (1, 2),
    (2, -1),
    (2, 1),
];

/// The two sides of a game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Player {
    One,
    Two,
}

impl Player {
    /// Get the other side
    #[inline]
    pub fn opponent(self) -> Player {
        match self {
            Player::One => Player::Two,
            Player::Two => Player::One,
        }
    }

    #[inline]
    pub fn index(self) -> usize {
        match self {
            Player::One => 0,
            Player::Two => 1,
        }
    }
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Player::One => write!(f, "Player 1"),
            Player::Two => write!(f, "Player 2"),
        }
    }
}

/// A board cell as (row, col).
///
/// [`Move::NONE`] is the `(-1, -1)` sentinel meaning "no legal move".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Move {
    pub row: i32,
    pub col: i32,
}

impl Move {
    pub const NONE: Move = Move { row: -1, col: -1 };

    #[inline]
    pub const fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    #[inline]
    pub fn is_none(self) -> bool {
        self == Move::NONE
    }

    /// Cell reached by a knight jump, without bounds checking
    #[inline]
    pub fn offset(self, dr: i32, dc: i32) -> Move {
        Move::new(self.row + dr, self.col + dc)
    }
}

impl Default for Move {
    fn default() -> Self {
        Move::NONE
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

impl From<(i32, i32)> for Move {
    fn from((row, col): (i32, i32)) -> Self {
        Move::new(row, col)
    }
}

/// Game-state capability consumed by the search.
///
/// Implementors are treated as immutable per ply: [`GameState::apply_move`]
/// returns a fresh state and leaves the receiver untouched.
pub trait GameState: Clone {
    /// Side to move
    fn active_player(&self) -> Player;

    /// Legal moves for `player`, in a fixed enumeration order
    fn legal_moves_for(&self, player: Player) -> Vec<Move>;

    /// Legal moves for the side to move
    fn legal_moves(&self) -> Vec<Move> {
        self.legal_moves_for(self.active_player())
    }

    /// New state with `mv` played by the side to move
    fn apply_move(&self, mv: Move) -> Self;

    fn is_winner(&self, player: Player) -> bool;

    fn is_loser(&self, player: Player) -> bool;

    /// Current cell of `player`, `None` before its first placement
    fn player_location(&self, player: Player) -> Option<Move>;

    fn width(&self) -> usize;

    fn height(&self) -> usize;
}
