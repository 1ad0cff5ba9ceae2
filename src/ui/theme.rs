//! Theme constants for the Isolation GUI

use egui::Color32;

// Board colors
pub const BOARD_BG: Color32 = Color32::from_rgb(44, 47, 53);
pub const CELL_OPEN: Color32 = Color32::from_rgb(214, 196, 160);
pub const CELL_BLOCKED: Color32 = Color32::from_rgb(70, 58, 46);
pub const GRID_LINE: Color32 = Color32::from_rgb(60, 40, 20);

// Pieces
pub const PLAYER_ONE: Color32 = Color32::from_rgb(220, 90, 70);
pub const PLAYER_ONE_HIGHLIGHT: Color32 = Color32::from_rgb(250, 150, 130);
pub const PLAYER_TWO: Color32 = Color32::from_rgb(70, 130, 220);
pub const PLAYER_TWO_HIGHLIGHT: Color32 = Color32::from_rgb(140, 185, 250);

// Markers
pub const LAST_MOVE_MARKER: Color32 = Color32::from_rgb(250, 230, 90);
pub const WIN_HIGHLIGHT: Color32 = Color32::from_rgb(50, 220, 50);

pub fn legal_dot() -> Color32 {
    Color32::from_rgba_unmultiplied(40, 40, 40, 110)
}

pub fn hover_valid() -> Color32 {
    Color32::from_rgba_unmultiplied(80, 80, 80, 100)
}

pub fn hover_invalid() -> Color32 {
    Color32::from_rgba_unmultiplied(255, 50, 50, 100)
}

// Panel text
pub const TEXT_PRIMARY: Color32 = Color32::from_rgb(240, 240, 245);
pub const TEXT_SECONDARY: Color32 = Color32::from_rgb(160, 165, 175);
pub const TEXT_MUTED: Color32 = Color32::from_rgb(120, 125, 135);

// Timer colors
pub const TIMER_NORMAL: Color32 = Color32::from_rgb(80, 200, 120);
pub const TIMER_WARNING: Color32 = Color32::from_rgb(255, 180, 50);
pub const TIMER_CRITICAL: Color32 = Color32::from_rgb(255, 70, 70);

// Sizes
pub const BOARD_MARGIN: f32 = 32.0;
pub const PIECE_RADIUS_RATIO: f32 = 0.36;
pub const LEGAL_DOT_RADIUS_RATIO: f32 = 0.12;
pub const CELL_GAP: f32 = 2.0;
pub const LAST_MOVE_MARKER_RADIUS: f32 = 4.0;

/// Fill color and highlight for a player's piece
pub fn player_colors(player: crate::Player) -> (Color32, Color32) {
    match player {
        crate::Player::One => (PLAYER_ONE, PLAYER_ONE_HIGHLIGHT),
        crate::Player::Two => (PLAYER_TWO, PLAYER_TWO_HIGHLIGHT),
    }
}
