//! Board rendering for the Isolation GUI

use egui::{Color32, CornerRadius, Painter, Pos2, Rect, Sense, Stroke, Vec2};

use crate::board::Cell;
use crate::{Board, GameState, Move, Player};

use super::theme::*;

/// What the board view needs to know besides the board itself
pub struct BoardOverlay {
    pub last_move: Option<Move>,
    pub suggested_move: Option<Move>,
    /// Highlight the legal moves of the side to move
    pub show_legal: bool,
    pub accept_input: bool,
}

/// Board view handles rendering and input for the game board
pub struct BoardView {
    /// Cached cell size for coordinate calculations
    cell_size: f32,
    /// Board drawing area
    board_rect: Rect,
    columns: usize,
    rows: usize,
}

impl Default for BoardView {
    fn default() -> Self {
        Self {
            cell_size: 60.0,
            board_rect: Rect::NOTHING,
            columns: 0,
            rows: 0,
        }
    }
}

impl BoardView {
    /// Render the board and return the clicked legal move, if any
    pub fn show(&mut self, ui: &mut egui::Ui, board: &Board, overlay: &BoardOverlay) -> Option<Move> {
        self.columns = board.width();
        self.rows = board.height();

        let available = ui.available_size();
        let span = self.columns.max(self.rows) as f32;
        self.cell_size = ((available.x.min(available.y) - 20.0 - 2.0 * BOARD_MARGIN) / span).max(12.0);

        let size = Vec2::new(
            self.columns as f32 * self.cell_size + 2.0 * BOARD_MARGIN,
            self.rows as f32 * self.cell_size + 2.0 * BOARD_MARGIN,
        );
        let (response, painter) = ui.allocate_painter(size, Sense::click());
        self.board_rect = response.rect;

        painter.rect_filled(self.board_rect, CornerRadius::same(6), BOARD_BG);
        self.draw_cells(&painter, board);
        self.draw_coordinates(&painter);

        let legal = board.legal_moves();
        if overlay.show_legal {
            for &mv in &legal {
                painter.circle_filled(self.cell_center(mv), self.cell_size * LEGAL_DOT_RADIUS_RATIO, legal_dot());
            }
        }

        for player in [Player::One, Player::Two] {
            if let Some(loc) = board.player_location(player) {
                self.draw_piece(&painter, loc, player);
            }
        }

        if let Some(mv) = overlay.last_move {
            painter.circle_filled(self.cell_center(mv), LAST_MOVE_MARKER_RADIUS, LAST_MOVE_MARKER);
        }

        if let Some(mv) = overlay.suggested_move {
            self.draw_suggestion(&painter, mv, board.active_player());
        }

        if !overlay.accept_input {
            return None;
        }

        let hovered = response.hover_pos().and_then(|p| self.screen_to_board(p))?;
        let is_valid = legal.contains(&hovered);
        let color = if is_valid { hover_valid() } else { hover_invalid() };
        painter.rect_filled(self.cell_rect(hovered).shrink(CELL_GAP), CornerRadius::same(4), color);

        (response.clicked() && is_valid).then_some(hovered)
    }

    fn draw_cells(&self, painter: &Painter, board: &Board) {
        let stroke = Stroke::new(1.0, GRID_LINE);
        for row in 0..self.rows as i32 {
            for col in 0..self.columns as i32 {
                let mv = Move::new(row, col);
                let fill = match board.cell(mv) {
                    Cell::Open | Cell::Occupied(_) => CELL_OPEN,
                    Cell::Blocked => CELL_BLOCKED,
                };
                let rect = self.cell_rect(mv).shrink(CELL_GAP);
                painter.rect_filled(rect, CornerRadius::same(4), fill);
                if board.cell(mv) == Cell::Blocked {
                    // Cross out visited cells
                    let inset = rect.shrink(self.cell_size * 0.3);
                    painter.line_segment([inset.left_top(), inset.right_bottom()], stroke);
                    painter.line_segment([inset.right_top(), inset.left_bottom()], stroke);
                }
            }
        }
    }

    fn draw_coordinates(&self, painter: &Painter) {
        let font = egui::FontId::proportional(12.0);
        for col in 0..self.columns {
            let x = self.board_rect.min.x + BOARD_MARGIN + (col as f32 + 0.5) * self.cell_size;
            let pos = Pos2::new(x, self.board_rect.min.y + BOARD_MARGIN * 0.5);
            painter.text(pos, egui::Align2::CENTER_CENTER, col, font.clone(), TEXT_SECONDARY);
        }
        for row in 0..self.rows {
            let y = self.board_rect.min.y + BOARD_MARGIN + (row as f32 + 0.5) * self.cell_size;
            let pos = Pos2::new(self.board_rect.min.x + BOARD_MARGIN * 0.5, y);
            painter.text(pos, egui::Align2::CENTER_CENTER, row, font.clone(), TEXT_SECONDARY);
        }
    }

    fn draw_piece(&self, painter: &Painter, mv: Move, player: Player) {
        let center = self.cell_center(mv);
        let radius = self.cell_size * PIECE_RADIUS_RATIO;
        let (fill, highlight) = player_colors(player);

        painter.circle_filled(
            center + Vec2::new(2.0, 2.0),
            radius,
            Color32::from_rgba_unmultiplied(0, 0, 0, 60),
        );
        painter.circle_filled(center, radius, fill);
        painter.circle_filled(center + Vec2::new(-radius * 0.3, -radius * 0.3), radius * 0.2, highlight);
        painter.text(
            center,
            egui::Align2::CENTER_CENTER,
            player,
            egui::FontId::proportional(radius),
            TEXT_PRIMARY,
        );
    }

    fn draw_suggestion(&self, painter: &Painter, mv: Move, turn: Player) {
        let center = self.cell_center(mv);
        let radius = self.cell_size * PIECE_RADIUS_RATIO;
        let (fill, _) = player_colors(turn);
        painter.circle_stroke(center, radius, Stroke::new(3.0, fill));
        painter.text(
            center,
            egui::Align2::CENTER_CENTER,
            "?",
            egui::FontId::proportional(16.0),
            fill,
        );
    }

    fn cell_rect(&self, mv: Move) -> Rect {
        let min = self.board_rect.min
            + Vec2::new(
                BOARD_MARGIN + mv.col as f32 * self.cell_size,
                BOARD_MARGIN + mv.row as f32 * self.cell_size,
            );
        Rect::from_min_size(min, Vec2::splat(self.cell_size))
    }

    fn cell_center(&self, mv: Move) -> Pos2 {
        self.cell_rect(mv).center()
    }

    /// Convert screen coordinates to a board cell
    pub fn screen_to_board(&self, screen_pos: Pos2) -> Option<Move> {
        let relative = screen_pos - self.board_rect.min;
        let col = ((relative.x - BOARD_MARGIN) / self.cell_size).floor() as i32;
        let row = ((relative.y - BOARD_MARGIN) / self.cell_size).floor() as i32;

        let inside = (0..self.columns as i32).contains(&col) && (0..self.rows as i32).contains(&row);
        inside.then(|| Move::new(row, col))
    }
}
