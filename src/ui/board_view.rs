//! Board rendering for the desktop client

use egui::{Color32, CornerRadius, Painter, Pos2, Rect, Sense, Stroke, Vec2};

use crate::{Board, Pos, Stone, BOARD_SIZE};

use super::theme::*;

/// What the board view needs to draw besides the stones
pub struct BoardOverlay<'a> {
    pub current_turn: Stone,
    pub last_move: Option<Pos>,
    pub suggested_move: Option<Pos>,
    pub winning_line: Option<&'a [Pos]>,
    pub game_over: bool,
}

/// Board view handles rendering and input for the game board
pub struct BoardView {
    cell_size: f32,
    board_rect: Rect,
}

impl Default for BoardView {
    fn default() -> Self {
        Self {
            cell_size: 30.0,
            board_rect: Rect::NOTHING,
        }
    }
}

impl BoardView {
    /// Render the board and return the clicked empty cell, if any
    pub fn show(&mut self, ui: &mut egui::Ui, board: &Board, overlay: &BoardOverlay<'_>) -> Option<Pos> {
        let available_size = ui.available_size();
        let board_size = available_size.x.min(available_size.y) - 20.0;
        self.cell_size = (board_size - 2.0 * BOARD_MARGIN) / (BOARD_SIZE as f32 - 1.0);

        let (response, painter) = ui.allocate_painter(Vec2::new(board_size, board_size), Sense::click());
        self.board_rect = response.rect;

        painter.rect_filled(self.board_rect, CornerRadius::same(4), BOARD_BG);
        self.draw_grid(&painter);
        self.draw_star_points(&painter);
        self.draw_coordinates(&painter);
        self.draw_stones(&painter, board);

        if let Some(pos) = overlay.last_move {
            self.draw_last_move_marker(&painter, pos);
        }
        if let Some(line) = overlay.winning_line {
            self.draw_winning_line(&painter, line);
        }
        if let Some(pos) = overlay.suggested_move {
            self.draw_suggestion(&painter, pos, overlay.current_turn);
        }

        if overlay.game_over {
            return None;
        }

        let board_pos = response.hover_pos().and_then(|p| self.screen_to_board(p))?;
        let is_free = board.is_empty(board_pos);
        self.draw_hover_preview(&painter, board_pos, overlay.current_turn, is_free);

        (response.clicked() && is_free).then_some(board_pos)
    }

    fn draw_grid(&self, painter: &Painter) {
        let stroke = Stroke::new(GRID_LINE_WIDTH, GRID_LINE);
        let span = (BOARD_SIZE as f32 - 1.0) * self.cell_size;

        for i in 0..BOARD_SIZE {
            let offset = BOARD_MARGIN + i as f32 * self.cell_size;

            let start = self.board_rect.min + Vec2::new(offset, BOARD_MARGIN);
            let end = self.board_rect.min + Vec2::new(offset, BOARD_MARGIN + span);
            painter.line_segment([start, end], stroke);

            let start = self.board_rect.min + Vec2::new(BOARD_MARGIN, offset);
            let end = self.board_rect.min + Vec2::new(BOARD_MARGIN + span, offset);
            painter.line_segment([start, end], stroke);
        }
    }

    fn draw_star_points(&self, painter: &Painter) {
        for (row, col) in STAR_POINTS {
            let center = self.board_to_screen(Pos::new(row, col));
            painter.circle_filled(center, STAR_POINT_RADIUS, STAR_POINT);
        }
    }

    /// Column letters A-O and row numbers 15-1, top to bottom
    fn draw_coordinates(&self, painter: &Painter) {
        let font = egui::FontId::proportional(12.0);

        for col in 0..BOARD_SIZE {
            let letter = (b'A' + col as u8) as char;
            let x = self.board_rect.min.x + BOARD_MARGIN + col as f32 * self.cell_size;
            for y in [self.board_rect.min.y + 12.0, self.board_rect.max.y - 12.0] {
                painter.text(Pos2::new(x, y), egui::Align2::CENTER_CENTER, letter, font.clone(), GRID_LINE);
            }
        }

        for row in 0..BOARD_SIZE {
            let label = (BOARD_SIZE - row).to_string();
            let y = self.board_rect.min.y + BOARD_MARGIN + row as f32 * self.cell_size;
            for x in [self.board_rect.min.x + 12.0, self.board_rect.max.x - 12.0] {
                painter.text(Pos2::new(x, y), egui::Align2::CENTER_CENTER, &label, font.clone(), GRID_LINE);
            }
        }
    }

    fn draw_stones(&self, painter: &Painter, board: &Board) {
        for pos in board.occupied().iter_ones() {
            self.draw_stone(painter, pos, board.get(pos));
        }
    }

    fn draw_stone(&self, painter: &Painter, pos: Pos, stone: Stone) {
        let center = self.board_to_screen(pos);
        let radius = self.cell_size * STONE_RADIUS_RATIO;
        let shadow_offset = Vec2::new(2.0, 2.0);

        match stone {
            Stone::Black => {
                painter.circle_filled(center + shadow_offset, radius, Color32::from_rgba_unmultiplied(0, 0, 0, 60));
                painter.circle_filled(center, radius, BLACK_STONE);
                painter.circle_filled(
                    center + Vec2::new(-radius * 0.3, -radius * 0.3),
                    radius * 0.2,
                    BLACK_STONE_HIGHLIGHT,
                );
            }
            Stone::White => {
                painter.circle_filled(center + shadow_offset, radius, Color32::from_rgba_unmultiplied(0, 0, 0, 40));
                painter.circle_filled(center, radius, WHITE_STONE);
                painter.circle_stroke(center, radius * 0.85, Stroke::new(radius * 0.1, WHITE_STONE_SHADOW));
            }
            Stone::Empty => {}
        }
    }

    fn draw_last_move_marker(&self, painter: &Painter, pos: Pos) {
        painter.circle_filled(self.board_to_screen(pos), LAST_MOVE_MARKER_RADIUS, LAST_MOVE_MARKER);
    }

    /// Connect the winning run end to end and ring each stone
    fn draw_winning_line(&self, painter: &Painter, line: &[Pos]) {
        let stroke = Stroke::new(4.0, WIN_HIGHLIGHT);

        for pair in line.windows(2) {
            painter.line_segment([self.board_to_screen(pair[0]), self.board_to_screen(pair[1])], stroke);
        }
        let radius = self.cell_size * STONE_RADIUS_RATIO + 3.0;
        for &pos in line {
            painter.circle_stroke(self.board_to_screen(pos), radius, stroke);
        }
    }

    fn draw_suggestion(&self, painter: &Painter, pos: Pos, turn: Stone) {
        let center = self.board_to_screen(pos);
        let radius = self.cell_size * STONE_RADIUS_RATIO;

        let (fill, mark) = match turn {
            Stone::Black => (Color32::from_rgba_unmultiplied(20, 20, 20, 100), WHITE_STONE),
            Stone::White => (Color32::from_rgba_unmultiplied(240, 240, 240, 100), BLACK_STONE),
            Stone::Empty => return,
        };
        painter.circle_filled(center, radius, fill);
        painter.text(center, egui::Align2::CENTER_CENTER, "?", egui::FontId::proportional(14.0), mark);
    }

    fn draw_hover_preview(&self, painter: &Painter, pos: Pos, turn: Stone, is_free: bool) {
        let color = match (is_free, turn) {
            (false, _) => hover_occupied(),
            (true, Stone::Black) => Color32::from_rgba_unmultiplied(20, 20, 20, 80),
            (true, Stone::White) => Color32::from_rgba_unmultiplied(240, 240, 240, 80),
            (true, Stone::Empty) => return,
        };
        painter.circle_filled(self.board_to_screen(pos), self.cell_size * STONE_RADIUS_RATIO, color);
    }

    /// Convert screen coordinates to board position
    pub fn screen_to_board(&self, screen_pos: Pos2) -> Option<Pos> {
        let relative = screen_pos - self.board_rect.min;
        let col = ((relative.x - BOARD_MARGIN + self.cell_size * 0.5) / self.cell_size).floor() as i32;
        let row = ((relative.y - BOARD_MARGIN + self.cell_size * 0.5) / self.cell_size).floor() as i32;
        Pos::try_new(row, col)
    }

    /// Convert board position to screen coordinates
    pub fn board_to_screen(&self, pos: Pos) -> Pos2 {
        let x = self.board_rect.min.x + BOARD_MARGIN + pos.col as f32 * self.cell_size;
        let y = self.board_rect.min.y + BOARD_MARGIN + pos.row as f32 * self.cell_size;
        Pos2::new(x, y)
    }
}
