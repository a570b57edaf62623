use common::games::tictactoe::{BOARD_SIZE, Board, Mark, Outcome, Position, WinningLine};

use crate::colors;

pub struct TicTacToeGameUi {
    last_hover: Option<Position>,
}

impl TicTacToeGameUi {
    const LINE_WIDTH: f32 = 5.0;
    const CIRCLE_WIDTH: f32 = 10.0;
    const CROSS_WIDTH: f32 = 14.0;
    const STATUS_HEIGHT: f32 = 40.0;

    pub fn new() -> Self {
        Self { last_hover: None }
    }

    pub fn render_game(&mut self, ui: &mut egui::Ui, board: &Board, ai_thinking: bool) -> Option<Position> {
        let (rect, response) = Self::allocate_board(ui);
        let painter = ui.painter();
        Self::draw_board(painter, rect, board, colors::FOREGROUND);

        let cell_size = rect.width() / BOARD_SIZE as f32;
        self.last_hover = if ai_thinking {
            None
        } else {
            response
                .hover_pos()
                .and_then(|pos| cell_at(rect.min, cell_size, pos))
                .filter(|cell| board.is_available(cell.row, cell.col))
        };

        if let Some(cell) = self.last_hover {
            painter.rect_filled(
                cell_rect(rect.min, cell_size, cell),
                0.0,
                egui::Color32::from_rgba_unmultiplied(100, 150, 255, 40),
            );
        }

        let status = if ai_thinking { "AI is thinking..." } else { "Your turn" };
        Self::render_status(ui, status, colors::FOREGROUND);

        if response.clicked() && !ai_thinking {
            return response
                .interact_pointer_pos()
                .and_then(|pos| cell_at(rect.min, cell_size, pos));
        }
        None
    }

    pub fn render_game_over(
        &mut self,
        ui: &mut egui::Ui,
        board: &Board,
        outcome: Outcome,
        winning_line: Option<WinningLine>,
    ) {
        self.last_hover = None;
        let color = colors::outcome_color(outcome);
        let (rect, _) = Self::allocate_board(ui);
        Self::draw_board(ui.painter(), rect, board, color);
        if let Some(line) = winning_line {
            let cell_size = rect.width() / BOARD_SIZE as f32;
            ui.painter().line_segment(
                [
                    cell_rect(rect.min, cell_size, line.start).center(),
                    cell_rect(rect.min, cell_size, line.end).center(),
                ],
                egui::Stroke::new(Self::LINE_WIDTH, color),
            );
        }
        Self::render_status(ui, &format!("{} - press R to restart", outcome), color);
    }

    fn allocate_board(ui: &mut egui::Ui) -> (egui::Rect, egui::Response) {
        let side = ui
            .available_width()
            .min(ui.available_height() - Self::STATUS_HEIGHT)
            .max(BOARD_SIZE as f32);
        ui.allocate_exact_size(egui::vec2(side, side), egui::Sense::click())
    }

    fn draw_board(painter: &egui::Painter, rect: egui::Rect, board: &Board, color: egui::Color32) {
        let cell_size = rect.width() / BOARD_SIZE as f32;
        let stroke = egui::Stroke::new(Self::LINE_WIDTH, color);

        for i in 1..BOARD_SIZE {
            let offset = i as f32 * cell_size;
            painter.line_segment(
                [
                    egui::pos2(rect.left(), rect.top() + offset),
                    egui::pos2(rect.right(), rect.top() + offset),
                ],
                stroke,
            );
            painter.line_segment(
                [
                    egui::pos2(rect.left() + offset, rect.top()),
                    egui::pos2(rect.left() + offset, rect.bottom()),
                ],
                stroke,
            );
        }

        for (row, cells) in board.cells().iter().enumerate() {
            for (col, &mark) in cells.iter().enumerate() {
                let cell = cell_rect(rect.min, cell_size, Position::new(row, col));
                match mark {
                    Mark::Human => Self::draw_circle(painter, cell, color),
                    Mark::Ai => Self::draw_cross(painter, cell, color),
                    Mark::Empty => {}
                }
            }
        }
    }

    fn draw_circle(painter: &egui::Painter, rect: egui::Rect, color: egui::Color32) {
        let radius = rect.width() / 3.0;
        painter.circle_stroke(rect.center(), radius, egui::Stroke::new(Self::CIRCLE_WIDTH, color));
    }

    fn draw_cross(painter: &egui::Painter, rect: egui::Rect, color: egui::Color32) {
        let padding = rect.width() / 4.0;
        let stroke = egui::Stroke::new(Self::CROSS_WIDTH, color);

        painter.line_segment(
            [
                egui::pos2(rect.left() + padding, rect.top() + padding),
                egui::pos2(rect.right() - padding, rect.bottom() - padding),
            ],
            stroke,
        );
        painter.line_segment(
            [
                egui::pos2(rect.left() + padding, rect.bottom() - padding),
                egui::pos2(rect.right() - padding, rect.top() + padding),
            ],
            stroke,
        );
    }

    fn render_status(ui: &mut egui::Ui, text: &str, color: egui::Color32) {
        ui.add_space(8.0);
        ui.label(egui::RichText::new(text).color(color).size(18.0));
    }
}

fn cell_rect(origin: egui::Pos2, cell_size: f32, cell: Position) -> egui::Rect {
    egui::Rect::from_min_size(
        egui::pos2(
            origin.x + cell.col as f32 * cell_size,
            origin.y + cell.row as f32 * cell_size,
        ),
        egui::vec2(cell_size, cell_size),
    )
}

fn cell_at(origin: egui::Pos2, cell_size: f32, pointer: egui::Pos2) -> Option<Position> {
    let x = pointer.x - origin.x;
    let y = pointer.y - origin.y;
    if x < 0.0 || y < 0.0 || cell_size <= 0.0 {
        return None;
    }
    let cell = Position::new((y / cell_size) as usize, (x / cell_size) as usize);
    cell.is_on_board().then_some(cell)
}
