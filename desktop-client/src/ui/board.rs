use common::games::tictactoe::{BOARD_SIZE, GameStatus, Mark, Position, TicTacToeGameState, WinningLine};
use eframe::egui;

pub struct BoardView {
    last_hover: Option<Position>,
}

impl BoardView {
    const MIN_CELL_SIZE: f32 = 60.0;
    const MAX_CELL_SIZE: f32 = 140.0;
    const LINE_WIDTH: f32 = 2.0;

    pub fn new() -> Self {
        Self { last_hover: None }
    }

    fn calculate_cell_size(available_width: f32, available_height: f32) -> f32 {
        let cell_size = available_width.min(available_height) / BOARD_SIZE as f32;
        cell_size.clamp(Self::MIN_CELL_SIZE, Self::MAX_CELL_SIZE)
    }

    fn cell_rect(board_rect: egui::Rect, cell_size: f32, pos: Position) -> egui::Rect {
        egui::Rect::from_min_size(
            egui::pos2(
                board_rect.left() + pos.col as f32 * cell_size,
                board_rect.top() + pos.row as f32 * cell_size,
            ),
            egui::vec2(cell_size, cell_size),
        )
    }

    /// Paints the board and returns the cell the player clicked, if any.
    pub fn show(
        &mut self,
        ui: &mut egui::Ui,
        state: &TicTacToeGameState,
        accepts_input: bool,
    ) -> Option<Position> {
        let cell_size = Self::calculate_cell_size(ui.available_width(), ui.available_height() - 120.0);
        let board_size = cell_size * BOARD_SIZE as f32;

        let (rect, response) = ui.allocate_exact_size(
            egui::vec2(board_size, board_size),
            egui::Sense::click(),
        );

        let painter = ui.painter();
        painter.rect_filled(rect, 0.0, egui::Color32::from_rgb(240, 240, 240));

        for i in 0..=BOARD_SIZE {
            let offset = i as f32 * cell_size;
            painter.line_segment(
                [egui::pos2(rect.left() + offset, rect.top()), egui::pos2(rect.left() + offset, rect.bottom())],
                egui::Stroke::new(Self::LINE_WIDTH, egui::Color32::BLACK),
            );
            painter.line_segment(
                [egui::pos2(rect.left(), rect.top() + offset), egui::pos2(rect.right(), rect.top() + offset)],
                egui::Stroke::new(Self::LINE_WIDTH, egui::Color32::BLACK),
            );
        }

        for (row, cells) in state.board().rows().iter().enumerate() {
            for (col, &mark) in cells.iter().enumerate() {
                let cell_rect = Self::cell_rect(rect, cell_size, Position::new(row, col));
                match mark {
                    Mark::X => draw_x(painter, cell_rect),
                    Mark::O => draw_o(painter, cell_rect),
                    Mark::Empty => {}
                }
            }
        }

        if let Some(line) = state.winning_line() {
            draw_winning_line(painter, rect, cell_size, &line);
        }

        self.last_hover = None;
        if !accepts_input || state.status() != GameStatus::PlayerTurn {
            return None;
        }

        if let Some(hover_pos) = response.hover_pos() {
            let col = ((hover_pos.x - rect.left()) / cell_size).floor();
            let row = ((hover_pos.y - rect.top()) / cell_size).floor();
            if row >= 0.0 && col >= 0.0 {
                let pos = Position::new(row as usize, col as usize);
                if state.board().is_empty_at(pos) {
                    painter.rect_filled(
                        Self::cell_rect(rect, cell_size, pos),
                        0.0,
                        egui::Color32::from_rgba_unmultiplied(100, 150, 255, 50),
                    );
                    self.last_hover = Some(pos);
                }
            }
        }

        if response.clicked() {
            return self.last_hover;
        }
        None
    }
}

fn draw_x(painter: &egui::Painter, rect: egui::Rect) {
    let padding = rect.width() * 0.2;
    let stroke = egui::Stroke::new(6.0, egui::Color32::from_rgb(220, 50, 50));

    painter.line_segment(
        [
            egui::pos2(rect.left() + padding, rect.top() + padding),
            egui::pos2(rect.right() - padding, rect.bottom() - padding),
        ],
        stroke,
    );
    painter.line_segment(
        [
            egui::pos2(rect.right() - padding, rect.top() + padding),
            egui::pos2(rect.left() + padding, rect.bottom() - padding),
        ],
        stroke,
    );
}

fn draw_o(painter: &egui::Painter, rect: egui::Rect) {
    let padding = rect.width() * 0.2;
    let radius = (rect.width() / 2.0) - padding;
    let stroke = egui::Stroke::new(6.0, egui::Color32::from_rgb(50, 50, 220));

    painter.circle_stroke(rect.center(), radius, stroke);
}

fn draw_winning_line(painter: &egui::Painter, board_rect: egui::Rect, cell_size: f32, line: &WinningLine) {
    let start = BoardView::cell_rect(board_rect, cell_size, line.start).center();
    let end = BoardView::cell_rect(board_rect, cell_size, line.end).center();
    let color = match line.mark {
        Mark::X => egui::Color32::from_rgb(40, 160, 40),
        _ => egui::Color32::from_rgb(200, 120, 0),
    };
    painter.line_segment([start, end], egui::Stroke::new(8.0, color));
}
