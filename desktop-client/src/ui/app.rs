use std::time::{Duration, Instant};

use common::games::SessionRng;
use common::games::tictactoe::{BotType, GameStatus, Outcome, Position, TicTacToeGameState};
use common::log;
use eframe::egui;

use crate::config::{ClientConfigManager, Config};
use super::board::BoardView;

pub struct TicTacToeApp {
    game: TicTacToeGameState,
    rng: SessionRng,
    config: Config,
    config_manager: ClientConfigManager,
    ai_move_due: Option<Instant>,
    show_intro: bool,
    hide_intro_next_time: bool,
    board_view: BoardView,
}

impl TicTacToeApp {
    pub fn new(config: Config, config_manager: ClientConfigManager, rng: SessionRng) -> Self {
        Self {
            game: TicTacToeGameState::new(),
            rng,
            show_intro: config.show_intro,
            hide_intro_next_time: false,
            config,
            config_manager,
            ai_move_due: None,
            board_view: BoardView::new(),
        }
    }

    fn bot_type(&self) -> BotType {
        self.config.ai.bot_type
    }

    fn thinking_delay(&self) -> Duration {
        Duration::from_millis(self.config.ai.thinking_delay_ms)
    }

    fn handle_cell_click(&mut self, pos: Position, now: Instant) {
        match self.game.place_player_mark(pos) {
            Ok(()) => {
                log!("Player placed X at {}", pos);
                self.schedule_next(now);
            }
            Err(e) => log!("Ignored click at {}: {}", pos, e),
        }
    }

    fn schedule_next(&mut self, now: Instant) {
        self.ai_move_due = match self.game.status() {
            GameStatus::AiTurn => Some(now + self.thinking_delay()),
            GameStatus::Terminal => {
                log!("Game over: {:?}", self.game.outcome());
                None
            }
            GameStatus::PlayerTurn => None,
        };
    }

    /// Plays the AI move once its delay has passed. Returns how long to wait otherwise.
    fn poll_ai(&mut self, now: Instant) -> Option<Duration> {
        let due = self.ai_move_due?;
        if now < due {
            return Some(due - now);
        }

        self.ai_move_due = None;
        match self.game.play_ai_turn(self.bot_type(), &mut self.rng) {
            Ok(pos) => {
                log!("AI placed O at {}", pos);
                self.schedule_next(now);
            }
            Err(e) => log!("AI turn failed: {}", e),
        }
        None
    }

    fn play_again(&mut self) {
        self.game.reset();
        self.ai_move_due = None;
        log!("New game started");
    }

    fn dismiss_intro(&mut self) {
        self.show_intro = false;
        if !self.hide_intro_next_time {
            return;
        }

        let mut config = self.config.clone();
        config.show_intro = false;
        match self.config_manager.set_config(&config) {
            Ok(()) => self.config = config,
            Err(e) => log!("Failed to save config: {}", e),
        }
    }

    fn status_text(&self) -> &'static str {
        match (self.game.status(), self.game.outcome()) {
            (GameStatus::PlayerTurn, _) => "Your turn (X)",
            (GameStatus::AiTurn, _) => "AI is thinking...",
            (GameStatus::Terminal, Outcome::XWins) => "You Win!",
            (GameStatus::Terminal, Outcome::OWins) => "You can't defeat AI. Try harder!",
            (GameStatus::Terminal, _) => "It's a Draw!",
        }
    }

    fn render_intro(&mut self, ctx: &egui::Context) {
        egui::Window::new("Tic-Tac-Toe")
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, egui::vec2(0.0, 0.0))
            .show(ctx, |ui| {
                ui.vertical_centered(|ui| {
                    ui.heading("You wanna try beating AI?");
                    ui.label("Go ahead and play!");
                    ui.add_space(10.0);
                    ui.checkbox(&mut self.hide_intro_next_time, "Don't show this again");
                    ui.add_space(10.0);
                    if ui.button("Let's Go!").clicked() {
                        self.dismiss_intro();
                    }
                });
            });
    }

    fn render_status(&mut self, ui: &mut egui::Ui, ctx: &egui::Context) {
        let text = self.status_text();
        match self.game.outcome() {
            Outcome::XWins => ui.heading(egui::RichText::new(text).color(egui::Color32::GREEN)),
            Outcome::OWins => ui.heading(egui::RichText::new(text).color(egui::Color32::RED)),
            _ => ui.heading(text),
        };

        if self.game.status() != GameStatus::Terminal {
            return;
        }

        ui.add_space(10.0);
        if ui.button("Play Again (Enter)").clicked()
            || ctx.input(|i| i.key_pressed(egui::Key::Enter))
        {
            self.play_again();
        }
    }
}

impl eframe::App for TicTacToeApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if let Some(wait) = self.poll_ai(Instant::now()) {
            ctx.request_repaint_after(wait);
        }

        if self.show_intro {
            self.render_intro(ctx);
        }

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                ui.heading("Tic-Tac-Toe");
                ui.separator();
                ui.add_space(10.0);

                let accepts_input = !self.show_intro;
                if let Some(pos) = self.board_view.show(ui, &self.game, accepts_input) {
                    self.handle_cell_click(pos, Instant::now());
                }

                ui.add_space(20.0);
                self.render_status(ui, ctx);
            });
        });

        if self.ai_move_due.is_some() {
            ctx.request_repaint();
        }
    }
}
