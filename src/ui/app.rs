//! Main application for the Isolation GUI

use eframe::egui;
use egui::{CentralPanel, Context, CornerRadius, Frame, RichText, SidePanel, TopBottomPanel, Vec2};

use super::board_view::{BoardOverlay, BoardView};
use super::session::{GameMode, GameResult, Session};
use super::theme::*;
use crate::config::EngineConfig;
use crate::game::Outcome;
use crate::{GameState, Player};

/// Main Isolation application
pub struct IsolationApp {
    session: Session,
    board_view: BoardView,
    show_debug: bool,
}

impl IsolationApp {
    pub fn new(_cc: &eframe::CreationContext<'_>, config: EngineConfig) -> Self {
        Self {
            session: Session::new(GameMode::default(), config),
            board_view: BoardView::default(),
            show_debug: true,
        }
    }

    fn new_game(&mut self, mode: GameMode) {
        self.session = Session::new(mode, self.session.config.clone());
    }

    /// Render the top menu bar
    fn render_menu_bar(&mut self, ctx: &Context) {
        TopBottomPanel::top("menu_bar").show(ctx, |ui| {
            egui::menu::bar(ui, |ui| {
                ui.menu_button("Game", |ui| {
                    if ui.button("New Game (PvE - Player 1)").clicked() {
                        self.new_game(GameMode::PvE { human: Player::One });
                        ui.close_menu();
                    }
                    if ui.button("New Game (PvE - Player 2)").clicked() {
                        self.new_game(GameMode::PvE { human: Player::Two });
                        ui.close_menu();
                    }
                    if ui.button("New Game (PvP)").clicked() {
                        self.new_game(GameMode::PvP);
                        ui.close_menu();
                    }
                    ui.separator();
                    if ui.button("Undo").clicked() {
                        self.session.undo();
                        ui.close_menu();
                    }
                });

                ui.menu_button("View", |ui| {
                    ui.checkbox(&mut self.show_debug, "Debug Panel (D)");
                });

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    let mode_text = match self.session.mode {
                        GameMode::PvE { human } => format!("PvE - You: Player {human}"),
                        GameMode::PvP => "PvP - Hotseat".to_string(),
                    };
                    ui.label(mode_text);
                });
            });
        });
    }

    /// Render the side panel with game info and debug
    fn render_side_panel(&mut self, ctx: &Context) {
        SidePanel::right("info_panel")
            .min_width(240.0)
            .max_width(280.0)
            .frame(Frame::new().fill(egui::Color32::from_rgb(25, 27, 31)))
            .show(ctx, |ui| {
                ui.add_space(12.0);
                self.render_title_card(ui);
                ui.add_space(12.0);
                self.render_turn_card(ui);
                ui.add_space(10.0);
                self.render_timer_card(ui);
                ui.add_space(10.0);
                self.render_actions_card(ui);

                if self.show_debug {
                    ui.add_space(10.0);
                    self.render_debug_card(ui);
                }

                if let Some(result) = self.session.game_over {
                    ui.add_space(10.0);
                    self.render_game_over_card(ui, result);
                }

                if let Some(msg) = &self.session.message {
                    ui.add_space(10.0);
                    Self::render_message_card(ui, msg);
                }
            });
    }

    fn card_frame() -> Frame {
        Frame::new()
            .fill(egui::Color32::from_rgb(35, 38, 43))
            .corner_radius(CornerRadius::same(8))
            .inner_margin(12.0)
    }

    fn render_title_card(&self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            ui.add_space(8.0);
            ui.label(RichText::new("ISOLATION").size(22.0).strong().color(TEXT_PRIMARY));
        });
        ui.horizontal(|ui| {
            ui.add_space(8.0);
            let board = &self.session.board;
            let text = format!("{}x{} knight's board", board.width(), board.height());
            ui.label(RichText::new(text).size(11.0).color(TEXT_MUTED));
        });
    }

    fn render_turn_card(&self, ui: &mut egui::Ui) {
        Self::card_frame().show(ui, |ui| {
            let turn = self.session.current_turn();
            let (fill, _) = player_colors(turn);

            ui.horizontal(|ui| {
                let (rect, _) = ui.allocate_exact_size(Vec2::new(48.0, 48.0), egui::Sense::hover());
                ui.painter().circle_filled(rect.center(), 22.0, fill);
                ui.painter().text(
                    rect.center(),
                    egui::Align2::CENTER_CENTER,
                    turn,
                    egui::FontId::proportional(24.0),
                    TEXT_PRIMARY,
                );

                ui.add_space(12.0);

                ui.vertical(|ui| {
                    ui.add_space(4.0);
                    ui.label(RichText::new(format!("PLAYER {turn}")).size(18.0).strong().color(TEXT_PRIMARY));

                    let status = if self.session.is_ai_thinking() {
                        ("Engine thinking...", TIMER_WARNING)
                    } else if self.session.game_over.is_some() {
                        ("Game Over", WIN_HIGHLIGHT)
                    } else {
                        ("Your turn", TIMER_NORMAL)
                    };
                    ui.label(RichText::new(status.0).size(12.0).color(status.1));
                });
            });
        });
    }

    fn render_timer_card(&self, ui: &mut egui::Ui) {
        Self::card_frame().show(ui, |ui| {
            ui.label(RichText::new("TIMER").size(10.0).color(TEXT_MUTED));
            ui.add_space(6.0);

            let limit = self.session.config.search.time_limit().as_secs_f32();
            if let Some(elapsed) = self.session.ai_thinking_elapsed() {
                let secs = elapsed.as_secs_f32();
                let color = if secs < limit * 0.5 {
                    TIMER_NORMAL
                } else if secs < limit {
                    TIMER_WARNING
                } else {
                    TIMER_CRITICAL
                };
                ui.label(RichText::new(format!("{secs:.2}s")).size(28.0).strong().color(color));
            } else {
                let elapsed = self.session.move_timer.elapsed();
                ui.label(RichText::new(format!("{:.1}s", elapsed.as_secs_f32())).size(24.0).color(TEXT_PRIMARY));
            }

            if let Some(ai_time) = self.session.move_timer.ai_thinking_time {
                ui.add_space(4.0);
                ui.label(
                    RichText::new(format!("Last engine move: {:.3}s (limit {limit:.3}s)", ai_time.as_secs_f32()))
                        .size(10.0)
                        .color(TEXT_SECONDARY),
                );
            }
        });
    }

    fn render_actions_card(&mut self, ui: &mut egui::Ui) {
        Self::card_frame().show(ui, |ui| {
            ui.label(RichText::new("ACTIONS").size(10.0).color(TEXT_MUTED));
            ui.add_space(8.0);

            ui.horizontal(|ui| {
                let btn_frame = Frame::new()
                    .fill(egui::Color32::from_rgb(50, 53, 58))
                    .corner_radius(CornerRadius::same(6))
                    .inner_margin(8.0);

                btn_frame.show(ui, |ui| {
                    let label = egui::Label::new(RichText::new("Undo").size(12.0).color(TEXT_PRIMARY));
                    if ui.add(label.sense(egui::Sense::click())).clicked() {
                        self.session.undo();
                    }
                });

                ui.add_space(4.0);

                btn_frame.show(ui, |ui| {
                    let label = egui::Label::new(RichText::new("Hint").size(12.0).color(TEXT_PRIMARY));
                    if ui.add(label.sense(egui::Sense::click())).clicked() {
                        self.session.request_suggestion();
                    }
                });
            });

            ui.add_space(8.0);
            let moves = self.session.board.legal_moves().len();
            ui.label(
                RichText::new(format!("Move #{}  ({moves} legal)", self.session.move_history.len()))
                    .size(11.0)
                    .color(TEXT_SECONDARY),
            );
        });
    }

    fn render_debug_card(&self, ui: &mut egui::Ui) {
        Self::card_frame().show(ui, |ui| {
            ui.label(RichText::new("ENGINE DEBUG").size(10.0).color(TEXT_MUTED));
            ui.add_space(6.0);

            let search = &self.session.config.search;
            ui.label(
                RichText::new(format!(
                    "{:?} / {} / threshold {}ms",
                    search.algorithm, search.heuristic, search.threshold_ms
                ))
                .size(10.0)
                .color(TEXT_SECONDARY),
            );

            let Some(result) = &self.session.last_ai_result else {
                ui.label(RichText::new("Waiting for engine...").size(10.0).color(TEXT_MUTED));
                return;
            };
            let score = result.score.map_or("-".to_string(), |s| format!("{s:.1}"));
            ui.label(RichText::new(format!("Depth {}  Score {score}", result.depth)).size(11.0).strong().color(TIMER_NORMAL));
            ui.label(
                RichText::new(format!("{}ms, {} nodes", result.time_ms, result.nodes))
                    .size(10.0)
                    .color(TEXT_MUTED),
            );
            ui.add_space(4.0);
            ui.label(RichText::new(format!("-> {}", result.best_move)).size(12.0).strong().color(WIN_HIGHLIGHT));
        });
    }

    fn render_game_over_card(&mut self, ui: &mut egui::Ui, result: GameResult) {
        let (fill, _) = player_colors(result.winner);
        let how = match result.outcome {
            Outcome::Isolated => "isolation",
            Outcome::Timeout => "engine timeout",
            Outcome::Forfeit => "engine forfeit",
        };

        Frame::new()
            .fill(egui::Color32::from_rgb(45, 80, 55))
            .corner_radius(CornerRadius::same(8))
            .inner_margin(16.0)
            .show(ui, |ui| {
                ui.vertical_centered(|ui| {
                    ui.label(RichText::new("GAME OVER").size(12.0).color(egui::Color32::from_rgb(180, 255, 180)));
                    ui.add_space(8.0);
                    ui.label(
                        RichText::new(format!("PLAYER {} WINS", result.winner))
                            .size(18.0)
                            .strong()
                            .color(fill),
                    );
                    ui.label(RichText::new(format!("by {how}")).size(11.0).color(TEXT_SECONDARY));
                    ui.add_space(12.0);

                    if ui.button(RichText::new("New Game").size(14.0).strong()).clicked() {
                        self.session.reset();
                    }
                });
            });
    }

    fn render_message_card(ui: &mut egui::Ui, msg: &str) {
        Frame::new()
            .fill(egui::Color32::from_rgb(80, 60, 30))
            .corner_radius(CornerRadius::same(8))
            .inner_margin(10.0)
            .show(ui, |ui| {
                ui.label(RichText::new(msg).size(11.0).color(TEXT_PRIMARY));
            });
    }

    fn render_board(&mut self, ctx: &Context) {
        CentralPanel::default().show(ctx, |ui| {
            let accept_input =
                self.session.game_over.is_none() && self.session.is_human_turn() && !self.session.is_ai_thinking();
            let overlay = BoardOverlay {
                last_move: self.session.last_move(),
                suggested_move: self.session.suggested_move,
                show_legal: accept_input,
                accept_input,
            };

            if let Some(mv) = self.board_view.show(ui, &self.session.board, &overlay) {
                if let Err(msg) = self.session.try_move(mv) {
                    self.session.message = Some(msg);
                }
            }
        });
    }

    fn handle_input(&mut self, ctx: &Context) {
        ctx.input(|i| {
            if i.key_pressed(egui::Key::D) {
                self.show_debug = !self.show_debug;
            }
            if i.key_pressed(egui::Key::H) {
                self.session.request_suggestion();
            }
            if i.key_pressed(egui::Key::U) {
                self.session.undo();
            }
            if i.key_pressed(egui::Key::N) {
                self.session.reset();
            }
        });
    }
}

impl eframe::App for IsolationApp {
    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        self.handle_input(ctx);
        self.session.check_ai_result();

        if self.session.is_ai_turn() && !self.session.is_ai_thinking() && self.session.game_over.is_none() {
            self.session.start_ai_thinking();
        }

        self.render_menu_bar(ctx);
        self.render_side_panel(ctx);
        self.render_board(ctx);

        if self.session.is_ai_thinking() {
            ctx.request_repaint();
        } else if self.session.game_over.is_none() {
            // Keep the move clock ticking
            ctx.request_repaint_after(std::time::Duration::from_millis(100));
        }
    }
}
