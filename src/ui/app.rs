//! Main application for the Gomoku GUI

use std::path::PathBuf;

use eframe::egui;
use egui::{CentralPanel, Context, CornerRadius, Frame, RichText, SidePanel, TopBottomPanel, Vec2};
use tracing::{info, warn};

use crate::config::Config;
use crate::game::{GamePhase, GameState};
use crate::review::Review;
use crate::Stone;

use super::board_view::{BoardView, Overlay};
use super::theme::*;

/// Main Gomoku application
pub struct GomokuApp {
    game: GameState,
    board_view: BoardView,
    /// Active review session, if any
    review: Option<Review>,
    show_threats: bool,
    save_path: PathBuf,
    message: Option<String>,
}

impl GomokuApp {
    pub fn new(_cc: &eframe::CreationContext<'_>, game: GameState, config: &Config) -> Self {
        let mut app = Self {
            game,
            board_view: BoardView::default(),
            review: None,
            show_threats: config.show_threats,
            save_path: config.save_path.clone(),
            message: None,
        };
        app.refresh_threats();
        app
    }

    // Commands

    fn new_game(&mut self) {
        self.game.init();
        self.review = None;
        self.message = Some("New game".to_string());
        self.refresh_threats();
    }

    fn place_stone(&mut self, pos: crate::Pos) {
        if let Err(e) = self.game.make_move(pos) {
            self.message = Some(e.to_string());
            return;
        }

        if self.game.check_win(pos) {
            self.message = Some(format!("{} wins!", stone_name(self.game.current_player())));
            info!(winner = %self.game.current_player(), moves = self.game.move_count(), "game won");
            return;
        }

        self.game.switch_player();
        self.message = None;
        if self.game.was_touched() {
            self.message = Some("Your opponent pats you on the head~".to_string());
            self.game.clear_touch();
        }
        self.refresh_threats();
    }

    fn undo(&mut self) {
        match self.game.undo_last_two() {
            Ok(()) => self.message = Some("Took back two moves".to_string()),
            Err(e) => self.message = Some(e.to_string()),
        }
        self.refresh_threats();
    }

    fn save(&mut self) {
        self.message = Some(match self.game.save(&self.save_path) {
            Ok(()) => format!("Saved to {}", self.save_path.display()),
            Err(e) => {
                warn!("save failed: {}", e);
                format!("Save failed: {e}")
            }
        });
    }

    fn load(&mut self) {
        self.message = Some(match self.game.load(&self.save_path) {
            Ok(()) => {
                self.review = None;
                format!("Loaded {} moves", self.game.move_count())
            }
            Err(e) => format!("Load failed: {e}"),
        });
        self.refresh_threats();
    }

    fn touch(&mut self) {
        self.game.touch_opponent();
        self.message = Some(format!(
            "You pat {} on the head",
            stone_name(self.game.current_player().opponent())
        ));
    }

    fn toggle_threats(&mut self) {
        self.show_threats = !self.show_threats;
        self.refresh_threats();
    }

    fn start_review(&mut self) {
        self.review = Review::start(&self.game);
        self.message = Some(match &self.review {
            Some(_) => "Review mode: step 0".to_string(),
            None => "No moves to replay".to_string(),
        });
    }

    fn refresh_threats(&mut self) {
        if self.show_threats && self.game.phase() != GamePhase::Won {
            self.game.detect_threats();
        }
    }

    fn threats_visible(&self) -> bool {
        self.show_threats && self.review.is_none() && self.game.phase() != GamePhase::Won
    }

    // Rendering

    /// Render the top menu bar
    fn render_menu_bar(&mut self, ctx: &Context) {
        TopBottomPanel::top("menu_bar").show(ctx, |ui| {
            egui::menu::bar(ui, |ui| {
                ui.menu_button("Game", |ui| {
                    if ui.button("New Game (N)").clicked() {
                        self.new_game();
                        ui.close_menu();
                    }
                    ui.separator();
                    if ui.button("Undo (U)").clicked() {
                        self.undo();
                        ui.close_menu();
                    }
                    if ui.button("Save").clicked() {
                        self.save();
                        ui.close_menu();
                    }
                    if ui.button("Load").clicked() {
                        self.load();
                        ui.close_menu();
                    }
                    ui.separator();
                    if ui.button("Review (R)").clicked() {
                        self.start_review();
                        ui.close_menu();
                    }
                });

                ui.menu_button("View", |ui| {
                    let mut show = self.show_threats;
                    if ui.checkbox(&mut show, "Threats (T)").changed() {
                        self.toggle_threats();
                    }
                });

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.label(self.save_path.display().to_string());
                });
            });
        });
    }

    /// Render the side panel with game info and actions
    fn render_side_panel(&mut self, ctx: &Context) {
        SidePanel::right("info_panel")
            .min_width(240.0)
            .max_width(280.0)
            .frame(Frame::new().fill(PANEL_BG))
            .show(ctx, |ui| {
                ui.add_space(12.0);
                self.render_title_card(ui);
                ui.add_space(12.0);

                self.render_turn_card(ui);
                ui.add_space(10.0);

                if self.review.is_some() {
                    self.render_review_card(ui);
                } else {
                    self.render_actions_card(ui);
                }

                if let Some(msg) = self.message.clone() {
                    ui.add_space(10.0);
                    self.render_message_card(ui, &msg);
                }
            });
    }

    /// Helper to create a card frame
    fn card_frame() -> Frame {
        Frame::new()
            .fill(CARD_BG)
            .corner_radius(CornerRadius::same(8))
            .inner_margin(12.0)
    }

    fn render_title_card(&self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            ui.add_space(8.0);
            let logo_color = egui::Color32::from_rgb(180, 180, 185);
            ui.label(RichText::new("●○").size(20.0).color(logo_color));
            ui.add_space(4.0);
            ui.label(RichText::new("GOMOKU").size(22.0).strong().color(TEXT_PRIMARY));
        });
    }

    /// Render turn indicator card
    fn render_turn_card(&self, ui: &mut egui::Ui) {
        Self::card_frame().show(ui, |ui| {
            let current = self.game.current_player();
            let is_black = current == Stone::Black;
            let (stone_char, accent) = if is_black {
                ("●", egui::Color32::from_rgb(70, 70, 75))
            } else {
                ("○", egui::Color32::from_rgb(220, 220, 225))
            };

            ui.horizontal(|ui| {
                let stone_color = if is_black {
                    TEXT_PRIMARY
                } else {
                    egui::Color32::from_rgb(30, 30, 35)
                };

                let (rect, _) = ui.allocate_exact_size(Vec2::new(48.0, 48.0), egui::Sense::hover());
                ui.painter().circle_filled(rect.center(), 22.0, accent);
                ui.painter().text(
                    rect.center(),
                    egui::Align2::CENTER_CENTER,
                    stone_char,
                    egui::FontId::proportional(28.0),
                    stone_color,
                );

                ui.add_space(12.0);

                ui.vertical(|ui| {
                    ui.add_space(4.0);
                    let name = RichText::new(stone_name(current)).size(18.0).strong();
                    ui.label(name.color(TEXT_PRIMARY));

                    let status = match (&self.review, self.game.phase()) {
                        (Some(_), _) => ("Reviewing", STATUS_WARNING),
                        (None, GamePhase::Won) => ("Game Over", WIN_HIGHLIGHT),
                        (None, _) => ("To move", STATUS_OK),
                    };
                    ui.label(RichText::new(status.0).size(12.0).color(status.1));
                });
            });

            ui.add_space(6.0);
            ui.label(
                RichText::new(format!("Move #{}", self.game.move_count()))
                    .size(11.0)
                    .color(TEXT_SECONDARY),
            );
        });
    }

    /// A clickable label styled as a button
    fn action_button(ui: &mut egui::Ui, label: &str) -> bool {
        Frame::new()
            .fill(BUTTON_BG)
            .corner_radius(CornerRadius::same(6))
            .inner_margin(8.0)
            .show(ui, |ui| {
                let text = RichText::new(label).size(12.0).color(TEXT_PRIMARY);
                ui.add(egui::Label::new(text).sense(egui::Sense::click()))
                    .clicked()
            })
            .inner
    }

    fn render_actions_card(&mut self, ui: &mut egui::Ui) {
        Self::card_frame().show(ui, |ui| {
            ui.label(RichText::new("ACTIONS").size(10.0).color(TEXT_MUTED));
            ui.add_space(8.0);

            ui.horizontal(|ui| {
                if Self::action_button(ui, "↩ Undo") {
                    self.undo();
                }
                if Self::action_button(ui, "Save") {
                    self.save();
                }
                if Self::action_button(ui, "Load") {
                    self.load();
                }
            });
            ui.add_space(4.0);
            ui.horizontal(|ui| {
                if Self::action_button(ui, "Nudge") {
                    self.touch();
                }
                let threats_label = if self.show_threats { "Hide threats" } else { "Show threats" };
                if Self::action_button(ui, threats_label) {
                    self.toggle_threats();
                }
            });
            ui.add_space(4.0);
            ui.horizontal(|ui| {
                if Self::action_button(ui, "Review") {
                    self.start_review();
                }
                if Self::action_button(ui, "New Game") {
                    self.new_game();
                }
            });

            if self.threats_visible() {
                ui.add_space(8.0);
                let count = self.game.threat_marks().count();
                ui.label(
                    RichText::new(format!("{count} threat point(s)"))
                        .size(11.0)
                        .color(if count > 0 { STATUS_WARNING } else { TEXT_SECONDARY }),
                );
            }
        });
    }

    fn render_review_card(&mut self, ui: &mut egui::Ui) {
        Self::card_frame().show(ui, |ui| {
            ui.label(RichText::new("REVIEW").size(10.0).color(TEXT_MUTED));
            ui.add_space(8.0);

            let mut exit = false;
            if let Some(review) = self.review.as_mut() {
                ui.horizontal(|ui| {
                    if Self::action_button(ui, "◀ Prev") {
                        review.step_back();
                    }
                    if Self::action_button(ui, "Next ▶") {
                        review.step_forward();
                    }
                    if Self::action_button(ui, "Restart") {
                        review.restart();
                    }
                    if Self::action_button(ui, "Exit") {
                        exit = true;
                    }
                });

                ui.add_space(8.0);
                let step_text = match review.last_move() {
                    Some((pos, stone)) => {
                        format!("Step {}/{}: {stone} at {pos}", review.step(), review.total())
                    }
                    None => format!("Step 0/{}", review.total()),
                };
                ui.label(RichText::new(step_text).size(12.0).color(TEXT_PRIMARY));
            }

            if exit {
                self.review = None;
                self.message = Some("Review finished".to_string());
            }
        });
    }

    fn render_message_card(&self, ui: &mut egui::Ui, msg: &str) {
        Frame::new()
            .fill(egui::Color32::from_rgb(80, 60, 30))
            .corner_radius(CornerRadius::same(8))
            .inner_margin(10.0)
            .show(ui, |ui| {
                ui.label(RichText::new(msg).size(11.0).color(TEXT_PRIMARY));
            });
    }

    /// Render the main board
    fn render_board(&mut self, ctx: &Context) {
        CentralPanel::default().show(ctx, |ui| {
            ui.style_mut().visuals.panel_fill = egui::Color32::from_rgb(40, 42, 46);

            let clicked = match &self.review {
                Some(review) => {
                    let overlay = Overlay {
                        last_move: review.last_move().map(|(pos, _)| pos),
                        win_marks: None,
                        threats: None,
                        to_move: None,
                        reviewing: true,
                    };
                    self.board_view.show(ui, review.board(), &overlay)
                }
                None => {
                    let game_over = self.game.phase() == GamePhase::Won;
                    let overlay = Overlay {
                        last_move: self.game.last_move(),
                        win_marks: game_over.then(|| self.game.win_marks()),
                        threats: self.threats_visible().then(|| self.game.threat_marks()),
                        to_move: (!game_over).then(|| self.game.current_player()),
                        reviewing: false,
                    };
                    self.board_view.show(ui, self.game.board(), &overlay)
                }
            };

            if let Some(pos) = clicked {
                self.place_stone(pos);
            }
        });
    }

    /// Handle keyboard shortcuts
    fn handle_input(&mut self, ctx: &Context) {
        let (new, undo, threats, review, left, right, escape) = ctx.input(|i| {
            (
                i.key_pressed(egui::Key::N),
                i.key_pressed(egui::Key::U),
                i.key_pressed(egui::Key::T),
                i.key_pressed(egui::Key::R),
                i.key_pressed(egui::Key::ArrowLeft),
                i.key_pressed(egui::Key::ArrowRight),
                i.key_pressed(egui::Key::Escape),
            )
        });

        if let Some(session) = self.review.as_mut() {
            if left {
                session.step_back();
            }
            if right {
                session.step_forward();
            }
            if escape {
                self.review = None;
            }
            return;
        }

        if new {
            self.new_game();
        }
        if undo {
            self.undo();
        }
        if threats {
            self.toggle_threats();
        }
        if review {
            self.start_review();
        }
    }
}

fn stone_name(stone: Stone) -> &'static str {
    match stone {
        Stone::Black => "BLACK (X)",
        Stone::White => "WHITE (O)",
        Stone::Empty => "-",
    }
}

impl eframe::App for GomokuApp {
    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        self.handle_input(ctx);

        self.render_menu_bar(ctx);
        self.render_side_panel(ctx);
        self.render_board(ctx);
    }
}
