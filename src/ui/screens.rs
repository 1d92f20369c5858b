//! Full-screen cards for the waiting, paused and ended phases

use egui::{Align2, Color32, CornerRadius, RichText, Vec2};

use super::theme::GameColors;
use crate::game::{BinCategory, GamePhase, Session};

/// Final score that earns the trophy on the end screen
pub const TROPHY_SCORE: u32 = 100;

/// Button pressed on a phase screen
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ScreenAction {
    pub start: bool,
    pub resume: bool,
    pub reset: bool,
    pub play_again: bool,
}

/// Render the card for the current phase, if it has one
pub fn render_phase_screen(ctx: &egui::Context, session: &Session, colors: &GameColors) -> ScreenAction {
    let mut action = ScreenAction::default();

    match session.phase {
        GamePhase::Playing => {}
        GamePhase::Waiting => overlay(ctx, "waiting", colors, |ui| {
            ui.label(RichText::new("♻ EcoSort").size(44.0).strong().color(colors.correct));
            ui.add_space(8.0);
            ui.label(RichText::new("Sort the waste into the right bins before time runs out!").size(16.0).color(colors.card_text));
            ui.add_space(14.0);
            for category in BinCategory::ALL {
                let palette = colors.bin(category);
                ui.label(
                    RichText::new(format!("{}: {}", category.label(), category.description()))
                        .size(14.0)
                        .color(palette.border),
                );
            }
            ui.add_space(20.0);
            if big_button(ui, "Start Game", colors.correct) {
                action.start = true;
            }
            ui.add_space(6.0);
            ui.label(RichText::new("Press Enter to start").size(12.0).color(colors.muted_text));
        }),
        GamePhase::Paused => overlay(ctx, "paused", colors, |ui| {
            ui.label(RichText::new("⏸ Paused").size(40.0).strong().color(colors.items));
            ui.add_space(8.0);
            ui.label(RichText::new(format!("Score {}  ·  Level {}", session.score, session.level)).size(16.0).color(colors.card_text));
            ui.add_space(20.0);
            if big_button(ui, "Continue", colors.correct) {
                action.resume = true;
            }
            ui.add_space(8.0);
            if big_button(ui, "New Game", colors.muted_text) {
                action.reset = true;
            }
        }),
        GamePhase::Ended => overlay(ctx, "ended", colors, |ui| {
            ui.label(RichText::new("⏰ Time's Up!").size(40.0).strong().color(colors.wrong));
            ui.add_space(12.0);
            ui.label(RichText::new(format!("Final Score: {}", session.score)).size(26.0).strong().color(colors.score));
            ui.label(RichText::new(format!("Level Reached: {}", session.level)).size(18.0).color(colors.level));
            if session.score >= TROPHY_SCORE {
                ui.add_space(8.0);
                ui.label(RichText::new("🏆 Eco Champion!").size(22.0).color(colors.hover));
            }
            ui.add_space(20.0);
            if big_button(ui, "Play Again", colors.correct) {
                action.play_again = true;
            }
        }),
    }

    action
}

fn overlay(ctx: &egui::Context, id: &str, colors: &GameColors, contents: impl FnOnce(&mut egui::Ui)) {
    egui::Area::new(egui::Id::new(("phase_backdrop", id)))
        .fixed_pos(egui::pos2(0.0, 0.0))
        .order(egui::Order::Foreground)
        .show(ctx, |ui| {
            let screen_rect = ctx.content_rect();
            ui.painter()
                .rect_filled(screen_rect, CornerRadius::ZERO, Color32::from_black_alpha(160));
            ui.allocate_rect(screen_rect, egui::Sense::click());
        });

    egui::Window::new(format!("phase_window_{id}"))
        .title_bar(false)
        .resizable(false)
        .collapsible(false)
        .order(egui::Order::Tooltip)
        .anchor(Align2::CENTER_CENTER, Vec2::ZERO)
        .frame(
            egui::Frame::window(&ctx.style())
                .fill(colors.card)
                .corner_radius(CornerRadius::same(20))
                .inner_margin(egui::Margin::same(28)),
        )
        .show(ctx, |ui| {
            ui.set_min_width(360.0);
            ui.vertical_centered(contents);
        });
}

fn big_button(ui: &mut egui::Ui, text: &str, color: Color32) -> bool {
    let button = egui::Button::new(RichText::new(text).size(20.0).color(Color32::WHITE))
        .fill(color)
        .corner_radius(CornerRadius::same(12))
        .min_size(Vec2::new(200.0, 48.0));
    ui.add(button).clicked()
}
