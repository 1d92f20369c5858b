//! Modal shown after a correct placement, explaining the bin category

use egui::{Align2, Color32, CornerRadius, RichText, Vec2};

use super::theme::GameColors;
use crate::game::BinCategory;

/// Draws the tip modal. Returns true when the player dismissed it.
pub fn render_tip_dialog(ctx: &egui::Context, category: BinCategory, colors: &GameColors) -> bool {
    let mut dismissed = false;
    let tip = category.tip();
    let palette = colors.bin(category);

    // Backdrop swallows clicks on the play field while the tip is open
    egui::Area::new("tip_backdrop".into())
        .fixed_pos(egui::pos2(0.0, 0.0))
        .order(egui::Order::Foreground)
        .show(ctx, |ui| {
            let screen_rect = ctx.content_rect();
            ui.painter()
                .rect_filled(screen_rect, CornerRadius::ZERO, Color32::from_black_alpha(140));
            ui.allocate_rect(screen_rect, egui::Sense::click());
        });

    egui::Window::new("tip_window")
        .title_bar(false)
        .resizable(false)
        .collapsible(false)
        .order(egui::Order::Tooltip)
        .anchor(Align2::CENTER_CENTER, Vec2::ZERO)
        .frame(
            egui::Frame::window(&ctx.style())
                .fill(colors.card)
                .stroke(egui::Stroke::new(4.0, palette.fill))
                .corner_radius(CornerRadius::same(18))
                .inner_margin(egui::Margin::same(24)),
        )
        .show(ctx, |ui| {
            ui.set_max_width(380.0);
            ui.vertical_centered(|ui| {
                ui.label(RichText::new("💡").size(40.0));
                ui.add_space(6.0);
                ui.label(RichText::new(tip.title).size(24.0).strong().color(palette.border));
                ui.add_space(10.0);
                ui.label(RichText::new(tip.body).size(15.0).color(colors.card_text));
                ui.add_space(18.0);

                let button = egui::Button::new(RichText::new("Got it! Let's continue!").size(17.0).color(Color32::WHITE))
                    .fill(palette.fill)
                    .corner_radius(CornerRadius::same(12))
                    .min_size(Vec2::new(220.0, 44.0));
                if ui.add(button).clicked() {
                    dismissed = true;
                }
            });
        });

    dismissed
}
