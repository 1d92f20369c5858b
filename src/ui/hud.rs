use egui::{Color32, CornerRadius, Rect, Stroke, StrokeKind, Vec2};

use super::theme::GameColors;
use crate::game::Session;

/// Seconds below which the timer chip turns to its warning color
const LOW_TIME_SECS: u32 = 30;

/// Format a countdown as `m:ss`
pub fn format_clock(seconds: u32) -> String {
    format!("{}:{:02}", seconds / 60, seconds % 60)
}

/// Stats bar showing score, time, items remaining and level
pub struct Hud;

impl Hud {
    pub fn new() -> Self {
        Hud
    }

    /// Render the stats row plus a time bar relative to `initial_time_secs`
    pub fn render(&self, ui: &mut egui::Ui, session: &Session, initial_time_secs: u32, colors: &GameColors) {
        ui.horizontal(|ui| {
            self.render_chip(ui, "Score", session.score.to_string(), colors.score);

            let timer_color = if session.time_left <= LOW_TIME_SECS {
                colors.timer_low
            } else {
                colors.timer
            };
            self.render_chip(ui, "Time", format_clock(session.time_left), timer_color);
            self.render_chip(ui, "Items", session.items_remaining().to_string(), colors.items);
            self.render_chip(ui, "Level", session.level.to_string(), colors.level);
        });

        ui.add_space(6.0);

        // Bonus time can push time_left past the starting value
        let max = initial_time_secs.max(session.time_left).max(1);
        self.render_time_bar(ui, session.time_left as f32 / max as f32, timer_bar_color(session.time_left, colors));
    }

    fn render_chip(&self, ui: &mut egui::Ui, label: &str, value: String, color: Color32) {
        egui::Frame::new()
            .fill(color.gamma_multiply(0.12))
            .stroke(Stroke::new(2.0, color.gamma_multiply(0.5)))
            .corner_radius(CornerRadius::same(10))
            .inner_margin(egui::Margin::symmetric(14, 6))
            .show(ui, |ui| {
                ui.vertical(|ui| {
                    ui.label(egui::RichText::new(label).size(13.0).color(color));
                    ui.label(egui::RichText::new(value).size(22.0).strong().color(color));
                });
            });
    }

    fn render_time_bar(&self, ui: &mut egui::Ui, percentage: f32, fill_color: Color32) {
        let percentage = percentage.clamp(0.0, 1.0);
        let bar_width = ui.available_width().min(480.0);
        let bar_height = 10.0;

        let (response, painter) = ui.allocate_painter(Vec2::new(bar_width, bar_height), egui::Sense::hover());
        let rect = response.rect;

        // Background
        painter.rect_filled(rect, CornerRadius::same(4), Color32::from_black_alpha(40));

        // Fill
        let fill_rect = Rect::from_min_size(rect.min, Vec2::new(bar_width * percentage, bar_height));
        painter.rect_filled(fill_rect, CornerRadius::same(4), fill_color);

        // Border
        painter.rect_stroke(
            rect,
            CornerRadius::same(4),
            Stroke::new(1.0, Color32::from_black_alpha(90)),
            StrokeKind::Inside,
        );
    }
}

fn timer_bar_color(time_left: u32, colors: &GameColors) -> Color32 {
    if time_left <= LOW_TIME_SECS {
        colors.timer_low
    } else {
        colors.correct
    }
}

impl Default for Hud {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_clock() {
        assert_eq!(format_clock(180), "3:00");
        assert_eq!(format_clock(75), "1:15");
        assert_eq!(format_clock(9), "0:09");
        assert_eq!(format_clock(0), "0:00");
        assert_eq!(format_clock(3725), "62:05");
    }
}
