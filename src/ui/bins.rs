//! The four sorting bins

use egui::{Align2, Color32, CornerRadius, FontId, Pos2, Rect, Sense, Stroke, StrokeKind, Vec2};

use super::theme::GameColors;
use crate::game::{BinCategory, GameSnapshot};

const BIN_SIZE: Vec2 = Vec2::new(150.0, 170.0);
const LID_HEIGHT: f32 = 26.0;

/// Renders the bins and reports their screen rectangles for hit-testing
pub struct BinRow;

impl BinRow {
    pub fn new() -> Self {
        BinRow
    }

    /// Returns the rectangle each bin occupies this frame
    pub fn render(&self, ui: &mut egui::Ui, snapshot: &GameSnapshot, colors: &GameColors) -> Vec<(BinCategory, Rect)> {
        let mut rects = Vec::with_capacity(BinCategory::ALL.len());

        let spacing = 24.0;
        let total = BIN_SIZE.x * BinCategory::ALL.len() as f32 + spacing * (BinCategory::ALL.len() - 1) as f32;
        let scale = (ui.available_width() / total).min(1.0);
        let size = BIN_SIZE * scale;

        ui.horizontal(|ui| {
            ui.spacing_mut().item_spacing.x = spacing * scale;
            let leftover = (ui.available_width() - total * scale).max(0.0);
            ui.add_space(leftover / 2.0);

            for category in BinCategory::ALL {
                let (rect, _) = ui.allocate_exact_size(size, Sense::hover());
                self.paint_bin(ui.painter(), rect, category, snapshot, colors);
                rects.push((category, rect));
            }
        });

        rects
    }

    fn paint_bin(
        &self,
        painter: &egui::Painter,
        rect: Rect,
        category: BinCategory,
        snapshot: &GameSnapshot,
        colors: &GameColors,
    ) {
        let palette = colors.bin(category);
        let hovered = snapshot.is_hovered(category);
        let feedback = snapshot.feedback;

        let (outline, width) = if feedback.is_some_and(|f| f.is_correct_for(category)) {
            (colors.correct, 5.0)
        } else if feedback.is_some_and(|f| f.is_wrong_for(category)) {
            (colors.wrong, 5.0)
        } else if hovered {
            (colors.hover, 4.0)
        } else {
            (palette.border, 2.0)
        };

        // Hovered bins grow slightly
        let body = if hovered { rect.expand(4.0) } else { rect };

        let lid = Rect::from_min_max(body.min, Pos2::new(body.max.x, body.min.y + LID_HEIGHT));
        let can = Rect::from_min_max(Pos2::new(body.min.x + 8.0, lid.max.y), body.max);

        painter.rect_filled(can, CornerRadius::same(10), palette.fill);
        painter.rect_filled(lid, CornerRadius::same(8), palette.light);
        painter.rect_stroke(lid, CornerRadius::same(8), Stroke::new(2.0, palette.border), StrokeKind::Inside);
        painter.rect_stroke(can, CornerRadius::same(10), Stroke::new(width, outline), StrokeKind::Inside);

        let center_x = can.center().x;
        painter.text(
            Pos2::new(center_x, can.top() + can.height() * 0.35),
            Align2::CENTER_CENTER,
            category.label(),
            FontId::proportional(15.0),
            Color32::WHITE,
        );
        painter.text(
            Pos2::new(center_x, can.top() + can.height() * 0.62),
            Align2::CENTER_CENTER,
            category.description(),
            FontId::proportional(11.0),
            Color32::from_white_alpha(220),
        );

        if let Some(f) = feedback.filter(|f| f.bin == category) {
            let mark = if f.is_correct_for(category) { "✔" } else { "✖" };
            painter.text(
                Pos2::new(center_x, can.bottom() - 18.0),
                Align2::CENTER_CENTER,
                mark,
                FontId::proportional(22.0),
                Color32::WHITE,
            );
        }
    }
}

impl Default for BinRow {
    fn default() -> Self {
        Self::new()
    }
}
