//! Play field with draggable waste items

use egui::{Align2, Color32, CornerRadius, FontId, Pos2, Rect, Sense, Stroke, StrokeKind, Vec2};

use super::theme::GameColors;
use crate::game::{GameSnapshot, ItemId, PlayArea, WasteItem};

/// Size of an item card in play-area units
const ITEM_SIZE: Vec2 = Vec2::new(88.0, 64.0);
const GROUND_HEIGHT: f32 = 14.0;

/// Draws the playground and reports which item the pointer pressed on
pub struct Playfield;

impl Playfield {
    pub fn new() -> Self {
        Playfield
    }

    /// Render items scaled into the available width.
    /// Returns the item pressed this frame, if any.
    pub fn render(
        &self,
        ui: &mut egui::Ui,
        snapshot: &GameSnapshot,
        area: &PlayArea,
        colors: &GameColors,
    ) -> Option<ItemId> {
        let width = ui.available_width().min(area.width);
        let scale = width / area.width;
        let (field, _) = ui.allocate_exact_size(Vec2::new(width, area.height * scale), Sense::hover());

        let painter = ui.painter_at(field);
        painter.rect_filled(field, CornerRadius::same(16), colors.playground);
        let ground = Rect::from_min_max(Pos2::new(field.left(), field.bottom() - GROUND_HEIGHT), field.max);
        painter.rect_filled(ground, CornerRadius::same(8), colors.ground);
        painter.rect_stroke(
            field,
            CornerRadius::same(16),
            Stroke::new(4.0, colors.playground_border),
            StrokeKind::Inside,
        );

        let dragged = snapshot.drag.map(|d| d.item);
        let mut pressed = None;

        for item in &snapshot.session.items {
            let rect = item_rect(field, item, scale);
            let response = ui.interact(field.intersect(rect), ui.id().with(("waste_item", item.id.0)), Sense::click_and_drag());
            if response.is_pointer_button_down_on() && dragged.is_none() && pressed.is_none() {
                pressed = Some(item.id);
            }

            let is_dragging = dragged == Some(item.id);
            let hovered = response.hovered() && dragged.is_none();
            paint_item_card(&painter, rect, item, scale, is_dragging, hovered, colors);
        }

        if snapshot.session.awaiting_batch {
            painter.text(
                field.center(),
                Align2::CENTER_CENTER,
                format!("Level {}!", snapshot.session.level),
                FontId::proportional(40.0 * scale.max(0.5)),
                colors.card_text,
            );
        } else if !snapshot.session.items.is_empty() {
            let hint_pos = Pos2::new(field.center().x, field.top() + 22.0 * scale);
            painter.text(
                hint_pos,
                Align2::CENTER_CENTER,
                "Drag waste items to the correct bins below!",
                FontId::proportional(14.0),
                colors.muted_text,
            );
        }

        pressed
    }

    /// Item card that follows the pointer while dragging, drawn above everything
    pub fn render_drag_ghost(&self, ctx: &egui::Context, snapshot: &GameSnapshot, colors: &GameColors) {
        let (Some(item), Some(pointer)) = (snapshot.dragged_item(), snapshot.drag.and_then(|d| d.pointer)) else {
            return;
        };

        let painter = ctx.layer_painter(egui::LayerId::new(egui::Order::Tooltip, egui::Id::new("drag_ghost")));
        let size = ITEM_SIZE * 1.1;
        let rect = Rect::from_center_size(Pos2::new(pointer.x, pointer.y), size);
        paint_item_card(&painter, rect, item, 1.1, true, false, colors);
    }
}

impl Default for Playfield {
    fn default() -> Self {
        Self::new()
    }
}

/// Card rect for `item`, shifted left/up where needed so it stays inside `field`
fn item_rect(field: Rect, item: &WasteItem, scale: f32) -> Rect {
    let size = ITEM_SIZE * scale;
    let min = field.min + Vec2::new(item.position.x, item.position.y) * scale;
    let min = Pos2::new(
        min.x.min(field.max.x - size.x).max(field.min.x),
        min.y.min(field.max.y - size.y).max(field.min.y),
    );
    Rect::from_min_size(min, size)
}

fn paint_item_card(
    painter: &egui::Painter,
    rect: Rect,
    item: &WasteItem,
    scale: f32,
    is_dragging: bool,
    hovered: bool,
    colors: &GameColors,
) {
    let (fill, outline) = if is_dragging {
        (colors.drag_fill, colors.drag_outline)
    } else if hovered {
        (colors.card, colors.hover)
    } else {
        (colors.card, Color32::from_gray(220))
    };

    // Drop shadow
    painter.rect_filled(
        rect.translate(Vec2::splat(3.0 * scale)),
        CornerRadius::same(12),
        Color32::from_black_alpha(40),
    );
    painter.rect_filled(rect, CornerRadius::same(12), fill);
    painter.rect_stroke(rect, CornerRadius::same(12), Stroke::new(2.0, outline), StrokeKind::Inside);

    painter.text(
        rect.center_top() + Vec2::new(0.0, rect.height() * 0.38),
        Align2::CENTER_CENTER,
        item.glyph,
        FontId::proportional(26.0 * scale),
        Color32::BLACK,
    );
    painter.text(
        rect.center_bottom() - Vec2::new(0.0, rect.height() * 0.18),
        Align2::CENTER_CENTER,
        item.name,
        FontId::proportional(11.0 * scale.max(0.8)),
        colors.muted_text,
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::{BinCategory, ItemId};

    fn waste_at(x: f32, y: f32) -> WasteItem {
        WasteItem {
            id: ItemId(1),
            name: "Bread",
            category: BinCategory::Wet,
            glyph: "🍞",
            position: glam::Vec2::new(x, y),
        }
    }

    #[test]
    fn test_item_rect_scales_from_origin() {
        let field = Rect::from_min_size(Pos2::new(10.0, 20.0), Vec2::new(400.0, 200.0));
        let rect = item_rect(field, &waste_at(100.0, 50.0), 0.5);
        assert_eq!(rect.min, Pos2::new(60.0, 45.0));
        assert_eq!(rect.size(), ITEM_SIZE * 0.5);
    }

    #[test]
    fn test_item_rect_stays_inside_field() {
        let area = PlayArea::default();
        let field = Rect::from_min_size(Pos2::new(10.0, 20.0), Vec2::new(area.width, area.height));
        let corner = area.max_spawn() - glam::Vec2::splat(0.01);

        let rect = item_rect(field, &waste_at(corner.x, corner.y), 1.0);
        assert!(field.contains_rect(rect), "{:?} outside {:?}", rect, field);
        assert_eq!(rect.size(), ITEM_SIZE);
        assert_eq!(rect.max, field.max);
    }
}
