//! Drag gesture tracking and bin hit-testing

use glam::Vec2;

use super::category::BinCategory;
use super::item::ItemId;

/// Axis-aligned rectangle in screen coordinates
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScreenRect {
    pub min: Vec2,
    pub max: Vec2,
}

impl ScreenRect {
    pub fn new(min: Vec2, max: Vec2) -> Self {
        Self { min, max }
    }

    pub fn from_min_size(min: Vec2, size: Vec2) -> Self {
        Self {
            min,
            max: min + size,
        }
    }

    /// Inclusive on every edge
    pub fn contains(&self, point: Vec2) -> bool {
        point.x >= self.min.x && point.x <= self.max.x && point.y >= self.min.y && point.y <= self.max.y
    }
}

/// Screen bounds of every bin, as last reported by the view
#[derive(Debug, Clone, Default)]
pub struct BinLayout {
    regions: Vec<(BinCategory, ScreenRect)>,
}

impl BinLayout {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the bounds of one bin, keeping insertion order for the others
    pub fn set(&mut self, category: BinCategory, rect: ScreenRect) {
        if let Some(entry) = self.regions.iter_mut().find(|(c, _)| *c == category) {
            entry.1 = rect;
        } else {
            self.regions.push((category, rect));
        }
    }

    pub fn get(&self, category: BinCategory) -> Option<ScreenRect> {
        self.regions
            .iter()
            .find(|(c, _)| *c == category)
            .map(|(_, r)| *r)
    }

    /// Scan every region; when regions overlap the last one registered wins
    pub fn bin_at(&self, point: Vec2) -> Option<BinCategory> {
        let mut hovered = None;
        for (category, rect) in &self.regions {
            if rect.contains(point) {
                hovered = Some(*category);
            }
        }
        hovered
    }
}

/// State of the single in-progress drag gesture
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragState {
    pub item: ItemId,
    /// None until the first pointer move after the drag began
    pub pointer: Option<Vec2>,
    pub hovered_bin: Option<BinCategory>,
}

impl DragState {
    pub fn new(item: ItemId) -> Self {
        Self {
            item,
            pointer: None,
            hovered_bin: None,
        }
    }

    /// Record a pointer position and recompute the hovered bin
    pub fn track(&mut self, pointer: Vec2, layout: &BinLayout) {
        self.pointer = Some(pointer);
        self.hovered_bin = layout.bin_at(pointer);
    }
}
