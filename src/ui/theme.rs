//! Game-specific semantic colors for UI theming

use egui::Color32;

use crate::game::BinCategory;

/// Colors of one bin category
#[derive(Debug, Clone, Copy)]
pub struct BinPalette {
    /// Bin body and tip accent
    pub fill: Color32,
    /// Bin outline
    pub border: Color32,
    /// Lid area and highlight tint
    pub light: Color32,
}

/// Semantic color palette for game UI elements
#[derive(Debug, Clone)]
pub struct GameColors {
    // ===== Scene =====
    /// Background behind everything
    pub sky: Color32,
    /// Play field fill
    pub playground: Color32,
    /// Play field outline
    pub playground_border: Color32,
    /// Grass strip at the bottom of the play field
    pub ground: Color32,

    // ===== Cards & items =====
    pub card: Color32,
    pub card_text: Color32,
    pub muted_text: Color32,
    /// Outline of an item being dragged
    pub drag_outline: Color32,
    pub drag_fill: Color32,

    // ===== Feedback =====
    pub correct: Color32,
    pub wrong: Color32,
    pub hover: Color32,

    // ===== Stats =====
    pub score: Color32,
    pub timer: Color32,
    pub timer_low: Color32,
    pub items: Color32,
    pub level: Color32,
}

impl Default for GameColors {
    fn default() -> Self {
        Self {
            sky: Color32::from_rgb(207, 235, 228),
            playground: Color32::from_rgb(253, 224, 160),
            playground_border: Color32::from_rgb(253, 186, 116),
            ground: Color32::from_rgb(74, 222, 128),

            card: Color32::WHITE,
            card_text: Color32::from_rgb(31, 41, 55),
            muted_text: Color32::from_rgb(75, 85, 99),
            drag_outline: Color32::from_rgb(96, 165, 250),
            drag_fill: Color32::from_rgb(239, 246, 255),

            correct: Color32::from_rgb(34, 197, 94),
            wrong: Color32::from_rgb(239, 68, 68),
            hover: Color32::from_rgb(250, 204, 21),

            score: Color32::from_rgb(161, 98, 7),
            timer: Color32::from_rgb(185, 28, 28),
            timer_low: Color32::from_rgb(239, 68, 68),
            items: Color32::from_rgb(29, 78, 216),
            level: Color32::from_rgb(126, 34, 206),
        }
    }
}

impl GameColors {
    pub fn bin(&self, category: BinCategory) -> BinPalette {
        match category {
            BinCategory::Wet => BinPalette {
                fill: Color32::from_rgb(34, 197, 94),
                border: Color32::from_rgb(22, 163, 74),
                light: Color32::from_rgb(220, 252, 231),
            },
            BinCategory::Dry => BinPalette {
                fill: Color32::from_rgb(59, 130, 246),
                border: Color32::from_rgb(37, 99, 235),
                light: Color32::from_rgb(219, 234, 254),
            },
            BinCategory::Glass => BinPalette {
                fill: Color32::from_rgb(234, 179, 8),
                border: Color32::from_rgb(202, 138, 4),
                light: Color32::from_rgb(254, 249, 195),
            },
            BinCategory::General => BinPalette {
                fill: Color32::from_rgb(107, 114, 128),
                border: Color32::from_rgb(75, 85, 99),
                light: Color32::from_rgb(243, 244, 246),
            },
        }
    }
}
