//! Bin categories and the educational content attached to them

use serde::{Deserialize, Serialize};
use std::fmt;

/// Sorting destination for waste items
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BinCategory {
    Wet,
    Dry,
    Glass,
    General,
}

/// Educational tip shown after a correct placement
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tip {
    pub title: &'static str,
    pub body: &'static str,
}

impl BinCategory {
    /// All categories in display order (left to right)
    pub const ALL: [BinCategory; 4] = [
        BinCategory::Wet,
        BinCategory::Dry,
        BinCategory::Glass,
        BinCategory::General,
    ];

    /// Label printed on the bin
    pub fn label(self) -> &'static str {
        match self {
            BinCategory::Wet => "Wet Waste",
            BinCategory::Dry => "Dry Recyclable",
            BinCategory::Glass => "Glass Waste",
            BinCategory::General => "General Waste",
        }
    }

    /// Short hint of what belongs in the bin
    pub fn description(self) -> &'static str {
        match self {
            BinCategory::Wet => "Food scraps, peels",
            BinCategory::Dry => "Paper, plastic, metal",
            BinCategory::Glass => "Bottles, jars",
            BinCategory::General => "Non-recyclable items",
        }
    }

    pub fn tip(self) -> Tip {
        match self {
            BinCategory::Wet => Tip {
                title: "Wet Waste - Great Choice!",
                body: "Wet waste includes all organic materials like food scraps, vegetable \
                       peels, and leftover food. These items can be composted to create \
                       nutrient-rich soil for plants!",
            },
            BinCategory::Dry => Tip {
                title: "Dry Recyclable - Excellent!",
                body: "Paper, cardboard, plastic bottles, and metal cans can be recycled into \
                       new products. This helps save natural resources and reduces pollution!",
            },
            BinCategory::Glass => Tip {
                title: "Glass Waste - Perfect!",
                body: "Glass bottles and jars can be recycled indefinitely without losing \
                       quality. Glass recycling saves energy and reduces the need for raw \
                       materials!",
            },
            BinCategory::General => Tip {
                title: "General Waste - Good Work!",
                body: "Items that can't be recycled or composted go here. Try to minimize \
                       general waste by choosing reusable items and recycling when possible!",
            },
        }
    }
}

impl fmt::Display for BinCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
