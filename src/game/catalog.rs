//! Fixed catalog of waste templates used when spawning items

use super::category::BinCategory;

/// A kind of waste that can be spawned
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WasteTemplate {
    pub name: &'static str,
    pub category: BinCategory,
    pub glyph: &'static str,
}

const fn template(name: &'static str, category: BinCategory, glyph: &'static str) -> WasteTemplate {
    WasteTemplate {
        name,
        category,
        glyph,
    }
}

/// Every template the spawner samples from, uniformly
pub const CATALOG: [WasteTemplate; 14] = [
    // Wet
    template("Banana Peel", BinCategory::Wet, "🍌"),
    template("Apple Core", BinCategory::Wet, "🍎"),
    template("Bread", BinCategory::Wet, "🍞"),
    template("Fish Bones", BinCategory::Wet, "🐟"),
    // Dry
    template("Newspaper", BinCategory::Dry, "📰"),
    template("Cardboard", BinCategory::Dry, "📦"),
    template("Plastic Bottle", BinCategory::Dry, "🥤"),
    template("Aluminum Can", BinCategory::Dry, "🥫"),
    // Glass
    template("Glass Bottle", BinCategory::Glass, "🍾"),
    template("Glass Jar", BinCategory::Glass, "🫙"),
    template("Wine Glass", BinCategory::Glass, "🍷"),
    // General
    template("Light Bulb", BinCategory::General, "💡"),
    template("Battery", BinCategory::General, "🔋"),
    template("Cigarette", BinCategory::General, "🚬"),
];

/// Templates belonging to a single category
pub fn templates_for(category: BinCategory) -> impl Iterator<Item = &'static WasteTemplate> {
    CATALOG.iter().filter(move |t| t.category == category)
}
