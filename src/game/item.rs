//! Waste items and batch spawning

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_xoshiro::Xoshiro256PlusPlus;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::catalog::{WasteTemplate, CATALOG};
use super::category::BinCategory;

/// Identifier of a spawned item, unique for the lifetime of a spawner
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ItemId(pub u64);

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "waste-{}", self.0)
    }
}

/// A spawned item waiting to be sorted
#[derive(Debug, Clone, PartialEq)]
pub struct WasteItem {
    pub id: ItemId,
    pub name: &'static str,
    pub category: BinCategory,
    pub glyph: &'static str,
    /// Top-left corner in play-area coordinates
    pub position: Vec2,
}

impl WasteItem {
    pub fn from_template(id: ItemId, template: &WasteTemplate, position: Vec2) -> Self {
        Self {
            id,
            name: template.name,
            category: template.category,
            glyph: template.glyph,
            position,
        }
    }
}

/// Rectangle items are spawned in, with an inner margin kept free
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlayArea {
    pub width: f32,
    pub height: f32,
    pub margin: f32,
}

impl Default for PlayArea {
    fn default() -> Self {
        Self {
            width: 800.0,
            height: 400.0,
            margin: 40.0,
        }
    }
}

impl PlayArea {
    pub fn min_spawn(&self) -> Vec2 {
        Vec2::splat(self.margin)
    }

    /// Exclusive upper corner of the spawn region
    pub fn max_spawn(&self) -> Vec2 {
        Vec2::new(self.width - self.margin, self.height - self.margin)
    }

    pub fn contains_spawn(&self, position: Vec2) -> bool {
        let min = self.min_spawn();
        let max = self.max_spawn();
        position.x >= min.x && position.x < max.x && position.y >= min.y && position.y < max.y
    }
}

/// Generates batches of items with fresh ids and random positions
pub struct ItemSpawner {
    rng: Xoshiro256PlusPlus,
    next_id: u64,
    seed: u64,
}

impl ItemSpawner {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: Xoshiro256PlusPlus::seed_from_u64(seed),
            next_id: 0,
            seed,
        }
    }

    /// Spawner seeded from the thread RNG
    pub fn from_entropy() -> Self {
        Self::new(rand::random())
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Draw `count` templates with replacement and place each inside `area`.
    /// Overlapping positions are allowed.
    pub fn generate_batch(&mut self, count: usize, area: &PlayArea) -> Vec<WasteItem> {
        let min = area.min_spawn();
        let max = area.max_spawn();

        (0..count)
            .map(|_| {
                let template = &CATALOG[self.rng.random_range(0..CATALOG.len())];
                let position = Vec2::new(
                    self.rng.random_range(min.x..max.x),
                    self.rng.random_range(min.y..max.y),
                );
                let id = ItemId(self.next_id);
                self.next_id += 1;
                WasteItem::from_template(id, template, position)
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_batch_size() {
        let mut spawner = ItemSpawner::new(7);
        let batch = spawner.generate_batch(8, &PlayArea::default());
        assert_eq!(batch.len(), 8);
    }

    #[test]
    fn test_batch_ids_unique() {
        let mut spawner = ItemSpawner::new(12345);
        let area = PlayArea::default();
        let mut seen = HashSet::new();

        // Uniqueness also holds across consecutive batches
        for _ in 0..20 {
            for item in spawner.generate_batch(8, &area) {
                assert!(seen.insert(item.id), "duplicate id {}", item.id);
            }
        }
    }

    #[test]
    fn test_positions_within_margin() {
        let mut spawner = ItemSpawner::new(42);
        let area = PlayArea {
            width: 300.0,
            height: 200.0,
            margin: 25.0,
        };

        for _ in 0..50 {
            for item in spawner.generate_batch(8, &area) {
                assert!(area.contains_spawn(item.position), "{:?}", item.position);
            }
        }
    }

    #[test]
    fn test_items_match_catalog() {
        let mut spawner = ItemSpawner::new(3);
        for item in spawner.generate_batch(32, &PlayArea::default()) {
            let template = CATALOG
                .iter()
                .find(|t| t.name == item.name)
                .expect("item name not in catalog");
            assert_eq!(template.category, item.category);
            assert_eq!(template.glyph, item.glyph);
        }
    }

    #[test]
    fn test_same_seed_same_batch() {
        let area = PlayArea::default();
        let a = ItemSpawner::new(99).generate_batch(8, &area);
        let b = ItemSpawner::new(99).generate_batch(8, &area);
        assert_eq!(a, b);
    }

    #[test]
    fn test_item_id_display() {
        assert_eq!(ItemId(4).to_string(), "waste-4");
    }
}
