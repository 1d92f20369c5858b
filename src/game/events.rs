//! Outbound notifications for the view layer

use super::category::BinCategory;
use super::item::ItemId;
use super::session::GamePhase;

/// Something the view may want to react to (toasts, sounds, logging)
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameNotification {
    PhaseChanged {
        from: GamePhase,
        to: GamePhase,
    },
    ItemSorted {
        item: ItemId,
        name: &'static str,
        bin: BinCategory,
        score: u32,
    },
    ItemMisplaced {
        item: ItemId,
        name: &'static str,
        bin: BinCategory,
        score: u32,
    },
    LevelUp {
        level: u32,
        time_left: u32,
    },
    BatchSpawned {
        level: u32,
        count: usize,
    },
    TimeUp {
        score: u32,
        level: u32,
    },
}

impl GameNotification {
    /// Short message for a toast, if this notification deserves one
    pub fn toast_text(&self) -> Option<String> {
        match self {
            GameNotification::LevelUp { level, .. } => {
                Some(format!("Level {level}! Bonus time added"))
            }
            GameNotification::TimeUp { score, .. } => Some(format!("Time's up! Score: {score}")),
            GameNotification::ItemMisplaced { name, bin, .. } => {
                Some(format!("{name} doesn't belong in {bin}"))
            }
            _ => None,
        }
    }
}
