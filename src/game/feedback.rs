//! Transient placement feedback

use super::category::BinCategory;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Correct,
    Wrong,
}

/// Which bin flashes and how; cleared by the controller after a fixed delay
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Feedback {
    pub bin: BinCategory,
    pub outcome: Outcome,
}

impl Feedback {
    pub fn new(bin: BinCategory, outcome: Outcome) -> Self {
        Self { bin, outcome }
    }

    pub fn is_correct_for(&self, bin: BinCategory) -> bool {
        self.bin == bin && self.outcome == Outcome::Correct
    }

    pub fn is_wrong_for(&self, bin: BinCategory) -> bool {
        self.bin == bin && self.outcome == Outcome::Wrong
    }
}
