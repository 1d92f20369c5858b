//! UI system - board, bins, tip dialog and phase screens

pub mod bins;
pub mod hud;
pub mod playfield;
pub mod screens;
pub mod theme;
pub mod tip_dialog;
pub mod ui_state;

pub use bins::BinRow;
pub use hud::Hud;
pub use playfield::Playfield;
pub use theme::GameColors;
pub use ui_state::UiState;
