//! # EcoSort - Waste Sorting Game
//!
//! Drag waste items into the Wet, Dry, Glass or General bin before the
//! countdown runs out. Clearing a level spawns a new batch and adds bonus time.

pub mod app;
pub mod config;
pub mod error;
pub mod game;
pub mod render;
pub mod ui;

pub use app::App;
pub use config::GameConfig;
pub use error::{GameError, Result};

// WASM entry point
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn start() {
    // Set up panic hook for better error messages in the browser console
    console_error_panic_hook::set_once();

    if console_log::init_with_level(log::Level::Info).is_err() {
        log::warn!("Logger already initialized");
    }

    log::info!("EcoSort WASM module initialized");
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen]
pub async fn run() -> std::result::Result<(), JsValue> {
    log::info!("Starting EcoSort (WASM)");

    let config = GameConfig::load().map_err(|e| JsValue::from_str(&format!("Failed to load config: {}", e)))?;

    let (app, event_loop) = App::new(config)
        .await
        .map_err(|e| JsValue::from_str(&format!("Failed to create app: {}", e)))?;

    App::run(event_loop, app).map_err(|e| JsValue::from_str(&format!("Failed to run app: {}", e)))
}
