//! Game configuration with layered loading
//!
//! Configuration is loaded from multiple sources (lowest to highest priority):
//! 1. Compiled defaults
//! 2. `ecosort.ron` file (if exists)
//! 3. Environment variables prefixed with `ECOSORT_`
//!
//! Example environment variable: `ECOSORT_RULES__INITIAL_TIME_SECS=60`
//!
//! On WASM only the compiled defaults are used.

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::game::GameRules;

/// Main game configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct GameConfig {
    #[serde(default)]
    pub rules: GameRules,

    #[serde(default)]
    pub ui: UiConfig,

    #[serde(default)]
    pub debug: DebugConfig,
}

/// UI and window settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    /// Initial window width
    pub window_width: u32,
    /// Initial window height
    pub window_height: u32,
    /// How long toast messages stay on screen, in seconds
    pub toast_secs: f32,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            window_width: 1100,
            window_height: 820,
            toast_secs: 2.5,
        }
    }
}

/// Debug/development settings
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct DebugConfig {
    /// Fixed seed for item generation (random when unset)
    pub seed: Option<u64>,
    /// Enable verbose logging
    pub verbose_logging: bool,
}

impl GameConfig {
    /// Load configuration with layered priority:
    /// 1. Compiled defaults (lowest priority)
    /// 2. `ecosort.ron` file (if exists)
    /// 3. Environment variables prefixed with `ECOSORT_` (highest priority)
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load() -> Result<Self> {
        use config::{Config, Environment, File, FileFormat};

        let builder = Config::builder()
            // Layer 2: Config file (optional, won't error if missing)
            .add_source(
                File::with_name("ecosort")
                    .format(FileFormat::Ron)
                    .required(false),
            )
            // Layer 3: Environment variables (ECOSORT_RULES__ITEMS_PER_LEVEL, etc.)
            .add_source(Environment::with_prefix("ECOSORT").separator("__"));

        // Layer 1 comes from the serde defaults on every section
        let config: GameConfig = builder.build()?.try_deserialize()?;
        config.rules.validate()?;
        Ok(config)
    }

    /// Compiled defaults; WASM has no file system or environment to layer on top
    #[cfg(target_arch = "wasm32")]
    pub fn load() -> Result<Self> {
        Ok(Self::default())
    }

    /// Render as RON, suitable for saving as `ecosort.ron`
    pub fn to_ron(&self) -> Result<String> {
        let pretty = ron::ser::PrettyConfig::default();
        Ok(ron::ser::to_string_pretty(self, pretty)?)
    }
}
