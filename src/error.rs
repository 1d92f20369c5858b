use thiserror::Error;

#[derive(Error, Debug)]
pub enum GameError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid game rules: {0}")]
    InvalidRules(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] ron::Error),
}

#[cfg(not(target_arch = "wasm32"))]
impl From<config::ConfigError> for GameError {
    fn from(err: config::ConfigError) -> Self {
        GameError::Config(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, GameError>;
