//! Crate-level error type.

use crate::config::ConfigError;

#[derive(thiserror::Error, Debug)]
pub enum GameError {
    #[error("configuration: {0}")]
    Config(#[from] ConfigError),

    #[error("terminal I/O: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, GameError>;
