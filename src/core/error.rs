use thiserror::Error;

use crate::world::loader::LoadError;

#[derive(Error, Debug)]
pub enum DungeonError {
    #[error("Unknown room: {0}")]
    UnknownRoom(String),

    #[error(transparent)]
    Load(#[from] LoadError),

    #[error("Config error: {0}")]
    Config(String),

    #[error("Config parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, DungeonError>;
