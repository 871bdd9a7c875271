//! Game configuration with documented defaults
//!
//! Everything about the player's starting state that is not part of the
//! world file lives here, so the same world can be played at different
//! difficulties.

use crate::core::error::{DungeonError, Result};
use crate::core::types::{Gold, Health};
use serde::Deserialize;
use std::fs;
use std::path::Path;

/// Configuration for a play session
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Health the player starts with
    ///
    /// There is no healing, so this is also the effective maximum.
    pub starting_health: Health,

    /// Gold the player starts with
    pub starting_gold: Gold,

    /// Seed for the loot RNG
    ///
    /// `None` seeds from entropy. Set it to replay the same loot draws.
    pub seed: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            starting_health: 100,
            starting_gold: 0,
            seed: None,
        }
    }
}

impl GameConfig {
    /// Create a new config with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Load a config from a TOML file; missing keys keep their defaults
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let config = Self::from_toml(&content)?;
        config.validate().map_err(DungeonError::Config)?;
        Ok(config)
    }

    pub fn from_toml(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Validate configuration for internal consistency
    pub fn validate(&self) -> std::result::Result<(), String> {
        if self.starting_health <= 0 {
            return Err(format!(
                "starting_health ({}) must be positive",
                self.starting_health
            ));
        }

        Ok(())
    }
}
