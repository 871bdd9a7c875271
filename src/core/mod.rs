pub mod config;
pub mod error;
pub mod types;

pub use config::GameConfig;
pub use error::{DungeonError, Result};
pub use types::{Gold, Health, ItemKind};
