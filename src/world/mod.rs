//! World model: rooms, chests, monsters, loot and their loading

pub mod description;
pub mod loader;
pub mod loot;
pub mod rooms;
pub mod schema;

pub use description::{WorldDescription, WorldDetails};
pub use loader::{LoadError, WorldLoader};
pub use loot::LootItem;
pub use rooms::{Chest, Monster, Room};
pub use schema::WorldFile;
