//! Dan's Dungeon - JSON-driven text dungeon crawler
//!
//! A world file describes rooms, chests, monsters and a shared loot table.
//! `world` loads and validates it, `command::Session` plays it, and `ui`
//! turns the resulting events into terminal text.

pub mod combat;
pub mod command;
pub mod core;
pub mod loot;
pub mod player;
pub mod ui;
pub mod world;
