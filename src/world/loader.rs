//! Load a world description from JSON
//!
//! `WorldLoader` parses a world file into the schema records, converts them
//! into the runtime model and runs the consistency checks. Anything that
//! comes out of it is safe to play.

use crate::core::types::ItemKind;
use crate::world::description::{WorldDescription, WorldDetails};
use crate::world::loot::LootItem;
use crate::world::rooms::{Chest, Monster, Room};
use crate::world::schema::{ItemRecord, RoomRecord, WorldFile};
use std::path::Path;
use thiserror::Error;

/// Errors that can occur when loading a world
#[derive(Debug, Error)]
pub enum LoadError {
    /// JSON parsing failed, including missing required fields
    #[error("JSON parse error: {0}")]
    JsonError(#[from] serde_json::Error),
    /// The document parsed but describes an inconsistent world
    #[error("Invalid world description: {0}")]
    InvalidWorldDescription(String),
    /// File I/O error
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

/// Converts world files into validated `WorldDescription`s
pub struct WorldLoader;

impl WorldLoader {
    /// Load a world from a JSON string
    pub fn load_from_json(json: &str) -> Result<WorldDescription, LoadError> {
        let file: WorldFile = serde_json::from_str(json)?;
        Self::load_from_records(file)
    }

    /// Load a world from a JSON file on disk
    pub fn load_from_file(path: &Path) -> Result<WorldDescription, LoadError> {
        let content = std::fs::read_to_string(path)?;
        let world = Self::load_from_json(&content)?;
        tracing::debug!(path = %path.display(), "World file read");
        Ok(world)
    }

    /// Convert parsed records into the runtime model
    pub fn load_from_records(file: WorldFile) -> Result<WorldDescription, LoadError> {
        let details = WorldDetails {
            name: file.details.name,
            description: file.details.description,
            version: file.details.version,
        };

        let starting_weapon = convert_item(&file.starting_weapon)?;
        let starting_armor = convert_item(&file.starting_armor)?;
        let loot = file
            .loot
            .iter()
            .map(convert_item)
            .collect::<Result<Vec<_>, _>>()?;
        let rooms = file
            .rooms
            .into_iter()
            .map(convert_room)
            .collect::<Result<Vec<_>, _>>()?;

        let world = WorldDescription::new(details, starting_weapon, starting_armor, loot, rooms)?;

        tracing::info!(
            world = %world.details().name,
            rooms = world.rooms().len(),
            loot = world.loot_table().len(),
            "World loaded"
        );

        Ok(world)
    }
}

fn convert_item(record: &ItemRecord) -> Result<LootItem, LoadError> {
    let kind = ItemKind::parse(&record.kind).ok_or_else(|| {
        LoadError::InvalidWorldDescription(format!(
            "item '{}' has unknown type '{}'",
            record.name, record.kind
        ))
    })?;

    // A missing stat counts as zero; a stat for the other kind is ignored
    let power = match kind {
        ItemKind::Weapon => record.damage,
        ItemKind::Armor => record.defense,
    }
    .unwrap_or(0);

    Ok(LootItem::new(record.name.clone(), kind, power))
}

fn convert_room(record: RoomRecord) -> Result<Room, LoadError> {
    let mut room = Room::new(record.name, record.description);

    for (direction, destination) in record.exits {
        if room.add_exit(&direction, destination).is_some() {
            return Err(LoadError::InvalidWorldDescription(format!(
                "room '{}' has more than one '{}' exit",
                room.name,
                direction.to_lowercase()
            )));
        }
    }

    for chest in record.chests {
        room = room.with_chest(if chest.opened {
            Chest::opened(chest.name)
        } else {
            Chest::new(chest.name)
        });
    }

    for monster in record.monsters {
        room = room.with_monster(Monster::new(
            monster.name,
            monster.health,
            monster.damage,
            monster.gold,
        ));
    }

    Ok(room)
}
