//! Integration tests for world file loading and validation

use dans_dungeon::core::types::ItemKind;
use dans_dungeon::world::{LoadError, WorldLoader};
use std::path::Path;

const SAMPLE_WORLD: &str = "data/worlds/dans_dungeon.json";

#[test]
fn test_sample_world_loads() {
    let path = Path::new(SAMPLE_WORLD);
    if !path.exists() {
        eprintln!("Skipping test: sample world not found");
        return;
    }

    let world = WorldLoader::load_from_file(path).expect("Failed to load sample world");

    assert_eq!(world.details().name, "Dan's Dungeon");
    assert_eq!(world.first_room().name, "Entrance");
    assert!(!world.loot_table().is_empty());

    // Every exit resolves to a room
    for room in world.rooms() {
        for (_, destination) in room.exits() {
            assert!(world.room(destination).is_ok(), "dangling exit to {destination}");
        }
    }
}

#[test]
fn test_full_world_from_json() {
    let json = r#"{
        "details": { "name": "Cellar", "description": "Small", "version": "0.3" },
        "starting_weapon": { "name": "Knife", "type": "weapon", "damage": 2 },
        "starting_armor": { "name": "Shirt", "type": "armor" },
        "loot": [
            { "name": "Mace", "type": "weapon", "damage": 6 },
            { "name": "Helm", "type": "Armor", "defense": 2 }
        ],
        "rooms": [
            {
                "name": "Stairs",
                "description": "Creaky stairs.",
                "exits": { "Down": "Cellar" },
                "chests": [{ "name": "Box" }]
            },
            {
                "name": "Cellar",
                "description": "Cold and damp.",
                "exits": { "up": "Stairs" },
                "monsters": [{ "name": "Spider", "health": 4, "damage": 1 }]
            }
        ]
    }"#;

    let world = WorldLoader::load_from_json(json).expect("Failed to load world");

    assert_eq!(world.details().version, "0.3");
    // Missing defense loads as zero
    assert_eq!(world.starting_armor().defense(), Some(0));
    assert_eq!(world.loot_item("helm").map(|i| i.kind()), Some(ItemKind::Armor));

    let stairs = world.room("Stairs").unwrap();
    assert_eq!(stairs.exit("down"), Some("Cellar"));
    assert!(!stairs.chests()[0].is_opened());

    let spider = world.room("Cellar").unwrap().monster("spider").unwrap();
    assert_eq!(spider.gold, 0);
    assert_eq!(spider.health(), 4);
}

#[test]
fn test_numeric_version() {
    let json = r#"{
        "details": { "name": "N", "description": "", "version": 2 },
        "starting_weapon": { "name": "Fist", "type": "weapon", "damage": 1 },
        "starting_armor": { "name": "Skin", "type": "armor", "defense": 0 },
        "rooms": [{ "name": "Only", "description": "" }]
    }"#;

    let world = WorldLoader::load_from_json(json).unwrap();
    assert_eq!(world.details().version, "2");
    assert!(world.loot_table().is_empty());
}

#[test]
fn test_malformed_json_is_json_error() {
    let result = WorldLoader::load_from_json("{ not json");
    assert!(matches!(result, Err(LoadError::JsonError(_))));
}

#[test]
fn test_missing_required_field_is_json_error() {
    let json = r#"{
        "details": { "name": "N", "description": "" },
        "starting_weapon": { "name": "Fist", "type": "weapon", "damage": 1 },
        "starting_armor": { "name": "Skin", "type": "armor", "defense": 0 },
        "rooms": [{ "name": "Only", "description": "" }]
    }"#;

    assert!(matches!(
        WorldLoader::load_from_json(json),
        Err(LoadError::JsonError(_))
    ));
}

#[test]
fn test_dangling_exit_is_invalid() {
    let json = r#"{
        "details": { "name": "N", "description": "", "version": "1" },
        "starting_weapon": { "name": "Fist", "type": "weapon", "damage": 1 },
        "starting_armor": { "name": "Skin", "type": "armor", "defense": 0 },
        "rooms": [{ "name": "Only", "description": "", "exits": { "north": "Nowhere" } }]
    }"#;

    assert!(matches!(
        WorldLoader::load_from_json(json),
        Err(LoadError::InvalidWorldDescription(_))
    ));
}

#[test]
fn test_missing_file_is_io_error() {
    let result = WorldLoader::load_from_file(Path::new("data/worlds/does_not_exist.json"));
    assert!(matches!(result, Err(LoadError::IoError(_))));
}
