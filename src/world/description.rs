//! The loaded world: room graph, loot table and starting equipment
//!
//! Structure is fixed after construction. Only the chest and monster state
//! nested inside rooms changes during play.

use crate::core::error::{DungeonError, Result};
use crate::core::types::{names_match, ItemKind};
use crate::world::loader::LoadError;
use crate::world::loot::LootItem;
use crate::world::rooms::Room;
use ahash::AHashMap;

/// Title metadata shown when a world is loaded
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorldDetails {
    pub name: String,
    pub description: String,
    pub version: String,
}

/// A validated, internally consistent world
#[derive(Debug, Clone)]
pub struct WorldDescription {
    details: WorldDetails,
    starting_weapon: LootItem,
    starting_armor: LootItem,
    loot: Vec<LootItem>,
    rooms: Vec<Room>,
    /// Room name -> index into `rooms`
    room_index: AHashMap<String, usize>,
}

impl WorldDescription {
    /// Assemble a world, checking every invariant the engine relies on
    ///
    /// Fails with `InvalidWorldDescription` on an empty room list, duplicate
    /// room or loot names, exits into rooms that do not exist, starting gear
    /// of the wrong kind, or negative stats.
    pub fn new(
        details: WorldDetails,
        starting_weapon: LootItem,
        starting_armor: LootItem,
        loot: Vec<LootItem>,
        rooms: Vec<Room>,
    ) -> std::result::Result<Self, LoadError> {
        if rooms.is_empty() {
            return Err(invalid("world has no rooms"));
        }

        if starting_weapon.kind() != ItemKind::Weapon {
            return Err(invalid(format!(
                "starting weapon '{}' is {}, not a weapon",
                starting_weapon.name(),
                starting_weapon.kind()
            )));
        }
        if starting_armor.kind() != ItemKind::Armor {
            return Err(invalid(format!(
                "starting armor '{}' is {}, not armor",
                starting_armor.name(),
                starting_armor.kind()
            )));
        }

        for item in loot
            .iter()
            .chain([&starting_weapon, &starting_armor])
        {
            if item.power() < 0 {
                return Err(invalid(format!(
                    "item '{}' has negative {} ({})",
                    item.name(),
                    stat_name(item.kind()),
                    item.power()
                )));
            }
        }

        for (i, item) in loot.iter().enumerate() {
            if loot[..i].iter().any(|other| names_match(other.name(), item.name())) {
                return Err(invalid(format!(
                    "duplicate loot item '{}'",
                    item.name()
                )));
            }
        }

        let mut room_index = AHashMap::with_capacity(rooms.len());
        for (idx, room) in rooms.iter().enumerate() {
            if room_index.insert(room.name.clone(), idx).is_some() {
                return Err(invalid(format!("duplicate room name '{}'", room.name)));
            }
        }

        for room in &rooms {
            for (direction, destination) in room.exits() {
                if !room_index.contains_key(destination) {
                    return Err(invalid(format!(
                        "room '{}' exit '{}' leads to unknown room '{}'",
                        room.name, direction, destination
                    )));
                }
            }
            for monster in room.monsters() {
                if monster.damage < 0 {
                    return Err(invalid(format!(
                        "monster '{}' in room '{}' has negative damage ({})",
                        monster.name, room.name, monster.damage
                    )));
                }
            }
        }

        Ok(Self {
            details,
            starting_weapon,
            starting_armor,
            loot,
            rooms,
            room_index,
        })
    }

    pub fn details(&self) -> &WorldDetails {
        &self.details
    }

    pub fn starting_weapon(&self) -> &LootItem {
        &self.starting_weapon
    }

    pub fn starting_armor(&self) -> &LootItem {
        &self.starting_armor
    }

    /// The shared pool chests draw from
    pub fn loot_table(&self) -> &[LootItem] {
        &self.loot
    }

    /// Look up a loot table entry by name, ignoring case
    pub fn loot_item(&self, name: &str) -> Option<&LootItem> {
        self.loot.iter().find(|item| names_match(item.name(), name))
    }

    pub fn rooms(&self) -> &[Room] {
        &self.rooms
    }

    /// Where the player starts
    pub fn first_room(&self) -> &Room {
        // `new` rejects empty room lists
        &self.rooms[0]
    }

    pub fn room(&self, name: &str) -> Result<&Room> {
        self.room_index
            .get(name)
            .map(|&idx| &self.rooms[idx])
            .ok_or_else(|| DungeonError::UnknownRoom(name.to_string()))
    }

    pub fn room_mut(&mut self, name: &str) -> Result<&mut Room> {
        match self.room_index.get(name) {
            Some(&idx) => Ok(&mut self.rooms[idx]),
            None => Err(DungeonError::UnknownRoom(name.to_string())),
        }
    }
}

fn invalid(reason: impl Into<String>) -> LoadError {
    LoadError::InvalidWorldDescription(reason.into())
}

fn stat_name(kind: ItemKind) -> &'static str {
    match kind {
        ItemKind::Weapon => "damage",
        ItemKind::Armor => "defense",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::world::rooms::Monster;

    fn details() -> WorldDetails {
        WorldDetails {
            name: "Test".into(),
            description: "Test world".into(),
            version: "1".into(),
        }
    }

    fn build(loot: Vec<LootItem>, rooms: Vec<Room>) -> std::result::Result<WorldDescription, LoadError> {
        WorldDescription::new(
            details(),
            LootItem::weapon("Stick", 1),
            LootItem::armor("Rags", 0),
            loot,
            rooms,
        )
    }

    fn assert_invalid(result: std::result::Result<WorldDescription, LoadError>, needle: &str) {
        match result {
            Err(LoadError::InvalidWorldDescription(reason)) => {
                assert!(reason.contains(needle), "unexpected reason: {}", reason)
            }
            other => panic!("Expected InvalidWorldDescription, got {:?}", other.map(|_| ())),
        }
    }

    #[test]
    fn test_room_lookup() {
        let world = build(
            vec![],
            vec![
                Room::new("A", "first").with_exit("north", "B"),
                Room::new("B", "second").with_exit("south", "A"),
            ],
        )
        .unwrap();

        assert_eq!(world.first_room().name, "A");
        assert_eq!(world.room("B").unwrap().description, "second");
        assert!(matches!(world.room("C"), Err(DungeonError::UnknownRoom(name)) if name == "C"));
    }

    #[test]
    fn test_dangling_exit_rejected() {
        let result = build(vec![], vec![Room::new("A", "").with_exit("east", "Nowhere")]);
        assert_invalid(result, "Nowhere");
    }

    #[test]
    fn test_empty_world_rejected() {
        assert_invalid(build(vec![], vec![]), "no rooms");
    }

    #[test]
    fn test_duplicate_room_rejected() {
        let result = build(vec![], vec![Room::new("A", ""), Room::new("A", "")]);
        assert_invalid(result, "duplicate room");
    }

    #[test]
    fn test_duplicate_loot_ignores_case() {
        let result = build(
            vec![LootItem::weapon("Axe", 3), LootItem::weapon("AXE", 4)],
            vec![Room::new("A", "")],
        );
        assert_invalid(result, "duplicate loot");
    }

    #[test]
    fn test_wrong_starting_kind_rejected() {
        let result = WorldDescription::new(
            details(),
            LootItem::armor("Shield", 2),
            LootItem::armor("Rags", 0),
            vec![],
            vec![Room::new("A", "")],
        );
        assert_invalid(result, "not a weapon");
    }

    #[test]
    fn test_negative_stats_rejected() {
        let result = build(vec![LootItem::armor("Cursed Cap", -1)], vec![Room::new("A", "")]);
        assert_invalid(result, "negative defense");

        let result = build(
            vec![],
            vec![Room::new("A", "").with_monster(Monster::new("Healer", 3, -2, 0))],
        );
        assert_invalid(result, "negative damage");
    }

    #[test]
    fn test_loot_item_lookup_ignores_case() {
        let world = build(vec![LootItem::weapon("War Axe", 6)], vec![Room::new("A", "")]).unwrap();
        assert_eq!(world.loot_item("war axe").map(|i| i.power()), Some(6));
        assert!(world.loot_item("axe").is_none());
    }
}
