//! Structured results of processing a command
//!
//! The session emits `GameEvent`s instead of printing; `ui::text` turns them
//! into lines. The views are read-only snapshots for the presentation layer.

use crate::core::types::{Gold, Health};
use crate::player::Player;
use crate::world::loot::LootItem;
use crate::world::rooms::Room;

/// Where the session's state machine is
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameState {
    Playing,
    /// Player health reached zero; terminal
    Defeated,
    /// Player asked to leave; terminal
    Quit,
}

impl GameState {
    pub fn is_terminal(&self) -> bool {
        !matches!(self, GameState::Playing)
    }
}

/// Snapshot of the player for `stats`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayerView {
    pub room: String,
    pub health: Health,
    pub gold: Gold,
    pub weapon: Option<LootItem>,
    pub armor: Option<LootItem>,
}

impl From<&Player> for PlayerView {
    fn from(player: &Player) -> Self {
        Self {
            room: player.current_room().to_string(),
            health: player.health,
            gold: player.gold,
            weapon: player.equipment.weapon().cloned(),
            armor: player.equipment.armor().cloned(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChestView {
    pub name: String,
    pub opened: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonsterView {
    pub name: String,
    /// Floored at zero
    pub health: Health,
    pub damage: Health,
    pub defeated: bool,
}

/// Snapshot of a room for `look`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoomView {
    pub name: String,
    pub description: String,
    /// (direction, destination) in direction order
    pub exits: Vec<(String, String)>,
    pub chests: Vec<ChestView>,
    pub monsters: Vec<MonsterView>,
}

impl From<&Room> for RoomView {
    fn from(room: &Room) -> Self {
        Self {
            name: room.name.clone(),
            description: room.description.clone(),
            exits: room
                .exits()
                .map(|(d, r)| (d.to_string(), r.to_string()))
                .collect(),
            chests: room
                .chests()
                .iter()
                .map(|c| ChestView {
                    name: c.name.clone(),
                    opened: c.is_opened(),
                })
                .collect(),
            monsters: room
                .monsters()
                .iter()
                .map(|m| MonsterView {
                    name: m.name.clone(),
                    health: m.display_health(),
                    damage: m.damage,
                    defeated: m.is_defeated(),
                })
                .collect(),
        }
    }
}

/// Everything a command can produce
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameEvent {
    Stats(PlayerView),
    Room(RoomView),

    Moved {
        direction: String,
        destination: String,
    },
    NoExit {
        direction: String,
    },

    ChestOpened {
        chest: String,
    },
    ChestAlreadyOpened {
        chest: String,
    },
    NoSuchChest {
        name: String,
    },
    LootFound(LootItem),
    LootEquipped(LootItem),
    /// The player must answer Y/N before anything else happens
    ReplacementOffered {
        current: LootItem,
        candidate: LootItem,
    },
    GearReplaced {
        old: LootItem,
        new: LootItem,
    },
    GearKept {
        kept: LootItem,
        discarded: LootItem,
    },

    Attacked {
        monster: String,
        dealt: Health,
        /// Monster health after the blow, floored at zero
        remaining: Health,
    },
    MonsterDefeated {
        monster: String,
        gold: Gold,
    },
    CounterAttack {
        monster: String,
        raw: Health,
        taken: Health,
    },
    MonsterAlreadyDefeated {
        monster: String,
    },
    NoSuchMonster {
        name: String,
    },

    Help,
    UnknownCommand {
        input: String,
    },
    Farewell,
    PlayerDefeated,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::world::rooms::{Chest, Monster};

    #[test]
    fn test_room_view_floors_monster_health() {
        let mut room = Room::new("Den", "Smelly")
            .with_exit("west", "Hall")
            .with_chest(Chest::new("Sack"))
            .with_monster(Monster::new("Rat", 5, 2, 3));
        room.monster_mut("rat").unwrap().take_hit(9);

        let view = RoomView::from(&room);

        assert_eq!(view.exits, vec![("west".to_string(), "Hall".to_string())]);
        assert_eq!(view.chests[0], ChestView { name: "Sack".into(), opened: false });
        assert_eq!(view.monsters[0].health, 0);
        assert!(view.monsters[0].defeated);
    }

    #[test]
    fn test_terminal_states() {
        assert!(!GameState::Playing.is_terminal());
        assert!(GameState::Defeated.is_terminal());
        assert!(GameState::Quit.is_terminal());
    }
}
