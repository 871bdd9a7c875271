//! Player state
//!
//! A plain mutable record. Policy (when to ask before replacing gear, when
//! the game is over) lives in the command session, not here.

pub mod equipment;

pub use equipment::Equipment;

use crate::core::config::GameConfig;
use crate::core::types::{Gold, Health};
use crate::world::description::WorldDescription;
use crate::world::loot::LootItem;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Player {
    pub health: Health,
    pub gold: Gold,
    pub equipment: Equipment,
    current_room: String,
}

impl Player {
    /// A bare player in `room` with no gear
    pub fn new(room: impl Into<String>, health: Health, gold: Gold) -> Self {
        Self {
            health,
            gold,
            equipment: Equipment::new(),
            current_room: room.into(),
        }
    }

    /// Place a fresh player in the world's first room wearing its starting gear
    pub fn spawn(world: &WorldDescription, config: &GameConfig) -> Self {
        let mut player = Self::new(
            world.first_room().name.clone(),
            config.starting_health,
            config.starting_gold,
        );
        player.equip(world.starting_weapon().clone());
        player.equip(world.starting_armor().clone());
        player
    }

    pub fn current_room(&self) -> &str {
        &self.current_room
    }

    /// Only the session calls this, after checking the exit exists
    pub fn move_to(&mut self, room: impl Into<String>) {
        self.current_room = room.into();
    }

    /// Subtract damage with no floor; defeat is checked separately
    pub fn apply_damage(&mut self, amount: Health) {
        self.health -= amount;
    }

    pub fn gain_gold(&mut self, amount: Gold) {
        self.gold = self.gold.saturating_add(amount);
    }

    /// Equip into the matching slot, returning the displaced item
    pub fn equip(&mut self, item: LootItem) -> Option<LootItem> {
        self.equipment.equip(item)
    }

    pub fn weapon_damage(&self) -> i32 {
        self.equipment.weapon_damage()
    }

    pub fn armor_defense(&self) -> i32 {
        self.equipment.armor_defense()
    }

    pub fn is_defeated(&self) -> bool {
        self.health <= 0
    }
}
