//! Rooms and the chests and monsters they own
//!
//! Chests and monsters live inside their room's storage and are reached by
//! name, never by shared reference. Names are matched case-insensitively and
//! only within the room.

use crate::core::types::{names_match, Gold, Health};
use std::collections::BTreeMap;

/// A chest that can be opened exactly once
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Chest {
    pub name: String,
    opened: bool,
}

impl Chest {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            opened: false,
        }
    }

    /// A chest that was already emptied before play started
    pub fn opened(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            opened: true,
        }
    }

    pub fn is_opened(&self) -> bool {
        self.opened
    }

    /// Open the chest. Returns false if it was already open.
    pub fn open(&mut self) -> bool {
        if self.opened {
            return false;
        }
        self.opened = true;
        true
    }
}

/// A monster placed in a room
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Monster {
    pub name: String,
    health: Health,
    /// Attack power, constant for the monster's lifetime
    pub damage: Health,
    /// Reward paid out when the monster is defeated
    pub gold: Gold,
}

impl Monster {
    pub fn new(name: impl Into<String>, health: Health, damage: Health, gold: Gold) -> Self {
        Self {
            name: name.into(),
            health,
            damage,
            gold,
        }
    }

    /// Raw health; may be negative after an overkill
    pub fn health(&self) -> Health {
        self.health
    }

    /// Health as shown to the player, never below zero
    pub fn display_health(&self) -> Health {
        self.health.max(0)
    }

    pub fn is_defeated(&self) -> bool {
        self.health <= 0
    }

    /// Subtract `amount` and return the remaining raw health
    pub fn take_hit(&mut self, amount: Health) -> Health {
        self.health -= amount;
        self.health
    }
}

/// A navigable location
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Room {
    pub name: String,
    pub description: String,
    /// Lowercased direction -> destination room name
    exits: BTreeMap<String, String>,
    chests: Vec<Chest>,
    monsters: Vec<Monster>,
}

impl Room {
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            exits: BTreeMap::new(),
            chests: Vec::new(),
            monsters: Vec::new(),
        }
    }

    pub fn with_exit(mut self, direction: &str, destination: impl Into<String>) -> Self {
        self.add_exit(direction, destination);
        self
    }

    pub fn with_chest(mut self, chest: Chest) -> Self {
        self.chests.push(chest);
        self
    }

    pub fn with_monster(mut self, monster: Monster) -> Self {
        self.monsters.push(monster);
        self
    }

    /// Add an exit, returning the destination it replaced if the direction
    /// was already taken
    pub fn add_exit(&mut self, direction: &str, destination: impl Into<String>) -> Option<String> {
        self.exits
            .insert(direction.trim().to_lowercase(), destination.into())
    }

    /// Destination for a direction, if this room has that exit
    pub fn exit(&self, direction: &str) -> Option<&str> {
        self.exits
            .get(&direction.trim().to_lowercase())
            .map(String::as_str)
    }

    /// Exits in direction order
    pub fn exits(&self) -> impl Iterator<Item = (&str, &str)> {
        self.exits.iter().map(|(d, r)| (d.as_str(), r.as_str()))
    }

    pub fn chests(&self) -> &[Chest] {
        &self.chests
    }

    pub fn monsters(&self) -> &[Monster] {
        &self.monsters
    }

    /// Find a chest by name, preferring one that is still closed
    pub fn chest_mut(&mut self, name: &str) -> Option<&mut Chest> {
        let idx = self
            .chests
            .iter()
            .position(|c| !c.is_opened() && names_match(&c.name, name))
            .or_else(|| self.chests.iter().position(|c| names_match(&c.name, name)))?;
        self.chests.get_mut(idx)
    }

    /// Find a monster by name, preferring one that is still standing
    pub fn monster_mut(&mut self, name: &str) -> Option<&mut Monster> {
        let idx = self
            .monsters
            .iter()
            .position(|m| !m.is_defeated() && names_match(&m.name, name))
            .or_else(|| self.monsters.iter().position(|m| names_match(&m.name, name)))?;
        self.monsters.get_mut(idx)
    }

    pub fn chest(&self, name: &str) -> Option<&Chest> {
        self.chests.iter().find(|c| names_match(&c.name, name))
    }

    pub fn monster(&self, name: &str) -> Option<&Monster> {
        self.monsters.iter().find(|m| names_match(&m.name, name))
    }
}
