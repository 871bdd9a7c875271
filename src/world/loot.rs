//! Loot items: the weapons and armor that can be equipped

use crate::core::types::ItemKind;
use std::fmt;

/// An immutable weapon or armor definition
///
/// Every item carries exactly one number: damage for weapons, defense for
/// armor. The accessors for the other kind return `None`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LootItem {
    name: String,
    kind: ItemKind,
    power: i32,
}

impl LootItem {
    pub fn new(name: impl Into<String>, kind: ItemKind, power: i32) -> Self {
        Self {
            name: name.into(),
            kind,
            power,
        }
    }

    pub fn weapon(name: impl Into<String>, damage: i32) -> Self {
        Self::new(name, ItemKind::Weapon, damage)
    }

    pub fn armor(name: impl Into<String>, defense: i32) -> Self {
        Self::new(name, ItemKind::Armor, defense)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn kind(&self) -> ItemKind {
        self.kind
    }

    /// The item's single attribute, whichever kind it is
    pub fn power(&self) -> i32 {
        self.power
    }

    pub fn damage(&self) -> Option<i32> {
        match self.kind {
            ItemKind::Weapon => Some(self.power),
            ItemKind::Armor => None,
        }
    }

    pub fn defense(&self) -> Option<i32> {
        match self.kind {
            ItemKind::Armor => Some(self.power),
            ItemKind::Weapon => None,
        }
    }
}

impl fmt::Display for LootItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            ItemKind::Weapon => write!(f, "{} (DMG: {})", self.name, self.power),
            ItemKind::Armor => write!(f, "{} (DEF: {})", self.name, self.power),
        }
    }
}
