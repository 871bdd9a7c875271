//! Equipment slots
//!
//! One weapon slot and one armor slot. An item always lands in the slot
//! matching its kind.

use crate::core::types::ItemKind;
use crate::world::loot::LootItem;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Equipment {
    weapon: Option<LootItem>,
    armor: Option<LootItem>,
}

impl Equipment {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn weapon(&self) -> Option<&LootItem> {
        self.weapon.as_ref()
    }

    pub fn armor(&self) -> Option<&LootItem> {
        self.armor.as_ref()
    }

    /// Whatever is currently in the slot for `kind`
    pub fn slot(&self, kind: ItemKind) -> Option<&LootItem> {
        match kind {
            ItemKind::Weapon => self.weapon.as_ref(),
            ItemKind::Armor => self.armor.as_ref(),
        }
    }

    /// Put `item` in its slot, returning what was there before
    pub fn equip(&mut self, item: LootItem) -> Option<LootItem> {
        let slot = match item.kind() {
            ItemKind::Weapon => &mut self.weapon,
            ItemKind::Armor => &mut self.armor,
        };
        slot.replace(item)
    }

    /// Damage of the equipped weapon; bare hands do nothing
    pub fn weapon_damage(&self) -> i32 {
        self.weapon.as_ref().and_then(LootItem::damage).unwrap_or(0)
    }

    /// Defense of the equipped armor, zero when unarmoured
    pub fn armor_defense(&self) -> i32 {
        self.armor.as_ref().and_then(LootItem::defense).unwrap_or(0)
    }
}
