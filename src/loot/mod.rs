//! Loot resolution: drawing from the loot table and equipping the result
//!
//! Equipping is two-phase. `resolve_equip` either equips straight away or
//! returns a `ReplacementProposal`; whoever is talking to the player decides,
//! then calls `ReplacementProposal::resolve` with the answer.

pub mod replacement;

pub use replacement::{propose_replacement, ReplacementOutcome, ReplacementProposal};

use crate::player::Player;
use crate::world::loot::LootItem;
use rand::seq::SliceRandom;
use rand::Rng;

/// Result of offering an item to the player
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EquipDecision {
    /// The slot was empty and the item is now worn
    Equipped(LootItem),
    /// The slot is taken; the player has to choose
    Pending(ReplacementProposal),
}

/// Pick one item uniformly at random; `None` for an empty table
pub fn draw_loot<R: Rng + ?Sized>(table: &[LootItem], rng: &mut R) -> Option<LootItem> {
    let item = table.choose(rng).cloned();
    if item.is_none() {
        tracing::warn!("Loot table is empty, nothing drawn");
    }
    item
}

/// Equip into an empty slot, or defer to the player if the slot is taken
pub fn resolve_equip(player: &mut Player, item: LootItem) -> EquipDecision {
    match player.equipment.slot(item.kind()) {
        Some(current) => EquipDecision::Pending(propose_replacement(current.clone(), item)),
        None => {
            player.equip(item.clone());
            EquipDecision::Equipped(item)
        }
    }
}
