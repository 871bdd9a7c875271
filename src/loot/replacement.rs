//! Pending gear replacements

use crate::player::Player;
use crate::world::loot::LootItem;

/// A found item waiting on the player's yes/no
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReplacementProposal {
    current: LootItem,
    candidate: LootItem,
}

/// What the player ended up wearing
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReplacementOutcome {
    Replaced { old: LootItem, new: LootItem },
    Kept { kept: LootItem, discarded: LootItem },
}

pub fn propose_replacement(current: LootItem, candidate: LootItem) -> ReplacementProposal {
    ReplacementProposal { current, candidate }
}

impl ReplacementProposal {
    /// The item currently in the slot
    pub fn current(&self) -> &LootItem {
        &self.current
    }

    /// The item on offer
    pub fn candidate(&self) -> &LootItem {
        &self.candidate
    }

    /// Apply the player's answer. Declining leaves the player untouched.
    pub fn resolve(self, player: &mut Player, accept: bool) -> ReplacementOutcome {
        if accept {
            let old = player
                .equip(self.candidate.clone())
                .unwrap_or(self.current);
            ReplacementOutcome::Replaced {
                old,
                new: self.candidate,
            }
        } else {
            ReplacementOutcome::Kept {
                kept: self.current,
                discarded: self.candidate,
            }
        }
    }
}
