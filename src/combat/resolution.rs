//! Combat round resolution
//!
//! One `fight` command is one round: the player swings, and a surviving
//! monster swings back. Flat subtraction only, no percentages and no dice,
//! so every outcome follows from weapon damage, monster damage and armor.

use crate::core::types::{Gold, Health};
use crate::player::Player;
use crate::world::rooms::Monster;

/// What happened in a single round
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RoundOutcome {
    /// The monster was already down; nothing changed
    AlreadyDefeated,
    /// The player's blow finished the monster; no counter-attack
    MonsterDefeated {
        /// Damage the player dealt this round
        dealt: Health,
        /// Gold paid out to the player
        gold: Gold,
    },
    /// The monster survived and hit back
    Exchange {
        dealt: Health,
        /// Monster health after the player's blow
        monster_health: Health,
        /// Monster damage before armor
        raw: Health,
        /// Damage the player actually took
        taken: Health,
    },
}

/// Damage left after armor; armor never heals
pub fn mitigated_damage(raw: Health, defense: i32) -> Health {
    (raw - defense).max(0)
}

/// Resolve one round between `player` and `monster`
pub fn resolve_round(player: &mut Player, monster: &mut Monster) -> RoundOutcome {
    if monster.is_defeated() {
        return RoundOutcome::AlreadyDefeated;
    }

    let dealt = player.weapon_damage();
    let remaining = monster.take_hit(dealt);

    if remaining <= 0 {
        player.gain_gold(monster.gold);
        tracing::debug!(monster = %monster.name, dealt, gold = monster.gold, "Monster defeated");
        return RoundOutcome::MonsterDefeated {
            dealt,
            gold: monster.gold,
        };
    }

    let raw = monster.damage;
    let taken = mitigated_damage(raw, player.armor_defense());
    player.apply_damage(taken);

    tracing::debug!(
        monster = %monster.name,
        dealt,
        monster_health = remaining,
        raw,
        taken,
        player_health = player.health,
        "Combat round"
    );

    RoundOutcome::Exchange {
        dealt,
        monster_health: remaining,
        raw,
        taken,
    }
}
