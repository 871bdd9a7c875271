//! Plain-text rendering of game events

use crate::command::events::{GameEvent, PlayerView, RoomView};
use crate::world::description::WorldDetails;
use crate::world::loot::LootItem;
use std::fmt::Write;

pub const HELP_TEXT: &str = "\
stats                          : Show your health, gold and gear
look                           : Look around
go north / south / east / west : Move in a direction
open <chest>                   : Open a chest
fight <monster>                : Fight a monster
help                           : Show this list
quit                           : Exit game
";

/// Shown once after the world loads
pub fn render_banner(details: &WorldDetails) -> String {
    format!(
        "\nGame loaded!\n\n\
         Name        : {}\n\
         Description : {}\n\
         Version     : {}\n\n\
         Type 'help' for commands.\n",
        details.name, details.description, details.version
    )
}

/// Line printed before each `> ` prompt
pub fn room_prompt(room: &str) -> String {
    format!("\nYou are in: {room}")
}

pub fn replacement_prompt(current: &LootItem, candidate: &LootItem) -> String {
    format!("Replace {current} with {candidate}? (Y/N) ")
}

/// "north" -> "North"
pub fn title_case(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Text for one event, without a trailing newline
///
/// `ReplacementOffered` renders as an announcement only; the REPL prints
/// the Y/N prompt separately.
pub fn render(event: &GameEvent) -> String {
    match event {
        GameEvent::Stats(view) => render_stats(view),
        GameEvent::Room(view) => render_room(view),

        GameEvent::Moved {
            direction,
            destination,
        } => format!("You go {direction} to {destination}."),
        GameEvent::NoExit { .. } => "You can't go that way.".to_string(),

        GameEvent::ChestOpened { chest } => format!("You open the {chest}."),
        GameEvent::ChestAlreadyOpened { chest } => format!("The {chest} is already open."),
        GameEvent::NoSuchChest { name } => format!("There is no {name} here."),
        GameEvent::LootFound(item) => format!("Inside you find: {item}"),
        GameEvent::LootEquipped(item) => format!("You equip the {}.", item.name()),
        GameEvent::ReplacementOffered { current, candidate } => format!(
            "You already have a {}: {current}. The {} would replace it.",
            candidate.kind(),
            candidate.name()
        ),
        GameEvent::GearReplaced { old, new } => {
            format!("You drop the {} and equip the {}.", old.name(), new.name())
        }
        GameEvent::GearKept { kept, discarded } => {
            format!("You keep the {} and leave the {}.", kept.name(), discarded.name())
        }

        GameEvent::Attacked {
            monster,
            dealt,
            remaining,
        } => format!("You hit the {monster} for {dealt} damage. (HP: {remaining})"),
        GameEvent::MonsterDefeated { monster, gold } => {
            format!("The {monster} is defeated! You gain {gold} gold.")
        }
        GameEvent::CounterAttack { monster, taken, .. } => {
            format!("The {monster} hits you for {taken} damage.")
        }
        GameEvent::MonsterAlreadyDefeated { monster } => {
            format!("The {monster} is already defeated.")
        }
        GameEvent::NoSuchMonster { name } => format!("There is no {name} here to fight."),

        GameEvent::Help => HELP_TEXT.trim_end().to_string(),
        GameEvent::UnknownCommand { .. } => "Unknown command.".to_string(),
        GameEvent::Farewell => "Goodbye!".to_string(),
        GameEvent::PlayerDefeated => "You have been defeated. Game over.".to_string(),
    }
}

fn render_stats(view: &PlayerView) -> String {
    let gear = |item: &Option<LootItem>| match item {
        Some(item) => item.to_string(),
        None => "none".to_string(),
    };
    format!(
        "Health : {}\nGold   : {}\nWeapon : {}\nArmor  : {}",
        view.health,
        view.gold,
        gear(&view.weapon),
        gear(&view.armor)
    )
}

fn render_room(view: &RoomView) -> String {
    let mut out = format!("\n{}\n\nExits:", view.description);
    for (direction, destination) in &view.exits {
        let _ = write!(out, "\n  {}: {destination}", title_case(direction));
    }
    for chest in &view.chests {
        let _ = write!(out, "\nYou see a {}", chest.name);
        if chest.opened {
            out.push_str(" (opened)");
        }
    }
    for monster in &view.monsters {
        if monster.defeated {
            let _ = write!(out, "\n{} (defeated)", monster.name);
        } else {
            let _ = write!(
                out,
                "\n{} (HP: {}, DMG: {})",
                monster.name, monster.health, monster.damage
            );
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::command::events::{ChestView, MonsterView};

    #[test]
    fn test_title_case() {
        assert_eq!(title_case("north"), "North");
        assert_eq!(title_case(""), "");
    }

    #[test]
    fn test_room_rendering() {
        let view = RoomView {
            name: "Den".into(),
            description: "A dark den.".into(),
            exits: vec![("east".into(), "Hall".into())],
            chests: vec![ChestView {
                name: "Sack".into(),
                opened: true,
            }],
            monsters: vec![
                MonsterView {
                    name: "Rat".into(),
                    health: 5,
                    damage: 2,
                    defeated: false,
                },
                MonsterView {
                    name: "Bat".into(),
                    health: 0,
                    damage: 1,
                    defeated: true,
                },
            ],
        };

        let text = render(&GameEvent::Room(view));

        assert_eq!(
            text,
            "\nA dark den.\n\nExits:\n  East: Hall\nYou see a Sack (opened)\nRat (HP: 5, DMG: 2)\nBat (defeated)"
        );
    }

    #[test]
    fn test_replacement_prompt() {
        let prompt = replacement_prompt(&LootItem::weapon("Club", 2), &LootItem::weapon("Axe", 7));
        assert_eq!(prompt, "Replace Club (DMG: 2) with Axe (DMG: 7)? (Y/N) ");
    }

    #[test]
    fn test_failure_messages() {
        assert_eq!(
            render(&GameEvent::NoExit { direction: "up".into() }),
            "You can't go that way."
        );
        assert_eq!(
            render(&GameEvent::UnknownCommand { input: "dance".into() }),
            "Unknown command."
        );
    }
}
