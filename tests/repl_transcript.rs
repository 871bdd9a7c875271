//! Drive the interactive loop with scripted input and check the transcript

use dans_dungeon::command::{GameState, Session};
use dans_dungeon::core::config::GameConfig;
use dans_dungeon::ui;
use dans_dungeon::world::WorldLoader;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use std::io::Cursor;

const WORLD_JSON: &str = r#"{
    "details": { "name": "Transcript", "description": "", "version": "1" },
    "starting_weapon": { "name": "Sword", "type": "weapon", "damage": 5 },
    "starting_armor": { "name": "Leather", "type": "armor", "defense": 1 },
    "loot": [{ "name": "Axe", "type": "weapon", "damage": 9 }],
    "rooms": [
        {
            "name": "Room A",
            "description": "Dusty floor.",
            "exits": { "north": "Room B" },
            "chests": [{ "name": "Old Trunk" }]
        },
        {
            "name": "Room B",
            "description": "Smells of rat.",
            "exits": { "south": "Room A" },
            "monsters": [
                { "name": "Rat", "health": 5, "damage": 2, "gold": 3 },
                { "name": "Troll", "health": 500, "damage": 60, "gold": 0 }
            ]
        }
    ]
}"#;

fn play(script: &str) -> (GameState, String) {
    play_bytes(script.as_bytes())
}

fn play_bytes(script: &[u8]) -> (GameState, String) {
    let world = WorldLoader::load_from_json(WORLD_JSON).expect("Failed to load world");
    let mut session = Session::new(world, &GameConfig::default(), ChaCha8Rng::seed_from_u64(11));
    let mut out = Vec::new();

    let state = ui::run(&mut session, Cursor::new(script.to_vec()), &mut out).expect("repl failed");
    (state, String::from_utf8(out).expect("transcript is not utf-8"))
}

#[test]
fn test_walk_and_fight_transcript() {
    let (state, transcript) = play("look\ngo north\nfight rat\nstats\nquit\n");

    assert_eq!(state, GameState::Quit);
    assert!(transcript.contains("You are in: Room A\n> "));
    assert!(transcript.contains("Exits:\n  North: Room B"));
    assert!(transcript.contains("You see a Old Trunk"));
    assert!(transcript.contains("You go north to Room B."));
    assert!(transcript.contains("The Rat is defeated! You gain 3 gold."));
    assert!(transcript.contains("Gold   : 3"));
    assert!(transcript.ends_with("Goodbye!\n"));
}

#[test]
fn test_replacement_prompt_in_transcript() {
    let (_, transcript) = play("open old trunk\ny\nstats\n");

    assert!(transcript.contains("Inside you find: Axe (DMG: 9)"));
    assert!(transcript.contains("Replace Sword (DMG: 5) with Axe (DMG: 9)? (Y/N) "));
    assert!(transcript.contains("You drop the Sword and equip the Axe."));
    assert!(transcript.contains("Weapon : Axe (DMG: 9)"));
}

#[test]
fn test_defeat_ends_loop() {
    // Troll deals 59 a round: 100 -> 41 -> -18
    let (state, transcript) = play("go north\nfight troll\nfight troll\nlook\nlook\n");

    assert_eq!(state, GameState::Defeated);
    assert!(transcript.ends_with("You have been defeated. Game over.\n"));
    assert!(!transcript.contains("Smells of rat."));
}

#[test]
fn test_unknown_and_failed_commands() {
    let (_, transcript) = play("dance\ngo west\n\nfight dragon\n");

    assert!(transcript.contains("Unknown command."));
    assert!(transcript.contains("You can't go that way."));
    assert!(transcript.contains("There is no dragon here to fight."));
}

#[test]
fn test_eof_ends_cleanly() {
    let (state, transcript) = play("go north\n");

    assert_eq!(state, GameState::Playing);
    assert!(transcript.contains("You are in: Room B"));
}

#[test]
fn test_undecodable_line_is_unknown_command() {
    let (state, transcript) = play_bytes(b"\xff\xfe\nlook\nquit\n");

    assert_eq!(state, GameState::Quit);
    assert!(transcript.contains("Unknown command."));
    assert!(transcript.contains("Dusty floor."));
    assert!(transcript.ends_with("Goodbye!\n"));
}
