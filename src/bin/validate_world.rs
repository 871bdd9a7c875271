//! Check a world file loads, and summarize what is in it

use clap::Parser;
use dans_dungeon::world::{WorldDescription, WorldLoader};
use std::path::PathBuf;

/// World file validator
#[derive(Parser, Debug)]
#[command(name = "validate_world")]
#[command(about = "Load a Dan's Dungeon world file and print a summary")]
struct Args {
    /// Path to the world JSON file
    world: PathBuf,
}

fn main() {
    let args = Args::parse();

    if !args.world.exists() {
        eprintln!("World file not found: {:?}", args.world);
        std::process::exit(1);
    }

    println!("Loading world from {:?}...", args.world);

    match WorldLoader::load_from_file(&args.world) {
        Ok(world) => print_summary(&world),
        Err(e) => {
            eprintln!("Failed to load world: {}", e);
            std::process::exit(1);
        }
    }
}

fn print_summary(world: &WorldDescription) {
    let details = world.details();
    println!("Loaded \"{}\" (version {})", details.name, details.version);

    let rooms = world.rooms();
    let exits: usize = rooms.iter().map(|r| r.exits().count()).sum();
    let chests: usize = rooms.iter().map(|r| r.chests().len()).sum();
    let monsters: usize = rooms.iter().map(|r| r.monsters().len()).sum();
    let gold: u64 = rooms
        .iter()
        .flat_map(|r| r.monsters())
        .map(|m| u64::from(m.gold))
        .sum();

    println!("\nSummary:");
    println!("  Rooms:      {}", rooms.len());
    println!("  Exits:      {}", exits);
    println!("  Chests:     {}", chests);
    println!("  Monsters:   {}", monsters);
    println!("  Loot items: {}", world.loot_table().len());
    println!("  Gold:       {}", gold);

    println!("\nStarting gear:");
    println!("  {}", world.starting_weapon());
    println!("  {}", world.starting_armor());

    println!("\nRooms:");
    for room in rooms {
        println!(
            "  {} ({} exits, {} chests, {} monsters)",
            room.name,
            room.exits().count(),
            room.chests().len(),
            room.monsters().len()
        );
    }

    println!("\nWorld is valid.");
}
