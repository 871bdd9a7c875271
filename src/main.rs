//! Dan's Dungeon - Entry Point
//!
//! Loads a world file, prints the banner and runs the interactive loop on
//! stdin/stdout. Logs go to stderr.

use clap::Parser;
use dans_dungeon::command::Session;
use dans_dungeon::core::config::GameConfig;
use dans_dungeon::core::error::Result;
use dans_dungeon::ui;
use dans_dungeon::world::WorldLoader;
use std::io::{self, Write};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Explore a dungeon described by a JSON world file
#[derive(Parser, Debug)]
#[command(name = "dans-dungeon")]
#[command(about = "Play a text dungeon crawler loaded from a JSON world file")]
struct Args {
    /// Path to the world JSON file
    world: PathBuf,

    /// Optional TOML game config (starting health, gold, seed)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Random seed for loot draws; overrides the config
    #[arg(long)]
    seed: Option<u64>,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() {
    let args = Args::parse();

    let default_filter = if args.verbose {
        "dans_dungeon=debug"
    } else {
        "dans_dungeon=warn"
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)),
        )
        .with_writer(io::stderr)
        .init();

    if let Err(e) = run(&args) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

fn run(args: &Args) -> Result<()> {
    let mut config = match &args.config {
        Some(path) => GameConfig::load(path)?,
        None => GameConfig::new(),
    };
    if args.seed.is_some() {
        config.seed = args.seed;
    }

    let world = WorldLoader::load_from_file(&args.world)?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    write!(out, "{}", ui::render_banner(world.details()))?;

    let mut session = Session::from_config(world, &config);
    let state = ui::run(&mut session, io::stdin().lock(), &mut out)?;

    tracing::info!(?state, "Session ended");
    Ok(())
}
