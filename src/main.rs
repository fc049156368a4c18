//! Swordspawn headless runner.
//!
//! Loads the config, sprite manifest and level, then drives the simulation
//! with a scripted wandering player and a renderer that only tallies draw
//! calls. Useful for soak runs and for checking a level file loads.
//!
//! # Running
//!
//! ```sh
//! RUST_LOG=debug cargo run --release -- --ticks 2000 --seed 7
//! ```

use std::path::PathBuf;

use clap::Parser;
use glam::Vec2;
use log::{error, info, warn};

use swordspawn::components::actor::Enemy;
use swordspawn::error::{ConfigError, GameError};
use swordspawn::game::Simulation;
use swordspawn::host::{FixedPacer, RealtimePacer, ScriptedInput, TallyRenderer};
use swordspawn::level::LevelMap;
use swordspawn::resources::gameconfig::GameConfig;
use swordspawn::resources::rng::SimRng;
use swordspawn::resources::spritestore::SpriteStore;

/// Swordspawn 2D simulation
#[derive(Parser)]
#[command(version, about = "Runs the swordspawn simulation headless.")]
struct Cli {
    /// INI file with gameplay settings. Missing file means defaults.
    #[arg(long, value_name = "PATH", default_value = "./config.ini")]
    config: PathBuf,

    /// Level file: JSON array of rows of tile codes.
    #[arg(long, value_name = "PATH", default_value = "assets/data/level_0.json")]
    level: PathBuf,

    /// Sprite manifest, e.g. assets/data/sprites.json. Built-in 16px
    /// descriptors are used when omitted.
    #[arg(long, value_name = "PATH")]
    sprites: Option<PathBuf>,

    /// Seed for spawn batch sizes and enemy speeds.
    #[arg(long)]
    seed: Option<u64>,

    /// Number of ticks to simulate.
    #[arg(long, default_value_t = 1200)]
    ticks: u64,

    /// Pace ticks against the wall clock instead of running flat out.
    #[arg(long)]
    realtime: bool,

    /// Write the effective settings back to the config file and exit.
    #[arg(long)]
    write_config: bool,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    if let Err(e) = run(&cli) {
        error!("{e}");
        std::process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<(), GameError> {
    let mut config = GameConfig::with_path(&cli.config);
    match config.load_from_file() {
        Ok(()) => {}
        Err(ConfigError::Load { path, message }) => {
            warn!("Using default config, could not load {}: {}", path.display(), message);
        }
        Err(e) => return Err(e.into()),
    }
    if cli.write_config {
        config.save_to_file()?;
        return Ok(());
    }

    let sprites = match &cli.sprites {
        Some(path) => SpriteStore::load_from_file(path)?,
        None => SpriteStore::builtin(config.tile_size),
    };
    let level = LevelMap::load_from_file(&cli.level)?;
    let rng = cli.seed.map_or_else(SimRng::default, SimRng::with_seed);
    let fps = config.target_fps;
    let start = Vec2::new(config.player_start_x, config.player_start_y);

    let mut sim = Simulation::new(config, sprites, &level, rng)?;
    let mut input = ScriptedInput::wander(cli.ticks, start, 90);
    let mut renderer = TallyRenderer::default();

    let ticks = if cli.realtime {
        sim.run(&mut input, &mut renderer, &mut RealtimePacer::new(fps), Some(cli.ticks))
    } else {
        sim.run(&mut input, &mut renderer, &mut FixedPacer::from_fps(fps), Some(cli.ticks))
    };

    let world = sim.world_mut();
    let enemies = world.query::<&Enemy>().iter(world).count();
    info!(
        "Simulated {} ticks: {} enemies alive, player at {:?}",
        ticks,
        enemies,
        sim.player_position()
    );
    Ok(())
}
