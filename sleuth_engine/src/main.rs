#![warn(clippy::pedantic)]
#![allow(clippy::must_use_candidate)]
//! ** Sleuth **
//! A murder mystery in Sir Augustus's house

use sleuth_engine::repl::InputManager;
use sleuth_engine::{load_world, run_game};

use anyhow::{Context, Result};
use log::info;

fn main() -> Result<()> {
    env_logger::init();
    info!("Start: loading the house...");
    let mut world = load_world().context("while loading MysteryWorld")?;
    info!("MysteryWorld loaded successfully.");

    let mut input = InputManager::new();
    info!("Starting the game!");
    run_game(&mut world, &mut input)?;

    info!("session over in phase {:?}", world.phase);
    Ok(())
}
