//! REPL and command handling utilities.
//!
//! A session runs in three interactive stretches: the intro gate, the
//! exploration read-eval-print loop, and the accusation in the lounge. This
//! module drives them in order; its submodules implement the handlers that
//! manipulate the [`MysteryWorld`].

pub mod accusation;
mod input;
pub mod intro;
pub mod inventory;
pub mod movement;
pub mod system;

pub use accusation::*;
pub use input::{InputEvent, InputManager, LineSource, ReaderInput, ScriptedInput};
pub use intro::*;
pub use inventory::*;
pub use movement::*;
pub use system::*;

use crate::command::{Command, parse_command};
use crate::story;
use crate::style::GameStyle;
use crate::{MysteryWorld, View, ViewItem};

use anyhow::{Context, Result};
use log::info;

/// Play a full session: opening, intro gate, exploration, and (if reached) the accusation.
///
/// # Errors
/// - if reading input fails at the stream level
/// - on an internally inconsistent world (a room or item id that doesn't exist)
pub fn run_game(world: &mut MysteryWorld, input: &mut dyn LineSource) -> Result<()> {
    let mut view = View::new();

    show_opening(world, &mut view)?;
    view.flush();
    intro_gate(world, &mut view, input)?;
    run_repl(world, &mut view, input)?;

    closing_handler(world, &mut view);
    view.flush();
    Ok(())
}

/// Run the exploration read-eval-print loop until the game ends.
///
/// Each pass shows the current room, reads one command, and dispatches it. A move
/// through the lounge gate hands control to the accusation before the next pass.
///
/// # Errors
/// - Propagates failures from handlers and from the input stream.
pub fn run_repl(world: &mut MysteryWorld, view: &mut View, input: &mut dyn LineSource) -> Result<()> {
    #[allow(clippy::enum_glob_use)]
    use Command::*;

    let prompt = format!("\n{}", story::ACTION_PROMPT.prompt_style());
    let mut turn = 0;
    while world.phase.is_exploring() {
        turn += 1;
        info!("================> BEGIN TURN {turn} <================");

        world.player_room_ref()?.show(world, view)?;
        view.flush();

        let line = match input.read_line(&prompt).context("while reading a command")? {
            InputEvent::Line(line) => line,
            InputEvent::Eof => "quit".to_string(),
            InputEvent::Interrupted => {
                view.push(ViewItem::EngineMessage(story::COMMAND_CANCELED.to_string()));
                view.flush();
                continue;
            },
        };

        match parse_command(&line, world) {
            MoveTo(direction) => move_to_handler(world, view, direction)?,
            Inventory => inv_handler(world, view)?,
            Look => look_handler(world),
            Quit => quit_handler(world, view),
            TakeItem(name) => take_handler(world, view, &name)?,
            Invalid => invalid_command_handler(view),
        }
        view.flush();

        if world.phase.is_accusing() {
            run_accusation(world, view, input)?;
        }
    }
    Ok(())
}
