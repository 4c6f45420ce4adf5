//! `repl::accusation` module
//!
//! The final scene in the lounge: the player names a suspect and the case closes.

use crate::repl::{InputEvent, LineSource, quit_handler};
use crate::story;
use crate::style::GameStyle;
use crate::{MysteryWorld, Phase, Suspect, View, ViewItem};

use anyhow::{Context, Result};
use log::info;

/// The closing narrative for an accusation.
pub fn verdict_text(suspect: Suspect) -> &'static [&'static str] {
    match suspect {
        Suspect::Duncan => story::DUNCAN_BRANCH,
        Suspect::Justin => story::JUSTIN_BRANCH,
    }
}

/// Set the scene in the lounge: room, the detective's entrance, and the question.
///
/// # Errors
/// - if the player's room can't be found
pub fn accusation_scene(world: &MysteryWorld, view: &mut View) -> Result<()> {
    let room = world.player_room_ref()?;
    view.push(ViewItem::RoomDescription {
        name: room.name.clone(),
        description: room.description.clone(),
    });
    for line in story::DETECTIVE_ENTERS {
        view.push(ViewItem::Narrative((*line).to_string()));
    }
    Ok(())
}

/// Handle one line typed at the accusation prompt. Only a suspect's name resolves it.
pub fn accusation_handler(world: &mut MysteryWorld, view: &mut View, input: &str) {
    let Some(suspect) = Suspect::from_input(input) else {
        view.push(ViewItem::Error(story::ACCUSE_RETRY.to_string()));
        return;
    };
    for line in verdict_text(suspect) {
        view.push(ViewItem::Narrative((*line).to_string()));
    }
    info!("{} accused {}", world.player.name, suspect.name());
    world.verdict = Some(suspect);
    world.set_phase(Phase::Ended);
}

/// Run the accusation dialogue until a suspect is named.
///
/// Like the intro, there is no `quit` here; closing the input stream (or Ctrl-C)
/// ends the session with no verdict.
///
/// # Errors
/// - if the player's room can't be found
/// - if reading input fails at the stream level
pub fn run_accusation(world: &mut MysteryWorld, view: &mut View, input: &mut dyn LineSource) -> Result<()> {
    accusation_scene(world, view)?;
    view.flush();

    let prompt = format!("\n{}", story::ACCUSE_PROMPT.prompt_style());
    while world.phase.is_accusing() {
        match input.read_line(&prompt).context("while reading the accusation")? {
            InputEvent::Line(line) => accusation_handler(world, view, &line),
            InputEvent::Eof | InputEvent::Interrupted => {
                info!("input closed during the accusation");
                quit_handler(world, view);
            },
        }
        view.flush();
    }
    Ok(())
}
