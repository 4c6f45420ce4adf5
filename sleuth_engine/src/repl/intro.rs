//! `repl::intro` module
//!
//! The opening scene and the magnifying glass gate that precedes exploration.

use crate::repl::{InputEvent, LineSource, quit_handler};
use crate::story;
use crate::style::GameStyle;
use crate::{MysteryWorld, Phase, View, ViewItem};

use anyhow::{Context, Result};
use log::info;

/// Push the title, the starting room, the welcome and the how-to-play block.
///
/// # Errors
/// - if the player's starting room can't be found
pub fn show_opening(world: &MysteryWorld, view: &mut View) -> Result<()> {
    view.push(ViewItem::Banner(format!("--- {} ---", world.title)));
    world.player_room_ref()?.show(world, view)?;
    for paragraph in story::WELCOME {
        view.push(ViewItem::Narrative((*paragraph).to_string()));
    }
    view.push(ViewItem::Help(
        story::HOW_TO_PLAY.iter().map(ToString::to_string).collect(),
    ));
    Ok(())
}

/// True if `input` is the intro passphrase, ignoring case and surrounding whitespace.
pub fn passes_intro_gate(input: &str) -> bool {
    input.trim().eq_ignore_ascii_case(story::INTRO_PASSPHRASE)
}

/// Handle one line typed at the intro prompt.
pub fn intro_handler(world: &mut MysteryWorld, view: &mut View, input: &str) {
    if passes_intro_gate(input) {
        for line in story::intro_success(world.clue_total()) {
            view.push(ViewItem::Narrative(line));
        }
        info!("{} passed the intro gate", world.player.name);
        world.set_phase(Phase::Exploring);
    } else {
        view.push(ViewItem::Error(story::INTRO_RETRY.to_string()));
    }
}

/// Prompt until the passphrase is given. There is no `quit` here; only closing the
/// input stream (or Ctrl-C) abandons the session.
///
/// # Errors
/// - if reading input fails at the stream level
pub fn intro_gate(world: &mut MysteryWorld, view: &mut View, input: &mut dyn LineSource) -> Result<()> {
    let prompt = story::INTRO_PROMPT.prompt_style().to_string();
    while world.phase.is_intro() {
        match input.read_line(&prompt).context("while reading the intro answer")? {
            InputEvent::Line(line) => intro_handler(world, view, &line),
            InputEvent::Eof | InputEvent::Interrupted => {
                info!("input closed during the intro");
                quit_handler(world, view);
            },
        }
        view.flush();
    }
    Ok(())
}
