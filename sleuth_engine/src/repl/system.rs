//! `repl::system` module
//!
//! Contains repl loop handlers for commands that don't touch the house itself.

use crate::story;
use crate::{MysteryWorld, Phase, View, ViewItem};

use log::{debug, info};

/// Quit the game.
pub fn quit_handler(world: &mut MysteryWorld, view: &mut View) {
    info!(
        "{} left the case holding {} of {} clues",
        world.player.name,
        world.player.clue_count(),
        world.clue_total()
    );
    info!("ending inventory:");
    world
        .player
        .inventory
        .iter()
        .filter_map(|id| world.item(*id).ok())
        .for_each(|item| info!("- {} ({})", item.name, item.id));

    view.push(ViewItem::EngineMessage(story::QUIT_MESSAGE.to_string()));
    world.set_phase(Phase::Ended);
}

/// The room is already shown at the top of every turn, so there's nothing to add.
pub fn look_handler(world: &MysteryWorld) {
    debug!("look at room {}", world.player.location);
}

/// Feedback for input that isn't a command or an item here.
pub fn invalid_command_handler(view: &mut View) {
    view.push(ViewItem::Error(story::INVALID_COMMAND.to_string()));
}

/// Sign-off shown once the session is over, however it ended.
pub fn closing_handler(world: &MysteryWorld, view: &mut View) {
    match world.verdict {
        Some(suspect) => info!("case closed: {} accused", suspect.name()),
        None => info!("case closed without an accusation"),
    }
    view.push(ViewItem::EngineMessage(story::CLOSING.to_string()));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::load_world;

    #[test]
    fn quit_ends_the_game() {
        let mut world = load_world().unwrap();
        world.set_phase(Phase::Exploring);
        let mut view = View::new();
        quit_handler(&mut world, &mut view);
        assert!(world.phase.is_ended());
        assert_eq!(
            view.view_items().next(),
            Some(&ViewItem::EngineMessage(story::QUIT_MESSAGE.to_string()))
        );
    }

    #[test]
    fn invalid_command_reports_an_error() {
        let mut view = View::new();
        invalid_command_handler(&mut view);
        assert_eq!(
            view.view_items().next(),
            Some(&ViewItem::Error(story::INVALID_COMMAND.to_string()))
        );
    }
}
