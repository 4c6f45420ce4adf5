//! `repl::movement` module
//!
//! Contains repl loop handlers for commands that change player location

use crate::story;
use crate::{Direction, MysteryWorld, Phase, View, ViewItem};

use anyhow::Result;
use log::info;

/// Move the player to the neighboring room in `direction`, if there is one.
///
/// Entering the gate room requires holding as many clues as exist in the world.
/// Getting in moves the game on to the accusation.
///
/// # Errors
/// - if the player's current room can't be found
pub fn move_to_handler(world: &mut MysteryWorld, view: &mut View, direction: Direction) -> Result<()> {
    let current_room = world.player_room_ref()?;
    let leaving = current_room.name.clone();
    let Some(destination_id) = current_room.exit(direction) else {
        view.push(ViewItem::ActionFailure(story::NO_EXIT.to_string()));
        info!("{} found no exit {direction} from {leaving}", world.player.name);
        return Ok(());
    };
    let destination = world.room(destination_id)?.name.clone();

    if destination_id == world.gate_room {
        if !world.has_all_clues() {
            view.push(ViewItem::ActionFailure(story::gate_denied(world.clue_total())));
            info!(
                "{} denied access to {destination}: holding {} of {} clues",
                world.player.name,
                world.player.clue_count(),
                world.clue_total()
            );
            return Ok(());
        }
        view.push(ViewItem::TransitionMessage(story::GATE_OPEN.to_string()));
        world.set_phase(Phase::Accusing);
    }

    world.player.location = destination_id;
    info!("{} moved {direction} from {leaving} to {destination}", world.player.name);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::load_world;

    fn exploring_world() -> MysteryWorld {
        let mut world = load_world().unwrap();
        world.set_phase(Phase::Exploring);
        world
    }

    fn room_name(world: &MysteryWorld) -> &str {
        &world.player_room_ref().unwrap().name
    }

    fn collect_everything(world: &mut MysteryWorld) {
        for room in &mut world.rooms {
            room.contents.clear();
        }
        for clue in world.all_clues.clone() {
            world.player.add_clue(clue);
        }
    }

    #[test]
    fn moves_along_existing_exits() {
        let mut world = exploring_world();
        let mut view = View::new();
        move_to_handler(&mut world, &mut view, Direction::West).unwrap();
        assert_eq!(room_name(&world), "Hallway");
        move_to_handler(&mut world, &mut view, Direction::North).unwrap();
        assert_eq!(room_name(&world), "Master Bedroom");
        assert_eq!(view.items.len(), 0);
    }

    #[test]
    fn missing_exit_leaves_player_in_place() {
        let mut world = exploring_world();
        let mut view = View::new();
        move_to_handler(&mut world, &mut view, Direction::South).unwrap();
        assert_eq!(room_name(&world), "Foyer");
        assert!(
            view.view_items()
                .any(|item| *item == ViewItem::ActionFailure(story::NO_EXIT.to_string()))
        );
    }

    #[test]
    fn lounge_is_barred_without_every_clue() {
        let mut world = exploring_world();
        let mut view = View::new();
        world.player.location = world.room_by_symbol("study").unwrap().id;

        move_to_handler(&mut world, &mut view, Direction::North).unwrap();
        assert_eq!(room_name(&world), "Study");
        assert!(world.phase.is_exploring());
        assert!(view.view_items().any(|item| {
            matches!(item, ViewItem::ActionFailure(msg) if msg.contains("You need all 6 clues first"))
        }));
    }

    #[test]
    fn five_clues_are_not_enough() {
        let mut world = exploring_world();
        let mut view = View::new();
        world.player.location = world.room_by_symbol("study").unwrap().id;
        for clue in world.all_clues.clone().into_iter().take(5) {
            world.player.add_clue(clue);
        }
        move_to_handler(&mut world, &mut view, Direction::North).unwrap();
        assert_eq!(room_name(&world), "Study");
    }

    #[test]
    fn all_clues_open_the_lounge_and_start_the_accusation() {
        let mut world = exploring_world();
        let mut view = View::new();
        world.player.location = world.room_by_symbol("study").unwrap().id;
        collect_everything(&mut world);

        move_to_handler(&mut world, &mut view, Direction::North).unwrap();
        assert_eq!(room_name(&world), "Lounge");
        assert!(world.phase.is_accusing());
        assert!(view.view_items().any(ViewItem::is_transition_message));
    }
}
