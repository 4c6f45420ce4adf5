//! `repl::inventory` module
//!
//! Contains repl loop handlers for commands that affect player inventory

use crate::repl::invalid_command_handler;
use crate::{ItemHolder, ItemId, MysteryWorld, View, ViewItem};

use anyhow::Result;
use log::{info, warn};

/// Removes the named item from the current room and adds it to inventory.
///
/// `name` is the lowercased item name produced by the command parser. Items cannot
/// be put back, so once taken the name no longer means anything in that room.
///
/// # Errors
/// - if the player's current room or the item can't be found
pub fn take_handler(world: &mut MysteryWorld, view: &mut View, name: &str) -> Result<()> {
    let found = world
        .player_room_ref()?
        .find_item(&world.items, name)
        .map(|item| item.id);
    let Some(item_id) = found else {
        warn!("take requested for '{name}', which isn't in the current room");
        invalid_command_handler(view);
        return Ok(());
    };

    if !pick_up_clue(world, item_id)? {
        warn!("{item_id} matched '{name}' but could not be removed from the room");
        invalid_command_handler(view);
        return Ok(());
    }

    let item = world.item(item_id)?;
    view.push(ViewItem::ItemTaken {
        name: item.name.clone(),
        description: item.description.clone(),
    });
    info!(
        "{} took the {} ({}) -- {} of {} clues",
        world.player.name,
        item.name,
        item_id,
        world.player.clue_count(),
        world.clue_total()
    );
    Ok(())
}

/// Move a clue out of the player's room and onto the end of their inventory.
/// Returns false, changing nothing, if the clue isn't lying in that room.
///
/// # Errors
/// - if the player's current room can't be found
pub fn pick_up_clue(world: &mut MysteryWorld, item_id: ItemId) -> Result<bool> {
    if !world.player_room_mut()?.remove_item(item_id) {
        return Ok(false);
    }
    world.player.add_clue(item_id);
    Ok(true)
}

/// Show the clues collected so far, in the order they were found.
///
/// # Errors
/// - if an inventory id doesn't resolve to an item
pub fn inv_handler(world: &MysteryWorld, view: &mut View) -> Result<()> {
    let mut names = Vec::with_capacity(world.player.inventory.len());
    for item_id in &world.player.inventory {
        names.push(world.item(*item_id)?.name.clone());
    }
    view.push(ViewItem::Inventory(names));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Phase, load_world};

    fn world_in(symbol: &str) -> MysteryWorld {
        let mut world = load_world().unwrap();
        world.set_phase(Phase::Exploring);
        world.player.location = world.room_by_symbol(symbol).unwrap().id;
        world
    }

    #[test]
    fn take_moves_item_from_room_to_inventory() {
        let mut world = world_in("master_bedroom");
        let mut view = View::new();
        take_handler(&mut world, &mut view, "letter").unwrap();

        let letter = world.item_by_symbol("letter").unwrap().id;
        assert_eq!(world.player.inventory, vec![letter]);
        assert!(!world.player_room_ref().unwrap().contains_item(letter));
        assert_eq!(world.clues_in_rooms() + world.player.clue_count(), 6);
        assert!(view.view_items().any(|item| {
            matches!(item, ViewItem::ItemTaken { name, .. } if name == "Letter")
        }));
    }

    #[test]
    fn taking_twice_is_an_invalid_command() {
        let mut world = world_in("study");
        let mut view = View::new();
        take_handler(&mut world, &mut view, "handkerchief").unwrap();
        take_handler(&mut world, &mut view, "handkerchief").unwrap();
        assert_eq!(world.player.clue_count(), 1);
        assert_eq!(view.view_items().filter(|item| item.is_error()).count(), 1);
    }

    #[test]
    fn clue_lying_elsewhere_is_not_picked_up() {
        let mut world = world_in("foyer");
        let letter = world.item_by_symbol("letter").unwrap().id;

        assert!(!pick_up_clue(&mut world, letter).unwrap());
        assert!(world.player.inventory.is_empty());
        assert!(world.room_by_symbol("master_bedroom").unwrap().contains_item(letter));
        assert_eq!(world.clues_in_rooms(), 6);

        world.player.location = world.room_by_symbol("master_bedroom").unwrap().id;
        assert!(pick_up_clue(&mut world, letter).unwrap());
        assert!(!pick_up_clue(&mut world, letter).unwrap());
        assert_eq!(world.player.inventory, vec![letter]);
        assert_eq!(world.clues_in_rooms() + world.player.clue_count(), 6);
    }

    #[test]
    fn inventory_lists_in_pickup_order() {
        let mut world = world_in("hallway");
        let mut view = View::new();
        take_handler(&mut world, &mut view, "police report").unwrap();
        world.player.location = world.room_by_symbol("study").unwrap().id;
        take_handler(&mut world, &mut view, "handkerchief").unwrap();

        let mut view = View::new();
        inv_handler(&world, &mut view).unwrap();
        assert_eq!(
            view.view_items().next(),
            Some(&ViewItem::Inventory(vec!["Police Report".into(), "Handkerchief".into()]))
        );
    }

    #[test]
    fn empty_inventory_is_reported() {
        let world = world_in("foyer");
        let mut view = View::new();
        inv_handler(&world, &mut view).unwrap();
        assert_eq!(view.view_items().next(), Some(&ViewItem::Inventory(Vec::new())));
    }
}
