//! Command module
//!
//! Describes the commands a player can issue while exploring the house, and
//! turns a raw input line into one of them.
use log::debug;
use variantly::Variantly;

use crate::{Direction, MysteryWorld};

/// Commands that can be executed by the player.
///
/// Every input line maps to exactly one of these; anything unrecognized is `Invalid`.
#[derive(Debug, Clone, PartialEq, Eq, Variantly)]
pub enum Command {
    Inventory,
    Invalid,
    Look,
    MoveTo(Direction),
    Quit,
    /// Holds the lowercased name of an item in the player's room.
    TakeItem(String),
}

/// Trim and lowercase raw input.
pub fn normalize(input: &str) -> String {
    input.trim().to_lowercase()
}

/// Parses an input line into a `Command`.
///
/// Keywords win over item names; an item name only counts if the item is lying in
/// the player's current room, and must match the whole name.
pub fn parse_command(input: &str, world: &MysteryWorld) -> Command {
    let normalized = normalize(input);
    let command = if let Some(direction) = Direction::from_token(&normalized) {
        Command::MoveTo(direction)
    } else {
        match normalized.as_str() {
            "inventory" => Command::Inventory,
            "look" => Command::Look,
            "quit" => Command::Quit,
            _ => world
                .player_room_ref()
                .ok()
                .and_then(|room| room.find_item(&world.items, &normalized))
                .map_or(Command::Invalid, |item| Command::TakeItem(item.key())),
        }
    };
    debug!("parsed input {normalized:?} as {command:?}");
    command
}
