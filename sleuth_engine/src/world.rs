//! Data structures representing the game world.
//!
//! This module defines [`MysteryWorld`], the single session object that owns
//! every room, item and the player, along with the current [`Phase`] of play.

use crate::{Item, ItemId, Player, Room, RoomId};

use anyhow::{Result, anyhow};
use log::info;
use variantly::Variantly;

/// Where the session stands. Play only ever moves forward through these.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Variantly)]
pub enum Phase {
    #[default]
    Intro,
    Exploring,
    Accusing,
    Ended,
}

/// The two people held in the lounge.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Suspect {
    Duncan,
    Justin,
}

impl Suspect {
    /// Match a typed accusation (case-insensitive, surrounding whitespace ignored).
    pub fn from_input(input: &str) -> Option<Suspect> {
        match input.trim().to_lowercase().as_str() {
            "duncan" => Some(Suspect::Duncan),
            "justin" => Some(Suspect::Justin),
            _ => None,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Suspect::Duncan => "Duncan",
            Suspect::Justin => "Justin",
        }
    }
}

/// Complete state of a running game.
///
/// Built once by the loader and mutated by the REPL handlers until the phase
/// reaches [`Phase::Ended`].
#[derive(Debug, Clone)]
pub struct MysteryWorld {
    pub title: String,
    pub rooms: Vec<Room>,
    pub items: Vec<Item>,
    pub player: Player,
    /// Every clue that exists, fixed at setup.
    pub all_clues: Vec<ItemId>,
    /// The room that can only be entered holding every clue.
    pub gate_room: RoomId,
    pub phase: Phase,
    pub verdict: Option<Suspect>,
}

impl MysteryWorld {
    /// Look up a room by id.
    /// # Errors
    /// - if the id is not in the room arena
    pub fn room(&self, room_id: RoomId) -> Result<&Room> {
        self.rooms
            .get(room_id.index())
            .ok_or_else(|| anyhow!("room id ({room_id}) not found in world"))
    }

    /// Look up a room by id for mutation.
    /// # Errors
    /// - if the id is not in the room arena
    pub fn room_mut(&mut self, room_id: RoomId) -> Result<&mut Room> {
        self.rooms
            .get_mut(room_id.index())
            .ok_or_else(|| anyhow!("room id ({room_id}) not found in world"))
    }

    /// Look up an item by id.
    /// # Errors
    /// - if the id is not in the item arena
    pub fn item(&self, item_id: ItemId) -> Result<&Item> {
        self.items
            .get(item_id.index())
            .ok_or_else(|| anyhow!("item id ({item_id}) not found in world"))
    }

    /// Obtain a reference to the room the player occupies.
    /// # Errors
    /// - if the player's room id is not found
    pub fn player_room_ref(&self) -> Result<&Room> {
        self.room(self.player.location)
    }

    /// Obtain a mutable reference to the room the player occupies.
    /// # Errors
    /// - if the player's room id is not found
    pub fn player_room_mut(&mut self) -> Result<&mut Room> {
        self.room_mut(self.player.location)
    }

    pub fn room_by_symbol(&self, symbol: &str) -> Option<&Room> {
        self.rooms.iter().find(|room| room.symbol == symbol)
    }

    pub fn item_by_symbol(&self, symbol: &str) -> Option<&Item> {
        self.items.iter().find(|item| item.symbol == symbol)
    }

    /// How many clues exist in the world.
    pub fn clue_total(&self) -> usize {
        self.all_clues.len()
    }

    /// The gate condition: the player holds as many clues as exist.
    pub fn has_all_clues(&self) -> bool {
        self.player.clue_count() == self.clue_total()
    }

    /// Count of clues still lying in rooms.
    pub fn clues_in_rooms(&self) -> usize {
        self.rooms.iter().map(|room| room.contents.len()).sum()
    }

    /// Advance to a new phase of play.
    pub fn set_phase(&mut self, phase: Phase) {
        if self.phase != phase {
            info!("phase change: {:?} -> {:?}", self.phase, phase);
            self.phase = phase;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::load_world;

    #[test]
    fn suspect_from_input_ignores_case_and_padding() {
        assert_eq!(Suspect::from_input("  DUNCAN "), Some(Suspect::Duncan));
        assert_eq!(Suspect::from_input("justin"), Some(Suspect::Justin));
        assert_eq!(Suspect::from_input("the butler"), None);
        assert_eq!(Suspect::from_input(""), None);
    }

    #[test]
    fn new_world_starts_in_intro_at_the_foyer() {
        let world = load_world().unwrap();
        assert!(world.phase.is_intro());
        assert_eq!(world.player_room_ref().unwrap().name, "Foyer");
        assert!(world.verdict.is_none());
    }

    #[test]
    fn clue_counts_balance_at_start() {
        let world = load_world().unwrap();
        assert_eq!(world.clue_total(), 6);
        assert_eq!(world.clues_in_rooms() + world.player.clue_count(), 6);
        assert!(!world.has_all_clues());
    }

    #[test]
    fn lookups_report_unknown_ids() {
        let world = load_world().unwrap();
        assert!(world.room(RoomId(99)).is_err());
        assert!(world.item(ItemId(99)).is_err());
    }

    #[test]
    fn set_phase_moves_forward() {
        let mut world = load_world().unwrap();
        world.set_phase(Phase::Exploring);
        assert!(world.phase.is_exploring());
        world.set_phase(Phase::Ended);
        assert!(world.phase.is_ended());
    }
}
