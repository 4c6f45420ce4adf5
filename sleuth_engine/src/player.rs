//! Player -- the detective working the case
use crate::{ItemId, RoomId};

/// The detective: where they stand and the clues they carry, in pickup order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Player {
    pub name: String,
    pub location: RoomId,
    pub inventory: Vec<ItemId>,
}

impl Player {
    pub fn new(name: impl Into<String>, location: RoomId) -> Self {
        Self {
            name: name.into(),
            location,
            inventory: Vec::new(),
        }
    }

    /// Number of clues collected so far.
    pub fn clue_count(&self) -> usize {
        self.inventory.len()
    }

    /// Append a clue to the inventory. Clues are never given up once held.
    pub fn add_clue(&mut self, item_id: ItemId) {
        if !self.has_clue(item_id) {
            self.inventory.push(item_id);
        }
    }

    pub fn has_clue(&self, item_id: ItemId) -> bool {
        self.inventory.contains(&item_id)
    }
}
