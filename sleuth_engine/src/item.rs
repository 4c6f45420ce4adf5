//! Item types and related helpers.
//!
//! Items are the clues scattered around the house. Each one lives in the
//! world's item arena and is referred to everywhere else by its [`ItemId`].
//! Rooms and the player only hold ids, so taking an item means moving its id
//! out of a room ([`ItemHolder`]) and onto the end of the player's inventory.

use std::fmt;

/// Stable handle for an `Item` in the world's item arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ItemId(pub(crate) usize);

impl ItemId {
    /// Position of the item in the arena.
    pub fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "item#{}", self.0)
    }
}

/// A clue the player can pick up. Immutable once the world is built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Item {
    /// Arena handle of this item.
    pub id: ItemId,
    /// The symbol used to refer to this item in world data.
    pub symbol: String,
    /// The display name of the item.
    pub name: String,
    /// What the player reads when picking it up.
    pub description: String,
}

impl Item {
    pub fn new(id: ItemId, symbol: impl Into<String>, name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            id,
            symbol: symbol.into(),
            name: name.into(),
            description: description.into(),
        }
    }

    /// The key players type to refer to this item: its full name, lowercased.
    pub fn key(&self) -> String {
        self.name.to_lowercase()
    }

    /// Returns true if already-normalized input names this item exactly.
    pub fn answers_to(&self, normalized: &str) -> bool {
        self.key() == normalized
    }
}

/// A place items can lie in and be taken from.
pub trait ItemHolder {
    fn add_item(&mut self, item_id: ItemId);
    /// Removes the item, returning false if it wasn't held here.
    fn remove_item(&mut self, item_id: ItemId) -> bool;
    fn contains_item(&self, item_id: ItemId) -> bool;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn item_answers_to_full_lowercase_name_only() {
        let item = Item::new(ItemId(0), "red_ink_vial", "Red Ink Vial", "An almost empty vial.");
        assert!(item.answers_to("red ink vial"));
        assert!(!item.answers_to("red ink"));
        assert!(!item.answers_to("Red Ink Vial"));
    }

    #[test]
    fn item_id_displays_index() {
        assert_eq!(ItemId(4).to_string(), "item#4");
        assert_eq!(ItemId(4).index(), 4);
    }
}
