//! Room definitions and the exit graph.
//!
//! Rooms are stored in the world's room arena and linked to one another by
//! [`RoomId`] handles. Each room has at most one exit per [`Direction`], and
//! exits are directed: a way in does not imply a way back out.

use std::collections::BTreeSet;
use std::fmt;

use anyhow::Result;

use crate::{Item, ItemHolder, ItemId, MysteryWorld, View, ViewItem};

/// Stable handle for a `Room` in the world's room arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RoomId(pub(crate) usize);

impl RoomId {
    /// Position of the room in the arena.
    pub fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for RoomId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "room#{}", self.0)
    }
}

/// The four ways out of a room.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    North,
    South,
    East,
    West,
}

impl Direction {
    /// Every direction, in the order exits are listed.
    pub const ALL: [Direction; 4] = [Direction::North, Direction::South, Direction::East, Direction::West];

    /// Parse a lowercase direction token such as `"north"`.
    pub fn from_token(token: &str) -> Option<Direction> {
        match token {
            "north" => Some(Direction::North),
            "south" => Some(Direction::South),
            "east" => Some(Direction::East),
            "west" => Some(Direction::West),
            _ => None,
        }
    }

    /// The lowercase token a player types.
    pub fn token(self) -> &'static str {
        match self {
            Direction::North => "north",
            Direction::South => "south",
            Direction::East => "east",
            Direction::West => "west",
        }
    }

    /// Title case label used when listing exits.
    pub fn label(self) -> &'static str {
        match self {
            Direction::North => "North",
            Direction::South => "South",
            Direction::East => "East",
            Direction::West => "West",
        }
    }

    fn slot(self) -> usize {
        match self {
            Direction::North => 0,
            Direction::South => 1,
            Direction::East => 2,
            Direction::West => 3,
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}

/// Any visitable location in the house.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Room {
    pub id: RoomId,
    pub symbol: String,
    pub name: String,
    pub description: String,
    exits: [Option<RoomId>; 4],
    pub contents: BTreeSet<ItemId>,
}

impl ItemHolder for Room {
    fn add_item(&mut self, item_id: ItemId) {
        self.contents.insert(item_id);
    }

    fn remove_item(&mut self, item_id: ItemId) -> bool {
        self.contents.remove(&item_id)
    }

    fn contains_item(&self, item_id: ItemId) -> bool {
        self.contents.contains(&item_id)
    }
}

impl Room {
    /// Create a room with no exits and nothing in it.
    pub fn new(id: RoomId, symbol: impl Into<String>, name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            id,
            symbol: symbol.into(),
            name: name.into(),
            description: description.into(),
            exits: [None; 4],
            contents: BTreeSet::new(),
        }
    }

    /// Link this room to `to` in the given direction, returning any exit it replaced.
    pub fn set_exit(&mut self, direction: Direction, to: RoomId) -> Option<RoomId> {
        self.exits[direction.slot()].replace(to)
    }

    /// Where the exit in `direction` leads, if there is one.
    pub fn exit(&self, direction: Direction) -> Option<RoomId> {
        self.exits[direction.slot()]
    }

    /// All exits, in North, South, East, West order.
    pub fn exits(&self) -> impl Iterator<Item = (Direction, RoomId)> + '_ {
        Direction::ALL
            .into_iter()
            .filter_map(|dir| self.exit(dir).map(|to| (dir, to)))
    }

    /// Find an item lying in this room whose full name matches normalized input.
    pub fn find_item<'a>(&self, items: &'a [Item], normalized: &str) -> Option<&'a Item> {
        self.contents
            .iter()
            .filter_map(|id| items.get(id.index()))
            .find(|item| item.answers_to(normalized))
    }

    /// Pushes the room's name, description, visible items and exits to the view.
    ///
    /// # Errors
    /// Returns an error if the room holds an item id missing from the world.
    pub fn show(&self, world: &MysteryWorld, view: &mut View) -> Result<()> {
        view.push(ViewItem::RoomDescription {
            name: self.name.clone(),
            description: self.description.clone(),
        });

        if !self.contents.is_empty() {
            let mut item_names = Vec::with_capacity(self.contents.len());
            for item_id in &self.contents {
                item_names.push(world.item(*item_id)?.name.clone());
            }
            view.push(ViewItem::RoomItems(item_names));
        }

        // the exit line is always shown, even for a room with no way out
        view.push(ViewItem::RoomExits(self.exits().map(|(dir, _)| dir).collect()));
        Ok(())
    }
}
