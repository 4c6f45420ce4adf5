//! Loader for building a `MysteryWorld` from serialized data.
//!
//! The house, its clues and the links between rooms are authored in
//! `data/world.toml`, which is compiled into the binary. Loading deserializes
//! that definition, validates every cross-reference, and then builds the room
//! and item arenas in a single pass.

use std::collections::{BTreeMap, HashMap, HashSet};

use anyhow::{Context, Result, anyhow, bail};
use log::info;
use serde::Deserialize;
use thiserror::Error;

use crate::{Direction, Item, ItemHolder, ItemId, MysteryWorld, Phase, Player, Room, RoomId};

/// The built-in world definition.
const WORLD_TOML: &str = include_str!("../data/world.toml");

/// Top level of a world definition file.
#[derive(Debug, Clone, Deserialize)]
pub struct WorldDef {
    pub game: GameDef,
    #[serde(default)]
    pub rooms: Vec<RoomDef>,
    #[serde(default)]
    pub items: Vec<ItemDef>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct GameDef {
    pub title: String,
    pub player: String,
    pub start_room: String,
    pub gate_room: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RoomDef {
    pub id: String,
    pub name: String,
    pub desc: String,
    /// direction token -> destination room id
    #[serde(default)]
    pub exits: BTreeMap<String, String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ItemDef {
    pub id: String,
    pub name: String,
    pub desc: String,
    /// Room the item starts in.
    pub room: String,
}

/// Problems found while validating a `WorldDef`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WorldDataError {
    #[error("duplicate {kind} id '{id}'")]
    DuplicateId { kind: &'static str, id: String },
    #[error("duplicate item name '{0}' (names must differ ignoring case)")]
    DuplicateItemName(String),
    #[error("missing room '{id}' ({context})")]
    MissingRoom { id: String, context: String },
    #[error("unknown direction '{direction}' in exits of room '{room}'")]
    UnknownDirection { room: String, direction: String },
    #[error("world defines no clues")]
    NoClues,
}

/// Load the built-in world.
///
/// # Errors
/// Only if the embedded world data is malformed.
pub fn load_world() -> Result<MysteryWorld> {
    load_world_from_str(WORLD_TOML).context("while loading the built-in world")
}

/// Load a world from TOML source.
///
/// # Errors
/// Errors bubble up from deserialization, validation, or missing references.
pub fn load_world_from_str(source: &str) -> Result<MysteryWorld> {
    let def: WorldDef = toml::from_str(source).context("while parsing world definition")?;
    validate_worlddef(&def)?;
    let world = build_world_from_def(&def).context("while building world from definition")?;
    info!("{} rooms added to MysteryWorld", world.rooms.len());
    info!("{} clues added to MysteryWorld", world.items.len());
    info!(
        "player \"{}\" starts in {}",
        world.player.name,
        world.player_room_ref()?.name
    );
    Ok(world)
}

/// Check cross-references and basic invariants in a `WorldDef`, returning every problem found.
pub fn validate_world(def: &WorldDef) -> Vec<WorldDataError> {
    let mut errors = Vec::new();

    let mut room_ids = HashSet::new();
    for room in &def.rooms {
        if !room_ids.insert(room.id.as_str()) {
            errors.push(WorldDataError::DuplicateId {
                kind: "room",
                id: room.id.clone(),
            });
        }
    }

    let check_room = |id: &str, context: String, errors: &mut Vec<WorldDataError>| {
        if !room_ids.contains(id) {
            errors.push(WorldDataError::MissingRoom {
                id: id.to_string(),
                context,
            });
        }
    };

    check_room(def.game.start_room.as_str(), "game.start_room".into(), &mut errors);
    check_room(def.game.gate_room.as_str(), "game.gate_room".into(), &mut errors);

    for room in &def.rooms {
        for (direction, to) in &room.exits {
            if Direction::from_token(direction).is_none() {
                errors.push(WorldDataError::UnknownDirection {
                    room: room.id.clone(),
                    direction: direction.clone(),
                });
            }
            check_room(to.as_str(), format!("exit '{direction}' of room '{}'", room.id), &mut errors);
        }
    }

    if def.items.is_empty() {
        errors.push(WorldDataError::NoClues);
    }
    let mut item_ids = HashSet::new();
    let mut item_names = HashSet::new();
    for item in &def.items {
        if !item_ids.insert(item.id.as_str()) {
            errors.push(WorldDataError::DuplicateId {
                kind: "item",
                id: item.id.clone(),
            });
        }
        if !item_names.insert(item.name.to_lowercase()) {
            errors.push(WorldDataError::DuplicateItemName(item.name.clone()));
        }
        check_room(item.room.as_str(), format!("placement of item '{}'", item.id), &mut errors);
    }

    errors
}

/// Validate the `WorldDef` and return a single aggregated error.
fn validate_worlddef(def: &WorldDef) -> Result<()> {
    let errors = validate_world(def);
    if errors.is_empty() {
        return Ok(());
    }
    let details = errors
        .into_iter()
        .map(|err| format!("- {err}"))
        .collect::<Vec<_>>()
        .join("\n");
    bail!("world definition validation failed:\n{details}");
}

/// Build the room and item arenas, wire exits, place clues and the player.
///
/// # Errors
/// - on a reference to a room id that isn't defined
/// - on an unknown direction token
pub fn build_world_from_def(def: &WorldDef) -> Result<MysteryWorld> {
    let mut symbols: HashMap<&str, RoomId> = HashMap::new();
    let mut rooms = Vec::with_capacity(def.rooms.len());
    for (index, room_def) in def.rooms.iter().enumerate() {
        let id = RoomId(index);
        symbols.insert(room_def.id.as_str(), id);
        rooms.push(Room::new(id, &room_def.id, &room_def.name, &room_def.desc));
    }
    let lookup = |symbol: &str| {
        symbols
            .get(symbol)
            .copied()
            .ok_or_else(|| anyhow!("reference to undefined room '{symbol}'"))
    };

    for (room, room_def) in rooms.iter_mut().zip(&def.rooms) {
        for (token, to) in &room_def.exits {
            let direction = Direction::from_token(token)
                .ok_or_else(|| anyhow!("invalid exit direction ({token}) from ({})", room_def.id))?;
            room.set_exit(direction, lookup(to.as_str())?);
        }
    }

    let mut items = Vec::with_capacity(def.items.len());
    for (index, item_def) in def.items.iter().enumerate() {
        let id = ItemId(index);
        let room_id = lookup(item_def.room.as_str())?;
        rooms[room_id.index()].add_item(id);
        items.push(Item::new(id, &item_def.id, &item_def.name, &item_def.desc));
    }
    let all_clues = items.iter().map(|item| item.id).collect();

    let start = lookup(def.game.start_room.as_str())?;
    let gate_room = lookup(def.game.gate_room.as_str())?;

    Ok(MysteryWorld {
        title: def.game.title.clone(),
        rooms,
        items,
        player: Player::new(&def.game.player, start),
        all_clues,
        gate_room,
        phase: Phase::Intro,
        verdict: None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const TINY_WORLD: &str = r#"
        [game]
        title = "Tiny"
        player = "Tester"
        start_room = "a"
        gate_room = "b"

        [[rooms]]
        id = "a"
        name = "Room A"
        desc = "First."
        exits = { north = "b" }

        [[rooms]]
        id = "b"
        name = "Room B"
        desc = "Second."

        [[items]]
        id = "key"
        name = "Brass Key"
        desc = "Small."
        room = "a"
    "#;

    #[test]
    fn builtin_world_is_valid() {
        let def: WorldDef = toml::from_str(WORLD_TOML).unwrap();
        assert!(validate_world(&def).is_empty());
    }

    #[test]
    fn builtin_world_has_expected_shape() {
        let world = load_world().unwrap();
        assert_eq!(world.rooms.len(), 8);
        assert_eq!(world.items.len(), 6);
        assert_eq!(world.title, "Murder Mystery Text Adventure Game");

        let empty: Vec<_> = world
            .rooms
            .iter()
            .filter(|room| room.contents.is_empty())
            .map(|room| room.name.as_str())
            .collect();
        assert_eq!(empty, vec!["Foyer", "Lounge"]);
        assert!(world.rooms.iter().all(|room| room.contents.len() <= 1));
    }

    #[test]
    fn builtin_world_places_each_clue() {
        let world = load_world().unwrap();
        let expected = [
            ("letter", "master_bedroom"),
            ("red_ink_vial", "supply_closet"),
            ("police_report", "hallway"),
            ("crumpled_note", "guest_bedroom"),
            ("bloody_knife", "walk_in_closet"),
            ("handkerchief", "study"),
        ];
        for (item, room) in expected {
            let item_id = world.item_by_symbol(item).unwrap().id;
            assert!(world.room_by_symbol(room).unwrap().contains_item(item_id), "{item} not in {room}");
        }
    }

    #[test]
    fn lounge_is_only_reachable_from_the_study() {
        let world = load_world().unwrap();
        let sources: Vec<_> = world
            .rooms
            .iter()
            .filter(|room| room.exits().any(|(_, to)| to == world.gate_room))
            .map(|room| (room.name.as_str(), room.exits().find(|(_, to)| *to == world.gate_room).map(|(d, _)| d)))
            .collect();
        assert_eq!(sources, vec![("Study", Some(Direction::North))]);
    }

    #[test]
    fn every_exit_points_at_a_real_room() {
        let world = load_world().unwrap();
        for room in &world.rooms {
            for (_, to) in room.exits() {
                assert!(world.room(to).is_ok());
            }
        }
    }

    #[test]
    fn tiny_world_loads() {
        let world = load_world_from_str(TINY_WORLD).unwrap();
        assert_eq!(world.player.name, "Tester");
        assert_eq!(world.clue_total(), 1);
        assert_eq!(world.player_room_ref().unwrap().exit(Direction::North), Some(world.gate_room));
    }

    #[test]
    fn validation_collects_every_problem() {
        let mut def: WorldDef = toml::from_str(TINY_WORLD).unwrap();
        def.game.gate_room = "nowhere".into();
        def.rooms[0].exits.insert("up".into(), "b".into());
        def.items.push(def.items[0].clone());

        let errors = validate_world(&def);
        assert!(errors.contains(&WorldDataError::MissingRoom {
            id: "nowhere".into(),
            context: "game.gate_room".into(),
        }));
        assert!(errors.contains(&WorldDataError::UnknownDirection {
            room: "a".into(),
            direction: "up".into(),
        }));
        assert!(errors.contains(&WorldDataError::DuplicateId {
            kind: "item",
            id: "key".into(),
        }));
        assert!(errors.contains(&WorldDataError::DuplicateItemName("Brass Key".into())));
        assert!(load_world_from_str(&TINY_WORLD.replace("room = \"a\"", "room = \"zz\"")).is_err());
    }

    #[test]
    fn world_without_clues_is_rejected() {
        let mut def: WorldDef = toml::from_str(TINY_WORLD).unwrap();
        def.items.clear();
        assert_eq!(validate_world(&def), vec![WorldDataError::NoClues]);
    }
}
