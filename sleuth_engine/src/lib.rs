#![warn(clippy::pedantic)]
#![allow(clippy::must_use_candidate)]

pub const SLEUTH_VERSION: &str = env!("CARGO_PKG_VERSION");

// Core modules
pub mod command;
pub mod item;
pub mod loader;
pub mod player;
pub mod repl;
pub mod room;
pub mod story;
pub mod style;
pub mod view;
pub mod world;

// Re-exports for convenience
pub use item::{Item, ItemHolder, ItemId};
pub use loader::load_world;
pub use player::Player;
pub use repl::run_game;
pub use room::{Direction, Room, RoomId};
pub use view::{View, ViewItem};
pub use world::{MysteryWorld, Phase, Suspect};
