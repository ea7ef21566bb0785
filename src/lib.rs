//! Battle Arena - turn-based text combat library
//!
//! This module exposes the game logic for testing and external use.

pub mod build_info;
pub mod character;
pub mod combat;
pub mod core;
pub mod input;
pub mod items;
pub mod save;
pub mod utils;

pub use character::{Job, Player};
pub use self::core::{
    ArenaConfig, EnemyRoster, Entity, EventSink, Game, GameEvent, GameSession, Scene,
};
pub use input::{ChoicePrompt, ScriptedInput};
pub use save::{SaveManager, SaveSnapshot};
