//! Core game state, the scene state machine, and shared types.

pub mod config;
pub mod constants;
pub mod entity;
pub mod error;
pub mod events;
pub mod game;
pub mod game_state;
pub mod roster;
pub mod scene;

pub use config::*;
pub use constants::*;
pub use entity::*;
pub use error::*;
pub use events::*;
pub use game::*;
pub use game_state::*;
pub use roster::*;
pub use scene::*;
