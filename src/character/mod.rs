//! Player character: job templates, inventory and equipment.

pub mod job;
pub mod player;

pub use job::*;
pub use player::*;
