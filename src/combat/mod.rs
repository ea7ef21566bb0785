//! Turn resolution: damage math, battle rounds and the post-round check.

pub mod logic;

pub use logic::*;
