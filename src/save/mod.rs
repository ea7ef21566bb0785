//! Save file format and the file I/O around it.

pub mod codec;
pub mod manager;

pub use codec::*;
pub use manager::*;
