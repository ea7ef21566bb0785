//! Terminal front end used by the binary.
//!
//! Kept out of the library; it only implements the input and display traits.

pub mod console;
