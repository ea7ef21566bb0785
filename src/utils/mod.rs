//! Utility modules: app directory and JSON file helpers.

pub mod persistence;
