//! Binding placeholders and declared assets to concrete resources.

pub mod assets;
pub mod paths;
