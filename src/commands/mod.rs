//! Subcommand handlers

pub mod completions;
pub mod config;
pub mod frame;
pub mod play;
pub mod scenes;
