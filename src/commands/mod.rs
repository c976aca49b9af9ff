//! Command implementations for the CLI.

pub mod completions;
pub mod play;
