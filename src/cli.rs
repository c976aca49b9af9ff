//! Command-line interface definition.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use clap_complete::Shell;

/// Version string with git SHA and build date when available.
///
/// Official builds (the `release` feature) carry no git SHA.
pub fn build_version() -> String {
    let version = env!("CARGO_PKG_VERSION");
    let date = env!("NOWBAR_BUILD_DATE");
    match option_env!("VERGEN_GIT_SHA") {
        Some(sha) => format!("{version} ({sha} {date})"),
        None => format!("{version} ({date})"),
    }
}

#[derive(Debug, Parser)]
#[command(
    name = "nowbar",
    version = &*build_version().leak(),
    about = "Terminal now-playing progress indicator with drag-to-seek"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Play a track and show the progress indicator
    Play(PlayArgs),
    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[derive(Debug, Args)]
pub struct PlayArgs {
    /// Track title shown above the slider
    #[arg(long, default_value = "Untitled")]
    pub title: String,

    /// Artist shown between the time readouts
    #[arg(long, default_value = "Unknown Artist")]
    pub artist: String,

    /// Track length in seconds
    #[arg(long, default_value_t = 180.0)]
    pub duration: f64,

    /// Position to start from, in seconds
    #[arg(long, default_value_t = 0.0)]
    pub start: f64,

    /// Load title/artist/duration from a JSON file instead of the flags
    #[arg(long, value_name = "FILE")]
    pub track: Option<PathBuf>,

    /// Built-in theme preset (charcoal, classic, ocean)
    #[arg(long, value_name = "NAME")]
    pub theme: Option<String>,

    /// Theme token file (TOML), applied over the preset
    #[arg(long, value_name = "FILE")]
    pub theme_file: Option<PathBuf>,
}
