//! The `play` command: resolve track and theme, run the player.

use anyhow::{bail, Context, Result};
use tracing::info;

use crate::cli::PlayArgs;
use crate::config;
use crate::player;
use crate::track::Track;

/// Run the player with the track and theme selected on the command line.
pub fn run(args: &PlayArgs) -> Result<()> {
    let track = resolve_track(args)?;
    let theme = config::resolve_theme(args.theme.as_deref(), args.theme_file.as_deref())?;

    if !atty::is(atty::Stream::Stdout) {
        bail!("`nowbar play` needs an interactive terminal (stdout is not a TTY)");
    }

    info!(title = %track.title, duration = track.duration, "starting player");
    player::run(&track, &theme, args.start)
}

/// A `--track` file overrides the individual flags.
fn resolve_track(args: &PlayArgs) -> Result<Track> {
    match &args.track {
        Some(path) => Track::from_json_file(path)
            .with_context(|| format!("loading track file {}", path.display())),
        None => Ok(Track::new(
            args.title.clone(),
            args.artist.clone(),
            args.duration,
        )?),
    }
}
