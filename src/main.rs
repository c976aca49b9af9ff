//! nowbar binary entry point.

use clap::Parser;
use tracing_subscriber::EnvFilter;

use nowbar::cli::{Cli, Commands};
use nowbar::commands;

fn main() {
    init_tracing();

    let cli = Cli::parse();
    let result = match cli.command {
        Commands::Play(args) => commands::play::run(&args),
        Commands::Completions { shell } => commands::completions::run(shell),
    };

    if let Err(err) = result {
        eprintln!("error: {err:#}");
        std::process::exit(1);
    }
}

/// Route tracing to stderr, filtered by RUST_LOG (silent by default).
fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();
}
