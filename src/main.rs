use anyhow::Result;
use clap::Parser;

use scenereel::cli::{Cli, Commands};
use scenereel::logging::{self, LogTarget};
use scenereel::Config;

mod commands;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // A broken config file still gets default logging
    let level = Config::load()
        .map(|config| config.logging.level)
        .unwrap_or_else(|_| "info".to_string());
    let target = match &cli.command {
        Commands::Play(args) if !args.headless => LogTarget::player_file()?,
        _ => LogTarget::Stderr,
    };
    logging::init(&level, target)?;

    match cli.command {
        Commands::Play(args) => commands::play::handle(&args),
        Commands::Scenes { json } => commands::scenes::handle(json),
        Commands::Frame(args) => commands::frame::handle(&args),
        Commands::Config(command) => commands::config::handle(command),
        Commands::Completions { shell } => commands::completions::handle(shell),
    }
}
