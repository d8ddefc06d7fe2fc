//! Command-line interface definitions.
//!
//! Lives in the library so `xtask` can render man pages from the same
//! definitions the binary parses.

use clap::{Args, Parser, Subcommand};
use clap_complete::Shell;

use crate::narration::BackendKind;

/// Version string with the git commit for development builds.
#[cfg(not(feature = "release"))]
pub const VERSION: &str = concat!(
    env!("CARGO_PKG_VERSION"),
    " (",
    env!("VERGEN_GIT_SHA"),
    " ",
    env!("SCENEREEL_BUILD_DATE"),
    ")"
);

/// Version string for release builds.
#[cfg(feature = "release")]
pub const VERSION: &str = concat!(
    env!("CARGO_PKG_VERSION"),
    " (",
    env!("SCENEREEL_BUILD_DATE"),
    ")"
);

#[derive(Parser, Debug)]
#[command(name = "scenereel")]
#[command(version = VERSION)]
#[command(about = "Play a timed scene sequence with narration and subtitles")]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Play the sequence in the terminal
    Play(PlayArgs),

    /// List scenes with their start, end and duration
    Scenes {
        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Print the stage at a point on the timeline as plain text
    Frame(FrameArgs),

    /// Show or edit the configuration file
    #[command(subcommand)]
    Config(ConfigCommands),

    /// Generate shell completions
    Completions {
        /// Target shell
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[derive(Args, Debug, Default, Clone)]
pub struct PlayArgs {
    /// Playback speed multiplier (overrides config)
    #[arg(long, value_name = "X", allow_negative_numbers = true)]
    pub speed: Option<f64>,

    /// Frames per second (overrides config)
    #[arg(long, value_name = "N")]
    pub fps: Option<u32>,

    /// Disable narration
    #[arg(long, conflicts_with = "voice")]
    pub no_voice: bool,

    /// Speech backend (overrides config)
    #[arg(long, value_enum, value_name = "BACKEND")]
    pub voice: Option<BackendKind>,

    /// Start playing immediately
    #[arg(long)]
    pub autoplay: bool,

    /// Run without a terminal UI and print scene changes
    #[arg(long)]
    pub headless: bool,
}

#[derive(Args, Debug, Clone)]
pub struct FrameArgs {
    /// Timeline position in seconds
    #[arg(long, value_name = "SECONDS", allow_negative_numbers = true)]
    pub at: f64,

    /// Canvas width in columns
    #[arg(long, default_value_t = crate::stage::Canvas::DEFAULT_WIDTH)]
    pub width: u16,

    /// Canvas height in rows
    #[arg(long, default_value_t = crate::stage::Canvas::DEFAULT_HEIGHT)]
    pub height: u16,
}

#[derive(Subcommand, Debug, Clone, Copy)]
pub enum ConfigCommands {
    /// Print the effective configuration as TOML
    Show,
    /// Print the config file location
    Path,
    /// Write a default config file if none exists
    Init,
    /// Open the config file in $EDITOR
    Edit,
}
