//! Project automation: `cargo run -p xtask -- man [--out DIR]`

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{CommandFactory, Parser, Subcommand};
use clap_mangen::Man;

use scenereel::cli::Cli;

#[derive(Parser)]
#[command(name = "xtask")]
struct Xtask {
    #[command(subcommand)]
    command: Task,
}

#[derive(Subcommand)]
enum Task {
    /// Generate man pages for scenereel and its subcommands
    Man {
        /// Output directory
        #[arg(long, default_value = "target/man")]
        out: PathBuf,
    },
}

fn main() -> Result<()> {
    match Xtask::parse().command {
        Task::Man { out } => generate_man_pages(&out),
    }
}

fn generate_man_pages(out: &Path) -> Result<()> {
    fs::create_dir_all(out).with_context(|| format!("Failed to create {}", out.display()))?;

    let command = Cli::command();
    write_page(&command, out, "scenereel")?;
    for sub in command.get_subcommands() {
        let name = format!("scenereel-{}", sub.get_name());
        write_page(sub, out, &name)?;
    }

    println!("Man pages written to {}", out.display());
    Ok(())
}

fn write_page(command: &clap::Command, out: &Path, name: &str) -> Result<()> {
    let mut buffer = Vec::new();
    Man::new(command.clone())
        .render(&mut buffer)
        .with_context(|| format!("Failed to render {}", name))?;
    let path = out.join(format!("{}.1", name));
    fs::write(&path, buffer).with_context(|| format!("Failed to write {}", path.display()))?;
    Ok(())
}
