//! Config subcommands handler

use anyhow::{Context, Result};

use scenereel::cli::ConfigCommands;
use scenereel::theme::Theme;
use scenereel::Config;

pub fn handle(command: ConfigCommands) -> Result<()> {
    match command {
        ConfigCommands::Show => handle_show(),
        ConfigCommands::Path => handle_path(),
        ConfigCommands::Init => handle_init(),
        ConfigCommands::Edit => handle_edit(),
    }
}

/// Show the effective configuration as TOML.
pub fn handle_show() -> Result<()> {
    let config = Config::load()?;
    let toml_str = toml::to_string_pretty(&config)?;
    let theme = Theme::from_name(config.display.theme);
    println!("{}", theme.primary_text(toml_str.trim_end()));
    Ok(())
}

/// Print where the config file lives.
pub fn handle_path() -> Result<()> {
    println!("{}", Config::config_path()?.display());
    Ok(())
}

/// Write the defaults unless a file already exists.
pub fn handle_init() -> Result<()> {
    let path = Config::config_path()?;
    let theme = Theme::default();
    if path.exists() {
        println!(
            "{}",
            theme.secondary_text(&format!("Config already exists at {}", path.display()))
        );
        return Ok(());
    }
    Config::default().save_to(&path)?;
    println!(
        "{}",
        theme.success_text(&format!("Created {}", path.display()))
    );
    Ok(())
}

/// Open configuration file in the default editor.
///
/// Uses $EDITOR environment variable (defaults to 'vi').
#[cfg(not(tarpaulin_include))]
pub fn handle_edit() -> Result<()> {
    let config_path = Config::config_path()?;
    let theme = Theme::default();

    if !config_path.exists() {
        Config::default().save_to(&config_path)?;
    }

    let editor = std::env::var("EDITOR").unwrap_or_else(|_| "vi".to_string());

    println!(
        "{}",
        theme.primary_text(&format!(
            "Opening {} with {}",
            config_path.display(),
            editor
        ))
    );

    std::process::Command::new(&editor)
        .arg(&config_path)
        .status()
        .with_context(|| format!("Failed to open editor {}", editor))?;

    Config::load_from(&config_path).context("Edited config is invalid")?;
    Ok(())
}
