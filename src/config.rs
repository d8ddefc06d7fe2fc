//! Configuration file handling
//!
//! Settings live in a TOML file at `$SCENEREEL_CONFIG` or
//! `<config_dir>/scenereel/config.toml`. A missing file means defaults, and
//! missing fields fall back to their defaults individually.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};

use crate::narration::BackendKind;
use crate::scheduler::DEFAULT_FINISH_CAPTION;
use crate::theme::ThemeName;
use crate::timeline::DEFAULT_SPEED;

/// Environment variable overriding the config file location.
pub const CONFIG_ENV: &str = "SCENEREEL_CONFIG";

/// Frame rate bounds accepted by `playback.fps`.
pub const FPS_RANGE: std::ops::RangeInclusive<u32> = 1..=240;
/// Speaking pace bounds accepted by `narration.words_per_minute`.
pub const WPM_RANGE: std::ops::RangeInclusive<u32> = 80..=450;

/// Top-level configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub playback: PlaybackConfig,
    pub narration: NarrationConfig,
    pub display: DisplayConfig,
    pub logging: LoggingConfig,
}

/// `[playback]` section.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlaybackConfig {
    /// Initial speed multiplier
    pub speed: f64,
    /// Frames per second of the player loop
    pub fps: u32,
    /// Start playing without waiting for a key
    pub autoplay: bool,
    /// Subtitle shown when the sequence ends
    pub finish_caption: String,
}

impl Default for PlaybackConfig {
    fn default() -> Self {
        Self {
            speed: DEFAULT_SPEED,
            fps: 60,
            autoplay: false,
            finish_caption: DEFAULT_FINISH_CAPTION.to_string(),
        }
    }
}

/// `[narration]` section.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NarrationConfig {
    pub enabled: bool,
    pub backend: BackendKind,
    /// Speaking pace at rate 1.0
    pub words_per_minute: u32,
}

impl Default for NarrationConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            backend: BackendKind::Auto,
            words_per_minute: 175,
        }
    }
}

/// `[display]` section.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    pub theme: ThemeName,
    pub show_subtitles: bool,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            theme: ThemeName::Default,
            show_subtitles: true,
        }
    }
}

/// `[logging]` section.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Filter directive, e.g. `info` or `scenereel=debug`
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}

impl Config {
    /// Location of the config file.
    pub fn config_path() -> Result<PathBuf> {
        if let Some(path) = std::env::var_os(CONFIG_ENV) {
            return Ok(PathBuf::from(path));
        }
        let dir = dirs::config_dir().context("Could not determine config directory")?;
        Ok(dir.join("scenereel").join("config.toml"))
    }

    /// Load from the default location.
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    /// Load from a specific file. A missing file yields defaults.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file {}", path.display()))?;
        config.validate()?;
        Ok(config)
    }

    /// Save to the default location.
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path()?)
    }

    /// Save to a specific file, creating parent directories.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create {}", parent.display()))?;
        }
        let content = toml::to_string_pretty(self).context("Failed to serialize config")?;
        fs::write(path, content)
            .with_context(|| format!("Failed to write config file {}", path.display()))?;
        Ok(())
    }

    /// Check value ranges.
    pub fn validate(&self) -> Result<()> {
        let speed = self.playback.speed;
        if !speed.is_finite() || speed <= 0.0 {
            bail!("playback.speed must be greater than zero, got {}", speed);
        }
        if !FPS_RANGE.contains(&self.playback.fps) {
            bail!(
                "playback.fps must be between {} and {}, got {}",
                FPS_RANGE.start(),
                FPS_RANGE.end(),
                self.playback.fps
            );
        }
        if !WPM_RANGE.contains(&self.narration.words_per_minute) {
            bail!(
                "narration.words_per_minute must be between {} and {}, got {}",
                WPM_RANGE.start(),
                WPM_RANGE.end(),
                self.narration.words_per_minute
            );
        }
        Ok(())
    }
}
