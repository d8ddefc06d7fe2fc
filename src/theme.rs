//! Colors for the player chrome and CLI output
//!
//! Provides ratatui styles for the terminal player and ANSI wrappers for
//! plain command output.

use ratatui::style::{Color, Modifier, Style};
use serde::{Deserialize, Serialize};

/// Named theme as written in the config file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeName {
    #[default]
    Default,
    Classic,
    Ocean,
}

/// Player chrome colors.
#[derive(Debug, Clone)]
pub struct Theme {
    /// Subtitle and main status text
    pub text_primary: Color,
    /// Dimmed text: key hints, separators
    pub text_secondary: Color,
    /// Keys, playhead, current scene
    pub accent: Color,
    /// Scene boundary markers on the progress bar
    pub marker: Color,
    pub error: Color,
    pub success: Color,
    /// Background of the progress and status rows
    pub bar_background: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self::reel()
    }
}

impl Theme {
    /// Light gray text with a green accent.
    pub fn reel() -> Self {
        Self {
            text_primary: Color::Gray,
            text_secondary: Color::DarkGray,
            accent: Color::Green,
            marker: Color::Yellow,
            error: Color::Red,
            success: Color::Green,
            bar_background: Color::Indexed(236),
        }
    }

    /// White text, yellow accent.
    pub fn classic() -> Self {
        Self {
            text_primary: Color::White,
            text_secondary: Color::DarkGray,
            accent: Color::Yellow,
            marker: Color::LightRed,
            error: Color::Red,
            success: Color::Green,
            bar_background: Color::Reset,
        }
    }

    /// Cyan/blue theme.
    pub fn ocean() -> Self {
        Self {
            text_primary: Color::Cyan,
            text_secondary: Color::DarkGray,
            accent: Color::LightCyan,
            marker: Color::LightMagenta,
            error: Color::Red,
            success: Color::Green,
            bar_background: Color::Indexed(17),
        }
    }

    pub fn from_name(name: ThemeName) -> Self {
        match name {
            ThemeName::Default => Self::reel(),
            ThemeName::Classic => Self::classic(),
            ThemeName::Ocean => Self::ocean(),
        }
    }

    pub fn text_style(&self) -> Style {
        Style::default().fg(self.text_primary)
    }

    pub fn text_secondary_style(&self) -> Style {
        Style::default().fg(self.text_secondary)
    }

    pub fn accent_style(&self) -> Style {
        Style::default().fg(self.accent)
    }

    /// Style for key names in hints.
    pub fn accent_bold_style(&self) -> Style {
        Style::default()
            .fg(self.accent)
            .add_modifier(Modifier::BOLD)
    }

    pub fn marker_style(&self) -> Style {
        Style::default().fg(self.marker)
    }

    // ANSI helpers for CLI output

    /// Format text with the accent color.
    pub fn accent_text(&self, text: &str) -> String {
        paint(self.accent, text)
    }

    /// Format text with the primary color.
    pub fn primary_text(&self, text: &str) -> String {
        paint(self.text_primary, text)
    }

    /// Format text with the secondary color.
    pub fn secondary_text(&self, text: &str) -> String {
        paint(self.text_secondary, text)
    }

    /// Format text with the success color.
    pub fn success_text(&self, text: &str) -> String {
        paint(self.success, text)
    }
}

/// ANSI reset sequence
const ANSI_RESET: &str = "\x1b[0m";

fn paint(color: Color, text: &str) -> String {
    if std::env::var_os("NO_COLOR").is_some() {
        return text.to_string();
    }
    let code = color_to_ansi(color);
    if code.is_empty() {
        return text.to_string();
    }
    format!("{}{}{}", code, text, ANSI_RESET)
}

/// Convert a ratatui Color to an ANSI escape code.
fn color_to_ansi(color: Color) -> &'static str {
    match color {
        Color::Black => "\x1b[30m",
        Color::Red => "\x1b[31m",
        Color::Green => "\x1b[32m",
        Color::Yellow => "\x1b[33m",
        Color::Blue => "\x1b[34m",
        Color::Magenta => "\x1b[35m",
        Color::Cyan => "\x1b[36m",
        Color::Gray => "\x1b[37m",
        Color::DarkGray => "\x1b[90m",
        Color::LightRed => "\x1b[91m",
        Color::LightGreen => "\x1b[92m",
        Color::LightYellow => "\x1b[93m",
        Color::LightBlue => "\x1b[94m",
        Color::LightMagenta => "\x1b[95m",
        Color::LightCyan => "\x1b[96m",
        Color::White => "\x1b[97m",
        // RGB, indexed and reset print uncolored
        _ => "",
    }
}
