//! Help overlay listing the player's keys.

use ratatui::{
    layout::Rect,
    text::Line,
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use crate::theme::Theme;

/// Help text lines for the overlay.
pub const HELP_LINES: &[&str] = &[
    "",
    "  Playback",
    "    Space      Play / Pause",
    "    p          Play",
    "    s          Pause",
    "    r          Reset to the start",
    "    +/-        Speed up / down",
    "    1          Normal speed",
    "",
    "  Narration",
    "    n          Toggle narration",
    "",
    "  General",
    "    ?          Show this help",
    "    q / Esc    Quit",
    "",
    "      Press any key to close",
    "",
];

/// Width of the help box including borders.
pub const HELP_BOX_WIDTH: u16 = 40;

/// Centered rectangle for the help box, clipped to `area`.
pub fn help_rect(area: Rect) -> Rect {
    let height = (HELP_LINES.len() as u16 + 2).min(area.height);
    let width = HELP_BOX_WIDTH.min(area.width);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

/// Draw the overlay on top of whatever is in `area`.
pub fn render_help(frame: &mut Frame, area: Rect, theme: &Theme) {
    let rect = help_rect(area);
    let lines: Vec<Line> = HELP_LINES.iter().map(|line| Line::raw(*line)).collect();
    let help = Paragraph::new(lines).style(theme.accent_style()).block(
        Block::default()
            .borders(Borders::ALL)
            .title(" scenereel help ")
            .border_style(theme.accent_style()),
    );
    frame.render_widget(Clear, rect);
    frame.render_widget(help, rect);
}
