//! Status bar: playback state, speed, scene, narration and key hints.

use ratatui::text::{Line, Span};

use crate::scheduler::Phase;
use crate::theme::Theme;

/// Data shown on the status bar.
#[derive(Debug, Clone, PartialEq)]
pub struct StatusInfo<'a> {
    pub phase: Phase,
    /// Whether playback sits at the very start of the timeline
    pub at_start: bool,
    pub speed: f64,
    /// Zero-based scene index
    pub scene: usize,
    pub scene_count: usize,
    pub scene_name: &'a str,
    /// Backend name, or `None` when narration is off
    pub narration: Option<&'a str>,
}

/// Key hints shown after the state fields.
const KEY_HINTS: &[(&str, &str)] = &[
    ("space", "play"),
    ("r", "reset"),
    ("+/-", "speed"),
    ("n", "voice"),
    ("?", "help"),
    ("q", "quit"),
];

/// Icon and label for a phase. An idle timeline that has not moved yet is
/// "ready" rather than paused.
pub fn phase_label(phase: Phase, at_start: bool) -> (&'static str, &'static str) {
    match phase {
        Phase::Idle if at_start => ("○", "ready"),
        Phase::Idle => ("⏸", "paused"),
        Phase::Playing => ("▶", "playing"),
        Phase::Finished => ("■", "finished"),
    }
}

/// Build the status row.
pub fn status_line(info: &StatusInfo<'_>, theme: &Theme) -> Line<'static> {
    let (icon, label) = phase_label(info.phase, info.at_start);
    let dim = theme.text_secondary_style();
    let text = theme.text_style();

    let mut spans = vec![
        Span::styled(format!(" {} {} ", icon, label), theme.accent_style()),
        Span::styled("spd:", dim),
        Span::styled(format!("{:.1}x ", info.speed), text),
        Span::styled(
            format!("{}/{} ", info.scene + 1, info.scene_count),
            theme.marker_style(),
        ),
        Span::styled(format!("{} ", info.scene_name), text),
    ];

    match info.narration {
        Some(name) => spans.push(Span::styled(format!("♪ {} ", name), text)),
        None => spans.push(Span::styled("♪ off ", dim)),
    }

    spans.push(Span::styled("│", dim));
    for (key, desc) in KEY_HINTS {
        spans.push(Span::styled(format!(" {}", key), theme.accent_bold_style()));
        spans.push(Span::styled(format!(":{}", desc), dim));
    }

    Line::from(spans)
}
