//! Progress bar with scene boundary markers.

use ratatui::{
    style::Style,
    text::{Line, Span},
};

use crate::theme::Theme;

/// Playhead symbol.
pub const PLAYHEAD: char = '⏺';
/// Scene boundary symbol.
pub const MARKER: char = '◆';

/// Format a duration in seconds to MM:SS format.
///
/// Fractions are truncated and negative values show as zero.
pub fn format_duration(seconds: f64) -> String {
    let total_secs = seconds as u64;
    let mins = total_secs / 60;
    let secs = total_secs % 60;
    format!("{:02}:{:02}", mins, secs)
}

/// Build the progress bar character array.
///
/// `markers` are timeline positions (scene starts). Returns the bar and
/// the number of filled positions. The playhead wins over a marker in the
/// same column.
pub fn build_progress_bar_chars(
    bar_width: usize,
    current_time: f64,
    total_duration: f64,
    markers: &[f64],
) -> (Vec<char>, usize) {
    let progress = if total_duration > 0.0 {
        (current_time / total_duration).clamp(0.0, 1.0)
    } else {
        1.0
    };

    let filled = (bar_width as f64 * progress) as usize;

    let mut bar: Vec<char> = vec!['─'; bar_width];

    if filled < bar_width {
        bar[filled] = PLAYHEAD;
    }

    for &time in markers {
        let pos = if total_duration > 0.0 {
            ((time / total_duration) * bar_width as f64) as usize
        } else {
            0
        };
        if pos < bar_width && bar[pos] != PLAYHEAD {
            bar[pos] = MARKER;
        }
    }

    (bar, filled)
}

fn flush(spans: &mut Vec<Span<'static>>, run: &mut String, style: Style) {
    if !run.is_empty() {
        spans.push(Span::styled(std::mem::take(run), style));
    }
}

/// Build the styled progress row: bar followed by ` MM:SS/MM:SS`.
pub fn progress_line(
    width: u16,
    current_time: f64,
    total_duration: f64,
    markers: &[f64],
    theme: &Theme,
) -> Line<'static> {
    let time_display = format!(
        " {}/{}",
        format_duration(current_time),
        format_duration(total_duration)
    );
    let bar_width = (width as usize).saturating_sub(time_display.len() + 2);
    let (bar, filled) = build_progress_bar_chars(bar_width, current_time, total_duration, markers);

    let done = theme.accent_style();
    let ahead = theme.text_secondary_style();
    let mut spans = vec![Span::raw(" ")];
    let mut run = String::new();
    let mut run_style = done;

    for (i, &c) in bar.iter().enumerate() {
        let (symbol, style) = if c == MARKER {
            (MARKER, theme.marker_style())
        } else if i < filled {
            ('━', done)
        } else if i == filled {
            (c, theme.text_style())
        } else {
            (c, ahead)
        };
        if style != run_style {
            flush(&mut spans, &mut run, run_style);
            run_style = style;
        }
        run.push(symbol);
    }
    flush(&mut spans, &mut run, run_style);

    spans.push(Span::styled(time_display, theme.text_style()));
    Line::from(spans)
}
