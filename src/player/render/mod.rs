//! Rendering components for the player.
//!
//! The screen is split top to bottom into the stage, the subtitle line,
//! the progress bar and the status bar. The help overlay is drawn on top.

mod help;
mod progress;
mod stage;
mod status;

pub use help::{help_rect, render_help, HELP_BOX_WIDTH, HELP_LINES};
pub use progress::{build_progress_bar_chars, format_duration, progress_line, MARKER, PLAYHEAD};
pub use stage::StageView;
pub use status::{phase_label, status_line, StatusInfo};

use ratatui::{
    layout::{Alignment, Constraint, Layout, Rect},
    style::Style,
    widgets::Paragraph,
    Frame,
};

use crate::player::state::PlayerState;
use crate::scene::Scene;
use crate::scheduler::Scheduler;
use crate::stage::Stage;
use crate::theme::Theme;

/// Rows below the stage: subtitle, progress, status.
pub const CHROME_LINES: u16 = 3;

/// Everything one frame needs, captured from the scheduler.
#[derive(Debug, Clone)]
pub struct PlayerView<'a> {
    pub stage: &'a Stage,
    pub status: StatusInfo<'a>,
    pub elapsed: f64,
    pub total: f64,
    /// Start times of every scene after the first
    pub markers: Vec<f64>,
    pub show_subtitles: bool,
    pub show_help: bool,
}

impl<'a> PlayerView<'a> {
    pub fn capture<S: Scene>(
        scheduler: &'a Scheduler<S>,
        stage: &'a Stage,
        state: &PlayerState,
    ) -> Self {
        let registry = scheduler.registry();
        let scene = scheduler.current_scene();
        let narration = scheduler.narration();
        Self {
            stage,
            status: StatusInfo {
                phase: scheduler.phase(),
                at_start: scheduler.elapsed() == 0.0,
                speed: scheduler.speed(),
                scene,
                scene_count: registry.len(),
                scene_name: registry.get(scene).map(|s| s.name()).unwrap_or(""),
                narration: narration.is_active().then(|| narration.backend_name()),
            },
            elapsed: scheduler.elapsed(),
            total: registry.total_duration(),
            markers: registry.ranges().skip(1).map(|range| range.start).collect(),
            show_subtitles: state.show_subtitles,
            show_help: state.show_help,
        }
    }
}

/// Split the frame into stage, subtitle, progress and status rows.
pub fn layout(area: Rect) -> [Rect; 4] {
    Layout::vertical([
        Constraint::Min(1),
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Length(1),
    ])
    .areas(area)
}

/// Draw a full frame.
pub fn draw(frame: &mut Frame, view: &PlayerView<'_>, theme: &Theme) {
    let [stage_area, subtitle_area, progress_area, status_area] = layout(frame.area());

    frame.render_widget(StageView::new(&view.stage.canvas), stage_area);

    if view.show_subtitles && !view.stage.subtitle.is_empty() {
        let subtitle = Paragraph::new(view.stage.subtitle.text().to_string())
            .style(theme.text_style())
            .alignment(Alignment::Center);
        frame.render_widget(subtitle, subtitle_area);
    }

    let bar_style = Style::default().bg(theme.bar_background);
    let progress = progress_line(
        progress_area.width,
        view.elapsed,
        view.total,
        &view.markers,
        theme,
    );
    frame.render_widget(Paragraph::new(progress).style(bar_style), progress_area);
    frame.render_widget(
        Paragraph::new(status_line(&view.status, theme)).style(bar_style),
        status_area,
    );

    if view.show_help {
        render_help(frame, frame.area(), theme);
    }
}
