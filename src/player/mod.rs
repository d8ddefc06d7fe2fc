//! Terminal player for scene timelines
//!
//! # Architecture
//!
//! The player is organized into submodules:
//! - `state`: UI state kept outside the scheduler (help overlay, subtitles)
//! - `settings`: config values merged with command-line overrides
//! - `input/`: key bindings mapped onto playback commands
//! - `render/`: stage widget, progress bar, status bar, help overlay
//! - `headless`: the same loop without a terminal
//!
//! The loop waits for input until the next frame deadline, then ticks the
//! scheduler with the wall-clock time, pumps narration completions and
//! draws. Everything runs on the calling thread.

pub mod headless;
pub mod input;
pub mod render;
pub mod settings;
pub mod state;

pub use headless::{run_headless, stage_at, HeadlessReport, Pacing};
pub use settings::PlaySettings;
pub use state::{InputResult, PlayerState};

use std::io::{self, Stdout};
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use crossterm::{
    cursor::{Hide, Show},
    event,
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use tracing::{debug, info};

use crate::scene::Scene;
use crate::scheduler::{Phase, Scheduler};
use crate::stage::Stage;
use crate::theme::Theme;

/// Where playback stood when the user quit.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlaybackResult {
    pub elapsed: f64,
    pub scene: usize,
    /// Whether the sequence had completed
    pub finished: bool,
}

/// Raw mode plus alternate screen, undone on drop.
struct TerminalGuard {
    terminal: Terminal<CrosstermBackend<Stdout>>,
}

impl TerminalGuard {
    fn enter() -> Result<Self> {
        enable_raw_mode().context("Failed to enable raw mode")?;
        let mut stdout = io::stdout();
        if let Err(e) = execute!(stdout, EnterAlternateScreen, Hide) {
            let _ = disable_raw_mode();
            return Err(e).context("Failed to enter alternate screen");
        }
        let terminal = match Terminal::new(CrosstermBackend::new(stdout)) {
            Ok(terminal) => terminal,
            Err(e) => {
                let _ = execute!(io::stdout(), Show, LeaveAlternateScreen);
                let _ = disable_raw_mode();
                return Err(e).context("Failed to create terminal");
            }
        };
        Ok(Self { terminal })
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = execute!(self.terminal.backend_mut(), Show, LeaveAlternateScreen);
        let _ = disable_raw_mode();
    }
}

/// Run the interactive player until the user quits.
///
/// The stage is reset (scene 0 entered and drawn) before the first frame;
/// playback starts right away with `settings.autoplay`, otherwise on the
/// first play key.
pub fn run<S: Scene>(mut scheduler: Scheduler<S>, settings: &PlaySettings) -> Result<PlaybackResult> {
    let theme = Theme::from_name(settings.theme);
    let interval = settings.frame_interval();
    let mut stage = Stage::default();
    let mut state = PlayerState::new(settings.show_subtitles);

    scheduler.reset(&mut stage);
    if settings.autoplay {
        scheduler.play();
    }

    let mut guard = TerminalGuard::enter()?;
    let epoch = Instant::now();
    let mut next_frame = epoch;
    info!(
        fps = settings.fps,
        speed = scheduler.speed(),
        narration = scheduler.narration().backend_name(),
        "player started"
    );

    loop {
        // Wait for input until the frame deadline
        let now = Instant::now();
        let timeout = next_frame.saturating_duration_since(now);
        if event::poll(timeout).context("Failed to poll terminal events")? {
            let ev = event::read().context("Failed to read terminal event")?;
            if input::handle_event(ev, &mut state, &mut scheduler, &mut stage) == InputResult::Quit {
                break;
            }
            if Instant::now() < next_frame {
                continue;
            }
        }

        next_frame = advance_deadline(next_frame, interval, Instant::now());

        scheduler.tick(epoch.elapsed().as_secs_f64(), &mut stage);
        scheduler.pump_narration();

        let view = render::PlayerView::capture(&scheduler, &stage, &state);
        guard
            .terminal
            .draw(|frame| render::draw(frame, &view, &theme))
            .context("Failed to draw frame")?;
    }

    let result = PlaybackResult {
        elapsed: scheduler.elapsed(),
        scene: scheduler.current_scene(),
        finished: scheduler.phase() == Phase::Finished,
    };
    debug!(?result, "player stopped");
    scheduler.dispose();
    drop(guard);
    Ok(result)
}

/// Next frame deadline. After a stall the schedule restarts from `now`.
fn advance_deadline(previous: Instant, interval: Duration, now: Instant) -> Instant {
    let next = previous + interval;
    if next <= now {
        now + interval
    } else {
        next
    }
}
