//! Running the timeline without a terminal UI.
//!
//! Used by `play --headless` and by the `frame` command. The same
//! tick/pump loop as the terminal player runs, but scene entries are
//! written as lines of text instead of being drawn.

use std::io::Write;
use std::thread;
use std::time::{Duration, Instant};

use anyhow::Result;

use crate::narration::NarrationQueue;
use crate::player::render::format_duration;
use crate::scene::{Scene, SceneRegistry};
use crate::scheduler::{Scheduler, TickOutcome};
use crate::stage::Stage;

/// How frame timestamps are produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pacing {
    /// Sleep until each frame deadline and stamp frames with the wall clock
    RealTime,
    /// Stamp frames `1/fps` apart without sleeping
    Simulated,
}

/// Summary of a headless run.
#[derive(Debug, Clone, PartialEq)]
pub struct HeadlessReport {
    pub frames: u64,
    /// Scene indices in the order they were entered
    pub entered: Vec<usize>,
    pub elapsed: f64,
}

fn entry_line<S: Scene>(scheduler: &Scheduler<S>, index: usize, subtitle: &str) -> String {
    let registry = scheduler.registry();
    let name = registry.get(index).map(|s| s.name()).unwrap_or("?");
    let start = registry.range_of(index).map(|r| r.start).unwrap_or(0.0);
    let mut line = format!(
        "[{}] {}/{} {}",
        format_duration(start),
        index + 1,
        registry.len(),
        name
    );
    if !subtitle.is_empty() {
        line.push_str(" - ");
        line.push_str(subtitle);
    }
    line
}

/// Play the whole timeline from the start, printing one line per scene
/// entry and a final `sequence complete` line.
pub fn run_headless<S: Scene, W: Write>(
    scheduler: &mut Scheduler<S>,
    stage: &mut Stage,
    fps: u32,
    pacing: Pacing,
    out: &mut W,
) -> Result<HeadlessReport> {
    let interval = Duration::from_secs_f64(1.0 / f64::from(fps.max(1)));
    let started = Instant::now();
    let mut report = HeadlessReport {
        frames: 0,
        entered: vec![0],
        elapsed: 0.0,
    };

    scheduler.reset(stage);
    writeln!(out, "{}", entry_line(scheduler, 0, stage.subtitle.text()))?;
    scheduler.play();

    loop {
        let timestamp = match pacing {
            Pacing::RealTime => started.elapsed().as_secs_f64(),
            Pacing::Simulated => report.frames as f64 * interval.as_secs_f64(),
        };
        let outcome = scheduler.tick(timestamp, stage);
        scheduler.pump_narration();
        report.frames += 1;

        let finished = matches!(outcome, TickOutcome::Finished { .. });
        if let Some(index) = outcome.entered_scene() {
            report.entered.push(index);
            // The finish caption has already replaced the scene's subtitle
            let subtitle = if finished { "" } else { stage.subtitle.text() };
            writeln!(out, "{}", entry_line(scheduler, index, subtitle))?;
        }

        if finished {
            break;
        }

        if pacing == Pacing::RealTime {
            let deadline = interval * report.frames as u32;
            if let Some(wait) = deadline.checked_sub(started.elapsed()) {
                thread::sleep(wait);
            }
        }
    }

    report.elapsed = scheduler.elapsed();
    writeln!(
        out,
        "[{}] sequence complete",
        format_duration(report.elapsed)
    )?;
    Ok(report)
}

/// Render the stage as it looks `at` seconds into the timeline.
///
/// Narration is disabled. Positions past the end show the final frame.
pub fn stage_at<S: Scene>(registry: SceneRegistry<S>, at: f64, width: u16, height: u16) -> Stage {
    let mut stage = Stage::new(width, height);
    let mut scheduler = Scheduler::new(registry, NarrationQueue::disabled());
    scheduler.reset(&mut stage);
    scheduler.play();
    scheduler.tick(0.0, &mut stage);
    scheduler.tick(at, &mut stage);
    stage
}
