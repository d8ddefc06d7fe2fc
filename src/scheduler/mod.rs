//! Frame-driven scene scheduler.
//!
//! The [`Scheduler`] owns the whole timeline state: the scene registry, the
//! virtual clock, the narration queue and the current scene index. The
//! presentation layer calls [`Scheduler::tick`] once per frame with a
//! wall-clock timestamp and [`Scheduler::pump_narration`] between frames;
//! everything runs on that one thread.
//!
//! # Tick order
//!
//! Within one tick the order is fixed: advance clock, resolve scene, on a
//! scene change clear narration and run `on_enter`, fire due cues, clear the
//! canvas and `draw`, then check for the end of the timeline.
//!
//! The playback controls (`play`, `pause`, `reset`, speed) live in
//! [`controller`].

pub mod controller;

pub use controller::PlaybackCommand;

use tracing::{debug, info, trace};

use crate::narration::NarrationQueue;
use crate::scene::{Scene, SceneContext, SceneRegistry};
use crate::stage::Stage;
use crate::timeline::TimelineClock;

/// Caption shown when the sequence ends, unless configured otherwise.
pub const DEFAULT_FINISH_CAPTION: &str = "Replay?";

/// Where the scheduler is in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    /// Not ticking: before the first play, or paused, or after reset
    #[default]
    Idle,
    /// Ticking
    Playing,
    /// Reached the end of the timeline; the last frame stays on screen
    Finished,
}

/// What one call to [`Scheduler::tick`] did.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TickOutcome {
    /// Not playing; nothing happened
    Inactive,
    /// A frame was drawn
    Rendered {
        scene: usize,
        local_time: f64,
        /// Whether this tick entered `scene`
        entered: bool,
    },
    /// The final frame was drawn and playback stopped
    Finished {
        scene: usize,
        local_time: f64,
        /// Whether this tick also entered `scene`
        entered: bool,
    },
}

impl TickOutcome {
    /// Scene entered on this tick, if any.
    pub fn entered_scene(&self) -> Option<usize> {
        match *self {
            Self::Rendered {
                scene,
                entered: true,
                ..
            }
            | Self::Finished {
                scene,
                entered: true,
                ..
            } => Some(scene),
            _ => None,
        }
    }
}

/// Owns the timeline state and drives scenes from frame ticks.
#[derive(Debug)]
pub struct Scheduler<S> {
    registry: SceneRegistry<S>,
    clock: TimelineClock,
    narration: NarrationQueue,
    phase: Phase,
    current_scene: usize,
    /// Index of the next cue of the current scene still to fire
    next_cue: usize,
    /// Set by a replay so the first tick enters scene 0 again
    pending_enter: bool,
    finish_caption: String,
}

impl<S: Scene> Scheduler<S> {
    /// Create an idle scheduler positioned at the start of the timeline.
    ///
    /// Nothing is drawn until [`reset`](Self::reset) or the first tick.
    pub fn new(registry: SceneRegistry<S>, narration: NarrationQueue) -> Self {
        Self {
            registry,
            clock: TimelineClock::new(),
            narration,
            phase: Phase::Idle,
            current_scene: 0,
            next_cue: 0,
            pending_enter: false,
            finish_caption: DEFAULT_FINISH_CAPTION.to_string(),
        }
    }

    /// Caption placed on the subtitle line when the sequence ends.
    pub fn with_finish_caption(mut self, caption: impl Into<String>) -> Self {
        self.finish_caption = caption.into();
        self
    }

    pub fn registry(&self) -> &SceneRegistry<S> {
        &self.registry
    }

    pub fn narration(&self) -> &NarrationQueue {
        &self.narration
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_playing(&self) -> bool {
        self.phase == Phase::Playing
    }

    /// Virtual seconds since the start of the timeline.
    pub fn elapsed(&self) -> f64 {
        self.clock.elapsed()
    }

    pub fn speed(&self) -> f64 {
        self.clock.speed()
    }

    /// Index of the scene currently on screen.
    pub fn current_scene(&self) -> usize {
        self.current_scene
    }

    /// Seconds into the current scene.
    pub fn local_time(&self) -> f64 {
        let start = self
            .registry
            .range_of(self.current_scene)
            .map(|range| range.start)
            .unwrap_or(0.0);
        (self.clock.elapsed() - start).max(0.0)
    }

    /// Advance one frame.
    ///
    /// `timestamp` is wall-clock seconds since any fixed epoch. Does nothing
    /// unless playing.
    pub fn tick(&mut self, timestamp: f64, stage: &mut Stage) -> TickOutcome {
        if self.phase != Phase::Playing {
            return TickOutcome::Inactive;
        }

        self.clock.advance(timestamp);
        let elapsed = self.clock.elapsed();

        let resolved = self.registry.resolve(elapsed);
        let entered = resolved != self.current_scene || self.pending_enter;
        if entered {
            self.narration.clear();
            debug!(
                from = self.current_scene,
                to = resolved,
                elapsed,
                "scene transition"
            );
            self.current_scene = resolved;
            self.pending_enter = false;
            self.enter_current(stage);
        }

        let local_time = self.local_time();
        self.fire_due_cues(local_time, stage);
        self.draw_current(local_time, stage);

        if elapsed >= self.registry.total_duration() {
            self.phase = Phase::Finished;
            self.clock.suspend();
            stage.subtitle.set(self.finish_caption.as_str());
            info!(elapsed, "sequence complete");
            return TickOutcome::Finished {
                scene: self.current_scene,
                local_time,
                entered,
            };
        }

        TickOutcome::Rendered {
            scene: self.current_scene,
            local_time,
            entered,
        }
    }

    /// Deliver speech-completion signals to the narration queue.
    pub fn pump_narration(&mut self) {
        self.narration.poll();
    }

    /// Stop all narration and release the scheduler.
    pub fn dispose(mut self) {
        self.narration.clear();
        debug!("scheduler disposed");
    }

    fn context<'a>(
        narration: &'a mut NarrationQueue,
        stage: &'a mut Stage,
        speed: f64,
    ) -> SceneContext<'a> {
        SceneContext::new(stage, narration, speed)
    }

    fn enter_current(&mut self, stage: &mut Stage) {
        self.next_cue = 0;
        let speed = self.clock.speed();
        if let Some(scene) = self.registry.get(self.current_scene) {
            debug!(index = self.current_scene, name = scene.name(), "entering scene");
            let mut ctx = Self::context(&mut self.narration, stage, speed);
            scene.on_enter(&mut ctx);
        }
    }

    fn fire_due_cues(&mut self, local_time: f64, stage: &mut Stage) {
        let speed = self.clock.speed();
        let Some(scene) = self.registry.get(self.current_scene) else {
            return;
        };
        let cues = scene.cues();
        while let Some(cue) = cues.get(self.next_cue) {
            if cue.at > local_time {
                break;
            }
            trace!(at = cue.at, text = cue.text, "cue");
            let mut ctx = Self::context(&mut self.narration, stage, speed);
            ctx.narrate(cue.text, cue.rate);
            self.next_cue += 1;
        }
    }

    fn draw_current(&mut self, local_time: f64, stage: &mut Stage) {
        let speed = self.clock.speed();
        stage.canvas.clear();
        if let Some(scene) = self.registry.get(self.current_scene) {
            let mut ctx = Self::context(&mut self.narration, stage, speed);
            scene.draw(local_time, &mut ctx);
        }
    }
}
