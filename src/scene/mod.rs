//! Scenes and the registry that orders them on the timeline.
//!
//! A scene is a named, fixed-length stretch of the timeline with two
//! behaviours: a one-shot [`Scene::on_enter`] that runs when playback
//! arrives in it, and [`Scene::draw`] which renders it at a scene-local time.
//! Scenes can also carry timed narration [`Cue`]s.

mod registry;
pub mod storyboard;

pub use registry::{RegistryError, SceneRange, SceneRegistry};
pub use storyboard::Storyboard;

use crate::narration::NarrationQueue;
use crate::stage::{Canvas, Stage};

/// A narration line spoken a fixed time after a scene is entered.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Cue {
    /// Scene-local time in virtual seconds
    pub at: f64,
    /// Line to speak
    pub text: &'static str,
    /// Rate multiplier, scaled by the playback speed when the cue fires
    pub rate: f64,
}

impl Cue {
    pub const fn new(at: f64, text: &'static str, rate: f64) -> Self {
        Self { at, text, rate }
    }
}

/// What a scene may touch while entering or drawing.
pub struct SceneContext<'a> {
    stage: &'a mut Stage,
    narration: &'a mut NarrationQueue,
    speed: f64,
}

impl<'a> SceneContext<'a> {
    pub fn new(stage: &'a mut Stage, narration: &'a mut NarrationQueue, speed: f64) -> Self {
        Self {
            stage,
            narration,
            speed,
        }
    }

    /// The render target.
    pub fn canvas(&mut self) -> &mut Canvas {
        &mut self.stage.canvas
    }

    /// Replace the subtitle line; an empty string clears it.
    pub fn set_subtitle(&mut self, text: &str) {
        self.stage.subtitle.set(text);
    }

    /// Queue a narration line. `rate` is scaled by the current playback
    /// speed, which is fixed for this line from here on.
    pub fn narrate(&mut self, text: &str, rate: f64) {
        self.narration.enqueue(text, rate * self.speed);
    }

    /// Playback speed at the time of the call.
    pub fn speed(&self) -> f64 {
        self.speed
    }
}

/// One entry of the timeline.
pub trait Scene {
    /// Display name.
    fn name(&self) -> &str;

    /// Length in virtual seconds. Must be finite and positive.
    fn duration(&self) -> f64;

    /// Runs once each time playback enters the scene.
    fn on_enter(&self, _ctx: &mut SceneContext<'_>) {}

    /// Timed narration, ordered by `at`.
    fn cues(&self) -> &[Cue] {
        &[]
    }

    /// Render the scene at `local_time` seconds since its start.
    fn draw(&self, local_time: f64, ctx: &mut SceneContext<'_>);
}
