//! scenereel - plays a timed sequence of scenes with narration and subtitles.
//!
//! A [`Scheduler`] maps a speed-scaled virtual clock onto an ordered
//! [`SceneRegistry`], runs each scene's entry hook once per visit, fires
//! timed narration cues and redraws the [`Stage`] every frame. Narration is
//! serialized through a [`NarrationQueue`] over a pluggable speech backend.
//!
//! The terminal player, headless runner and CLI live in [`player`],
//! [`cli`] and the binary.

pub mod cli;
pub mod config;
pub mod logging;
pub mod narration;
pub mod player;
pub mod scene;
pub mod scheduler;
pub mod stage;
pub mod theme;
pub mod timeline;

pub use config::Config;
pub use narration::{NarrationQueue, SpeechBackend};
pub use scene::{Cue, Scene, SceneContext, SceneRegistry, Storyboard};
pub use scheduler::{Phase, PlaybackCommand, Scheduler, TickOutcome};
pub use stage::Stage;
pub use timeline::TimelineClock;
