//! Effective playback settings: config file values overridden by flags.

use std::time::Duration;

use anyhow::{bail, Result};

use crate::cli::PlayArgs;
use crate::config::{Config, FPS_RANGE};
use crate::narration::{select_backend, BackendKind, NarrationQueue};
use crate::scene::{Scene, SceneRegistry};
use crate::scheduler::Scheduler;
use crate::theme::ThemeName;

#[derive(Debug, Clone, PartialEq)]
pub struct PlaySettings {
    pub speed: f64,
    pub fps: u32,
    pub autoplay: bool,
    pub finish_caption: String,
    pub narration_enabled: bool,
    pub backend: BackendKind,
    pub words_per_minute: u32,
    pub theme: ThemeName,
    pub show_subtitles: bool,
}

impl PlaySettings {
    /// Merge the config with command-line overrides.
    pub fn resolve(config: &Config, args: &PlayArgs) -> Result<Self> {
        let fps = args.fps.unwrap_or(config.playback.fps);
        if !FPS_RANGE.contains(&fps) {
            bail!(
                "--fps must be between {} and {}, got {}",
                FPS_RANGE.start(),
                FPS_RANGE.end(),
                fps
            );
        }

        let backend = args.voice.unwrap_or(config.narration.backend);
        let narration_enabled =
            config.narration.enabled && !args.no_voice && backend != BackendKind::None;

        Ok(Self {
            speed: args.speed.unwrap_or(config.playback.speed),
            fps,
            autoplay: args.autoplay || config.playback.autoplay,
            finish_caption: config.playback.finish_caption.clone(),
            narration_enabled,
            backend,
            words_per_minute: config.narration.words_per_minute,
            theme: config.display.theme,
            show_subtitles: config.display.show_subtitles,
        })
    }

    /// Time between frames.
    pub fn frame_interval(&self) -> Duration {
        Duration::from_secs_f64(1.0 / f64::from(self.fps.max(1)))
    }

    /// Narration queue over the configured backend.
    ///
    /// The backend is built even when narration starts switched off, so it
    /// can be turned on during playback. Only the `none` backend is silent
    /// for good.
    pub fn narration(&self) -> NarrationQueue {
        if self.backend == BackendKind::None {
            return NarrationQueue::disabled();
        }
        NarrationQueue::new(
            select_backend(self.backend, self.words_per_minute),
            self.narration_enabled,
        )
    }

    /// Scheduler over `registry` with these settings applied.
    ///
    /// Fails on an invalid speed.
    pub fn build_scheduler<S: Scene>(&self, registry: SceneRegistry<S>) -> Result<Scheduler<S>> {
        let mut scheduler = Scheduler::new(registry, self.narration())
            .with_finish_caption(self.finish_caption.clone());
        scheduler.set_speed(self.speed)?;
        Ok(scheduler)
    }
}
