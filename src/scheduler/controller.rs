//! Playback controls for the scheduler.
//!
//! These are the only operations the presentation layer uses to change the
//! timeline: play, pause, reset and speed. Key bindings and CLI options are
//! translated into [`PlaybackCommand`] values and applied with
//! [`Scheduler::apply`].

use tracing::{info, warn};

use super::{Phase, Scheduler};
use crate::scene::Scene;
use crate::stage::Stage;
use crate::timeline::{ClockError, MAX_SPEED, MIN_SPEED};

/// Factor used by the stepped speed controls.
const SPEED_STEP: f64 = 1.5;

/// A request from the presentation layer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PlaybackCommand {
    Play,
    Pause,
    /// Pause when playing, play otherwise
    TogglePlay,
    Reset,
    SetSpeed(f64),
    SpeedUp,
    SpeedDown,
    ToggleNarration,
}

impl<S: Scene> Scheduler<S> {
    /// Start or resume ticking.
    ///
    /// A no-op while already playing. Resuming keeps the elapsed time; the
    /// first tick afterwards only re-anchors the clock. After the sequence
    /// finished, playback restarts from the beginning and scene 0 is
    /// entered again on the first tick.
    ///
    /// Returns whether anything changed.
    pub fn play(&mut self) -> bool {
        match self.phase {
            Phase::Playing => false,
            Phase::Idle => {
                self.clock.suspend();
                self.phase = Phase::Playing;
                info!(elapsed = self.clock.elapsed(), "playing");
                true
            }
            Phase::Finished => {
                self.narration.clear();
                self.clock.reset();
                self.current_scene = 0;
                self.next_cue = 0;
                self.pending_enter = true;
                self.phase = Phase::Playing;
                info!("replaying from the start");
                true
            }
        }
    }

    /// Stop ticking and silence narration. Elapsed time is kept.
    pub fn pause(&mut self) {
        if self.phase == Phase::Playing {
            self.phase = Phase::Idle;
            info!(elapsed = self.clock.elapsed(), "paused");
        }
        self.clock.suspend();
        self.narration.clear();
    }

    /// Rewind to the start without playing.
    ///
    /// Clears narration and the subtitle, then enters and draws scene 0 at
    /// time zero so the stage shows the opening frame.
    pub fn reset(&mut self, stage: &mut Stage) {
        self.phase = Phase::Idle;
        self.clock.reset();
        self.narration.clear();
        self.current_scene = 0;
        self.pending_enter = false;
        stage.subtitle.clear();

        self.enter_current(stage);
        self.draw_current(0.0, stage);
        info!("reset");
    }

    /// Change the playback speed.
    ///
    /// Invalid values are rejected and the previous speed is kept. Narration
    /// already queued keeps the rate it was queued with.
    pub fn set_speed(&mut self, speed: f64) -> Result<(), ClockError> {
        match self.clock.set_speed(speed) {
            Ok(()) => {
                info!(speed, "speed changed");
                Ok(())
            }
            Err(e) => {
                warn!(error = %e, "speed change rejected");
                Err(e)
            }
        }
    }

    /// Multiply the speed by 1.5, up to [`MAX_SPEED`].
    pub fn speed_up(&mut self) {
        let speed = (self.clock.speed() * SPEED_STEP).min(MAX_SPEED);
        let _ = self.set_speed(speed);
    }

    /// Divide the speed by 1.5, down to [`MIN_SPEED`].
    pub fn speed_down(&mut self) {
        let speed = (self.clock.speed() / SPEED_STEP).max(MIN_SPEED);
        let _ = self.set_speed(speed);
    }

    /// Switch narration on or off. Switching off drops queued lines.
    pub fn set_narration_enabled(&mut self, enabled: bool) {
        self.narration.set_enabled(enabled);
    }

    pub fn toggle_narration(&mut self) {
        let enabled = !self.narration.is_enabled();
        self.set_narration_enabled(enabled);
    }

    /// Apply a command.
    pub fn apply(&mut self, command: PlaybackCommand, stage: &mut Stage) -> Result<(), ClockError> {
        match command {
            PlaybackCommand::Play => {
                self.play();
            }
            PlaybackCommand::Pause => self.pause(),
            PlaybackCommand::TogglePlay => {
                if self.is_playing() {
                    self.pause();
                } else {
                    self.play();
                }
            }
            PlaybackCommand::Reset => self.reset(stage),
            PlaybackCommand::SetSpeed(speed) => self.set_speed(speed)?,
            PlaybackCommand::SpeedUp => self.speed_up(),
            PlaybackCommand::SpeedDown => self.speed_down(),
            PlaybackCommand::ToggleNarration => self.toggle_narration(),
        }
        Ok(())
    }
}
