//! Keyboard input handling for the player.
//!
//! Keys are first mapped to a [`KeyAction`] so the bindings can be tested
//! without a scheduler, then applied.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use tracing::warn;

use crate::player::state::{InputResult, PlayerState};
use crate::scene::Scene;
use crate::scheduler::{PlaybackCommand, Scheduler};
use crate::stage::Stage;
use crate::timeline::DEFAULT_SPEED;

/// What a key press asks for.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum KeyAction {
    Playback(PlaybackCommand),
    ToggleHelp,
    Quit,
    Ignore,
}

/// Map a key to its action.
pub fn map_key(key: &KeyEvent) -> KeyAction {
    match key.code {
        // === Quit ===
        KeyCode::Char('q') | KeyCode::Esc => KeyAction::Quit,
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => KeyAction::Quit,

        KeyCode::Char('?') => KeyAction::ToggleHelp,

        // === Playback controls ===
        KeyCode::Char(' ') => KeyAction::Playback(PlaybackCommand::TogglePlay),
        KeyCode::Char('p') => KeyAction::Playback(PlaybackCommand::Play),
        KeyCode::Char('s') => KeyAction::Playback(PlaybackCommand::Pause),
        KeyCode::Char('r') => KeyAction::Playback(PlaybackCommand::Reset),
        KeyCode::Char('+') | KeyCode::Char('=') => KeyAction::Playback(PlaybackCommand::SpeedUp),
        KeyCode::Char('-') | KeyCode::Char('_') => KeyAction::Playback(PlaybackCommand::SpeedDown),
        KeyCode::Char('1') => KeyAction::Playback(PlaybackCommand::SetSpeed(DEFAULT_SPEED)),
        KeyCode::Char('n') => KeyAction::Playback(PlaybackCommand::ToggleNarration),

        _ => KeyAction::Ignore,
    }
}

/// Handle a keyboard event.
pub fn handle_key_event<S: Scene>(
    key: KeyEvent,
    state: &mut PlayerState,
    scheduler: &mut Scheduler<S>,
    stage: &mut Stage,
) -> InputResult {
    if key.kind != KeyEventKind::Press {
        return InputResult::Continue;
    }

    // If help is showing, any key closes it
    if state.show_help {
        state.show_help = false;
        return InputResult::Continue;
    }

    match map_key(&key) {
        KeyAction::Quit => InputResult::Quit,
        KeyAction::ToggleHelp => {
            state.toggle_help();
            InputResult::Continue
        }
        KeyAction::Playback(command) => {
            if let Err(e) = scheduler.apply(command, stage) {
                warn!(error = %e, ?command, "playback command failed");
            }
            InputResult::Continue
        }
        KeyAction::Ignore => InputResult::Continue,
    }
}
