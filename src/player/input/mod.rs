//! Input handling for the player.
//!
//! Dispatches terminal events to the keyboard handler and returns control
//! flow signals to the main loop.

mod keyboard;

pub use keyboard::{handle_key_event, map_key, KeyAction};

use crossterm::event::Event;

use crate::player::state::{InputResult, PlayerState};
use crate::scene::Scene;
use crate::scheduler::Scheduler;
use crate::stage::Stage;

/// Handle any input event.
///
/// Resizes need no handling here; the next draw picks up the new size.
pub fn handle_event<S: Scene>(
    event: Event,
    state: &mut PlayerState,
    scheduler: &mut Scheduler<S>,
    stage: &mut Stage,
) -> InputResult {
    match event {
        Event::Key(key) => handle_key_event(key, state, scheduler, stage),
        _ => InputResult::Continue,
    }
}
