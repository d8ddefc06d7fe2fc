//! Narration: queued speech delivered one line at a time.
//!
//! - `queue`: FIFO [`NarrationQueue`] with a single in-flight slot
//! - `backend`: the [`SpeechBackend`] trait engines implement
//! - `backends/`: espeak / say commands, a timed silent voice, and a muted stub
//!
//! The queue is driven from the frame loop: scenes enqueue lines, and the
//! loop calls [`NarrationQueue::poll`] between frames so completion signals
//! arrive on the same thread that schedules scenes.

mod backend;
pub mod backends;
mod error;
mod queue;

pub use backend::{SpeechBackend, SpeechMethod, UtteranceId};
pub use backends::{select_backend, BackendKind};
pub use error::NarrationError;
pub use queue::{NarrationItem, NarrationQueue};
