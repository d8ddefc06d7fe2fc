//! SpeechBackend trait and the identifiers shared with the queue.

use std::fmt;

use super::error::NarrationError;
use super::queue::NarrationItem;

/// Tag attached to each utterance handed to a backend.
///
/// Completion signals carry the tag back so the queue can ignore signals
/// that belong to an utterance it already cancelled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct UtteranceId(pub u64);

impl fmt::Display for UtteranceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Which engine a backend drives.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpeechMethod {
    /// Linux eSpeak NG
    EspeakNg,
    /// Linux classic eSpeak
    Espeak,
    /// macOS speech synthesizer
    Say,
    /// Silent, duration-estimated narration
    Timed,
    /// Narration switched off
    Muted,
}

impl SpeechMethod {
    /// Engine name for display/logging (also the executable name for
    /// command backends).
    pub fn name(&self) -> &'static str {
        match self {
            Self::EspeakNg => "espeak-ng",
            Self::Espeak => "espeak",
            Self::Say => "say",
            Self::Timed => "timed",
            Self::Muted => "muted",
        }
    }
}

/// A speech engine that speaks one utterance at a time.
///
/// Backends never block: `speak` starts an utterance and returns, and the
/// owner polls [`poll_finished`](Self::poll_finished) between frames to
/// learn when it ended.
pub trait SpeechBackend {
    /// The engine this backend drives.
    fn method(&self) -> SpeechMethod;

    /// Human-readable name for status lines and errors.
    fn name(&self) -> &'static str {
        self.method().name()
    }

    /// Whether the engine can speak on this system.
    ///
    /// Should be cheap; command backends resolve this once at construction.
    fn is_available(&self) -> bool;

    /// Start speaking `item`, tagged with `id`.
    fn speak(&mut self, id: UtteranceId, item: &NarrationItem) -> Result<(), NarrationError>;

    /// Report the utterance that finished since the last poll, if any.
    fn poll_finished(&mut self) -> Option<UtteranceId>;

    /// Stop the current utterance immediately. Safe to call at any time.
    fn cancel(&mut self);
}
