//! Backend used when narration is switched off.

use crate::narration::backend::{SpeechBackend, SpeechMethod, UtteranceId};
use crate::narration::error::NarrationError;
use crate::narration::queue::NarrationItem;

/// Never available; every utterance is refused.
#[derive(Debug, Default, Clone, Copy)]
pub struct Muted;

impl SpeechBackend for Muted {
    fn method(&self) -> SpeechMethod {
        SpeechMethod::Muted
    }

    fn is_available(&self) -> bool {
        false
    }

    fn speak(&mut self, _id: UtteranceId, _item: &NarrationItem) -> Result<(), NarrationError> {
        Err(NarrationError::Unavailable {
            backend: self.name(),
        })
    }

    fn poll_finished(&mut self) -> Option<UtteranceId> {
        None
    }

    fn cancel(&mut self) {}
}
