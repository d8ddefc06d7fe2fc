//! Silent narration paced like real speech.
//!
//! Useful where no speech engine is installed: the queue still advances at
//! a believable pace and the player shows the line being "spoken".

use std::time::{Duration, Instant};

use tracing::info;

use crate::narration::backend::{SpeechBackend, SpeechMethod, UtteranceId};
use crate::narration::error::NarrationError;
use crate::narration::queue::NarrationItem;

/// Shortest time any utterance is considered to take.
const MIN_UTTERANCE: Duration = Duration::from_millis(300);

/// Estimate how long `text` takes to say at `rate` x `words_per_minute`.
pub fn estimate_duration(text: &str, rate: f64, words_per_minute: u32) -> Duration {
    let words = text.split_whitespace().count().max(1) as f64;
    let per_minute = words_per_minute.max(1) as f64 * if rate > 0.0 { rate } else { 1.0 };
    let secs = words / per_minute * 60.0;
    Duration::from_secs_f64(secs).max(MIN_UTTERANCE)
}

/// Completes each utterance after its estimated speaking time.
#[derive(Debug)]
pub struct TimedVoice {
    words_per_minute: u32,
    current: Option<(UtteranceId, Instant)>,
}

impl TimedVoice {
    pub fn new(words_per_minute: u32) -> Self {
        Self {
            words_per_minute,
            current: None,
        }
    }
}

impl SpeechBackend for TimedVoice {
    fn method(&self) -> SpeechMethod {
        SpeechMethod::Timed
    }

    fn is_available(&self) -> bool {
        true
    }

    fn speak(&mut self, id: UtteranceId, item: &NarrationItem) -> Result<(), NarrationError> {
        let duration = estimate_duration(&item.text, item.rate, self.words_per_minute);
        info!(%id, text = %item.text, secs = duration.as_secs_f64(), "narration");
        self.current = Some((id, Instant::now() + duration));
        Ok(())
    }

    fn poll_finished(&mut self) -> Option<UtteranceId> {
        match self.current {
            Some((id, deadline)) if Instant::now() >= deadline => {
                self.current = None;
                Some(id)
            }
            _ => None,
        }
    }

    fn cancel(&mut self) {
        self.current = None;
    }
}
