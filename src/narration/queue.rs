//! FIFO narration queue with a single in-flight slot.

use std::collections::VecDeque;

use tracing::{debug, trace, warn};

use super::backend::{SpeechBackend, UtteranceId};
use super::backends::Muted;

/// One line of narration.
#[derive(Debug, Clone, PartialEq)]
pub struct NarrationItem {
    /// Text to speak
    pub text: String,
    /// Speaking rate multiplier (1.0 = the backend's normal pace)
    pub rate: f64,
}

impl NarrationItem {
    /// Create an item. Non-finite or non-positive rates fall back to 1.0.
    pub fn new(text: impl Into<String>, rate: f64) -> Self {
        let rate = if rate.is_finite() && rate > 0.0 {
            rate
        } else {
            warn!(rate, "invalid narration rate, using 1.0");
            1.0
        };
        Self {
            text: text.into(),
            rate,
        }
    }
}

/// Serializes narration onto a one-at-a-time speech backend.
///
/// Items wait in FIFO order; at most one is handed to the backend at a
/// time. The next item is only handed over after [`complete`](Self::complete)
/// reports the in-flight one as finished.
pub struct NarrationQueue {
    backend: Box<dyn SpeechBackend>,
    pending: VecDeque<NarrationItem>,
    in_flight: Option<(UtteranceId, NarrationItem)>,
    enabled: bool,
    next_id: u64,
}

impl NarrationQueue {
    /// Create an empty queue over a backend.
    pub fn new(backend: Box<dyn SpeechBackend>, enabled: bool) -> Self {
        Self {
            backend,
            pending: VecDeque::new(),
            in_flight: None,
            enabled,
            next_id: 0,
        }
    }

    /// A queue that never speaks.
    pub fn disabled() -> Self {
        Self::new(Box::new(Muted), false)
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Whether enqueued lines will actually be delivered.
    pub fn is_active(&self) -> bool {
        self.enabled && self.backend.is_available()
    }

    /// Backend name for display.
    pub fn backend_name(&self) -> &'static str {
        self.backend.name()
    }

    /// Turn narration on or off. Turning it off drops everything queued.
    pub fn set_enabled(&mut self, enabled: bool) {
        if !enabled {
            self.clear();
        }
        self.enabled = enabled;
        debug!(enabled, backend = self.backend.name(), "narration toggled");
    }

    /// Number of items waiting behind the in-flight one.
    pub fn pending_len(&self) -> usize {
        self.pending.len()
    }

    /// The item currently being spoken.
    pub fn speaking(&self) -> Option<&NarrationItem> {
        self.in_flight.as_ref().map(|(_, item)| item)
    }

    /// Whether nothing is queued or in flight.
    pub fn is_idle(&self) -> bool {
        self.in_flight.is_none() && self.pending.is_empty()
    }

    /// Append a line and start it if nothing is being spoken.
    ///
    /// Does nothing while narration is inactive, so nothing piles up.
    pub fn enqueue(&mut self, text: impl Into<String>, rate: f64) {
        if !self.is_active() {
            return;
        }
        let item = NarrationItem::new(text, rate);
        trace!(text = %item.text, rate = item.rate, "narration enqueued");
        self.pending.push_back(item);
        self.drain();
    }

    /// Hand the next pending item to the backend if none is in flight.
    ///
    /// Items the backend refuses are logged and dropped.
    pub fn drain(&mut self) {
        if !self.is_active() || self.in_flight.is_some() {
            return;
        }

        while let Some(item) = self.pending.pop_front() {
            let id = UtteranceId(self.next_id);
            self.next_id += 1;

            match self.backend.speak(id, &item) {
                Ok(()) => {
                    debug!(%id, backend = self.backend.name(), text = %item.text, "narration started");
                    self.in_flight = Some((id, item));
                    return;
                }
                Err(e) => {
                    warn!(error = %e, text = %item.text, "dropping narration line");
                }
            }
        }
    }

    /// Completion signal for an utterance.
    ///
    /// Signals for anything other than the in-flight utterance (for example
    /// one that was cancelled by [`clear`](Self::clear)) are ignored.
    pub fn complete(&mut self, id: UtteranceId) {
        match &self.in_flight {
            Some((current, _)) if *current == id => {
                trace!(%id, "narration finished");
                self.in_flight = None;
                self.drain();
            }
            _ => trace!(%id, "ignoring stale completion"),
        }
    }

    /// Route completion signals from the backend into [`complete`](Self::complete).
    pub fn poll(&mut self) {
        while let Some(id) = self.backend.poll_finished() {
            self.complete(id);
        }
    }

    /// Stop speaking and forget everything queued.
    pub fn clear(&mut self) {
        if !self.is_idle() {
            debug!(pending = self.pending.len(), "narration cleared");
        }
        self.backend.cancel();
        self.pending.clear();
        self.in_flight = None;
    }
}

impl std::fmt::Debug for NarrationQueue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NarrationQueue")
            .field("backend", &self.backend.name())
            .field("pending", &self.pending)
            .field("in_flight", &self.in_flight)
            .field("enabled", &self.enabled)
            .finish()
    }
}
