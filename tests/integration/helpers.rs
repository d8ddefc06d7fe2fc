//! Shared fixtures: a speech backend that records calls and probe scenes
//! that journal every hook.

use std::cell::RefCell;
use std::rc::Rc;

use scenereel::narration::{NarrationError, NarrationItem, SpeechMethod, UtteranceId};
use scenereel::scene::{Cue, Scene, SceneContext, SceneRegistry};
use scenereel::{NarrationQueue, Scheduler, SpeechBackend};

/// Everything a [`RecordingBackend`] was asked to do.
#[derive(Debug, Default)]
pub struct SpeechLog {
    /// Utterances started, with the rate they were given
    pub spoken: Vec<(UtteranceId, String, f64)>,
    pub cancels: usize,
    /// Completions to report on the next polls
    pub finished: Vec<UtteranceId>,
}

impl SpeechLog {
    pub fn texts(&self) -> Vec<String> {
        self.spoken.iter().map(|(_, text, _)| text.clone()).collect()
    }

    /// Mark the most recent utterance as finished.
    pub fn finish_last(&mut self) {
        if let Some((id, _, _)) = self.spoken.last() {
            self.finished.push(*id);
        }
    }
}

pub type SharedLog = Rc<RefCell<SpeechLog>>;

/// Speech backend that never makes a sound and finishes on request.
pub struct RecordingBackend {
    log: SharedLog,
}

impl SpeechBackend for RecordingBackend {
    fn method(&self) -> SpeechMethod {
        SpeechMethod::Timed
    }

    fn name(&self) -> &'static str {
        "recording"
    }

    fn is_available(&self) -> bool {
        true
    }

    fn speak(&mut self, id: UtteranceId, item: &NarrationItem) -> Result<(), NarrationError> {
        self.log
            .borrow_mut()
            .spoken
            .push((id, item.text.clone(), item.rate));
        Ok(())
    }

    fn poll_finished(&mut self) -> Option<UtteranceId> {
        let mut log = self.log.borrow_mut();
        if log.finished.is_empty() {
            None
        } else {
            Some(log.finished.remove(0))
        }
    }

    fn cancel(&mut self) {
        self.log.borrow_mut().cancels += 1;
    }
}

/// Enabled narration queue over a fresh [`RecordingBackend`].
pub fn recording_queue() -> (NarrationQueue, SharedLog) {
    let log = SharedLog::default();
    let backend = RecordingBackend {
        log: Rc::clone(&log),
    };
    (NarrationQueue::new(Box::new(backend), true), log)
}

pub type Journal = Rc<RefCell<Vec<String>>>;

/// Scene that journals `enter <name>` and `draw <name> <local>`, and
/// narrates its name on entry.
pub struct Probe {
    pub name: &'static str,
    pub duration: f64,
    pub cues: Vec<Cue>,
    pub journal: Journal,
}

impl Scene for Probe {
    fn name(&self) -> &str {
        self.name
    }

    fn duration(&self) -> f64 {
        self.duration
    }

    fn on_enter(&self, ctx: &mut SceneContext<'_>) {
        self.journal.borrow_mut().push(format!("enter {}", self.name));
        ctx.set_subtitle(self.name);
        ctx.narrate(self.name, 1.0);
    }

    fn cues(&self) -> &[Cue] {
        &self.cues
    }

    fn draw(&self, local_time: f64, _ctx: &mut SceneContext<'_>) {
        self.journal
            .borrow_mut()
            .push(format!("draw {} {:.2}", self.name, local_time));
    }
}

impl Probe {
    pub fn new(name: &'static str, duration: f64, journal: &Journal) -> Self {
        Self {
            name,
            duration,
            cues: Vec::new(),
            journal: Rc::clone(journal),
        }
    }
}

/// Scheduler over probes with the given `(name, duration)` pairs.
pub fn probe_scheduler(
    scenes: &[(&'static str, f64)],
) -> (Scheduler<Probe>, Journal, SharedLog) {
    let journal = Journal::default();
    let probes = scenes
        .iter()
        .map(|&(name, duration)| Probe::new(name, duration, &journal))
        .collect();
    let registry = SceneRegistry::new(probes).expect("valid probes");
    let (queue, log) = recording_queue();
    (Scheduler::new(registry, queue), journal, log)
}

/// Journal entries that start with `enter`.
pub fn entries(journal: &Journal) -> Vec<String> {
    journal
        .borrow()
        .iter()
        .filter(|line| line.starts_with("enter"))
        .cloned()
        .collect()
}
