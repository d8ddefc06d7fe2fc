//! Speech through an installed text-to-speech executable.

use std::process::{Child, Command, Stdio};

use tracing::{debug, warn};

use crate::narration::backend::{SpeechBackend, SpeechMethod, UtteranceId};
use crate::narration::error::NarrationError;
use crate::narration::queue::NarrationItem;

/// Speaking-rate bounds accepted by the engines, in words per minute.
const MIN_WPM: f64 = 80.0;
const MAX_WPM: f64 = 450.0;

/// Speaks each utterance by spawning `espeak-ng`, `espeak` or `say`.
///
/// One child process per utterance; completion is detected with
/// `try_wait`, cancellation kills the child.
pub struct SpeechCommand {
    method: SpeechMethod,
    words_per_minute: u32,
    available: bool,
    current: Option<(UtteranceId, Child)>,
}

impl SpeechCommand {
    /// Linux eSpeak NG.
    pub fn espeak_ng(words_per_minute: u32) -> Self {
        Self::new(SpeechMethod::EspeakNg, words_per_minute)
    }

    /// Linux classic eSpeak.
    pub fn espeak(words_per_minute: u32) -> Self {
        Self::new(SpeechMethod::Espeak, words_per_minute)
    }

    /// macOS `say`.
    pub fn say(words_per_minute: u32) -> Self {
        Self::new(SpeechMethod::Say, words_per_minute)
    }

    fn new(method: SpeechMethod, words_per_minute: u32) -> Self {
        let supported = match method {
            SpeechMethod::Say => cfg!(target_os = "macos"),
            _ => cfg!(unix),
        };
        Self {
            method,
            words_per_minute,
            available: supported && Self::tool_exists(method.name()),
            current: None,
        }
    }

    /// Check if the executable is installed.
    fn tool_exists(program: &str) -> bool {
        Command::new("which")
            .arg(program)
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status()
            .map(|s| s.success())
            .unwrap_or(false)
    }

    /// Command-line arguments for one utterance.
    fn args(&self, item: &NarrationItem) -> Vec<String> {
        let wpm = (self.words_per_minute as f64 * item.rate)
            .round()
            .clamp(MIN_WPM, MAX_WPM) as u32;
        let rate_flag = match self.method {
            SpeechMethod::Say => "-r",
            _ => "-s",
        };
        vec![rate_flag.to_string(), wpm.to_string(), item.text.clone()]
    }
}

impl SpeechBackend for SpeechCommand {
    fn method(&self) -> SpeechMethod {
        self.method
    }

    fn is_available(&self) -> bool {
        self.available
    }

    fn speak(&mut self, id: UtteranceId, item: &NarrationItem) -> Result<(), NarrationError> {
        if !self.available {
            return Err(NarrationError::Unavailable {
                backend: self.name(),
            });
        }
        // The queue never overlaps utterances, but never leak a child either
        self.cancel();

        let child = Command::new(self.method.name())
            .args(self.args(item))
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
            .map_err(|source| NarrationError::SpawnFailed {
                backend: self.method.name(),
                source,
            })?;

        self.current = Some((id, child));
        Ok(())
    }

    fn poll_finished(&mut self) -> Option<UtteranceId> {
        let (id, child) = self.current.as_mut()?;
        let id = *id;
        match child.try_wait() {
            Ok(Some(status)) => {
                if !status.success() {
                    warn!(%id, %status, backend = self.method.name(), "speech exited with failure");
                }
                self.current = None;
                Some(id)
            }
            Ok(None) => None,
            Err(e) => {
                warn!(%id, error = %e, "lost track of speech process");
                self.current = None;
                Some(id)
            }
        }
    }

    fn cancel(&mut self) {
        if let Some((id, mut child)) = self.current.take() {
            // Already exited is fine
            let _ = child.kill();
            let _ = child.wait();
            debug!(%id, backend = self.method.name(), "speech cancelled");
        }
    }
}

impl Drop for SpeechCommand {
    fn drop(&mut self) {
        self.cancel();
    }
}
