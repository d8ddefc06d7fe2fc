//! Concrete speech backends.

mod command;
mod muted;
mod timed;

pub use command::SpeechCommand;
pub use muted::Muted;
pub use timed::{estimate_duration, TimedVoice};

use serde::{Deserialize, Serialize};

use super::backend::SpeechBackend;

/// Backend selection as written in config files and on the command line.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "kebab-case")]
pub enum BackendKind {
    /// First installed engine, falling back to timed
    #[default]
    Auto,
    /// eSpeak NG
    EspeakNg,
    /// Classic eSpeak
    Espeak,
    /// macOS say
    Say,
    /// Silent, paced like speech
    Timed,
    /// No narration
    None,
}

/// Get the platform-appropriate speech engines in priority order.
pub fn platform_backends(words_per_minute: u32) -> Vec<Box<dyn SpeechBackend>> {
    #[cfg(target_os = "macos")]
    {
        vec![Box::new(SpeechCommand::say(words_per_minute))]
    }

    #[cfg(target_os = "linux")]
    {
        vec![
            Box::new(SpeechCommand::espeak_ng(words_per_minute)),
            Box::new(SpeechCommand::espeak(words_per_minute)),
        ]
    }

    #[cfg(not(any(target_os = "macos", target_os = "linux")))]
    {
        let _ = words_per_minute;
        vec![]
    }
}

/// Build the backend for a configured kind.
///
/// `Auto` picks the first available platform engine and falls back to
/// [`TimedVoice`]. Explicitly named engines are returned even when not
/// installed; the queue then degrades to a no-op.
pub fn select_backend(kind: BackendKind, words_per_minute: u32) -> Box<dyn SpeechBackend> {
    match kind {
        BackendKind::Auto => platform_backends(words_per_minute)
            .into_iter()
            .find(|backend| backend.is_available())
            .unwrap_or_else(|| Box::new(TimedVoice::new(words_per_minute))),
        BackendKind::EspeakNg => Box::new(SpeechCommand::espeak_ng(words_per_minute)),
        BackendKind::Espeak => Box::new(SpeechCommand::espeak(words_per_minute)),
        BackendKind::Say => Box::new(SpeechCommand::say(words_per_minute)),
        BackendKind::Timed => Box::new(TimedVoice::new(words_per_minute)),
        BackendKind::None => Box::new(Muted),
    }
}
