//! Narration errors.

/// Errors that can occur while handing speech to a backend.
#[derive(Debug, thiserror::Error)]
pub enum NarrationError {
    #[error("Speech backend '{backend}' is not available on this system")]
    Unavailable { backend: &'static str },

    #[error("Failed to start speech backend '{backend}': {source}")]
    SpawnFailed {
        backend: &'static str,
        #[source]
        source: std::io::Error,
    },
}
