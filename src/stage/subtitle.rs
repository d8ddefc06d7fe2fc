//! Subtitle sink.

/// The caption line shown under the stage.
///
/// Last write wins; setting an empty string clears it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Subtitle {
    text: String,
}

impl Subtitle {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the caption.
    pub fn set(&mut self, text: impl Into<String>) {
        self.text = text.into();
    }

    pub fn clear(&mut self) {
        self.text.clear();
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}
