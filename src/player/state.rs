//! Player UI state and shared types.

/// Result of processing an input event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputResult {
    /// Keep running
    Continue,
    /// Leave the player
    Quit,
}

/// UI state that lives outside the scheduler.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayerState {
    /// Whether the help overlay is visible
    pub show_help: bool,
    /// Whether the subtitle line is drawn
    pub show_subtitles: bool,
}

impl PlayerState {
    pub fn new(show_subtitles: bool) -> Self {
        Self {
            show_help: false,
            show_subtitles,
        }
    }

    /// Toggle help overlay visibility.
    pub fn toggle_help(&mut self) {
        self.show_help = !self.show_help;
    }
}
