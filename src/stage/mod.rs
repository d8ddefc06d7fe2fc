//! Render target handed to scenes.
//!
//! A [`Stage`] bundles the two presentation sinks a scene writes to:
//! the [`Canvas`] it draws on and the [`Subtitle`] line it captions.

mod canvas;
mod subtitle;

pub use canvas::{Canvas, Cell, TextAlign};
pub use subtitle::Subtitle;

/// Canvas plus subtitle line.
#[derive(Debug, Clone, Default)]
pub struct Stage {
    pub canvas: Canvas,
    pub subtitle: Subtitle,
}

impl Stage {
    /// Create a stage with a blank canvas of the given size.
    pub fn new(width: u16, height: u16) -> Self {
        Self {
            canvas: Canvas::new(width, height),
            subtitle: Subtitle::new(),
        }
    }
}
