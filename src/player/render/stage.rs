//! Widget that copies the stage canvas into the terminal frame.

use ratatui::{buffer::Buffer, layout::Rect, widgets::Widget};

use crate::stage::Canvas;

/// Draws a [`Canvas`] centered in its area, clipping whatever does not fit.
pub struct StageView<'a> {
    canvas: &'a Canvas,
}

impl<'a> StageView<'a> {
    pub fn new(canvas: &'a Canvas) -> Self {
        Self { canvas }
    }

    /// Area the canvas occupies when centered in `area`.
    pub fn placement(&self, area: Rect) -> Rect {
        let width = self.canvas.width().min(area.width);
        let height = self.canvas.height().min(area.height);
        Rect {
            x: area.x + (area.width - width) / 2,
            y: area.y + (area.height - height) / 2,
            width,
            height,
        }
    }
}

impl Widget for StageView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let target = self.placement(area);
        // Crop symmetrically when the terminal is smaller than the canvas
        let skip_x = (self.canvas.width() - target.width) / 2;
        let skip_y = (self.canvas.height() - target.height) / 2;

        for row in 0..target.height {
            for col in 0..target.width {
                let Some(cell) = self.canvas.cell(col + skip_x, row + skip_y) else {
                    continue;
                };
                if cell.is_continuation() {
                    continue;
                }
                if let Some(out) = buf.cell_mut((target.x + col, target.y + row)) {
                    out.set_char(cell.symbol).set_fg(cell.fg).set_bg(cell.bg);
                }
            }
        }
    }
}
