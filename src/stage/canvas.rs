//! Fixed-size character canvas that scenes draw into.
//!
//! The canvas is a plain grid of styled cells; the player copies it into
//! the terminal frame and the `frame` command prints it as text. Drawing
//! operations take signed coordinates and silently clip.

use ratatui::style::Color;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Marker stored in the cell that follows a double-width character.
const CONTINUATION: char = '\0';

/// One character cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    pub symbol: char,
    pub fg: Color,
    pub bg: Color,
}

impl Cell {
    /// An empty cell using the terminal's default colors.
    pub const BLANK: Cell = Cell {
        symbol: ' ',
        fg: Color::Reset,
        bg: Color::Reset,
    };

    /// Whether this cell is covered by the wide character to its left.
    pub fn is_continuation(&self) -> bool {
        self.symbol == CONTINUATION
    }
}

impl Default for Cell {
    fn default() -> Self {
        Self::BLANK
    }
}

/// Horizontal anchoring for [`Canvas::text`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TextAlign {
    /// `x` is the first column of the text
    #[default]
    Left,
    /// `x` is the middle column of the text
    Center,
    /// `x` is one past the last column of the text
    Right,
}

/// A width x height grid of cells.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Canvas {
    width: u16,
    height: u16,
    cells: Vec<Cell>,
}

impl Canvas {
    /// Default surface size used by the player and the `frame` command.
    pub const DEFAULT_WIDTH: u16 = 80;
    pub const DEFAULT_HEIGHT: u16 = 22;

    /// Create a blank canvas.
    pub fn new(width: u16, height: u16) -> Self {
        Self {
            width,
            height,
            cells: vec![Cell::BLANK; width as usize * height as usize],
        }
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    /// Reset every cell to [`Cell::BLANK`].
    pub fn clear(&mut self) {
        self.cells.fill(Cell::BLANK);
    }

    /// Paint the whole canvas with a background color.
    pub fn fill(&mut self, bg: Color) {
        self.cells.fill(Cell {
            symbol: ' ',
            fg: Color::Reset,
            bg,
        });
    }

    /// Cell at a position, if it is on the canvas.
    pub fn cell(&self, x: u16, y: u16) -> Option<&Cell> {
        if x < self.width && y < self.height {
            self.cells.get(y as usize * self.width as usize + x as usize)
        } else {
            None
        }
    }

    fn cell_mut(&mut self, x: i32, y: i32) -> Option<&mut Cell> {
        if x < 0 || y < 0 || x >= self.width as i32 || y >= self.height as i32 {
            return None;
        }
        self.cells.get_mut(y as usize * self.width as usize + x as usize)
    }

    /// Draw one symbol, keeping the cell's background.
    pub fn put(&mut self, x: i32, y: i32, symbol: char, fg: Color) {
        if let Some(cell) = self.cell_mut(x, y) {
            cell.symbol = symbol;
            cell.fg = fg;
        }
    }

    /// Draw a single line of text anchored at `x`.
    ///
    /// Columns are measured in display width, so double-width characters
    /// occupy two cells.
    pub fn text(&mut self, x: i32, y: i32, text: &str, fg: Color, align: TextAlign) {
        let width = text.width() as i32;
        let mut col = match align {
            TextAlign::Left => x,
            TextAlign::Center => x - width / 2,
            TextAlign::Right => x - width,
        };

        for ch in text.chars() {
            let ch_width = ch.width().unwrap_or(0) as i32;
            if ch_width == 0 {
                continue;
            }
            self.put(col, y, ch, fg);
            if ch_width == 2 {
                self.put(col + 1, y, CONTINUATION, fg);
            }
            col += ch_width;
        }
    }

    /// Fill a rectangle with a background color, erasing its symbols.
    pub fn fill_rect(&mut self, x: i32, y: i32, w: i32, h: i32, bg: Color) {
        for row in y..y + h {
            for col in x..x + w {
                if let Some(cell) = self.cell_mut(col, row) {
                    *cell = Cell {
                        symbol: ' ',
                        fg: Color::Reset,
                        bg,
                    };
                }
            }
        }
    }

    /// Outline a rectangle with box-drawing characters.
    pub fn frame_rect(&mut self, x: i32, y: i32, w: i32, h: i32, fg: Color) {
        if w < 2 || h < 2 {
            return;
        }
        let (right, bottom) = (x + w - 1, y + h - 1);
        for col in x + 1..right {
            self.put(col, y, '─', fg);
            self.put(col, bottom, '─', fg);
        }
        for row in y + 1..bottom {
            self.put(x, row, '│', fg);
            self.put(right, row, '│', fg);
        }
        self.put(x, y, '┌', fg);
        self.put(right, y, '┐', fg);
        self.put(x, bottom, '└', fg);
        self.put(right, bottom, '┘', fg);
    }

    /// Plot an ellipse around a center point.
    ///
    /// Horizontal radius is doubled to compensate for terminal cells being
    /// roughly twice as tall as they are wide.
    pub fn ring(&mut self, cx: i32, cy: i32, radius: f64, symbol: char, fg: Color) {
        if !radius.is_finite() || radius <= 0.0 {
            return;
        }
        let steps = ((radius * 12.0) as usize).max(16);
        for step in 0..steps {
            let angle = step as f64 / steps as f64 * std::f64::consts::TAU;
            let x = cx + (angle.cos() * radius * 2.0).round() as i32;
            let y = cy + (angle.sin() * radius).round() as i32;
            self.put(x, y, symbol, fg);
        }
    }

    /// Render the symbols as text, one line per row, trailing blanks trimmed.
    pub fn to_plain_text(&self) -> String {
        let mut lines = Vec::with_capacity(self.height as usize);
        for row in self.cells.chunks(self.width.max(1) as usize) {
            let line: String = row
                .iter()
                .filter(|cell| !cell.is_continuation())
                .map(|cell| cell.symbol)
                .collect();
            lines.push(line.trim_end().to_string());
        }
        lines.join("\n")
    }
}

impl Default for Canvas {
    fn default() -> Self {
        Self::new(Self::DEFAULT_WIDTH, Self::DEFAULT_HEIGHT)
    }
}
