//! Drawing surfaces that the game can render itself onto
use crate::consts;
use ratatui::{
    buffer::{Buffer, Cell},
    layout::{Position, Rect},
    style::{Color, Style},
};

/// A fixed-size 2D drawing surface addressed in pixels.
///
/// Rectangles are given as their top-left corner plus width & height.  Parts
/// of a rectangle that fall outside the surface are silently dropped.
pub(crate) trait Surface {
    /// Fill the entire surface with `color`
    fn clear(&mut self, color: Color);

    /// Paint the interior of a rectangle
    fn fill_rect(&mut self, x: i32, y: i32, width: i32, height: i32, color: Color);

    /// Outline a rectangle
    fn stroke_rect(&mut self, x: i32, y: i32, width: i32, height: i32, color: Color);

    /// Write `text` in the middle of the surface
    fn fill_text_centered(&mut self, text: &str, color: Color);
}

/// A [`Surface`] backed by a region of a terminal buffer.
///
/// Each `unit × unit` block of pixels becomes [`CELL_WIDTH`] terminal columns
/// by one terminal row, which keeps grid cells roughly square on screen.
/// Fills set the background color of the covered terminal cells; strokes
/// bracket each covered row with `[` and `]` in the stroke color.
///
/// [`CELL_WIDTH`]: consts::CELL_WIDTH
#[derive(Debug, Eq, PartialEq)]
pub(crate) struct BufferSurface<'a> {
    area: Rect,
    buf: &'a mut Buffer,
    unit: i32,
}

impl<'a> BufferSurface<'a> {
    pub(crate) fn new(area: Rect, buf: &'a mut Buffer, unit: i32) -> BufferSurface<'a> {
        BufferSurface { area, buf, unit }
    }

    /// Convert a pixel rectangle to the range of grid columns & rows it
    /// touches.  Returns `None` for empty rectangles.
    fn grid_span(&self, x: i32, y: i32, width: i32, height: i32) -> Option<GridSpan> {
        if width <= 0 || height <= 0 || self.unit <= 0 {
            return None;
        }
        Some(GridSpan {
            first_col: x.div_euclid(self.unit),
            last_col: (x + width - 1).div_euclid(self.unit),
            first_row: y.div_euclid(self.unit),
            last_row: (y + height - 1).div_euclid(self.unit),
        })
    }

    /// Return the terminal position of column `half` of grid cell `(col,
    /// row)`, or `None` if it lies outside `self.area`
    fn terminal_position(&self, col: i32, row: i32, half: u16) -> Option<Position> {
        let x = u16::try_from(col)
            .ok()?
            .checked_mul(consts::CELL_WIDTH)?
            .checked_add(half)?;
        let y = u16::try_from(row).ok()?;
        let pos = Position::new(self.area.x.checked_add(x)?, self.area.y.checked_add(y)?);
        self.area.contains(pos).then_some(pos)
    }

    fn paint<F: FnOnce(&mut Cell)>(&mut self, col: i32, row: i32, half: u16, f: F) {
        if let Some(pos) = self.terminal_position(col, row, half) {
            if let Some(cell) = self.buf.cell_mut(pos) {
                f(cell);
            }
        }
    }
}

impl Surface for BufferSurface<'_> {
    fn clear(&mut self, color: Color) {
        for pos in self.area.positions() {
            if let Some(cell) = self.buf.cell_mut(pos) {
                cell.reset();
                cell.set_bg(color);
            }
        }
    }

    fn fill_rect(&mut self, x: i32, y: i32, width: i32, height: i32, color: Color) {
        let Some(span) = self.grid_span(x, y, width, height) else {
            return;
        };
        for row in span.first_row..=span.last_row {
            for col in span.first_col..=span.last_col {
                for half in 0..consts::CELL_WIDTH {
                    self.paint(col, row, half, |cell| {
                        cell.set_bg(color);
                    });
                }
            }
        }
    }

    fn stroke_rect(&mut self, x: i32, y: i32, width: i32, height: i32, color: Color) {
        let Some(span) = self.grid_span(x, y, width, height) else {
            return;
        };
        let right_half = consts::CELL_WIDTH.saturating_sub(1);
        for row in span.first_row..=span.last_row {
            self.paint(span.first_col, row, 0, |cell| {
                cell.set_char('[').set_fg(color);
            });
            self.paint(span.last_col, row, right_half, |cell| {
                cell.set_char(']').set_fg(color);
            });
        }
    }

    fn fill_text_centered(&mut self, text: &str, color: Color) {
        let len = u16::try_from(text.chars().count()).unwrap_or(u16::MAX);
        let x = self.area.x + self.area.width.saturating_sub(len) / 2;
        let y = self.area.y + self.area.height / 2;
        self.buf.set_stringn(
            x,
            y,
            text,
            usize::from(self.area.width),
            Style::new().fg(color),
        );
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
struct GridSpan {
    first_col: i32,
    last_col: i32,
    first_row: i32,
    last_row: i32,
}
