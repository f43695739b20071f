//! Terminal cell grid: the framebuffer packed into half blocks plus text.

use std::io::Write;

use crossterm::style::{
    Attribute, Color, Print, SetAttribute, SetBackgroundColor, SetForegroundColor,
};
use crossterm::{cursor, queue};

use crate::color::Rgb;
use crate::graphics::Framebuffer;

/// Upper half block: foreground paints the top pixel, background the bottom one
const HALF_BLOCK: char = '▀';

/// Rectangle in cell coordinates; rows may start above the viewport
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct Rect {
    pub col: isize,
    pub row: isize,
    pub width: usize,
    pub height: usize,
}

impl Rect {
    pub fn new(col: isize, row: isize, width: usize, height: usize) -> Self {
        Rect { col, row, width, height }
    }

    pub fn contains(&self, col: isize, row: isize) -> bool {
        col >= self.col
            && row >= self.row
            && col < self.col + self.width as isize
            && row < self.row + self.height as isize
    }

    /// True when any row of the rectangle falls within `[first, last)`
    pub fn overlaps_rows(&self, first: isize, last: isize) -> bool {
        self.row < last && self.row + self.height as isize > first
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Cell {
    pub ch: char,
    pub fg: Rgb,
    pub bg: Rgb,
    pub bold: bool,
}

#[derive(Clone, Debug)]
pub struct Screen {
    cols: usize,
    rows: usize,
    cells: Vec<Cell>,
}

impl Screen {
    /// Packs pairs of pixel rows into cells; an odd last row is dropped
    pub fn from_framebuffer(framebuffer: &Framebuffer) -> Self {
        let cols = framebuffer.width();
        let rows = framebuffer.height() / 2;
        let mut cells = Vec::with_capacity(cols * rows);
        for row in 0..rows {
            for col in 0..cols {
                cells.push(Cell {
                    ch: HALF_BLOCK,
                    fg: framebuffer.pixel(col, row * 2),
                    bg: framebuffer.pixel(col, row * 2 + 1),
                    bold: false,
                });
            }
        }
        Screen { cols, rows, cells }
    }

    fn cell_mut(&mut self, col: isize, row: isize) -> Option<&mut Cell> {
        if col < 0 || row < 0 || col as usize >= self.cols || row as usize >= self.rows {
            return None;
        }
        Some(&mut self.cells[row as usize * self.cols + col as usize])
    }

    /// Blends both half pixels of every cell in `rect` towards `color`
    pub fn fill(&mut self, rect: Rect, color: Rgb, opacity: f64) {
        for row in rect.row..rect.row + rect.height as isize {
            for col in rect.col..rect.col + rect.width as isize {
                if let Some(cell) = self.cell_mut(col, row) {
                    cell.bg = cell.bg.mix(color, opacity);
                    if cell.ch == HALF_BLOCK {
                        cell.fg = cell.fg.mix(color, opacity);
                    }
                }
            }
        }
    }

    /// Writes `text` starting at (`col`, `row`), clipped to the grid.
    ///
    /// Cells keep their background; a half block underneath is flattened to
    /// the average of its two pixels.
    pub fn put_str(&mut self, col: isize, row: isize, text: &str, fg: Rgb, bold: bool) {
        for (i, ch) in text.chars().enumerate() {
            if let Some(cell) = self.cell_mut(col + i as isize, row) {
                if cell.ch == HALF_BLOCK {
                    cell.bg = cell.fg.mix(cell.bg, 0.5);
                }
                cell.ch = ch;
                cell.fg = fg;
                cell.bold = bold;
            }
        }
    }

    /// Draws a single-line box outline along the edge of `rect`
    pub fn frame(&mut self, rect: Rect, color: Rgb) {
        if rect.width < 2 || rect.height < 2 {
            return;
        }
        let right = rect.col + rect.width as isize - 1;
        let bottom = rect.row + rect.height as isize - 1;
        let horizontal: String = "─".repeat(rect.width - 2);
        self.put_str(rect.col, rect.row, &format!("┌{horizontal}┐"), color, false);
        self.put_str(rect.col, bottom, &format!("└{horizontal}┘"), color, false);
        for row in rect.row + 1..bottom {
            self.put_str(rect.col, row, "│", color, false);
            self.put_str(right, row, "│", color, false);
        }
    }

    /// Queues the whole grid as 24-bit colour output
    pub fn write_to<W: Write>(&self, out: &mut W) -> std::io::Result<()> {
        let mut fg = None;
        let mut bg = None;
        let mut bold = false;
        for row in 0..self.rows {
            queue!(out, cursor::MoveTo(0, row as u16))?;
            for cell in &self.cells[row * self.cols..(row + 1) * self.cols] {
                if cell.bold != bold {
                    let attr = if cell.bold { Attribute::Bold } else { Attribute::NormalIntensity };
                    queue!(out, SetAttribute(attr))?;
                    bold = cell.bold;
                }
                if fg != Some(cell.fg) {
                    queue!(out, SetForegroundColor(to_term(cell.fg)))?;
                    fg = Some(cell.fg);
                }
                if bg != Some(cell.bg) {
                    queue!(out, SetBackgroundColor(to_term(cell.bg)))?;
                    bg = Some(cell.bg);
                }
                queue!(out, Print(cell.ch))?;
            }
        }
        queue!(out, SetAttribute(Attribute::Reset))?;
        Ok(())
    }

    /// Plain line-by-line output without cursor moves, for piping snapshots
    pub fn write_lines<W: Write>(&self, out: &mut W) -> std::io::Result<()> {
        for row in 0..self.rows {
            let mut fg = None;
            let mut bg = None;
            for cell in &self.cells[row * self.cols..(row + 1) * self.cols] {
                if fg != Some(cell.fg) {
                    queue!(out, SetForegroundColor(to_term(cell.fg)))?;
                    fg = Some(cell.fg);
                }
                if bg != Some(cell.bg) {
                    queue!(out, SetBackgroundColor(to_term(cell.bg)))?;
                    bg = Some(cell.bg);
                }
                let attr = if cell.bold { Attribute::Bold } else { Attribute::NormalIntensity };
                queue!(out, SetAttribute(attr), Print(cell.ch))?;
            }
            queue!(out, SetAttribute(Attribute::Reset), Print('\n'))?;
        }
        out.flush()
    }
}

#[cfg(test)]
impl Screen {
    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cell(&self, col: usize, row: usize) -> &Cell {
        &self.cells[row * self.cols + col]
    }

    /// Text of one row
    pub fn row_text(&self, row: usize) -> String {
        self.cells[row * self.cols..(row + 1) * self.cols]
            .iter()
            .map(|c| c.ch)
            .collect()
    }
}

fn to_term(color: Rgb) -> Color {
    Color::Rgb {
        r: color.r,
        g: color.g,
        b: color.b,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn screen(cols: usize, rows: usize) -> Screen {
        Screen::from_framebuffer(&Framebuffer::new(cols, rows * 2, Rgb::BLACK))
    }

    #[test]
    fn packs_two_pixel_rows_per_cell() {
        let mut fb = Framebuffer::new(2, 4, Rgb::BLACK);
        fb.blend(0, 0, Rgb::WHITE, 1.0);
        let s = Screen::from_framebuffer(&fb);
        assert_eq!((s.cols(), s.rows()), (2, 2));
        assert_eq!(s.cell(0, 0).fg, Rgb::WHITE);
        assert_eq!(s.cell(0, 0).bg, Rgb::BLACK);
        assert_eq!(s.cell(0, 0).ch, HALF_BLOCK);
    }

    #[test]
    fn text_is_clipped() {
        let mut s = screen(5, 2);
        s.put_str(-2, 0, "abcdefgh", Rgb::WHITE, false);
        assert_eq!(s.row_text(0), "cdefg");
        s.put_str(0, 7, "ignored", Rgb::WHITE, false);
        s.put_str(0, -1, "ignored", Rgb::WHITE, false);
        assert_eq!(s.row_text(1), "▀▀▀▀▀");
    }

    #[test]
    fn frame_draws_corners() {
        let mut s = screen(6, 4);
        s.frame(Rect::new(0, 0, 6, 3), Rgb::WHITE);
        assert_eq!(s.row_text(0), "┌────┐");
        assert_eq!(s.row_text(1), "│▀▀▀▀│");
        assert_eq!(s.row_text(2), "└────┘");
    }

    #[test]
    fn fill_blends_cell_colours() {
        let mut s = screen(2, 1);
        s.fill(Rect::new(0, 0, 1, 1), Rgb::WHITE, 1.0);
        assert_eq!(s.cell(0, 0).fg, Rgb::WHITE);
        assert_eq!(s.cell(0, 0).bg, Rgb::WHITE);
        assert_eq!(s.cell(1, 0).bg, Rgb::BLACK);
    }

    #[test]
    fn rect_hit_testing() {
        let r = Rect::new(3, 2, 4, 2);
        assert!(r.contains(3, 2));
        assert!(r.contains(6, 3));
        assert!(!r.contains(7, 3));
        assert!(r.overlaps_rows(0, 3));
        assert!(!r.overlaps_rows(4, 10));
    }

    #[test]
    fn writes_ansi_output() {
        let mut s = screen(3, 1);
        s.put_str(0, 0, "hi", Rgb::WHITE, true);
        let mut out = Vec::new();
        s.write_lines(&mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains('h'));
        assert!(text.contains("\x1b["));
        assert!(text.ends_with('\n'));
    }
}
