//! Terminal rasteriser.
//!
//! The logical arena is mapped onto a grid of character cells; shapes fill
//! cell backgrounds and text fills cell glyphs.  Nothing reaches the
//! terminal until `present`.

use std::io::{self, Write};

use crossterm::{
    cursor,
    style::{self, Color, Print},
    QueueableCommand,
};

use super::{Font, Presenter, TextTexture};
use crate::constants::{ARENA_HEIGHT, ARENA_WIDTH};
use crate::geometry::{
    oriented_square_vertices, oriented_triangle_vertices, point_in_convex_polygon, Point, Rect,
};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Cell {
    pub ch: char,
    pub fg: Color,
    pub bg: Color,
}

impl Cell {
    const BLANK: Cell = Cell {
        ch: ' ',
        fg: Color::Reset,
        bg: Color::Reset,
    };
}

pub struct Canvas<W: Write> {
    out: W,
    cols: u16,
    rows: u16,
    cells: Vec<Cell>,
}

impl<W: Write> Canvas<W> {
    pub fn new(out: W, cols: u16, rows: u16) -> Self {
        let mut canvas = Canvas {
            out,
            cols: 0,
            rows: 0,
            cells: Vec::new(),
        };
        canvas.resize(cols, rows);
        canvas
    }

    pub fn resize(&mut self, cols: u16, rows: u16) {
        self.cols = cols.max(1);
        self.rows = rows.max(1);
        self.cells = vec![Cell::BLANK; self.cols as usize * self.rows as usize];
    }

    pub fn size(&self) -> (u16, u16) {
        (self.cols, self.rows)
    }

    pub fn cell(&self, col: u16, row: u16) -> Option<Cell> {
        if col < self.cols && row < self.rows {
            Some(self.cells[row as usize * self.cols as usize + col as usize])
        } else {
            None
        }
    }

    pub fn writer(&self) -> &W {
        &self.out
    }

    /// Glyph metrics matching one cell, so text lines up with the grid.
    pub fn font(&self) -> Font {
        let (cw, ch) = self.cell_size();
        Font {
            glyph_width: cw.ceil() as i32,
            glyph_height: ch.ceil() as i32,
        }
    }

    fn cell_size(&self) -> (f64, f64) {
        (
            f64::from(ARENA_WIDTH) / f64::from(self.cols),
            f64::from(ARENA_HEIGHT) / f64::from(self.rows),
        )
    }

    /// Cell containing logical point `p`, if it is on the grid.
    fn cell_at(&self, p: Point) -> Option<(u16, u16)> {
        let (cw, ch) = self.cell_size();
        let col = (f64::from(p.x) / cw).floor();
        let row = (f64::from(p.y) / ch).floor();
        if col < 0.0 || row < 0.0 || col >= f64::from(self.cols) || row >= f64::from(self.rows) {
            return None;
        }
        Some((col as u16, row as u16))
    }

    fn paint(&mut self, col: u16, row: u16, color: Color) {
        if col < self.cols && row < self.rows {
            let cell = &mut self.cells[row as usize * self.cols as usize + col as usize];
            cell.ch = ' ';
            cell.bg = color;
        }
    }

    /// Column/row span of cells overlapping `[lo, hi)` on one axis.
    fn span(lo: f64, hi: f64, cell: f64, count: u16) -> Option<(u16, u16)> {
        let first = (lo / cell).floor().max(0.0);
        let last = ((hi / cell).ceil() - 1.0).min(f64::from(count) - 1.0);
        if last < first {
            return None;
        }
        Some((first as u16, last as u16))
    }

    /// Fill every cell whose centre lies inside the convex polygon, plus the
    /// cell under `anchor` so shapes smaller than a cell stay visible.
    fn fill_polygon(&mut self, vertices: &[Point], anchor: Point, color: Color) {
        let (cw, ch) = self.cell_size();
        let min_x = vertices.iter().map(|v| v.x).min().unwrap_or(anchor.x);
        let max_x = vertices.iter().map(|v| v.x).max().unwrap_or(anchor.x);
        let min_y = vertices.iter().map(|v| v.y).min().unwrap_or(anchor.y);
        let max_y = vertices.iter().map(|v| v.y).max().unwrap_or(anchor.y);

        let cols = Self::span(f64::from(min_x), f64::from(max_x), cw, self.cols);
        let rows = Self::span(f64::from(min_y), f64::from(max_y), ch, self.rows);
        if let (Some((c0, c1)), Some((r0, r1))) = (cols, rows) {
            for row in r0..=r1 {
                for col in c0..=c1 {
                    let center = ((f64::from(col) + 0.5) * cw, (f64::from(row) + 0.5) * ch);
                    if point_in_convex_polygon(center, vertices) {
                        self.paint(col, row, color);
                    }
                }
            }
        }

        if let Some((col, row)) = self.cell_at(anchor) {
            self.paint(col, row, color);
        }
    }
}

impl<W: Write> Presenter for Canvas<W> {
    fn clear(&mut self, color: Color) {
        for cell in &mut self.cells {
            *cell = Cell {
                ch: ' ',
                fg: Color::Reset,
                bg: color,
            };
        }
    }

    fn draw_filled_triangle(&mut self, center: Point, size: i32, angle: f64, color: Color) {
        let vertices = oriented_triangle_vertices(center, size, angle);
        self.fill_polygon(&vertices, center, color);
    }

    fn draw_rotated_rect(&mut self, rect: Rect, angle: f64, color: Color) {
        let vertices = oriented_square_vertices(rect, angle);
        self.fill_polygon(&vertices, rect.center(), color);
    }

    fn draw_filled_rect(&mut self, rect: Rect, color: Color) {
        if rect.is_empty() {
            return;
        }
        let (cw, ch) = self.cell_size();
        let cols = Self::span(f64::from(rect.x), f64::from(rect.right()), cw, self.cols);
        let rows = Self::span(f64::from(rect.y), f64::from(rect.bottom()), ch, self.rows);
        if let (Some((c0, c1)), Some((r0, r1))) = (cols, rows) {
            for row in r0..=r1 {
                for col in c0..=c1 {
                    self.paint(col, row, color);
                }
            }
        }
    }

    fn draw_text_texture(&mut self, texture: &TextTexture, position: Point) {
        let Some((col, row)) = self.cell_at(position) else {
            return;
        };
        let start = row as usize * self.cols as usize;
        for (i, ch) in texture.text.chars().enumerate() {
            let c = col as usize + i;
            if c >= self.cols as usize {
                break;
            }
            let cell = &mut self.cells[start + c];
            cell.ch = ch;
            cell.fg = texture.color;
        }
    }

    fn present(&mut self) -> io::Result<()> {
        let mut fg = None;
        let mut bg = None;
        for row in 0..self.rows {
            self.out.queue(cursor::MoveTo(0, row))?;
            let start = row as usize * self.cols as usize;
            for cell in &self.cells[start..start + self.cols as usize] {
                if bg != Some(cell.bg) {
                    self.out.queue(style::SetBackgroundColor(cell.bg))?;
                    bg = Some(cell.bg);
                }
                if cell.ch != ' ' && fg != Some(cell.fg) {
                    self.out.queue(style::SetForegroundColor(cell.fg))?;
                    fg = Some(cell.fg);
                }
                self.out.queue(Print(cell.ch))?;
            }
        }
        self.out.queue(style::ResetColor)?;
        self.out.flush()
    }
}
