use std::io::{self, Write};

use crossterm::cursor::MoveTo;
use crossterm::queue;
use crossterm::style::{Attribute, Color, Print, SetAttribute, SetForegroundColor};

use crate::weight::Weight;

/// One terminal cell
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Cell {
    pub ch: char,
    pub fg: Color,
    pub dim: bool,
}

impl Cell {
    const BLANK: Cell = Cell {
        ch: ' ',
        fg: Color::Reset,
        dim: false,
    };
}

/// Character buffer drawn off-screen and flushed to the terminal in one go
pub struct Canvas {
    width: usize,
    height: usize,
    cells: Vec<Cell>,
}

impl Canvas {
    /// Blank canvas of `width` x `height` cells
    pub fn new(width: usize, height: usize) -> Self {
        Canvas {
            width,
            height,
            cells: vec![Cell::BLANK; width * height],
        }
    }

    /// Width in cells
    pub fn width(&self) -> usize {
        self.width
    }

    /// Height in cells
    pub fn height(&self) -> usize {
        self.height
    }

    /// Cell at `x`, `y`, if inside the canvas
    pub fn get(&self, x: usize, y: usize) -> Option<&Cell> {
        if x < self.width && y < self.height {
            self.cells.get(y * self.width + x)
        } else {
            None
        }
    }

    /// Writes one cell, ignoring positions outside the canvas
    pub fn put(&mut self, x: isize, y: isize, ch: char, fg: Color, dim: bool) {
        if x >= 0 && y >= 0 && (x as usize) < self.width && (y as usize) < self.height {
            self.cells[y as usize * self.width + x as usize] = Cell { ch, fg, dim };
        }
    }

    /// Draws `text` left to right starting at `x`, `y`
    pub fn draw_text(&mut self, x: isize, y: isize, text: &str, fg: Color) {
        for (i, ch) in text.chars().enumerate() {
            self.put(x + i as isize, y, ch, fg, false);
        }
    }

    /// Draws `text` centred on column `x`
    pub fn draw_text_centered(&mut self, x: isize, y: isize, text: &str, fg: Color, dim: bool) {
        let start = x - text.chars().count() as isize / 2;
        for (i, ch) in text.chars().enumerate() {
            self.put(start + i as isize, y, ch, fg, dim);
        }
    }

    /// Draws a line between two cells using Bresenham's algorithm
    pub fn draw_line(&mut self, x0: f64, y0: f64, x1: f64, y1: f64, ch: char, fg: Color) {
        let (mut x0, mut y0, x1, y1) = (
            x0.round() as isize,
            y0.round() as isize,
            x1.round() as isize,
            y1.round() as isize,
        );
        let dx = (x1 - x0).abs();
        let dy = -(y1 - y0).abs();
        let sx = if x0 < x1 { 1 } else { -1 };
        let sy = if y0 < y1 { 1 } else { -1 };
        let mut err = dx + dy; // error value e_xy

        loop {
            self.put(x0, y0, ch, fg, false);

            if x0 == x1 && y0 == y1 {
                break;
            }
            let e2 = 2 * err;
            if e2 >= dy {
                err += dy;
                x0 += sx;
            }
            if e2 <= dx {
                err += dx;
                y0 += sy;
            }
        }
    }

    /// Flushes the whole canvas to `out`
    pub fn render<W: Write>(&self, out: &mut W) -> io::Result<()> {
        for y in 0..self.height {
            queue!(out, MoveTo(0, y as u16))?;
            let mut fg = None;
            let mut dim = false;
            for cell in &self.cells[y * self.width..(y + 1) * self.width] {
                if fg != Some(cell.fg) {
                    queue!(out, SetForegroundColor(cell.fg))?;
                    fg = Some(cell.fg);
                }
                if cell.dim != dim {
                    let attribute = if cell.dim {
                        Attribute::Dim
                    } else {
                        Attribute::NormalIntensity
                    };
                    queue!(out, SetAttribute(attribute))?;
                    dim = cell.dim;
                }
                queue!(out, Print(cell.ch))?;
            }
            if dim {
                queue!(out, SetAttribute(Attribute::NormalIntensity))?;
            }
        }
        queue!(out, SetForegroundColor(Color::Reset))?;
        out.flush()
    }
}

/// Converts an HSL colour (hue in degrees, saturation and lightness in 0..=1) to RGB
pub fn hsl_to_rgb(hue: f64, saturation: f64, lightness: f64) -> (u8, u8, u8) {
    let chroma = (1.0 - (2.0 * lightness - 1.0).abs()) * saturation;
    let sector = hue.rem_euclid(360.0) / 60.0;
    let x = chroma * (1.0 - (sector % 2.0 - 1.0).abs());
    let (r, g, b) = match sector as u8 {
        0 => (chroma, x, 0.0),
        1 => (x, chroma, 0.0),
        2 => (0.0, chroma, x),
        3 => (0.0, x, chroma),
        4 => (x, 0.0, chroma),
        _ => (chroma, 0.0, x),
    };
    let m = lightness - chroma / 2.0;
    let channel = |value: f64| ((value + m) * 255.0).round().clamp(0.0, 255.0) as u8;
    (channel(r), channel(g), channel(b))
}

/// Rainbow colour for a weight: red for 1 through to purple for 10
pub fn weight_color(weight: Weight) -> Color {
    let hue = f64::from(weight.get() - 1) * 36.0;
    let (r, g, b) = hsl_to_rgb(hue, 0.85, 0.40);
    Color::Rgb { r, g, b }
}

/// Label for a weight; heavier weights get wider labels
pub fn weight_glyph(weight: Weight) -> String {
    match weight.get() {
        1..=3 => format!("{weight}"),
        4..=6 => format!("({weight})"),
        _ => format!("[{weight}]"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hsl_primaries() {
        assert_eq!(hsl_to_rgb(0.0, 1.0, 0.5), (255, 0, 0));
        assert_eq!(hsl_to_rgb(120.0, 1.0, 0.5), (0, 255, 0));
        assert_eq!(hsl_to_rgb(240.0, 1.0, 0.5), (0, 0, 255));
        assert_eq!(hsl_to_rgb(0.0, 0.0, 1.0), (255, 255, 255));
    }

    #[test]
    fn weight_colors_follow_hue_steps() {
        let light = weight_color(Weight::new(1).unwrap());
        assert_eq!(light, Color::Rgb { r: 189, g: 15, b: 15 });
        let colors: Vec<Color> = Weight::all().map(weight_color).collect();
        for pair in colors.windows(2) {
            assert_ne!(pair[0], pair[1]);
        }
    }

    #[test]
    fn glyphs_grow_with_weight() {
        let widths: Vec<usize> = Weight::all().map(|w| weight_glyph(w).len()).collect();
        assert!(widths.windows(2).all(|pair| pair[0] <= pair[1]));
        assert_eq!(weight_glyph(Weight::new(10).unwrap()), "[10]");
    }

    #[test]
    fn line_covers_both_ends() {
        let mut canvas = Canvas::new(10, 5);
        canvas.draw_line(1.0, 1.0, 8.0, 3.0, '#', Color::White);
        assert_eq!(canvas.get(1, 1).map(|c| c.ch), Some('#'));
        assert_eq!(canvas.get(8, 3).map(|c| c.ch), Some('#'));
        assert_eq!(canvas.get(0, 0).map(|c| c.ch), Some(' '));
    }

    #[test]
    fn writes_outside_canvas_are_dropped() {
        let mut canvas = Canvas::new(3, 2);
        canvas.put(-1, 0, 'x', Color::White, false);
        canvas.put(3, 1, 'x', Color::White, false);
        canvas.draw_text(1, 1, "abc", Color::White);
        assert_eq!(canvas.get(1, 1).map(|c| c.ch), Some('a'));
        assert_eq!(canvas.get(2, 1).map(|c| c.ch), Some('b'));
        assert!(canvas.cells.iter().filter(|c| c.ch == 'x').count() == 0);
    }
}
