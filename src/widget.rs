use crossterm::event::{
    Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEventKind,
};
use crossterm::style::Color;
use tracing::debug;

use crate::constants::{MAX_ANGLE, PIVOT_X, PLANK_LENGTH};
use crate::error::Result;
use crate::graphics::{weight_color, weight_glyph, Canvas};
use crate::mapper::{map_to_plank, plank_offset, PlankOffset};
use crate::math::{degrees_to_radians, rotate};
use crate::model::{PlacedObject, Preview, Totals};
use crate::state::AppState;
use crate::weight::Weight;

/// Terminal cells are roughly twice as tall as they are wide
const CELL_ASPECT: f64 = 2.0;
/// Columns kept free on each side of the plank
const MARGIN_COLS: u16 = 4;
const MIN_PLANK_COLS: u16 = 20;
/// Rows reserved for the info panel
const HEADER_ROWS: u16 = 4;
/// Rows reserved for the legend
const FOOTER_ROWS: u16 = 2;
/// How far from the plank, in rows, the pointer still counts as over it
const HIT_ROWS: f64 = 2.5;

/// Maps between terminal cells and plank units
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    cols: u16,
    rows: u16,
    units_per_col: f64,
    center_col: f64,
    center_row: f64,
}

impl Viewport {
    /// Fits the plank into a terminal of `cols` x `rows`, leaving room for a full tilt
    pub fn new(cols: u16, rows: u16) -> Self {
        let plank_cols = cols.saturating_sub(2 * MARGIN_COLS).max(MIN_PLANK_COLS);
        let free_rows = rows.saturating_sub(HEADER_ROWS + FOOTER_ROWS).max(4);
        // One row above the plank holds the object labels
        let half_rows = (f64::from(free_rows) / 2.0 - 1.0).max(1.0);
        let max_drop = PIVOT_X * degrees_to_radians(f64::from(MAX_ANGLE)).sin();

        let units_per_col =
            (PLANK_LENGTH / f64::from(plank_cols)).max(max_drop / (half_rows * CELL_ASPECT));

        Viewport {
            cols,
            rows,
            units_per_col,
            center_col: f64::from(cols / 2),
            center_row: f64::from(HEADER_ROWS + free_rows / 2),
        }
    }

    /// Terminal width in cells
    pub fn cols(&self) -> u16 {
        self.cols
    }

    /// Terminal height in cells
    pub fn rows(&self) -> u16 {
        self.rows
    }

    /// Plank units covered by one column
    pub fn units_per_col(&self) -> f64 {
        self.units_per_col
    }

    /// Plank units covered by one row
    pub fn units_per_row(&self) -> f64 {
        self.units_per_col * CELL_ASPECT
    }

    /// Screen position of a cell, in plank units
    pub fn cell_to_screen(&self, col: u16, row: u16) -> [f64; 2] {
        [
            f64::from(col) * self.units_per_col,
            f64::from(row) * self.units_per_row(),
        ]
    }

    /// Screen position of the pivot, in plank units
    pub fn center(&self) -> [f64; 2] {
        [
            self.center_col * self.units_per_col,
            self.center_row * self.units_per_row(),
        ]
    }

    /// Cell (fractional) showing `position` on a plank tilted by `angle`,
    /// `lift_rows` rows off the plank (negative is above)
    pub fn plank_to_cell(&self, position: f64, lift_rows: f64, angle: i32) -> (f64, f64) {
        let local = [position - PIVOT_X, lift_rows * self.units_per_row()];
        let [dx, dy] = rotate(local, f64::from(angle));
        (
            self.center_col + dx / self.units_per_col,
            self.center_row + dy / self.units_per_row(),
        )
    }

    /// Pointer offset from the pivot in the plank's own frame
    pub fn pointer_offset(&self, col: u16, row: u16, angle: i32) -> Result<PlankOffset> {
        let [screen_x, screen_y] = self.cell_to_screen(col, row);
        let [center_x, center_y] = self.center();
        plank_offset(screen_x, screen_y, center_x, center_y, f64::from(angle))
    }

    /// Plank position under the pointer, or `None` when the pointer is off the plank
    pub fn pointer_position(&self, col: u16, row: u16, angle: i32) -> Result<Option<f64>> {
        let offset = self.pointer_offset(col, row, angle)?;
        if offset.across.abs() > HIT_ROWS * self.units_per_row()
            || offset.along.abs() > PIVOT_X + self.units_per_col
        {
            return Ok(None);
        }

        let [screen_x, screen_y] = self.cell_to_screen(col, row);
        let [center_x, center_y] = self.center();
        map_to_plank(screen_x, screen_y, center_x, center_y, f64::from(angle)).map(Some)
    }
}

/// Seesaw widget: turns terminal events into model calls and draws the result
pub struct PlankWidget {
    viewport: Viewport,
}

impl PlankWidget {
    /// Widget laid out for a terminal of `cols` x `rows`
    pub fn new(cols: u16, rows: u16) -> Self {
        PlankWidget {
            viewport: Viewport::new(cols, rows),
        }
    }

    /// Current cell mapping
    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    /// Re-fits the plank after a terminal resize
    pub fn layout(&mut self, cols: u16, rows: u16) {
        self.viewport = Viewport::new(cols, rows);
    }

    /// Handle a terminal event
    pub fn event(&mut self, event: &Event, data: &mut AppState) -> Result<()> {
        match event {
            Event::Key(key_event) if key_event.kind == KeyEventKind::Press => {
                self.key_pressed(key_event, data);
            }
            Event::Mouse(mouse_event) => match mouse_event.kind {
                MouseEventKind::Moved | MouseEventKind::Drag(_) => {
                    self.pointer_moved(mouse_event.column, mouse_event.row, data)?;
                }
                MouseEventKind::Down(MouseButton::Left) => {
                    self.pointer_pressed(mouse_event.column, mouse_event.row, data)?;
                }
                _ => {}
            },
            Event::FocusLost => data.clear_pointer(),
            Event::Resize(cols, rows) => {
                self.layout(*cols, *rows);
                data.clear_pointer();
            }
            _ => {}
        }
        Ok(())
    }

    /// Handle a key press
    fn key_pressed(&self, key_event: &KeyEvent, data: &mut AppState) {
        match key_event.code {
            KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => data.quit = true,
            KeyCode::Char('c') if key_event.modifiers.contains(KeyModifiers::CONTROL) => {
                data.quit = true;
            }
            KeyCode::Char('r') | KeyCode::Char('R') => {
                data.model.reset();
                data.clear_pointer();
            }
            KeyCode::Char('d') | KeyCode::Char('D') => data.debug = !data.debug,
            _ => {}
        }
    }

    /// Preview the pending weight under the pointer, or drop it off the plank
    fn pointer_moved(&self, col: u16, row: u16, data: &mut AppState) -> Result<()> {
        let angle = data.model.current_angle();
        match self.viewport.pointer_position(col, row, angle)? {
            Some(position) => {
                data.preview = Some(data.model.preview_pending(position)?);
                data.hovered =
                    object_near(data.model.objects(), position, self.viewport.units_per_col());
            }
            None => data.clear_pointer(),
        }
        Ok(())
    }

    /// Place the pending weight under the pointer
    fn pointer_pressed(&self, col: u16, row: u16, data: &mut AppState) -> Result<()> {
        data.clear_pointer();
        let angle = data.model.current_angle();
        match self.viewport.pointer_position(col, row, angle)? {
            Some(position) => {
                data.model.place_pending(position)?;
            }
            None => debug!(col, row, "click outside the plank"),
        }
        Ok(())
    }

    /// Paint the plank, its objects and the panels
    pub fn paint(&self, data: &AppState) -> Canvas {
        let viewport = &self.viewport;
        let mut canvas = Canvas::new(usize::from(viewport.cols), usize::from(viewport.rows));
        let angle = data.model.current_angle();
        let totals = data.model.totals();

        paint_info_panel(&mut canvas, data, &totals);

        let (x0, y0) = viewport.plank_to_cell(0.0, 0.0, angle);
        let (x1, y1) = viewport.plank_to_cell(PLANK_LENGTH, 0.0, angle);
        canvas.draw_line(x0, y0, x1, y1, '=', Color::Grey);
        canvas.put(
            viewport.center_col as isize,
            viewport.center_row as isize + 1,
            '^',
            Color::DarkYellow,
            false,
        );

        for object in data.model.objects() {
            paint_weight(&mut canvas, viewport, object.position(), object.weight(), angle, false);
        }

        if let Some(preview) = &data.preview {
            paint_weight(&mut canvas, viewport, preview.position, preview.weight, angle, true);
            canvas.draw_text(0, 2, &preview_tooltip(preview), Color::White);
        }

        if let Some(object) = data.hovered.and_then(|index| data.model.objects().get(index)) {
            canvas.draw_text(0, 3, &object_tooltip(object), Color::White);
        }

        paint_legend(&mut canvas);

        if data.debug {
            paint_debug(&mut canvas, data, &totals);
        }

        canvas
    }
}

/// Tooltip shown next to the preview
pub fn preview_tooltip(preview: &Preview) -> String {
    let change = if preview.delta > 0 {
        format!("+{}", preview.delta)
    } else {
        preview.delta.to_string()
    };
    format!(
        "Torque: {:.0} | New angle: {}° | Change: {}°",
        preview.torque, preview.angle, change
    )
}

/// Tooltip shown for a placed object under the pointer
pub fn object_tooltip(object: &PlacedObject) -> String {
    format!("Torque: {:.0}", object.torque())
}

/// Index of the placed object closest to `position`, if any is within `tolerance`
fn object_near(objects: &[PlacedObject], position: f64, tolerance: f64) -> Option<usize> {
    objects
        .iter()
        .enumerate()
        .map(|(index, object)| (index, (object.position() - position).abs()))
        .filter(|&(_, distance)| distance <= tolerance)
        .min_by(|a, b| a.1.total_cmp(&b.1))
        .map(|(index, _)| index)
}

/// Draws a weight label one row above the plank
fn paint_weight(
    canvas: &mut Canvas,
    viewport: &Viewport,
    position: f64,
    weight: Weight,
    angle: i32,
    dim: bool,
) {
    let (x, y) = viewport.plank_to_cell(position, -1.0, angle);
    canvas.draw_text_centered(
        x.round() as isize,
        y.round() as isize,
        &weight_glyph(weight),
        weight_color(weight),
        dim,
    );
}

/// Draws coloured text pieces one after another on a single row
fn draw_segments(canvas: &mut Canvas, y: isize, segments: &[(String, Color)]) {
    let mut x = 0;
    for (text, color) in segments {
        canvas.draw_text(x, y, text, *color);
        x += text.chars().count() as isize;
    }
}

/// Next weight, angle and side totals, plus the key hints
fn paint_info_panel(canvas: &mut Canvas, data: &AppState, totals: &Totals) {
    let next = data.model.pending_weight();
    draw_segments(
        canvas,
        0,
        &[
            ("Next weight: ".to_string(), Color::White),
            (weight_glyph(next), weight_color(next)),
            (
                format!(
                    "  Angle: {}°  Left: {} kg  Right: {} kg",
                    data.model.current_angle(),
                    totals.left_weight,
                    totals.right_weight
                ),
                Color::White,
            ),
        ],
    );
    canvas.draw_text(
        0,
        1,
        "click: place  r: reset  d: debug  q: quit",
        Color::DarkGrey,
    );
}

/// Every weight with its colour, on the bottom row
fn paint_legend(canvas: &mut Canvas) {
    let mut segments = vec![("Weights: ".to_string(), Color::White)];
    for weight in Weight::all() {
        segments.push((weight_glyph(weight), weight_color(weight)));
        segments.push((" ".to_string(), Color::Reset));
    }
    let y = canvas.height() as isize - 1;
    draw_segments(canvas, y, &segments);
}

/// Version, object count and torques, below the info panel
fn paint_debug(canvas: &mut Canvas, data: &AppState, totals: &Totals) {
    let lines = [
        format!("{} {}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION")),
        format!("Objects: {}", data.model.objects().len()),
        format!(
            "Torque L: {:.0}  R: {:.0}",
            totals.left_torque, totals.right_torque
        ),
    ];
    for (row, line) in lines.iter().enumerate() {
        let y = HEADER_ROWS as isize + row as isize;
        canvas.draw_text(0, y, line, Color::Cyan);
    }
}
