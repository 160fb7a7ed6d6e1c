//! Board widget: grid lines plus the glyph of every occupied cell.

use crate::font::Glyph;
use crate::scene::Scene;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    widgets::Widget,
};
use tictac_core::{Geometry, Mark, Position};

const GRID_STYLE: Style = Style::new().fg(Color::DarkGray);

/// Widget for rendering the tic-tac-toe board from a [`Scene`].
pub struct BoardWidget<'a> {
    scene: &'a Scene,
    cursor: Option<Position>,
    highlight: Option<[Position; 3]>,
}

impl<'a> BoardWidget<'a> {
    /// Creates a new board widget.
    pub fn new(scene: &'a Scene) -> Self {
        Self {
            scene,
            cursor: None,
            highlight: None,
        }
    }

    /// Shades the keyboard cursor cell.
    pub fn cursor(mut self, cursor: Option<Position>) -> Self {
        self.cursor = cursor;
        self
    }

    /// Emphasizes the glyphs of a winning line.
    pub fn highlight(mut self, line: Option<[Position; 3]>) -> Self {
        self.highlight = line;
        self
    }
}

fn mark_style(mark: Mark) -> Style {
    let color = match mark {
        Mark::X => Color::Blue,
        Mark::O => Color::Red,
    };
    Style::default().fg(color).add_modifier(Modifier::BOLD)
}

impl Widget for BoardWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.width < 3 || area.height < 3 {
            return;
        }

        if let Some(pos) = self.cursor {
            let region = self.scene.cell(pos).region();
            let cell = Rect::new(
                area.x + region.x as u16,
                area.y + region.y as u16,
                region.width as u16,
                region.height as u16,
            )
            .intersection(area);
            buf.set_style(cell, Style::default().bg(Color::Indexed(236)));
        }

        draw_grid(area, buf);

        for pos in Position::ALL {
            if let Some(glyph) = self.scene.cell(pos).glyph() {
                let mut style = mark_style(glyph.mark());
                if self.highlight.is_some_and(|line| line.contains(&pos)) {
                    style = style.fg(Color::Yellow);
                }
                draw_glyph(area, buf, glyph, style);
            }
        }
    }
}

/// Two vertical and two horizontal lines on the leading edges of the second
/// and third cell column and row.
fn draw_grid(area: Rect, buf: &mut Buffer) {
    let geometry = Geometry::new(u32::from(area.width), u32::from(area.height));
    // Regions lie inside the area, so the offsets fit in u16.
    let columns = [Position::TopCenter, Position::TopRight]
        .map(|pos| area.x + geometry.cell_region(pos).x as u16);
    let rows = [Position::MiddleLeft, Position::BottomLeft]
        .map(|pos| area.y + geometry.cell_region(pos).y as u16);

    for y in rows {
        for x in area.left()..area.right() {
            if let Some(cell) = buf.cell_mut((x, y)) {
                cell.set_symbol("─").set_style(GRID_STYLE);
            }
        }
    }
    for x in columns {
        for y in area.top()..area.bottom() {
            let symbol = if rows.contains(&y) { "┼" } else { "│" };
            if let Some(cell) = buf.cell_mut((x, y)) {
                cell.set_symbol(symbol).set_style(GRID_STYLE);
            }
        }
    }
}

/// Writes glyph rows, clipped to `area`.
fn draw_glyph(area: Rect, buf: &mut Buffer, glyph: &Glyph, style: Style) {
    let (gx, gy) = glyph.origin();
    let x = i64::from(area.x) + gx;
    if x < i64::from(area.left()) || x >= i64::from(area.right()) {
        return;
    }
    let x = x as u16;
    let max_width = usize::from(area.right() - x);

    for (i, row) in glyph.rows().iter().enumerate() {
        let y = i64::from(area.y) + gy + i as i64;
        if y < i64::from(area.top()) || y >= i64::from(area.bottom()) {
            continue;
        }
        buf.set_stringn(x, y as u16, row, max_width, style);
    }
}
