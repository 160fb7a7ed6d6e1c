//! Per-cell glyph resources.
//!
//! Each cell owns at most one rasterized [`Glyph`]. A glyph is created when
//! the cell's square becomes occupied and dropped when it empties. A change
//! of viewport size regenerates every glyph for the new regions.

use crate::font::{Font, Glyph};
use tictac_core::{Board, Geometry, Position, Region, Square};
use tracing::{debug, instrument};

/// One board cell as drawn on screen.
#[derive(Debug, Clone, Default)]
pub struct SceneCell {
    region: Region,
    shown: Square,
    glyph: Option<Glyph>,
}

impl SceneCell {
    /// Screen region of the cell in viewport coordinates.
    pub fn region(&self) -> Region {
        self.region
    }

    /// Rasterized mark, if the cell is occupied.
    pub fn glyph(&self) -> Option<&Glyph> {
        self.glyph.as_ref()
    }

    fn show(&mut self, square: Square, font: &Font) {
        self.shown = square;
        self.glyph = square.mark().map(|mark| font.rasterize(mark, self.region));
    }
}

/// Screen-side state of the board: cell regions and their glyphs.
#[derive(Debug, Clone, Default)]
pub struct Scene {
    geometry: Option<Geometry>,
    cells: [SceneCell; 9],
}

impl Scene {
    /// Creates an empty scene with no layout yet.
    pub fn new() -> Self {
        Self::default()
    }

    /// Geometry of the last layout.
    pub fn geometry(&self) -> Option<Geometry> {
        self.geometry
    }

    /// Cell at `pos`.
    pub fn cell(&self, pos: Position) -> &SceneCell {
        &self.cells[pos.to_index()]
    }

    /// Number of glyphs currently held.
    pub fn glyph_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.glyph.is_some()).count()
    }

    /// Brings the scene in line with `board` for the viewport `geometry`.
    ///
    /// Only cells whose square changed are re-rasterized, unless the
    /// geometry changed, in which case every cell is.
    #[instrument(skip_all)]
    pub fn sync(&mut self, geometry: Geometry, board: &Board, font: &Font) {
        let relayout = self.geometry != Some(geometry);
        if relayout {
            debug!(
                width = geometry.width(),
                height = geometry.height(),
                "Laying out cells"
            );
            self.geometry = Some(geometry);
        }

        for pos in Position::ALL {
            let square = board.occupant_at(pos);
            let cell = &mut self.cells[pos.to_index()];
            if relayout {
                cell.region = geometry.cell_region(pos);
            } else if cell.shown == square {
                continue;
            }
            debug!(position = %pos, ?square, "Refreshing cell glyph");
            cell.show(square, font);
        }
    }
}
