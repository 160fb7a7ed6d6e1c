//! Viewport geometry: splitting a W×H surface into the nine cell regions.

use crate::Position;
use tracing::instrument;

/// Axis-aligned rectangle in viewport coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Region {
    /// Left edge.
    pub x: u32,
    /// Top edge.
    pub y: u32,
    /// Width.
    pub width: u32,
    /// Height.
    pub height: u32,
}

impl Region {
    /// Creates a region.
    pub fn new(x: u32, y: u32, width: u32, height: u32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Half-open containment test: the right and bottom edges are outside.
    pub fn contains(&self, x: u32, y: u32) -> bool {
        x >= self.x && x - self.x < self.width && y >= self.y && y - self.y < self.height
    }

    /// Centers a `width`×`height` box inside this region.
    ///
    /// The box keeps its size; it is allowed to spill when larger than the region.
    pub fn center(&self, width: u32, height: u32) -> (i64, i64) {
        let x = i64::from(self.x) + (i64::from(self.width) - i64::from(width)) / 2;
        let y = i64::from(self.y) + (i64::from(self.height) - i64::from(height)) / 2;
        (x, y)
    }
}

/// Maps viewport coordinates onto board cells.
///
/// Each cell is `width / 3` by `height / 3`. When the viewport size is not a
/// multiple of three the leftover strip on the right and bottom belongs to
/// no cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Geometry {
    width: u32,
    height: u32,
}

impl Geometry {
    /// Creates the geometry for a viewport of the given size.
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Viewport width.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Viewport height.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Size of a single cell.
    pub fn cell_size(&self) -> (u32, u32) {
        (self.width / 3, self.height / 3)
    }

    /// Region covered by a cell.
    pub fn cell_region(&self, pos: Position) -> Region {
        let (w, h) = self.cell_size();
        Region::new(pos.col() as u32 * w, pos.row() as u32 * h, w, h)
    }

    /// Finds the cell containing the point, if any.
    #[instrument(skip(self), fields(width = self.width, height = self.height))]
    pub fn cell_at(&self, x: u32, y: u32) -> Option<Position> {
        Position::ALL
            .into_iter()
            .find(|pos| self.cell_region(*pos).contains(x, y))
    }
}
