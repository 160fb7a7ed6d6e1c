//! Glyph fonts for drawing marks.
//!
//! A font is a TOML file holding one block glyph per mark:
//!
//! ```toml
//! name = "block"
//!
//! [glyphs]
//! x = ["█ █", " █ ", "█ █"]
//! o = ["███", "█ █", "███"]
//! ```
//!
//! Every row of a glyph must have the same display width.

use derive_more::{Display, Error};
use serde::Deserialize;
use std::path::Path;
use tictac_core::{Mark, Region};
use tracing::{debug, info, instrument};
use unicode_width::UnicodeWidthStr;

/// Font shipped with the binary.
const BUNDLED_FONT: &str = include_str!("../assets/fonts/block.toml");

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct FontFile {
    name: String,
    glyphs: GlyphTable,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct GlyphTable {
    x: Vec<String>,
    o: Vec<String>,
}

/// A validated block glyph.
#[derive(Debug, Clone, PartialEq, Eq)]
struct Bitmap {
    rows: Vec<String>,
    width: u32,
}

impl Bitmap {
    fn new(label: &str, rows: Vec<String>) -> Result<Self, FontError> {
        let first = rows
            .first()
            .ok_or_else(|| FontError::new(format!("Glyph '{label}' has no rows")))?;
        let width = first.width();
        if width == 0 {
            return Err(FontError::new(format!("Glyph '{label}' is zero columns wide")));
        }
        if let Some((i, row)) = rows.iter().enumerate().find(|(_, row)| row.width() != width) {
            return Err(FontError::new(format!(
                "Glyph '{label}' row {i} is {} columns wide, expected {width}",
                row.width()
            )));
        }
        Ok(Self {
            width: width as u32,
            rows,
        })
    }

    fn height(&self) -> u32 {
        self.rows.len() as u32
    }
}

/// Glyph font loaded once at startup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Font {
    name: String,
    x: Bitmap,
    o: Bitmap,
}

impl Font {
    /// Loads the bundled block font.
    pub fn bundled() -> Result<Self, FontError> {
        Self::parse(BUNDLED_FONT)
    }

    /// Loads a font from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, FontError> {
        debug!("Loading font from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| FontError::new(format!("Failed to read font file: {}", e)))?;
        Self::parse(&content)
    }

    /// Loads `path` when given, otherwise the bundled font.
    pub fn load(path: Option<&Path>) -> Result<Self, FontError> {
        let font = match path {
            Some(path) => Self::from_file(path)?,
            None => Self::bundled()?,
        };
        info!(font = %font.name, "Font loaded");
        Ok(font)
    }

    /// Parses and validates font TOML.
    pub fn parse(content: &str) -> Result<Self, FontError> {
        let file: FontFile = toml::from_str(content)
            .map_err(|e| FontError::new(format!("Failed to parse font: {}", e)))?;
        Ok(Self {
            x: Bitmap::new("x", file.glyphs.x)?,
            o: Bitmap::new("o", file.glyphs.o)?,
            name: file.name,
        })
    }

    /// Font name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Size in columns and rows of the block glyph for `mark`.
    pub fn glyph_size(&self, mark: Mark) -> (u32, u32) {
        let bitmap = self.bitmap(mark);
        (bitmap.width, bitmap.height())
    }

    /// Renders `mark` centred in `region`.
    ///
    /// Falls back to the plain mark character when the block glyph does not fit.
    pub fn rasterize(&self, mark: Mark, region: Region) -> Glyph {
        let bitmap = self.bitmap(mark);
        let rows = if bitmap.width <= region.width && bitmap.height() <= region.height {
            bitmap.rows.clone()
        } else {
            vec![mark.symbol().to_string()]
        };
        let width = rows.first().map_or(0, |row| row.width() as u32);
        let (x, y) = region.center(width, rows.len() as u32);
        Glyph { mark, x, y, rows }
    }

    fn bitmap(&self, mark: Mark) -> &Bitmap {
        match mark {
            Mark::X => &self.x,
            Mark::O => &self.o,
        }
    }
}

/// A mark rendered for one cell region, positioned in viewport coordinates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Glyph {
    mark: Mark,
    x: i64,
    y: i64,
    rows: Vec<String>,
}

impl Glyph {
    /// Mark this glyph shows.
    pub fn mark(&self) -> Mark {
        self.mark
    }

    /// Top-left corner in viewport coordinates.
    pub fn origin(&self) -> (i64, i64) {
        (self.x, self.y)
    }

    /// Text rows, top to bottom.
    pub fn rows(&self) -> &[String] {
        &self.rows
    }
}

/// Font loading error.
#[derive(Debug, Clone, Display, Error)]
#[display("Font error: {} at {}:{}", message, file, line)]
pub struct FontError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl FontError {
    /// Creates a new font error.
    #[track_caller]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bundled_font_loads() {
        let font = Font::bundled().unwrap();
        assert_eq!(font.name(), "block");
        assert_eq!(font.glyph_size(Mark::X), (8, 5));
        assert_eq!(font.glyph_size(Mark::O), (8, 5));
    }

    #[test]
    fn test_rasterize_centres_block_glyph() {
        let font = Font::bundled().unwrap();
        let glyph = font.rasterize(Mark::O, Region::new(20, 10, 20, 10));
        assert_eq!(glyph.mark(), Mark::O);
        assert_eq!(glyph.origin(), (26, 12));
        assert_eq!(glyph.rows().len(), 5);
    }

    #[test]
    fn test_rasterize_falls_back_to_symbol() {
        let font = Font::bundled().unwrap();
        let glyph = font.rasterize(Mark::X, Region::new(0, 0, 5, 3));
        assert_eq!(glyph.rows(), ["X".to_string()]);
        assert_eq!(glyph.origin(), (2, 1));
    }

    #[test]
    fn test_ragged_glyph_rejected() {
        let err = Font::parse(
            r#"
            name = "ragged"
            [glyphs]
            x = ["X X", " X"]
            o = ["O"]
            "#,
        )
        .unwrap_err();
        assert!(err.message.contains("row 1"), "{err}");
    }

    #[test]
    fn test_empty_glyph_rejected() {
        let err = Font::parse(
            r#"
            name = "empty"
            [glyphs]
            x = []
            o = ["O"]
            "#,
        )
        .unwrap_err();
        assert!(err.message.contains("no rows"), "{err}");
    }
}
