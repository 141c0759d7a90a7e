//! Color-tagged raw tile maps.
//!
//! A [`TileSource`] is anything that can report a color for a raw tile and
//! the rectangle of tiles it covers. [`ColorGrid`] is the in-memory
//! implementation, buildable from a closure or parsed from ASCII art.

use crate::geom::{Point, Range};
use std::fmt;

/// Supplies the raw per-tile colors a cell graph is derived from.
///
/// Only equality between colors matters; their visual meaning is opaque.
pub trait TileSource {
    type Color: PartialEq;

    /// The raw tile rectangle covered by the map.
    fn bounds(&self) -> Range;

    /// Color of the raw tile at `p`. Only called for points inside
    /// [`bounds`](Self::bounds).
    fn color(&self, p: Point) -> Self::Color;
}

/// A dense, row-major grid of tile colors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColorGrid<C> {
    bounds: Range,
    colors: Vec<C>,
}

impl<C: Clone> ColorGrid<C> {
    /// Create a grid covering `bounds` with every tile set to `fill`.
    pub fn new(bounds: Range, fill: C) -> Self {
        Self {
            bounds,
            colors: vec![fill; bounds.len()],
        }
    }
}

impl<C> ColorGrid<C> {
    /// Create a grid covering `bounds`, coloring each tile with `f`.
    pub fn from_fn(bounds: Range, mut f: impl FnMut(Point) -> C) -> Self {
        let colors = bounds.iter().map(&mut f).collect();
        Self { bounds, colors }
    }

    #[inline]
    fn index(&self, p: Point) -> Option<usize> {
        if !self.bounds.contains(p) {
            return None;
        }
        let x = (p.x - self.bounds.min.x) as usize;
        let y = (p.y - self.bounds.min.y) as usize;
        Some(y * self.bounds.width() as usize + x)
    }

    /// The color at `p`, or `None` outside the grid.
    pub fn at(&self, p: Point) -> Option<&C> {
        self.index(p).map(|i| &self.colors[i])
    }

    /// Recolor the tile at `p`. Does nothing outside the grid.
    pub fn set(&mut self, p: Point, color: C) {
        if let Some(i) = self.index(p) {
            self.colors[i] = color;
        }
    }

    pub fn bounds(&self) -> Range {
        self.bounds
    }
}

impl ColorGrid<char> {
    /// Parse ASCII art where every character is the color of one raw tile.
    ///
    /// The first line is the top row (highest y); the bottom-left character
    /// lands on (0, 0). Surrounding whitespace of the whole text is trimmed,
    /// and every line must have the same width.
    pub fn parse(text: &str) -> Result<Self, ParseError> {
        let rows: Vec<Vec<char>> = text
            .trim()
            .lines()
            .map(|l| l.trim_end_matches('\r').chars().collect())
            .collect();
        let width = rows.first().map_or(0, Vec::len);
        if width == 0 {
            return Err(ParseError::Empty);
        }
        for (line, row) in rows.iter().enumerate() {
            if row.len() != width {
                return Err(ParseError::InconsistentWidth {
                    line,
                    expected: width,
                    found: row.len(),
                });
            }
        }

        let height = rows.len();
        let bounds = Range::new(0, 0, width as i32, height as i32);
        Ok(Self::from_fn(bounds, |p| {
            rows[height - 1 - p.y as usize][p.x as usize]
        }))
    }
}

impl<C: PartialEq + Clone> TileSource for ColorGrid<C> {
    type Color = C;

    fn bounds(&self) -> Range {
        self.bounds
    }

    /// # Panics
    ///
    /// Panics if `p` is outside the grid.
    fn color(&self, p: Point) -> C {
        match self.at(p) {
            Some(c) => c.clone(),
            None => panic!("tile {p} outside color grid {}", self.bounds),
        }
    }
}

/// Errors that can occur when parsing a color map.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// The text contains no tiles.
    Empty,
    /// A line differs in width from the first line.
    InconsistentWidth {
        line: usize,
        expected: usize,
        found: usize,
    },
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "color map: no tiles"),
            Self::InconsistentWidth {
                line,
                expected,
                found,
            } => write!(
                f,
                "color map: line {line} has {found} tiles, expected {expected}"
            ),
        }
    }
}

impl std::error::Error for ParseError {}
