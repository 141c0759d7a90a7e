//! Core types for hue-matching puzzle maps.
//!
//! Provides [`Point`]/[`Range`] geometry, the [`TileSource`] capability
//! that supplies raw tile colors, an in-memory [`ColorGrid`], and the
//! raw-tile/logical-cell conversions in [`space`].

pub mod geom;
pub mod space;
pub mod tiles;

pub use geom::{Point, Range, RangeIter, manhattan};
pub use space::LOGICAL_CELL_SIZE;
pub use tiles::{ColorGrid, ParseError, TileSource};
