//! Shortest paths over color-teleport puzzle maps.
//!
//! A map is a grid of raw tiles, each with a color. Every 2×2 block of tiles
//! forms a logical cell, and a cell can move to the nearest cell in each
//! cardinal direction that shares one of its four colors, whether that cell
//! is next door or across the map.
//!
//! - [`CellGraph::build`] derives the logical grid and its neighbor links
//!   from a [`TileSource`](hue_core::TileSource).
//! - [`WeightGraph::build`] runs Dijkstra from one source cell, with an
//!   optional hop ceiling and an optional adjacent-only mode
//!   ([`WeightOptions`]).
//! - [`seek`] picks goals and single steps for agents.
//!
//! Both graphs are immutable once built; a topology change or a moved
//! origin means building new ones.

mod cellgraph;
mod error;
mod options;
mod path;
pub mod seek;
mod weights;

#[cfg(test)]
mod fixtures;

pub use cellgraph::{CellGraph, CellId, Direction, LogicalCell};
pub use error::GraphError;
pub use options::WeightOptions;
pub use path::LogicalPath;
pub use weights::{PathNode, UNREACHABLE, WeightGraph};
