use hue_core::{Point, Range};
use std::fmt;

/// Invalid input to a graph build. These are caller defects, not runtime
/// conditions; an unreachable target is reported through `Option` instead.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GraphError {
    /// The tile bounds have no area.
    EmptyBounds(Range),
    /// Tile width or height is not a multiple of the logical cell size.
    OddBounds(Range),
    /// The weight-graph source is not a cell of the graph.
    SourceOutOfGraph { source: Point, size: Point },
}

impl fmt::Display for GraphError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyBounds(r) => write!(f, "cell graph: tile bounds {r} are empty"),
            Self::OddBounds(r) => write!(
                f,
                "cell graph: tile bounds {r} have size {}, not divisible into 2x2 cells",
                r.size()
            ),
            Self::SourceOutOfGraph { source, size } => write!(
                f,
                "weight graph: source {source} outside {}x{} cell graph",
                size.x, size.y
            ),
        }
    }
}

impl std::error::Error for GraphError {}
