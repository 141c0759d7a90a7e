//! Shared test maps.

use hue_core::{ColorGrid, Point};

use crate::CellGraph;

/// The locked gate of [`GATED_MAP`], in logical space.
pub(crate) const GATE: Point = Point::new(2, 1);

pub(crate) const NO_GATES: [Point; 0] = [];

/// 8×8 tiles, 4×4 logical cells (first line is the top row):
///
/// ```text
/// G G G G   y=3
/// G R G G   y=2   target (2,2)
/// G R X R   y=1   X: locked gate, green underneath
/// S G G G   y=0   S: start (0,0)
/// ```
pub(crate) const GATED_MAP: &str = "\
GGGGGGGG
GGGGGGGG
GGRRGGGG
GGRRGGGG
GGRRGGRR
GGRRGGRR
GGGGGGGG
GGGGGGGG";

pub(crate) fn gated_test_map() -> CellGraph {
    let tiles = ColorGrid::parse(GATED_MAP).unwrap();
    CellGraph::build(&tiles, [GATE]).unwrap()
}
