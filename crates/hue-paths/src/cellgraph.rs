//! The logical cell graph.
//!
//! Every logical cell covers a 2×2 block of raw tiles and is tagged with the
//! four colors of that block. A cell's neighbor in a given direction is the
//! closest cell along that row or column sharing at least one color with
//! it, however far away. Adjacent matches are ordinary moves; distant ones
//! are teleports.

use std::collections::HashSet;
use std::hash::{Hash, Hasher};

use hue_core::space::{logical_size, tile_block};
use hue_core::{Point, Range, TileSource};

use crate::error::GraphError;

/// One of the four scan directions. `Top` is increasing y.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    Top,
    Left,
    Right,
    Bottom,
}

impl Direction {
    /// All directions, in link order.
    pub const ALL: [Direction; 4] = [
        Direction::Top,
        Direction::Left,
        Direction::Right,
        Direction::Bottom,
    ];

    /// Unit step in logical space.
    #[inline]
    pub const fn step(self) -> Point {
        match self {
            Direction::Top => Point::new(0, 1),
            Direction::Left => Point::new(-1, 0),
            Direction::Right => Point::new(1, 0),
            Direction::Bottom => Point::new(0, -1),
        }
    }

    #[inline]
    const fn slot(self) -> usize {
        self as usize
    }
}

/// Handle to a cell inside the [`CellGraph`] that produced it.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CellId(usize);

impl CellId {
    #[inline]
    pub(crate) const fn from_index(idx: usize) -> Self {
        Self(idx)
    }

    /// Row-major index into the graph's cell array.
    #[inline]
    pub const fn index(self) -> usize {
        self.0
    }
}

/// A cell of the logical grid with its four precomputed neighbor links.
///
/// Identity is the position: two cells compare equal iff they sit at the
/// same logical coordinate.
#[derive(Clone, Debug)]
pub struct LogicalCell {
    pos: Point,
    blocked: bool,
    links: [Option<CellId>; 4],
}

impl LogicalCell {
    #[inline]
    pub fn pos(&self) -> Point {
        self.pos
    }

    #[inline]
    pub fn x(&self) -> i32 {
        self.pos.x
    }

    #[inline]
    pub fn y(&self) -> i32 {
        self.pos.y
    }

    /// Whether the cell was blocked (e.g. a locked gate) at build time.
    #[inline]
    pub fn is_blocked(&self) -> bool {
        self.blocked
    }

    /// The neighbor link in direction `dir`, if any.
    #[inline]
    pub fn link(&self, dir: Direction) -> Option<CellId> {
        self.links[dir.slot()]
    }

    /// Present links in top, left, right, bottom order.
    pub fn links(&self) -> impl Iterator<Item = CellId> + '_ {
        self.links.iter().flatten().copied()
    }
}

impl PartialEq for LogicalCell {
    fn eq(&self, other: &Self) -> bool {
        self.pos == other.pos
    }
}

impl Eq for LogicalCell {}

impl Hash for LogicalCell {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.pos.hash(state);
    }
}

impl From<&LogicalCell> for Point {
    fn from(cell: &LogicalCell) -> Self {
        cell.pos
    }
}

/// Immutable grid of [`LogicalCell`]s. Rebuild it whenever the map
/// topology changes.
#[derive(Clone, Debug)]
pub struct CellGraph {
    size: Point,
    cells: Vec<LogicalCell>,
}

/// Quadrant colors of one cell. `None` is the blocked marker and never
/// matches anything, itself included.
type ColorTags<C> = [Option<C>; 4];

fn shares_color<C: PartialEq>(a: &ColorTags<C>, b: &ColorTags<C>) -> bool {
    a.iter()
        .flatten()
        .any(|ca| b.iter().flatten().any(|cb| ca == cb))
}

impl CellGraph {
    /// Build the graph for `tiles`, treating every logical coordinate in
    /// `blocked` as colorless.
    ///
    /// Blocked coordinates outside the logical grid are ignored.
    pub fn build<T: TileSource>(
        tiles: &T,
        blocked: impl IntoIterator<Item = Point>,
    ) -> Result<Self, GraphError> {
        let bounds = tiles.bounds();
        if bounds.is_empty() {
            return Err(GraphError::EmptyBounds(bounds));
        }
        let size = logical_size(bounds).ok_or(GraphError::OddBounds(bounds))?;
        let logical = Range::new(0, 0, size.x, size.y);

        let blocked: HashSet<Point> = blocked
            .into_iter()
            .filter(|&p| {
                let inside = logical.contains(p);
                if !inside {
                    log::warn!("blocked location {p} outside {}x{} cell graph", size.x, size.y);
                }
                inside
            })
            .collect();

        let tags: Vec<ColorTags<T::Color>> = logical
            .iter()
            .map(|p| {
                if blocked.contains(&p) {
                    [None, None, None, None]
                } else {
                    tile_block(p, bounds).map(|t| Some(tiles.color(t)))
                }
            })
            .collect();

        let index = |p: Point| (p.y * size.x + p.x) as usize;
        let mut teleports = 0usize;
        let cells: Vec<LogicalCell> = logical
            .iter()
            .map(|p| {
                let own = &tags[index(p)];
                let mut links = [None; 4];
                for dir in Direction::ALL {
                    let step = dir.step();
                    let mut q = p + step;
                    while logical.contains(q) {
                        if shares_color(own, &tags[index(q)]) {
                            if !p.is_adjacent(q) {
                                teleports += 1;
                            }
                            links[dir.slot()] = Some(CellId(index(q)));
                            break;
                        }
                        q = q + step;
                    }
                }
                LogicalCell {
                    pos: p,
                    blocked: blocked.contains(&p),
                    links,
                }
            })
            .collect();

        log::debug!(
            "built {}x{} cell graph: {} blocked, {} teleport links",
            size.x,
            size.y,
            blocked.len(),
            teleports
        );

        Ok(Self { size, cells })
    }

    #[inline]
    pub fn size_x(&self) -> i32 {
        self.size.x
    }

    #[inline]
    pub fn size_y(&self) -> i32 {
        self.size.y
    }

    /// Logical dimensions (`size_x`, `size_y`).
    #[inline]
    pub fn size(&self) -> Point {
        self.size
    }

    /// Number of cells.
    #[inline]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Always false for a built graph.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Handle of the cell at `p`, or `None` outside the grid.
    #[inline]
    pub fn id(&self, p: Point) -> Option<CellId> {
        if p.x < 0 || p.y < 0 || p.x >= self.size.x || p.y >= self.size.y {
            return None;
        }
        Some(CellId((p.y * self.size.x + p.x) as usize))
    }

    /// The cell at `p`, or `None` outside the grid.
    #[inline]
    pub fn cell(&self, p: Point) -> Option<&LogicalCell> {
        self.id(p).map(|id| &self.cells[id.0])
    }

    /// The cell at logical (`x`, `y`).
    #[inline]
    pub fn lookup_cell(&self, x: i32, y: i32) -> Option<&LogicalCell> {
        self.cell(Point::new(x, y))
    }

    /// Resolve a handle.
    ///
    /// # Panics
    ///
    /// Panics if `id` came from a larger graph.
    #[inline]
    pub fn get(&self, id: CellId) -> &LogicalCell {
        &self.cells[id.0]
    }

    /// The neighbor of `cell` in direction `dir`, if linked.
    #[inline]
    pub fn neighbor(&self, cell: &LogicalCell, dir: Direction) -> Option<&LogicalCell> {
        cell.link(dir).map(|id| self.get(id))
    }

    /// Whether the cell at `p` was blocked at build time.
    pub fn is_blocked(&self, p: Point) -> bool {
        self.cell(p).is_some_and(LogicalCell::is_blocked)
    }

    /// All cells in row-major order, bottom row first.
    pub fn cells(&self) -> std::slice::Iter<'_, LogicalCell> {
        self.cells.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::{GATE, NO_GATES, gated_test_map};
    use hue_core::ColorGrid;

    fn link_pos(g: &CellGraph, p: Point, dir: Direction) -> Option<Point> {
        let cell = g.cell(p).unwrap();
        g.neighbor(cell, dir).map(LogicalCell::pos)
    }

    #[test]
    fn dimensions_are_half_the_tile_bounds() {
        let g = gated_test_map();
        assert_eq!(g.size(), Point::new(4, 4));
        assert_eq!(g.size_x(), 4);
        assert_eq!(g.size_y(), 4);
        assert_eq!(g.len(), 16);
        assert_eq!(g.lookup_cell(3, 3).map(LogicalCell::pos), Some(Point::new(3, 3)));
        assert!(g.lookup_cell(4, 0).is_none());
        assert!(g.lookup_cell(0, -1).is_none());
    }

    #[test]
    fn adjacent_matches_link_directly() {
        let g = gated_test_map();
        let o = Point::new(0, 0);
        assert_eq!(link_pos(&g, o, Direction::Top), Some(Point::new(0, 1)));
        assert_eq!(link_pos(&g, o, Direction::Right), Some(Point::new(1, 0)));
        assert_eq!(link_pos(&g, o, Direction::Left), None);
        assert_eq!(link_pos(&g, o, Direction::Bottom), None);
    }

    #[test]
    fn distant_matches_teleport_over_other_colors() {
        let g = gated_test_map();
        // Green column 1 jumps over the red block.
        assert_eq!(
            link_pos(&g, Point::new(1, 0), Direction::Top),
            Some(Point::new(1, 3))
        );
        // Red cells see each other across the gate.
        assert_eq!(
            link_pos(&g, Point::new(1, 1), Direction::Right),
            Some(Point::new(3, 1))
        );
        assert_eq!(
            link_pos(&g, Point::new(3, 1), Direction::Left),
            Some(Point::new(1, 1))
        );
        // A red cell surrounded by green has nothing below or beside it.
        assert_eq!(link_pos(&g, Point::new(1, 1), Direction::Left), None);
        assert_eq!(link_pos(&g, Point::new(1, 1), Direction::Bottom), None);
    }

    #[test]
    fn gate_has_no_links_and_is_skipped_by_scans() {
        let g = gated_test_map();
        let gate = g.cell(GATE).unwrap();
        assert!(gate.is_blocked());
        assert!(g.is_blocked(GATE));
        assert_eq!(gate.links().count(), 0);

        assert_eq!(
            link_pos(&g, Point::new(2, 0), Direction::Top),
            Some(Point::new(2, 2))
        );
        assert_eq!(
            link_pos(&g, Point::new(2, 2), Direction::Bottom),
            Some(Point::new(2, 0))
        );
        for cell in g.cells() {
            assert!(cell.links().all(|id| g.get(id).pos() != GATE));
        }
    }

    #[test]
    fn two_blocked_cells_never_match_each_other() {
        let tiles = ColorGrid::new(Range::new(0, 0, 6, 2), 'G');
        let g = CellGraph::build(&tiles, [Point::new(0, 0), Point::new(1, 0)]).unwrap();
        assert_eq!(g.lookup_cell(0, 0).unwrap().links().count(), 0);
        assert_eq!(g.lookup_cell(1, 0).unwrap().links().count(), 0);
        assert_eq!(
            link_pos(&g, Point::new(2, 0), Direction::Left),
            None
        );
    }

    #[test]
    fn any_shared_quadrant_is_a_match() {
        // Cell (0,0) is all A; cell (2,0) has a single A quadrant.
        let tiles = ColorGrid::parse(
            "\
AABBBA
AABBBB",
        )
        .unwrap();
        let g = CellGraph::build(&tiles, NO_GATES).unwrap();
        assert_eq!(
            link_pos(&g, Point::new(0, 0), Direction::Right),
            Some(Point::new(2, 0))
        );
        assert_eq!(
            link_pos(&g, Point::new(1, 0), Direction::Right),
            Some(Point::new(2, 0))
        );
    }

    #[test]
    fn offset_bounds_use_their_minimum_corner() {
        let bounds = Range::new(-3, 5, 1, 7);
        let tiles = ColorGrid::from_fn(bounds, |p| if p.x < -1 { 'A' } else { 'B' });
        let g = CellGraph::build(&tiles, NO_GATES).unwrap();
        assert_eq!(g.size(), Point::new(2, 1));
        assert_eq!(link_pos(&g, Point::new(0, 0), Direction::Right), None);
    }

    #[test]
    fn blocked_outside_grid_is_ignored() {
        let tiles = ColorGrid::new(Range::new(0, 0, 4, 4), 'G');
        let g = CellGraph::build(&tiles, [Point::new(9, 9)]).unwrap();
        assert!(g.cells().all(|c| !c.is_blocked()));
    }

    #[test]
    fn malformed_bounds_fail_fast() {
        let odd = ColorGrid::new(Range::new(0, 0, 5, 4), 'G');
        assert_eq!(
            CellGraph::build(&odd, NO_GATES).unwrap_err(),
            GraphError::OddBounds(Range::new(0, 0, 5, 4))
        );

        let empty = ColorGrid::new(Range::default(), 'G');
        let err = CellGraph::build(&empty, NO_GATES).unwrap_err();
        assert_eq!(err, GraphError::EmptyBounds(Range::default()));
        assert!(err.to_string().contains("empty"));
    }

    #[test]
    fn cells_compare_by_position() {
        let a = gated_test_map();
        let b = CellGraph::build(&ColorGrid::new(Range::new(0, 0, 8, 8), 'X'), NO_GATES).unwrap();
        assert_eq!(a.lookup_cell(1, 2), b.lookup_cell(1, 2));
        assert_ne!(a.lookup_cell(1, 2), a.lookup_cell(2, 1));
    }
}
