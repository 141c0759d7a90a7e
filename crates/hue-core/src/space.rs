//! Conversion between raw tile space and logical space.
//!
//! A logical cell covers a square block of [`LOGICAL_CELL_SIZE`] ×
//! [`LOGICAL_CELL_SIZE`] raw tiles, anchored at the minimum corner of the
//! tile bounds. Logical (0, 0) is the bottom-left block.

use crate::geom::{Point, Range};

/// Width and height, in raw tiles, of one logical cell.
pub const LOGICAL_CELL_SIZE: i32 = 2;

/// Raw tile at the bottom-left corner of logical cell `logical`.
#[inline]
pub fn grid_from_logical(logical: Point, bounds: Range) -> Point {
    logical * LOGICAL_CELL_SIZE + bounds.min
}

/// Logical cell containing raw tile `grid`, or `None` if the tile lies
/// outside `bounds`.
#[inline]
pub fn logical_from_grid(grid: Point, bounds: Range) -> Option<Point> {
    if !bounds.contains(grid) {
        return None;
    }
    Some((grid - bounds.min) / LOGICAL_CELL_SIZE)
}

/// The four raw tiles of a logical cell in quadrant order: bottom-left,
/// bottom-right, top-left, top-right.
#[inline]
pub fn tile_block(logical: Point, bounds: Range) -> [Point; 4] {
    let base = grid_from_logical(logical, bounds);
    [
        base,
        base.shift(1, 0),
        base.shift(0, 1),
        base.shift(1, 1),
    ]
}

/// Logical grid dimensions for a tile rectangle, or `None` when either side
/// is not a positive multiple of [`LOGICAL_CELL_SIZE`].
#[inline]
pub fn logical_size(bounds: Range) -> Option<Point> {
    let size = bounds.size();
    let fits = |n: i32| n > 0 && n % LOGICAL_CELL_SIZE == 0;
    if fits(size.x) && fits(size.y) {
        Some(size / LOGICAL_CELL_SIZE)
    } else {
        None
    }
}
