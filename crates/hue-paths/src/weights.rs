//! Single-source shortest-path tables over a [`CellGraph`].

use std::collections::BinaryHeap;

use hue_core::Point;

use crate::cellgraph::{CellGraph, CellId};
use crate::error::GraphError;
use crate::options::WeightOptions;
use crate::path::LogicalPath;

/// Sentinel distance for cells the last build did not reach.
pub const UNREACHABLE: i32 = i32::MAX;

/// A position with its distance from the source.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PathNode {
    pub pos: Point,
    pub cost: i32,
}

/// Heap entry ordered so `BinaryHeap` pops the smallest distance first,
/// lowest row-major index among equals.
#[derive(Clone, Copy, Eq, PartialEq)]
struct NodeRef {
    idx: usize,
    dist: i32,
}

impl Ord for NodeRef {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        other
            .dist
            .cmp(&self.dist)
            .then_with(|| other.idx.cmp(&self.idx))
    }
}

impl PartialOrd for NodeRef {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

/// Distances and shortest-path predecessors from one source cell to every
/// cell of a [`CellGraph`].
///
/// Every hop along a neighbor link costs one, teleport or not. The table is
/// never updated in place: when the origin or the topology changes, build a
/// new one.
#[derive(Debug, Clone)]
pub struct WeightGraph<'g> {
    graph: &'g CellGraph,
    source: CellId,
    options: WeightOptions,
    distances: Vec<i32>,
    parents: Vec<Option<CellId>>,
}

impl<'g> WeightGraph<'g> {
    /// Run Dijkstra from `source` over `graph`.
    ///
    /// With a non-zero `options.max_distance`, cells farther than that many
    /// hops are left unreached; a negative ceiling reaches only the source. Without `options.allow_teleport`, links to
    /// non-adjacent cells are ignored.
    pub fn build(
        graph: &'g CellGraph,
        source: Point,
        options: WeightOptions,
    ) -> Result<Self, GraphError> {
        let source_id = graph.id(source).ok_or(GraphError::SourceOutOfGraph {
            source,
            size: graph.size(),
        })?;

        let len = graph.len();
        let mut distances = vec![UNREACHABLE; len];
        let mut parents: Vec<Option<CellId>> = vec![None; len];
        let mut settled = vec![false; len];

        distances[source_id.index()] = 0;
        let mut open = BinaryHeap::new();
        open.push(NodeRef {
            idx: source_id.index(),
            dist: 0,
        });

        while let Some(NodeRef { idx: ci, dist }) = open.pop() {
            if settled[ci] {
                continue;
            }
            settled[ci] = true;

            if !options.can_expand(dist) {
                continue;
            }

            let current = graph.get(CellId::from_index(ci));
            for link in current.links() {
                let ni = link.index();
                if settled[ni] {
                    continue;
                }
                if !options.allow_teleport && !current.pos().is_adjacent(graph.get(link).pos()) {
                    continue;
                }
                let tentative = dist + 1;
                if tentative < distances[ni] {
                    distances[ni] = tentative;
                    parents[ni] = Some(CellId::from_index(ci));
                    open.push(NodeRef {
                        idx: ni,
                        dist: tentative,
                    });
                }
            }
        }

        log::debug!(
            "weight graph from {source}: {} of {len} cells reachable (max {}, teleport {})",
            distances.iter().filter(|&&d| d != UNREACHABLE).count(),
            options.max_distance,
            options.allow_teleport
        );

        Ok(Self {
            graph,
            source: source_id,
            options,
            distances,
            parents,
        })
    }

    /// The cell graph this table was built from.
    pub fn graph(&self) -> &'g CellGraph {
        self.graph
    }

    pub fn source(&self) -> Point {
        self.graph.get(self.source).pos()
    }

    pub fn options(&self) -> WeightOptions {
        self.options
    }

    /// Hop count from the source to `target`, or `None` when it is
    /// unreachable, beyond the distance ceiling, or outside the graph.
    pub fn lookup_distance(&self, target: Point) -> Option<i32> {
        let id = self.graph.id(target)?;
        match self.distances[id.index()] {
            UNREACHABLE => None,
            d => Some(d),
        }
    }

    /// A shortest path from the source to `target`, both included, or
    /// `None` when `target` is not accessible.
    ///
    /// Among several shortest paths the one returned is fixed for a given
    /// graph and source, but callers should rely only on its length.
    pub fn lookup_shortest_path(&self, target: Point) -> Option<LogicalPath> {
        let id = self.graph.id(target)?;
        if self.distances[id.index()] == UNREACHABLE {
            return None;
        }

        let mut points = Vec::with_capacity(self.distances[id.index()] as usize + 1);
        let mut cur = Some(id);
        while let Some(c) = cur {
            points.push(self.graph.get(c).pos());
            cur = self.parents[c.index()];
        }
        points.reverse();
        Some(points.into())
    }

    /// Distance to `target` or [`UNREACHABLE`].
    pub fn distance_at(&self, target: Point) -> i32 {
        self.lookup_distance(target).unwrap_or(UNREACHABLE)
    }

    /// Every accessible cell with its distance, in row-major order.
    pub fn reachable(&self) -> impl Iterator<Item = PathNode> + '_ {
        self.graph
            .cells()
            .zip(&self.distances)
            .filter(|&(_, &d)| d != UNREACHABLE)
            .map(|(cell, &cost)| PathNode {
                pos: cell.pos(),
                cost,
            })
    }
}
