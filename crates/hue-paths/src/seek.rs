//! Goal selection for agents moving over a [`WeightGraph`].
//!
//! An agent picks the closest accessible goal and takes one step along the
//! shortest path to it. The AI opponent rebuilds its table from scratch on
//! every tick ([`plan_step`]) so that topology edits are picked up
//! immediately.

use hue_core::Point;

use crate::cellgraph::CellGraph;
use crate::error::GraphError;
use crate::options::WeightOptions;
use crate::weights::{PathNode, WeightGraph};

/// The accessible candidate with the smallest distance. The earliest
/// candidate wins ties.
pub fn nearest_reachable(
    weights: &WeightGraph<'_>,
    candidates: impl IntoIterator<Item = Point>,
) -> Option<PathNode> {
    let mut best: Option<PathNode> = None;
    for pos in candidates {
        let Some(cost) = weights.lookup_distance(pos) else {
            continue;
        };
        if best.is_none_or(|b| cost < b.cost) {
            best = Some(PathNode { pos, cost });
        }
    }
    best
}

/// The next cell on the shortest path to `goal`, or `None` if `goal` is
/// inaccessible or is the source itself.
pub fn step_toward(weights: &WeightGraph<'_>, goal: Point) -> Option<Point> {
    weights.lookup_shortest_path(goal)?.next_step()
}

/// One tick of goal seeking from `from`: build a fresh table, choose the
/// nearest accessible goal and return the single step toward it.
pub fn plan_step(
    graph: &CellGraph,
    from: Point,
    goals: impl IntoIterator<Item = Point>,
    options: WeightOptions,
) -> Result<Option<Point>, GraphError> {
    let weights = WeightGraph::build(graph, from, options)?;
    let Some(goal) = nearest_reachable(&weights, goals) else {
        log::trace!("no accessible goal from {from}");
        return Ok(None);
    };
    Ok(step_toward(&weights, goal.pos))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::{GATE, NO_GATES, gated_test_map};

    fn p(x: i32, y: i32) -> Point {
        Point::new(x, y)
    }

    #[test]
    fn nearest_skips_inaccessible_goals() {
        let g = gated_test_map();
        let w = WeightGraph::build(&g, p(0, 0), WeightOptions::SEEKER).unwrap();
        // The gate and the red cells cannot be reached at all.
        let best = nearest_reachable(&w, [GATE, p(1, 1), p(2, 2), p(0, 2)]).unwrap();
        assert_eq!(best, PathNode { pos: p(0, 2), cost: 2 });
        assert!(nearest_reachable(&w, [GATE, p(3, 1)]).is_none());
        assert!(nearest_reachable(&w, NO_GATES).is_none());
    }

    #[test]
    fn nearest_keeps_first_of_equal_distances() {
        let g = gated_test_map();
        let w = WeightGraph::build(&g, p(0, 0), WeightOptions::SEEKER).unwrap();
        let best = nearest_reachable(&w, [p(2, 0), p(0, 2)]).unwrap();
        assert_eq!(best.pos, p(2, 0));
    }

    #[test]
    fn step_toward_is_the_second_path_point() {
        let g = gated_test_map();
        let w = WeightGraph::build(&g, p(0, 0), WeightOptions::default()).unwrap();
        assert_eq!(step_toward(&w, p(2, 2)), Some(p(0, 1)));
        assert_eq!(step_toward(&w, p(0, 0)), None);
        assert_eq!(step_toward(&w, GATE), None);
    }

    #[test]
    fn plan_step_walks_to_the_goal() {
        let g = gated_test_map();
        let goal = p(2, 2);
        let mut at = p(0, 0);
        let mut ticks = 0;
        while at != goal {
            at = plan_step(&g, at, [goal], WeightOptions::SEEKER)
                .unwrap()
                .unwrap();
            ticks += 1;
            assert!(ticks <= 3);
        }
        assert_eq!(ticks, 3);
        assert_eq!(plan_step(&g, at, [goal], WeightOptions::SEEKER), Ok(None));
    }

    #[test]
    fn plan_step_rejects_foreign_origin() {
        let g = gated_test_map();
        assert!(plan_step(&g, p(-1, 0), [p(0, 0)], WeightOptions::SEEKER).is_err());
    }
}
