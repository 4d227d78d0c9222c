//! Best-first search toward the exits, generic over a cost model.

use std::collections::BinaryHeap;

use egress_core::Point;
use ordered_float::OrderedFloat;

use crate::error::Error;
use crate::graph::{Graph, NodeId, slot};

/// An ordered node sequence from the start to an exit, inclusive.
pub type Route = Vec<NodeId>;

/// Edge costs and priority estimates for [`escape_route`].
///
/// `edge_cost` is charged for every traversal step; `estimate` biases the
/// expansion order and may be negative. Implementations typically borrow the
/// graph (and any fields they need) for the duration of one search.
pub trait CostModel {
    /// Cost of stepping from `from` to its adjacent `to`.
    fn edge_cost(&self, from: NodeId, to: NodeId) -> f64;

    /// Priority bias added to a node's accumulated cost.
    fn estimate(&self, node: NodeId) -> f64;
}

/// Entry in the open list, ordered by priority `f` with node id as a
/// deterministic tie-break.
#[derive(Clone, Copy, PartialEq, Eq)]
struct OpenEntry {
    f: OrderedFloat<f64>,
    id: NodeId,
}

impl Ord for OpenEntry {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        // Reverse so BinaryHeap (max-heap) pops the smallest f, then the
        // smallest id.
        other.f.cmp(&self.f).then(other.id.cmp(&self.id))
    }
}

impl PartialOrd for OpenEntry {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

/// Best-first search from `start` to the nearest goal (`d_exit == 0`).
///
/// Expands nodes in order of accumulated cost plus `model.estimate`, ties
/// broken by node id. When a cheaper route to an already-queued node is
/// found, the node is re-pushed and the stale heap entry is skipped on pop,
/// so the improved cost always takes effect.
///
/// Returns `Ok(None)` when the open list empties without reaching a goal —
/// the normal outcome when no exit is reachable from `start`'s connected
/// component. Cost and predecessor scratch live in per-call buffers, so
/// repeated searches over the same graph are independent.
pub fn escape_route<M: CostModel>(
    graph: &Graph,
    model: &M,
    start: Point,
) -> Result<Option<Route>, Error> {
    if !graph.bounds().contains(start) {
        return Err(Error::StartOutOfBounds(start));
    }
    let Some(start_id) = graph.id_at(start) else {
        return Err(Error::StartBlocked(start));
    };

    let n = graph.len();
    let mut g = vec![f64::INFINITY; n];
    let mut parent: Vec<Option<NodeId>> = vec![None; n];
    let mut in_open = vec![false; n];

    let mut open = BinaryHeap::new();
    g[slot(start_id)] = 0.0;
    in_open[slot(start_id)] = true;
    open.push(OpenEntry {
        f: OrderedFloat(model.estimate(start_id)),
        id: start_id,
    });

    while let Some(OpenEntry { id: current, .. }) = open.pop() {
        let ci = slot(current);
        // Stale entry: the node was already expanded at a better priority.
        if !in_open[ci] {
            continue;
        }
        in_open[ci] = false;

        let node = &graph.nodes[ci];
        if node.d_exit == 0 {
            return Ok(Some(reconstruct(current, &parent)));
        }

        let current_g = g[ci];
        for &nb in &node.neighbors {
            let ni = slot(nb);
            let candidate = current_g + model.edge_cost(current, nb);
            if candidate < g[ni] {
                g[ni] = candidate;
                parent[ni] = Some(current);
                in_open[ni] = true;
                open.push(OpenEntry {
                    f: OrderedFloat(candidate + model.estimate(nb)),
                    id: nb,
                });
            }
        }
    }

    Ok(None)
}

/// Follow predecessor links back from the goal and reverse into
/// start-to-goal order.
fn reconstruct(goal: NodeId, parent: &[Option<NodeId>]) -> Route {
    let mut route = Vec::new();
    let mut cur = Some(goal);
    while let Some(id) = cur {
        route.push(id);
        cur = parent[slot(id)];
    }
    route.reverse();
    route
}
