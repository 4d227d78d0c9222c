//! Cost models for the escape searches.

use std::cmp::Ordering;

use crate::graph::{Graph, NodeId, slot};
use crate::safety::SafetyField;
use crate::search::CostModel;

/// Fewest-hops model: every step costs 1, expansion biased by exit distance.
///
/// The exit-distance estimate is a straight-line bound that ignores
/// obstacles, so the returned route is shortest-in-practice rather than
/// provably optimal on obstacle-laden floors.
pub struct UniformCost<'a> {
    graph: &'a Graph,
}

impl<'a> UniformCost<'a> {
    pub fn new(graph: &'a Graph) -> Self {
        Self { graph }
    }
}

impl CostModel for UniformCost<'_> {
    fn edge_cost(&self, _from: NodeId, _to: NodeId) -> f64 {
        1.0
    }

    fn estimate(&self, node: NodeId) -> f64 {
        f64::from(self.graph.nodes[slot(node)].d_exit)
    }
}

/// Threat-averse model: step costs depend on how the step changes threat
/// distance and exit distance.
///
/// A step that gets strictly safer while closing in on an exit is free;
/// losing safety costs more, and losing safety while also moving away from
/// the exits costs the most. The estimate rewards nodes that are close to
/// an exit and far from threats at the same time; it may be negative and is
/// a greedy bias, not an admissible bound.
pub struct SafetyAware<'a> {
    graph: &'a Graph,
    safety: &'a SafetyField,
}

impl<'a> SafetyAware<'a> {
    pub fn new(graph: &'a Graph, safety: &'a SafetyField) -> Self {
        Self { graph, safety }
    }
}

/// Order two threat distances, with "unreachable" greater than any finite
/// distance and equal to itself.
fn cmp_safety(a: Option<i32>, b: Option<i32>) -> Ordering {
    match (a, b) {
        (None, None) => Ordering::Equal,
        (None, Some(_)) => Ordering::Greater,
        (Some(_), None) => Ordering::Less,
        (Some(x), Some(y)) => x.cmp(&y),
    }
}

impl CostModel for SafetyAware<'_> {
    fn edge_cost(&self, from: NodeId, to: NodeId) -> f64 {
        let safety = cmp_safety(self.safety.get(to), self.safety.get(from));
        let exit = self.graph.nodes[slot(to)]
            .d_exit
            .cmp(&self.graph.nodes[slot(from)].d_exit);
        // One exhaustive match over the sign pattern of the step: Greater
        // safety means farther from the nearest threat, Less exit distance
        // means closer to an exit.
        match (safety, exit) {
            (Ordering::Greater, Ordering::Less) => 0.0,
            (Ordering::Greater | Ordering::Equal, Ordering::Greater | Ordering::Equal) => 1.0,
            (Ordering::Less, Ordering::Less | Ordering::Equal) => 1.5,
            (Ordering::Less, Ordering::Greater) => 2.0,
            // Equally safe but strictly closer to an exit takes the full
            // penalty.
            (Ordering::Equal, Ordering::Less) => 2.0,
        }
    }

    fn estimate(&self, node: NodeId) -> f64 {
        // An unreachable node ranks as safe as a hop distance of N, a bound
        // no reachable node can exceed, keeping priorities finite.
        let safety = self
            .safety
            .get(node)
            .unwrap_or(self.graph.len() as i32);
        f64::from(self.graph.nodes[slot(node)].d_exit - safety)
    }
}
