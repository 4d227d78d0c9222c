//! Threat wavefront: per-node hop distance to the nearest threat.

use std::collections::VecDeque;

use egress_core::Point;

use crate::graph::{Graph, NodeId, slot};

/// Per-node minimum graph-hop distance to the nearest threat.
///
/// `None` means the node is unreachable from every threat — including the
/// case of an empty threat set, where every node is unreachable.
#[derive(Debug, Clone)]
pub struct SafetyField {
    dist: Vec<Option<i32>>,
}

impl SafetyField {
    /// Propagate a breadth-first wavefront from every threat and keep, per
    /// node, the minimum hop distance over all sources.
    ///
    /// Each threat runs its own BFS with its own visited set, so the result
    /// is exact regardless of the order threats are processed. A threat
    /// coordinate that does not map to a node is skipped with a warning and
    /// contributes nothing.
    pub fn compute(graph: &Graph, threats: &[Point]) -> Self {
        let n = graph.len();
        let mut dist: Vec<Option<i32>> = vec![None; n];

        // Visit stamps instead of a fresh visited set per source.
        let mut seen = vec![0u32; n];
        let mut queue: VecDeque<(NodeId, i32)> = VecDeque::new();

        for (i, &threat) in threats.iter().enumerate() {
            let Some(src) = graph.id_at(threat) else {
                log::warn!("threat at {threat} does not map to a free cell; skipping");
                continue;
            };
            let stamp = i as u32 + 1;

            queue.clear();
            queue.push_back((src, 0));
            seen[slot(src)] = stamp;

            while let Some((id, hops)) = queue.pop_front() {
                let si = slot(id);
                if dist[si].is_none_or(|d| hops < d) {
                    dist[si] = Some(hops);
                }
                for &nb in &graph.nodes[si].neighbors {
                    let ni = slot(nb);
                    if seen[ni] != stamp {
                        seen[ni] = stamp;
                        queue.push_back((nb, hops + 1));
                    }
                }
            }
        }

        Self { dist }
    }

    /// Hop distance from `id` to its nearest threat, or `None` if no threat
    /// reaches it (or the id is unknown).
    pub fn get(&self, id: NodeId) -> Option<i32> {
        *self.dist.get(id.0.checked_sub(1)? as usize)?
    }

    /// Number of nodes the field covers.
    #[inline]
    pub fn len(&self) -> usize {
        self.dist.len()
    }

    /// Whether the field covers no nodes.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.dist.is_empty()
    }
}
