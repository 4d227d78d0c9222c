//! Graph construction: node identities, adjacency and the exit field.

use std::fmt;

use egress_core::{Point, Range};

use crate::distance::manhattan;
use crate::error::Error;
use crate::floor::FloorPlan;

/// Identity of a traversable cell: dense integers `1..=N`, assigned in
/// row-major scan order over free cells. `0` is never a valid id (the
/// per-cell index grid uses it for blocked cells).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NodeId(pub u32);

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A traversable cell: identity, coordinate, exit distance and adjacency.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Node {
    pub id: NodeId,
    pub pos: Point,
    /// Manhattan distance to the nearest exit, ignoring obstacles.
    /// Zero iff this node's coordinate is an exit.
    pub d_exit: i32,
    /// Ids of the free cardinal neighbours (up, right, down, left).
    pub neighbors: Vec<NodeId>,
}

/// The traversability graph over a floor plan.
///
/// Node ids are dense and stable once built. Adjacency is symmetric by
/// construction: an edge exists exactly when both cells are free, so each
/// endpoint lists the other.
#[derive(Debug, Clone)]
pub struct Graph {
    pub(crate) bounds: Range,
    pub(crate) nodes: Vec<Node>,
    /// Per-cell node id in row-major order; 0 marks a blocked cell.
    pub(crate) cells: Vec<u32>,
    pub(crate) exits: Vec<Point>,
}

/// Index of a node's slot in id order.
#[inline]
pub(crate) fn slot(id: NodeId) -> usize {
    id.0 as usize - 1
}

impl Graph {
    /// Build the graph over `plan` with the given exit coordinates.
    ///
    /// Free cells are numbered in row-major scan order starting at 1;
    /// blocked cells are skipped and never numbered. Every exit must lie on
    /// a free cell of the floor.
    pub fn build(plan: &FloorPlan, exits: &[Point]) -> Result<Self, Error> {
        let bounds = plan.bounds();
        for &e in exits {
            if !bounds.contains(e) {
                return Err(Error::ExitOutOfBounds(e));
            }
            if !plan.is_free(e) {
                return Err(Error::ExitBlocked(e));
            }
        }

        let mut cells = vec![0u32; bounds.len()];
        let mut nodes = Vec::new();
        for p in bounds {
            if plan.is_free(p) {
                let id = NodeId(nodes.len() as u32 + 1);
                cells[(p.y * bounds.width() + p.x) as usize] = id.0;
                nodes.push(Node {
                    id,
                    pos: p,
                    d_exit: 0,
                    neighbors: Vec::new(),
                });
            }
        }

        let mut graph = Self {
            bounds,
            nodes,
            cells,
            exits: exits.to_vec(),
        };
        for i in 0..graph.nodes.len() {
            let pos = graph.nodes[i].pos;
            let mut neighbors = Vec::with_capacity(4);
            for q in pos.neighbors_4() {
                if let Some(id) = graph.id_at(q) {
                    neighbors.push(id);
                }
            }
            let d_exit = exits
                .iter()
                .map(|&e| manhattan(pos, e))
                .min()
                .unwrap_or(i32::MAX);
            let node = &mut graph.nodes[i];
            node.neighbors = neighbors;
            node.d_exit = d_exit;
        }
        Ok(graph)
    }

    /// Number of nodes (free cells).
    #[inline]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Whether the graph has no nodes at all.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// The floor rectangle this graph was built over.
    #[inline]
    pub fn bounds(&self) -> Range {
        self.bounds
    }

    /// All nodes in id order.
    #[inline]
    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    /// The exit coordinates the graph was built with.
    #[inline]
    pub fn exits(&self) -> &[Point] {
        &self.exits
    }

    /// Look up a node by id.
    pub fn node(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id.0.checked_sub(1)? as usize)
    }

    /// The node id at a coordinate, or `None` for blocked or out-of-floor
    /// cells.
    pub fn id_at(&self, p: Point) -> Option<NodeId> {
        if !self.bounds.contains(p) {
            return None;
        }
        match self.cells[(p.y * self.bounds.width() + p.x) as usize] {
            0 => None,
            id => Some(NodeId(id)),
        }
    }

    /// Map a route of node ids back to coordinates.
    pub fn route_points(&self, route: &[NodeId]) -> Vec<Point> {
        route.iter().map(|&id| self.nodes[slot(id)].pos).collect()
    }
}
